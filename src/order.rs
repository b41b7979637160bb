//! Ordering keys and sort direction.
//!
//! Every algorithm decides order through [`OrderingKey::compare`] and
//! [`Direction::precedes`]. Nothing compares elements directly.

use std::cmp::Ordering;

use serde::Serialize;

/// Comparison sense applied uniformly to every pairwise decision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Map a "reverse order" flag onto a direction
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    pub fn is_reversed(self) -> bool {
        self == Direction::Descending
    }

    /// True when `ordering` (of `a` against `b`) means `a` must strictly come
    /// before `b`. Equal keys never precede each other.
    #[inline]
    pub fn precedes(self, ordering: Ordering) -> bool {
        match self {
            Direction::Ascending => ordering == Ordering::Less,
            Direction::Descending => ordering == Ordering::Greater,
        }
    }

    /// True when `a`, `b` appear in a valid relative order for this direction
    #[inline]
    pub fn in_order(self, ordering: Ordering) -> bool {
        !self.precedes(ordering.reverse())
    }
}

/// Projection deciding how two elements order against each other.
///
/// Implemented by [`Identity`] for any `T: Ord` and by every closure
/// `Fn(&T) -> U` where `U: Ord`.
pub trait OrderingKey<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The identity projection: elements are compared by their own `Ord`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Shared, stateless identity key
pub const IDENTITY: Identity = Identity;

impl<T: Ord + ?Sized> OrderingKey<T> for Identity {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, U, F> OrderingKey<T> for F
where
    F: Fn(&T) -> U,
    U: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a).cmp(&self(b))
    }
}

/// Check that `data` is ordered under `key` and `direction`
pub fn is_sorted_by<T, K>(data: &[T], key: &K, direction: Direction) -> bool
where
    K: OrderingKey<T> + ?Sized,
{
    data.windows(2).all(|w| direction.in_order(key.compare(&w[0], &w[1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedes_is_strict() {
        assert!(Direction::Ascending.precedes(Ordering::Less));
        assert!(!Direction::Ascending.precedes(Ordering::Equal));
        assert!(!Direction::Ascending.precedes(Ordering::Greater));

        assert!(Direction::Descending.precedes(Ordering::Greater));
        assert!(!Direction::Descending.precedes(Ordering::Equal));
        assert!(!Direction::Descending.precedes(Ordering::Less));
    }

    #[test]
    fn test_from_reverse() {
        assert_eq!(Direction::from_reverse(false), Direction::Ascending);
        assert_eq!(Direction::from_reverse(true), Direction::Descending);
        assert!(Direction::Descending.is_reversed());
    }

    #[test]
    fn test_closure_key() {
        let by_abs = |x: &i32| x.abs();
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(IDENTITY.compare(&-5, &3), Ordering::Less);
    }

    #[test]
    fn test_is_sorted_by() {
        assert!(is_sorted_by(&[1, 2, 2, 3], &IDENTITY, Direction::Ascending));
        assert!(!is_sorted_by(&[1, 3, 2], &IDENTITY, Direction::Ascending));
        assert!(is_sorted_by(&[3, 2, 2, 1], &IDENTITY, Direction::Descending));
        assert!(is_sorted_by::<i32, _>(&[], &IDENTITY, Direction::Descending));
    }
}

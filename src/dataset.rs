//! Synthetic integer datasets with selectable shape.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::errors::SortBenchError;

/// Smallest generated value
pub const MIN_VALUE: i32 = 1;
/// Largest generated value
pub const MAX_VALUE: i32 = 100_000;

/// Distribution shape of a generated dataset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    #[default]
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
}

impl Shape {
    pub const ALL: [Shape; 4] =
        [Shape::Random, Shape::Sorted, Shape::ReverseSorted, Shape::NearlySorted];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Random => "Random",
            Shape::Sorted => "Sorted",
            Shape::ReverseSorted => "Reverse Sorted",
            Shape::NearlySorted => "Nearly Sorted",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = SortBenchError;

    /// Accepts "Reverse Sorted", "reverse-sorted" or "reverse_sorted", any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "random" => Ok(Shape::Random),
            "sorted" => Ok(Shape::Sorted),
            "reverse sorted" | "reversed" => Ok(Shape::ReverseSorted),
            "nearly sorted" => Ok(Shape::NearlySorted),
            _ => Err(SortBenchError::UnknownShape(s.to_string())),
        }
    }
}

/// Create a random number generator, optionally seeded for reproducibility.
///
/// With `None` the generator is seeded from OS entropy.
pub fn create_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(s) => Xoshiro256PlusPlus::seed_from_u64(s),
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

/// Generate `size` values drawn uniformly from `MIN_VALUE..=MAX_VALUE`, then
/// arranged according to `shape`.
///
/// `NearlySorted` sorts ascending and then applies `size / 10` transpositions
/// of uniformly chosen index pairs; a pair may name the same index twice.
pub fn generate_dataset<R: Rng + ?Sized>(size: usize, shape: Shape, rng: &mut R) -> Vec<i32> {
    let mut data: Vec<i32> = (0..size).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect();

    match shape {
        Shape::Random => {}
        Shape::Sorted => data.sort_unstable(),
        Shape::ReverseSorted => data.sort_unstable_by(|a, b| b.cmp(a)),
        Shape::NearlySorted => {
            data.sort_unstable();
            for _ in 0..size / 10 {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                data.swap(i, j);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_for_every_shape() {
        let mut rng = create_rng(Some(1));
        for shape in Shape::ALL {
            assert!(generate_dataset(0, shape, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_values_in_range() {
        let mut rng = create_rng(Some(7));
        let data = generate_dataset(5_000, Shape::Random, &mut rng);
        assert_eq!(data.len(), 5_000);
        assert!(data.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    }

    #[test]
    fn test_sorted_shapes() {
        let mut rng = create_rng(Some(12345));

        let sorted = generate_dataset(10, Shape::Sorted, &mut rng);
        assert_eq!(sorted.len(), 10);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let reverse = generate_dataset(1_000, Shape::ReverseSorted, &mut rng);
        assert!(reverse.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_nearly_sorted_is_a_light_perturbation() {
        let mut rng = create_rng(Some(99));
        let data = generate_dataset(1_000, Shape::NearlySorted, &mut rng);

        let mut sorted = data.clone();
        sorted.sort_unstable();
        let displaced = data.iter().zip(&sorted).filter(|(a, b)| a != b).count();
        // 100 transpositions move at most 200 positions
        assert!(displaced <= 200);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_dataset(100, Shape::Random, &mut create_rng(Some(42)));
        let b = generate_dataset(100, Shape::Random, &mut create_rng(Some(42)));
        let c = generate_dataset(100, Shape::Random, &mut create_rng(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shape_from_str() {
        assert_eq!("Reverse Sorted".parse::<Shape>(), Ok(Shape::ReverseSorted));
        assert_eq!("nearly-sorted".parse::<Shape>(), Ok(Shape::NearlySorted));
        assert_eq!("RANDOM".parse::<Shape>(), Ok(Shape::Random));
        assert!("zigzag".parse::<Shape>().is_err());
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>(), Ok(shape));
        }
    }
}

//! Deep memory footprint estimation.
//!
//! The footprint of a value is its inline size plus every byte it reaches
//! outside that inline storage: heap buffers, boxed children, and the
//! pointees of shared handles. Shared pointees (`Rc`, `Arc`) are identified
//! by address and counted once per traversal, which also makes reference
//! cycles terminate.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::mem::size_of;
use std::rc::{self, Rc};
use std::sync::Arc;

/// Values whose transitive memory footprint can be measured.
///
/// `heap_children` must return only bytes outside `size_of_val(self)`, and
/// must route every nested value through [`Sizer::measure`] (owned children
/// stored out of line) or its own `heap_children` (children stored inline).
pub trait DeepSize {
    /// Bytes occupied by the value itself
    fn shallow_size(&self) -> usize {
        std::mem::size_of_val(self)
    }

    /// Bytes reachable from the value but stored outside it
    fn heap_children(&self, _sizer: &mut Sizer) -> usize {
        0
    }
}

/// Traversal state: the set of shared identities already counted
#[derive(Debug, Default)]
pub struct Sizer {
    seen: HashSet<usize>,
}

impl Sizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full footprint of `value`
    pub fn measure<T: DeepSize + ?Sized>(&mut self, value: &T) -> usize {
        value.shallow_size() + value.heap_children(self)
    }

    /// Footprint of a shared allocation at `address`, or zero if it was
    /// already counted during this traversal.
    pub fn measure_shared<T: DeepSize + ?Sized>(
        &mut self,
        address: usize,
        header: usize,
        value: &T,
    ) -> usize {
        if !self.seen.insert(address) {
            return 0;
        }
        header + self.measure(value)
    }

    /// Number of distinct shared allocations counted so far
    pub fn shared_count(&self) -> usize {
        self.seen.len()
    }
}

/// Total footprint of `value` in bytes, counting each shared allocation once
pub fn deep_size_of<T: DeepSize + ?Sized>(value: &T) -> usize {
    Sizer::new().measure(value)
}

macro_rules! inline_only {
    ($($ty:ty),* $(,)?) => {
        $(impl DeepSize for $ty {})*
    };
}

inline_only!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl DeepSize for str {}

impl DeepSize for String {
    fn heap_children(&self, _sizer: &mut Sizer) -> usize {
        self.capacity()
    }
}

impl<T: DeepSize> DeepSize for [T] {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.iter().map(|item| item.heap_children(sizer)).sum()
    }
}

impl<T: DeepSize, const N: usize> DeepSize for [T; N] {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.as_slice().heap_children(sizer)
    }
}

impl<T: DeepSize> DeepSize for Vec<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        let spare = (self.capacity() - self.len()) * size_of::<T>();
        spare + self.iter().map(|item| sizer.measure(item)).sum::<usize>()
    }
}

impl<T: DeepSize + ?Sized> DeepSize for Box<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        sizer.measure(&**self)
    }
}

impl<T: DeepSize> DeepSize for Option<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.as_ref().map_or(0, |value| value.heap_children(sizer))
    }
}

impl<A: DeepSize, B: DeepSize> DeepSize for (A, B) {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.0.heap_children(sizer) + self.1.heap_children(sizer)
    }
}

impl<A: DeepSize, B: DeepSize, C: DeepSize> DeepSize for (A, B, C) {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.0.heap_children(sizer) + self.1.heap_children(sizer) + self.2.heap_children(sizer)
    }
}

impl<K: DeepSize, V: DeepSize, S> DeepSize for HashMap<K, V, S> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        let spare = (self.capacity() - self.len()) * size_of::<(K, V)>();
        spare + self.iter().map(|(k, v)| sizer.measure(k) + sizer.measure(v)).sum::<usize>()
    }
}

impl<K: DeepSize, V: DeepSize> DeepSize for BTreeMap<K, V> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.iter().map(|(k, v)| sizer.measure(k) + sizer.measure(v)).sum()
    }
}

impl<T: DeepSize> DeepSize for RefCell<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        // A value mutably borrowed elsewhere cannot be inspected
        self.try_borrow().map_or(0, |value| value.heap_children(sizer))
    }
}

impl<T: DeepSize> DeepSize for Rc<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        // Strong and weak counts live in the same allocation as the value
        let header = 2 * size_of::<usize>();
        sizer.measure_shared(Rc::as_ptr(self) as usize, header, &**self)
    }
}

impl<T> DeepSize for rc::Weak<T> {}

impl<T: DeepSize> DeepSize for Arc<T> {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        let header = 2 * size_of::<usize>();
        sizer.measure_shared(Arc::as_ptr(self) as usize, header, &**self)
    }
}

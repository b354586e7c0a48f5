//! `ElementId`: a strong, zero-cost handle for face-lattice elements
//!
//! Every element of the face lattice (vertex, edge, 2-face) is represented by
//! a unique, opaque identifier. `ElementId` wraps a nonzero `u64` to enforce
//! at compile- and runtime that 0 is reserved as an invalid or sentinel
//! value.
//!
//! Identifiers are allocated in three consecutive ranges: vertices `1..=n`,
//! then one id per edge, then one id per discovered face, each range strictly
//! increasing. The [`IdAllocator`] owns the monotonic counter; nothing infers
//! "next id" from the tail of a grown list.

use std::{fmt, num::NonZeroU64};

/// Opaque identifier of a face-lattice element.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU64`, so an `ElementId` has the same ABI
/// and alignment as a `u64` and `Option<ElementId>` is still 8 bytes.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct ElementId(NonZeroU64);

impl ElementId {
    /// Creates a new `ElementId` from a raw `u64` value.
    ///
    /// # Panics
    ///
    /// Panics if `raw == 0`. We reserve 0 as an invalid or sentinel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use discrete_curvature::topology::element::ElementId;
    /// let e = ElementId::new(1);
    /// assert_eq!(e.get(), 1);
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Self {
        ElementId(NonZeroU64::new(raw).expect("ElementId must be non-zero"))
    }

    /// Returns the inner `u64` value of this `ElementId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementId").field(&self.get()).finish()
    }
}

/// Prints the numeric id without any wrapper text.
impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Monotonic id source owned by the face-lattice builder.
///
/// Starts at 1 and never reuses or skips an id, so element ranges handed out
/// for vertices, edges and faces are consecutive and reproducible run-to-run.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Allocator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Hands out the next id.
    #[inline]
    pub fn alloc(&mut self) -> ElementId {
        self.next += 1;
        ElementId::new(self.next)
    }

    /// Id that the next call to [`alloc`](Self::alloc) will return.
    #[inline]
    pub fn peek(&self) -> u64 {
        self.next + 1
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `ElementId` has the same size as `u64`.
    use super::*;
    use static_assertions::assert_eq_size;

    // If this fails, our repr(transparent) guarantee is broken!
    assert_eq_size!(ElementId, u64);
    assert_eq_size!(Option<ElementId>, u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_panics() {
        assert!(std::panic::catch_unwind(|| ElementId::new(0)).is_err());
    }

    #[test]
    fn new_and_get() {
        let e = ElementId::new(42);
        assert_eq!(e.get(), 42);
    }

    #[test]
    fn debug_and_display() {
        let e = ElementId::new(7);
        assert_eq!(format!("{:?}", e), "ElementId(7)");
        assert_eq!(format!("{}", e), "7");
    }

    #[test]
    fn ordering_and_hash() {
        let a = ElementId::new(1);
        let b = ElementId::new(2);
        assert!(a < b);
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn allocator_is_monotonic_from_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.peek(), 1);
        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();
        assert_eq!((a.get(), b.get(), c.get()), (1, 2, 3));
        assert_eq!(ids.peek(), 4);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;
    #[test]
    fn json_roundtrip() {
        let e = ElementId::new(123);
        let s = serde_json::to_string(&e).unwrap();
        let e2: ElementId = serde_json::from_str(&s).unwrap();
        assert_eq!(e2, e);
    }
}

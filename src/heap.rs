//! Array-encoded binary max-heap primitives.
//!
//! The routines operate on anything implementing [`HeapSlots`], so the same sift logic drives
//! both the index-free heapsort (plain slices) and the indexed priority queue, whose `swap`
//! keeps its id→position map in step with every move.

/// Storage that the heap primitives can reorder.
pub trait HeapSlots {
    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Whether the entry at `a` has strictly higher priority than the entry at `b`.
    fn is_above(&self, a: usize, b: usize) -> bool;

    /// Exchanges the entries at `a` and `b`. Any bookkeeping tied to positions must be updated here.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T: PartialOrd> HeapSlots for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn is_above(&self, a: usize, b: usize) -> bool {
        self[a] > self[b]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

/// Restores the heap property at `start` within the inclusive range `[start, end]`.
///
/// Both child subtrees of `start` must already be heaps. The node is swapped with its larger
/// in-range child until no child exceeds it. On ties the left child wins. Returns the slot the
/// node came to rest in.
///
/// # Panics
/// If `start <= end` and `end` is not a valid slot.
pub fn sift_down<S: HeapSlots + ?Sized>(slots: &mut S, start: usize, end: usize) -> usize {
    assert!(
        start > end || end < slots.len(),
        "sift_down range end {} out of bounds for {} slots",
        end,
        slots.len()
    );

    let mut root = start;
    loop {
        let left = left_child_of(root);
        if left > end {
            break; // No children in range
        }
        let right = left + 1;

        // Find the best of root, left and right
        let mut best = root;
        if slots.is_above(left, best) {
            best = left;
        }
        if right <= end && slots.is_above(right, best) {
            best = right;
        }

        if best == root {
            break; // No child exceeds the node => heap property satisfied
        }

        slots.swap(root, best);
        root = best;
    }
    root
}

/// Moves the node at `idx` towards the root while its parent has strictly lower priority.
/// Returns the slot the node came to rest in.
///
/// # Panics
/// If `idx` is not a valid slot.
pub fn sift_up<S: HeapSlots + ?Sized>(slots: &mut S, mut idx: usize) -> usize {
    assert!(
        idx < slots.len(),
        "sift_up index {} out of bounds for {} slots",
        idx,
        slots.len()
    );

    while idx > 0 {
        let parent = parent_of(idx);
        if !slots.is_above(idx, parent) {
            break; // Parent has at least the node's priority
        }
        slots.swap(idx, parent);
        idx = parent;
    }
    idx
}

/// Turns arbitrary slots into a max-heap in O(n).
pub fn build_max_heap<S: HeapSlots + ?Sized>(slots: &mut S) {
    let len = slots.len();
    if len <= 1 {
        return;
    }

    // The last internal node is the parent of the last slot
    for start in (0..=parent_of(len - 1)).rev() {
        sift_down(slots, start, len - 1);
    }
}

/// Returns the first slot whose parent has strictly lower priority, if any.
pub fn first_violation<S: HeapSlots + ?Sized>(slots: &S) -> Option<usize> {
    (1..slots.len()).find(|&idx| slots.is_above(idx, parent_of(idx)))
}

/// Checks the max-heap property over all slots.
pub fn is_max_heap<S: HeapSlots + ?Sized>(slots: &S) -> bool {
    first_violation(slots).is_none()
}

/// Only defined for non-root slots (`idx > 0`).
#[inline(always)]
pub(crate) fn parent_of(idx: usize) -> usize {
    debug_assert!(idx > 0, "the root has no parent");
    (idx - 1) >> 1
}

#[inline(always)]
pub(crate) fn left_child_of(idx: usize) -> usize {
    (idx << 1) + 1
}

use crate::heap;

/// Sorts `a` in ascending order, in place.
///
/// Not stable: equal values may end up in a different relative order than in the input.
pub fn heapsort<T: PartialOrd>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }

    heap::build_max_heap(a);

    // [0, end] is a max-heap, (end, n) is the sorted tail
    for end in (1..n).rev() {
        a.swap(0, end); // Move current max behind the heap
        heap::sift_down(a, 0, end - 1);
    }
}

/// Moves the element at `from` so that it ends up at index `to`.
///
/// This is an extraction followed by a reinsertion, not a swap: every other
/// element keeps its relative order and the length is unchanged. Returns
/// `false` (and leaves `items` untouched) if either index is out of range or
/// both are equal.
///
/// # Examples
/// ```
/// use kanban_core::domain::reorder::array_move;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// assert!(array_move(&mut items, 0, 2));
/// assert_eq!(items, vec!['b', 'c', 'a', 'd']);
/// ```
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Index of the first element matching `pred`, for readability at call sites
pub(crate) fn index_of<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(pred)
}

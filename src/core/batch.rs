use std::num::NonZeroUsize;

/// Splits `items` into contiguous chunks of at most `max` elements, in order.
///
/// An empty input yields a single empty chunk, so an empty export still
/// produces one (header-only) label file.
pub fn chunk_orders<T>(items: &[T], max: NonZeroUsize) -> Vec<&[T]> {
    if items.is_empty() {
        return vec![items];
    }
    items.chunks(max.get()).collect()
}

//! Shared first-divergence comparison for ordering rules.

/// Position of the first element where `actual` differs from `expected`.
///
/// Only the first divergence matters: one misplaced entry shifts every
/// position after it.
pub(crate) fn first_divergence<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<usize> {
    actual.iter().zip(expected).position(|(a, e)| a != e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_mismatch() {
        assert_eq!(first_divergence(&["a", "c", "b"], &["a", "b", "c"]), Some(1));
    }

    #[test]
    fn identical_sequences() {
        assert_eq!(first_divergence(&["a", "b"], &["a", "b"]), None);
        assert_eq!(first_divergence::<&str>(&[], &[]), None);
    }
}

//! Best-option selection shared by both scoring surfaces.

/// Returns the element with the highest score.
///
/// # Algorithm
/// Linear scan; a candidate replaces the current best only when its score is
/// strictly greater, so ties keep the earlier element.
///
/// # Edge Cases
/// - Empty slice: `None`. The guided path never gets here with no options;
///   it redirects to Explore Options first.
pub fn select_best<T, S, F>(items: &[T], mut score: F) -> Option<&T>
where
    S: PartialOrd,
    F: FnMut(&T) -> S,
{
    let mut iter = items.iter();
    let first = iter.next()?;
    let mut best = (first, score(first));
    for item in iter {
        let candidate = score(item);
        if candidate > best.1 {
            best = (item, candidate);
        }
    }
    Some(best.0)
}

/// Index form of [`select_best`].
pub fn select_best_index<T, S, F>(items: &[T], score: F) -> Option<usize>
where
    S: PartialOrd,
    F: FnMut(&T) -> S,
{
    let best = select_best(items, score)?;
    items.iter().position(|item| std::ptr::eq(item, best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_has_no_best() {
        let empty: [i32; 0] = [];
        assert_eq!(select_best(&empty, |x| *x), None);
        assert_eq!(select_best_index(&empty, |x| *x), None);
    }

    #[test]
    fn single_element_is_best() {
        assert_eq!(select_best(&["only"], |_| 0), Some(&"only"));
    }

    #[test]
    fn ties_keep_earlier_element() {
        let items = [("A", 70), ("B", 75), ("C", 75)];
        assert_eq!(select_best(&items, |(_, s)| *s).map(|(n, _)| *n), Some("B"));
        assert_eq!(select_best_index(&items, |(_, s)| *s), Some(1));
    }

    #[test]
    fn picks_strictly_greatest() {
        let items = [45, 75, 60];
        assert_eq!(select_best(&items, |x| *x), Some(&75));
    }

    proptest! {
        #[test]
        fn best_is_member_of_input(scores in prop::collection::vec(-100i64..100, 1..20)) {
            let best = select_best(&scores, |s| *s).unwrap();
            prop_assert!(scores.contains(best));
            prop_assert!(scores.iter().all(|s| s <= best));
            let idx = select_best_index(&scores, |s| *s).unwrap();
            prop_assert_eq!(scores.iter().position(|s| s == best), Some(idx));
        }
    }
}

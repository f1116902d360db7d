use std::time::Instant;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sort::{self, SortAlgorithm};
use crate::store::array::ArrayStore;
use crate::store::linked::LinkedStore;

/// Sort both stores by publication year.
///
/// The array store uses the selected algorithm; the linked store is always
/// merge sorted, since quicksort is array-only. Per-store timings go out as
/// messages, the phase total in [`CmdResult::elapsed`].
pub fn run(
    array: &mut ArrayStore,
    linked: &mut LinkedStore,
    algorithm: SortAlgorithm,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let started = Instant::now();

    let clock = Instant::now();
    sort::sort_array(array, algorithm);
    result.add_message(CmdMessage::info(format!(
        "Array store sorted with {} in {:.3?}",
        algorithm.name(),
        clock.elapsed()
    )));

    if algorithm == SortAlgorithm::Quick {
        result.add_message(CmdMessage::info(
            "Quicksort is array-only; linked store sorted with merge sort",
        ));
    }
    let clock = Instant::now();
    linked.sort_by_year();
    result.add_message(CmdMessage::info(format!(
        "Linked store sorted with merge sort in {:.3?}",
        clock.elapsed()
    )));

    Ok(result.with_elapsed(started.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;
    use crate::store::ArticleStore;

    fn filled() -> (ArrayStore, LinkedStore) {
        let mut array = ArrayStore::new();
        let mut linked = LinkedStore::new();
        for (title, date) in [
            ("A", "2016-01-05"),
            ("B", "2015-07-01"),
            ("C", "2016-03-09"),
        ] {
            let article = Article::new(title, "", "news", date);
            array.append(article.clone()).unwrap();
            linked.append(article).unwrap();
        }
        (array, linked)
    }

    #[test]
    fn merge_sorts_both_stores_stably() {
        let (mut array, mut linked) = filled();
        let result = run(&mut array, &mut linked, SortAlgorithm::Merge).unwrap();

        let array_titles: Vec<&str> = array.iter().map(|a| a.title.as_str()).collect();
        let linked_titles: Vec<&str> = linked.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(array_titles, ["B", "A", "C"]);
        assert_eq!(linked_titles, ["B", "A", "C"]);
        assert!(result.elapsed.is_some());
    }

    #[test]
    fn quick_sorts_array_and_merge_sorts_linked() {
        let (mut array, mut linked) = filled();
        run(&mut array, &mut linked, SortAlgorithm::Quick).unwrap();

        let array_years: Vec<i32> = array.iter().map(Article::year).collect();
        assert!(array_years.windows(2).all(|w| w[0] <= w[1]));
        let linked_titles: Vec<&str> = linked.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(linked_titles, ["B", "A", "C"]);
    }

    #[test]
    fn sorting_empty_stores_is_fine() {
        let mut array = ArrayStore::new();
        let mut linked = LinkedStore::new();
        let result = run(&mut array, &mut linked, SortAlgorithm::Merge).unwrap();

        assert_eq!(array.len(), 0);
        assert_eq!(linked.len(), 0);
        assert!(result.elapsed.is_some());
    }
}

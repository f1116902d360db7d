use crate::model::Article;

/// In-place quicksort by extracted year, ascending.
///
/// Lomuto partition with the last element's year as pivot, recursing on both
/// sides. No tie-break: articles with equal years may come out in any order.
/// Worst case O(n²) when the pivot keeps landing at an extreme, e.g. on
/// already-sorted input.
pub fn sort(articles: &mut [Article]) {
    if articles.len() <= 1 {
        return;
    }
    let pivot = partition(articles);
    let (left, right) = articles.split_at_mut(pivot);
    sort(left);
    sort(&mut right[1..]);
}

fn partition(articles: &mut [Article]) -> usize {
    let high = articles.len() - 1;
    let pivot = articles[high].year();
    let mut i = 0;
    for j in 0..high {
        if articles[j].year() < pivot {
            articles.swap(i, j);
            i += 1;
        }
    }
    articles.swap(i, high);
    i
}

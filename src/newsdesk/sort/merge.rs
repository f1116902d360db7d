use crate::model::Article;

/// Stable merge sort by extracted year, ascending.
///
/// Classic top-down form: split at the midpoint, sort each half, then merge
/// out of temporary copies of the halves. The merge takes from the left run
/// on equal years, so articles sharing a year keep the order they were
/// loaded in. O(n log n) time, O(n) scratch space per active merge.
pub fn sort(articles: &mut [Article]) {
    if articles.len() <= 1 {
        return;
    }
    let mid = articles.len() / 2;
    sort(&mut articles[..mid]);
    sort(&mut articles[mid..]);
    merge(articles, mid);
}

fn merge(articles: &mut [Article], mid: usize) {
    let left = articles[..mid].to_vec();
    let right = articles[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    for slot in articles.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => l.year() <= r.year(),
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

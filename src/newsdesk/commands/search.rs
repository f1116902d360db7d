use std::time::Instant;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ArticleStore;
use crate::text;

/// Linear scan of a store for articles matching a category substring and an
/// exact publication year.
///
/// The query and each stored category are compared trimmed and
/// ASCII-lowercased; an empty query matches every category. Matches come out
/// in store order. A malformed date extracts to year 0 and therefore never
/// matches a real year.
pub fn run<S: ArticleStore>(store: &S, category: &str, year: i32) -> Result<CmdResult> {
    let started = Instant::now();
    let needle = text::normalize(category);

    let matches: Vec<_> = store
        .iter()
        .filter(|a| a.year() == year && text::normalize(&a.category).contains(&needle))
        .cloned()
        .collect();
    let elapsed = started.elapsed();

    let mut result = CmdResult::default()
        .with_articles(matches)
        .with_elapsed(elapsed);
    if result.articles.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No articles found for \"{category}\" in {year}"
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;
    use crate::store::array::ArrayStore;
    use crate::store::linked::LinkedStore;

    fn sample_array() -> ArrayStore {
        let mut store = ArrayStore::new();
        for (title, category, date) in [
            ("A", "Politics", "2016-01-05"),
            ("B", "Sports", "2015-07-01"),
            ("C", "World Politics", "2016-03-09"),
            ("D", " politics ", "2016-11-01"),
        ] {
            store.append(Article::new(title, "", category, date)).unwrap();
        }
        store
    }

    fn found(result: &CmdResult) -> Vec<&str> {
        result.articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let store = sample_array();
        let result = run(&store, "polit", 2016).unwrap();
        assert_eq!(found(&result), ["A", "C", "D"]);
    }

    #[test]
    fn year_must_match_exactly() {
        let store = sample_array();
        let result = run(&store, "politics", 2020).unwrap();
        assert!(result.articles.is_empty());
        assert!(result.messages.iter().any(|m| m.text.contains("No articles found")));
    }

    #[test]
    fn trims_and_folds_both_sides() {
        let store = sample_array();
        // "POLITICS" should match the stored " politics " entry too.
        let result = run(&store, "  POLITICS ", 2016).unwrap();
        assert_eq!(found(&result), ["A", "D"]);
    }

    #[test]
    fn empty_query_matches_every_category_for_the_year() {
        let store = sample_array();
        let result = run(&store, "", 2016).unwrap();
        assert_eq!(found(&result), ["A", "C", "D"]);
    }

    #[test]
    fn malformed_dates_never_match_a_real_year() {
        let mut store = ArrayStore::new();
        store
            .append(Article::new("bad", "", "Politics", "not a date"))
            .unwrap();

        let result = run(&store, "politics", 2016).unwrap();
        assert!(result.articles.is_empty());
    }

    #[test]
    fn scans_the_linked_store_the_same_way() {
        let mut store = LinkedStore::new();
        for (title, category, date) in [
            ("A", "Politics", "2016-01-05"),
            ("B", "Sports", "2015-07-01"),
            ("C", "World Politics", "2016-03-09"),
        ] {
            store.append(Article::new(title, "", category, date)).unwrap();
        }

        let result = run(&store, "politics", 2016).unwrap();
        assert_eq!(found(&result), ["A", "C"]);
        assert!(result.elapsed.is_some());
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ArticleStore;

/// First `limit` articles of a store, in store order. Used for the
/// before/after-sort samples.
pub fn run<S: ArticleStore>(store: &S, limit: usize) -> Result<CmdResult> {
    let sample = store.iter().take(limit).cloned().collect();
    Ok(CmdResult::default().with_articles(sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;
    use crate::store::array::ArrayStore;

    #[test]
    fn takes_the_first_n_articles() {
        let mut store = ArrayStore::new();
        for title in ["A", "B", "C", "D"] {
            store
                .append(Article::new(title, "", "news", "2020-01-01"))
                .unwrap();
        }

        let result = run(&store, 3).unwrap();
        let titles: Vec<&str> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn short_stores_yield_everything() {
        let mut store = ArrayStore::new();
        store
            .append(Article::new("only", "", "news", "2020-01-01"))
            .unwrap();

        let result = run(&store, 3).unwrap();
        assert_eq!(result.articles.len(), 1);
    }
}

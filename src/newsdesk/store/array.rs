use super::ArticleStore;
use crate::error::{NewsdeskError, Result};
use crate::model::Article;

/// Default cap on the number of articles the array store accepts.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Contiguous article storage with a hard capacity cap.
///
/// Appending at capacity returns [`NewsdeskError::CapacityExceeded`] and
/// leaves the store untouched, so callers can observe and count the dropped
/// records instead of losing them silently.
pub struct ArrayStore {
    articles: Vec<Article>,
    capacity: usize,
}

impl ArrayStore {
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }

    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            articles: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.articles
    }

    // The sort engine permutes articles in place.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Article] {
        &mut self.articles
    }
}

impl Default for ArrayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore for ArrayStore {
    fn append(&mut self, article: Article) -> Result<()> {
        if self.articles.len() >= self.capacity {
            return Err(NewsdeskError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.articles.push(article);
        Ok(())
    }

    fn len(&self) -> usize {
        self.articles.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Article> + '_> {
        Box::new(self.articles.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article::new(title, "", "news", "2020-01-01")
    }

    #[test]
    fn appends_in_order() {
        let mut store = ArrayStore::new();
        store.append(article("A")).unwrap();
        store.append(article("B")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().title, "A");
        assert_eq!(store.get(1).unwrap().title, "B");
    }

    #[test]
    fn rejects_appends_beyond_capacity() {
        let mut store = ArrayStore::with_capacity_limit(2);
        store.append(article("A")).unwrap();
        store.append(article("B")).unwrap();

        let err = store.append(article("C")).unwrap_err();
        assert!(matches!(
            err,
            NewsdeskError::CapacityExceeded { capacity: 2 }
        ));
        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|a| a.title != "C"));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let store = ArrayStore::new();
        assert!(store.get(0).is_none());
    }

    #[test]
    fn iter_restarts_from_front() {
        let mut store = ArrayStore::new();
        store.append(article("A")).unwrap();

        assert_eq!(store.iter().count(), 1);
        assert_eq!(store.iter().next().unwrap().title, "A");
    }
}

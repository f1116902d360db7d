//! # Storage Layer
//!
//! Two in-memory containers hold the loaded articles as parallel structural
//! views of the same data:
//!
//! - [`array::ArrayStore`]: contiguous, bounded by an explicit capacity cap
//! - [`linked::LinkedStore`]: singly linked chain with O(1) tail append
//!
//! Both implement [`ArticleStore`], the seam that load, search, and peek are
//! generic over. Sorting is not part of the trait: the algorithms differ per
//! structure (in-place permutation for the array, node relinking for the
//! chain), so each store exposes its own sort entry points.
//!
//! When populated from the same sources the two stores contain the same
//! articles in the same relative order; the loader keeps them in lockstep
//! even when the array store hits its capacity.

use crate::error::Result;
use crate::model::Article;

pub mod array;
pub mod linked;

/// Selects which structural view an operation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Array,
    Linked,
}

impl StoreKind {
    pub fn name(&self) -> &'static str {
        match self {
            StoreKind::Array => "array",
            StoreKind::Linked => "linked",
        }
    }
}

/// Abstract interface over an ordered article container.
///
/// Implementations are append-only; articles are never removed or updated
/// once stored.
pub trait ArticleStore {
    /// Append an article after the last one currently stored.
    fn append(&mut self, article: Article) -> Result<()>;

    /// Number of stored articles.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only traversal from the first article to the last. Restartable;
    /// each call begins at the front.
    fn iter(&self) -> Box<dyn Iterator<Item = &Article> + '_>;
}

use super::ArticleStore;
use crate::error::Result;
use crate::model::Article;

/// One link in the chain. Nodes live in the store's arena and refer to each
/// other by index, so resequencing the chain never moves or reallocates an
/// article.
struct Node {
    article: Article,
    next: Option<usize>,
}

/// Singly linked article storage.
///
/// The chain is held as an arena of nodes indexed by handle, with `head` and
/// `tail` tracking the current ends. Appending links after the tail in O(1).
/// Sorting relinks `next` handles in place and may change which node is the
/// head.
#[derive(Default)]
pub struct LinkedStore {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LinkedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge sort the chain by extracted year, ascending.
    ///
    /// Stable: on equal years the earlier node stays first, because the merge
    /// step prefers the left chain on ties. Empty and single-node chains are
    /// left untouched.
    pub fn sort_by_year(&mut self) {
        let head = self.head.take();
        self.head = self.sort_chain(head);

        // Sorting can move any node to the back, so walk to the new tail.
        self.tail = self.head;
        while let Some(idx) = self.tail {
            match self.nodes[idx].next {
                Some(next) => self.tail = Some(next),
                None => break,
            }
        }
    }

    fn sort_chain(&mut self, head: Option<usize>) -> Option<usize> {
        let head_idx = match head {
            Some(idx) if self.nodes[idx].next.is_some() => idx,
            other => return other,
        };

        let mid = self.middle(head_idx);
        let right = self.nodes[mid].next.take();
        let left = self.sort_chain(Some(head_idx));
        let right = self.sort_chain(right);
        self.merge_chains(left, right)
    }

    /// Find the node the chain splits after, by slow/fast traversal: slow
    /// starts at the head, fast at the head's successor, and fast moves two
    /// links for every one of slow's.
    fn middle(&self, head: usize) -> usize {
        let mut slow = head;
        let mut fast = self.nodes[head].next;
        while let Some(f) = fast {
            let Some(beyond) = self.nodes[f].next else {
                break;
            };
            if let Some(next_slow) = self.nodes[slow].next {
                slow = next_slow;
            }
            fast = self.nodes[beyond].next;
        }
        slow
    }

    /// Merge two sorted chains by relinking their nodes; no allocation.
    /// `<=` keeps the left chain's node first on equal years.
    fn merge_chains(&mut self, mut left: Option<usize>, mut right: Option<usize>) -> Option<usize> {
        let mut head = None;
        let mut tail: Option<usize> = None;
        loop {
            let pick = match (left, right) {
                (None, rest) | (rest, None) => {
                    match tail {
                        Some(t) => self.nodes[t].next = rest,
                        None => head = rest,
                    }
                    return head;
                }
                (Some(l), Some(r)) => {
                    if self.nodes[l].article.year() <= self.nodes[r].article.year() {
                        left = self.nodes[l].next;
                        l
                    } else {
                        right = self.nodes[r].next;
                        r
                    }
                }
            };
            self.nodes[pick].next = None;
            match tail {
                Some(t) => self.nodes[t].next = Some(pick),
                None => head = Some(pick),
            }
            tail = Some(pick);
        }
    }
}

impl ArticleStore for LinkedStore {
    fn append(&mut self, article: Article) -> Result<()> {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            article,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Article> + '_> {
        Box::new(Iter {
            nodes: &self.nodes,
            cursor: self.head,
        })
    }
}

struct Iter<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Article;

    fn next(&mut self) -> Option<&'a Article> {
        let idx = self.cursor?;
        let node = &self.nodes[idx];
        self.cursor = node.next;
        Some(&node.article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(title: &str, date: &str) -> Article {
        Article::new(title, "", "news", date)
    }

    fn titles(store: &LinkedStore) -> Vec<String> {
        store.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn appends_at_tail() {
        let mut store = LinkedStore::new();
        store.append(dated("A", "2016-01-05")).unwrap();
        store.append(dated("B", "2015-07-01")).unwrap();
        store.append(dated("C", "2016-03-09")).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(titles(&store), ["A", "B", "C"]);
    }

    #[test]
    fn traversal_restarts_from_head() {
        let mut store = LinkedStore::new();
        store.append(dated("A", "2016-01-05")).unwrap();
        store.append(dated("B", "2015-07-01")).unwrap();

        assert_eq!(store.iter().count(), 2);
        assert_eq!(store.iter().next().unwrap().title, "A");
    }

    #[test]
    fn sort_orders_by_year_and_keeps_ties_stable() {
        let mut store = LinkedStore::new();
        store.append(dated("A", "2016-01-05")).unwrap();
        store.append(dated("B", "2015-07-01")).unwrap();
        store.append(dated("C", "2016-03-09")).unwrap();

        store.sort_by_year();

        assert_eq!(titles(&store), ["B", "A", "C"]);
    }

    #[test]
    fn sort_moves_head_and_tail() {
        let mut store = LinkedStore::new();
        store.append(dated("late", "2020-01-01")).unwrap();
        store.append(dated("early", "1999-01-01")).unwrap();

        store.sort_by_year();
        assert_eq!(titles(&store), ["early", "late"]);

        // Appends after a sort still land at the end of the chain.
        store.append(dated("appended", "1990-01-01")).unwrap();
        assert_eq!(titles(&store), ["early", "late", "appended"]);
    }

    #[test]
    fn sort_is_a_permutation() {
        let mut store = LinkedStore::new();
        for (title, date) in [
            ("a", "2004-05-06"),
            ("b", "2001-01-01"),
            ("c", "2003-03-03"),
            ("d", "2002-02-02"),
            ("e", "bad date"),
            ("f", "2001-12-31"),
        ] {
            store.append(dated(title, date)).unwrap();
        }

        store.sort_by_year();

        assert_eq!(store.len(), 6);
        let years: Vec<i32> = store.iter().map(Article::year).collect();
        assert!(years.windows(2).all(|w| w[0] <= w[1]));

        let mut seen = titles(&store);
        seen.sort();
        assert_eq!(seen, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn malformed_dates_sort_first() {
        let mut store = LinkedStore::new();
        store.append(dated("real", "2010-01-01")).unwrap();
        store.append(dated("bad", "someday")).unwrap();

        store.sort_by_year();
        assert_eq!(titles(&store), ["bad", "real"]);
    }

    #[test]
    fn sorting_empty_and_single_is_a_noop() {
        let mut empty = LinkedStore::new();
        empty.sort_by_year();
        assert_eq!(empty.len(), 0);
        assert!(empty.iter().next().is_none());

        let mut single = LinkedStore::new();
        single.append(dated("only", "2012-06-01")).unwrap();
        single.sort_by_year();
        assert_eq!(titles(&single), ["only"]);
    }

    #[test]
    fn sorting_sorted_input_leaves_order_unchanged() {
        let mut store = LinkedStore::new();
        store.append(dated("a", "2001-01-01")).unwrap();
        store.append(dated("b", "2002-01-01")).unwrap();
        store.append(dated("c", "2003-01-01")).unwrap();

        store.sort_by_year();
        assert_eq!(titles(&store), ["a", "b", "c"]);
    }
}

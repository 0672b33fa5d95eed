use std::cmp::Ordering;

use crate::wordlist::tst::iterators::PrefixIter;
use crate::wordlist::tst::node::NodeId;
use crate::wordlist::tst::trie::Trie;

impl Trie {
    /// Finds the root of the subtree holding every key that starts with
    /// `prefix`. Nothing is created on the way down.
    pub(crate) fn locate(&self, prefix: &str) -> Option<NodeId> {
        let bytes = prefix.as_bytes();
        let head = self.alphabet().index(*bytes.first()?)?;
        let mut current = self.heads[head]?;
        let mut depth = 0;

        while depth < bytes.len() {
            let node = self.node(current);
            let split = match node.split {
                Some(split) => split,
                // A key node that never branched is a leaf; it either
                // extends the prefix or nothing here does.
                None => {
                    return node.key.as_deref()
                        .filter(|key| key.as_bytes().starts_with(bytes))
                        .map(|_| current);
                }
            };
            current = match bytes[depth].cmp(&split) {
                Ordering::Less => node.less?,
                Ordering::Equal => {
                    depth += 1;
                    node.equal?
                }
                Ordering::Greater => node.greater?,
            };
        }
        Some(current)
    }

    /// All keys starting with `prefix`, in trie traversal order.
    ///
    /// An empty prefix or one whose first byte is outside the alphabet
    /// matches nothing.
    pub fn begin_with(&self, prefix: &str) -> Vec<String> {
        self.iter_prefix(prefix).map(str::to_string).collect()
    }

    /// [`Trie::begin_with`] sorted lexicographically.
    pub fn begin_with_sorted(&self, prefix: &str) -> Vec<String> {
        let mut words = self.begin_with(prefix);
        words.sort_unstable();
        words
    }

    pub fn iter_prefix(&self, prefix: &str) -> PrefixIter<'_> {
        PrefixIter::new(self, self.locate(prefix))
    }

    /// Number of keys starting with `prefix`, read from the subtree weight
    /// without walking it.
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.locate(prefix).map_or(0, |id| self.node(id).weight)
    }

    /// Exact membership. Follows the same routing as insertion, including
    /// sending an exhausted word down the less branch.
    pub fn contains(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let mut next = bytes.first()
            .and_then(|&b| self.alphabet().index(b))
            .and_then(|head| self.heads[head]);
        let mut depth = 0;

        while let Some(id) = next {
            let node = self.node(id);
            if node.key.as_deref() == Some(word) {
                return true;
            }
            next = match bytes.get(depth).copied().cmp(&node.split) {
                Ordering::Less => node.less,
                Ordering::Equal => {
                    depth += 1;
                    node.equal
                }
                Ordering::Greater => node.greater,
            };
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use maplit::hashset;

    use crate::wordlist::tst::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::default();
        words.iter().for_each(|w| { trie.insert(w); });
        trie
    }

    fn set(words: Vec<String>) -> HashSet<String> {
        words.into_iter().collect()
    }

    #[test]
    fn finds_words_by_prefix() {
        let trie = trie_of(&["dog", "door", "cat"]);
        assert_eq!(set(trie.begin_with("d")), hashset! {"dog".to_string(), "door".to_string()});
        assert_eq!(trie.begin_with("c"), vec!["cat"]);
        assert!(trie.begin_with("e").is_empty());
    }

    #[test]
    fn prefix_results_do_not_depend_on_insertion_order() {
        let expected = hashset! {"cat".to_string(), "car".to_string(), "cart".to_string()};
        let orders = [
            ["cat", "car", "cart", "dog"],
            ["dog", "cart", "car", "cat"],
            ["car", "dog", "cat", "cart"],
            ["cart", "cat", "dog", "car"],
        ];
        for words in orders {
            let trie = trie_of(&words);
            assert_eq!(set(trie.begin_with("ca")), expected, "order {:?}", words);
        }
    }

    #[test]
    fn prefix_that_is_itself_a_key() {
        let trie = trie_of(&["ant", "anthem"]);
        assert_eq!(set(trie.begin_with("ant")), hashset! {"ant".to_string(), "anthem".to_string()});
        assert_eq!(trie.begin_with("anthem"), vec!["anthem"]);
        assert_eq!(trie.begin_with("anth"), vec!["anthem"]);
    }

    #[test]
    fn prefix_inside_an_unsplit_leaf() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.begin_with("c"), vec!["cat"]);
        assert_eq!(trie.begin_with("ca"), vec!["cat"]);
        assert_eq!(trie.begin_with("cat"), vec!["cat"]);
        assert!(trie.begin_with("cats").is_empty());
        assert!(trie.begin_with("cb").is_empty());
    }

    #[test]
    fn invalid_prefixes_match_nothing() {
        let trie = trie_of(&["apple", "banana"]);
        assert!(trie.begin_with("").is_empty());
        assert!(trie.begin_with("Apple").is_empty());
        assert!(trie.begin_with("#").is_empty());
        assert_eq!(trie.count_with_prefix(""), 0);
    }

    #[test]
    fn sorted_variant_orders_results() {
        let trie = trie_of(&["cat", "car", "cart", "cab"]);
        assert_eq!(trie.begin_with_sorted("ca"), vec!["cab", "car", "cart", "cat"]);
    }

    #[test]
    fn prefix_count_matches_enumeration() {
        let trie = trie_of(&["cat", "car", "cart", "cab", "do", "dog", "door", "d"]);
        for prefix in ["c", "ca", "car", "cart", "d", "do", "doo", "x", "cz"] {
            assert_eq!(trie.count_with_prefix(prefix), trie.begin_with(prefix).len(), "{}", prefix);
        }
        assert_eq!(trie.count_with_prefix("d"), 4);
    }

    #[test]
    fn contains_is_exact() {
        let trie = trie_of(&["hello", "help", "goodbye", "good"]);
        ["hello", "help", "goodbye", "good"].iter().for_each(|w| assert!(trie.contains(w)));
        ["he", "h", "lol", "banana", "goodbyes", ""].iter().for_each(|w| assert!(!trie.contains(w)));

        let nested = trie_of(&["cart", "car", "ca"]);
        assert!(nested.contains("car"));
        assert!(nested.contains("ca"));
        assert!(!nested.contains("c"));
    }
}

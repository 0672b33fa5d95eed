use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::InsertError;
use crate::wordlist::tst::node::{Branch, Link, NodeId, TrieNode};

/// Compressed ternary search trie over an [`Alphabet`].
///
/// Keys are partitioned into one head bucket per leading byte. Inside a
/// bucket, non-branching tails are kept in a single key node holding the
/// whole key; key nodes are only split when another key shares a longer
/// prefix with them.
pub struct Trie {
    alphabet: Alphabet,
    pub(crate) heads: Vec<Option<NodeId>>,
    pub(crate) nodes: Vec<TrieNode>,
    count: usize,
}

impl Trie {
    pub fn new(alphabet: Alphabet) -> Trie {
        Trie {
            alphabet,
            heads: vec![None; alphabet.len()],
            nodes: Vec::new(),
            count: 0,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of distinct keys stored.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts `key`, returning `false` when it is empty, starts outside the
    /// alphabet or is already present.
    pub fn insert(&mut self, key: &str) -> bool {
        self.try_insert(key).is_ok()
    }

    pub fn try_insert(&mut self, key: &str) -> Result<(), InsertError> {
        let bytes = key.as_bytes();
        let first = *bytes.first().ok_or(InsertError::Empty)?;
        let head = self.alphabet.index(first)
            .ok_or(InsertError::OutOfAlphabet { byte: first })?;

        let mut link = Link::Head(head);
        let mut depth = 0;
        let mut visited = vec![];

        loop {
            let current = match self.link(link) {
                Some(id) => id,
                None => {
                    let leaf = self.alloc(TrieNode::leaf(key));
                    self.set_link(link, leaf);
                    break;
                }
            };
            let current = self.make_branch_point(link, current, bytes, depth)?;
            visited.push(current);

            // An exhausted key sorts below every discriminator.
            let c = bytes.get(depth).copied();
            let branch = match c.cmp(&self.nodes[current.0].split) {
                Ordering::Less => Branch::Less,
                Ordering::Equal => {
                    depth += 1;
                    Branch::Equal
                }
                Ordering::Greater => Branch::Greater,
            };
            link = Link::Child(current, branch);
        }

        for id in visited {
            self.nodes[id.0].weight += 1;
        }
        self.count += 1;
        trace!(key, depth, "inserted");
        Ok(())
    }

    /// Prepares the node at `link` so that `key` can be routed through it at
    /// `depth`, returning the node now occupying the slot.
    ///
    /// A key node whose key still has a byte at `depth` is wrapped in a new
    /// branch on that byte. A key node that ends exactly here and has no
    /// discriminator takes the incoming key's byte as its discriminator.
    fn make_branch_point(&mut self, link: Link, id: NodeId, key: &[u8], depth: usize)
                         -> Result<NodeId, InsertError> {
        let node = &self.nodes[id.0];
        let stored = match &node.key {
            Some(stored) => stored.as_bytes(),
            None => return Ok(id),
        };
        if stored == key {
            return Err(InsertError::Duplicate);
        }
        let unconsumed = stored.get(depth).copied();
        let (split, weight) = (node.split, node.weight);
        debug_assert!(split.is_some() || node.is_leaf());

        if let Some(c) = unconsumed {
            let wrapper = self.alloc(TrieNode::branch(c, id, weight));
            self.set_link(link, wrapper);
            return Ok(wrapper);
        }
        if split.is_none() {
            // Both keys end at this depth along the same path, so they are equal.
            let c = *key.get(depth).ok_or(InsertError::Duplicate)?;
            self.nodes[id.0].split = Some(c);
        }
        Ok(id)
    }

    fn alloc(&mut self, node: TrieNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn link(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Head(idx) => self.heads[idx],
            Link::Child(parent, branch) => self.nodes[parent.0].child(branch),
        }
    }

    fn set_link(&mut self, link: Link, id: NodeId) {
        match link {
            Link::Head(idx) => self.heads[idx] = Some(id),
            Link::Child(parent, branch) => *self.nodes[parent.0].child_mut(branch) = Some(id),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Number of keys whose first byte is `first`.
    pub fn bucket_count(&self, first: u8) -> usize {
        self.alphabet.index(first)
            .and_then(|idx| self.heads[idx])
            .map_or(0, |id| self.nodes[id.0].weight)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new(Alphabet::default())
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack: Vec<NodeId> = self.heads.iter().rev().flatten().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            l.entry(node);
            node.children().iter().rev().flatten().for_each(|c| stack.push(*c));
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::alphabet::Alphabet;
    use crate::error::InsertError;
    use crate::wordlist::tst::trie::Trie;

    #[test]
    fn counts_distinct_words() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::default();
        words.iter().for_each(|word| assert!(trie.insert(word)));
        assert_eq!(trie.count(), 4);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut trie = Trie::default();
        assert!(trie.insert("cart"));
        assert!(trie.insert("car"));
        let nodes = trie.nodes.len();

        assert_eq!(trie.try_insert("car"), Err(InsertError::Duplicate));
        assert_eq!(trie.try_insert("cart"), Err(InsertError::Duplicate));
        assert_eq!(trie.count(), 2);
        assert_eq!(trie.nodes.len(), nodes);
    }

    #[test]
    fn invalid_keys_are_rejected() {
        let mut trie = Trie::default();
        assert_eq!(trie.try_insert(""), Err(InsertError::Empty));
        assert_eq!(trie.try_insert("Apple"), Err(InsertError::OutOfAlphabet { byte: b'A' }));
        assert_eq!(trie.try_insert("1st"), Err(InsertError::OutOfAlphabet { byte: b'1' }));
        assert!(trie.is_empty());
        assert!(trie.nodes.is_empty());
    }

    #[test]
    fn single_key_stays_a_leaf() {
        let mut trie = Trie::default();
        trie.insert("cat");
        assert_eq!(trie.nodes.len(), 1);
        let head = trie.heads[2].unwrap();
        assert_eq!(trie.node(head).key.as_deref(), Some("cat"));
        assert_eq!(trie.node(head).split, None);
    }

    #[test]
    fn shared_prefix_splits_key_node() {
        let mut trie = Trie::default();
        trie.insert("cat");
        trie.insert("car");

        // c -> a -> t("cat") with "car" to its left
        let c = trie.heads[2].unwrap();
        assert_eq!(trie.node(c).split, Some(b'c'));
        assert!(trie.node(c).key.is_none());
        assert_eq!(trie.node(c).weight, 2);
        let a = trie.node(c).equal.unwrap();
        assert_eq!(trie.node(a).split, Some(b'a'));
        let t = trie.node(a).equal.unwrap();
        assert_eq!(trie.node(t).split, Some(b't'));
        let cat = trie.node(t).equal.unwrap();
        assert_eq!(trie.node(cat).key.as_deref(), Some("cat"));
        let car = trie.node(t).less.unwrap();
        assert_eq!(trie.node(car).key.as_deref(), Some("car"));
        assert!(trie.node(car).is_leaf());
    }

    #[test]
    fn prefix_key_takes_discriminator_in_place() {
        let mut trie = Trie::default();
        trie.insert("ant");
        trie.insert("anthem");

        let mut id = trie.heads[0].unwrap();
        for _ in 0..3 {
            id = trie.node(id).equal.unwrap();
        }
        let ant = trie.node(id);
        assert_eq!(ant.key.as_deref(), Some("ant"));
        assert_eq!(ant.split, Some(b'h'));
        assert_eq!(ant.weight, 2);
        let anthem = trie.node(ant.equal.unwrap());
        assert_eq!(anthem.key.as_deref(), Some("anthem"));
    }

    #[test]
    fn weights_track_subtree_sizes() {
        let mut trie = Trie::default();
        for word in ["cat", "car", "cart", "cab", "dog"] {
            trie.insert(word);
        }
        assert_eq!(trie.bucket_count(b'c'), 4);
        assert_eq!(trie.bucket_count(b'd'), 1);
        assert_eq!(trie.bucket_count(b'e'), 0);
        assert_eq!(trie.bucket_count(b'#'), 0);
    }

    #[test]
    fn custom_alphabet_bounds_heads() {
        let mut trie = Trie::new(Alphabet::builder().first(b'a').size(3).build());
        assert!(trie.insert("cab"));
        assert!(!trie.insert("dab"));
        assert_eq!(trie.heads.len(), 3);
    }

    #[test]
    fn count_is_independent_of_order() {
        let words = ["cat", "car", "cart", "dog", "do", "c"];
        let mut forward = Trie::default();
        let mut backward = Trie::default();
        words.iter().for_each(|w| { forward.insert(w); });
        words.iter().rev().for_each(|w| { backward.insert(w); });
        assert_eq!(forward.count(), words.len());
        assert_eq!(backward.count(), words.len());
    }

    #[test]
    fn five_thousand_random_words() {
        let mut rng = StdRng::seed_from_u64(0x7357);
        let mut words = HashSet::new();
        while words.len() < 5000 {
            let len = rng.gen_range(1..=10);
            let word: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
            words.insert(word);
        }

        let mut trie = Trie::default();
        words.iter().for_each(|w| assert!(trie.insert(w)));
        assert_eq!(trie.count(), 5000);

        for word in &words {
            let bucket = trie.begin_with(&word[..1]);
            assert!(bucket.contains(word), "{} missing from its bucket", word);
        }
    }
}

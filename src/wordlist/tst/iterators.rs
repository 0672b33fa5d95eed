use crate::wordlist::tst::node::NodeId;
use crate::wordlist::tst::trie::Trie;

/// Pre-order walk over a subtree, yielding stored keys.
///
/// A node's own key comes first, then its less, equal and greater subtrees.
/// The order follows the branch structure and is not lexicographic.
#[derive(Debug)]
pub struct PrefixIter<'a> {
    trie: &'a Trie,
    stack: Vec<NodeId>,
}

impl<'a> PrefixIter<'a> {
    pub(crate) fn new(trie: &'a Trie, root: Option<NodeId>) -> PrefixIter<'a> {
        PrefixIter { trie, stack: root.into_iter().collect() }
    }
}

impl<'a> Iterator for PrefixIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        while let Some(id) = self.stack.pop() {
            let node = trie.node(id);
            node.children().iter().rev().flatten().for_each(|c| self.stack.push(*c));
            if let Some(key) = node.key.as_deref() {
                return Some(key);
            }
        }
        None
    }
}

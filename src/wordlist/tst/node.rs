use std::fmt::{Debug, Formatter};

/// Index of a node inside the trie's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Branch {
    Less,
    Equal,
    Greater,
}

/// A slot that owns a node: either a head bucket or one of a node's three
/// children. Insertion rewrites slots through this rather than holding a
/// mutable reference into the arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Link {
    Head(usize),
    Child(NodeId, Branch),
}

/// One node of the ternary search trie.
///
/// `key` tags key-bearing nodes; it holds the whole key that ends here.
/// `split` is the discriminator and stays `None` for a key node that has
/// never been forced to branch. Such a node has no children.
pub(crate) struct TrieNode {
    pub(crate) split: Option<u8>,
    pub(crate) key: Option<Box<str>>,
    pub(crate) less: Option<NodeId>,
    pub(crate) equal: Option<NodeId>,
    pub(crate) greater: Option<NodeId>,
    pub(crate) weight: usize,
}

impl TrieNode {
    pub(crate) fn leaf(key: &str) -> TrieNode {
        TrieNode {
            split: None,
            key: Some(key.into()),
            less: None,
            equal: None,
            greater: None,
            weight: 1,
        }
    }

    /// A keyless branch on `split` whose equal child is `equal`. The new node
    /// inherits the weight of the subtree it wraps.
    pub(crate) fn branch(split: u8, equal: NodeId, weight: usize) -> TrieNode {
        TrieNode {
            split: Some(split),
            key: None,
            less: None,
            equal: Some(equal),
            greater: None,
            weight,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.less.is_none() && self.equal.is_none() && self.greater.is_none()
    }

    pub(crate) fn child(&self, branch: Branch) -> Option<NodeId> {
        match branch {
            Branch::Less => self.less,
            Branch::Equal => self.equal,
            Branch::Greater => self.greater,
        }
    }

    pub(crate) fn child_mut(&mut self, branch: Branch) -> &mut Option<NodeId> {
        match branch {
            Branch::Less => &mut self.less,
            Branch::Equal => &mut self.equal,
            Branch::Greater => &mut self.greater,
        }
    }

    /// Children in traversal order.
    pub(crate) fn children(&self) -> [Option<NodeId>; 3] {
        [self.less, self.equal, self.greater]
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("split", &self.split.map(char::from))
            .field("key", &self.key)
            .field("weight", &self.weight)
            .field("children", &self.children().iter()
                .filter_map(|x| x.map(|id| id.0))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::tst::node::{Branch, NodeId, TrieNode};

    #[test]
    fn leaf_has_no_discriminator_or_children() {
        let leaf = TrieNode::leaf("cat");
        assert!(leaf.key.is_some());
        assert!(leaf.is_leaf());
        assert_eq!(leaf.split, None);
        assert_eq!(leaf.weight, 1);
    }

    #[test]
    fn branch_wraps_equal_child() {
        let mut node = TrieNode::branch(b't', NodeId(4), 3);
        assert!(node.key.is_none());
        assert_eq!(node.child(Branch::Equal), Some(NodeId(4)));
        assert_eq!(node.weight, 3);

        *node.child_mut(Branch::Less) = Some(NodeId(7));
        assert_eq!(node.children(), [Some(NodeId(7)), Some(NodeId(4)), None]);
    }
}

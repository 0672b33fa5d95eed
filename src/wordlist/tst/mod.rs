pub mod trie;
pub mod search;
pub mod iterators;

mod node;

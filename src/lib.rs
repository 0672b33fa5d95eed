//! Prefix completion over a compressed ternary search trie.

pub mod alphabet;
pub mod error;
pub mod normalize;
pub mod terminal;
pub mod wordlist;

pub use crate::alphabet::Alphabet;
pub use crate::error::{InsertError, LoadError, NormalizeError};
pub use crate::wordlist::tst::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};

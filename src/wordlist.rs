pub mod tst;
pub mod index;
pub mod wordlist;

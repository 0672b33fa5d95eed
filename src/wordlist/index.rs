use crate::wordlist::tst::trie::Trie;

pub trait Index {
    fn add(&mut self, word: &str) -> bool;
    fn contains(&self, word: &str) -> bool;

    /// Adds every item, returning how many were accepted.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'a str> {
        items.into_iter().filter(|x| self.add(x)).count()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> bool {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

use typed_builder::TypedBuilder;

/// A contiguous range of bytes accepted as word characters.
///
/// Head buckets of the trie are indexed by `byte - first`, so the range must
/// be contiguous. Bytes outside the range are rejected by insertion and
/// lookups rather than causing out-of-bounds access.
#[derive(TypedBuilder, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    #[builder(default = b'a')]
    first: u8,
    #[builder(default = 26)]
    size: u8,
}

impl Alphabet {
    pub const fn lowercase() -> Alphabet {
        Alphabet { first: b'a', size: 26 }
    }

    pub fn first(&self) -> u8 {
        self.first
    }

    pub fn len(&self) -> usize {
        self.size as usize
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Last byte of the range, `None` when the alphabet is empty or the
    /// range would run past `u8::MAX`.
    pub fn last(&self) -> Option<u8> {
        self.size.checked_sub(1).and_then(|n| self.first.checked_add(n))
    }

    pub fn index(&self, byte: u8) -> Option<usize> {
        byte.checked_sub(self.first)
            .filter(|&i| i < self.size)
            .map(usize::from)
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.index(byte).is_some()
    }

    pub fn contains_all(&self, word: &str) -> bool {
        word.bytes().all(|b| self.contains(b))
    }

    pub fn iter(&self) -> impl Iterator<Item=u8> + '_ {
        (0..self.size).filter_map(move |i| self.first.checked_add(i))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::lowercase()
    }
}

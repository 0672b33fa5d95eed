use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::Alphabet;
use crate::error::LoadError;
use crate::wordlist::tst::trie::Trie;

/// A prefix-completion dictionary backed by a [`Trie`].
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word list file.
///
/// Without a delimiter every whitespace-separated token is a word. With one,
/// each line is a record and `word_column` (default 0) holds the word.
#[derive(TypedBuilder, Clone, Debug, Default)]
pub struct FileFormat {
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
}

impl FileFormat {
    fn words<'a>(&self, line: &'a str) -> Box<dyn Iterator<Item=&'a str> + 'a> {
        match self.delimiter {
            None => Box::new(line.split_whitespace()),
            Some(delimiter) => {
                let word = line.split(delimiter)
                    .nth(self.word_column.unwrap_or(0))
                    .map(str::trim)
                    .filter(|w| !w.is_empty());
                Box::new(word.into_iter())
            }
        }
    }
}

#[derive(new, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub read: usize,
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketStat {
    pub letter: char,
    pub words: usize,
}

impl Wordlist {
    pub fn new(alphabet: Alphabet) -> Wordlist {
        Wordlist { trie: Trie::new(alphabet) }
    }

    delegate! {
        to self.trie {
            pub fn count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn contains(&self, word: &str) -> bool;
            pub fn begin_with(&self, prefix: &str) -> Vec<String>;
            pub fn begin_with_sorted(&self, prefix: &str) -> Vec<String>;
            pub fn count_with_prefix(&self, prefix: &str) -> usize;
            pub fn insert(&mut self, word: &str) -> bool;
            pub fn alphabet(&self) -> &Alphabet;
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat)
                                     -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        info!(?path, "reading words");
        let file = File::open(path)
            .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
        self.load_reader(BufReader::new(file), format)
    }

    /// Inserts every word read from `reader`. Words the trie rejects (empty,
    /// outside the alphabet, duplicates) are counted as skipped.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat)
                                   -> Result<LoadReport, LoadError> {
        let start = Instant::now();
        let mut read = 0;
        let mut skipped = 0;

        for line in reader.lines() {
            let line = line?;
            for word in format.words(&line) {
                read += 1;
                if let Err(e) = self.trie.try_insert(word) {
                    debug!(word, %e, "skipped");
                    skipped += 1;
                }
            }
        }

        let report = LoadReport::new(read, read - skipped, skipped);
        info!(read = report.read, inserted = report.inserted, skipped = report.skipped,
              elapsed_ms = start.elapsed().as_millis() as u64, "loaded words");
        Ok(report)
    }

    /// Number of words under each head bucket, in alphabet order.
    pub fn bucket_stats(&self) -> Vec<BucketStat> {
        let letters: Vec<u8> = self.trie.alphabet().iter().collect();
        letters.par_iter()
            .map(|&b| BucketStat { letter: char::from(b), words: self.trie.bucket_count(b) })
            .collect()
    }
}

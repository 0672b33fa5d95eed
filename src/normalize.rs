//! Turns free text into a word list: one lowercase word per line.

use std::io::{self, BufRead, Write};

use derive_new::new;
use serde::Serialize;
use tracing::warn;

use crate::alphabet::Alphabet;
use crate::error::NormalizeError;

#[derive(new, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub written: usize,
    pub skipped: usize,
}

/// Lowercases `token` and strips one trailing period. Tokens that still hold
/// a byte outside `alphabet` are rejected.
pub fn normalize_token(token: &str, alphabet: &Alphabet) -> Result<String, NormalizeError> {
    let mut word = token.to_ascii_lowercase();
    if word.ends_with('.') {
        word.pop();
    }
    if word.is_empty() {
        return Err(NormalizeError::Empty);
    }
    if !alphabet.contains_all(&word) {
        return Err(NormalizeError::OutOfAlphabet { token: token.to_string() });
    }
    Ok(word)
}

pub fn normalize_text<R, W>(reader: R, mut writer: W, alphabet: &Alphabet) -> io::Result<NormalizeReport>
    where R: BufRead, W: Write {
    let mut report = NormalizeReport::default();
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match normalize_token(token, alphabet) {
                Ok(word) => {
                    writeln!(writer, "{}", word)?;
                    report.written += 1;
                }
                Err(e) => {
                    warn!("skip {:?}: {}", token, e);
                    report.skipped += 1;
                }
            }
        }
    }
    writer.flush()?;
    Ok(report)
}

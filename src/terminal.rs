//! Interactive prefix completion on a raw-mode terminal.
//!
//! Typed characters are echoed, backspace deletes, a double TAB lists every
//! word starting with the current prefix and ESC leaves the loop.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::wordlist::tst::trie::Trie;

pub const KEY_BS: u8 = 8;
pub const KEY_TAB: u8 = 9;
pub const KEY_ESCAPE: u8 = 27;
pub const KEY_BACKSPACE: u8 = 127;

const PROMPT: &str = "> ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Backspace,
    Char(u8),
    Other(u8),
}

impl Key {
    pub fn decode(byte: u8, alphabet: &Alphabet) -> Key {
        match byte {
            KEY_TAB => Key::Tab,
            KEY_ESCAPE => Key::Escape,
            KEY_BACKSPACE | KEY_BS => Key::Backspace,
            b if alphabet.contains(b) => Key::Char(b),
            b => Key::Other(b),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Echo(char),
    Erase,
    Complete(Vec<String>),
    Exit,
}

/// Prefix buffer and double-TAB detection, independent of any terminal.
pub struct Completer<'w> {
    words: &'w Trie,
    prefix: String,
    tab_armed: bool,
    sorted: bool,
}

impl<'w> Completer<'w> {
    pub fn new(words: &'w Trie, sorted: bool) -> Completer<'w> {
        Completer { words, prefix: String::new(), tab_armed: false, sorted }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn feed(&mut self, key: Key) -> Action {
        match key {
            Key::Escape => Action::Exit,
            Key::Tab if self.tab_armed => {
                debug!(prefix = %self.prefix, "completing");
                Action::Complete(if self.sorted {
                    self.words.begin_with_sorted(&self.prefix)
                } else {
                    self.words.begin_with(&self.prefix)
                })
            }
            Key::Tab => {
                self.tab_armed = !self.prefix.is_empty();
                Action::Nothing
            }
            Key::Backspace => {
                self.tab_armed = false;
                match self.prefix.pop() {
                    Some(_) => Action::Erase,
                    None => Action::Nothing,
                }
            }
            Key::Char(b) => {
                self.tab_armed = false;
                let c = char::from(b);
                self.prefix.push(c);
                Action::Echo(c)
            }
            Key::Other(_) => {
                self.tab_armed = false;
                Action::Nothing
            }
        }
    }
}

/// Drives `completer` from single bytes of `input` until ESC or end of input.
pub fn run<R: Read, W: Write>(completer: &mut Completer, input: R, mut output: W) -> io::Result<()> {
    let alphabet = *completer.words.alphabet();
    writeln!(output, "Input a prefix string. Double <TAB> to auto-complete, <ESC> to exit.")?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for byte in input.bytes() {
        match completer.feed(Key::decode(byte?, &alphabet)) {
            Action::Exit => break,
            Action::Nothing => continue,
            Action::Echo(c) => write!(output, "{}", c)?,
            Action::Erase => write!(output, "\x08 \x08")?,
            Action::Complete(words) => {
                if !words.is_empty() {
                    writeln!(output)?;
                    write!(output, "{}", words.join(" "))?;
                }
                writeln!(output)?;
                write!(output, "{}{}", PROMPT, completer.prefix())?;
            }
        }
        output.flush()?;
    }
    writeln!(output)?;
    output.flush()
}

/// Puts stdin into non-canonical, non-echoing mode until dropped.
#[cfg(unix)]
pub struct RawMode {
    saved: libc::termios,
}

#[cfg(unix)]
impl RawMode {
    pub fn enable() -> io::Result<RawMode> {
        let mut saved = std::mem::MaybeUninit::<libc::termios>::uninit();
        // SAFETY: tcgetattr fully initializes the struct when it returns 0.
        let saved = unsafe {
            if libc::tcgetattr(libc::STDIN_FILENO, saved.as_mut_ptr()) != 0 {
                return Err(io::Error::last_os_error());
            }
            saved.assume_init()
        };

        let mut raw = saved;
        raw.c_lflag &= !(libc::ICANON | libc::ECHO);
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;
        // SAFETY: `raw` is a valid termios copied from the current settings.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(RawMode { saved })
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        // SAFETY: restores the attributes read in `enable`.
        unsafe {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.saved);
        }
    }
}

#[cfg(not(unix))]
pub struct RawMode;

#[cfg(not(unix))]
impl RawMode {
    pub fn enable() -> io::Result<RawMode> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "raw terminal mode needs a unix terminal"))
    }
}

//! Word list loading utilities
//!
//! A word list is plain text. The first whitespace-separated token on each
//! line is the word; anything after it (frequencies, definitions) is ignored,
//! as are blank lines.

use crate::core::Lexicon;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Read the first token of every non-blank line
///
/// # Errors
///
/// Returns the underlying I/O error if any line cannot be read. No partial
/// result is returned.
pub fn read_tokens<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tokens = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            tokens.push(token.to_string());
        }
    }

    Ok(tokens)
}

/// Build a lexicon from a reader
///
/// # Errors
///
/// Returns an I/O error if the reader fails part way through.
///
/// # Examples
/// ```
/// use doublets::wordlists::loader::load_from_reader;
///
/// let input = "Cold 120\nwarm\n\ncord noun\n";
/// let lexicon = load_from_reader(input.as_bytes()).unwrap();
/// assert_eq!(lexicon.len(), 3);
/// assert!(lexicon.contains("cold"));
/// ```
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Lexicon> {
    let tokens = read_tokens(reader)?;
    let lexicon = Lexicon::from_tokens(&tokens);

    info!(
        tokens = tokens.len(),
        words = lexicon.len(),
        "loaded word list"
    );

    Ok(lexicon)
}

/// Load a lexicon from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use doublets::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Convert an embedded string slice to a lexicon
///
/// # Examples
/// ```
/// use doublets::wordlists::loader::lexicon_from_slice;
/// use doublets::wordlists::WORDS;
///
/// let lexicon = lexicon_from_slice(WORDS);
/// assert_eq!(lexicon.len(), WORDS.len());
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    Lexicon::from_tokens(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    /// Reader that yields some bytes and then fails
    struct FailingReader {
        sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::other("disk on fire"));
            }
            self.sent = true;
            let data = b"cold\nwarm\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn read_tokens_takes_first_token_per_line() {
        let input = "cold 12 adj\n  warm\tnoun\nCORD\n";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(tokens, ["cold", "warm", "CORD"]);
    }

    #[test]
    fn read_tokens_skips_blank_lines() {
        let input = "\n\ncat\n   \n\t\ndog\n";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(tokens, ["cat", "dog"]);
    }

    #[test]
    fn read_tokens_handles_missing_trailing_newline() {
        let tokens = read_tokens("cat\ndog".as_bytes()).unwrap();
        assert_eq!(tokens, ["cat", "dog"]);
    }

    #[test]
    fn load_from_reader_normalizes() {
        let lexicon = load_from_reader("Cat\ncat\nCAT x\ncot\n".as_bytes()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("cot"));
    }

    #[test]
    fn load_from_empty_reader() {
        let lexicon = load_from_reader("".as_bytes()).unwrap();
        assert!(lexicon.is_empty());
    }

    #[test]
    fn load_from_failing_reader_is_an_error() {
        let reader = BufReader::new(FailingReader { sent: false });
        let result = load_from_reader(reader);
        assert!(result.is_err());
    }

    #[test]
    fn load_from_invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[b'c', b'a', 0xff, b'\n'];
        assert!(load_from_reader(bytes).is_err());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("/definitely/not/a/real/word/list.txt");
        assert_eq!(
            result.map(|l| l.len()).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn lexicon_from_slice_converts() {
        let lexicon = lexicon_from_slice(&["hot", "dot", "HOT"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn lexicon_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(lexicon_from_slice(input).is_empty());
    }
}

//! Pull the words out of a text file, in order
//!
//! Words are found with unicode segmentation rather than whitespace
//! splitting, so punctuation never sticks to a word and contractions like
//! "don't" stay whole. Segments without a single alphabetic character
//! (numbers, stray symbols) are not words and are skipped.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

use errors::*;

/// Streams the words of one file, one at a time
///
/// The file is read a line at a time, so only the current line's words are
/// ever buffered. To rescan a file, open a fresh extractor.
pub struct WordExtractor {
    lines: Lines<BufReader<File>>,
    pending: VecDeque<String>,
}

impl WordExtractor {
    /// Open a text file for word extraction
    pub fn open<P: AsRef<Path>>(path: P) -> Result<WordExtractor> {
        let file = File::open(path.as_ref())
            .map_err(|err| Error::FileOpen(path.as_ref().to_owned(), err))?;
        debug!("Extracting words from {}", path.as_ref().display());
        Ok(WordExtractor {
            lines: BufReader::new(file).lines(),
            pending: VecDeque::new(),
        })
    }
}

impl Iterator for WordExtractor {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.pending.extend(
                        line.unicode_words()
                            .filter(|word| word.chars().any(char::is_alphabetic))
                            .map(str::to_owned));
                }
                Some(Err(err)) => return Some(Err(Error::IOError(err))),
                None => return None,
            }
        }
    }
}

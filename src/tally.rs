//! Tally words into length buckets
//!
//! Bucket `L - 1` maps every distinct word of length `L` to the number of
//! times it occurred. One table covers exactly one file; dropping the table
//! releases every word it owns, so nothing bleeds into the next file.

use std::path::Path;

use errors::*;
use extract::WordExtractor;
use farm::{new_farm, FarmMap};

/// The longest word we tally. Longer words are dropped, not truncated.
pub const MAX_WORD_LEN: usize = 24;

/// Occurrence counts for the distinct words of one file, bucketed by length
pub struct TallyTable {
    buckets: Vec<FarmMap<String, u64>>,
}

impl TallyTable {
    /// An empty table with a bucket for each length 1..=MAX_WORD_LEN
    pub fn new() -> TallyTable {
        TallyTable { buckets: (0..MAX_WORD_LEN).map(|_| new_farm()).collect() }
    }

    /// Count one occurrence of `word`, case-sensitively.
    ///
    /// Length is counted in chars. Words longer than MAX_WORD_LEN (and the
    /// empty string) are silently dropped.
    pub fn insert(&mut self, word: &str) {
        let len = word.chars().count();
        if len == 0 || len > MAX_WORD_LEN {
            debug!("Dropping word of untallied length {}: {:?}", len, word);
            return;
        }
        *self.buckets[len - 1].entry(word.to_owned()).or_insert(0) += 1;
    }

    /// The (word, count) entries of length `len`, sorted by word.
    ///
    /// Sorting pins down the display order, which the hash buckets leave
    /// unspecified. A length no word can have yields no entries.
    pub fn entries(&self, len: usize) -> Vec<(&str, u64)> {
        if len == 0 || len > MAX_WORD_LEN {
            return vec![];
        }
        let mut entries: Vec<(&str, u64)> = self.buckets[len - 1]
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort();
        entries
    }

    /// Every length that has at least one word, shortest first
    pub fn lengths(&self) -> Vec<usize> {
        (1..MAX_WORD_LEN + 1)
            .filter(|&len| !self.buckets[len - 1].is_empty())
            .collect()
    }

    /// How many times `word` was tallied, if it ever was
    pub fn count_of(&self, word: &str) -> Option<u64> {
        let len = word.chars().count();
        if len == 0 || len > MAX_WORD_LEN {
            return None;
        }
        self.buckets[len - 1].get(word).cloned()
    }

    /// Number of distinct words tallied
    pub fn distinct(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    /// Total occurrences tallied, over all buckets
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.values().sum::<u64>()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }
}

/// Tally every word of the file at `path` into a fresh table.
///
/// An empty file is a success with an empty table; a file that cannot be
/// opened or read is an error.
pub fn tally_words_in_file<P: AsRef<Path>>(path: P) -> Result<TallyTable> {
    let mut table = TallyTable::new();
    for word in WordExtractor::open(path.as_ref())? {
        table.insert(&word?);
    }
    debug!("Tallied {} occurrences of {} distinct words from {}",
        table.total(), table.distinct(), path.as_ref().display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use errors::Error;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn table_of(text: &str) -> TallyTable {
        let mut table = TallyTable::new();
        for word in text.split_whitespace() {
            table.insert(word);
        }
        table
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn first_sighting_counts_one() {
        let table = table_of("lonely");
        assert_eq!(table.count_of("lonely"), Some(1));
        assert_eq!(table.distinct(), 1);
    }

    #[test]
    fn repeats_increment() {
        let table = table_of("yes yes yes no");
        assert_eq!(table.count_of("yes"), Some(3));
        assert_eq!(table.count_of("no"), Some(1));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn the_cat_sat_on_the_mat() {
        let table = table_of("the cat sat on the mat");
        assert_eq!(table.count_of("the"), Some(2));
        assert_eq!(table.count_of("cat"), Some(1));
        assert_eq!(table.count_of("sat"), Some(1));
        assert_eq!(table.count_of("on"), Some(1));
        assert_eq!(table.count_of("mat"), Some(1));
        assert_eq!(table.total(), 6);
        assert_eq!(table.lengths(), vec![2, 3]);
        assert_eq!(table.entries(2), vec![("on", 1)]);
        assert_eq!(table.entries(3),
            vec![("cat", 1), ("mat", 1), ("sat", 1), ("the", 2)]);
    }

    #[test]
    fn case_matters() {
        let table = table_of("The the THE");
        assert_eq!(table.count_of("The"), Some(1));
        assert_eq!(table.count_of("the"), Some(1));
        assert_eq!(table.count_of("THE"), Some(1));
        assert_eq!(table.distinct(), 3);
    }

    #[test]
    fn overlong_words_are_dropped_whole() {
        let mut table = TallyTable::new();
        table.insert("exactly-twentyfour-chars"); // 24 chars, kept
        table.insert("just-over-the-line-at-25!"); // 25 chars, dropped
        assert_eq!(table.count_of("exactly-twentyfour-chars"), Some(1));
        assert_eq!(table.distinct(), 1);
        // no truncated remnant either
        assert_eq!(table.entries(MAX_WORD_LEN),
            vec![("exactly-twentyfour-chars", 1)]);
    }

    #[test]
    fn empty_word_is_dropped() {
        let mut table = TallyTable::new();
        table.insert("");
        assert!(table.is_empty());
    }

    #[test]
    fn length_is_in_chars_not_bytes() {
        let table = table_of("café");
        assert_eq!(table.entries(4), vec![("café", 1)]);
        assert_eq!(table.entries(5), vec![]);
    }

    #[test]
    fn out_of_range_lengths_have_no_entries() {
        let table = table_of("some words here");
        assert_eq!(table.entries(0), vec![]);
        assert_eq!(table.entries(MAX_WORD_LEN + 1), vec![]);
        assert_eq!(table.entries(99), vec![]);
    }

    #[test]
    fn tallies_a_file() {
        let path = scratch_file("hapax-tally-basic.txt", "the cat sat on the mat\n");
        let table = tally_words_in_file(&path).unwrap();
        assert_eq!(table.count_of("the"), Some(2));
        assert_eq!(table.total(), 6);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn empty_file_tallies_to_an_empty_table() {
        let path = scratch_file("hapax-tally-empty.txt", "");
        let table = tally_words_in_file(&path).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.lengths(), Vec::<usize>::new());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let missing = env::temp_dir().join("hapax-tally-no-such-file.txt");
        let _ = fs::remove_file(&missing);
        match tally_words_in_file(&missing) {
            Err(Error::FileOpen(path, _)) => assert_eq!(path, missing),
            Err(other) => panic!("expected a FileOpen error, got {}", other),
            Ok(_) => panic!("expected a FileOpen error, got a table"),
        }
    }

    #[test]
    fn rebuilding_from_the_same_file_matches() {
        let path = scratch_file("hapax-tally-rebuild.txt", "tick tock tick\n");
        let first = tally_words_in_file(&path).unwrap();
        drop(first);
        let second = tally_words_in_file(&path).unwrap();
        assert_eq!(second.count_of("tick"), Some(2));
        assert_eq!(second.count_of("tock"), Some(1));
        assert_eq!(second.total(), 3);
    }

    #[test]
    fn counts_match_extracted_words() {
        let path = scratch_file("hapax-tally-conservation.txt",
            "every word lands in exactly one bucket, every time\n");
        let words: Vec<String> = ::extract::WordExtractor::open(&path).unwrap()
            .collect::<::errors::Result<_>>().unwrap();
        let table = tally_words_in_file(&path).unwrap();
        assert_eq!(table.total(), words.len() as u64);
    }
}

//! Reports over a finished tally table
//!
//! Both reports take any writer so the binary can hand them stdout and the
//! tests can hand them a buffer.

use std::io;
use std::io::Write;

use tally::TallyTable;

/// Print every tallied (word, count) pair, grouped by length
///
/// Buckets come out shortest first and each bucket's words come out sorted.
pub fn print_data<W: Write>(out: &mut W, filename: &str, table: &TallyTable) -> io::Result<()> {
    writeln!(out, "All word count data from file '{}':", filename)?;
    for len in table.lengths() {
        writeln!(out, "Length {}:", len)?;
        for (word, count) in table.entries(len) {
            writeln!(out, "    '{}' {}", word, count)?;
        }
    }
    Ok(())
}

/// Print the hapax legomena, one word per line with no counts or labels
///
/// With no length given, every bucket is visited shortest first. With one,
/// only that bucket is; a length nothing can have prints no words at all.
pub fn print_hapax<W: Write>(out: &mut W, filename: &str, table: &TallyTable,
                             length: Option<usize>) -> io::Result<()> {
    writeln!(out, "Hapax legomena from file '{}':", filename)?;
    let lengths = match length {
        Some(len) => vec![len],
        None => table.lengths(),
    };
    for len in lengths {
        for (word, count) in table.entries(len) {
            if count == 1 {
                writeln!(out, "{}", word)?;
            }
        }
    }
    Ok(())
}

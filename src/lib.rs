//! Find hapax legomena: tally the words of a text file by length
//!
//! This code does the real work behind the `hapax` binary, which stays a thin
//! wrapper. It pulls words out of a file, tallies them into length buckets,
//! and reports on the finished tally.


#[macro_use] extern crate log;
extern crate farmhash;
extern crate unicode_segmentation;
pub mod errors;
pub mod farm;
pub mod extract;
pub mod tally;
pub mod report;

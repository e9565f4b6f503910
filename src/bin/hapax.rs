//! Find and print the hapax legomena in one or more files
//!
//! A "hapax legomenon" is a word that occurs only once in the file. Each
//! file named on the command line gets its own tally, built and torn down
//! before the next file starts, so counts never mix across files.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate hapax;

use std::io;
use std::io::Write;
use std::process;

use hapax::errors::*;
use hapax::report::{print_data, print_hapax};
use hapax::tally::{tally_words_in_file, MAX_WORD_LEN};

pub fn main() {
    // Main can't return a Result, and every failure must exit with status 1
    if let Err(err) = inner_main() {
        writeln!(io::stderr(), "Error: {}", err).ok();
        process::exit(1);
    }
}

pub fn inner_main() -> Result<()> {
    env_logger::init();
    let app = app_from_crate!()
        .args_from_usage(
            "-d 'print out all data loaded before printing hapax legomena'
             -l [length] 'only print hapax legomena of length <length>'
             <datafile>... 'text files to scan, processed left to right'");
    let args = match app.get_matches_safe() {
        Ok(args) => args,
        Err(err) => {
            // Covers -h too: usage always goes to stderr with a failing status
            writeln!(io::stderr(), "{}", err.message).ok();
            process::exit(1);
        }
    };

    let hapax_length = match args.value_of("length") {
        Some(raw) => {
            let len = raw.parse::<usize>()
                .map_err(|_| Error::Other(
                    format!("-l wants a word length in digits, not '{}'", raw)))?;
            if len < 1 || len > MAX_WORD_LEN {
                warn!("No words of length {} are ever tallied (the longest is {}), \
                      so this report will be empty", len, MAX_WORD_LEN);
            }
            Some(len)
        }
        None => None,
    };

    let mut stdout = io::stdout();
    for filename in args.values_of("datafile").unwrap() {
        // One broken file poisons the whole run
        let table = tally_words_in_file(filename)?;
        info!("Tally loaded from '{}': {} occurrences of {} distinct words",
            filename, table.total(), table.distinct());
        if args.is_present("d") {
            print_data(&mut stdout, filename, &table)?;
        }
        print_hapax(&mut stdout, filename, &table, hapax_length)?;
        // the table drops here, before the next file builds a fresh one
    }
    Ok(())
}

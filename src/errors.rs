//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::num;
use std::fmt;
use std::path::PathBuf;

/// Type alias for hapax errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors occurring while tallying words
#[derive(Debug)]
pub enum Error {
    FileOpen(PathBuf, io::Error),
    IOError(io::Error),
    ParseIntError(num::ParseIntError),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::FileOpen(ref path, ref err) => {
                write!(f,
                    "Could not open '{}' for reading. Wrong directory? \
                    The OS error was: {}",
                    path.display(), err)
            },
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::ParseIntError(ref err) => write!(f, "Error parsing number: {}", err),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Error::FileOpen(_, _) => "Can't open an input file for reading",
            Error::IOError(ref err) => err.description(),
            Error::ParseIntError(ref err) => err.description(),
            Error::Other(ref info) => info,
        }
    }

    fn cause(&self) -> Option<&error::Error> {
        match *self {
            Error::FileOpen(_, ref err) => Some(err),
            Error::IOError(ref err) => Some(err),
            Error::ParseIntError(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<num::ParseIntError> for Error {
    fn from(err: num::ParseIntError) -> Self {
        Error::ParseIntError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

use std::error::Error as StdError;

#[derive(Debug)]
pub enum Error {
    OutOfRange { index: usize, size: usize },
    Parse(String),
    Io(std::io::Error),
    Message(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::OutOfRange { index, size } => {
                write!(f, "OutOfRange: bit index {} is not below {}", index, size)
            }
            Error::Parse(msg) => write!(f, "ParseError: {}", msg),
            Error::Io(err) => write!(f, "IoError: {}", err),
            Error::Message(msg) => write!(f, "{}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Error::OutOfRange { index, size }
    }

    pub fn from_message(msg: String) -> Self {
        Error::Message(msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<String> for Error {
    fn from(str: String) -> Self {
        Error::from_message(str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range(16, 16);
        assert_eq!("OutOfRange: bit index 16 is not below 16", err.to_string());
    }

    #[test]
    fn test_io_error_has_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "closed").into();
        assert!(err.source().is_some());
        assert!(Error::from(String::from("oops")).source().is_none());
    }
}

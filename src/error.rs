use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    IndexOutOfBounds(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds(index) => write!(f, "Invalid component index: {}. Must be 0, 1 or 2.", index),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

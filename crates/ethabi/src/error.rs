use std::fmt;

/// Where a deferred error was triggered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accessor {
    Index(usize),
    Name(String),
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Index(index) => write!(f, "index {}", index),
            Accessor::Name(name) => write!(f, "property {:?}", name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("{reason} (length: {length}, offset: {offset})")]
    BufferOverrun {
        reason: &'static str,
        buffer: Vec<u8>,
        length: usize,
        offset: usize,
    },

    #[error("index {index} out of range (length: {length})")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("unsupported operation {operation}: {reason}")]
    UnsupportedOperation { operation: &'static str, reason: String },

    #[error("deferred error during ABI decoding triggered accessing {accessor}")]
    Deferred {
        accessor: Accessor,
        source: Box<Error>,
    },

    #[error("invalid {argument}: {reason}")]
    InvalidArgument { argument: &'static str, reason: String },

    #[error("numeric fault in {operation}: {reason}")]
    NumericFault { operation: &'static str, reason: String },

    #[error("Invalid utf-8 data : {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Input data is invalid")]
    InvalidData,

    #[error("Hex decoding error : {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    pub(crate) fn overrun(reason: &'static str, buffer: &[u8], offset: usize) -> Self {
        Error::BufferOverrun {
            reason,
            buffer: buffer.to_vec(),
            length: buffer.len(),
            offset,
        }
    }

    pub fn is_buffer_overrun(&self) -> bool {
        matches!(self, Error::BufferOverrun { .. })
    }

    /// The error captured at decode time, if this one was raised lazily.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Error::Deferred { source, .. } => Some(source),
            _ => None,
        }
    }
}

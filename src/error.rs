//! Error types for reading, decoding and running a decompilation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Token kind requested from the reader, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Whitespace-delimited word.
    Word,
    /// Signed decimal integer.
    Int,
    /// Unsigned 32-bit word, decimal or hexadecimal.
    U32,
    /// Unsigned 64-bit word, decimal or hexadecimal.
    U64,
    /// Decimal floating-point value.
    Float,
    /// Whole line.
    Line,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "word",
            TokenKind::Int => "integer",
            TokenKind::U32 => "32-bit unsigned integer",
            TokenKind::U64 => "64-bit unsigned integer",
            TokenKind::Float => "float",
            TokenKind::Line => "line",
        };
        f.write_str(name)
    }
}

/// Failure of a single typed read from a token stream.
#[derive(Debug)]
pub enum ReadError {
    /// The stream ended before the requested token.
    UnexpectedEndOfStream {
        /// Line the reader was on when the stream ran out.
        line: usize,
    },
    /// The next token could not be coerced to the requested type.
    MalformedToken {
        /// Line the token was found on.
        line: usize,
        /// The offending token text.
        token: String,
        /// What the caller asked for.
        expected: TokenKind,
    },
    /// Underlying I/O failure.
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::UnexpectedEndOfStream { line } => {
                write!(f, "unexpected end of stream at line {line}")
            }
            ReadError::MalformedToken {
                line,
                token,
                expected,
            } => write!(f, "expected {expected} at line {line}, found `{token}`"),
            ReadError::Io(e) => write!(f, "read failed: {e}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Failure while decoding the contents of one data file.
#[derive(Debug)]
pub enum DecodeError {
    /// A fixed-layout field outside any statement block could not be read.
    Read(ReadError),
    /// The stream desynchronised inside a statement block.
    MalformedStatement {
        /// Zero-based index of the record within its block.
        record: usize,
        /// The read failure that desynchronised the block.
        source: ReadError,
    },
    /// Decoding stopped because the run was cancelled.
    Cancelled,
}

impl DecodeError {
    /// Line number the failure was detected on, when known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        let read = match self {
            DecodeError::Read(e) | DecodeError::MalformedStatement { source: e, .. } => e,
            DecodeError::Cancelled => return None,
        };
        match read {
            ReadError::UnexpectedEndOfStream { line } | ReadError::MalformedToken { line, .. } => {
                Some(*line)
            }
            ReadError::Io(_) => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Read(e) => write!(f, "{e}"),
            DecodeError::MalformedStatement { record, source } => {
                write!(f, "malformed statement in record {record}: {source}")
            }
            DecodeError::Cancelled => write!(f, "decompilation cancelled"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Read(e) | DecodeError::MalformedStatement { source: e, .. } => Some(e),
            DecodeError::Cancelled => None,
        }
    }
}

impl From<ReadError> for DecodeError {
    fn from(e: ReadError) -> Self {
        DecodeError::Read(e)
    }
}

/// Run-level failure of a decompilation.
#[derive(Debug)]
pub enum DecompileError {
    /// The input file or directory does not exist.
    InputNotFound(PathBuf),
    /// The first line of a file matched no known signature.
    UnknownFileFormat {
        /// File that was inspected.
        path: PathBuf,
        /// The first line that failed to match.
        signature: String,
    },
    /// A file failed to decode.
    Decode {
        /// File being decoded.
        path: PathBuf,
        /// Underlying decode failure.
        source: DecodeError,
    },
    /// A file or directory could not be read or written.
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The run was cancelled.
    Cancelled,
}

impl fmt::Display for DecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompileError::InputNotFound(path) => {
                write!(f, "input file/directory `{}` not found", path.display())
            }
            DecompileError::UnknownFileFormat { path, signature } => write!(
                f,
                "unknown format in `{}` (signature `{signature}`)",
                path.display()
            ),
            DecompileError::Decode { path, source } => {
                write!(f, "failed to decompile `{}`: {source}", path.display())
            }
            DecompileError::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            DecompileError::Cancelled => write!(f, "decompilation cancelled"),
        }
    }
}

impl std::error::Error for DecompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecompileError::Decode { source, .. } => Some(source),
            DecompileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

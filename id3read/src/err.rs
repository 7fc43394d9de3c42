//! Errors produced while decoding a tag or querying its contents.

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum ParseError {
    /// The tag or frame header is not a valid ID3v2.3/ID3v2.4 header.
    HeaderInvalid(HeaderProblem),
    /// The tag header has flags set for features that are not implemented.
    UnsupportedFeature {
        unsync: bool,
        extended: bool,
        experimental: bool,
    },
    /// A synchsafe integer had a byte with its high bit set.
    MalformedInteger([u8; 4]),
    /// The data ended before an expected amount of bytes could be read.
    ShortRead { expected: usize, found: usize },
    /// Text could not be decoded.
    DecodeFailure(DecodeProblem),
    /// No usable frame exists with the given ID.
    FrameNotFound([u8; 4]),
    /// No picture frame contains a front or back cover.
    PictureNotFound,
    /// The underlying stream failed for a reason other than ending.
    IoError(io::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderProblem {
    BadMagic([u8; 3]),
    UnsupportedVersion(u8),
    BadFrameId([u8; 4]),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeProblem {
    UnknownEncoding(u8),
    MissingBom,
    MissingTerminator,
    EmptyPayload,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::HeaderInvalid(problem) => write![f, "invalid header: {}", problem],
            Self::UnsupportedFeature {
                unsync,
                extended,
                experimental,
            } => write![
                f,
                "unsupported tag features: unsynchronisation={} extended header={} experimental={}",
                unsync, extended, experimental
            ],
            Self::MalformedInteger(raw) => write![f, "malformed synchsafe integer {:02X?}", raw],
            Self::ShortRead { expected, found } => {
                write![f, "expected {} bytes, found {}", expected, found]
            }
            Self::DecodeFailure(problem) => write![f, "could not decode text: {}", problem],
            Self::FrameNotFound(id) => {
                write![f, "no frame {} found", String::from_utf8_lossy(id)]
            }
            Self::PictureNotFound => write![f, "no front or back cover found"],
            Self::IoError(err) => write![f, "{}", err],
        }
    }
}

impl Display for HeaderProblem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::BadMagic(magic) => write![f, "expected \"ID3\", found {:02X?}", magic],
            Self::UnsupportedVersion(major) => {
                write![f, "expected ID3v2.3 or ID3v2.4, found ID3v2.{}", major]
            }
            Self::BadFrameId(id) => write![f, "invalid frame id {:02X?}", id],
        }
    }
}

impl Display for DecodeProblem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnknownEncoding(byte) => write![f, "unknown encoding {}", byte],
            Self::MissingBom => write![f, "missing UTF-16 byte-order mark"],
            Self::MissingTerminator => write![f, "missing string terminator"],
            Self::EmptyPayload => write![f, "no encoding byte"],
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(other: io::Error) -> Self {
        Self::IoError(other)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

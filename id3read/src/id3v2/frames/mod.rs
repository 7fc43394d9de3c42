//! Frame parsing and implementations.
//!
//! An ID3v2 tag is made up of chunks of data, called "Frames" by the ID3v2 standard. id3read keeps
//! frames as raw payloads and only interprets the ones it needs when they are queried,
//! namely text frames and attached pictures.

mod apic;
mod encoding;
mod header;
pub mod text;

pub use apic::{AttachedPicture, PictureType};
pub use header::FrameFlags;

pub(crate) use header::{FrameHeader, FRAME_HEADER_SIZE};

use crate::err::{HeaderProblem, ParseError, ParseResult};
use std::fmt::{self, Display, Formatter};
use std::str;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    id: FrameId,
    flags: FrameFlags,
    data: Vec<u8>,
}

impl Frame {
    pub(crate) fn new(header: FrameHeader, data: Vec<u8>) -> Self {
        Frame {
            id: header.id(),
            flags: header.flags(),
            data,
        }
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    /// The size of the payload. This is always the size declared by the frame header.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn flags(&self) -> FrameFlags {
        self.flags
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the payload has been compressed, encrypted, or unsynchronised. Payload
    /// transforms are not undone, so the data of these frames cannot be interpreted.
    pub fn is_transformed(&self) -> bool {
        self.flags.compressed || self.flags.encrypted || self.flags.unsync
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FrameId([u8; 4]);

impl FrameId {
    pub fn parse(id: &[u8; 4]) -> ParseResult<Self> {
        for ch in id {
            // Valid frame IDs can only contain uppercase ASCII chars and numbers.
            if !ch.is_ascii_uppercase() && !ch.is_ascii_digit() {
                return Err(ParseError::HeaderInvalid(HeaderProblem::BadFrameId(*id)));
            }
        }

        Ok(Self(*id))
    }

    pub fn inner(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // We've asserted that this frame is ASCII, so we can unwrap.
        str::from_utf8(&self.0).unwrap()
    }
}

impl Display for FrameId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write![f, "{}", self.as_str()]
    }
}

impl PartialEq<[u8; 4]> for FrameId {
    fn eq(&self, other: &[u8; 4]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<&[u8; 4]> for FrameId {
    fn eq(&self, other: &&[u8; 4]) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frame_ids() {
        assert_eq!(FrameId::parse(b"TIT2").unwrap(), b"TIT2");
        assert_eq!(FrameId::parse(b"AZ09").unwrap().as_str(), "AZ09");

        assert!(FrameId::parse(b"tit2").is_err());
        assert!(FrameId::parse(b"TIT\0").is_err());
        assert!(FrameId::parse(b"TI T").is_err());
        assert!(FrameId::parse(b"\xFFTIT").is_err());
    }

    #[test]
    fn reject_bad_frame_id() {
        assert!(matches!(
            FrameId::parse(b"ti#2"),
            Err(ParseError::HeaderInvalid(HeaderProblem::BadFrameId(id))) if &id == b"ti#2"
        ));
    }
}

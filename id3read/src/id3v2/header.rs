use crate::core::raw;
use crate::err::{HeaderProblem, ParseError, ParseResult};
use crate::id3v2::syncdata;

pub(crate) const ID_HEADER: &[u8] = b"ID3";
pub(crate) const HEADER_SIZE: usize = 10;

/// The ID3v2 versions that can be read.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Version {
    V23,
    V24,
}

impl Version {
    fn parse(major: u8) -> ParseResult<Self> {
        match major {
            3 => Ok(Self::V23),
            4 => Ok(Self::V24),
            _ => Err(ParseError::HeaderInvalid(HeaderProblem::UnsupportedVersion(
                major,
            ))),
        }
    }

    pub fn major(&self) -> u8 {
        match self {
            Self::V23 => 3,
            Self::V24 => 4,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TagHeader {
    version: Version,
    revision: u8,
    tag_size: u32,
    flags: TagFlags,
}

impl TagHeader {
    pub(crate) fn parse(raw: [u8; HEADER_SIZE]) -> ParseResult<Self> {
        // Verify that this header has a valid ID3 Identifier
        if &raw[0..3] != ID_HEADER {
            return Err(ParseError::HeaderInvalid(HeaderProblem::BadMagic([
                raw[0], raw[1], raw[2],
            ])));
        }

        let version = Version::parse(raw[3])?;

        // The revision is never checked.
        let revision = raw[4];

        let bits = raw::bits(raw[5]);

        let flags = TagFlags {
            unsync: bits[0],
            extended: bits[1],
            experimental: bits[2],
            footer: bits[3],
        };

        if flags.unsync || flags.extended || flags.experimental {
            return Err(ParseError::UnsupportedFeature {
                unsync: flags.unsync,
                extended: flags.extended,
                experimental: flags.experimental,
            });
        }

        let tag_size = syncdata::to_u28([raw[6], raw[7], raw[8], raw[9]])?;

        Ok(TagHeader {
            version,
            revision,
            tag_size,
            flags,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn revision(&self) -> u8 {
        self.revision
    }

    /// The declared size of the tag, excluding this header.
    pub fn size(&self) -> u32 {
        self.tag_size
    }

    pub fn flags(&self) -> &TagFlags {
        &self.flags
    }
}

/// Tag-wide flags. Any tag that could be read has the first three unset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TagFlags {
    pub unsync: bool,
    pub extended: bool,
    pub experimental: bool,
    pub footer: bool,
}

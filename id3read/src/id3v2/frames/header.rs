use super::FrameId;
use crate::core::raw;
use crate::err::ParseResult;
use crate::id3v2::header::Version;
use crate::id3v2::syncdata;

pub(crate) const FRAME_HEADER_SIZE: usize = 10;

pub(crate) struct FrameHeader {
    id: FrameId,
    size: u32,
    flags: FrameFlags,
}

impl FrameHeader {
    /// Parses a frame header. Status flags (byte 8) carry nothing that matters for reading,
    /// so they are ignored.
    pub(crate) fn parse(version: Version, raw: [u8; FRAME_HEADER_SIZE]) -> ParseResult<Self> {
        let id = FrameId::parse(&[raw[0], raw[1], raw[2], raw[3]])?;
        let size_bytes = [raw[4], raw[5], raw[6], raw[7]];

        let size = match version {
            Version::V23 => raw::to_u32(size_bytes),
            Version::V24 => syncdata::to_u28(size_bytes)?,
        };

        Ok(FrameHeader {
            id,
            size,
            flags: FrameFlags::parse(version, raw[9]),
        })
    }

    pub(crate) fn id(&self) -> FrameId {
        self.id
    }

    pub(crate) fn size(&self) -> u32 {
        self.size
    }

    pub(crate) fn flags(&self) -> FrameFlags {
        self.flags
    }
}

/// The format flags of a frame. ID3v2.3 frames never set `unsync` or `has_data_len`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameFlags {
    pub compressed: bool,
    pub encrypted: bool,
    pub unsync: bool,
    pub has_data_len: bool,
}

/// Where each format flag lives in the format flag byte, as a bit position counted from
/// the least significant bit.
struct FlagLayout {
    compressed: Option<u8>,
    encrypted: Option<u8>,
    unsync: Option<u8>,
    has_data_len: Option<u8>,
}

const LAYOUT_V23: FlagLayout = FlagLayout {
    compressed: Some(7),
    encrypted: Some(6),
    unsync: None,
    has_data_len: None,
};

const LAYOUT_V24: FlagLayout = FlagLayout {
    compressed: Some(3),
    encrypted: Some(2),
    unsync: Some(1),
    has_data_len: Some(0),
};

fn layout(version: Version) -> &'static FlagLayout {
    match version {
        Version::V23 => &LAYOUT_V23,
        Version::V24 => &LAYOUT_V24,
    }
}

impl FrameFlags {
    pub(crate) fn parse(version: Version, byte: u8) -> Self {
        let bits = raw::bits(byte);
        let layout = layout(version);
        let at = |pos: Option<u8>| pos.map_or(false, |pos| bits[7 - pos as usize]);

        FrameFlags {
            compressed: at(layout.compressed),
            encrypted: at(layout.encrypted),
            unsync: at(layout.unsync),
            has_data_len: at(layout.has_data_len),
        }
    }
}

//! ID3v2.3 and ID3v2.4 tag decoding.
//!
//! A [`Tag`](Tag) is read once from the start of a stream and is immutable afterwards.
//! Accessors decode individual frames on demand, so a broken frame only affects the
//! accessor that asks for it.

pub mod frame_list;
pub mod frames;
pub mod header;
mod syncdata;

pub use frame_list::FrameList;
pub use header::{TagFlags, TagHeader, Version};

use crate::core::io;
use crate::err::{ParseError, ParseResult};
use frames::{text, AttachedPicture, Frame, FrameHeader, FRAME_HEADER_SIZE};
use header::HEADER_SIZE;
use log::{debug, info, warn};
use std::io::Read;

/// Why frame parsing stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Termination {
    /// Every byte of the declared tag size was consumed by frames.
    Complete,
    /// The frames were followed by padding.
    Padding,
    /// A frame header was invalid or declared more data than the tag has left.
    Malformed,
    /// The stream ended before the tag did.
    Truncated,
}

#[derive(Clone, Debug)]
pub struct Tag {
    header: TagHeader,
    frames: FrameList,
    termination: Termination,
}

impl Tag {
    /// Reads a tag from a stream positioned at its first byte.
    ///
    /// Problems with the tag header are errors. Problems with individual frames are not:
    /// parsing just stops, keeping every frame read up to that point. Use
    /// [`termination`](Tag::termination) to find out how parsing ended.
    pub fn read<R: Read>(reader: &mut R) -> ParseResult<Self> {
        let mut raw = [0; HEADER_SIZE];
        let found = io::read_up_to(reader, &mut raw)?;

        if found < HEADER_SIZE {
            return Err(ParseError::ShortRead {
                expected: HEADER_SIZE,
                found,
            });
        }

        let header = TagHeader::parse(raw)?;
        let (frames, termination) = read_frames(&header, reader)?;

        Ok(Tag {
            header,
            frames,
            termination,
        })
    }

    pub fn version(&self) -> Version {
        self.header.version()
    }

    pub fn revision(&self) -> u8 {
        self.header.revision()
    }

    /// The tag size declared in the header.
    pub fn size(&self) -> u32 {
        self.header.size()
    }

    pub fn flags(&self) -> &TagFlags {
        self.header.flags()
    }

    pub fn frames(&self) -> &FrameList {
        &self.frames
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn is_truncated(&self) -> bool {
        self.termination == Termination::Truncated
    }

    /// Decodes the first usable frame with the given ID as text.
    pub fn text(&self, id: &[u8; 4]) -> ParseResult<String> {
        let payload = self
            .frames
            .payloads(id)
            .into_iter()
            .next()
            .ok_or(ParseError::FrameNotFound(*id))?;

        text::decode(payload)
    }

    pub fn title(&self) -> ParseResult<String> {
        self.text(b"TIT2")
    }

    pub fn artist(&self) -> ParseResult<String> {
        self.text(b"TPE1")
    }

    pub fn album(&self) -> ParseResult<String> {
        self.text(b"TALB")
    }

    pub fn composer(&self) -> ParseResult<String> {
        self.text(b"TCOM")
    }

    /// Returns every well-formed attached picture. Malformed ones are logged and skipped.
    pub fn pictures(&self) -> Vec<AttachedPicture> {
        let mut pictures = Vec::new();

        for payload in self.frames.payloads(b"APIC") {
            match AttachedPicture::parse(payload) {
                Ok(picture) => pictures.push(picture),
                Err(err) => warn!("skipping malformed APIC frame: {}", err),
            }
        }

        pictures
    }

    /// Returns the first attached picture that is a front or back cover.
    pub fn cover(&self) -> ParseResult<AttachedPicture> {
        self.pictures()
            .into_iter()
            .find(|picture| picture.is_cover())
            .ok_or(ParseError::PictureNotFound)
    }

    /// Returns the image data of [`cover`](Tag::cover).
    pub fn cover_image(&self) -> ParseResult<&[u8]> {
        Ok(self.cover()?.picture())
    }
}

fn read_frames<R: Read>(header: &TagHeader, reader: &mut R) -> ParseResult<(FrameList, Termination)> {
    let tag_size = header.size() as usize;
    let mut frames = FrameList::new();
    let mut consumed = 0;

    while consumed < tag_size {
        let remaining = tag_size - consumed;

        // There is no room for another frame, whatever is left must be padding.
        if remaining < FRAME_HEADER_SIZE {
            info!("{} bytes left over after frames", remaining);
            return Ok((frames, Termination::Padding));
        }

        let mut raw = [0; FRAME_HEADER_SIZE];

        if io::read_up_to(reader, &mut raw)? < FRAME_HEADER_SIZE {
            info!("stream ended inside a frame header at {}", consumed);
            return Ok((frames, Termination::Truncated));
        }

        // Its assumed the moment we've hit a zero, we've reached the padding
        if raw[0] == 0 {
            return Ok((frames, Termination::Padding));
        }

        let frame_header = match FrameHeader::parse(header.version(), raw) {
            Ok(frame_header) => frame_header,
            Err(err) => {
                info!("stopping at malformed frame header: {}", err);
                return Ok((frames, Termination::Malformed));
            }
        };

        let size = frame_header.size() as usize;

        if size > remaining - FRAME_HEADER_SIZE {
            info!(
                "frame {} declares {} bytes, but only {} are left in the tag",
                frame_header.id(),
                size,
                remaining - FRAME_HEADER_SIZE
            );

            return Ok((frames, Termination::Malformed));
        }

        let data = io::read_vec(reader, size)?;

        if data.len() < size {
            info!(
                "stream ended inside frame {}: expected {} bytes, found {}",
                frame_header.id(),
                size,
                data.len()
            );

            return Ok((frames, Termination::Truncated));
        }

        debug!(
            "read frame {} [{} bytes, {:?}]",
            frame_header.id(),
            size,
            frame_header.flags()
        );

        frames.push(Frame::new(frame_header, data));
        consumed += FRAME_HEADER_SIZE + size;
    }

    Ok((frames, Termination::Complete))
}

use crate::id3v2::frames::Frame;
use log::warn;
use std::ops::Index;
use std::slice::Iter;

/// The frames of a tag, in the order they appeared.
///
/// Unlike a map, duplicate frames are all kept. Queries for a single frame return the
/// first match.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrameList {
    frames: Vec<Frame>,
}

impl FrameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame)
    }

    pub fn first(&self, id: &[u8; 4]) -> Option<&Frame> {
        self.frames.iter().find(|frame| frame.id() == id)
    }

    pub fn get_all(&self, id: &[u8; 4]) -> Vec<&Frame> {
        self.frames.iter().filter(|frame| frame.id() == id).collect()
    }

    /// Returns the payloads of every frame with the given ID that can be interpreted.
    /// Compressed, encrypted, and unsynchronised frames are skipped.
    pub fn payloads(&self, id: &[u8; 4]) -> Vec<&[u8]> {
        let mut payloads = Vec::new();

        for frame in self.get_all(id) {
            if frame.is_transformed() {
                warn!(
                    "skipping frame {} with unsupported flags {:?}",
                    frame.id(),
                    frame.flags()
                );

                continue;
            }

            payloads.push(frame.data())
        }

        payloads
    }

    pub fn iter(&self) -> Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Index<usize> for FrameList {
    type Output = Frame;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.frames[idx]
    }
}

impl<'a> IntoIterator for &'a FrameList {
    type Item = &'a Frame;
    type IntoIter = Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id3v2::frames::FrameHeader;
    use crate::id3v2::Version;

    fn frame(header: &[u8; 10], data: &[u8]) -> Frame {
        Frame::new(
            FrameHeader::parse(Version::V24, *header).unwrap(),
            data.to_vec(),
        )
    }

    fn list() -> FrameList {
        let mut frames = FrameList::new();

        frames.push(frame(b"TIT2\x00\x00\x00\x03\x00\x00", b"\x00A\x00"));
        frames.push(frame(b"TPE1\x00\x00\x00\x03\x00\x00", b"\x00B\x00"));
        frames.push(frame(b"TIT2\x00\x00\x00\x03\x00\x08", b"\x00C\x00"));
        frames.push(frame(b"TIT2\x00\x00\x00\x03\x00\x01", b"\x00D\x00"));

        frames
    }

    #[test]
    fn keep_duplicates() {
        let frames = list();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames.get_all(b"TIT2").len(), 3);
        assert_eq!(frames.first(b"TIT2").unwrap().data(), b"\x00A\x00");
        assert_eq!(frames[1].id(), b"TPE1");
    }

    #[test]
    fn payloads_skip_transformed() {
        let frames = list();

        // The compressed frame is skipped, but a data length indicator alone is fine.
        assert_eq!(
            frames.payloads(b"TIT2"),
            vec![&b"\x00A\x00"[..], &b"\x00D\x00"[..]]
        );
    }

    #[test]
    fn iterate_in_order() {
        let frames = list();
        let ids: Vec<String> = frames.iter().map(|frame| frame.id().as_str().to_owned()).collect();

        assert_eq!(ids, vec!["TIT2", "TPE1", "TIT2", "TIT2"]);
        assert_eq!((&frames).into_iter().count(), frames.len());
    }

    #[test]
    fn missing_frames() {
        let frames = list();

        assert!(frames.first(b"TALB").is_none());
        assert!(frames.get_all(b"TALB").is_empty());
        assert!(frames.payloads(b"TALB").is_empty());
        assert!(FrameList::new().is_empty());
    }
}

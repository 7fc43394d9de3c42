use crate::err::{DecodeProblem, ParseError, ParseResult};
use std::io::{self, ErrorKind, Read};

/// A simple ergonomics layer around an internal slice, created primarily to automate bounds checking.
pub struct BufStream<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> BufStream<'a> {
    /// Construct a new `BufStream` from `src`.
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Read this stream into an array of size `N`, returning an error when the array
    /// cannot be filled. Nothing is consumed on failure.
    pub fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let mut arr = [0; N];
        arr.copy_from_slice(self.slice(N)?);
        Ok(arr)
    }

    /// Read exactly one byte from this stream.
    pub fn read_u8(&mut self) -> ParseResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Consumes the stream and returns a slice of size n.
    pub fn slice(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(ParseError::ShortRead {
                expected: n,
                found: self.remaining(),
            });
        }

        self.pos += n;

        Ok(&self.src[self.pos - n..self.pos])
    }

    /// Searches for `needle` in steps of `needle.len()` and returns the data before it,
    /// consuming the needle as well. If the needle cannot be found, `None` is returned and
    /// the stream is left untouched.
    pub fn search(&mut self, needle: &[u8]) -> Option<&'a [u8]> {
        let start = self.pos;
        let found = self.src[start..]
            .chunks_exact(needle.len())
            .position(|chunk| chunk == needle)?;

        let end = start + found * needle.len();
        self.pos = end + needle.len();

        Some(&self.src[start..end])
    }

    /// Like [`search`](BufStream::search), but fails when there is no terminator.
    pub fn read_terminated(&mut self, needle: &[u8]) -> ParseResult<&'a [u8]> {
        self.search(needle)
            .ok_or(ParseError::DecodeFailure(DecodeProblem::MissingTerminator))
    }

    /// Takes the rest of the streams data into a slice, leaving the stream in an fully consumed state.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.src[self.pos..];
        self.pos = self.src.len();
        rest
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.pos()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// Fills as much of `buf` as `reader` can provide, returning the amount read. Anything
/// less than `buf.len()` means that the stream has ended.
pub fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(filled)
}

/// Reads up to `len` bytes from `reader` into an owned buffer. The buffer grows with the
/// data actually read, so a bogus length cannot cause a huge allocation up front.
pub fn read_vec<R: Read + ?Sized>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.take(len as u64).read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out one byte per read, interrupting every other call.
    struct InterruptingReader {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl InterruptingReader {
        fn new(data: &[u8]) -> Self {
            InterruptingReader {
                data: data.to_vec(),
                pos: 0,
                interrupt: true,
            }
        }
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;

            if !self.interrupt {
                return Err(io::Error::new(ErrorKind::Interrupted, "interrupted"));
            }

            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }

            buf[0] = self.data[self.pos];
            self.pos += 1;

            Ok(1)
        }
    }

    #[test]
    fn read_arrays() {
        let mut stream = BufStream::new(b"\x01\x02\x03");

        assert_eq!(stream.read_u8().unwrap(), 0x01);
        assert_eq!(stream.read_array::<2>().unwrap(), [0x02, 0x03]);
        assert!(stream.is_empty());
    }

    #[test]
    fn short_read_leaves_stream() {
        let mut stream = BufStream::new(b"\x01\x02");

        match stream.read_array::<4>() {
            Err(ParseError::ShortRead { expected, found }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }

        assert_eq!(stream.pos(), 0);
    }

    #[test]
    fn search_single() {
        let mut stream = BufStream::new(b"image/png\0rest");

        assert_eq!(stream.search(&[0]), Some(&b"image/png"[..]));
        assert_eq!(stream.take_rest(), b"rest");
        assert!(stream.search(&[0]).is_none());
    }

    #[test]
    fn search_aligned() {
        // The unaligned 00 00 at offsets 1..3 must not be taken as a terminator.
        let mut stream = BufStream::new(b"\x01\x00\x00\x41\x00\x00\xAB");

        assert_eq!(stream.search(&[0, 0]), Some(&b"\x01\x00\x00\x41"[..]));
        assert_eq!(stream.take_rest(), b"\xAB");
    }

    #[test]
    fn search_missing() {
        let mut stream = BufStream::new(b"\x41\x00\x42");

        assert!(stream.search(&[0, 0]).is_none());
        assert_eq!(stream.pos(), 0);
        assert!(stream.read_terminated(&[0, 0]).is_err());
    }

    #[test]
    fn read_from_short_reader() {
        let mut reader = Cursor::new(b"\x01\x02\x03".to_vec());
        let mut buf = [0; 5];

        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"\x01\x02\x03");

        let mut reader = Cursor::new(b"\x01\x02\x03".to_vec());
        assert_eq!(read_vec(&mut reader, 2).unwrap(), b"\x01\x02");
        assert_eq!(read_vec(&mut reader, 8).unwrap(), b"\x03");
    }

    #[test]
    fn retry_interrupted_reads() {
        let mut reader = InterruptingReader::new(b"\x01\x02\x03");
        let mut buf = [0; 2];

        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 2);
        assert_eq!(&buf, b"\x01\x02");

        let mut buf = [0; 4];

        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0x03);
    }

    #[test]
    fn propagate_read_errors() {
        struct BrokenReader;

        impl Read for BrokenReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::Other, "broken"))
            }
        }

        let mut buf = [0; 4];

        assert_eq!(
            read_up_to(&mut BrokenReader, &mut buf).unwrap_err().kind(),
            ErrorKind::Other
        );
        assert!(read_vec(&mut BrokenReader, 4).is_err());
    }
}

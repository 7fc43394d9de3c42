#![allow(dead_code)]

use std::io::{self, ErrorKind, Read};

/// Builds raw ID3v2 tags in memory.
pub struct TagBuilder {
    major: u8,
    flags: u8,
    body: Vec<u8>,
    declared_size: Option<u32>,
}

impl TagBuilder {
    pub fn v3() -> Self {
        Self::with_version(3)
    }

    pub fn v4() -> Self {
        Self::with_version(4)
    }

    fn with_version(major: u8) -> Self {
        TagBuilder {
            major,
            flags: 0,
            body: Vec::new(),
            declared_size: None,
        }
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn frame(self, id: &[u8; 4], data: &[u8]) -> Self {
        self.frame_with_flags(id, 0, data)
    }

    pub fn frame_with_flags(mut self, id: &[u8; 4], format_flags: u8, data: &[u8]) -> Self {
        let size = data.len() as u32;

        self.body.extend(id);

        match self.major {
            3 => self.body.extend(&size.to_be_bytes()),
            _ => self.body.extend(&synchsafe(size)),
        }

        self.body.extend(&[0, format_flags]);
        self.body.extend(data);
        self
    }

    pub fn raw(mut self, data: &[u8]) -> Self {
        self.body.extend(data);
        self
    }

    pub fn padding(mut self, len: usize) -> Self {
        self.body.resize(self.body.len() + len, 0);
        self
    }

    /// Overrides the tag size written to the header, which defaults to the body size.
    pub fn declared_size(mut self, size: u32) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let size = self.declared_size.unwrap_or(self.body.len() as u32);

        let mut tag = b"ID3".to_vec();
        tag.extend(&[self.major, 0, self.flags]);
        tag.extend(&synchsafe(size));
        tag.extend(self.body);
        tag
    }
}

pub fn synchsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

pub fn latin1(text: &str) -> Vec<u8> {
    let mut data = vec![0x00];
    data.extend(text.bytes());
    data.push(0);
    data
}

pub fn utf16(text: &str) -> Vec<u8> {
    let mut data = vec![0x01, 0xFF, 0xFE];
    data.extend(text.encode_utf16().flat_map(|unit| unit.to_le_bytes().to_vec()));
    data.extend(&[0, 0]);
    data
}

pub fn utf8(text: &str) -> Vec<u8> {
    let mut data = vec![0x03];
    data.extend(text.as_bytes());
    data.push(0);
    data
}

/// Hands out one byte per read, with an interrupted read before each one.
pub struct TrickleReader {
    data: Vec<u8>,
    pos: usize,
    interrupt: bool,
}

impl TrickleReader {
    pub fn new(data: Vec<u8>) -> Self {
        TrickleReader {
            data,
            pos: 0,
            interrupt: true,
        }
    }
}

impl Read for TrickleReader {
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

/// Reads normally until `fail_at` bytes have been handed out, then fails every read.
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    fail_at: usize,
}

impl FailingReader {
    pub fn new(data: Vec<u8>, fail_at: usize) -> Self {
        FailingReader {
            data,
            pos: 0,
            fail_at,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.fail_at {
            return Err(io::Error::new(ErrorKind::Other, "device went away"));
        }

        let end = self.fail_at.min(self.data.len()).min(self.pos + buf.len());
        let len = end - self.pos;

        buf[..len].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;

        Ok(len)
    }
}

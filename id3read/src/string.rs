//! Tag string handling.

use crate::core::io::BufStream;
use crate::err::{DecodeProblem, ParseError, ParseResult};
use log::error;

const NUL: &[u8] = &[0, 0];

/// The text encodings an ID3v2 frame can declare.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Encoding {
    /// ISO-8859-1, also known as Latin1. Every byte maps directly to a code point.
    Latin1,
    /// UTF-16 with a BOM that decides the endianness of the rest of the string.
    Utf16,
    /// UTF-16BE with no BOM.
    Utf16Be,
    /// UTF-8.
    Utf8,
}

impl Encoding {
    /// The size of a NUL terminator in this encoding.
    pub fn nul_size(&self) -> usize {
        match self {
            Self::Utf8 | Self::Latin1 => 1,
            Self::Utf16 | Self::Utf16Be => 2,
        }
    }
}

/// Decodes `data` up to its first NUL terminator, or the end of the data if there is none.
pub fn decode(encoding: Encoding, data: &[u8]) -> ParseResult<String> {
    read_terminated(encoding, &mut BufStream::new(data))
}

/// Searches and consumes the stream up until a NUL terminator and decodes it into a
/// string according to the encoding. The string will not include the terminator. A stream
/// with no terminator is consumed entirely.
pub(crate) fn read_terminated(encoding: Encoding, stream: &mut BufStream) -> ParseResult<String> {
    match encoding {
        Encoding::Latin1 => Ok(decode_latin1(until_nul(encoding, stream))),
        Encoding::Utf8 => Ok(String::from_utf8_lossy(until_nul(encoding, stream)).into_owned()),
        Encoding::Utf16Be => Ok(decode_utf16be(until_nul(encoding, stream))),
        Encoding::Utf16 => {
            // UTF16 requires us to figure out the endianness ourselves from the BOM
            let bom = stream
                .read_array::<2>()
                .map_err(|_| ParseError::DecodeFailure(DecodeProblem::MissingBom))?;

            match bom {
                [0xFE, 0xFF] => Ok(decode_utf16be(until_nul(encoding, stream))),
                [0xFF, 0xFE] => Ok(decode_utf16le(until_nul(encoding, stream))),
                _ => {
                    error!("could not determine UTF-16 BOM from {:02X?}", bom);
                    Err(ParseError::DecodeFailure(DecodeProblem::MissingBom))
                }
            }
        }
    }
}

fn until_nul<'a>(encoding: Encoding, stream: &mut BufStream<'a>) -> &'a [u8] {
    match stream.search(&NUL[..encoding.nul_size()]) {
        Some(string) => string,
        None => stream.take_rest(),
    }
}

fn decode_latin1(data: &[u8]) -> String {
    // UTF-8 expresses high bits as two bytes instead of one, so we cannot convert directly.
    // Instead, we simply reinterpret the bytes as chars to make sure the code-points line up.
    data.iter().map(|&byte| char::from(byte)).collect()
}

fn decode_utf16be(data: &[u8]) -> String {
    String::from_utf16_lossy(
        data.chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect::<Vec<u16>>()
            .as_slice(),
    )
}

fn decode_utf16le(data: &[u8]) -> String {
    String::from_utf16_lossy(
        data.chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect::<Vec<u16>>()
            .as_slice(),
    )
}

use crate::err::{DecodeProblem, ParseError, ParseResult};
use crate::string::Encoding;
use log::error;

const FLAG_LATIN1: u8 = 0x00;
const FLAG_UTF16: u8 = 0x01;
const FLAG_UTF16BE: u8 = 0x02;
const FLAG_UTF8: u8 = 0x03;

pub(crate) fn parse(flag: u8) -> ParseResult<Encoding> {
    match flag {
        FLAG_LATIN1 => Ok(Encoding::Latin1),
        FLAG_UTF16 => Ok(Encoding::Utf16),
        FLAG_UTF16BE => Ok(Encoding::Utf16Be),
        FLAG_UTF8 => Ok(Encoding::Utf8),
        enc => {
            error!("unrecognized encoding {}", enc);
            Err(ParseError::DecodeFailure(DecodeProblem::UnknownEncoding(enc)))
        }
    }
}

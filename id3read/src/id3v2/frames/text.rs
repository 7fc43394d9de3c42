//! Text frame decoding.

use super::encoding;
use crate::err::{DecodeProblem, ParseError, ParseResult};
use crate::string;

/// Decodes the payload of a text frame, where the first byte is the encoding and the
/// rest is the text itself. Only the first string of the frame is returned.
pub fn decode(payload: &[u8]) -> ParseResult<String> {
    let (&flag, text) = payload
        .split_first()
        .ok_or(ParseError::DecodeFailure(DecodeProblem::EmptyPayload))?;

    string::decode(encoding::parse(flag)?, text)
}

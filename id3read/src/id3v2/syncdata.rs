use crate::err::{ParseError, ParseResult};

/// Decodes a 28-bit synchsafe integer, where only the lower 7 bits of each byte are used.
pub(crate) fn to_u28(raw: [u8; 4]) -> ParseResult<u32> {
    if raw.iter().any(|byte| byte & 0x80 != 0) {
        return Err(ParseError::MalformedInteger(raw));
    }

    Ok(raw
        .iter()
        .fold(0, |sum, &byte| (sum << 7) | u32::from(byte & 0x7F)))
}

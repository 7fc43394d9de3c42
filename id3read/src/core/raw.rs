/// Assembles a regular big-endian u32.
#[inline(always)]
pub fn to_u32(raw: [u8; 4]) -> u32 {
    u32::from_be_bytes(raw)
}

#[inline(always)]
pub fn bit_at(pos: u8, byte: u8) -> bool {
    (byte >> pos) & 1 == 1
}

/// Unpacks a byte into its eight bits, most significant bit first.
pub fn bits(byte: u8) -> [bool; 8] {
    let mut bits = [false; 8];

    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = bit_at(7 - i as u8, byte);
    }

    bits
}

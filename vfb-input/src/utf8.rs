//! Single-codepoint UTF-8 decoding for committed text input.

use crate::keyboard::Keyval;

/// Payload bits carried by each continuation byte.
const CONTINUATION_BITS: u32 = 6;
const CONTINUATION_MASK: u8 = 0b0011_1111;

/// Payload mask of the lead byte, indexed by sequence length.
const LEAD_MASK: [u8; 5] = [0, 0b0111_1111, 0b0001_1111, 0b0000_1111, 0b0000_0111];

/// Decode the codepoint held in `bytes`.
///
/// The sequence ends at the first NUL byte or the end of the slice and must be
/// 1 to 4 bytes of valid UTF-8; `None` is returned for an empty or longer
/// sequence. Other malformed input decodes to an unspecified value.
///
/// ```
/// use vfb_input::decode_codepoint;
///
/// assert_eq!(decode_codepoint(b"A"), Some(0x41));
/// assert_eq!(decode_codepoint(&[0xC3, 0xA9, 0x00]), Some(0xE9));
/// assert_eq!(decode_codepoint(b""), None);
/// ```
pub fn decode_codepoint(bytes: &[u8]) -> Option<Keyval> {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    if !(1..=4).contains(&len) {
        return None;
    }

    let mut shift = CONTINUATION_BITS * (len as u32 - 1);
    let mut codepoint = ((bytes[0] & LEAD_MASK[len]) as u32) << shift;
    for &byte in &bytes[1..len] {
        shift -= CONTINUATION_BITS;
        codepoint |= ((byte & CONTINUATION_MASK) as u32) << shift;
    }
    Some(codepoint)
}

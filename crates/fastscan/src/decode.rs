//! Multi-byte scalar decoding atop the block reader.
//!
//! The lead byte's run of leading 1-bits gives the sequence length (0 for
//! ASCII, 2–4 for multi-byte). Continuation bytes are pulled one at a time,
//! so a sequence may straddle any number of refills; the assembled bytes are
//! then decoded strictly. Anything malformed (a bare continuation byte, an
//! overlong form, a surrogate, end-of-input mid-sequence) is reported as
//! [`ScanError::InvalidUtf8`] rather than decoded best-effort.

use std::io::Read;

use crate::{error::ScanError, reader::BlockReader};

/// Decodes the next scalar from `reader`.
///
/// Returns `Ok(None)` at end-of-input. The bytes of a rejected sequence
/// (including the byte that broke it) are consumed and carried in the error.
pub(crate) fn next_scalar<R: Read>(reader: &mut BlockReader<R>) -> Result<Option<char>, ScanError> {
    let Some(lead) = reader.next_byte()? else {
        return Ok(None);
    };
    let len = match lead.leading_ones() {
        0 => return Ok(Some(char::from(lead))),
        n @ 2..=4 => n as usize,
        // A bare continuation byte (10xxxxxx) or a 5+-byte form.
        _ => return Err(ScanError::InvalidUtf8 { bytes: vec![lead] }),
    };

    let mut seq = [lead, 0, 0, 0];
    for filled in 1..len {
        match reader.next_byte()? {
            Some(byte) => seq[filled] = byte,
            None => {
                return Err(ScanError::InvalidUtf8 {
                    bytes: seq[..filled].to_vec(),
                });
            }
        }
    }

    // Strict decode of the assembled sequence; rejects overlong forms and
    // surrogate code points, not just bad continuation bits.
    match bstr::decode_utf8(&seq[..len]) {
        (Some(ch), decoded) if decoded == len => Ok(Some(ch)),
        _ => Err(ScanError::InvalidUtf8 {
            bytes: seq[..len].to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReadErrorPolicy;

    fn decode_all(data: &[u8], capacity: usize) -> Result<String, ScanError> {
        let mut reader = BlockReader::new(data, capacity, ReadErrorPolicy::DegradeToEof);
        let mut out = String::new();
        while let Some(ch) = next_scalar(&mut reader)? {
            out.push(ch);
        }
        Ok(out)
    }

    #[test]
    fn decodes_each_sequence_length() {
        // 1, 2, 3, and 4 byte scalars.
        assert_eq!(decode_all("aé€🦀".as_bytes(), 128).unwrap(), "aé€🦀");
    }

    #[test]
    fn sequences_straddle_refills() {
        // Capacity 1 puts every continuation byte behind its own refill.
        assert_eq!(decode_all("é€🦀é".as_bytes(), 1).unwrap(), "é€🦀é");
    }

    #[test]
    fn bare_continuation_byte_is_rejected() {
        match decode_all(&[0x80], 128) {
            Err(ScanError::InvalidUtf8 { bytes }) => assert_eq!(bytes, vec![0x80]),
            other => panic!("expected invalid sequence, got {other:?}"),
        }
    }

    #[test]
    fn five_byte_form_is_rejected() {
        assert!(matches!(
            decode_all(&[0xF8, 0x80, 0x80, 0x80, 0x80], 128),
            Err(ScanError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn overlong_form_is_rejected() {
        // 0xC0 0xAF is an overlong encoding of '/'.
        assert!(matches!(
            decode_all(&[0xC0, 0xAF], 128),
            Err(ScanError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn surrogate_is_rejected() {
        // 0xED 0xA0 0x80 encodes U+D800.
        assert!(matches!(
            decode_all(&[0xED, 0xA0, 0x80], 128),
            Err(ScanError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn truncated_sequence_at_eof_is_rejected() {
        // Lead byte of a 3-byte sequence, one continuation, then EOF.
        match decode_all(&[0xE2, 0x82], 128) {
            Err(ScanError::InvalidUtf8 { bytes }) => assert_eq!(bytes, vec![0xE2, 0x82]),
            other => panic!("expected invalid sequence, got {other:?}"),
        }
    }

    #[test]
    fn bad_continuation_consumes_the_breaking_byte() {
        // 'a' after a 2-byte lead is consumed as part of the bad sequence.
        match decode_all(&[0xC3, b'a', b'b'], 128) {
            Err(ScanError::InvalidUtf8 { bytes }) => assert_eq!(bytes, vec![0xC3, b'a']),
            other => panic!("expected invalid sequence, got {other:?}"),
        }
    }
}

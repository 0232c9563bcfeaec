//! Encode/decode a `Vec<LetterSequence>` to a compact, platform-independent
//! byte buffer, so a producer (the coordinator) and a consumer (a worker)
//! can share a candidate list across a process/thread boundary without
//! sharing memory.
//!
//! Wire format: a 4-byte little-endian count, followed by that many 8-byte
//! little-endian packed `LetterSequence` values. No compression.

use crate::error::SerializeError;
use crate::letter_sequence::LetterSequence;

pub fn encode(sequences: &[LetterSequence]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 8 * sequences.len());
    buf.extend_from_slice(&(sequences.len() as u32).to_le_bytes());
    for seq in sequences {
        buf.extend_from_slice(&seq.to_raw().to_le_bytes());
    }
    buf
}

pub fn decode(bytes: &[u8]) -> Result<Vec<LetterSequence>, SerializeError> {
    if bytes.len() < 4 {
        return Err(SerializeError::Truncated);
    }
    let count = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
    let available = (bytes.len() - 4) / 8;
    if count as usize > available {
        return Err(SerializeError::OversizedCount {
            declared: count,
            available,
        });
    }

    let mut out = Vec::with_capacity(count as usize);
    let mut offset = 4;
    for _ in 0..count {
        let raw = u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap());
        out.push(LetterSequence::from_raw(raw)?);
        offset += 8;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_empty() {
        let bytes = encode(&[]);
        assert_eq!(bytes.len(), 4);
        assert_eq!(decode(&bytes).unwrap(), vec![]);
    }

    #[test]
    fn round_trip_several() {
        let words = ["CAT", "DOG", "VEHICULAR", "RITZILY"];
        let seqs: Vec<_> = words
            .iter()
            .map(|w| LetterSequence::from_ascii(w).unwrap())
            .collect();
        let bytes = encode(&seqs);
        assert_eq!(bytes.len(), 4 + 8 * seqs.len());
        assert_eq!(decode(&bytes).unwrap(), seqs);
    }

    #[test]
    fn truncated_buffer_rejected() {
        assert_eq!(decode(&[1, 0]), Err(SerializeError::Truncated));
    }

    #[test]
    fn oversized_count_rejected() {
        let mut buf = 5u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&1u64.to_le_bytes()); // only one value present
        assert_eq!(
            decode(&buf),
            Err(SerializeError::OversizedCount {
                declared: 5,
                available: 1
            })
        );
    }

    #[test]
    fn malformed_sentinel_rejected() {
        let mut buf = 1u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&0u64.to_le_bytes()); // no sentinel bit at all
        assert!(matches!(
            decode(&buf),
            Err(SerializeError::InvalidSentinel { .. })
        ));
    }
}

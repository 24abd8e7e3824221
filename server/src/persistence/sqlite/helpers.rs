//! Encode/decode helpers for SQLite ↔ domain type conversions.
//!
//! A packet's `combinaison` is a `Vec<i32>`, but SQLite offers no array
//! column. It is stored as the decimal form of each element joined with
//! `,` and parsed back on read. Plain integers never contain the delimiter,
//! so no escaping is needed; `decode_combinaison(Some(&encode_combinaison(v)))`
//! returns `v` for every `v`, including the empty sequence.

use std::num::ParseIntError;

const DELIMITER: char = ',';

/// A stored combination that does not parse back into integers.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("segment {index} ({segment:?}) is not an integer: {source}")]
    InvalidElement {
        index: usize,
        segment: String,
        #[source]
        source: ParseIntError,
    },
}

// ── combinaison ────────────────────────────────────────────────────────

/// Encode a combination into its `TEXT` column value. `[]` encodes to `""`.
pub fn encode_combinaison(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Decode a `TEXT` column value back into a combination.
///
/// `NULL` and `""` both mean the empty combination. Surrounding whitespace
/// on a segment is ignored, as is a leading `+`, so `" +3"` reads as `3` and
/// re-encodes as `"3"`. An empty segment is an error.
pub fn decode_combinaison(raw: Option<&str>) -> Result<Vec<i32>, CodecError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    raw.split(DELIMITER)
        .enumerate()
        .map(|(index, segment)| {
            segment
                .trim()
                .parse::<i32>()
                .map_err(|source| CodecError::InvalidElement {
                    index,
                    segment: segment.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinaison_roundtrip() {
        let cases: Vec<Vec<i32>> = vec![
            vec![],
            vec![0],
            vec![1, 2, 3],
            vec![250, 250, 500, 1000],
            vec![7, 7, 7, 7, 7, 7, 7, 7],
            vec![i32::MAX, 0, 42],
            vec![-5, 10],
        ];
        for values in &cases {
            let encoded = encode_combinaison(values);
            let decoded = decode_combinaison(Some(&encoded)).unwrap();
            assert_eq!(&decoded, values, "roundtrip failed for {:?}", values);
        }
    }

    #[test]
    fn encode_joins_with_commas() {
        assert_eq!(encode_combinaison(&[1, 2, 3]), "1,2,3");
        assert_eq!(encode_combinaison(&[42]), "42");
        assert_eq!(encode_combinaison(&[]), "");
    }

    #[test]
    fn decode_null_and_empty_are_empty() {
        assert_eq!(decode_combinaison(None).unwrap(), Vec::<i32>::new());
        assert_eq!(decode_combinaison(Some("")).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn decode_tolerates_whitespace_around_segments() {
        assert_eq!(decode_combinaison(Some("1, 2 ,3")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn decode_accepts_leading_plus_and_normalizes() {
        let decoded = decode_combinaison(Some(" +3,4")).unwrap();
        assert_eq!(decoded, vec![3, 4]);
        assert_eq!(encode_combinaison(&decoded), "3,4");
    }

    #[test]
    fn decode_rejects_non_integer_segment() {
        let err = decode_combinaison(Some("3,x,5")).unwrap_err();
        match err {
            CodecError::InvalidElement { index, segment, .. } => {
                assert_eq!(index, 1);
                assert_eq!(segment, "x");
            }
        }
    }

    #[test]
    fn decode_rejects_empty_segment() {
        assert!(decode_combinaison(Some("1,,2")).is_err());
        assert!(decode_combinaison(Some("1,2,")).is_err());
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert!(decode_combinaison(Some("99999999999")).is_err());
    }
}

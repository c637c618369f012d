//! `Serialize`/`Deserialize` for [`CursorSeq`], enabled by `feature = "serde"`.
//!
//! A sequence is written as its elements plus the index of the cursor:
//! ```text
//! {"elements":[1.0,2.0,3.0],"cursor":1}
//! ```

use ::serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::seq::CursorSeq;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    elements: Vec<f64>,
    cursor: Option<usize>,
}

impl Serialize for CursorSeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Snapshot {
            elements: self.iter().collect(),
            cursor: self.position(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CursorSeq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Snapshot { elements, cursor } = Snapshot::deserialize(deserializer)?;
        let len = elements.len();
        let mut seq: CursorSeq = elements.into_iter().collect();
        if let Some(index) = cursor {
            if index >= len {
                return Err(de::Error::custom(format!(
                    "cursor index {} out of range for {} elements",
                    index, len
                )));
            }
            seq.seek(index).map_err(de::Error::custom)?;
        }
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use crate::CursorSeq;

    #[test]
    fn serde_keeps_cursor() {
        let mut seq: CursorSeq = [1.0, 2.5, 3.0].iter().copied().collect();
        seq.start();
        seq.advance().unwrap();

        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"{"elements":[1.0,2.5,3.0],"cursor":1}"#);

        let back: CursorSeq = serde_json::from_str(&json).unwrap();
        back.assert_invariants();
        assert_eq!(back, seq);
    }

    #[test]
    fn serde_without_cursor() {
        let seq = CursorSeq::new();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"{"elements":[],"cursor":null}"#);
        let back: CursorSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn serde_rejects_out_of_range_cursor() {
        let err = serde_json::from_str::<CursorSeq>(r#"{"elements":[1.0],"cursor":1}"#)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("cursor index 1 out of range for 1 elements"));
    }
}

//! Part Model

use serde::{Deserialize, Serialize};

/// Image shown on labels when a part has no picture of its own
pub const PLACEHOLDER_PART_IMAGE: &str = "https://cdn.example.com/parts/placeholder.jpg";

/// Finished-good part entity
///
/// Reference data owned by the record-storage backend; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    /// User-facing part name
    pub name: String,
    /// Part number / code
    pub part_no: String,
    /// Product model identifier
    pub model: String,
    /// Image URL for display and label picture
    pub image_url: String,
    /// Standard packing quantity
    pub std_packing: u32,
}

impl Part {
    /// Placeholder used when a requested part id cannot be resolved locally
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "Unknown Part".to_string(),
            part_no: "N/A".to_string(),
            model: "N/A".to_string(),
            image_url: PLACEHOLDER_PART_IMAGE.to_string(),
            std_packing: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let part = Part {
            id: "p1".to_string(),
            name: "Gear Assembly".to_string(),
            part_no: "GA-1042".to_string(),
            model: "M-AX".to_string(),
            image_url: "https://cdn.example.com/parts/p1.jpg".to_string(),
            std_packing: 10,
        };

        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"partNo\":\"GA-1042\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"stdPacking\":10"));

        let back: Part = serde_json::from_str(&json).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn test_placeholder() {
        let part = Part::placeholder("p99");
        assert_eq!(part.id, "p99");
        assert_eq!(part.name, "Unknown Part");
        assert_eq!(part.part_no, "N/A");
        assert_eq!(part.std_packing, 1);
    }
}

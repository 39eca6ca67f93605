//! Runner Model

use serde::{Deserialize, Serialize};

/// Runner / manpower entity
///
/// Reference data owned by the record-storage backend; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    pub id: String,
    /// Runner full name
    pub name: String,
    /// Optional avatar/headshot URL for the selection gallery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Runner {
    /// Placeholder used when a requested runner id cannot be resolved locally
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: "Unknown".to_string(),
            avatar_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_avatar_is_omitted() {
        let runner = Runner::placeholder("r9");
        let json = serde_json::to_string(&runner).unwrap();
        assert!(!json.contains("avatarUrl"));

        let back: Runner = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Unknown");
        assert_eq!(back.avatar_url, None);
    }
}

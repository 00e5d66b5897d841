//! Resource Record Types
//!
//! String and binary resource records as carried by the resources service,
//! plus their collection aliases.

use serde::{Deserialize, Serialize};

use crate::resources::{Categorized, ResourceCollection};

// == String Resource ==
/// A string resource within a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringResource {
    /// Entity id
    pub id: i32,
    /// Resource category
    pub category: String,
    /// Resource sub-category
    pub sub_category: String,
    /// The resource text
    pub value: String,
}

impl Categorized for StringResource {
    fn category(&self) -> &str {
        &self.category
    }

    fn sub_category(&self) -> &str {
        &self.sub_category
    }
}

// == Binary Resource ==
/// A binary resource within a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryResource {
    /// Entity id
    pub id: i32,
    /// Resource category
    pub category: String,
    /// Resource sub-category
    pub sub_category: String,
    /// The resource payload
    pub data: Vec<u8>,
}

impl Categorized for BinaryResource {
    fn category(&self) -> &str {
        &self.category
    }

    fn sub_category(&self) -> &str {
        &self.sub_category
    }
}

// == Collection Aliases ==
/// A string resource collection within a system.
pub type StringResourceCollection = ResourceCollection<StringResource>;

/// A binary resource collection within a system.
pub type BinaryResourceCollection = ResourceCollection<BinaryResource>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_resource_roundtrip() {
        let resource = StringResource {
            id: 7,
            category: "Labels".to_string(),
            sub_category: "Login".to_string(),
            value: "Welcome".to_string(),
        };

        let json = serde_json::to_string(&resource).unwrap();
        let back: StringResource = serde_json::from_str(&json).unwrap();

        assert_eq!(back, resource);
    }

    #[test]
    fn test_collection_from_deserialized_payload() {
        let payload = r#"[
            {"id": 1, "category": "Labels", "sub_category": "Login", "value": "Welcome"},
            {"id": 2, "category": "Errors", "sub_category": "Login", "value": "Denied"}
        ]"#;

        let collection: StringResourceCollection = serde_json::from_str(payload).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.match_by_category("labels").len(), 1);
    }

    #[test]
    fn test_binary_resource_roundtrip() {
        let resource = BinaryResource {
            id: 3,
            category: "Images".to_string(),
            sub_category: "Logos".to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        };

        let json = serde_json::to_string(&resource).unwrap();
        let back: BinaryResource = serde_json::from_str(&json).unwrap();

        assert_eq!(back, resource);
    }
}

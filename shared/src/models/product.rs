//! Product Model

use serde::{Deserialize, Deserializer, Serialize};

/// Catalog product entity
///
/// Immutable once loaded; the store replaces the whole collection on every
/// successful fetch rather than patching records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Free-text description; category filtering matches against it
    pub description: String,
    /// Price in decimal dollars, as served by the catalog API
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Ordered size labels (e.g. `["7", "8", "9"]`)
    ///
    /// The list endpoint serves a JSON array while the detail endpoint serves
    /// a comma-delimited string; both wire forms deserialize to split labels.
    #[serde(default, deserialize_with = "deserialize_sizes")]
    pub sizes: Vec<String>,
}

/// Split a delimited size string into trimmed, non-empty labels
///
/// `"7, 8,9"` becomes `["7", "8", "9"]`. Order is preserved.
pub fn split_size_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

fn deserialize_sizes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SizesField {
        Labels(Vec<String>),
        Delimited(String),
    }

    Ok(match SizesField::deserialize(deserializer)? {
        SizesField::Labels(labels) => labels
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
            .map(str::to_owned)
            .collect(),
        SizesField::Delimited(raw) => split_size_labels(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sizes_from_array() {
        let json = r#"{
            "id": 1,
            "name": "Air Trainer",
            "description": "Running shoes",
            "price": 89.99,
            "imageUrl": "https://cdn.example.com/air-trainer.png",
            "sizes": ["7", "8", "9"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.sizes, vec!["7", "8", "9"]);
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://cdn.example.com/air-trainer.png")
        );
    }

    #[test]
    fn deserializes_sizes_from_delimited_string() {
        let json = r#"{
            "id": 2,
            "name": "Court Classic",
            "description": "Basketball shoes",
            "price": 120.0,
            "sizes": "7,8,9"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sizes, vec!["7", "8", "9"]);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn missing_sizes_field_defaults_to_empty() {
        let json = r#"{
            "id": 3,
            "name": "Gym Flex",
            "description": "Training & Gym",
            "price": 45.0
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.sizes.is_empty());
    }

    #[test]
    fn split_trims_whitespace_and_drops_empty_segments() {
        assert_eq!(split_size_labels("7, 8 ,9"), vec!["7", "8", "9"]);
        assert_eq!(split_size_labels("UK 6,UK 7"), vec!["UK 6", "UK 7"]);
        assert_eq!(split_size_labels("7,,8,"), vec!["7", "8"]);
        assert!(split_size_labels("").is_empty());
        assert!(split_size_labels(" , ").is_empty());
    }

    #[test]
    fn serializes_sizes_as_array() {
        let product = Product {
            id: 4,
            name: "Road Racer".to_string(),
            description: "Running shoes".to_string(),
            price: 150.0,
            image_url: None,
            sizes: vec!["10".to_string(), "11".to_string()],
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["sizes"], serde_json::json!(["10", "11"]));
        assert!(json.get("imageUrl").is_none());
    }
}

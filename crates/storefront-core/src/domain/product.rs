//! Product Entity
//!
//! A listing in the marketplace catalog.

use serde::{Deserialize, Serialize};
use super::cart_item::{resolve_id, CartItem, ItemId};
use super::error::DomainError;

/// Wire shape accepted when reading a product (seed files may use `_id`)
#[derive(Deserialize)]
struct ProductRecord {
    id: Option<ItemId>,
    #[serde(rename = "_id")]
    legacy_id: Option<ItemId>,
    title: String,
    price: String,
    image: String,
    category: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: resolve_id(record.id, record.legacy_id)?,
            title: record.title,
            price: record.price,
            image: record.image,
            category: record.category,
            description: record.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Project this listing into a cart line
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cart_item_keeps_fields() {
        let product = Product {
            id: ItemId::new("p-7"),
            title: "Pricing Table".into(),
            price: "$19".into(),
            image: "https://cdn/p7.png".into(),
            category: "components".into(),
            description: Some("Three tiers".into()),
        };
        let item = product.to_cart_item();
        assert_eq!(item.id, product.id);
        assert_eq!(item.title, "Pricing Table");
        assert_eq!(item.category, "components");
    }

    #[test]
    fn test_description_is_optional() {
        let json = r#"{"id":"p-1","title":"A","price":"$1","image":"","category":"c"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_none());
    }

    #[test]
    fn test_seed_with_both_ids_keeps_id() {
        let json = r#"{"id":"p-2","_id":"64f0c0ffee","title":"A","price":"$1","image":"","category":"c"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p-2");
        let out = serde_json::to_value(&product).unwrap();
        assert!(out.get("_id").is_none());
    }
}

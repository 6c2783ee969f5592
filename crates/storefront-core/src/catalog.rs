//! Product Catalog
//!
//! In-memory listing loaded from seed JSON. Seeding upserts by id, so
//! running the same seed twice leaves one row per product.

use crate::domain::{DomainResult, ItemId, Product};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of products.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for product in products {
            catalog.upsert(product);
        }
        log::debug!("catalog loaded with {} products", catalog.len());
        Ok(catalog)
    }

    /// Insert or replace by id. A replaced product keeps its position.
    /// Returns true when the product was new.
    pub fn upsert(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                false
            }
            None => {
                self.products.push(product);
                true
            }
        }
    }

    pub fn find_by_id(&self, id: &ItemId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    const SEED: &str = r#"[
        {"id":"t-1","title":"SaaS Landing","price":"$39","image":"https://cdn/t1.png","category":"templates"},
        {"id":"c-1","title":"Navbar","price":"$9","image":"https://cdn/c1.png","category":"components"},
        {"_id":"t-2","title":"Portfolio","price":"$29","image":"https://cdn/t2.png","category":"templates"}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(SEED).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_by_id(&"t-2".into()).unwrap().title, "Portfolio");
    }

    #[test]
    fn test_seed_row_with_both_ids_loads() {
        let seed = r#"[
            {"id":"t-9","_id":"64f0c0ffee","title":"Blog","price":"$15","image":"","category":"templates"},
            {"_id":"c-9","title":"Footer","price":"$5","image":"","category":"components"}
        ]"#;
        let catalog = Catalog::from_json(seed).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_id(&"t-9".into()).is_some());
        assert!(catalog.find_by_id(&"64f0c0ffee".into()).is_none());
        assert!(catalog.find_by_id(&"c-9".into()).is_some());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Catalog::from_json("{"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut catalog = Catalog::from_json(SEED).unwrap();
        let mut navbar = catalog.find_by_id(&"c-1".into()).unwrap().clone();
        navbar.price = "$12".into();
        assert!(!catalog.upsert(navbar));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[1].price, "$12");
    }

    #[test]
    fn test_categories_and_filter() {
        let catalog = Catalog::from_json(SEED).unwrap();
        assert_eq!(catalog.categories(), vec!["templates", "components"]);
        let titles: Vec<_> = catalog.by_category("templates").map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["SaaS Landing", "Portfolio"]);
    }
}

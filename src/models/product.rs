use serde::{Deserialize, Serialize};

/// A catalog item as stored by the backend. `id` is the backend document
/// identifier; an empty id on an admin submit means "create" and is minted
/// client-side before the upsert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub featured: bool,
}

impl Product {
    /// Distinct categories across a product list, sorted, empty ones skipped.
    pub fn categories(products: &[Product]) -> Vec<String> {
        let mut cats: Vec<String> = products
            .iter()
            .map(|p| p.category.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }
}

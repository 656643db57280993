use std::collections::HashSet;

use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

// To add a product, append an entry to this file.
const CATALOG_JSON: &str = include_str!("../assets/products.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid product catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductIcon {
    BrainCircuit,
    BarChart,
    Wrench,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub category: String,
    pub icon: ProductIcon,
    pub description: String,
    pub how_it_works: String,
    pub advantages: Vec<String>,
}

impl Product {
    /// Hub pages stay on this site; anything else lives in the main app.
    pub fn href(&self) -> String {
        if self.path.starts_with(config::HUB_PREFIX) {
            self.path.clone()
        } else {
            format!("{}{}", config::get_app_url(), self.path)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }
    Ok(products)
}

pub fn load_catalog() -> Vec<Product> {
    match parse_catalog(CATALOG_JSON) {
        Ok(products) => products,
        Err(e) => {
            error!("Failed to load product catalog: {}", e);
            Vec::new()
        }
    }
}

/// `All` followed by every category in order of first appearance.
pub fn categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut filters = vec![CategoryFilter::All];
    for product in products {
        if seen.insert(product.category.as_str()) {
            filters.push(CategoryFilter::Only(product.category.clone()));
        }
    }
    filters
}

pub fn filter_products<'a>(products: &'a [Product], query: &str, filter: &CategoryFilter) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| filter.matches(&product.category))
        .filter(|product| {
            product.name.to_lowercase().contains(&query) || product.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn embedded_catalog_parses() {
        let products = parse_catalog(CATALOG_JSON).expect("embedded catalog");
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "AI Tutor");
        assert_eq!(products[1].icon, ProductIcon::BarChart);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let products = load_catalog();
        assert_eq!(names(filter_products(&products, "tutor", &CategoryFilter::All)), vec!["AI Tutor"]);
        assert_eq!(names(filter_products(&products, "TUTOR", &CategoryFilter::All)), vec!["AI Tutor"]);
        assert_eq!(
            names(filter_products(&products, "flashcards", &CategoryFilter::All)),
            vec!["Smart Content Generator"]
        );
        assert_eq!(filter_products(&products, "", &CategoryFilter::All).len(), 3);
    }

    #[test]
    fn category_filter_selects_exact_category() {
        let products = load_catalog();
        let analytics = CategoryFilter::Only("Analytics".to_string());
        assert_eq!(names(filter_products(&products, "", &analytics)), vec!["Performance Analytics"]);
    }

    #[test]
    fn impossible_category_with_matching_query_is_empty() {
        let products = load_catalog();
        let missing = CategoryFilter::Only("Gardening".to_string());
        assert!(filter_products(&products, "tutor", &missing).is_empty());
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let products = load_catalog();
        let labels: Vec<String> = categories(&products).iter().map(|c| c.label().to_string()).collect();
        assert_eq!(labels, vec!["All", "Learning Tools", "Analytics", "Productivity"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "path": "/a", "category": "X", "icon": "wrench",
             "description": "", "how_it_works": "", "advantages": []},
            {"id": 1, "name": "B", "path": "/b", "category": "X", "icon": "wrench",
             "description": "", "how_it_works": "", "advantages": []}
        ]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::DuplicateId(1))));
        assert!(matches!(parse_catalog("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn hub_paths_stay_relative() {
        let products = load_catalog();
        assert_eq!(products[1].href(), "/hub/restrict");
        assert!(products[0].href().ends_with("/workspace"));
    }
}

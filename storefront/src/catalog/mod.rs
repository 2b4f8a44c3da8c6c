//! Product catalog
//!
//! Read-only product and category lookups. Data is validated once when the
//! catalog is built; lookups never fail, a missing product is `None`.

mod seed;

use crate::utils::money::validate_price;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_required_text,
};
use shared::{AppError, AppResult, Category, ErrorCode, Product};
use std::collections::{HashMap, HashSet};

/// Product catalog with id index
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    /// product id -> index into `products`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The storefront's built-in catalog
    pub fn seeded() -> AppResult<Self> {
        Self::from_products(seed::products(), seed::categories())
    }

    /// Build a catalog, validating every product
    ///
    /// Rejects duplicate ids, unknown categories, empty names and negative
    /// prices. Prices are normalized to 2 decimal places.
    pub fn from_products(products: Vec<Product>, categories: Vec<Category>) -> AppResult<Self> {
        let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();

        let mut index = HashMap::with_capacity(products.len());
        let mut validated = Vec::with_capacity(products.len());

        for (i, product) in products.into_iter().enumerate() {
            let product = normalize_product(product)?;

            if !category_ids.contains(product.category.as_str()) {
                return Err(AppError::with_message(
                    ErrorCode::CategoryNotFound,
                    format!(
                        "product {} references unknown category {}",
                        product.id, product.category
                    ),
                )
                .with_detail("product_id", product.id.as_str()));
            }

            if index.insert(product.id.clone(), i).is_some() {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateProductId,
                    format!("duplicate product id {}", product.id),
                ));
            }
            validated.push(product);
        }

        tracing::debug!(
            products = validated.len(),
            categories = categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products: validated,
            categories,
            index,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn products_by_category(&self, category_id: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category_id)
            .cloned()
            .collect()
    }

    pub fn featured_products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }
}

/// Validate a product entering a store and normalize its price to cents
///
/// Applied to catalog data, restored snapshots and products handed to the
/// cart or wishlist.
pub(crate) fn normalize_product(mut product: Product) -> AppResult<Product> {
    validate_product(&product)?;
    product.price = validate_price(product.price, "price")
        .map_err(|e| e.with_detail("product_id", product.id.as_str()))?;
    Ok(product)
}

/// Field-level checks shared with the inventory book
pub(crate) fn validate_product(product: &Product) -> AppResult<()> {
    validate_required_text(&product.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&product.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&product.category, "category", MAX_SHORT_TEXT_LEN)?;
    if product.description.len() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "description is too long ({} chars, max {MAX_NOTE_LEN})",
            product.description.len()
        )));
    }
    if product.image_url.len() > MAX_URL_LEN {
        return Err(AppError::validation("image url is too long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample(id: &str, category: &str, price: Decimal) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            category: category.into(),
            image_url: "/placeholder.svg".into(),
            inventory_count: 1,
            featured: false,
        }
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.products().len(), 12);
        assert_eq!(catalog.categories().len(), 4);

        let p = catalog.product_by_id("3").unwrap();
        assert_eq!(p.name, "Bouquet of Wildflowers");
        assert_eq!(p.price, Decimal::new(3999, 2));
        assert_eq!(p.inventory_count, 5);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::seeded().unwrap();

        assert!(catalog.product_by_id("404").is_none());
        assert_eq!(catalog.category_by_id("pot").unwrap().name, "Pots & Holders");
        assert!(catalog.category_by_id("hats").is_none());

        let keychains = catalog.products_by_category("keychain");
        let ids: Vec<&str> = keychains.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "5", "9"]);
        assert!(catalog.products_by_category("hats").is_empty());

        let featured = catalog.featured_products();
        assert_eq!(featured.len(), 5);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Catalog::from_products(
            vec![sample("1", "pot", Decimal::new(-100, 2))],
            seed::categories(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
    }

    #[test]
    fn test_rejects_duplicate_ids_and_unknown_category() {
        let err = Catalog::from_products(
            vec![
                sample("1", "pot", Decimal::ONE),
                sample("1", "pot", Decimal::ONE),
            ],
            seed::categories(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateProductId);

        let err = Catalog::from_products(
            vec![sample("1", "hats", Decimal::ONE)],
            seed::categories(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[test]
    fn test_normalize_product() {
        let p = normalize_product(sample("1", "pot", Decimal::new(4999, 3))).unwrap();
        assert_eq!(p.price, Decimal::new(500, 2));

        let err = normalize_product(sample("1", "pot", Decimal::MAX)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);

        let err = normalize_product(sample("", "pot", Decimal::ONE)).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_normalizes_price_scale() {
        let catalog = Catalog::from_products(
            vec![sample("1", "pot", Decimal::new(19999, 3))],
            seed::categories(),
        )
        .unwrap();
        assert_eq!(catalog.product_by_id("1").unwrap().price, Decimal::new(2000, 2));
    }
}

//! # Product catalogue model
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Product`] | A catalogue entry as returned by the API. |
//! | [`ProductInput`] | Body for `POST /products` and `PUT /products/:id`. |
//! | [`ProductForm`] | Raw text from the admin create/edit form, checked by [`ProductForm::validate`] before anything is sent. |
//!
//! Prices are [`Decimal`] so they survive the trip through the form and the wire
//! without binary rounding; on the wire they are plain JSON numbers.
//!
//! ## Helpers
//!
//! - [`categories`]: distinct, non-empty categories in first-seen order, used to
//!   build the category filter chips.
//! - [`filter_products`]: the admin table's local filter over name and category.
//! - [`format_price`]: two decimals and a euro sign.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalogue entry as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Fields an administrator supplies when creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i64,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Reasons a product form is rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    MissingName,
    #[error("Price must be a number")]
    InvalidPrice,
    #[error("Price must be greater than zero")]
    PriceNotPositive,
    #[error("Quantity must be a whole number")]
    InvalidQuantity,
    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}

/// Admin product form state, one string per input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub image_url: String,
}

impl ProductForm {
    /// Check the form and build the request body.
    ///
    /// Checks run in field order, so the first problem found is reported.
    pub fn validate(&self) -> Result<ProductInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| ValidationError::InvalidPrice)?;
        if price <= Decimal::ZERO {
            return Err(ValidationError::PriceNotPositive);
        }

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        Ok(ProductInput {
            name: name.to_string(),
            description: non_empty(&self.description),
            price,
            quantity,
            category: non_empty(&self.category),
            image_url: non_empty(&self.image_url),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category: product.category.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Distinct non-empty categories, in the order they first appear.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_deref()) {
        if category.trim().is_empty() || seen.iter().any(|c| c == category) {
            continue;
        }
        seen.push(category.to_string());
    }
    seen
}

/// Products whose name or category contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Render a price as `"12.50 €"`.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2} €", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: Option<&str>) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: Decimal::new(1000, 2),
            quantity: 1,
            category: category.map(str::to_string),
            image_url: None,
            user_id: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn form(name: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_categories_skip_missing_and_duplicates() {
        let products = vec![
            product(1, "a", Some("A")),
            product(2, "b", Some("B")),
            product(3, "c", None),
            product(4, "d", Some("A")),
            product(5, "e", Some("")),
        ];
        assert_eq!(categories(&products), vec!["A".to_string(), "B".to_string()]);
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_validate_accepts_good_form() {
        let mut f = form("  Widget ", "9.99", "3");
        f.description = "   ".to_string();
        f.category = "Tools".to_string();

        let input = f.validate().unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, Decimal::new(999, 2));
        assert_eq!(input.quantity, 3);
        assert_eq!(input.description, None);
        assert_eq!(input.category.as_deref(), Some("Tools"));
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert_eq!(form(" ", "1", "1").validate(), Err(ValidationError::MissingName));
        assert_eq!(form("x", "0", "1").validate(), Err(ValidationError::PriceNotPositive));
        assert_eq!(form("x", "-2.5", "1").validate(), Err(ValidationError::PriceNotPositive));
        assert_eq!(form("x", "abc", "1").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(form("x", "", "1").validate(), Err(ValidationError::InvalidPrice));
        assert_eq!(form("x", "1", "-1").validate(), Err(ValidationError::NegativeQuantity));
        assert_eq!(form("x", "1", "1.5").validate(), Err(ValidationError::InvalidQuantity));
        // Zero stock is allowed
        assert!(form("x", "1", "0").validate().is_ok());
    }

    #[test]
    fn test_form_from_product_roundtrips() {
        let mut p = product(9, "Lamp", Some("Home"));
        p.description = Some("Bright".to_string());
        p.quantity = 4;

        let input = ProductForm::from(&p).validate().unwrap();
        assert_eq!(input.name, "Lamp");
        assert_eq!(input.price, p.price);
        assert_eq!(input.quantity, 4);
        assert_eq!(input.description.as_deref(), Some("Bright"));
        assert_eq!(input.category.as_deref(), Some("Home"));
    }

    #[test]
    fn test_filter_products_by_name_or_category() {
        let products = vec![
            product(1, "Red Chair", Some("Furniture")),
            product(2, "Desk Lamp", Some("Lighting")),
            product(3, "Notebook", None),
        ];
        let ids = |v: Vec<Product>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_products(&products, "chair")), vec![1]);
        assert_eq!(ids(filter_products(&products, "LIGHT")), vec![2]);
        assert_eq!(ids(filter_products(&products, "  ")), vec![1, 2, 3]);
        assert!(filter_products(&products, "sofa").is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(999, 2)), "9.99 €");
        assert_eq!(format_price(Decimal::new(5, 0)), "5.00 €");
    }

    #[test]
    fn test_price_is_a_json_number() {
        let json = serde_json::to_value(ProductInput {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(999, 2),
            quantity: 3,
            category: None,
            image_url: None,
        })
        .unwrap();
        assert_eq!(json["price"], serde_json::json!(9.99));
        assert_eq!(json["imageUrl"], serde_json::Value::Null);

        let p: Product = serde_json::from_str(
            r#"{"id":1,"name":"W","price":9.99,"quantity":3,
                "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(p.price, Decimal::new(999, 2));
        assert!(p.category.is_none());
    }
}

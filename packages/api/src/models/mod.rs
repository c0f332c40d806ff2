//! Data models exchanged with the storefront REST API.

mod auth;
mod product;
mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, DEFAULT_ROLE};
pub use product::{
    categories, filter_products, format_price, Product, ProductForm, ProductInput,
    ValidationError,
};
pub use user::{User, ADMIN_ROLE};

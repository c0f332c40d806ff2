mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod product_detail;
pub use product_detail::ProductDetail;

mod search;
pub use search::Search;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod account;
pub use account::Account;

mod admin;
pub use admin::Admin;

mod admin_products;
pub use admin_products::AdminProducts;

mod product_form;
pub use product_form::{EditProduct, NewProduct};

mod not_found;
pub use not_found::NotFound;

/// Inline message shown under a form after a failed request.
pub(crate) fn form_error(error: &api::ApiError) -> Option<String> {
    Some(error.user_message().to_string())
}

/// Ask the visitor to confirm a destructive action.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Auto-confirming outside the browser: {}", message);
        true
    }
}

use api::ClientConfig;
use dioxus::prelude::*;

use ui::{AuthProvider, Toaster};
use views::{
    Account, Admin, AdminProducts, EditProduct, Home, Login, NewProduct, NotFound,
    ProductDetail, Products, Register, Search, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/products?:search&:category")]
        Products { search: String, category: String },
        #[route("/products/:id")]
        ProductDetail { id: i64 },
        #[route("/search")]
        Search {},
        #[route("/auth/login")]
        Login {},
        #[route("/auth/register")]
        Register {},
        #[route("/account")]
        Account {},
        #[route("/admin")]
        Admin {},
        #[route("/admin/products")]
        AdminProducts {},
        #[route("/admin/products/new")]
        NewProduct {},
        #[route("/admin/products/edit/:id")]
        EditProduct { id: i64 },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Catalogue listing with no filters applied.
    fn catalogue() -> Self {
        Route::Products {
            search: String::new(),
            category: String::new(),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// Client configuration baked in at build time.
///
/// `STOREFRONT_API_URL` set when compiling overrides the embedded API URL.
fn load_config() -> ClientConfig {
    let config = match ClientConfig::from_toml(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    };
    match option_env!("STOREFRONT_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: config.clone(),
            Toaster {}
            Router::<Route> {}
        }
    }
}

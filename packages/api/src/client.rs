//! # API client: the storefront's only egress point
//!
//! [`ApiClient`] wraps a [`Transport`] and the persisted credentials and exposes
//! one method per REST operation. Three concerns live here so call sites never
//! repeat them:
//!
//! 1. **Credential attachment.** Every request reads the token from
//!    [`CredentialStore`] and, when present, sends it as a bearer credential.
//!    There is no per-call opt-out.
//! 2. **Error notification.** Every failed request emits exactly one error
//!    [`Notice`]: the server's `{"message": ...}` when present, otherwise
//!    [`crate::error::GENERIC_ERROR_MESSAGE`]. The error is still returned to the caller.
//! 3. **Authentication expiry.** A 401 additionally emits
//!    [`ApiEvent::AuthRejected`]. The client does not clear the session or
//!    navigate; whoever subscribes decides (see [`crate::Session::install_expiry_handler`]).
//!
//! ## Operations
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`register`](ApiClient::register) | `POST /auth/register` | no |
//! | [`login`](ApiClient::login) | `POST /auth/login`, persists token and user | no |
//! | [`current_user`](ApiClient::current_user) | `GET /auth/me` | yes |
//! | [`logout`](ApiClient::logout) | local only | n/a |
//! | [`list_products`](ApiClient::list_products) | `GET /products` | no |
//! | [`get_product`](ApiClient::get_product) | `GET /products/:id` | no |
//! | [`search_products`](ApiClient::search_products) | `GET /products/search?q=` | no |
//! | [`products_by_category`](ApiClient::products_by_category) | `GET /products/category/:category` | no |
//! | [`create_product`](ApiClient::create_product) | `POST /products` | admin |
//! | [`update_product`](ApiClient::update_product) | `PUT /products/:id` | admin |
//! | [`delete_product`](ApiClient::delete_product) | `DELETE /products/:id` | admin |
//!
//! Create, update and delete also emit a success notice. Nothing is retried.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{CredentialStore, KeyValueStore};

use crate::error::ApiError;
use crate::events::{ApiEvent, EventHub, Notice, Subscription};
use crate::models::{AuthResponse, LoginRequest, Product, ProductInput, RegisterRequest, User};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub const PRODUCT_CREATED: &str = "Product created";
pub const PRODUCT_UPDATED: &str = "Product updated";
pub const PRODUCT_DELETED: &str = "Product deleted";

/// Error body the API sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Client for the storefront REST API.
///
/// Cloning is cheap when `S` and `T` are; clones share the event hub.
#[derive(Clone, Debug)]
pub struct ApiClient<S, T> {
    transport: T,
    credentials: CredentialStore<S>,
    events: EventHub,
}

impl<S: KeyValueStore, T: Transport> ApiClient<S, T> {
    pub fn new(store: S, transport: T) -> Self {
        Self {
            transport,
            credentials: CredentialStore::new(store),
            events: EventHub::new(),
        }
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    pub fn subscribe(&self, listener: impl Fn(&ApiEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }

    // -- identity --

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(HttpMethod::Post, "/auth/register", request).await
    }

    /// Authenticate and persist the returned token and user.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.send_json(HttpMethod::Post, "/auth/login", &request).await?;
        if let Err(e) = self.credentials.save(&auth.token, &auth.user) {
            tracing::error!("Failed to persist credentials: {}", e);
        }
        Ok(auth)
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Get, "/auth/me"))
            .await
    }

    /// Forget the persisted credentials. No request is made.
    pub fn logout(&self) {
        self.credentials.clear();
    }

    // -- products --

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Get, "/products"))
            .await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Get, format!("/products/{id}")))
            .await
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.execute(HttpRequest::new(HttpMethod::Get, "/products/search").with_query("q", query))
            .await
    }

    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("/products/category/{}", urlencoding::encode(category));
        self.execute(HttpRequest::new(HttpMethod::Get, path)).await
    }

    pub async fn create_product(&self, product: &ProductInput) -> Result<Product, ApiError> {
        let created = self.send_json(HttpMethod::Post, "/products", product).await?;
        self.events.emit(&ApiEvent::Notice(Notice::success(PRODUCT_CREATED)));
        Ok(created)
    }

    pub async fn update_product(&self, id: i64, product: &ProductInput) -> Result<Product, ApiError> {
        let updated = self
            .send_json(HttpMethod::Put, &format!("/products/{id}"), product)
            .await?;
        self.events.emit(&ApiEvent::Notice(Notice::success(PRODUCT_UPDATED)));
        Ok(updated)
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.dispatch(HttpRequest::new(HttpMethod::Delete, format!("/products/{id}")))
            .await?;
        self.events.emit(&ApiEvent::Notice(Notice::success(PRODUCT_DELETED)));
        Ok(())
    }

    // -- plumbing --

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = match serde_json::to_value(body) {
            Ok(body) => body,
            Err(e) => return Err(self.fail(ApiError::Decode(e.to_string()))),
        };
        self.execute(HttpRequest::new(method, path).with_body(body))
            .await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let path = request.path.clone();
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("Undecodable response from {}: {}", path, e);
            self.fail(ApiError::Decode(e.to_string()))
        })
    }

    /// Send with credentials attached and turn non-2xx into an `ApiError`.
    async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        request.bearer = self.credentials.token();
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!("{} {}", method.as_str(), path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method.as_str(), path, e);
                return Err(self.fail(e.into()));
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!("{} {} returned {}", method.as_str(), path, response.status);
        let message = server_message(&response.body);
        let error = if response.status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status {
                status: response.status,
                message,
            }
        };
        Err(self.fail(error))
    }

    /// Emit the notifications every failed request owes the user.
    fn fail(&self, error: ApiError) -> ApiError {
        self.events
            .emit(&ApiEvent::Notice(Notice::error(error.user_message())));
        if error.is_unauthorized() {
            self.events.emit(&ApiEvent::AuthRejected);
        }
        error
    }
}

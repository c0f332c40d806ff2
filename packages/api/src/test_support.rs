//! In-memory stand-in for the storefront REST API, used by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::TransportError;
use crate::models::{AuthResponse, LoginRequest, Product, ProductInput, RegisterRequest, User};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Default)]
struct FakeState {
    users: Vec<(User, String)>,
    tokens: HashMap<String, i64>,
    products: Vec<Product>,
    next_user_id: i64,
    next_product_id: i64,
    requests: Vec<HttpRequest>,
    offline: bool,
}

/// A fake backend. Clones share state, so a test can keep one handle while the
/// client owns another.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn reply<T: Serialize>(status: u16, body: &T) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_string(body).unwrap(),
    }
}

fn message(status: u16, text: &str) -> HttpResponse {
    reply(status, &json!({ "message": text }))
}

fn parse<T: DeserializeOwned>(request: &HttpRequest) -> Option<T> {
    serde_json::from_value(request.body.clone()?).ok()
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, username: &str, email: &str, password: &str, role: &str) -> User {
        let mut state = self.state.borrow_mut();
        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            username: username.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            created_at: epoch(),
            updated_at: epoch(),
        };
        state.users.push((user.clone(), password.to_string()));
        user
    }

    pub fn seed_product(&self, name: &str, price: Decimal, quantity: i64, category: Option<&str>) -> Product {
        let mut state = self.state.borrow_mut();
        state.next_product_id += 1;
        let product = Product {
            id: state.next_product_id,
            name: name.to_string(),
            description: None,
            price,
            quantity,
            category: category.map(str::to_string),
            image_url: None,
            user_id: None,
            created_at: epoch(),
            updated_at: epoch(),
        };
        state.products.push(product.clone());
        product
    }

    /// Invalidate every issued token, as if they had expired server-side.
    pub fn revoke_tokens(&self) {
        self.state.borrow_mut().tokens.clear();
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn product_count(&self) -> usize {
        self.state.borrow().products.len()
    }

    fn caller(&self, request: &HttpRequest) -> Option<User> {
        let state = self.state.borrow();
        let id = state.tokens.get(request.bearer.as_deref()?)?;
        state.users.iter().find(|(u, _)| u.id == *id).map(|(u, _)| u.clone())
    }

    fn issue_token(&self, user: &User) -> String {
        let token = format!("token-{}-{}", user.id, self.state.borrow().tokens.len());
        self.state.borrow_mut().tokens.insert(token.clone(), user.id);
        token
    }

    fn require_admin(&self, request: &HttpRequest) -> Result<User, HttpResponse> {
        match self.caller(request) {
            None => Err(message(401, "Authentication required")),
            Some(user) if !user.is_admin() => Err(message(403, "Admin access required")),
            Some(user) => Ok(user),
        }
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
        match (request.method, segments.as_slice()) {
            (HttpMethod::Post, ["auth", "register"]) => self.register(request),
            (HttpMethod::Post, ["auth", "login"]) => self.login(request),
            (HttpMethod::Get, ["auth", "me"]) => match self.caller(request) {
                Some(user) => reply(200, &user),
                None => message(401, "Invalid token"),
            },
            (HttpMethod::Get, ["products"]) => reply(200, &self.state.borrow().products),
            (HttpMethod::Get, ["products", "search"]) => {
                let q = request
                    .query
                    .iter()
                    .find(|(k, _)| k == "q")
                    .map(|(_, v)| v.to_lowercase())
                    .unwrap_or_default();
                let found: Vec<Product> = self
                    .state
                    .borrow()
                    .products
                    .iter()
                    .filter(|p| {
                        p.name.to_lowercase().contains(&q)
                            || p.category.as_deref().is_some_and(|c| c.to_lowercase().contains(&q))
                    })
                    .cloned()
                    .collect();
                reply(200, &found)
            }
            (HttpMethod::Get, ["products", "category", category]) => {
                let category = urlencoding::decode(category).unwrap().into_owned();
                let found: Vec<Product> = self
                    .state
                    .borrow()
                    .products
                    .iter()
                    .filter(|p| p.category.as_deref() == Some(category.as_str()))
                    .cloned()
                    .collect();
                reply(200, &found)
            }
            (HttpMethod::Get, ["products", id]) => match self.find_product(id) {
                Some(p) => reply(200, &p),
                None => message(404, "Product not found"),
            },
            (HttpMethod::Post, ["products"]) => self.create_product(request),
            (HttpMethod::Put, ["products", id]) => self.update_product(request, id),
            (HttpMethod::Delete, ["products", id]) => self.delete_product(request, id),
            _ => message(404, "Not found"),
        }
    }

    fn find_product(&self, id: &str) -> Option<Product> {
        let id: i64 = id.parse().ok()?;
        self.state.borrow().products.iter().find(|p| p.id == id).cloned()
    }

    fn register(&self, request: &HttpRequest) -> HttpResponse {
        let Some(body) = parse::<RegisterRequest>(request) else {
            return message(400, "Invalid body");
        };
        if self.state.borrow().users.iter().any(|(u, _)| u.email == body.email) {
            return message(409, "Email already registered");
        }
        let user = self.seed_user(&body.username, &body.email, &body.password, &body.role);
        let token = self.issue_token(&user);
        reply(201, &AuthResponse { user, token })
    }

    fn login(&self, request: &HttpRequest) -> HttpResponse {
        let Some(body) = parse::<LoginRequest>(request) else {
            return message(400, "Invalid body");
        };
        let user = self
            .state
            .borrow()
            .users
            .iter()
            .find(|(u, pw)| u.email == body.email && *pw == body.password)
            .map(|(u, _)| u.clone());
        match user {
            Some(user) => {
                let token = self.issue_token(&user);
                reply(200, &AuthResponse { user, token })
            }
            None => message(400, "Invalid credentials"),
        }
    }

    fn create_product(&self, request: &HttpRequest) -> HttpResponse {
        let admin = match self.require_admin(request) {
            Ok(admin) => admin,
            Err(response) => return response,
        };
        let Some(input) = parse::<ProductInput>(request) else {
            return message(400, "Invalid body");
        };
        let mut product = self.seed_product(&input.name, input.price, input.quantity, input.category.as_deref());
        product.description = input.description;
        product.image_url = input.image_url;
        product.user_id = Some(admin.id);
        let mut state = self.state.borrow_mut();
        if let Some(stored) = state.products.iter_mut().find(|p| p.id == product.id) {
            *stored = product.clone();
        }
        reply(201, &product)
    }

    fn update_product(&self, request: &HttpRequest, id: &str) -> HttpResponse {
        if let Err(response) = self.require_admin(request) {
            return response;
        }
        let Some(input) = parse::<ProductInput>(request) else {
            return message(400, "Invalid body");
        };
        let id: i64 = id.parse().unwrap_or_default();
        let mut state = self.state.borrow_mut();
        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            return message(404, "Product not found");
        };
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.quantity = input.quantity;
        product.category = input.category;
        product.image_url = input.image_url;
        reply(200, &*product)
    }

    fn delete_product(&self, request: &HttpRequest, id: &str) -> HttpResponse {
        if let Err(response) = self.require_admin(request) {
            return response;
        }
        let id: i64 = id.parse().unwrap_or_default();
        let mut state = self.state.borrow_mut();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return message(404, "Product not found");
        }
        HttpResponse {
            status: 204,
            body: String::new(),
        }
    }
}

impl Transport for FakeApi {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.state.borrow_mut().requests.push(request.clone());
        if self.state.borrow().offline {
            return Err(TransportError::Network("connection refused".to_string()));
        }
        Ok(self.route(&request))
    }
}

//! In-process mock catalog backend for integration tests.
//!
//! Implements the five REST endpoints with the real backend's envelopes
//! (`{message, products}`, `{message}`, `{error}`) over an in-memory map,
//! and counts every handled request so tests can assert that an operation
//! issued no request, or exactly as many as expected.

// Each test binary compiles its own copy; not every one uses every helper.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

use prodcat::models::Product;

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

#[derive(Clone, Default)]
struct AppState {
    store: Arc<RwLock<Store>>,
    hits: Arc<AtomicUsize>,
}

#[derive(Debug, Deserialize)]
struct DraftBody {
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    price: Option<f64>,
}

/// A running mock backend bound to an ephemeral port.
pub struct TestBackend {
    pub base_url: String,
    state: AppState,
}

impl TestBackend {
    /// Total number of requests the backend has handled.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Seeds a product directly into the store, bypassing HTTP.
    pub async fn insert(&self, name: &str, description: Option<&str>, price: f64) -> i64 {
        let mut store = self.state.store.write().await;
        store.next_id += 1;
        let id = store.next_id;
        store.products.insert(
            id,
            Product {
                id,
                name: name.to_string(),
                description: description.map(str::to_string),
                price,
            },
        );
        id
    }

    /// Snapshot of the stored products, in id order.
    pub async fn products(&self) -> Vec<Product> {
        self.state
            .store
            .read()
            .await
            .products
            .values()
            .cloned()
            .collect()
    }
}

/// Starts the mock backend on an ephemeral port.
pub async fn spawn() -> TestBackend {
    let state = AppState::default();
    let app = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    TestBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let store = state.store.read().await;

    let products: Vec<&Product> = match params.get("search").map(|s| s.trim().to_lowercase()) {
        Some(term) if !term.is_empty() => store
            .products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            })
            .collect(),
        _ => store.products.values().collect(),
    };

    Json(json!({
        "message": "Product list.",
        "products": products,
    }))
    .into_response()
}

async fn get_product(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let store = state.store.read().await;

    match store.products.get(&id) {
        Some(product) => Json(product).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Product not found."),
    }
}

async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<DraftBody>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let (name, price) = match (body.name, body.price) {
        (Some(name), Some(price)) if !name.is_empty() && price > 0.0 => (name, price),
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "Name and price are required.");
        }
    };

    let mut store = state.store.write().await;
    if store.products.values().any(|p| p.name == name) {
        return error_response(
            StatusCode::CONFLICT,
            "A product with this name already exists.",
        );
    }

    store.next_id += 1;
    let product = Product {
        id: store.next_id,
        name,
        description: body.description,
        price,
    };
    store.products.insert(product.id, product.clone());

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Product added successfully.",
            "product": product,
        })),
    )
        .into_response()
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<DraftBody>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let (name, price) = match (body.name, body.price) {
        (Some(name), Some(price)) if !name.is_empty() && price > 0.0 => (name, price),
        _ => {
            return error_response(StatusCode::BAD_REQUEST, "Name and price are required.");
        }
    };

    let mut store = state.store.write().await;
    if !store.products.contains_key(&id) {
        return error_response(StatusCode::NOT_FOUND, "Product not found.");
    }
    if store.products.values().any(|p| p.id != id && p.name == name) {
        return error_response(
            StatusCode::CONFLICT,
            "A product with this name already exists.",
        );
    }

    store.products.insert(
        id,
        Product {
            id,
            name,
            description: body.description,
            price,
        },
    );

    Json(json!({ "message": "Product updated successfully." })).into_response()
}

async fn delete_product(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let mut store = state.store.write().await;
    match store.products.remove(&id) {
        Some(_) => Json(json!({ "message": "Product deleted successfully." })).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Product not found."),
    }
}

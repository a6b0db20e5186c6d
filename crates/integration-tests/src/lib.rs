//! Integration tests for Larder.
//!
//! These tests exercise a running server end to end over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p larder-cli -- migrate
//!
//! # Start the server
//! cargo run -p larder-server
//!
//! # Run integration tests
//! cargo test -p larder-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("LARDER_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// A signed-up operator with a live bearer token.
pub struct TestOperator {
    pub client: Client,
    pub base_url: String,
    pub email: String,
    pub token: String,
}

impl TestOperator {
    /// Sign up a fresh operator with a unique email and sign in.
    pub async fn signup() -> Self {
        let client = Client::new();
        let base_url = base_url();
        let email = format!("operator-{}@larder.test", Uuid::new_v4());
        let password = "a-perfectly-fine-password";

        let resp = client
            .post(format!("{base_url}/signup"))
            .json(&json!({"name": "Test Operator", "email": email, "password": password}))
            .send()
            .await
            .expect("signup request failed");
        assert!(resp.status().is_success(), "signup failed: {resp:?}");

        let resp = client
            .post(format!("{base_url}/signin"))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("signin request failed");
        assert!(resp.status().is_success(), "signin failed: {resp:?}");

        let body: Value = resp.json().await.expect("signin body was not JSON");
        let token = body["token"]
            .as_str()
            .expect("signin body carried no token")
            .to_string();

        Self {
            client,
            base_url,
            email,
            token,
        }
    }

    /// GET an owner-scoped path with this operator's token.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await
            .expect("request failed")
    }

    /// POST a JSON body to an owner-scoped path with this operator's token.
    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    /// PUT a JSON body to an owner-scoped path with this operator's token.
    pub async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    /// Create a product and return its ID.
    pub async fn create_product(&self, name: &str, price: f64, stock: i32) -> i64 {
        let resp = self
            .post(
                "/products",
                &json!({"name": name, "category": "Pantry", "price": price, "stock": stock}),
            )
            .await;
        assert!(resp.status().is_success(), "product create failed");

        let body: Value = resp.json().await.expect("body was not JSON");
        body["id"].as_i64().expect("product id missing")
    }
}

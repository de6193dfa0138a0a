//! Shared harness for the HTTP integration tests.
//!
//! The full router runs against [`InMemoryUserStore`] with bcrypt's minimum
//! cost, so no database is needed.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use userhub::router::init_router;
use userhub::state::AppState;
use userhub_config::{CorsConfig, JwtConfig};
use userhub_core::PasswordHasher;
use userhub_db::{InMemoryUserStore, UserStore};
use userhub_models::{Email, NewUser, Role, User, UserStatus};
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "password123";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<InMemoryUserStore>,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        expires_in_secs: 3600,
    }
}

pub fn spawn_app() -> TestApp {
    let store = Arc::new(InMemoryUserStore::new());
    let state = AppState::new(
        store.clone() as Arc<dyn UserStore>,
        &test_jwt_config(),
        PasswordHasher::new(4).unwrap(),
        CorsConfig::default(),
    );

    TestApp {
        router: init_router(state.clone()),
        state,
        store,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
impl TestApp {
    /// Inserts an account directly into the store.
    pub async fn create_user(&self, email: &str, password: &str, role: Role, status: UserStatus) -> User {
        let password_hash = self.state.hasher.hash(password).await.unwrap();
        self.store
            .create(NewUser {
                full_name: "Test User".to_string(),
                email: Email::new(email).unwrap(),
                password_hash,
                role,
                status,
            })
            .await
            .unwrap()
    }

    pub async fn create_active_user(&self) -> User {
        self.create_user(
            &generate_unique_email(),
            TEST_PASSWORD,
            Role::User,
            UserStatus::Active,
        )
        .await
    }

    pub async fn create_admin(&self) -> User {
        self.create_user(
            &generate_unique_email(),
            TEST_PASSWORD,
            Role::Admin,
            UserStatus::Active,
        )
        .await
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.tokens.issue(user.id, user.role).unwrap()
    }

    /// Sends one request; the body is parsed as JSON when possible and is
    /// `Value::Null` otherwise.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Logs in through the API and returns the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["token"].as_str().unwrap().to_string()
    }
}

use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use user_api::domain::user::errors::UserError;
use user_api::domain::user::models::FavouriteId;
use user_api::domain::user::models::User;
use user_api::domain::user::models::UserId;
use user_api::domain::user::models::UserName;
use user_api::domain::user::ports::UserRepository;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryUserRepository>,
    pub authenticator: Arc<Authenticator>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(Arc::clone(&store)));
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));

        let router = create_router(user_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            authenticator,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with `Authorization: jwt <token>`
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", format!("jwt {}", token))
    }

    /// Helper to make PUT request with `Authorization: jwt <token>`
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).header("Authorization", format!("jwt {}", token))
    }

    /// Helper to make DELETE request with `Authorization: jwt <token>`
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).header("Authorization", format!("jwt {}", token))
    }

    pub async fn register(&self, user_name: &str, password: &str) -> reqwest::Response {
        self.post("/api/user/register")
            .json(&serde_json::json!({
                "userName": user_name,
                "password": password,
                "password2": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, user_name: &str, password: &str) -> reqwest::Response {
        self.post("/api/user/login")
            .json(&serde_json::json!({
                "userName": user_name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return a token for it
    pub async fn token_for(&self, user_name: &str, password: &str) -> String {
        self.register(user_name, password).await;

        let body: serde_json::Value = self
            .login(user_name, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    /// User id carried by a token issued by this app
    pub fn user_id_for(&self, token: &str) -> String {
        self.authenticator
            .verify_token(token)
            .expect("Token should verify")
            .id
    }
}

/// In-memory user store counting every call it receives
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        self.record_call();
        let mut users = self.users.lock().unwrap();

        if users.values().any(|existing| existing.user_name == user.user_name) {
            return Err(UserError::UserNameTaken(user.user_name.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        self.record_call();
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, UserError> {
        self.record_call();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.user_name == *user_name)
            .cloned())
    }

    async fn add_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
        limit: usize,
    ) -> Result<Vec<FavouriteId>, UserError> {
        self.record_call();
        // Hand the scheduler to any concurrent request before touching state.
        tokio::task::yield_now().await;

        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id)
            .ok_or(UserError::FavouritesNotUpdated(*id))?;

        if user.favourites.contains(favourite) {
            return Ok(user.favourites.clone());
        }
        if user.favourites.len() >= limit {
            return Err(UserError::FavouritesLimitReached { id: *id, limit });
        }

        user.favourites.push(favourite.clone());
        Ok(user.favourites.clone())
    }

    async fn remove_favourite(
        &self,
        id: &UserId,
        favourite: &FavouriteId,
    ) -> Result<Vec<FavouriteId>, UserError> {
        self.record_call();
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id)
            .ok_or(UserError::FavouritesNotUpdated(*id))?;

        user.favourites.retain(|existing| existing != favourite);

        Ok(user.favourites.clone())
    }
}

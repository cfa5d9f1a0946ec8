use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;

use movies_server::config::{AppConfig, CorsConfig, LogConfig, ServerConfig, StoreConfig};
use movies_server::models::movie::Movie;
use movies_server::state::AppState;
use movies_server::store::MovieStore;

pub mod routes {
    pub const MOVIES: &str = "/movies";

    pub fn movie(id: &str) -> String {
        format!("/movies/{id}")
    }

    pub fn movies_by_genre(genre: &str) -> String {
        format!("/movies?genre={genre}")
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MovieStore>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    pub headers: HeaderMap,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            text,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn test_config(allow_origins: Vec<String>) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            body_limit: 64 * 1024,
            cors: CorsConfig {
                allow_origins,
                max_age: 3600,
            },
        },
        store: StoreConfig {
            seed_path: PathBuf::from("unused.json"),
        },
        log: LogConfig {
            level: "debug".to_string(),
        },
    }
}

pub fn seed_movies() -> Vec<Movie> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
            "title": "The Shawshank Redemption",
            "year": 1994,
            "director": "Frank Darabont",
            "duration": 142,
            "poster": "https://i.ebayimg.com/images/g/4goAAOSwMyBe7hnQ/s-l1200.webp",
            "genre": ["Drama"],
            "rate": 9.3
        },
        {
            "id": "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf",
            "title": "The Dark Knight",
            "year": 2008,
            "director": "Christopher Nolan",
            "duration": 152,
            "poster": "https://i.ebayimg.com/images/g/yokAAOSw8w1YARbm/s-l1200.jpg",
            "genre": ["Action", "Crime", "Drama"],
            "rate": 9.0
        }
    ]))
    .expect("Seed movies should deserialize")
}

impl TestApp {
    /// Spawn a server seeded with [`seed_movies`] that allows any origin.
    pub async fn spawn() -> Self {
        Self::spawn_with(seed_movies(), test_config(vec![])).await
    }

    pub async fn spawn_with(movies: Vec<Movie>, config: AppConfig) -> Self {
        let state = AppState::new(
            MovieStore::from_seed(movies).expect("Seed ids must be unique"),
            config,
        );
        let store = Arc::clone(&state.store);
        let app = movies_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &str, content_type: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PATCH request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Send an arbitrary request with extra headers (used for CORS checks).
    pub async fn request_with_headers(
        &self,
        method: reqwest::Method,
        path: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = self.client.request(method, self.url(path));
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let res = req.send().await.expect("Failed to send request");

        TestResponse::from_response(res).await
    }

    /// Create a movie through the API and return its id.
    pub async fn create_movie(&self, body: &Value) -> String {
        let res = self.post(routes::MOVIES, body).await;
        assert_eq!(res.status, 201, "Create failed: {}", res.text);

        res.body["id"]
            .as_str()
            .expect("Created movie should have an id")
            .to_string()
    }
}

//! Common test support utilities and fixtures
//!
//! `FakeGitHub` answers GET requests from canned responses keyed by URL and
//! records every request, so tests can assert on what was fetched and how
//! often without touching the network. `TestServer` is the over-the-wire
//! counterpart for tests that drive the compiled binary.

#![allow(dead_code)]

use async_trait::async_trait;
use ghfeed_github::{ApiResponse, HttpFetch, Links};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const API: &str = "https://api.github.com";
pub const USER: &str = "valeriocos";
pub const EVENTS_URL: &str = "https://api.github.com/users/valeriocos/events/public";
pub const REPO_1_URL: &str = "https://api.github.com/repos/valeriocos/GrimoireELK";
pub const REPO_2_URL: &str = "https://api.github.com/repos/chaoss/grimoirelab-mordred";

/// A request seen by the fake
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub payload: Vec<(String, String)>,
}

#[derive(Default)]
pub struct FakeGitHub {
    routes: HashMap<String, ApiResponse>,
    requests: Mutex<Vec<Request>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for GETs of exactly `url`
    pub fn route(mut self, url: &str, response: ApiResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    /// Two events on page 1 (with next/last links), one on page 2, and
    /// both repositories they reference
    pub fn two_pages() -> Self {
        Self::new()
            .route(
                EVENTS_URL,
                ApiResponse::ok(read_file("events_page_1.json")).with_links(
                    Links::default()
                        .with("next", page_url(2))
                        .with("last", page_url(3)),
                ),
            )
            .route(
                &page_url(2),
                ApiResponse::ok(read_file("events_page_2.json")),
            )
            .route(REPO_1_URL, ApiResponse::ok(read_file("repo_1.json")))
            .route(REPO_2_URL, ApiResponse::ok(read_file("repo_2.json")))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made to `url`
    pub fn count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }
}

#[async_trait]
impl HttpFetch for FakeGitHub {
    async fn fetch(&self, url: &str, payload: &[(&str, &str)]) -> anyhow::Result<ApiResponse> {
        self.requests.lock().unwrap().push(Request {
            url: url.to_string(),
            payload: payload
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("GitHub API request failed (404 Not Found): {}", url))
    }

    fn base_url(&self) -> &str {
        API
    }
}

/// URL of the given events page as GitHub advertises it
pub fn page_url(page: u32) -> String {
    format!("{}?per_page=30&page={}", EVENTS_URL, page)
}

/// Read a fixture from tests/data
pub fn read_file(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Canned HTTP response served by [`TestServer`]
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Minimal HTTP/1.1 server answering one request per connection
///
/// Requests are matched on the full target first, then on the path alone.
/// Anything unrouted gets a 404.
pub struct TestServer {
    pub base: String,
    routes: Arc<Mutex<HashMap<String, Reply>>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<Mutex<HashMap<String, Reply>>> = Arc::default();

        let server_routes = Arc::clone(&routes);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = Arc::clone(&server_routes);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 4096];
                    loop {
                        let n = socket.read(&mut chunk).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let text = String::from_utf8_lossy(&buf).to_string();
                    let target = text
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    let path = target.split('?').next().unwrap_or("/").to_string();

                    let reply = {
                        let routes = routes.lock().unwrap();
                        routes.get(&target).or_else(|| routes.get(&path)).cloned()
                    }
                    .unwrap_or(Reply {
                        status: 404,
                        body: "{\"message\": \"Not Found\"}".to_string(),
                        headers: Vec::new(),
                    });

                    let mut response = format!(
                        "HTTP/1.1 {} Status\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n",
                        reply.status,
                        reply.body.len()
                    );
                    for (name, value) in &reply.headers {
                        response.push_str(&format!("{}: {}\r\n", name, value));
                    }
                    response.push_str("\r\n");
                    response.push_str(&reply.body);

                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { base, routes }
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base, target)
    }

    pub fn route(&self, target: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .insert(target.to_string(), reply);
    }

    /// The two events pages and both repositories, served over HTTP
    pub fn serve_two_pages(&self) {
        let page_1 = "/users/valeriocos/events/public";
        let page_2 = "/users/valeriocos/events/public?per_page=30&page=2";

        self.route(
            "/rate_limit",
            Reply::ok("{}")
                .header("X-RateLimit-Remaining", "5000")
                .header("X-RateLimit-Reset", "4102444800"),
        );
        self.route(
            page_1,
            Reply::ok(read_file("events_page_1.json")).header(
                "Link",
                &format!(
                    "<{next}>; rel=\"next\", <{next}>; rel=\"last\"",
                    next = self.url(page_2)
                ),
            ),
        );
        self.route(page_2, Reply::ok(read_file("events_page_2.json")));
        self.route(
            "/repos/valeriocos/GrimoireELK",
            Reply::ok(read_file("repo_1.json")),
        );
        self.route(
            "/repos/chaoss/grimoirelab-mordred",
            Reply::ok(read_file("repo_2.json")),
        );
    }
}

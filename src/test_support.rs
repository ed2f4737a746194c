//! Loopback HTTP stub for client tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;

#[derive(Clone)]
struct Route {
    status: u16,
    body: String,
    delay: Duration,
}

type Routes = Arc<RwLock<HashMap<String, Route>>>;

/// Minimal HTTP/1.1 server answering canned bodies by path.
///
/// Unrouted paths get a 404.
pub struct StubServer {
    addr: std::net::SocketAddr,
    routes: Routes,
}

impl StubServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Routes = Arc::default();

        let shared = routes.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve(stream, shared.clone()));
            }
        });

        Self { addr, routes }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn route(&self, path: &str, status: u16, body: String) {
        self.route_delayed(path, status, body, Duration::ZERO).await;
    }

    pub async fn route_delayed(&self, path: &str, status: u16, body: String, delay: Duration) {
        self.routes.write().await.insert(
            path.to_string(),
            Route {
                status,
                body,
                delay,
            },
        );
    }
}

async fn serve(mut stream: TcpStream, routes: Routes) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = String::from_utf8_lossy(&request);
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let route = routes.read().await.get(&path).cloned().unwrap_or(Route {
        status: 404,
        body: r#"{"error":"not found"}"#.to_string(),
        delay: Duration::ZERO,
    });

    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// A feed entry whose artist and title derive from `id`.
pub fn feed_entry(id: &str) -> Value {
    json!({
        "im:name": { "label": format!("Album {id}") },
        "im:image": [
            { "label": format!("https://img.example/{id}/55x55bb.png") },
            { "label": format!("https://img.example/{id}/170x170bb.png") }
        ],
        "im:price": { "label": "$9.99", "attributes": { "amount": "9.99", "currency": "USD" } },
        "title": { "label": format!("Album {id} - Artist {id}") },
        "link": { "attributes": { "href": format!("https://music.example/{id}") } },
        "id": { "attributes": { "im:id": id } },
        "im:artist": { "label": format!("Artist {id}") },
        "im:releaseDate": { "label": "2024-01-01T00:00:00-07:00" }
    })
}

/// A feed response body holding one entry per id.
pub fn feed_body(ids: &[&str]) -> String {
    let entries: Vec<Value> = ids.iter().map(|id| feed_entry(id)).collect();
    json!({
        "feed": {
            "id": { "label": "stub" },
            "title": { "label": "Stub Chart" },
            "entry": entries
        }
    })
    .to_string()
}

//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use demo_backend::config::AppConfig;
use demo_backend::http::HttpServer;
use demo_backend::lifecycle::Shutdown;

/// Start the backend on an ephemeral port. Returns the bound address and
/// the shutdown coordinator that stops it.
pub async fn start_backend(mut config: AppConfig) -> (SocketAddr, Shutdown) {
    config.server.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run_with_shutdown(listener, rx).await;
    });

    (addr, shutdown)
}

/// Minimal HTTP/1.1 GET over a raw socket. Returns (status, body).
pub async fn http_get(addr: SocketAddr, path: &str) -> (u16, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    parse_response(&raw)
}

fn parse_response(raw: &[u8]) -> (u16, Vec<u8>) {
    let header_end = raw
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .expect("missing header terminator")
        + 4;
    let head = std::str::from_utf8(&raw[..header_end]).unwrap();
    let status: u16 = head
        .split_whitespace()
        .nth(1)
        .expect("missing status code")
        .parse()
        .unwrap();
    (status, raw[header_end..].to_vec())
}

/// Start a mock OTLP collector that accepts every request with a 200 and
/// counts POSTs per signal path.
#[allow(dead_code)]
pub async fn start_mock_collector(
    trace_posts: Arc<AtomicUsize>,
    log_posts: Arc<AtomicUsize>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let trace_posts = trace_posts.clone();
            let log_posts = log_posts.clone();
            tokio::spawn(async move {
                let head = read_request(&mut socket).await;
                if head.starts_with("POST /v1/traces") {
                    trace_posts.fetch_add(1, Ordering::SeqCst);
                } else if head.starts_with("POST /v1/logs") {
                    log_posts.fetch_add(1, Ordering::SeqCst);
                }
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Read one HTTP request (headers + declared body) and return the raw
/// request text. Best-effort; close-enough parsing for a test double.
#[allow(dead_code)]
async fn read_request(socket: &mut TcpStream) -> String {
    let mut raw: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            break;
        };
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);

        let Some(header_end) = raw.windows(4).position(|window| window == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        if raw.len() >= header_end + 4 + content_length {
            break;
        }
    }

    String::from_utf8_lossy(&raw).to_string()
}

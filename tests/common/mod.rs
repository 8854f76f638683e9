//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use chat_gateway::config::GatewayConfig;
use chat_gateway::http::HttpServer;
use chat_gateway::lifecycle::Shutdown;
use chat_gateway::responder::Responder;

/// Start a mock upstream that answers every request with a chat completion
/// carrying the given content. Returns the address it listens on.
pub async fn start_mock_responder(content: &'static str) -> SocketAddr {
    let body = serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
    .to_string();
    start_upstream("200 OK", body).await
}

/// Start a mock upstream that fails every request with a 500 and a noisy
/// body that must never reach gateway clients.
#[allow(dead_code)]
pub async fn start_failing_responder(noise: &'static str) -> SocketAddr {
    start_upstream("500 Internal Server Error", noise.to_string()).await
}

async fn start_upstream(status: &'static str, body: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let body = body.clone();
                    tokio::spawn(async move {
                        drain_request(&mut socket).await;

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read until the request head and declared body have fully arrived, so
/// closing the socket afterwards cannot clip the client mid-write.
async fn drain_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

fn request_complete(buf: &[u8]) -> bool {
    let head_end = match buf.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(pos) => pos + 4,
        None => return false,
    };

    let head = String::from_utf8_lossy(&buf[..head_end]);
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    buf.len() >= head_end + content_length
}

/// Gateway config pointed at a mock upstream. Rate limiting and the metrics
/// exporter are off so each test opts in to what it exercises.
pub fn gateway_config(upstream: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.responder.base_url = format!("http://{}", upstream);
    config.responder.api_key = "test-api-key".to_string();
    config.security.secret_key = "test-secret-key".to_string();
    config.rate_limit.enabled = false;
    config.observability.metrics_enabled = false;
    config
}

/// Spawn a gateway on an ephemeral port. Returns its address and the
/// shutdown handle; trigger it at the end of the test.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config);
    spawn(server).await
}

/// Spawn a gateway with a scripted responder substituted for the hosted one.
#[allow(dead_code)]
pub async fn spawn_gateway_with_responder(
    config: GatewayConfig,
    responder: Arc<dyn Responder>,
) -> (SocketAddr, Shutdown) {
    let server = HttpServer::with_responder(config, responder);
    spawn(server).await
}

async fn spawn(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}

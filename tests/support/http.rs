//! One-shot HTTP server on a loopback port.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server that answers a single request with a canned response.
pub struct CannedServer {
    pub base_url: String,
    request_line: oneshot::Receiver<String>,
    handle: JoinHandle<()>,
}

impl CannedServer {
    /// Start serving `body` with `status` (e.g. `"200 OK"`).
    pub async fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let first_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(first_line);
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        Self {
            base_url: format!("http://{addr}/v4/sports"),
            request_line: rx,
            handle,
        }
    }

    /// The request line the server received, e.g. `GET /path?query HTTP/1.1`.
    pub async fn request_line(self) -> String {
        let line = self.request_line.await.unwrap();
        self.handle.await.unwrap();
        line
    }
}

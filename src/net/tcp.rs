//! # Minimal TCP listener with graceful drain.
//!
//! [`TcpServer`] binds inside [`serve`](crate::Listener::serve) (so bind
//! failures surface through the serve result), accepts connections in a loop,
//! and runs one handler task per connection, tracked for draining.
//!
//! ## Shutdown
//! `shutdown` stops the accept loop, closes the connection tracker, and waits
//! for in-flight handlers. The caller (a
//! [`ListenerComponent`](crate::ListenerComponent)) bounds the whole drain
//! with its grace window.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio_util::task::TaskTracker;

use crate::components::Listener;

type ConnHandler =
    Arc<dyn Fn(TcpStream) -> Pin<Box<dyn Future<Output = io::Result<()>> + Send>> + Send + Sync>;

/// Accept loop over a TCP socket with per-connection handler tasks.
pub struct TcpServer {
    addr: String,
    handler: ConnHandler,
    stop: Notify,
    conns: TaskTracker,
}

impl TcpServer {
    /// Creates a server that will bind `addr` once served.
    ///
    /// The handler runs once per accepted connection, on its own task.
    ///
    /// # Example
    /// ```no_run
    /// use tokio::io::AsyncWriteExt;
    /// use rungroup::TcpServer;
    ///
    /// let server = TcpServer::new("127.0.0.1:8080", |mut stream| async move {
    ///     stream.write_all(b"hello\n").await
    /// });
    /// ```
    pub fn new<F, Fut>(addr: impl Into<String>, handler: F) -> Self
    where
        F: Fn(TcpStream) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = io::Result<()>> + Send + 'static,
    {
        let handler: ConnHandler = Arc::new(move |stream| Box::pin(handler(stream)));
        Self {
            addr: addr.into(),
            handler,
            stop: Notify::new(),
            conns: TaskTracker::new(),
        }
    }
}

#[async_trait]
impl Listener for TcpServer {
    async fn serve(&self) -> io::Result<()> {
        let listener = TcpListener::bind(&self.addr).await?;
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, _peer) = accepted?;
                    let handler = Arc::clone(&self.handler);
                    self.conns.spawn(async move {
                        // Per-connection errors end that connection only.
                        let _ = handler(stream).await;
                    });
                }
                _ = self.stop.notified() => return Ok(()),
            }
        }
    }

    async fn shutdown(&self) -> io::Result<()> {
        self.stop.notify_one();
        self.conns.close();
        self.conns.wait().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_bind_failure_surfaces_through_serve() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap();

        let server = TcpServer::new(addr.to_string(), |_stream| async { Ok(()) });
        let err = server.serve().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }

    #[tokio::test]
    async fn test_serves_connections_then_drains() {
        let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = probe.local_addr().unwrap();
        drop(probe);

        let server = Arc::new(TcpServer::new(addr.to_string(), |mut stream| async move {
            stream.write_all(b"pong\n").await
        }));

        let serving = {
            let server = Arc::clone(&server);
            tokio::spawn(async move { server.serve().await })
        };

        // Retry until the accept loop has bound the port.
        let mut stream = loop {
            match TcpStream::connect(addr).await {
                Ok(s) => break s,
                Err(_) => tokio::time::sleep(Duration::from_millis(5)).await,
            }
        };
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"pong\n");

        server.shutdown().await.unwrap();
        assert!(serving.await.unwrap().is_ok());
    }
}

//! # Example: serve_group
//!
//! The canonical composition root: two TCP servers, a one-minute deadline,
//! and an OS interrupt listener under one [`Group`].
//!
//! Whichever component finishes first — the timer firing, Ctrl-C, or a
//! server fault — cancels the others; the servers get a bounded graceful
//! close and the process logs the first failure.
//!
//! ## Run
//! ```bash
//! cargo run --example serve_group --features logging
//! ```
//! Then hit the servers:
//! ```bash
//! curl 127.0.0.1:8080   # "hello from server1"
//! curl 127.0.0.1:8081   # "hello from server2"
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use rungroup::{
    Config, Group, ListenerComponent, LogWriter, SignalComponent, Subscribe, TcpServer,
    TimerComponent,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::default();
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let mut group = Group::new(cfg.clone(), subs);
    let bus = group.bus();

    let server1 = TcpServer::new("127.0.0.1:8080", |mut stream: TcpStream| async move {
        stream.write_all(b"hello from server1\n").await?;
        stream.shutdown().await
    });
    group.start(Arc::new(
        ListenerComponent::new("server1", server1)
            .with_grace(cfg.grace)
            .with_bus(bus.clone()),
    ));

    let server2 = TcpServer::new("127.0.0.1:8081", |mut stream: TcpStream| async move {
        stream.write_all(b"hello from server2\n").await?;
        stream.shutdown().await
    });
    group.start(Arc::new(
        ListenerComponent::new("server2", server2)
            .with_grace(cfg.grace)
            .with_bus(bus),
    ));

    group.start(Arc::new(TimerComponent::new(
        "timer",
        Duration::from_secs(60),
    )));

    group.start(Arc::new(SignalComponent::os("signals")));

    // Log the first failure, else exit cleanly.
    if let Err(err) = group.wait().await {
        eprintln!("first error in the group: {err}");
    }
    Ok(())
}

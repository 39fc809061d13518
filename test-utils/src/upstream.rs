//! Local HTTP server standing in for the Discord and top.gg REST APIs.

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Fake upstream API bound to an ephemeral localhost port.
///
/// The server runs until the value is dropped. Point the code under test at
/// `base_url` in place of `https://discord.com`.
///
/// # Example
///
/// ```rust,ignore
/// let upstream = FakeDiscord::start(
///     Router::new().route("/api/v10/guilds/{id}", get(|| async { StatusCode::NOT_FOUND })),
/// )
/// .await?;
/// ```
pub struct FakeDiscord {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:40123`.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FakeDiscord {
    /// Binds the router to `127.0.0.1:0` and serves it in the background.
    ///
    /// # Returns
    /// - `Ok(FakeDiscord)` - Server is accepting connections
    /// - `Err(TestError::Io)` - Failed to bind a local port
    pub async fn start(router: Router) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            handle,
        })
    }
}

impl Drop for FakeDiscord {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

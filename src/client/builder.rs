//! Builder for [`Client`](crate::Client).

use std::time::Duration;

use url::Url;

use super::Client;
use super::http::HttpClient;
use crate::error::{Error, Result};

/// User-agent string sent with every request.
fn user_agent() -> String {
    format!("rosterly/{}", env!("CARGO_PKG_VERSION"))
}

/// Builder for the rosterly [`Client`].
///
/// The base URL is the only required option.
///
/// ## Example
///
/// ```rust
/// use rosterly::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .base_url("http://localhost:3000")?
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), rosterly::Error>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<Url>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Sets the backend base URL.
    ///
    /// Resource paths (`/students`, `/courses`, `/enrollments`) are joined
    /// against this URL.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(
            Url::parse(url.as_ref())
                .map_err(|e| Error::configuration(format!("invalid base URL: {}", e)))?,
        );
        Ok(self)
    }

    /// Sets the request timeout (default: 30 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connect timeout (default: 10 seconds).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base URL is required"))?;

        let http = HttpClient::new(base_url, self.timeout, self.connect_timeout, &user_agent())?;
        Ok(Client::from_http(http))
    }
}

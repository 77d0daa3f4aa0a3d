// SPDX-License-Identifier: MPL-2.0
//! Loading SVG sources.
//!
//! [`SvgFetcher`] is the seam between the cache and the network so the
//! cache can be exercised without I/O. [`HttpFetcher`] is the production
//! implementation.

use crate::config::defaults::{MAX_REDIRECTS, USER_AGENT};
use crate::error::{IconError, IconResult};
use std::future::Future;

/// Source of raw SVG bytes.
pub trait SvgFetcher: Send + Sync {
    /// Loads the document at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = IconResult<Vec<u8>>> + Send;
}

/// Fetches icons over HTTP(S).
///
/// Requests are anonymous: no cookie store and no credentials are attached.
/// There is no timeout and no retry; a failed request is reported as-is.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpFetcher {
    /// Creates a fetcher that rejects bodies larger than `max_bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(max_bytes: u64) -> IconResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| IconError::Fetch(e.to_string()))?;
        Ok(Self { client, max_bytes })
    }

    #[must_use]
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

impl SvgFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> IconResult<Vec<u8>> {
        use futures_util::StreamExt;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IconError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IconError::Status(response.status().as_u16()));
        }

        let limit = self.max_bytes;
        if response.content_length().is_some_and(|len| len > limit) {
            return Err(IconError::TooLarge { limit });
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| IconError::Fetch(e.to_string()))?;
            if (body.len() + chunk.len()) as u64 > limit {
                return Err(IconError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Fetcher that ignores proxy environment variables so requests reach loopback.
    fn loopback_fetcher(max_bytes: u64) -> HttpFetcher {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        HttpFetcher { client, max_bytes }
    }

    /// Serves one canned response on a loopback port and returns its URL.
    async fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            // The client may hang up early once it rejects the response.
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/icon.svg")
    }

    fn chunked_body(chunks: usize, chunk_len: usize) -> Vec<u8> {
        let mut response =
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n".to_vec();
        for _ in 0..chunks {
            response.extend_from_slice(format!("{chunk_len:x}\r\n").as_bytes());
            response.extend(std::iter::repeat_n(b'x', chunk_len));
            response.extend_from_slice(b"\r\n");
        }
        response.extend_from_slice(b"0\r\n\r\n");
        response
    }

    #[test]
    fn http_fetcher_keeps_size_limit() {
        let fetcher = HttpFetcher::new(1024).expect("client");
        assert_eq!(fetcher.max_bytes(), 1024);
    }

    #[tokio::test]
    async fn malformed_url_is_a_fetch_error() {
        let fetcher = HttpFetcher::new(1024).expect("client");
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, IconError::Fetch(_)));
    }

    #[tokio::test]
    async fn small_body_is_returned() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\n<svg>".to_vec(),
        )
        .await;
        let body = loopback_fetcher(1024).fetch(&url).await.expect("fetch");
        assert_eq!(body, b"<svg>");
    }

    #[tokio::test]
    async fn not_found_reports_status() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
        )
        .await;
        let err = loopback_fetcher(1024).fetch(&url).await.unwrap_err();
        assert_eq!(err, IconError::Status(404));
    }

    #[tokio::test]
    async fn declared_length_over_limit_is_rejected() {
        let mut response =
            b"HTTP/1.1 200 OK\r\nContent-Length: 2048\r\nConnection: close\r\n\r\n".to_vec();
        response.extend(std::iter::repeat_n(b'x', 2048));
        let url = serve_once(response).await;

        let err = loopback_fetcher(1024).fetch(&url).await.unwrap_err();
        assert_eq!(err, IconError::TooLarge { limit: 1024 });
    }

    #[tokio::test]
    async fn streamed_body_over_limit_is_rejected() {
        let url = serve_once(chunked_body(3, 512)).await;
        let err = loopback_fetcher(1024).fetch(&url).await.unwrap_err();
        assert_eq!(err, IconError::TooLarge { limit: 1024 });
    }

    #[tokio::test]
    async fn streamed_body_within_limit_is_returned() {
        let url = serve_once(chunked_body(2, 512)).await;
        let body = loopback_fetcher(1024).fetch(&url).await.expect("fetch");
        assert_eq!(body.len(), 1024);
    }
}

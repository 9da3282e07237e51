use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, ScrapeError};

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|source| ScrapeError::Request {
                url: config.target_url.clone(),
                source,
            })?;
        Ok(Self { client })
    }

    /// GET `url` and return the whole body, provided the server answered 200 with HTML.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!(url, "fetching listing page");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if !is_html(content_type.as_deref()) {
            return Err(ScrapeError::NotHtml {
                url: url.to_string(),
                content_type,
            });
        }

        let body = response.bytes().map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(bytes = body.len(), "received body");
        Ok(body.to_vec())
    }
}

fn is_html(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_lowercase().contains("html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetch_blocking(url: String) -> Result<Vec<u8>> {
        let fetcher = Fetcher::new(&Config::default())?;
        fetcher.fetch(&url)
    }

    async fn serve(status: u16, content_type: &str, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), content_type),
            )
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_is_html() {
        assert!(is_html(Some("text/html; charset=utf-8")));
        assert!(is_html(Some("Application/XHTML+XML")));
        assert!(!is_html(Some("application/json")));
        assert!(!is_html(None));
    }

    #[tokio::test]
    async fn test_fetch_returns_html_body() {
        let server = serve(200, "text/html;charset=UTF-8", "<html>ok</html>").await;
        let url = format!("{}/search", server.uri());

        let body = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body, b"<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_rejects_not_found() {
        let server = serve(404, "text/html", "missing").await;
        let url = format!("{}/search", server.uri());

        let err = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status, .. } if status == StatusCode::NOT_FOUND));
        assert!(err.is_fetch());
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_html() {
        let server = serve(200, "application/json", "{}").await;
        let url = format!("{}/search", server.uri());

        let err = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, ScrapeError::NotHtml { .. }));
    }

    #[tokio::test]
    async fn test_fetch_rejects_other_success_codes() {
        let server = serve(203, "text/html", "<html></html>").await;
        let url = format!("{}/search", server.uri());

        let err = tokio::task::spawn_blocking(move || fetch_blocking(url))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Status { .. }));
    }
}

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config_loader::{BinanceConfig, Credentials};
use crate::domain::constants::API_KEY_HEADER;
use crate::domain::model::params::Params;
use crate::domain::traits::RequestHandler;
use crate::infrastructure::exchange::binance::models::BinanceApiError;
use crate::infrastructure::exchange::binance::signer::{encode_query, signed_query};

/// Default `RequestHandler` backed by `reqwest`.
///
/// Parameters travel in the query string for every method. Signed requests
/// get a millisecond `timestamp` and an HMAC-SHA256 `signature`; the API key
/// header is attached whenever credentials are configured.
pub struct BinanceRequestHandler {
    http: Client,
    credentials: Option<Credentials>,
}

impl BinanceRequestHandler {
    pub fn new(config: &BinanceConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { http, credentials })
    }

    /// Final request URL, with the signature appended when `signed`.
    pub fn request_url(&self, uri: &str, signed: bool, params: &Params) -> Result<Url> {
        let query = if signed {
            let creds = self
                .credentials
                .as_ref()
                .ok_or_else(|| BinanceApiError::MissingCredentials { uri: uri.to_string() })?;
            signed_query(params, &creds.api_secret, Utc::now().timestamp_millis())?
        } else {
            encode_query(params)
        };

        let mut url = Url::parse(uri)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    async fn send(&self, method: Method, uri: &str, signed: bool, params: Params) -> Result<Value> {
        let url = self.request_url(uri, signed, &params)?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(creds) = &self.credentials {
            request = request.header(API_KEY_HEADER, creds.api_key.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = BinanceApiError::from_response(status.as_u16(), &body);
            warn!("{} {} failed: {}", method, uri, err);
            return Err(err.into());
        }

        debug!("{} {} -> HTTP {}", method, uri, status.as_u16());
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RequestHandler for BinanceRequestHandler {
    async fn get(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.send(Method::GET, uri, signed, params).await
    }

    async fn post(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.send(Method::POST, uri, signed, params).await
    }

    async fn delete(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.send(Method::DELETE, uri, signed, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const MARGIN: &str = "https://api.binance.com/sapi/v1/margin";

    fn params() -> Params {
        let mut params = Params::new();
        params.insert("asset".into(), json!("BTC"));
        params
    }

    // Bypasses any proxy configured in the environment so requests reach the local listener.
    fn local_handler(credentials: Option<Credentials>) -> Result<BinanceRequestHandler> {
        let http = Client::builder().no_proxy().build()?;
        Ok(BinanceRequestHandler { http, credentials })
    }

    /// Answers a single request on a local port with a canned response.
    /// Returns the margin base URL and a handle yielding the raw request head.
    async fn serve_once(status: &str, body: &str) -> Result<(String, JoinHandle<Result<String>>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base = format!("http://{}/sapi/v1/margin", listener.local_addr()?);
        let response = format!(
            concat!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n",
                "Content-Length: {}\r\nConnection: close\r\n\r\n{}"
            ),
            status,
            body.len(),
            body
        );

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await?;
            socket.shutdown().await?;
            Ok::<_, anyhow::Error>(String::from_utf8_lossy(&head).into_owned())
        });
        Ok((base, server))
    }

    #[test]
    fn test_unsigned_url_has_plain_query() -> Result<()> {
        let handler = BinanceRequestHandler::new(&BinanceConfig::default(), None)?;
        let url = handler.request_url(&format!("{}/asset", MARGIN), false, &params())?;

        assert_eq!(url.as_str(), format!("{}/asset?asset=BTC", MARGIN));
        Ok(())
    }

    #[test]
    fn test_unsigned_url_without_params_has_no_query() -> Result<()> {
        let handler = BinanceRequestHandler::new(&BinanceConfig::default(), None)?;
        let url = handler.request_url(&format!("{}/allPairs", MARGIN), false, &Params::new())?;

        assert_eq!(url.query(), None);
        Ok(())
    }

    #[test]
    fn test_signed_url_requires_credentials() -> Result<()> {
        let handler = BinanceRequestHandler::new(&BinanceConfig::default(), None)?;
        let err = handler
            .request_url(&format!("{}/loan", MARGIN), true, &params())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BinanceApiError>(),
            Some(BinanceApiError::MissingCredentials { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_signed_url_carries_timestamp_and_signature() -> Result<()> {
        let handler = BinanceRequestHandler::new(
            &BinanceConfig::default(),
            Some(Credentials::new("key", "secret")),
        )?;
        let url = handler.request_url(&format!("{}/loan", MARGIN), true, &params())?;

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["asset", "timestamp", "signature"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_decodes_json_body_without_api_key() -> Result<()> {
        let body = r#"{"assetName":"BTC","isBorrowable":true}"#;
        let (base, server) = serve_once("200 OK", body).await?;
        let handler = local_handler(None)?;

        let value = handler.get(&format!("{}/asset", base), false, params()).await?;
        let head = server.await??;

        assert_eq!(value, json!({ "assetName": "BTC", "isBorrowable": true }));
        assert!(head.starts_with("GET /sapi/v1/margin/asset?asset=BTC HTTP/1.1\r\n"));
        assert!(!head.to_lowercase().contains("x-mbx-apikey"));
        Ok(())
    }

    #[tokio::test]
    async fn test_signed_post_sends_api_key_and_signature() -> Result<()> {
        let (base, server) = serve_once("200 OK", r#"{"tranId":100000001}"#).await?;
        let handler = local_handler(Some(Credentials::new("my-key", "secret")))?;

        let value = handler.post(&format!("{}/loan", base), true, params()).await?;
        let head = server.await??;

        assert_eq!(value, json!({ "tranId": 100000001 }));
        assert!(head.starts_with("POST /sapi/v1/margin/loan?asset=BTC&timestamp="));
        let request_line = head.lines().next().unwrap_or_default();
        assert!(request_line.contains("&signature="));
        assert!(head.to_lowercase().contains("x-mbx-apikey: my-key\r\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_maps_to_rejected() -> Result<()> {
        let (base, server) = serve_once(
            "400 Bad Request",
            r#"{"code":-3041,"msg":"Balance is not enough"}"#,
        )
        .await?;
        let handler = local_handler(Some(Credentials::new("my-key", "secret")))?;

        let err = handler
            .delete(&format!("{}/order", base), true, params())
            .await
            .unwrap_err();
        let head = server.await??;

        assert!(head.starts_with("DELETE /sapi/v1/margin/order?"));
        assert_eq!(
            err.downcast_ref::<BinanceApiError>(),
            Some(&BinanceApiError::Rejected {
                status: 400,
                code: -3041,
                msg: "Balance is not enough".to_string(),
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body_is_unexpected() -> Result<()> {
        let (base, server) = serve_once("502 Bad Gateway", "upstream down").await?;
        let handler = local_handler(None)?;

        let err = handler
            .get(&format!("{}/allPairs", base), false, Params::new())
            .await
            .unwrap_err();
        server.await??;

        assert_eq!(
            err.downcast_ref::<BinanceApiError>(),
            Some(&BinanceApiError::UnexpectedStatus {
                status: 502,
                body: "upstream down".to_string(),
            })
        );
        Ok(())
    }
}

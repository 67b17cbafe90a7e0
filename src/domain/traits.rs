use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::domain::enums::HttpMethod;
use crate::domain::model::params::Params;

/// Performs the HTTP call behind every endpoint.
///
/// `signed` asks the handler to authenticate the request (timestamp and
/// signature). Errors are returned to the caller untouched.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn get(&self, uri: &str, signed: bool, params: Params) -> Result<Value>;
    async fn post(&self, uri: &str, signed: bool, params: Params) -> Result<Value>;
    async fn delete(&self, uri: &str, signed: bool, params: Params) -> Result<Value>;

    async fn dispatch(
        &self,
        method: HttpMethod,
        uri: &str,
        signed: bool,
        params: Params,
    ) -> Result<Value> {
        debug!(
            "Dispatching {} {} (signed: {}, {} params)",
            method.as_str(),
            uri,
            signed,
            params.len()
        );
        match method {
            HttpMethod::Get => self.get(uri, signed, params).await,
            HttpMethod::Post => self.post(uri, signed, params).await,
            HttpMethod::Delete => self.delete(uri, signed, params).await,
        }
    }
}

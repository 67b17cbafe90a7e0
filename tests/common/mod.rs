#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use binance_margin::domain::enums::HttpMethod;
use binance_margin::domain::model::params::Params;
use binance_margin::domain::traits::RequestHandler;
use binance_margin::infrastructure::exchange::binance::BinanceClient;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub uri: String,
    pub signed: bool,
    pub params: Params,
}

/// Request handler double that records every call and answers `{"ok": true}`.
#[derive(Default)]
pub struct RecordingHandler {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingHandler {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no request was dispatched")
    }

    fn record(&self, method: HttpMethod, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            uri: uri.to_string(),
            signed,
            params,
        });
        Ok(json!({ "ok": true }))
    }
}

#[async_trait]
impl RequestHandler for RecordingHandler {
    async fn get(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.record(HttpMethod::Get, uri, signed, params)
    }

    async fn post(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.record(HttpMethod::Post, uri, signed, params)
    }

    async fn delete(&self, uri: &str, signed: bool, params: Params) -> Result<Value> {
        self.record(HttpMethod::Delete, uri, signed, params)
    }
}

pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn client() -> BinanceClient<RecordingHandler> {
    init_logger();
    BinanceClient::with_handler(RecordingHandler::default())
}

/// Endpoint URI under the default production prefix.
pub fn uri(path: &str) -> String {
    format!("https://api.binance.com/sapi/v1/{}", path)
}

/// Parameter set from a JSON object literal.
pub fn params(value: Value) -> Params {
    value
        .as_object()
        .expect("params must be a JSON object")
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

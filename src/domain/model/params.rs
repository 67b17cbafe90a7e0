use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::constants::{ISOLATED_FALSE, ISOLATED_TRUE};

/// Parameter set handed to the request handler, keyed by wire name.
pub type Params = BTreeMap<String, Value>;

/// Request types that know how to lay themselves out as a parameter set.
///
/// Implementations must be pure: calling `to_params` twice on the same value
/// yields the same set.
pub trait ToParams {
    fn to_params(&self) -> Params;
}

/// Collects the parameters of one request.
///
/// Optional values are only inserted when supplied; an explicit `Some(0)`,
/// `Some("")` or `Some(false)` is kept. The isolation flag is always written
/// once declared.
#[derive(Debug, Default, Clone)]
pub struct ParamsBuilder {
    params: Params,
}

impl ParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn optional<T: Into<Value>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.params.insert(key.to_string(), v.into());
        }
        self
    }

    pub fn isolated(mut self, is_isolated: bool) -> Self {
        self.params
            .insert("isIsolated".to_string(), Value::from(isolated_flag(is_isolated)));
        self
    }

    pub fn build(self) -> Params {
        self.params
    }
}

/// Exchange encoding of the isolated-margin flag.
pub fn isolated_flag(is_isolated: bool) -> &'static str {
    if is_isolated {
        ISOLATED_TRUE
    } else {
        ISOLATED_FALSE
    }
}

/// Renders a parameter value the way it appears in a query string.
///
/// Floats are written in positional form; the exchange rejects exponents
/// such as `1e-8`.
pub fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{}", f),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

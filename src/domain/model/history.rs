use crate::domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::domain::model::params::{Params, ParamsBuilder, ToParams};

/// Filter shared by the loan, repay and interest history queries.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordQuery {
    pub asset: String,
    pub isolated_symbol: Option<String>,
    pub tx_id: Option<u64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub current: u32,
    pub size: u32,
    pub archived: bool,
    pub recv_window: Option<u64>,
}

impl RecordQuery {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            isolated_symbol: None,
            tx_id: None,
            start_time: None,
            end_time: None,
            current: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            archived: false,
            recv_window: None,
        }
    }
}

impl ToParams for RecordQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("asset", self.asset.as_str())
            .optional("isolatedSymbol", self.isolated_symbol.as_deref())
            .optional("txId", self.tx_id)
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .required("current", self.current)
            .required("size", self.size)
            .required("archived", self.archived)
            .optional("recvWindow", self.recv_window)
            .build()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForceLiquidationQuery {
    pub isolated_symbol: Option<String>,
    pub tx_id: Option<u64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub current: u32,
    pub size: u32,
    pub recv_window: Option<u64>,
}

impl Default for ForceLiquidationQuery {
    fn default() -> Self {
        Self {
            isolated_symbol: None,
            tx_id: None,
            start_time: None,
            end_time: None,
            current: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            recv_window: None,
        }
    }
}

impl ToParams for ForceLiquidationQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .optional("isolatedSymbol", self.isolated_symbol.as_deref())
            .optional("txId", self.tx_id)
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .required("current", self.current)
            .required("size", self.size)
            .optional("recvWindow", self.recv_window)
            .build()
    }
}

// Transfer and loan intents
use crate::domain::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::domain::enums::{TransferDirection, TransferHistoryType};
use crate::domain::errors::{check_isolated_symbol, MarginTradingError};
use crate::domain::model::params::{Params, ParamsBuilder, ToParams};

/// Move an asset between the spot and the cross margin account.
///
/// `transfer_type` is the raw direction code: 1 is spot to margin, 2 is
/// margin to spot. Anything else is rejected by [`CrossMarginTransfer::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct CrossMarginTransfer {
    pub asset: String,
    pub amount: f64,
    pub transfer_type: i32,
    pub recv_window: Option<u64>,
}

impl CrossMarginTransfer {
    pub fn new(asset: impl Into<String>, amount: f64, transfer_type: i32) -> Self {
        Self {
            asset: asset.into(),
            amount,
            transfer_type,
            recv_window: None,
        }
    }

    pub fn with_direction(
        asset: impl Into<String>,
        amount: f64,
        direction: TransferDirection,
    ) -> Self {
        Self::new(asset, amount, direction.code())
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }

    pub fn validate(&self) -> Result<TransferDirection, MarginTradingError> {
        TransferDirection::from_code(self.transfer_type).ok_or(
            MarginTradingError::InvalidTransferDirection {
                value: self.transfer_type,
            },
        )
    }
}

impl ToParams for CrossMarginTransfer {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("asset", self.asset.as_str())
            .required("amount", self.amount)
            .required("type", self.transfer_type)
            .optional("recvWindow", self.recv_window)
            .build()
    }
}

/// Borrow or repay request, cross margin by default.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginLoan {
    pub asset: String,
    pub amount: f64,
    pub is_isolated: bool,
    pub symbol: Option<String>,
    pub recv_window: Option<u64>,
}

impl MarginLoan {
    pub fn new(asset: impl Into<String>, amount: f64) -> Self {
        Self {
            asset: asset.into(),
            amount,
            is_isolated: false,
            symbol: None,
            recv_window: None,
        }
    }

    /// Scope the loan to the isolated margin account of `symbol`.
    pub fn isolated(mut self, symbol: impl Into<String>) -> Self {
        self.is_isolated = true;
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }

    pub fn validate(&self, operation: &'static str) -> Result<(), MarginTradingError> {
        check_isolated_symbol(operation, self.is_isolated, self.symbol.as_deref())
    }
}

impl ToParams for MarginLoan {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("asset", self.asset.as_str())
            .required("amount", self.amount)
            .optional("symbol", self.symbol.as_deref())
            .optional("recvWindow", self.recv_window)
            .isolated(self.is_isolated)
            .build()
    }
}

/// Filter for the cross margin transfer history.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferHistoryQuery {
    pub asset: Option<String>,
    pub history_type: Option<TransferHistoryType>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub current: u32,
    pub size: u32,
    pub archived: bool,
    pub recv_window: Option<u64>,
}

impl Default for TransferHistoryQuery {
    fn default() -> Self {
        Self {
            asset: None,
            history_type: None,
            start_time: None,
            end_time: None,
            current: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            archived: false,
            recv_window: None,
        }
    }
}

impl ToParams for TransferHistoryQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .optional("asset", self.asset.as_deref())
            .optional("type", self.history_type)
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .required("current", self.current)
            .required("size", self.size)
            .required("archived", self.archived)
            .optional("recvWindow", self.recv_window)
            .build()
    }
}

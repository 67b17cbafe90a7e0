use serde::{Serialize, Serializer};
use serde_json::Value;

// Wire values follow the exchange's upper-case encoding.
// Each enum serializes as its wire string so it can be dropped straight into
// a parameter set.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl Serialize for OrderSide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::StopLossLimit => "STOP_LOSS_LIMIT",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
        }
    }
}

impl Serialize for OrderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInForce {
    GTC,
    IOC,
    FOK,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GTC => "GTC",
            TimeInForce::IOC => "IOC",
            TimeInForce::FOK => "FOK",
        }
    }
}

/// Shape of the order placement response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderResponseType {
    Ack,
    Result,
    Full,
}

impl OrderResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderResponseType::Ack => "ACK",
            OrderResponseType::Result => "RESULT",
            OrderResponseType::Full => "FULL",
        }
    }
}

/// How a margin order borrows or repays automatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffectType {
    NoSideEffect,
    MarginBuy,
    AutoRepay,
}

impl SideEffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideEffectType::NoSideEffect => "NO_SIDE_EFFECT",
            SideEffectType::MarginBuy => "MARGIN_BUY",
            SideEffectType::AutoRepay => "AUTO_REPAY",
        }
    }
}

/// Direction filter for the cross margin transfer history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferHistoryType {
    RollIn,
    RollOut,
}

impl TransferHistoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferHistoryType::RollIn => "ROLL_IN",
            TransferHistoryType::RollOut => "ROLL_OUT",
        }
    }
}

/// Direction code of a cross margin transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferDirection {
    SpotToMargin,
    MarginToSpot,
}

impl TransferDirection {
    pub fn code(&self) -> i32 {
        match self {
            TransferDirection::SpotToMargin => 1,
            TransferDirection::MarginToSpot => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(TransferDirection::SpotToMargin),
            2 => Some(TransferDirection::MarginToSpot),
            _ => None,
        }
    }
}

/// Version tier used when building an endpoint URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiTier {
    Default,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

// Wire strings as JSON parameter values
macro_rules! impl_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::String(v.as_str().to_string())
                }
            }
        )*
    };
}

impl_into_value!(
    OrderSide,
    OrderType,
    TimeInForce,
    OrderResponseType,
    SideEffectType,
    TransferHistoryType
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_strings() {
        assert_eq!(OrderType::StopLossLimit.as_str(), "STOP_LOSS_LIMIT");
        assert_eq!(OrderType::TakeProfit.as_str(), "TAKE_PROFIT");
        assert_eq!(serde_json::to_string(&OrderSide::Sell).unwrap(), "\"SELL\"");
    }

    #[test]
    fn test_transfer_direction_codes() {
        assert_eq!(TransferDirection::from_code(1), Some(TransferDirection::SpotToMargin));
        assert_eq!(TransferDirection::from_code(2), Some(TransferDirection::MarginToSpot));
        assert_eq!(TransferDirection::from_code(0), None);
        assert_eq!(TransferDirection::from_code(3), None);
        assert_eq!(TransferDirection::MarginToSpot.code(), 2);
    }
}

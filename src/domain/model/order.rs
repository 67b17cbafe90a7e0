// Domain model for margin orders
use crate::domain::constants::DEFAULT_ALL_ORDERS_LIMIT;
use crate::domain::enums::{OrderResponseType, OrderSide, OrderType, SideEffectType, TimeInForce};
use crate::domain::model::params::{Params, ParamsBuilder, ToParams};

/// Optional fields of a margin order.
///
/// The exchange decides which of them a given order type needs; they are
/// forwarded only when set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderOptions {
    pub is_isolated: bool,
    pub time_in_force: Option<TimeInForce>,
    pub quantity: Option<f64>,
    pub quote_order_qty: Option<f64>,
    pub price: Option<f64>,
    pub new_client_order_id: Option<String>,
    pub stop_price: Option<f64>,
    pub iceberg_qty: Option<f64>,
    pub new_order_resp_type: Option<OrderResponseType>,
    pub side_effect_type: Option<SideEffectType>,
    pub recv_window: Option<u64>,
}

impl OrderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn isolated(mut self, is_isolated: bool) -> Self {
        self.is_isolated = is_isolated;
        self
    }

    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn quote_order_qty(mut self, quote_order_qty: f64) -> Self {
        self.quote_order_qty = Some(quote_order_qty);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn stop_price(mut self, stop_price: f64) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn iceberg_qty(mut self, iceberg_qty: f64) -> Self {
        self.iceberg_qty = Some(iceberg_qty);
        self
    }

    pub fn response_type(mut self, response_type: OrderResponseType) -> Self {
        self.new_order_resp_type = Some(response_type);
        self
    }

    pub fn side_effect(mut self, side_effect_type: SideEffectType) -> Self {
        self.side_effect_type = Some(side_effect_type);
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

// OrderRequest is a send-side intent
#[derive(Clone, Debug, PartialEq)]
pub struct MarginOrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub options: OrderOptions,
}

impl MarginOrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        options: OrderOptions,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            options,
        }
    }
}

impl ToParams for MarginOrderRequest {
    fn to_params(&self) -> Params {
        let o = &self.options;
        ParamsBuilder::new()
            .required("symbol", self.symbol.as_str())
            .required("side", self.side)
            .required("type", self.order_type)
            .optional("timeInForce", o.time_in_force)
            .optional("quantity", o.quantity)
            .optional("quoteOrderQty", o.quote_order_qty)
            .optional("price", o.price)
            .optional("newClientOrderId", o.new_client_order_id.as_deref())
            .optional("stopPrice", o.stop_price)
            .optional("icebergQty", o.iceberg_qty)
            .optional("newOrderRespType", o.new_order_resp_type)
            .optional("sideEffectType", o.side_effect_type)
            .optional("recvWindow", o.recv_window)
            .isolated(o.is_isolated)
            .build()
    }
}

/// Cancels one order, or every open order of the symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct CancelMarginOrder {
    pub symbol: String,
    pub is_isolated: bool,
    pub order_id: Option<u64>,
    pub orig_client_order_id: Option<String>,
    pub new_client_order_id: Option<String>,
    pub recv_window: Option<u64>,
}

impl CancelMarginOrder {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            is_isolated: false,
            order_id: None,
            orig_client_order_id: None,
            new_client_order_id: None,
            recv_window: None,
        }
    }

    pub fn isolated(mut self, is_isolated: bool) -> Self {
        self.is_isolated = is_isolated;
        self
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn orig_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.orig_client_order_id = Some(id.into());
        self
    }

    /// Fresh client id the exchange assigns to the cancellation itself.
    pub fn new_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

impl ToParams for CancelMarginOrder {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("symbol", self.symbol.as_str())
            .optional("orderId", self.order_id)
            .optional("origClientOrderId", self.orig_client_order_id.as_deref())
            .optional("newClientOrderId", self.new_client_order_id.as_deref())
            .optional("recvWindow", self.recv_window)
            .isolated(self.is_isolated)
            .build()
    }
}

/// Looks up a single margin order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderQuery {
    pub symbol: String,
    pub is_isolated: bool,
    pub order_id: Option<u64>,
    pub orig_client_order_id: Option<String>,
    pub recv_window: Option<u64>,
}

impl OrderQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            is_isolated: false,
            order_id: None,
            orig_client_order_id: None,
            recv_window: None,
        }
    }

    pub fn isolated(mut self, is_isolated: bool) -> Self {
        self.is_isolated = is_isolated;
        self
    }

    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn orig_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.orig_client_order_id = Some(id.into());
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

impl ToParams for OrderQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("symbol", self.symbol.as_str())
            .optional("orderId", self.order_id)
            .optional("origClientOrderId", self.orig_client_order_id.as_deref())
            .optional("recvWindow", self.recv_window)
            .isolated(self.is_isolated)
            .build()
    }
}

/// Lists all margin orders of a symbol, `limit` defaults to 500.
#[derive(Clone, Debug, PartialEq)]
pub struct AllOrdersQuery {
    pub symbol: String,
    pub is_isolated: bool,
    pub order_id: Option<u64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub limit: u32,
    pub recv_window: Option<u64>,
}

impl AllOrdersQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            is_isolated: false,
            order_id: None,
            start_time: None,
            end_time: None,
            limit: DEFAULT_ALL_ORDERS_LIMIT,
            recv_window: None,
        }
    }

    pub fn isolated(mut self, is_isolated: bool) -> Self {
        self.is_isolated = is_isolated;
        self
    }

    /// Only orders with an id at or above this one are returned.
    pub fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Epoch milliseconds.
    pub fn start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = Some(recv_window);
        self
    }
}

impl ToParams for AllOrdersQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .required("symbol", self.symbol.as_str())
            .optional("orderId", self.order_id)
            .optional("startTime", self.start_time)
            .optional("endTime", self.end_time)
            .required("limit", self.limit)
            .optional("recvWindow", self.recv_window)
            .isolated(self.is_isolated)
            .build()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenOrdersQuery {
    pub symbol: Option<String>,
    pub is_isolated: bool,
    pub recv_window: Option<u64>,
}

impl ToParams for OpenOrdersQuery {
    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .optional("symbol", self.symbol.as_deref())
            .optional("recvWindow", self.recv_window)
            .isolated(self.is_isolated)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cancel_setters_fill_every_optional() {
        let params = CancelMarginOrder::new("BTCUSDT")
            .isolated(true)
            .orig_client_order_id("my-order-1")
            .new_client_order_id("cancel-1")
            .recv_window(5000)
            .to_params();

        assert_eq!(params["origClientOrderId"], json!("my-order-1"));
        assert_eq!(params["newClientOrderId"], json!("cancel-1"));
        assert_eq!(params["recvWindow"], json!(5000));
        assert_eq!(params["isIsolated"], json!("TRUE"));
        assert!(!params.contains_key("orderId"));
    }

    #[test]
    fn test_order_query_setters() {
        let params = OrderQuery::new("ETHBTC")
            .isolated(true)
            .order_id(7)
            .recv_window(1000)
            .to_params();

        assert_eq!(params["symbol"], json!("ETHBTC"));
        assert_eq!(params["orderId"], json!(7));
        assert_eq!(params["recvWindow"], json!(1000));
        assert_eq!(params["isIsolated"], json!("TRUE"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_all_orders_query_setters_override_defaults() {
        let query = AllOrdersQuery::new("BTCUSDT")
            .order_id(100)
            .start_time(1_600_000_000_000)
            .limit(50)
            .recv_window(2000);
        let params = query.to_params();

        assert_eq!(params["orderId"], json!(100));
        assert_eq!(params["startTime"], json!(1_600_000_000_000i64));
        assert!(!params.contains_key("endTime"));
        assert_eq!(params["limit"], json!(50));
        assert_eq!(params["recvWindow"], json!(2000));
        assert_eq!(params["isIsolated"], json!("FALSE"));
    }
}

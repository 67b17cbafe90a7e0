//! Margin account endpoints.
//!
//! Every operation validates its request, lays it out as a parameter set,
//! builds the endpoint URI and hands the call to the request handler.
//! Only the reference-data queries go out unsigned.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::domain::constants::*;
use crate::domain::enums::{ApiTier, HttpMethod, OrderSide, OrderType, TransferDirection};
use crate::domain::errors::check_isolated_symbol;
use crate::domain::model::history::{ForceLiquidationQuery, RecordQuery};
use crate::domain::model::order::{
    AllOrdersQuery, CancelMarginOrder, MarginOrderRequest, OpenOrdersQuery, OrderOptions,
    OrderQuery,
};
use crate::domain::model::params::{Params, ParamsBuilder, ToParams};
use crate::domain::model::transfer::{CrossMarginTransfer, MarginLoan, TransferHistoryQuery};
use crate::domain::traits::RequestHandler;
use crate::infrastructure::exchange::binance::uri::UriBuilder;

#[async_trait]
pub trait MarginAccountEndpoints: Send + Sync {
    type Handler: RequestHandler;

    fn request_handler(&self) -> &Self::Handler;

    fn uri_builder(&self) -> &UriBuilder;

    fn create_margin_api_uri(&self, path: &str, tier: ApiTier) -> String {
        self.uri_builder().build(path, tier)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        tier: ApiTier,
        signed: bool,
        params: Params,
    ) -> Result<Value> {
        let uri = self.create_margin_api_uri(path, tier);
        self.request_handler().dispatch(method, &uri, signed, params).await
    }

    // === Transfers ===

    async fn cross_margin_transfer(&self, transfer: CrossMarginTransfer) -> Result<Value> {
        transfer.validate()?;
        let params = transfer.to_params();
        self.send(HttpMethod::Post, PATH_TRANSFER, ApiTier::Default, true, params).await
    }

    async fn margin_to_spot_transfer(
        &self,
        asset: &str,
        amount: f64,
        recv_window: Option<u64>,
    ) -> Result<Value> {
        let mut transfer =
            CrossMarginTransfer::with_direction(asset, amount, TransferDirection::MarginToSpot);
        transfer.recv_window = recv_window;
        self.cross_margin_transfer(transfer).await
    }

    async fn spot_to_margin_transfer(
        &self,
        asset: &str,
        amount: f64,
        recv_window: Option<u64>,
    ) -> Result<Value> {
        let mut transfer =
            CrossMarginTransfer::with_direction(asset, amount, TransferDirection::SpotToMargin);
        transfer.recv_window = recv_window;
        self.cross_margin_transfer(transfer).await
    }

    // === Borrow / repay ===

    async fn margin_account_borrow(&self, loan: MarginLoan) -> Result<Value> {
        loan.validate("margin_account_borrow")?;
        let params = loan.to_params();
        self.send(HttpMethod::Post, PATH_LOAN, ApiTier::Default, true, params).await
    }

    async fn margin_account_repay(&self, loan: MarginLoan) -> Result<Value> {
        loan.validate("margin_account_repay")?;
        let params = loan.to_params();
        self.send(HttpMethod::Post, PATH_REPAY, ApiTier::Default, true, params).await
    }

    // === Reference data (unsigned) ===

    async fn query_margin_asset(&self, asset: &str) -> Result<Value> {
        let params = ParamsBuilder::new().required("asset", asset).build();
        self.send(HttpMethod::Get, PATH_ASSET, ApiTier::Default, false, params).await
    }

    async fn query_cross_margin_pair(&self, symbol: &str) -> Result<Value> {
        let params = ParamsBuilder::new().required("symbol", symbol).build();
        self.send(HttpMethod::Get, PATH_PAIR, ApiTier::Default, false, params).await
    }

    async fn get_all_margin_assets(&self) -> Result<Value> {
        self.send(HttpMethod::Get, PATH_ALL_ASSETS, ApiTier::Default, false, Params::new()).await
    }

    async fn get_all_cross_margin_pairs(&self) -> Result<Value> {
        self.send(HttpMethod::Get, PATH_ALL_PAIRS, ApiTier::Default, false, Params::new()).await
    }

    async fn query_cross_margin_price_index(&self, symbol: &str) -> Result<Value> {
        let params = ParamsBuilder::new().required("symbol", symbol).build();
        self.send(HttpMethod::Get, PATH_PRICE_INDEX, ApiTier::Default, false, params).await
    }

    // === Orders ===

    async fn create_margin_order(&self, order: MarginOrderRequest) -> Result<Value> {
        let params = order.to_params();
        self.send(HttpMethod::Post, PATH_ORDER, ApiTier::Default, true, params).await
    }

    async fn margin_limit_buy_order(&self, symbol: &str, options: OrderOptions) -> Result<Value> {
        let order = MarginOrderRequest::new(symbol, OrderSide::Buy, OrderType::Limit, options);
        self.create_margin_order(order).await
    }

    async fn margin_limit_sell_order(&self, symbol: &str, options: OrderOptions) -> Result<Value> {
        let order = MarginOrderRequest::new(symbol, OrderSide::Sell, OrderType::Limit, options);
        self.create_margin_order(order).await
    }

    async fn margin_market_buy_order(&self, symbol: &str, options: OrderOptions) -> Result<Value> {
        let order = MarginOrderRequest::new(symbol, OrderSide::Buy, OrderType::Market, options);
        self.create_margin_order(order).await
    }

    async fn margin_market_sell_order(&self, symbol: &str, options: OrderOptions) -> Result<Value> {
        let order = MarginOrderRequest::new(symbol, OrderSide::Sell, OrderType::Market, options);
        self.create_margin_order(order).await
    }

    async fn margin_limit_stoploss_buy_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Buy,
            OrderType::StopLossLimit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_limit_stoploss_sell_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Sell,
            OrderType::StopLossLimit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_stoploss_buy_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Buy,
            OrderType::StopLoss,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_stoploss_sell_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Sell,
            OrderType::StopLoss,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_takeprofit_buy_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Buy,
            OrderType::TakeProfit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_takeprofit_sell_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Sell,
            OrderType::TakeProfit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_takeprofit_limit_buy_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Buy,
            OrderType::TakeProfitLimit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn margin_takeprofit_limit_sell_order(
        &self,
        symbol: &str,
        stop_price: f64,
        options: OrderOptions,
    ) -> Result<Value> {
        let order = stop_order(
            symbol,
            OrderSide::Sell,
            OrderType::TakeProfitLimit,
            stop_price,
            options,
        );
        self.create_margin_order(order).await
    }

    async fn cancel_margin_order(&self, cancel: CancelMarginOrder) -> Result<Value> {
        let params = cancel.to_params();
        self.send(HttpMethod::Delete, PATH_ORDER, ApiTier::Default, true, params).await
    }

    async fn cancel_all_margin_order(&self, cancel: CancelMarginOrder) -> Result<Value> {
        let params = cancel.to_params();
        self.send(HttpMethod::Delete, PATH_OPEN_ORDERS, ApiTier::Default, true, params).await
    }

    // === History ===

    async fn get_cross_margin_transfer_history(
        &self,
        query: TransferHistoryQuery,
    ) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_TRANSFER, ApiTier::Default, true, params).await
    }

    async fn query_margin_loan_record(&self, query: RecordQuery) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_LOAN, ApiTier::Private, true, params).await
    }

    async fn query_margin_repay_record(&self, query: RecordQuery) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_REPAY, ApiTier::Private, true, params).await
    }

    async fn get_margin_interest_history(&self, query: RecordQuery) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_INTEREST_HISTORY, ApiTier::Private, true, params).await
    }

    async fn get_margin_force_liquidation_record(
        &self,
        query: ForceLiquidationQuery,
    ) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_FORCE_LIQUIDATION, ApiTier::Private, true, params).await
    }

    // === Account and order queries ===

    async fn query_cross_margin_account_details(&self, recv_window: Option<u64>) -> Result<Value> {
        let params = ParamsBuilder::new().optional("recvWindow", recv_window).build();
        self.send(HttpMethod::Get, PATH_ACCOUNT, ApiTier::Private, true, params).await
    }

    async fn query_margin_account_open_orders(&self, query: OpenOrdersQuery) -> Result<Value> {
        check_isolated_symbol(
            "query_margin_account_open_orders",
            query.is_isolated,
            query.symbol.as_deref(),
        )?;
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_OPEN_ORDERS, ApiTier::Private, true, params).await
    }

    /// All orders of a symbol (`margin/allOrders`).
    async fn query_margin_account_order(&self, query: AllOrdersQuery) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_ALL_ORDERS, ApiTier::Private, true, params).await
    }

    /// A single order, by `orderId` or `origClientOrderId` (`margin/order`).
    async fn query_margin_order(&self, query: OrderQuery) -> Result<Value> {
        let params = query.to_params();
        self.send(HttpMethod::Get, PATH_ORDER, ApiTier::Private, true, params).await
    }
}

fn stop_order(
    symbol: &str,
    side: OrderSide,
    order_type: OrderType,
    stop_price: f64,
    options: OrderOptions,
) -> MarginOrderRequest {
    MarginOrderRequest::new(symbol, side, order_type, options.stop_price(stop_price))
}

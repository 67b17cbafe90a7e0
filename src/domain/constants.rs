// Endpoint path fragments, relative to `<base_url>/<api_prefix>/<version>/`.
pub const PATH_TRANSFER: &str = "margin/transfer";
pub const PATH_LOAN: &str = "margin/loan";
pub const PATH_REPAY: &str = "margin/repay";
pub const PATH_ASSET: &str = "margin/asset";
pub const PATH_PAIR: &str = "margin/pair";
pub const PATH_ALL_ASSETS: &str = "margin/allAssets";
pub const PATH_ALL_PAIRS: &str = "margin/allPairs";
pub const PATH_PRICE_INDEX: &str = "margin/priceIndex";
pub const PATH_ORDER: &str = "margin/order";
pub const PATH_OPEN_ORDERS: &str = "margin/openOrders";
pub const PATH_ALL_ORDERS: &str = "margin/allOrders";
pub const PATH_INTEREST_HISTORY: &str = "margin/interestHistory";
pub const PATH_FORCE_LIQUIDATION: &str = "margin/forceLiquidationRec";
pub const PATH_ACCOUNT: &str = "margin/account";

// Encoding of the isIsolated flag
pub const ISOLATED_TRUE: &str = "TRUE";
pub const ISOLATED_FALSE: &str = "FALSE";

// Paging defaults sent by the history queries
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_ALL_ORDERS_LIMIT: u32 = 500;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
pub const DEFAULT_API_PREFIX: &str = "sapi";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_PRIVATE_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const ERROR_MISSING_RPC_URL: &str = "missing RPC url, pass --rpc-url or set the network URI variable";

pub const ERROR_MISSING_PRIVATE_KEY: &str = "missing private key, pass --private-key or set the network private key variable";

pub const ERROR_INVALID_PRIVATE_KEY: &str = "invalid private key";

pub const ERROR_INVALID_RPC_URL: &str = "invalid RPC url";

pub const ERROR_HTTP_CLIENT: &str = "failed to build the HTTP client";

pub const ERROR_AMOUNT_OVERFLOW: &str = "amount does not fit in 256 bits";

pub const ERROR_RECEIPT_UNAVAILABLE: &str = "failed to fetch the transaction receipt";

//! Re-exported types from external crates used throughout the response types.
//!
//! Re-exported so callers do not need these crates in their own `Cargo.toml`.

/// Wallet addresses, condition ids and token ids, plus literal macros.
pub use alloy::primitives::{Address, B256, U256, address, b256};
/// Timestamps and calendar dates.
pub use chrono::{DateTime, NaiveDate, Utc};
/// Arbitrary precision decimal for prices, sizes and volumes.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use polymarket_gamma_sdk::types::dec;
/// let price = dec!(0.55);
/// ```
pub use rust_decimal_macros::dec;

//! Polymarket Data API client and types.
//!
//! **Feature flag:** `data`
//!
//! The Data API reports per-user positions, trades and on-chain activity, and
//! per-market holders, open interest and volume.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `/` | [`Client::health`] |
//! | `/positions` | [`Client::positions`] |
//! | `/closed-positions` | [`Client::closed_positions`] |
//! | `/trades` | [`Client::trades`] |
//! | `/activity` | [`Client::activity`] |
//! | `/holders` | [`Client::holders`] |
//! | `/value` | [`Client::value`] |
//! | `/traded` | [`Client::traded`] |
//! | `/oi` | [`Client::open_interest`] |
//! | `/live-volume` | [`Client::live_volume`] |
//!
//! ```no_run
//! use polymarket_gamma_sdk::data::{Client, types::request::PositionsRequest};
//! use polymarket_gamma_sdk::types::address;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//! let request = PositionsRequest::builder()
//!     .user(address!("56687bf447db6ffa42ffe2204a05edaa20f55839"))
//!     .build();
//!
//! for position in client.positions(&request).await? {
//!     println!("{}: {} @ {}", position.title, position.size, position.cur_price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;

//! Common types used across the application.

pub mod money;

pub use money::{CURRENCY_SCALE, format_amount, round_currency, within_tolerance};

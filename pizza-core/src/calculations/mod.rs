//! Pricing logic for the pizza order form.
//!
//! This module validates order selections, prices them against a
//! [`PricingConfig`], and lays the result out as a text receipt.

pub mod common;
pub mod order;
pub mod pricing;
pub mod receipt;

pub use order::{OrderCalculator, OrderValidationError};
pub use pricing::{MAX_ITEM_PRICE, PricingConfig, PricingConfigError, SizePrices};
pub use receipt::{LineItem, Receipt};

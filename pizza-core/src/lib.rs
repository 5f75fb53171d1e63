pub mod calculations;
pub mod form;
pub mod models;

pub use calculations::{
    LineItem, MAX_ITEM_PRICE, OrderCalculator, OrderValidationError, PricingConfig,
    PricingConfigError, Receipt,
};
pub use form::{FormPhase, OrderForm};
pub use models::*;

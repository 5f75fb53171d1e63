//! Price list used by the order calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PizzaSize, SizeOption, Topping, ToppingOption};

/// Highest accepted price for a size or a topping. With at most six toppings
/// and a tax rate of at most 1, every receipt amount stays far inside
/// `Decimal` range.
pub const MAX_ITEM_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Errors raised when a [`PricingConfig`] holds values that cannot price an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    /// A size was given a negative base price.
    #[error("base price for {0} must be non-negative, got {1}")]
    NegativeSizePrice(PizzaSize, Decimal),

    /// A size price is above [`MAX_ITEM_PRICE`].
    #[error("base price for {0} must be at most {MAX_ITEM_PRICE}, got {1}")]
    SizePriceTooHigh(PizzaSize, Decimal),

    /// The per-topping surcharge is negative.
    #[error("topping price must be non-negative, got {0}")]
    NegativeToppingPrice(Decimal),

    /// The per-topping surcharge is above [`MAX_ITEM_PRICE`].
    #[error("topping price must be at most {MAX_ITEM_PRICE}, got {0}")]
    ToppingPriceTooHigh(Decimal),

    /// The tax rate is outside [0, 1].
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),
}

/// Base price for each pizza size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizePrices {
    pub small: Decimal,
    pub medium: Decimal,
    pub large: Decimal,
    #[serde(rename = "super")]
    pub super_size: Decimal,
}

impl Default for SizePrices {
    fn default() -> Self {
        Self {
            small: Decimal::new(800, 2),
            medium: Decimal::new(1200, 2),
            large: Decimal::new(1600, 2),
            super_size: Decimal::new(2000, 2),
        }
    }
}

impl SizePrices {
    pub fn price_for(
        &self,
        size: PizzaSize,
    ) -> Decimal {
        match size {
            PizzaSize::Small => self.small,
            PizzaSize::Medium => self.medium,
            PizzaSize::Large => self.large,
            PizzaSize::Super => self.super_size,
        }
    }
}

/// Prices and tax rate for the order form.
///
/// The default holds the shop's fixed price list: $8, $12, $16 and $20 by
/// size, $1.00 per topping and 7% tax. Fields left out of a deserialized
/// config keep these defaults.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::{PizzaSize, PricingConfig};
///
/// let config = PricingConfig::default();
///
/// assert_eq!(config.size_prices.price_for(PizzaSize::Large), dec!(16.00));
/// assert_eq!(config.topping_price, dec!(1.00));
/// assert_eq!(config.tax_rate, dec!(0.07));
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub size_prices: SizePrices,

    /// Flat surcharge for every selected topping.
    pub topping_price: Decimal,

    /// Sales tax applied to the subtotal, as a fraction (0.07 is 7%).
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            size_prices: SizePrices::default(),
            topping_price: Decimal::new(100, 2),
            tax_rate: Decimal::new(7, 2),
        }
    }
}

impl PricingConfig {
    /// Checks every price and the tax rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingConfigError`] if:
    /// - any size price is negative or above [`MAX_ITEM_PRICE`]
    /// - `topping_price` is negative or above [`MAX_ITEM_PRICE`]
    /// - `tax_rate` is not in [0, 1]
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        for size in PizzaSize::all() {
            let price = self.size_prices.price_for(*size);
            if price < Decimal::ZERO {
                return Err(PricingConfigError::NegativeSizePrice(*size, price));
            }
            if price > MAX_ITEM_PRICE {
                return Err(PricingConfigError::SizePriceTooHigh(*size, price));
            }
        }
        if self.topping_price < Decimal::ZERO {
            return Err(PricingConfigError::NegativeToppingPrice(
                self.topping_price,
            ));
        }
        if self.topping_price > MAX_ITEM_PRICE {
            return Err(PricingConfigError::ToppingPriceTooHigh(
                self.topping_price,
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(PricingConfigError::InvalidTaxRate(self.tax_rate));
        }
        Ok(())
    }

    pub fn size_option(
        &self,
        size: PizzaSize,
    ) -> SizeOption {
        SizeOption {
            size,
            base_price: self.size_prices.price_for(size),
        }
    }

    /// Size options in dropdown order.
    pub fn size_options(&self) -> Vec<SizeOption> {
        PizzaSize::all()
            .iter()
            .map(|size| self.size_option(*size))
            .collect()
    }

    pub fn topping_option(
        &self,
        topping: Topping,
    ) -> ToppingOption {
        ToppingOption {
            topping,
            unit_price: self.topping_price,
        }
    }
}

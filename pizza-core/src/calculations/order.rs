//! Order validation and pricing.
//!
//! The calculator turns an [`OrderSelection`] into a [`Receipt`]:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Base price for the selected size |
//! | 2    | Toppings cost: number of toppings × topping price |
//! | 3    | Subtotal: Step 1 + Step 2 |
//! | 4    | Tax: Step 3 × tax rate |
//! | 5    | Total: Step 3 + Step 4 |
//!
//! The crust does not affect the price; it only appears on the receipt.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pizza_core::{CrustChoice, OrderCalculator, OrderSelection, PizzaSize, Topping};
//!
//! let calculator = OrderCalculator::default();
//! let selection = OrderSelection::new(
//!     CrustChoice::Regular,
//!     PizzaSize::Medium,
//!     [Topping::Pepperoni, Topping::Mushrooms],
//! );
//!
//! let receipt = calculator.place_order(&selection).unwrap();
//!
//! assert_eq!(receipt.subtotal, dec!(14.00));
//! assert_eq!(receipt.tax_amount, dec!(0.98));
//! assert_eq!(receipt.total, dec!(14.98));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::pricing::{PricingConfig, PricingConfigError};
use crate::calculations::receipt::{LineItem, Receipt};
use crate::OrderSelection;

/// Reasons an order cannot be priced yet. Both are fixed by changing the
/// selection and ordering again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("Please select a crust type.")]
    MissingCrust,

    #[error("Please select at least one topping.")]
    NoToppingsSelected,
}

/// Validates and prices order selections against a [`PricingConfig`].
#[derive(Debug, Clone, Default)]
pub struct OrderCalculator {
    config: PricingConfig,
}

impl OrderCalculator {
    /// Creates a calculator for the given price list.
    ///
    /// # Errors
    ///
    /// Returns [`PricingConfigError`] if the config fails
    /// [`PricingConfig::validate`].
    pub fn new(config: PricingConfig) -> Result<Self, PricingConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Checks that the selection can be priced.
    ///
    /// A missing crust is reported before missing toppings.
    ///
    /// # Example
    ///
    /// ```
    /// use pizza_core::{CrustChoice, OrderCalculator, OrderSelection, OrderValidationError, PizzaSize};
    ///
    /// let calculator = OrderCalculator::default();
    /// let selection = OrderSelection::new(CrustChoice::DeepDish, PizzaSize::Super, []);
    ///
    /// assert_eq!(
    ///     calculator.validate(&selection),
    ///     Err(OrderValidationError::NoToppingsSelected)
    /// );
    /// ```
    pub fn validate(
        &self,
        selection: &OrderSelection,
    ) -> Result<(), OrderValidationError> {
        if !selection.crust.is_selected() {
            return Err(OrderValidationError::MissingCrust);
        }
        if selection.toppings.is_empty() {
            return Err(OrderValidationError::NoToppingsSelected);
        }
        Ok(())
    }

    /// Prices a selection that has already passed [`validate`](Self::validate).
    ///
    /// This is a pure function of the selection and the price list.
    pub fn compute_receipt(
        &self,
        selection: &OrderSelection,
    ) -> Receipt {
        let size_option = self.config.size_option(selection.size);
        let base_price = size_option.base_price;

        let toppings_cost = self.toppings_cost(selection.topping_count());
        let subtotal = self.subtotal(base_price, toppings_cost);
        let tax_amount = self.tax(subtotal);
        let total = self.total(subtotal, tax_amount);

        debug!(
            size = %selection.size,
            toppings = selection.topping_count(),
            %subtotal,
            %total,
            "priced order"
        );

        Receipt {
            base: LineItem::new(
                format!("{} {}", selection.crust, size_option.display_label()),
                base_price,
            ),
            toppings: selection
                .toppings
                .iter()
                .map(|topping| {
                    let option = self.config.topping_option(*topping);
                    LineItem::new(option.topping.label(), option.unit_price)
                })
                .collect(),
            subtotal,
            tax_amount,
            total,
        }
    }

    /// Validates the selection and prices it in one step.
    ///
    /// # Errors
    ///
    /// Returns [`OrderValidationError`] if the selection has no crust or no
    /// toppings.
    pub fn place_order(
        &self,
        selection: &OrderSelection,
    ) -> Result<Receipt, OrderValidationError> {
        self.validate(selection)?;
        Ok(self.compute_receipt(selection))
    }

    /// Flat surcharge: every topping costs the same.
    fn toppings_cost(
        &self,
        topping_count: usize,
    ) -> Decimal {
        Decimal::from(topping_count) * self.config.topping_price
    }

    fn subtotal(
        &self,
        base_price: Decimal,
        toppings_cost: Decimal,
    ) -> Decimal {
        base_price + toppings_cost
    }

    fn tax(
        &self,
        subtotal: Decimal,
    ) -> Decimal {
        subtotal * self.config.tax_rate
    }

    fn total(
        &self,
        subtotal: Decimal,
        tax: Decimal,
    ) -> Decimal {
        subtotal + tax
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::pricing::{MAX_ITEM_PRICE, SizePrices};
    use crate::{CrustChoice, PizzaSize, Topping};

    fn calculator() -> OrderCalculator {
        OrderCalculator::default()
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_rejects_missing_crust_for_every_size() {
        for size in PizzaSize::all() {
            let selection = OrderSelection::new(CrustChoice::Unselected, *size, [Topping::Bacon]);

            assert_eq!(
                calculator().validate(&selection),
                Err(OrderValidationError::MissingCrust)
            );
        }
    }

    #[test]
    fn validate_reports_missing_crust_before_missing_toppings() {
        let selection = OrderSelection::default();

        assert_eq!(
            calculator().validate(&selection),
            Err(OrderValidationError::MissingCrust)
        );
    }

    #[test]
    fn validate_rejects_empty_toppings_for_every_crust() {
        for crust in CrustChoice::all() {
            let selection = OrderSelection::new(*crust, PizzaSize::Large, []);

            assert_eq!(
                calculator().validate(&selection),
                Err(OrderValidationError::NoToppingsSelected)
            );
        }
    }

    #[test]
    fn validate_accepts_crust_with_topping() {
        let selection = OrderSelection::new(CrustChoice::Thin, PizzaSize::Small, [Topping::Onions]);

        assert_eq!(calculator().validate(&selection), Ok(()));
    }

    #[test]
    fn validation_messages_match_form_notifications() {
        assert_eq!(
            OrderValidationError::MissingCrust.to_string(),
            "Please select a crust type."
        );
        assert_eq!(
            OrderValidationError::NoToppingsSelected.to_string(),
            "Please select at least one topping."
        );
    }

    // =========================================================================
    // compute_receipt tests
    // =========================================================================

    #[test]
    fn regular_medium_with_two_toppings() {
        let selection = OrderSelection::new(
            CrustChoice::Regular,
            PizzaSize::Medium,
            [Topping::Pepperoni, Topping::Mushrooms],
        );

        let receipt = calculator().compute_receipt(&selection);

        assert_eq!(receipt.subtotal, dec!(14.00));
        assert_eq!(receipt.tax_amount, dec!(0.98));
        assert_eq!(receipt.total, dec!(14.98));
        assert_eq!(receipt.base.label, "Regular Medium ($12.00)");
    }

    #[test]
    fn thin_small_with_pineapple() {
        let selection =
            OrderSelection::new(CrustChoice::Thin, PizzaSize::Small, [Topping::Pineapple]);

        let receipt = calculator().compute_receipt(&selection);

        assert_eq!(receipt.subtotal, dec!(9.00));
        assert_eq!(receipt.tax_amount, dec!(0.63));
        assert_eq!(receipt.total, dec!(9.63));
    }

    #[test]
    fn large_with_every_topping() {
        let selection = OrderSelection::new(
            CrustChoice::DeepDish,
            PizzaSize::Large,
            Topping::all().iter().copied(),
        );

        let receipt = calculator().compute_receipt(&selection);

        assert_eq!(receipt.subtotal, dec!(22.00));
        assert_eq!(receipt.tax_amount, dec!(1.54));
        assert_eq!(receipt.total, dec!(23.54));
        assert_eq!(receipt.toppings.len(), 6);
    }

    #[test]
    fn total_is_base_plus_toppings_times_one_point_zero_seven() {
        for size in PizzaSize::all() {
            for count in 1..=Topping::all().len() {
                let selection = OrderSelection::new(
                    CrustChoice::Regular,
                    *size,
                    Topping::all().iter().copied().take(count),
                );
                let base = calculator().config().size_prices.price_for(*size);

                let receipt = calculator().compute_receipt(&selection);

                assert_eq!(receipt.total, (base + Decimal::from(count)) * dec!(1.07));
            }
        }
    }

    #[test]
    fn toppings_are_listed_in_menu_order() {
        let selection = OrderSelection::new(
            CrustChoice::Thin,
            PizzaSize::Small,
            [Topping::Pineapple, Topping::Sausage, Topping::Pepperoni],
        );

        let receipt = calculator().compute_receipt(&selection);
        let labels: Vec<&str> = receipt
            .toppings
            .iter()
            .map(|item| item.label.as_str())
            .collect();

        assert_eq!(labels, vec!["Pepperoni", "Sausage", "Pineapple"]);
    }

    #[test]
    fn crust_does_not_change_price() {
        let totals: Vec<Decimal> = CrustChoice::all()
            .iter()
            .map(|crust| {
                let selection = OrderSelection::new(*crust, PizzaSize::Super, [Topping::Bacon]);
                calculator().compute_receipt(&selection).total
            })
            .collect();

        assert!(totals.iter().all(|total| *total == totals[0]));
    }

    #[test]
    fn compute_receipt_is_idempotent() {
        let selection = OrderSelection::new(
            CrustChoice::DeepDish,
            PizzaSize::Large,
            [Topping::Onions, Topping::Bacon],
        );

        let first = calculator().compute_receipt(&selection).render();
        let second = calculator().compute_receipt(&selection).render();

        assert_eq!(first, second);
    }

    #[test]
    fn compute_receipt_uses_configured_prices() {
        let config = PricingConfig {
            topping_price: dec!(1.50),
            tax_rate: dec!(0.10),
            ..PricingConfig::default()
        };
        let calculator = OrderCalculator::new(config).unwrap();
        let selection = OrderSelection::new(
            CrustChoice::Thin,
            PizzaSize::Small,
            [Topping::Bacon, Topping::Onions],
        );

        let receipt = calculator.compute_receipt(&selection);

        assert_eq!(receipt.subtotal, dec!(11.00));
        assert_eq!(receipt.tax_amount, dec!(1.10));
        assert_eq!(receipt.total, dec!(12.10));
    }

    // =========================================================================
    // place_order / new tests
    // =========================================================================

    #[test]
    fn place_order_rejects_deep_dish_super_without_toppings() {
        let selection = OrderSelection::new(CrustChoice::DeepDish, PizzaSize::Super, []);

        assert_eq!(
            calculator().place_order(&selection),
            Err(OrderValidationError::NoToppingsSelected)
        );
    }

    #[test]
    fn place_order_renders_receipt_text() {
        let selection = OrderSelection::new(
            CrustChoice::Regular,
            PizzaSize::Medium,
            [Topping::Pepperoni, Topping::Mushrooms],
        );

        let text = calculator().place_order(&selection).unwrap().render();

        assert!(text.contains("Regular Medium ($12.00) $12.00\n"));
        assert!(text.contains("Pepperoni            $1.00\n"));
        assert!(text.contains("Mushrooms            $1.00\n"));
        assert!(text.contains("Sub-total:           $14.00\n"));
        assert!(text.contains("Tax:                 $0.98\n"));
        assert!(text.contains("Total:               $14.98\n"));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = PricingConfig {
            tax_rate: dec!(7),
            ..PricingConfig::default()
        };

        assert_eq!(
            OrderCalculator::new(config).unwrap_err(),
            PricingConfigError::InvalidTaxRate(dec!(7))
        );
    }

    #[test]
    fn largest_accepted_prices_still_total() {
        let config = PricingConfig {
            size_prices: SizePrices {
                super_size: MAX_ITEM_PRICE,
                ..SizePrices::default()
            },
            topping_price: MAX_ITEM_PRICE,
            tax_rate: Decimal::ONE,
        };
        let calculator = OrderCalculator::new(config).unwrap();
        let selection = OrderSelection::new(
            CrustChoice::Thin,
            PizzaSize::Super,
            Topping::all().iter().copied(),
        );

        let receipt = calculator.place_order(&selection).unwrap();

        assert_eq!(receipt.subtotal, dec!(7000000.00));
        assert_eq!(receipt.total, dec!(14000000.00));
    }
}

//! Receipt model and its fixed-width text layout.
//!
//! # Layout
//!
//! ```text
//! =========================================
//! Crust & Size         Price
//! Regular Medium ($12.00) $12.00
//!
//! Ingredients:
//! Pepperoni            $1.00
//! Mushrooms            $1.00
//!
//! -----------------------------------------
//! Sub-total:           $14.00
//! Tax:                 $0.98
//! =========================================
//! Total:               $14.98
//! =========================================
//! ```
//!
//! Every priced row puts its label in a left-aligned 20-column field, then a
//! space, then the amount. Labels longer than the field push the amount
//! right; they are never cut.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;

/// Width of the label column.
pub const LABEL_WIDTH: usize = 20;

const HEAVY_RULE: &str = "=========================================";
const LIGHT_RULE: &str = "-----------------------------------------";

/// One priced row on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub price: Decimal,
}

impl LineItem {
    pub fn new(
        label: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// A priced order. Amounts are unrounded; rounding happens in [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// The crust and size row, priced at the size's base price.
    pub base: LineItem,

    /// One row per selected topping, in menu order.
    pub toppings: Vec<LineItem>,

    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

impl Receipt {
    /// All priced rows, base first.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        std::iter::once(&self.base).chain(self.toppings.iter())
    }

    /// Renders the receipt as newline-terminated text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "{:<width$} {}", label, value, width = LABEL_WIDTH)
}

impl fmt::Display for Receipt {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{HEAVY_RULE}")?;
        write_row(f, "Crust & Size", "Price")?;
        write_row(f, &self.base.label, &format_currency(self.base.price))?;

        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for item in &self.toppings {
            write_row(f, &item.label, &format_currency(item.price))?;
        }

        writeln!(f)?;
        writeln!(f, "{LIGHT_RULE}")?;
        write_row(f, "Sub-total:", &format_currency(self.subtotal))?;
        write_row(f, "Tax:", &format_currency(self.tax_amount))?;
        writeln!(f, "{HEAVY_RULE}")?;
        write_row(f, "Total:", &format_currency(self.total))?;
        writeln!(f, "{HEAVY_RULE}")
    }
}

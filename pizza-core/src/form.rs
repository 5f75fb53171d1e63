//! In-memory state of one order form.
//!
//! The form owns the current [`OrderSelection`] and the receipt on display,
//! if any. It moves between two phases:
//!
//! - `Editing`: no receipt on display. Ordering with an invalid selection
//!   keeps the form here and returns the validation error for the caller to
//!   show.
//! - `ReceiptDisplayed`: the last successful order's receipt is shown. It
//!   stays on screen, unchanged, through later selection edits and failed
//!   orders, until the next successful order or a clear.
//!
//! Clearing from either phase returns to a fresh `Editing` form.

use tracing::{debug, info, warn};

use crate::{
    CrustChoice, OrderCalculator, OrderSelection, OrderValidationError, PizzaSize, Receipt,
    Topping,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    ReceiptDisplayed,
}

#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    calculator: OrderCalculator,
    selection: OrderSelection,
    receipt: Option<Receipt>,
}

impl OrderForm {
    /// Create a fresh form priced by `calculator`.
    pub fn new(calculator: OrderCalculator) -> Self {
        Self {
            calculator,
            selection: OrderSelection::default(),
            receipt: None,
        }
    }

    pub fn calculator(&self) -> &OrderCalculator {
        &self.calculator
    }

    pub fn selection(&self) -> &OrderSelection {
        &self.selection
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        if self.receipt.is_some() {
            FormPhase::ReceiptDisplayed
        } else {
            FormPhase::Editing
        }
    }

    /// Text for the receipt area. Empty while no receipt is on display.
    pub fn receipt_text(&self) -> String {
        self.receipt.as_ref().map(Receipt::render).unwrap_or_default()
    }

    pub fn select_crust(
        &mut self,
        crust: CrustChoice,
    ) {
        debug!(%crust, "crust selected");
        self.selection.crust = crust;
    }

    pub fn select_size(
        &mut self,
        size: PizzaSize,
    ) {
        debug!(%size, "size selected");
        self.selection.size = size;
    }

    /// Flips a topping checkbox and returns whether it is now ticked.
    pub fn toggle_topping(
        &mut self,
        topping: Topping,
    ) -> bool {
        let selected = self.selection.toggle_topping(topping);
        debug!(%topping, selected, "topping toggled");
        selected
    }

    pub fn set_topping(
        &mut self,
        topping: Topping,
        selected: bool,
    ) {
        debug!(%topping, selected, "topping set");
        self.selection.set_topping(topping, selected);
    }

    /// Validates the current selection and, if it passes, replaces the
    /// displayed receipt with a freshly priced one.
    ///
    /// On failure the displayed receipt, if any, is left as it was.
    pub fn order(&mut self) -> Result<&Receipt, OrderValidationError> {
        match self.calculator.place_order(&self.selection) {
            Ok(receipt) => {
                info!(total = %receipt.total, "receipt generated");
                Ok(self.receipt.insert(receipt))
            }
            Err(error) => {
                warn!(%error, "order rejected");
                Err(error)
            }
        }
    }

    /// Resets the selection and empties the receipt area.
    pub fn clear(&mut self) {
        debug!("form cleared");
        self.selection.clear();
        self.receipt = None;
    }
}

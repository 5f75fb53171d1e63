use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CrustChoice, PizzaSize, Topping};

/// Snapshot of what is currently picked on the form.
///
/// The default value is the state of a fresh form: no crust, the first size,
/// and no toppings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelection {
    pub crust: CrustChoice,
    pub size: PizzaSize,
    pub toppings: BTreeSet<Topping>,
}

impl OrderSelection {
    pub fn new(
        crust: CrustChoice,
        size: PizzaSize,
        toppings: impl IntoIterator<Item = Topping>,
    ) -> Self {
        Self {
            crust,
            size,
            toppings: toppings.into_iter().collect(),
        }
    }

    /// Flips a topping on or off and returns whether it is now selected.
    pub fn toggle_topping(
        &mut self,
        topping: Topping,
    ) -> bool {
        if self.toppings.remove(&topping) {
            false
        } else {
            self.toppings.insert(topping);
            true
        }
    }

    pub fn set_topping(
        &mut self,
        topping: Topping,
        selected: bool,
    ) {
        if selected {
            self.toppings.insert(topping);
        } else {
            self.toppings.remove(&topping);
        }
    }

    pub fn is_topping_selected(
        &self,
        topping: Topping,
    ) -> bool {
        self.toppings.contains(&topping)
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Resets to the fresh-form state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

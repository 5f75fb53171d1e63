mod crust;
mod order_selection;
mod size;
mod topping;

pub use crust::CrustChoice;
pub use order_selection::OrderSelection;
pub use size::{PizzaSize, SizeOption};
pub use topping::{Topping, ToppingOption};

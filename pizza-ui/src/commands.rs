//! The three form buttons and what they do.
//!
//! A front end only has to implement [`Presenter`] and call [`dispatch`]
//! when a button is pressed. Selection edits go straight to the
//! [`OrderForm`].

use std::io;

use pizza_core::OrderForm;
use tracing::info;

/// Output side of the order form.
pub trait Presenter {
    /// Replaces the receipt area. An empty string clears it.
    fn show_receipt(
        &mut self,
        text: &str,
    ) -> io::Result<()>;

    /// Shows a message the user has to acknowledge before continuing.
    fn notify(
        &mut self,
        message: &str,
    ) -> io::Result<()>;

    /// Asks a yes/no question and returns `true` on yes.
    fn confirm(
        &mut self,
        title: &str,
        message: &str,
    ) -> io::Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Order,
    Clear,
    Quit,
}

/// Whether the host should keep running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler = fn(&mut OrderForm, &mut dyn Presenter) -> io::Result<Flow>;

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::Order, Action::Clear, Action::Quit]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Clear => "clear",
            Self::Quit => "quit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|action| action.name().eq_ignore_ascii_case(s.trim()))
    }

    fn handler(self) -> Handler {
        match self {
            Self::Order => order,
            Self::Clear => clear,
            Self::Quit => quit,
        }
    }
}

/// Runs the handler bound to `action`.
pub fn dispatch(
    action: Action,
    form: &mut OrderForm,
    presenter: &mut dyn Presenter,
) -> io::Result<Flow> {
    (action.handler())(form, presenter)
}

fn order(
    form: &mut OrderForm,
    presenter: &mut dyn Presenter,
) -> io::Result<Flow> {
    match form.order() {
        Ok(receipt) => presenter.show_receipt(&receipt.render())?,
        Err(error) => presenter.notify(&error.to_string())?,
    }
    Ok(Flow::Continue)
}

fn clear(
    form: &mut OrderForm,
    presenter: &mut dyn Presenter,
) -> io::Result<Flow> {
    form.clear();
    presenter.show_receipt("")?;
    Ok(Flow::Continue)
}

fn quit(
    _form: &mut OrderForm,
    presenter: &mut dyn Presenter,
) -> io::Result<Flow> {
    if presenter.confirm("Confirm Exit", "Are you sure you want to quit?")? {
        info!("quit confirmed");
        Ok(Flow::Exit)
    } else {
        Ok(Flow::Continue)
    }
}

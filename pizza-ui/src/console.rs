//! Line-oriented terminal front end for the order form.
//!
//! Each input line is one command:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `crust <thin\|regular\|deep-dish\|none>` | Pick the crust |
//! | `size <small\|medium\|large\|super\|1-4>` | Pick the size |
//! | `topping <name>` | Tick or untick a topping |
//! | `order` / `clear` / `quit` | Press the matching button |
//! | `show` | Print the current selection and receipt |
//! | `log <filter>` | Change the log filter |
//! | `help` | List the commands |
//!
//! Input that does not parse is reported and changes nothing.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use pizza_core::{CrustChoice, OrderForm, PizzaSize, Topping};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    commands::{Action, Flow, Presenter, dispatch},
    logging,
};

/// Error returned when an input line is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("unknown crust '{0}'")]
    UnknownCrust(String),

    #[error("unknown size '{0}'")]
    UnknownSize(String),

    #[error("unknown topping '{0}'")]
    UnknownTopping(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Crust(CrustChoice),
    Size(PizzaSize),
    Topping(Topping),
    Action(Action),
    Show,
    LogLevel(String),
    Help,
}

/// Sizes can be named or given by their 1-based dropdown position.
fn parse_size(arg: &str) -> Option<PizzaSize> {
    PizzaSize::parse(arg).or_else(|| {
        arg.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(PizzaSize::from_index)
    })
}

impl FromStr for ConsoleCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(CommandParseError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_ascii_lowercase();

        let require = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandParseError::MissingArgument(name))
            } else {
                Ok(rest)
            }
        };

        match word.as_str() {
            "crust" => {
                let arg = require("crust")?;
                CrustChoice::parse(arg)
                    .map(Self::Crust)
                    .ok_or_else(|| CommandParseError::UnknownCrust(arg.to_string()))
            }
            "size" => {
                let arg = require("size")?;
                parse_size(arg)
                    .map(Self::Size)
                    .ok_or_else(|| CommandParseError::UnknownSize(arg.to_string()))
            }
            "topping" => {
                let arg = require("topping")?;
                Topping::parse(arg)
                    .map(Self::Topping)
                    .ok_or_else(|| CommandParseError::UnknownTopping(arg.to_string()))
            }
            "log" => require("log").map(|arg| Self::LogLevel(arg.to_string())),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            other => Action::parse(other)
                .map(Self::Action)
                .ok_or_else(|| CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// A terminal session reading commands from `input` and writing to `output`.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user confirms quitting or the input ends.
    pub fn run(
        &mut self,
        form: &mut OrderForm,
    ) -> io::Result<()> {
        writeln!(self.output, "Pizza Order Form")?;
        self.write_help(form)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("input closed");
                return Ok(());
            };

            let command = match line.parse::<ConsoleCommand>() {
                Ok(command) => command,
                Err(CommandParseError::Empty) => continue,
                Err(error) => {
                    warn!(%error, "bad command");
                    writeln!(self.output, "{error}. Type 'help' for commands.")?;
                    continue;
                }
            };

            if self.apply(form, command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn apply(
        &mut self,
        form: &mut OrderForm,
        command: ConsoleCommand,
    ) -> io::Result<Flow> {
        match command {
            ConsoleCommand::Crust(crust) => form.select_crust(crust),
            ConsoleCommand::Size(size) => form.select_size(size),
            ConsoleCommand::Topping(topping) => {
                let state = if form.toggle_topping(topping) {
                    "added"
                } else {
                    "removed"
                };
                writeln!(self.output, "{topping} {state}")?;
            }
            ConsoleCommand::Action(action) => return dispatch(action, form, self),
            ConsoleCommand::Show => self.write_status(form)?,
            ConsoleCommand::LogLevel(filter) => {
                if let Err(error) = logging::set_log_level(&filter) {
                    writeln!(self.output, "{error}")?;
                }
            }
            ConsoleCommand::Help => self.write_help(form)?,
        }
        Ok(Flow::Continue)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_status(
        &mut self,
        form: &OrderForm,
    ) -> io::Result<()> {
        let selection = form.selection();
        let size = form.calculator().config().size_option(selection.size);
        let toppings = if selection.toppings.is_empty() {
            "(none)".to_string()
        } else {
            selection
                .toppings
                .iter()
                .map(Topping::label)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let crust = if selection.crust.is_selected() {
            selection.crust.label()
        } else {
            "(none)"
        };

        writeln!(self.output, "Crust:    {crust}")?;
        writeln!(self.output, "Size:     {}", size.display_label())?;
        writeln!(self.output, "Toppings: {toppings}")?;

        let receipt = form.receipt_text();
        if !receipt.is_empty() {
            write!(self.output, "{receipt}")?;
        }
        Ok(())
    }

    fn write_help(
        &mut self,
        form: &OrderForm,
    ) -> io::Result<()> {
        let config = form.calculator().config();
        let crusts: Vec<&str> = CrustChoice::all().iter().map(CrustChoice::as_str).collect();
        writeln!(self.output, "  crust <{}>", crusts.join("|"))?;

        writeln!(self.output, "  size <name|1-{}>", PizzaSize::all().len())?;
        for (position, option) in config.size_options().iter().enumerate() {
            writeln!(
                self.output,
                "      {}. {}",
                position + 1,
                option.display_label()
            )?;
        }

        let toppings: Vec<&str> = Topping::all().iter().map(Topping::label).collect();
        writeln!(
            self.output,
            "  topping <name>   toggles one of: {}",
            toppings.join(", ")
        )?;
        writeln!(self.output, "  order | clear | quit | show | log <filter> | help")
    }
}

impl<R: BufRead, W: Write> Presenter for ConsoleSession<R, W> {
    fn show_receipt(
        &mut self,
        text: &str,
    ) -> io::Result<()> {
        if text.is_empty() {
            writeln!(self.output, "(receipt cleared)")
        } else {
            write!(self.output, "{text}")
        }
    }

    fn notify(
        &mut self,
        message: &str,
    ) -> io::Result<()> {
        writeln!(self.output, "*** {message} ***")?;
        write!(self.output, "Press Enter to continue.")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)
    }

    fn confirm(
        &mut self,
        title: &str,
        message: &str,
    ) -> io::Result<bool> {
        write!(self.output, "{title}: {message} [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

//! Command-line parsing.

use std::fmt;
use std::path::PathBuf;

use descended_logic::calculator_type::CalculatorType;
use descended_logic::export::ExportFormat;

pub const USAGE: &str = "\
Usage: descended-calc [--store PATH] [--config PATH] [--type TYPE] <command>

Commands:
  show                         counters and results of the active calculator
  tiers                        counter ids of the active calculator
  set <tier> <qty>             set a counter (clamped, leading integer parsed)
  add <tier> <delta>           add a signed delta to a counter
  clear <tier>                 zero one counter
  reset                        zero every counter
  type <boss|key|ancient-token>
                               switch calculator
  results [--sort name|quantity]
  sections                     results per selected counter
  export [--format text|markdown|csv|json]
  save-selection               print the selection snapshot JSON
  import <file|->              load a selection snapshot
  history [push|restore N|clear]
  summary
  theme [toggle]
  check [--verbose]            validate the built-in tables

The store path defaults to $DESCENDED_CALC_STORE, then ./descended-calc.store.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Name,
    Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    List,
    Push,
    Restore(usize),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Tiers,
    Set { tier: String, value: String },
    Add { tier: String, delta: i64 },
    Clear { tier: String },
    Reset,
    Type(CalculatorType),
    Results { sort: SortOrder },
    Sections,
    Export { format: ExportFormat },
    SaveSelection,
    Import { source: String },
    History(HistoryAction),
    Summary,
    Theme { toggle: bool },
    Check { verbose: bool },
    Help,
}

/// Parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub calculator: Option<CalculatorType>,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    MissingCommand,
    UnknownCommand(String),
    MissingValue(&'static str),
    BadValue { what: &'static str, value: String },
    Unexpected(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::MissingCommand => write!(f, "no command given"),
            ArgError::UnknownCommand(c) => write!(f, "unknown command '{}'", c),
            ArgError::MissingValue(what) => write!(f, "missing {}", what),
            ArgError::BadValue { what, value } => write!(f, "invalid {} '{}'", what, value),
            ArgError::Unexpected(arg) => write!(f, "unexpected argument '{}'", arg),
        }
    }
}

impl std::error::Error for ArgError {}

/// Parse arguments, program name excluded.
pub fn parse<I, S>(args: I) -> Result<Cli, ArgError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut store = None;
    let mut config = None;
    let mut calculator = None;
    let mut rest = Vec::new();

    let mut iter = args.into_iter().map(|a| -> String { a.into() });
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--store" => store = Some(PathBuf::from(value(&mut iter, "store path")?)),
            "--config" => config = Some(PathBuf::from(value(&mut iter, "config path")?)),
            "--type" => {
                let id = value(&mut iter, "calculator type")?;
                calculator = Some(calculator_type(&id)?);
            }
            "-h" | "--help" => rest.push("help".to_string()),
            _ => rest.push(arg),
        }
    }

    let command = parse_command(&rest)?;
    Ok(Cli {
        store,
        config,
        calculator,
        command,
    })
}

fn value(iter: &mut impl Iterator<Item = String>, what: &'static str) -> Result<String, ArgError> {
    iter.next().ok_or(ArgError::MissingValue(what))
}

fn calculator_type(id: &str) -> Result<CalculatorType, ArgError> {
    CalculatorType::from_id(id).ok_or_else(|| ArgError::BadValue {
        what: "calculator type",
        value: id.to_string(),
    })
}

fn parse_command(args: &[String]) -> Result<Command, ArgError> {
    let Some((name, params)) = args.split_first() else {
        return Err(ArgError::MissingCommand);
    };
    let arg = |i: usize, what: &'static str| {
        params
            .get(i)
            .cloned()
            .ok_or(ArgError::MissingValue(what))
    };

    let (command, used) = match name.as_str() {
        "show" => (Command::Show, 0),
        "tiers" => (Command::Tiers, 0),
        "set" => (
            Command::Set {
                tier: arg(0, "tier")?,
                value: arg(1, "quantity")?,
            },
            2,
        ),
        "add" => {
            let raw = arg(1, "delta")?;
            let delta = raw.parse().map_err(|_| ArgError::BadValue {
                what: "delta",
                value: raw.clone(),
            })?;
            (
                Command::Add {
                    tier: arg(0, "tier")?,
                    delta,
                },
                2,
            )
        }
        "clear" => (Command::Clear { tier: arg(0, "tier")? }, 1),
        "reset" => (Command::Reset, 0),
        "type" => (Command::Type(calculator_type(&arg(0, "calculator type")?)?), 1),
        "results" => match params.first().map(String::as_str) {
            Some("--sort") => {
                let raw = arg(1, "sort order")?;
                let sort = match raw.as_str() {
                    "name" => SortOrder::Name,
                    "quantity" => SortOrder::Quantity,
                    _ => {
                        return Err(ArgError::BadValue {
                            what: "sort order",
                            value: raw,
                        })
                    }
                };
                (Command::Results { sort }, 2)
            }
            _ => (
                Command::Results {
                    sort: SortOrder::Name,
                },
                0,
            ),
        },
        "sections" => (Command::Sections, 0),
        "export" => match params.first().map(String::as_str) {
            Some("--format") => {
                let raw = arg(1, "export format")?;
                let format = ExportFormat::from_id(&raw).ok_or_else(|| ArgError::BadValue {
                    what: "export format",
                    value: raw.clone(),
                })?;
                (Command::Export { format }, 2)
            }
            _ => (
                Command::Export {
                    format: ExportFormat::default(),
                },
                0,
            ),
        },
        "save-selection" => (Command::SaveSelection, 0),
        "import" => (Command::Import { source: arg(0, "file")? }, 1),
        "history" => match params.first().map(String::as_str) {
            None => (Command::History(HistoryAction::List), 0),
            Some("push") => (Command::History(HistoryAction::Push), 1),
            Some("clear") => (Command::History(HistoryAction::Clear), 1),
            Some("restore") => {
                let raw = arg(1, "history index")?;
                let index = raw.parse().map_err(|_| ArgError::BadValue {
                    what: "history index",
                    value: raw.clone(),
                })?;
                (Command::History(HistoryAction::Restore(index)), 2)
            }
            Some(other) => return Err(ArgError::Unexpected(other.to_string())),
        },
        "summary" => (Command::Summary, 0),
        "theme" => match params.first().map(String::as_str) {
            Some("toggle") => (Command::Theme { toggle: true }, 1),
            _ => (Command::Theme { toggle: false }, 0),
        },
        "check" => match params.first().map(String::as_str) {
            Some("--verbose") => (Command::Check { verbose: true }, 1),
            _ => (Command::Check { verbose: false }, 0),
        },
        "help" => (Command::Help, 0),
        other => return Err(ArgError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = params.get(used) {
        return Err(ArgError::Unexpected(extra.clone()));
    }
    Ok(command)
}

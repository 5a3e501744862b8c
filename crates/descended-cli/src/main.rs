//! Descended Calculator command line
//!
//! Resource calculator for ARK: Primal Descended boss summons, warfare keys
//! and ancient token clusters. State lives in a single store file between
//! runs.
//!
//! Usage:
//!   descended-calc set T4_Abyssal 2
//!   descended-calc results --sort quantity
//!   descended-calc --type key export --format markdown
//!   descended-calc check --verbose

mod args;
mod check;
mod render;

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use args::{Cli, Command, HistoryAction, SortOrder};
use descended_core::engine::{Calculator, Level};
use descended_core::store::{FileStore, KeyValueStore, MemoryStore};
use descended_logic::config::{validate_config, AppConfig, ConfigError};

const DEFAULT_STORE: &str = "descended-calc.store";
const STORE_ENV: &str = "DESCENDED_CALC_STORE";

fn main() {
    // Quiet by default; RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let cli = match args::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, args::USAGE);
            std::process::exit(2);
        }
    };

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Errors that stop the program before or outside the engine.
#[derive(Debug)]
enum AppError {
    Io(io::Error),
    Toml(toml::de::Error),
    Config(Vec<ConfigError>),
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Toml(e)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Toml(e) => write!(f, "Config parse error: {}", e),
            AppError::Config(errors) => {
                let list: Vec<_> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Invalid config: {}", list.join("; "))
            }
        }
    }
}

impl std::error::Error for AppError {}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Defaults, overlaid with a TOML file when one is given.
fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config: AppConfig = toml::from_str(&text)?;
            log::info!("loaded config from {}", path.display());
            config
        }
        None => AppConfig::default(),
    };
    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(AppError::Config(errors));
    }
    Ok(config)
}

fn store_path(cli: &Cli) -> PathBuf {
    cli.store
        .clone()
        .or_else(|| std::env::var_os(STORE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE))
}

/// The store file, or defaults when it cannot be used. Never fatal.
fn open_store(path: &Path) -> Box<dyn KeyValueStore> {
    match FileStore::open_or_recover(path) {
        Ok((store, None)) => Box::new(store),
        Ok((store, Some(backup))) => {
            eprintln!(
                "[warning] Saved data unreadable, moved to {}; starting from defaults",
                backup.display()
            );
            Box::new(store)
        }
        Err(e) => {
            log::warn!("cannot use store {}: {}", path.display(), e);
            eprintln!("[warning] {}; changes will not be saved", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn read_source(source: &str) -> Result<String, AppError> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Run one command. `Ok(false)` means the command itself failed.
fn run(cli: Cli) -> Result<bool, AppError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Help => {
            print!("{}", args::USAGE);
            return Ok(true);
        }
        Command::Check { verbose } => return Ok(check::run(&config, verbose)),
        _ => {}
    }

    let now = now_ms();
    let path = store_path(&cli);
    let mut calc = Calculator::open(config, open_store(&path), now);
    if let Some(calculator) = cli.calculator {
        calc.set_calculator_type(calculator, now);
    }

    let ok = execute(&mut calc, cli.command, now)?;

    calc.flush(now);
    for n in calc.drain_notifications() {
        match n.level {
            Level::Info => log::info!("{}", n.message),
            _ => eprintln!("{}", render::notification(&n)),
        }
    }
    Ok(ok)
}

fn execute(calc: &mut Calculator, command: Command, now: u64) -> Result<bool, AppError> {
    let calculator = calc.calculator_type();
    match command {
        Command::Show => {
            print!("{}", render::counters(calc.selection()));
            println!("\nResults:");
            print!("{}", render::results(calculator, &calc.calculate_sorted()));
        }
        Command::Tiers => print!("{}", render::tier_ids(calc.selection())),
        Command::Set { tier, value } => {
            return Ok(report(&tier, calc.set_tier(&tier, value.as_str(), now)));
        }
        Command::Add { tier, delta } => {
            return Ok(report(&tier, calc.change_tier(&tier, delta, now)));
        }
        Command::Clear { tier } => {
            return Ok(report(&tier, calc.clear_tier(&tier, now)));
        }
        Command::Reset => {
            calc.reset(now);
            println!("All counters reset.");
        }
        Command::Type(t) => {
            calc.set_calculator_type(t, now);
            println!("{} {}", t.icon(), t.label());
        }
        Command::Results { sort } => {
            let results = match sort {
                SortOrder::Name => calc.calculate_sorted(),
                SortOrder::Quantity => calc.calculate_by_quantity(),
            };
            print!("{}", render::results(calculator, &results));
        }
        Command::Sections => print!("{}", render::sections(calculator, &calc.sections())),
        Command::Export { format } => print_block(&calc.export_results(format)),
        Command::SaveSelection => print_block(&calc.export(now)),
        Command::Import { source } => {
            let json = read_source(&source)?;
            match calc.import(&json, now) {
                Ok(applied) => println!("{} counters imported.", applied),
                Err(_) => return Ok(false),
            }
        }
        Command::History(action) => match action {
            HistoryAction::List => print!("{}", render::history(calc.history())),
            HistoryAction::Push => {
                calc.add_to_history(now);
                println!("Saved to history ({} entries).", calc.history().len());
            }
            HistoryAction::Restore(index) => {
                if !calc.restore_from_history(index, now) {
                    eprintln!("No history entry {} for the {} calculator.", index, calculator);
                    return Ok(false);
                }
                print!("{}", render::counters(calc.selection()));
            }
            HistoryAction::Clear => {
                calc.clear_history(now);
                println!("History cleared.");
            }
        },
        Command::Summary => print!("{}", render::summary(&calc.summary())),
        Command::Theme { toggle } => {
            let theme = if toggle {
                calc.toggle_theme(now)
            } else {
                calc.theme()
            };
            println!("{}", theme.id());
        }
        Command::Help | Command::Check { .. } => {}
    }
    Ok(true)
}

fn report(tier: &str, result: Result<u32, descended_logic::selection::SelectionError>) -> bool {
    match result {
        Ok(value) => {
            println!("{} = {}", tier, value);
            true
        }
        Err(_) => false,
    }
}

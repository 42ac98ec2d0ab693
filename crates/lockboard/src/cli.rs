//! Command line interface
//!
//! Thin demonstration front end over [`AppContext`]. Every command loads the
//! layered configuration, installs logging and prints a one-line result.

use crate::demo::{self, ThrottleOutcome};
use clap::{Args, Parser, Subcommand};
use lockboard_application::RetryPolicy;
use lockboard_domain::error::Result;
use lockboard_infrastructure::bootstrap::{AppContext, init_app};
use lockboard_infrastructure::config::{AppConfig, ConfigLoader, StoreProvider};
use lockboard_infrastructure::health::check_store;
use lockboard_infrastructure::logging::init_logging;
use std::path::PathBuf;
use std::time::Duration;

/// Command line interface for lockboard
#[derive(Parser, Debug)]
#[command(name = "lockboard")]
#[command(about = "Distributed locks, leaderboards and counters over Redis")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the in-process store instead of the configured one
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Acquire, retry or release a named lock
    #[command(subcommand)]
    Lock(LockCommand),

    /// Update or list a leaderboard
    #[command(subcommand)]
    Rank(RankCommand),

    /// Integer counters
    #[command(subcommand)]
    Counter(CounterCommand),

    /// Cached string values
    #[command(subcommand)]
    Kv(KvCommand),

    /// Run a demonstration scenario
    #[command(subcommand)]
    Demo(DemoCommand),

    /// Check that the store answers
    Ping,

    /// Write the effective configuration to a TOML file
    SaveConfig {
        /// Destination file
        path: PathBuf,
    },
}

/// Lock time to live override
#[derive(Args, Debug, Clone, Copy)]
pub struct TtlArg {
    /// Lock TTL in milliseconds (defaults to `lock.default_ttl_ms`)
    #[arg(long)]
    pub ttl_ms: Option<u64>,
}

/// Lock commands
#[derive(Subcommand, Debug)]
pub enum LockCommand {
    /// Try once to take the lock
    Acquire {
        name: String,
        #[command(flatten)]
        ttl: TtlArg,
    },
    /// Retry the lock with backoff
    Retry {
        name: String,
        #[command(flatten)]
        ttl: TtlArg,
        /// Maximum attempts (defaults to `lock.retry_attempts`)
        #[arg(long)]
        attempts: Option<u32>,
        /// Pause between attempts in milliseconds (defaults to `lock.retry_backoff_ms`)
        #[arg(long)]
        backoff_ms: Option<u64>,
    },
    /// Delete the lock whoever holds it
    Release { name: String },
}

/// Leaderboard commands
#[derive(Subcommand, Debug)]
pub enum RankCommand {
    /// Add to a member's score
    Incr {
        collection: String,
        member: String,
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// List members, highest score first
    Top { collection: String },
}

/// Counter commands
#[derive(Subcommand, Debug)]
pub enum CounterCommand {
    /// Overwrite a counter
    Set {
        key: String,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Add to a counter
    Incr {
        key: String,
        /// Amount to add
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        by: i64,
    },
    /// Subtract one from a counter
    Decr { key: String },
    /// Show the remaining lifetime of a key
    Ttl { key: String },
}

/// Cache commands
#[derive(Subcommand, Debug)]
pub enum KvCommand {
    /// Store a value, optionally with a lifetime
    Set {
        key: String,
        value: String,
        /// Lifetime in milliseconds; permanent when omitted
        #[arg(long)]
        ttl_ms: Option<u64>,
    },
    /// Read a value
    Get { key: String },
    /// Remove a value
    Del { key: String },
    /// Show the remaining lifetime of a value
    Ttl { key: String },
}

/// Demonstration scenarios
#[derive(Subcommand, Debug)]
pub enum DemoCommand {
    /// A permanent value next to an expiring one, read once per interval
    Cache {
        #[arg(long, default_value_t = 30)]
        ttl_secs: u64,
        #[arg(long, default_value_t = 20)]
        rounds: usize,
        #[arg(long, default_value_t = 1_000)]
        interval_ms: u64,
    },
    /// Buyers race to take limited stock
    FlashSale {
        #[arg(long, default_value = "iPhone X")]
        key: String,
        #[arg(long, default_value_t = 9)]
        stock: i64,
        #[arg(long, default_value_t = 500)]
        buyers: usize,
    },
    /// Workers contend for one lock with retries
    LockRace {
        #[arg(long, default_value = "iPhone XX")]
        name: String,
        #[arg(long, default_value_t = 3)]
        contenders: usize,
        #[arg(long, default_value_t = 6)]
        attempts: u32,
        #[arg(long, default_value_t = 5_000)]
        ttl_ms: u64,
        #[arg(long, default_value_t = 1_000)]
        backoff_ms: u64,
    },
    /// One verification code per window per phone number
    Throttle {
        #[arg(long, default_value = "15915839500")]
        phone: String,
        #[arg(long, default_value_t = 60)]
        window_secs: u64,
    },
}

impl Cli {
    /// Load configuration from `--config` and the environment
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;
        if self.memory {
            config.store.provider = StoreProvider::Memory;
        }
        Ok(config)
    }
}

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    init_logging(&config.logging)?;
    let context = init_app(config)?;
    execute(&context, cli.command)
}

/// Execute one command against `context`
pub fn execute(context: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Lock(command) => execute_lock(context, command),
        Command::Rank(command) => execute_rank(context, command),
        Command::Counter(command) => execute_counter(context, command),
        Command::Kv(command) => execute_kv(context, command),
        Command::Demo(command) => execute_demo(context, command),
        Command::Ping => {
            let check = check_store(context.store().as_ref());
            match check.error {
                None => println!("{}: up ({} ms)", check.name, check.response_time_ms),
                Some(error) => println!("{}: down ({error})", check.name),
            }
            Ok(())
        }
        Command::SaveConfig { path } => {
            ConfigLoader::new().save_to_file(&context.config, &path)?;
            println!("configuration written to {}", path.display());
            Ok(())
        }
    }
}

fn lock_ttl(context: &AppContext, ttl: TtlArg) -> Duration {
    ttl.ttl_ms
        .map_or_else(|| context.config.lock.default_ttl(), Duration::from_millis)
}

fn execute_lock(context: &AppContext, command: LockCommand) -> Result<()> {
    let locks = context.locks();
    match command {
        LockCommand::Acquire { name, ttl } => {
            let acquired = locks.acquire(&name, lock_ttl(context, ttl))?;
            println!("{name}: {}", if acquired { "acquired" } else { "busy" });
        }
        LockCommand::Retry {
            name,
            ttl,
            attempts,
            backoff_ms,
        } => {
            let defaults = context.config.lock.retry_policy();
            let policy = RetryPolicy::new(
                attempts.unwrap_or(defaults.max_attempts),
                backoff_ms.map_or(defaults.backoff, Duration::from_millis),
            );
            let acquired = locks
                .try_lock_with_retry(&name, lock_ttl(context, ttl), policy)?
                .is_some();
            println!("{name}: {}", if acquired { "acquired" } else { "gave up" });
        }
        LockCommand::Release { name } => {
            locks.release(&name)?;
            println!("{name}: released");
        }
    }
    Ok(())
}

fn execute_rank(context: &AppContext, command: RankCommand) -> Result<()> {
    let leaderboard = context.leaderboard();
    match command {
        RankCommand::Incr {
            collection,
            member,
            delta,
        } => {
            let score = leaderboard.increment_score(&collection, &member, delta)?;
            println!("{member}: {score}");
        }
        RankCommand::Top { collection } => {
            for (rank, entry) in leaderboard.top_entries(&collection)?.iter().enumerate() {
                println!("{:>3}. {} {}", rank + 1, entry.member, entry.score);
            }
        }
    }
    Ok(())
}

fn execute_counter(context: &AppContext, command: CounterCommand) -> Result<()> {
    let counters = context.counters();
    match command {
        CounterCommand::Set { key, value } => {
            counters.set(&key, value)?;
            println!("{key}: {value}");
        }
        CounterCommand::Incr { key, by } => {
            println!("{key}: {}", counters.increment_by(&key, by)?);
        }
        CounterCommand::Decr { key } => {
            println!("{key}: {}", counters.decrement(&key)?);
        }
        CounterCommand::Ttl { key } => {
            println!("{key}: {}", describe_ttl(counters.time_to_live(&key)?));
        }
    }
    Ok(())
}

fn execute_kv(context: &AppContext, command: KvCommand) -> Result<()> {
    let cache = context.cache();
    match command {
        KvCommand::Set { key, value, ttl_ms } => {
            cache.put(&key, &value, ttl_ms.map(Duration::from_millis))?;
            println!("{key}: stored");
        }
        KvCommand::Get { key } => match cache.get(&key)? {
            Some(value) => println!("{key}: {value}"),
            None => println!("{key}: (absent)"),
        },
        KvCommand::Del { key } => {
            let removed = cache.remove(&key)?;
            println!("{key}: {}", if removed { "removed" } else { "absent" });
        }
        KvCommand::Ttl { key } => println!("{key}: {}", describe_ttl(cache.time_to_live(&key)?)),
    }
    Ok(())
}

fn describe_ttl(ttl: Option<Duration>) -> String {
    ttl.map_or_else(|| "no expiry".to_string(), |ttl| format!("{} ms", ttl.as_millis()))
}

fn execute_demo(context: &AppContext, command: DemoCommand) -> Result<()> {
    match command {
        DemoCommand::Cache {
            ttl_secs,
            rounds,
            interval_ms,
        } => {
            let observations = demo::cache_expiry(
                context.cache(),
                Duration::from_secs(ttl_secs),
                rounds,
                Duration::from_millis(interval_ms),
            )?;
            for observation in observations {
                for (key, reading) in [
                    (demo::PERMANENT_KEY, &observation.permanent),
                    (demo::EXPIRING_KEY, &observation.expiring),
                ] {
                    println!(
                        "{key} = {} ({})",
                        reading.value.as_deref().unwrap_or("(absent)"),
                        describe_ttl(reading.time_to_live)
                    );
                }
            }
        }
        DemoCommand::FlashSale { key, stock, buyers } => {
            let report = demo::flash_sale(context.counters(), &key, stock, buyers)?;
            println!(
                "{key}: {} sold, {} buyers turned away",
                report.sold, report.sold_out
            );
        }
        DemoCommand::LockRace {
            name,
            contenders,
            attempts,
            ttl_ms,
            backoff_ms,
        } => {
            let outcomes = demo::lock_race(
                context.locks(),
                &name,
                contenders,
                Duration::from_millis(ttl_ms),
                RetryPolicy::new(attempts, Duration::from_millis(backoff_ms)),
            )?;
            for outcome in outcomes {
                let verdict = if outcome.acquired {
                    "took the lock"
                } else {
                    "gave up"
                };
                println!("contender-{}: {verdict}", outcome.contender);
            }
        }
        DemoCommand::Throttle { phone, window_secs } => {
            match demo::throttle(
                context.counters(),
                &phone,
                Duration::from_secs(window_secs),
            )? {
                ThrottleOutcome::Sent => println!("{phone}: verification code sent"),
                ThrottleOutcome::Throttled { retry_after } => {
                    let wait = retry_after.map_or(0, |ttl| ttl.as_secs());
                    println!("{phone}: one code per window, retry in {wait} s");
                }
            }
        }
    }
    Ok(())
}

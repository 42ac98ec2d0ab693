//! CLI Tests

use clap::Parser;
use lockboard::cli::{
    Cli, Command, CounterCommand, DemoCommand, KvCommand, LockCommand, RankCommand, execute,
};
use lockboard::infrastructure::config::ConfigLoader;
use lockboard::infrastructure::{AppConfig, AppContext};
use lockboard::providers::store::InMemoryStore;
use std::sync::Arc;

fn memory_context() -> AppContext {
    AppContext::with_store(AppConfig::default(), Arc::new(InMemoryStore::new()))
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("lockboard").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_lock_acquire_with_ttl() {
    let cli = parse(&["lock", "acquire", "resource-A", "--ttl-ms", "5000"]);
    match cli.command {
        Command::Lock(LockCommand::Acquire { name, ttl }) => {
            assert_eq!(name, "resource-A");
            assert_eq!(ttl.ttl_ms, Some(5000));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = parse(&["ping", "--memory", "--config", "/tmp/lockboard.toml"]);
    assert!(cli.memory);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/lockboard.toml"))
    );
    assert!(matches!(cli.command, Command::Ping));
}

#[test]
fn test_parse_negative_rank_delta() {
    let cli = parse(&["rank", "incr", "board", "u1", "-2.5"]);
    match cli.command {
        Command::Rank(RankCommand::Incr { delta, .. }) => assert_eq!(delta, -2.5),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_demo_defaults() {
    let cli = parse(&["demo", "flash-sale"]);
    match cli.command {
        Command::Demo(DemoCommand::FlashSale { key, stock, buyers }) => {
            assert_eq!(key, "iPhone X");
            assert_eq!(stock, 9);
            assert_eq!(buyers, 500);
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = parse(&["demo", "lock-race"]);
    match cli.command {
        Command::Demo(DemoCommand::LockRace {
            contenders,
            attempts,
            ttl_ms,
            backoff_ms,
            ..
        }) => {
            assert_eq!((contenders, attempts), (3, 6));
            assert_eq!((ttl_ms, backoff_ms), (5_000, 1_000));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["lockboard", "lock", "steal", "x"]).is_err());
    assert!(Cli::try_parse_from(["lockboard"]).is_err());
}

#[test]
fn test_execute_commands_against_memory_store() {
    let context = memory_context();

    execute(
        &context,
        parse(&["lock", "acquire", "resource-A"]).command,
    )
    .unwrap();
    assert!(context.store().get("resource-A").unwrap().is_some());

    execute(&context, parse(&["lock", "release", "resource-A"]).command).unwrap();
    assert!(context.store().get("resource-A").unwrap().is_none());

    execute(&context, parse(&["rank", "incr", "board", "u1", "10"]).command).unwrap();
    execute(&context, parse(&["rank", "top", "board"]).command).unwrap();

    execute(
        &context,
        Command::Counter(CounterCommand::Set {
            key: "stock".to_string(),
            value: 3,
        }),
    )
    .unwrap();
    execute(&context, parse(&["counter", "decr", "stock"]).command).unwrap();
    assert_eq!(context.counters().get("stock").unwrap(), Some(2));

    execute(&context, parse(&["ping"]).command).unwrap();
}

#[test]
fn test_execute_rejects_empty_lock_name() {
    let context = memory_context();
    let result = execute(&context, parse(&["lock", "acquire", ""]).command);
    assert!(matches!(
        result,
        Err(lockboard::Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_parse_kv_set_with_ttl() {
    let cli = parse(&["kv", "set", "effective_key", "30 seconds", "--ttl-ms", "30000"]);
    match cli.command {
        Command::Kv(KvCommand::Set { key, value, ttl_ms }) => {
            assert_eq!(key, "effective_key");
            assert_eq!(value, "30 seconds");
            assert_eq!(ttl_ms, Some(30_000));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_execute_kv_commands() {
    let context = memory_context();

    execute(&context, parse(&["kv", "set", "forever_key", "forever_value"]).command).unwrap();
    execute(
        &context,
        parse(&["kv", "set", "effective_key", "v", "--ttl-ms", "30000"]).command,
    )
    .unwrap();
    execute(&context, parse(&["kv", "get", "forever_key"]).command).unwrap();
    execute(&context, parse(&["kv", "ttl", "effective_key"]).command).unwrap();

    assert_eq!(context.cache().time_to_live("forever_key").unwrap(), None);
    assert!(context.cache().time_to_live("effective_key").unwrap().is_some());

    execute(&context, parse(&["kv", "del", "forever_key"]).command).unwrap();
    assert_eq!(context.cache().get("forever_key").unwrap(), None);

    let zero_ttl = execute(
        &context,
        parse(&["kv", "set", "k", "v", "--ttl-ms", "0"]).command,
    );
    assert!(matches!(zero_ttl, Err(lockboard::Error::InvalidArgument { .. })));
}

#[test]
fn test_execute_cache_demo() {
    let context = memory_context();
    let command = parse(&[
        "demo",
        "cache",
        "--ttl-secs",
        "30",
        "--rounds",
        "2",
        "--interval-ms",
        "1",
    ])
    .command;
    assert!(matches!(command, Command::Demo(DemoCommand::Cache { rounds: 2, .. })));

    execute(&context, command).unwrap();
    assert!(context.cache().get("effective_key").unwrap().is_some());
}

#[test]
fn test_save_config_writes_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lockboard.toml");

    let mut config = AppConfig::default();
    config.lock.default_ttl_ms = 7_500;
    let context = AppContext::with_store(config, Arc::new(InMemoryStore::new()));

    let command = parse(&["save-config", path.to_str().unwrap()]).command;
    execute(&context, command).unwrap();

    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(loaded.lock.default_ttl_ms, 7_500);
}

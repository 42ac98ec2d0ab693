//! Demonstration scenarios
//!
//! Thread races over the shared services: buyers draining limited stock,
//! workers contending for one lock, and a per-number send throttle. The
//! threads live here, never inside the services themselves. A cache
//! walkthrough shows a permanent value next to an expiring one.

use lockboard_application::{Cache, Counters, LockManager, RetryPolicy};
use lockboard_domain::error::{Error, Result};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Result of a flash-sale race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSaleReport {
    /// Buyers whose decrement left a non-negative stock
    pub sold: u64,
    /// Buyers who found the stock exhausted
    pub sold_out: u64,
}

/// `buyers` threads each take one unit of `stock` stored under `key`
///
/// Never over-sells: exactly `min(stock, buyers)` buyers succeed.
pub fn flash_sale(
    counters: &Counters,
    key: &str,
    stock: i64,
    buyers: usize,
) -> Result<FlashSaleReport> {
    counters.set(key, stock)?;

    let outcomes: Vec<Result<i64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..buyers)
            .map(|buyer| {
                thread::Builder::new()
                    .name(format!("buyer-{buyer}"))
                    .spawn_scoped(scope, move || counters.decrement(key))
            })
            .collect();
        handles
            .into_iter()
            .map(|spawned| match spawned {
                Ok(handle) => handle.join().unwrap_or_else(|_| {
                    Err(Error::internal("buyer thread panicked"))
                }),
                Err(e) => Err(Error::io_with_source("Failed to spawn buyer thread", e)),
            })
            .collect()
    });

    let mut report = FlashSaleReport {
        sold: 0,
        sold_out: 0,
    };
    for remaining in outcomes {
        if remaining? >= 0 {
            report.sold += 1;
        } else {
            report.sold_out += 1;
        }
    }
    info!(key, stock, buyers, sold = report.sold, "Flash sale finished");
    Ok(report)
}

/// One contender in a lock race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRaceOutcome {
    /// Contender index
    pub contender: usize,
    /// Whether it took the lock within its attempts
    pub acquired: bool,
}

/// `contenders` threads retry the lock `name`; winners keep it until it expires
pub fn lock_race(
    locks: &LockManager,
    name: &str,
    contenders: usize,
    ttl: Duration,
    policy: RetryPolicy,
) -> Result<Vec<LockRaceOutcome>> {
    let results: Vec<Result<bool>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..contenders)
            .map(|contender| {
                scope.spawn(move || -> Result<bool> {
                    let acquired =
                        locks.retry_acquire(name, ttl, policy.max_attempts, policy.backoff)?;
                    debug!(lock = name, contender, acquired, "Contender finished");
                    Ok(acquired)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(Error::internal("lock contender panicked"))
                })
            })
            .collect()
    });

    results
        .into_iter()
        .enumerate()
        .map(|(contender, acquired)| {
            Ok(LockRaceOutcome {
                contender,
                acquired: acquired?,
            })
        })
        .collect()
}

/// Outcome of a throttled send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleOutcome {
    /// First request in the window; the code goes out
    Sent,
    /// A code was already sent in this window
    Throttled {
        /// Time until the window closes, if the store reports one
        retry_after: Option<Duration>,
    },
}

/// Allow one send per `window` for `key`
pub fn throttle(counters: &Counters, key: &str, window: Duration) -> Result<ThrottleOutcome> {
    let hits = counters.increment_with_expiry(key, window)?;
    if hits == 1 {
        return Ok(ThrottleOutcome::Sent);
    }
    Ok(ThrottleOutcome::Throttled {
        retry_after: counters.time_to_live(key)?,
    })
}

/// Key holding the permanent value in [`cache_expiry`]
pub const PERMANENT_KEY: &str = "forever_key";

/// Key holding the expiring value in [`cache_expiry`]
pub const EXPIRING_KEY: &str = "effective_key";

/// One cached value as seen at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedReading {
    /// Value, `None` once expired
    pub value: Option<String>,
    /// Remaining lifetime, `None` when permanent or gone
    pub time_to_live: Option<Duration>,
}

/// Both cached values read in the same round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheObservation {
    /// The value stored without a lifetime
    pub permanent: CachedReading,
    /// The value stored with `ttl`
    pub expiring: CachedReading,
}

/// Cache a permanent value and one living `ttl`, then read both `rounds`
/// times, `interval` apart
pub fn cache_expiry(
    cache: &Cache,
    ttl: Duration,
    rounds: usize,
    interval: Duration,
) -> Result<Vec<CacheObservation>> {
    cache.put(PERMANENT_KEY, "forever_value", None)?;
    cache.put(EXPIRING_KEY, &format!("{} ms", ttl.as_millis()), Some(ttl))?;

    let read = |key: &str| -> Result<CachedReading> {
        Ok(CachedReading {
            value: cache.get(key)?,
            time_to_live: cache.time_to_live(key)?,
        })
    };

    let mut observations = Vec::with_capacity(rounds);
    for round in 0..rounds {
        if round > 0 {
            thread::sleep(interval);
        }
        observations.push(CacheObservation {
            permanent: read(PERMANENT_KEY)?,
            expiring: read(EXPIRING_KEY)?,
        });
    }
    Ok(observations)
}

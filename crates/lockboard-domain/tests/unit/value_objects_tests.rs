//! Value Object Tests

use lockboard_domain::value_objects::{LeaderboardEntry, LockGuard, LockMode};

#[test]
fn test_lock_mode_default_is_atomic() {
    assert_eq!(LockMode::default(), LockMode::Atomic);
}

#[test]
fn test_lock_mode_parse_and_display() {
    assert_eq!("atomic".parse::<LockMode>().unwrap(), LockMode::Atomic);
    assert_eq!("LEGACY".parse::<LockMode>().unwrap(), LockMode::Legacy);
    assert!("fenced".parse::<LockMode>().is_err());
    assert_eq!(LockMode::Legacy.to_string(), "legacy");
}

#[test]
fn test_lock_mode_serde_lowercase() {
    let json = serde_json::to_string(&LockMode::Legacy).unwrap();
    assert_eq!(json, "\"legacy\"");
}

#[test]
fn test_leaderboard_entry_from_pair() {
    let entry = LeaderboardEntry::from(("u1".to_string(), 15.0));
    assert_eq!(entry, LeaderboardEntry::new("u1", 15.0));
}

#[test]
fn test_lock_guard_new() {
    let guard = LockGuard::new("resource-A", "token-1");
    assert_eq!(guard.key, "resource-A");
    assert_eq!(guard.token, "token-1");
}

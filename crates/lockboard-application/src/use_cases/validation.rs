//! Argument checks shared by the use cases

use lockboard_domain::error::{Error, Result};
use std::time::Duration;

#[inline]
pub(crate) fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be empty")));
    }
    Ok(())
}

#[inline]
pub(crate) fn require_positive_ttl(ttl: Duration) -> Result<()> {
    if ttl.is_zero() {
        return Err(Error::invalid_argument("ttl must be greater than zero"));
    }
    Ok(())
}

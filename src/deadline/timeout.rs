// ============================================================================
// Deadline Check
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Signals that an operation's deadline has already passed.
///
/// A domain signal rather than a defect: the caller is expected to cancel
/// or abort the operation. `remaining` is the non-positive time that was
/// left when the check ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineExpired {
    /// Time remaining at check, zero or negative
    pub remaining: Duration,
}

impl fmt::Display for DeadlineExpired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deadline exceeded by {} ms",
            -self.remaining.num_milliseconds()
        )
    }
}

impl std::error::Error for DeadlineExpired {}

/// Convert an optional deadline into the remaining duration.
///
/// `None` means no deadline is enforced and yields a zero duration, which
/// callers read as "wait indefinitely". Otherwise the remaining time is
/// `deadline - now`.
///
/// # Errors
/// Returns [`DeadlineExpired`] carrying the non-positive remainder when
/// the deadline has already passed.
pub fn check_deadline(deadline: Option<DateTime<Utc>>) -> Result<Duration, DeadlineExpired> {
    let Some(deadline) = deadline else {
        // No deadline
        return Ok(Duration::zero());
    };

    let remaining = deadline - Utc::now();
    if remaining <= Duration::zero() {
        return Err(DeadlineExpired { remaining });
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_deadline() {
        assert_eq!(check_deadline(None), Ok(Duration::zero()));
    }

    #[test]
    fn test_expired_deadline() {
        let expired = check_deadline(Some(Utc::now() - Duration::hours(1)))
            .expect_err("deadline one hour in the past must have expired");
        assert!(expired.remaining <= Duration::zero());
        assert!(expired.remaining <= -Duration::minutes(59));
    }

    #[test]
    fn test_future_deadline() {
        let remaining = check_deadline(Some(Utc::now() + Duration::hours(1)))
            .expect("deadline one hour ahead must not have expired");
        assert!(remaining > Duration::minutes(59));
        assert!(remaining <= Duration::hours(1));
    }

    #[test]
    fn test_expired_display() {
        let expired = DeadlineExpired {
            remaining: Duration::milliseconds(-1500),
        };
        assert_eq!(expired.to_string(), "deadline exceeded by 1500 ms");
    }
}

// ============================================================================
// Floater Library
// Fixed-precision float comparison and deadline utilities for payments
// ============================================================================

//! # Floater
//!
//! Small utilities shared by a payment-processing system: a
//! fixed-decimal-precision float helper and a deadline-to-timeout
//! converter.
//!
//! ## Features
//!
//! - **Fixed-precision comparison**: equality and ordering of `f64`
//!   amounts defined by their rounded decimal rendering, never by raw
//!   binary equality
//! - **Format/parse/round** at a configurable precision (0-14 decimal
//!   places), all through one string-rendering primitive so every
//!   operation agrees at the rounding boundaries
//! - **Deadline checking** for order processing, with expired deadlines
//!   surfaced as a typed error carrying the non-positive remainder
//! - **Pure and shareable**: configuration is immutable after
//!   construction, every operation is a pure function, instances are
//!   `Send + Sync`
//! - **Optional serde support** (`serde` feature): a [`Floater`]
//!   serializes as its decimal-places setting and deserializes through
//!   the validating constructor
//!
//! ## Example
//!
//! ```rust
//! use floater::prelude::*;
//!
//! let cents = Floater::new(2).unwrap();
//!
//! // 1.001 and 1.004 both land on "1.00" once rounded
//! assert!(cents.equal(1.001, 1.004));
//! assert!(!cents.greater(1.004, 1.001));
//!
//! let amount = cents.parse_str("19.999", FloatWidth::Double).unwrap();
//! assert_eq!(cents.to_fixed_string(amount), "20.00");
//!
//! // No deadline set: nothing to enforce
//! assert!(check_deadline(None).is_ok());
//! ```
//!
//! [`Floater`]: numeric::Floater

pub mod deadline;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::deadline::{check_deadline, DeadlineExpired};
    pub use crate::numeric::{
        FloatWidth, Floater, NumericError, NumericResult, MAX_DECIMAL_PLACES,
    };
}

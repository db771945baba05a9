// ============================================================================
// Deadline Module
// Deadline-to-remaining-timeout conversion for order processing
// ============================================================================

mod timeout;

pub use timeout::{check_deadline, DeadlineExpired};

// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{Duration, Utc};
use floater::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Floater Example ===\n");

    // Two decimal places, the usual setting for cent-denominated ledgers
    let cents = Floater::new(2).expect("2 decimal places is in range");
    println!(
        "Created floater: {} decimal places, accuracy {}\n",
        cents.decimal_places(),
        cents.accuracy()
    );

    // Formatting rounds to the configured precision
    println!("=== Formatting ===");
    for value in [1.005, 0.005, 19.999, -0.004] {
        println!("  {:>8} -> {}", value, cents.fixed(value));
    }

    // Comparison works on the rounded rendering, not the raw bits
    println!("\n=== Comparison ===");
    let a = 0.1 + 0.2;
    let b = 0.3;
    println!("  raw:     {} == {} is {}", a, b, a == b);
    println!("  rounded: equal({}, {}) is {}", a, b, cents.equal(a, b));
    println!("  greater(1.01, 0.99) is {}", cents.greater(1.01, 0.99));
    println!("  is_zero(0.004) is {}", cents.is_zero(0.004));

    // Parsing normalizes wire input to the same precision
    println!("\n=== Parsing ===");
    match cents.parse_str("100.004", FloatWidth::Double) {
        Ok(amount) => println!("  \"100.004\" -> {}", cents.fixed(amount)),
        Err(err) => println!("  parse failed: {}", err),
    }
    match cents.normalize_str("1e2", FloatWidth::Double) {
        Ok(normalized) => println!("  \"1e2\" -> \"{}\"", normalized),
        Err(err) => println!("  normalize failed: {}", err),
    }

    // Deadline checking for order processing
    println!("\n=== Deadlines ===");
    match check_deadline(Some(Utc::now() + Duration::minutes(30))) {
        Ok(remaining) => println!("  open order: {} s remaining", remaining.num_seconds()),
        Err(expired) => println!("  cancelled: {}", expired),
    }
    match check_deadline(Some(Utc::now() - Duration::minutes(30))) {
        Ok(remaining) => println!("  open order: {} s remaining", remaining.num_seconds()),
        Err(expired) => println!("  cancelled: {}", expired),
    }
    match check_deadline(None) {
        Ok(_) => println!("  no deadline set: nothing to enforce"),
        Err(expired) => println!("  cancelled: {}", expired),
    }
}

// ============================================================================
// Fixed-Precision Floater
// Format, parse, and compare f64 values at a fixed number of decimal places
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum supported number of decimal places.
///
/// Beyond 14 fractional digits a binary64 value can no longer reliably
/// carry the requested decimal precision.
pub const MAX_DECIMAL_PLACES: u8 = 14;

/// Fixed-precision float helper for monetary-style values.
///
/// A `Floater` holds a decimal-places setting (0..=14) fixed at
/// construction, plus constants derived from it: the `accuracy` (the
/// smallest positive increment at this precision, e.g. 0.01 for two
/// places) and the canonical zero rendering used by [`is_zero`].
///
/// Every operation is built on one primitive: render the value with
/// exactly `decimal_places` fraction digits, then work on that string.
/// In particular, two values are *equal* when their rounded difference
/// renders as zero — not when their raw binary values coincide.
///
/// Rounding is whatever the standard formatter applies to the binary64
/// value: correct rounding of its exact decimal expansion, ties-to-even
/// on exactly representable midpoints. A literal like `0.005` therefore
/// rounds according to its nearest binary64 neighbour, which may sit on
/// either side of the written midpoint. This inherited bias is an
/// accepted limitation, not something the type corrects for.
///
/// # Example
/// ```ignore
/// use floater::numeric::{FloatWidth, Floater};
///
/// let cents = Floater::new(2)?;
/// assert_eq!(cents.to_fixed_string(1.005), "1.00");
/// assert!(cents.equal(1.001, 1.004));
/// let amount = cents.parse_str("19.999", FloatWidth::Double)?; // 20.00
/// ```
///
/// [`is_zero`]: Floater::is_zero
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Floater {
    decimal_places: u8,
    accuracy: f64,
    zero_threshold: String,
}

// ============================================================================
// Float Width
// ============================================================================

/// Bit width applied when parsing float literals.
///
/// Parsing at [`Single`] goes through `f32` and widens the result, so the
/// returned `f64` carries no more precision than a binary32 value.
///
/// [`Single`]: FloatWidth::Single
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// binary32
    Single,
    /// binary64
    Double,
}

impl FloatWidth {
    /// Parse `text` as a float literal at this width.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if `text` is not a valid float literal.
    fn parse(self, text: &str) -> NumericResult<f64> {
        match self {
            FloatWidth::Single => text
                .parse::<f32>()
                .map(f64::from)
                .map_err(|_| NumericError::InvalidNumber),
            FloatWidth::Double => text
                .parse::<f64>()
                .map_err(|_| NumericError::InvalidNumber),
        }
    }
}

impl Floater {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a helper that rounds to `decimal_places` fraction digits.
    ///
    /// The accuracy is derived by building the decimal literal
    /// `"0." + (decimal_places - 1) zeros + "1"` and parsing it; for zero
    /// places the accuracy is 0 and whole numbers compare directly.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` if `decimal_places` exceeds
    /// [`MAX_DECIMAL_PLACES`]. This is a fatal configuration error: no
    /// usable instance exists on failure, and callers should treat it as
    /// a programming error rather than a condition to recover from.
    pub fn new(decimal_places: u8) -> NumericResult<Self> {
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(NumericError::PrecisionOutOfRange);
        }

        let (accuracy, zero_threshold) = if decimal_places == 0 {
            (0.0, "0".to_string())
        } else {
            let accuracy_repr =
                format!("0.{:0>width$}", 1, width = usize::from(decimal_places));
            let accuracy: f64 = accuracy_repr
                .parse()
                .expect("accuracy literal is a valid float");
            // Zero threshold is the accuracy digits with the final 1
            // replaced by 0, i.e. the canonical rendering of zero.
            let mut zero_threshold = accuracy_repr;
            zero_threshold.pop();
            zero_threshold.push('0');
            (accuracy, zero_threshold)
        };

        tracing::debug!(decimal_places, accuracy, "configured fixed-precision floater");

        Ok(Self {
            decimal_places,
            accuracy,
            zero_threshold,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of fraction digits this helper rounds to.
    #[inline]
    pub const fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Smallest positive increment at this precision (0 for zero places).
    #[inline]
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }

    // ========================================================================
    // Formatting and Parsing
    // ========================================================================

    /// Display adapter that writes `value` with exactly `decimal_places`
    /// fraction digits, without allocating.
    #[inline]
    pub fn fixed(&self, value: f64) -> Fixed {
        Fixed {
            decimal_places: self.decimal_places,
            value,
        }
    }

    /// Render `value` rounded to exactly `decimal_places` fraction digits.
    ///
    /// Total for any `f64`: non-finite inputs render as the formatter
    /// renders them (`"NaN"`, `"inf"`, `"-inf"`), and those strings parse
    /// back to the same values.
    pub fn to_fixed_string(&self, value: f64) -> String {
        self.fixed(value).to_string()
    }

    /// Parse `text` at the given width, rounded to this precision.
    ///
    /// The parsed value is re-read through its fixed-decimal rendering at
    /// the same width, so the result is exactly what [`to_fixed_string`]
    /// would produce for it.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if `text` is not a valid float literal.
    ///
    /// [`to_fixed_string`]: Floater::to_fixed_string
    pub fn parse_str(&self, text: &str, width: FloatWidth) -> NumericResult<f64> {
        let parsed = width.parse(text)?;
        // Rendering is self-produced and always parses back.
        width.parse(&self.to_fixed_string(parsed))
    }

    /// Round `value` through its fixed-decimal rendering.
    ///
    /// The result carries no more precision than `decimal_places` digits
    /// and is idempotent: rounding an already-rounded value changes
    /// nothing. Never fails; non-finite values pass through unchanged.
    pub fn round_to_fixed(&self, value: f64) -> f64 {
        self.to_fixed_string(value)
            .parse()
            .expect("fixed-decimal rendering is a valid float literal")
    }

    /// Reformat `text` to the canonical fixed-decimal string.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if `text` is not a valid float literal.
    pub fn normalize_str(&self, text: &str, width: FloatWidth) -> NumericResult<String> {
        let parsed = width.parse(text)?;
        Ok(self.to_fixed_string(parsed))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Check whether `value` rounds to zero at this precision.
    ///
    /// The fixed-decimal rendering, with any leading `-` stripped, is
    /// compared against the zero threshold. The sign must be stripped: a
    /// bare lexicographic comparison would classify every negative
    /// rendering as zero, since `'-'` sorts below `'0'`.
    pub fn is_zero(&self, value: f64) -> bool {
        let repr = self.to_fixed_string(value);
        repr.strip_prefix('-').unwrap_or(&repr) == self.zero_threshold
    }

    /// Check whether `a` and `b` round to the same value.
    ///
    /// True iff the difference `a - b` renders as zero, so two values
    /// closer together than the rounding boundary are equal. This is NOT
    /// `a == b` on the raw binary values.
    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }

    /// Check whether `a` is strictly greater than `b` at this precision.
    ///
    /// The binary maximum picks the candidate; the rounded difference
    /// decides whether the two values tie. Values within accuracy of each
    /// other are never strictly ordered.
    pub fn greater(&self, a: f64, b: f64) -> bool {
        a.max(b) == a && !self.is_zero(a - b)
    }

    /// Check whether `a` is greater than or rounds equal to `b`.
    ///
    /// Defined from the binary maximum plus [`equal`], not as the negation
    /// of [`smaller`]: at the boundary, `equal`, `greater_or_equal`, and
    /// `smaller_or_equal` all hold while `greater` and `smaller` do not.
    ///
    /// [`equal`]: Floater::equal
    /// [`smaller`]: Floater::smaller
    pub fn greater_or_equal(&self, a: f64, b: f64) -> bool {
        a.max(b) == a || self.is_zero(a - b)
    }

    /// Check whether `a` is strictly smaller than `b` at this precision.
    pub fn smaller(&self, a: f64, b: f64) -> bool {
        a.min(b) == a && !self.is_zero(a - b)
    }

    /// Check whether `a` is smaller than or rounds equal to `b`.
    pub fn smaller_or_equal(&self, a: f64, b: f64) -> bool {
        a.min(b) == a || self.is_zero(a - b)
    }
}

impl TryFrom<u8> for Floater {
    type Error = NumericError;

    #[inline]
    fn try_from(decimal_places: u8) -> NumericResult<Self> {
        Self::new(decimal_places)
    }
}

impl From<Floater> for u8 {
    #[inline]
    fn from(floater: Floater) -> u8 {
        floater.decimal_places
    }
}

// ============================================================================
// Display Adapter
// ============================================================================

/// Display adapter produced by [`Floater::fixed`].
#[derive(Debug, Clone, Copy)]
pub struct Fixed {
    decimal_places: u8,
    value: f64,
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", usize::from(self.decimal_places), self.value)
    }
}

// ============================================================================
// Tests
// ============================================================================

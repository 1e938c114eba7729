use rust_decimal::{Decimal, RoundingStrategy};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed in percentage points (6 = 6% per year). Never as fractions.
pub type Percent = Decimal;

/// Round to two decimal places, half away from zero.
///
/// Applied exactly once per field, when a result is assembled. Intermediate
/// arithmetic always runs at full precision.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

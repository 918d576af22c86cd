use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two-decimal rendering shared by log entries, receipts and statements.
pub fn format_amount(amount: &Decimal) -> String {
    format!("{:.2}", round_cents(*amount))
}

/// A monthly rate as a percentage, `None` when it cannot be represented.
pub fn rate_percent(monthly_rate: Decimal) -> Option<Decimal> {
    monthly_rate.checked_mul(Decimal::ONE_HUNDRED)
}

/// `(1 + monthly_rate)^months` computed exactly in decimal arithmetic.
///
/// Negative durations divide instead of multiply. A divisor too large to represent means
/// the factor is below the smallest representable step, so it is zero. Returns `None` when
/// the factor itself leaves the representable range.
pub fn compound_factor(monthly_rate: Decimal, months: i32) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(monthly_rate)?;
    let growth = power(base, months.unsigned_abs());

    if months < 0 {
        match growth {
            Some(divisor) => Decimal::ONE.checked_div(divisor),
            None => Some(Decimal::ZERO),
        }
    } else {
        growth
    }
}

/// Exponentiation by squaring with checked products.
fn power(base: Decimal, mut exponent: u32) -> Option<Decimal> {
    let mut factor = Decimal::ONE;
    let mut square = base;

    while exponent > 0 {
        if exponent & 1 == 1 {
            factor = factor.checked_mul(square)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            square = square.checked_mul(square)?;
        }
    }

    Some(factor)
}

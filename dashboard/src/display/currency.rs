use rust_decimal::{Decimal, RoundingStrategy};

/// Cents to a two-place decimal value.
pub fn minor_to_decimal(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

/// `20000` → `R$ 200,00`, `123456` → `R$ 1.234,56`, `-500` → `-R$ 5,00`.
pub fn format_brl(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}R$ {},{:02}", group_thousands(abs / 100), abs % 100)
}

/// Same as [`format_brl`] for a value already in reais; half-cents round away
/// from zero. Works over the whole `Decimal` range.
pub fn format_brl_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}R$ {},{cents}", group_digits(units))
}

pub fn group_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_brl(20000), "R$ 200,00");
        assert_eq!(format_brl(5000), "R$ 50,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(0), "R$ 0,00");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_brl(123456), "R$ 1.234,56");
        assert_eq!(format_brl(100_000_000), "R$ 1.000.000,00");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
    }

    #[test]
    fn negative_sign_precedes_symbol() {
        assert_eq!(format_brl(-500), "-R$ 5,00");
    }

    #[test]
    fn decimal_values_round_to_cents() {
        assert_eq!(minor_to_decimal(20000), dec!(200.00));
        assert_eq!(format_brl_decimal(dec!(200)), "R$ 200,00");
        assert_eq!(format_brl_decimal(dec!(12.344)), "R$ 12,34");
        assert_eq!(format_brl_decimal(dec!(12.345)), "R$ 12,35");
        assert_eq!(format_brl_decimal(dec!(-0.5)), "-R$ 0,50");
        assert_eq!(format_brl_decimal(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn amounts_past_i64_cents_are_not_clamped() {
        assert_eq!(
            format_brl_decimal(Decimal::MAX),
            "R$ 79.228.162.514.264.337.593.543.950.335,00"
        );
        assert_eq!(
            format_brl_decimal(dec!(-123456789012345678.905)),
            "-R$ 123.456.789.012.345.678,91"
        );
        assert_eq!(format_brl(i64::MIN), "-R$ 92.233.720.368.547.758,08");
    }
}

//! Tax and tip application.
//!
//! Both the bill summary and every per-person breakdown go through
//! [`apply_tax_and_tip`], so the two always agree on how tax and tip stack.

use rust_decimal::Decimal;

/// The result of applying tax and tip to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxTipResult {
    /// The subtotal the rates were applied to.
    pub subtotal: Decimal,
    /// `subtotal x tax_rate / 100`.
    pub tax: Decimal,
    /// `(subtotal + tax) x tip_rate / 100`.
    pub tip: Decimal,
    /// `subtotal + tax + tip`.
    pub total: Decimal,
}

/// Returns `percent` percent of `amount`.
///
/// # Examples
///
/// ```
/// use bill_splitter::calculation::percent_of;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percent_of(Decimal::new(50, 0), Decimal::new(10, 0)), Decimal::new(5, 0));
/// ```
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Applies tax to `subtotal`, then tip to the tax-inclusive amount.
///
/// Rates are percentages. Any non-negative rate is accepted; bounds such as
/// "tip at most 30%" are enforced by callers, not here.
///
/// # Examples
///
/// ```
/// use bill_splitter::calculation::apply_tax_and_tip;
/// use rust_decimal::Decimal;
///
/// let result = apply_tax_and_tip(
///     Decimal::new(50, 0),
///     Decimal::new(10, 0),
///     Decimal::new(20, 0),
/// );
/// assert_eq!(result.tax, Decimal::new(5, 0));
/// assert_eq!(result.tip, Decimal::new(11, 0)); // 20% of 55, not of 50
/// assert_eq!(result.total, Decimal::new(66, 0));
/// ```
pub fn apply_tax_and_tip(subtotal: Decimal, tax_rate: Decimal, tip_rate: Decimal) -> TaxTipResult {
    let tax = percent_of(subtotal, tax_rate);
    let tip = percent_of(subtotal + tax, tip_rate);

    TaxTipResult {
        subtotal,
        tax,
        tip,
        total: subtotal + tax + tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tip_is_on_tax_inclusive_amount() {
        let result = apply_tax_and_tip(dec("100"), dec("10"), dec("10"));
        assert_eq!(result.tax, dec("10"));
        assert_eq!(result.tip, dec("11"));
        assert_eq!(result.total, dec("121"));
    }

    #[test]
    fn test_zero_rates_leave_subtotal_unchanged() {
        let result = apply_tax_and_tip(dec("42.50"), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.total, dec("42.50"));
    }

    #[test]
    fn test_rates_above_ui_bounds_are_accepted() {
        let result = apply_tax_and_tip(dec("10"), dec("50"), dec("100"));
        assert_eq!(result.tax, dec("5"));
        assert_eq!(result.tip, dec("15"));
        assert_eq!(result.total, dec("30"));
    }

    #[test]
    fn test_fractional_rates() {
        let result = apply_tax_and_tip(dec("80"), dec("8.875"), Decimal::ZERO);
        assert_eq!(result.tax, dec("7.1"));
        assert_eq!(result.total, dec("87.1"));
    }

    #[test]
    fn test_zero_subtotal() {
        let result = apply_tax_and_tip(Decimal::ZERO, dec("15"), dec("30"));
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec("200"), dec("12.5")), dec("25"));
    }
}

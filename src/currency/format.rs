//! Locale-aware price formatting.
//!
//! Formatting is symbol-prefix based with per-currency fraction digits (yen
//! amounts are whole numbers). An amount of exactly 0 is special-cased to the
//! locale's "free" label instead of a currency-formatted zero, independent of
//! which currency is active.

use crate::currency::Currency;
use crate::i18n::Locale;

/// Formats an amount for display in the given currency and locale.
///
/// # Examples
///
/// ```
/// use appdex::currency::{format_price, Currency};
/// use appdex::i18n::Locale;
///
/// assert_eq!(format_price(9.99, Currency::Usd, Locale::EnUs), "$9.99");
/// assert_eq!(format_price(0.0, Currency::Usd, Locale::EnUs), "Free to Use");
/// ```
#[must_use]
pub fn format_price(amount: f64, currency: Currency, locale: Locale) -> String {
    if amount == 0.0 {
        return locale.labels().free_to_use.to_string();
    }

    let digits = currency.fraction_digits();
    format!("{}{:.*}", currency.symbol(), digits, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_localized_free_label() {
        assert_eq!(format_price(0.0, Currency::Cny, Locale::ZhCn), "免费使用");
        assert_eq!(format_price(0.0, Currency::Jpy, Locale::JaJp), "無料で使用");
        assert_eq!(format_price(0.0, Currency::Gbp, Locale::EnUs), "Free to Use");
    }

    #[test]
    fn non_zero_amounts_use_currency_symbols() {
        assert_eq!(format_price(9.99, Currency::Usd, Locale::EnUs), "$9.99");
        assert_eq!(format_price(72.0, Currency::Cny, Locale::ZhCn), "¥72.00");
        assert_eq!(format_price(8.5, Currency::Eur, Locale::EnUs), "€8.50");
        assert_eq!(format_price(1.25, Currency::Gbp, Locale::EnUs), "£1.25");
    }

    #[test]
    fn yen_rounds_to_whole_amounts() {
        assert_eq!(format_price(110.4, Currency::Jpy, Locale::JaJp), "¥110");
        assert_eq!(format_price(110.6, Currency::Jpy, Locale::EnUs), "¥111");
    }
}

use serde::Serialize;

use crate::config::{DISCOUNT_RATE, DISCOUNT_THRESHOLD, TAX_RATE};
use crate::currency::format_currency;

/// Unformatted order figures, kept around so the invariants can be checked
/// before anything is turned into display strings.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct QuoteBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub taxable: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderQuote {
    pub subtotal: String,
    pub discount: String,
    pub tax: String,
    pub total: String,
}

impl QuoteBreakdown {
    pub fn format(&self) -> OrderQuote {
        OrderQuote {
            subtotal: format_currency(self.subtotal),
            discount: format_currency(self.discount),
            tax: format_currency(self.tax),
            total: format_currency(self.total),
        }
    }

    pub fn has_bulk_discount(&self) -> bool {
        self.discount != 0.0
    }
}

pub fn quote_breakdown(quantity: u32, price_per_unit: f64) -> QuoteBreakdown {
    let subtotal = quantity as f64 * price_per_unit;
    let discount = if quantity > DISCOUNT_THRESHOLD {
        subtotal * DISCOUNT_RATE
    } else {
        0.0
    };

    let taxable = subtotal - discount;
    let tax = taxable * TAX_RATE;

    QuoteBreakdown {
        subtotal,
        discount,
        taxable,
        tax,
        total: taxable + tax,
    }
}

pub fn calculate_product_price(quantity: u32, price_per_unit: f64) -> OrderQuote {
    quote_breakdown(quantity, price_per_unit).format()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn small_order_has_no_discount() {
        let q = quote_breakdown(50, 100.0);
        assert!(close(q.subtotal, 5000.0));
        assert_eq!(q.discount, 0.0);
        assert!(close(q.tax, 800.0));
        assert!(close(q.total, 5800.0));

        let formatted = calculate_product_price(50, 100.0);
        assert_eq!(formatted.subtotal, "Ksh\u{a0}5,000.00");
        assert_eq!(formatted.discount, "Ksh\u{a0}0.00");
        assert_eq!(formatted.tax, "Ksh\u{a0}800.00");
        assert_eq!(formatted.total, "Ksh\u{a0}5,800.00");
    }

    #[test]
    fn large_order_gets_bulk_discount() {
        let q = quote_breakdown(150, 100.0);
        assert!(close(q.subtotal, 15000.0));
        assert!(close(q.discount, 1500.0));
        assert!(close(q.taxable, 13500.0));
        assert!(close(q.tax, 2160.0));
        assert!(close(q.total, 15660.0));
        assert!(q.has_bulk_discount());

        assert_eq!(calculate_product_price(150, 100.0).total, "Ksh\u{a0}15,660.00");
    }

    #[test]
    fn threshold_itself_is_not_discounted() {
        let at = quote_breakdown(DISCOUNT_THRESHOLD, 10.0);
        assert_eq!(at.discount, 0.0);
        assert!(!at.has_bulk_discount());

        let above = quote_breakdown(DISCOUNT_THRESHOLD + 1, 10.0);
        assert!(close(above.discount, 101.0));
    }

    #[test]
    fn half_cent_unit_price_rounds_up() {
        assert_eq!(calculate_product_price(1, 1.005).subtotal, "Ksh\u{a0}1.01");
    }

    proptest! {
        #[test]
        fn no_discount_at_or_below_threshold(quantity in 0u32..=100, price in 0.01f64..10_000.0) {
            prop_assert_eq!(quote_breakdown(quantity, price).discount, 0.0);
        }

        #[test]
        fn discount_is_ten_percent_above_threshold(quantity in 101u32..100_000, price in 0.01f64..10_000.0) {
            let q = quote_breakdown(quantity, price);
            prop_assert_eq!(q.discount, q.subtotal * 0.10);
        }

        #[test]
        fn total_is_taxable_plus_tax(quantity in 0u32..100_000, price in 0.0f64..10_000.0) {
            let q = quote_breakdown(quantity, price);
            let expected = q.subtotal - q.discount + q.tax;
            prop_assert!((q.total - expected).abs() <= expected.abs() * 1e-12 + 1e-9);
        }
    }
}

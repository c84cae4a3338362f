//! Metric-card value formatting.

use crate::models::metrics::{MetricCard, MetricVariation, ProductMetrics};

pub const LABEL_PRICE: &str = "Precio Promedio";
pub const LABEL_MARGIN: &str = "Margen Promedio";
pub const LABEL_UNITS: &str = "Unidades Vendidas";

/// `1234.5` → `"$1,234.50"` (symbol first, sign after it).
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", group_thousands(&format!("{value:.2}")))
}

/// `46.875` → `"46.88%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Integer part of `value`, truncated toward zero, with thousands separators.
pub fn format_integer(value: f64) -> String {
    group_thousands(&(value.trunc() as i64).to_string())
}

/// Insert `,` every three digits in the integer part of a plain decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Price, margin and units cards for one product.
pub fn metric_cards(
    metrics: &ProductMetrics,
    variation: &MetricVariation,
    currency_symbol: &str,
) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: LABEL_PRICE.to_string(),
            value: format_currency(metrics.average_price, currency_symbol),
            delta: format_percent(variation.price_pct),
        },
        MetricCard {
            label: LABEL_MARGIN.to_string(),
            value: format_percent(metrics.average_margin_pct),
            delta: format_percent(variation.margin_pct),
        },
        MetricCard {
            label: LABEL_UNITS.to_string(),
            value: format_integer(metrics.total_units),
            delta: format_percent(variation.units_pct),
        },
    ]
}

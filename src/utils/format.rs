//! Locale-aware rendering of amounts and dates for reports.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Separators and date layout for one locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_pattern: &'static str,
}

impl LocaleFormat {
    /// Known tags get their conventions; anything else falls back to `en-US`.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "pt-BR" | "pt-PT" | "de-DE" | "es-ES" | "it-IT" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
                date_pattern: "%d/%m/%Y",
            },
            "en-GB" => Self {
                decimal_separator: '.',
                grouping_separator: ',',
                date_pattern: "%d/%m/%Y",
            },
            _ => Self {
                decimal_separator: '.',
                grouping_separator: ',',
                date_pattern: "%m/%d/%Y",
            },
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => code,
    }
}

/// Renders e.g. `R$ 8.500,00` or `-$ 1,200.50`.
pub fn format_money(amount: Decimal, currency: &str, locale: &LocaleFormat) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format_number(rounded.abs(), 2, locale);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{} {body}", symbol_for(currency))
}

pub fn format_number(value: Decimal, precision: u32, locale: &LocaleFormat) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", precision as usize, rounded);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut body = format!("{sign}{}", group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        body.push(locale.decimal_separator);
        body.push_str(frac);
    }
    body
}

pub fn format_date(date: NaiveDate, locale: &LocaleFormat) -> String {
    date.format(locale.date_pattern).to_string()
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

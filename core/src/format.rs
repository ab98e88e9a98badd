//! USD display helpers shared by the table, the narrative and chat answers.

use crate::types::Usd;

/// Whole dollars with thousands separators: `-$215,000`.
pub fn usd(amount: Usd) -> String {
    let whole = amount.abs().round() as u64;
    format!("{}${}", sign(amount, whole), group_thousands(whole))
}

/// Dollars and cents: `-$215,000.00`.
pub fn usd_cents(amount: Usd) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign(amount, cents),
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Table style: negatives in parentheses, `($215,000)`.
pub fn accounting(amount: Usd) -> String {
    let whole = amount.abs().round() as u64;
    if amount < 0.0 && whole > 0 {
        format!("(${})", group_thousands(whole))
    } else {
        format!("${}", group_thousands(whole))
    }
}

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Plain-text variant for document export: Latin-1 only.
pub fn latin1_safe(text: &str) -> String {
    text.replace('→', "->")
        .chars()
        .filter(|c| u32::from(*c) <= 0xFF)
        .collect()
}

// A value that rounds to zero prints without a sign.
fn sign(amount: Usd, rounded: u64) -> &'static str {
    if amount < 0.0 && rounded > 0 {
        "-"
    } else {
        ""
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

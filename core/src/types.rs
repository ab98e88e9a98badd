//! Shared primitive types used across the calculator.

/// A monetary amount in US dollars.
pub type Usd = f64;

/// A percentage as entered on the input form, in `[0, 100]`.
pub type Percent = f64;

/// Canonical identifier of one interactive session.
pub type SessionId = uuid::Uuid;

/// Calendar weeks per year. Every annualised figure scales by this.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Convert a form percentage into a rate.
pub fn rate(pct: Percent) -> f64 {
    pct / 100.0
}

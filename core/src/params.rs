//! Customer data assumptions: the input side of the cost model.
//!
//! The form layer is trusted to hand over values inside the declared
//! ranges. `clamped()` is the one place those ranges are enforced, for
//! callers (scenario files, the CLI) that cannot promise it.

use crate::{
    error::{read_file, FtzResult},
    types::{Percent, Usd},
};
use serde::{Deserialize, Serialize};

pub const MIN_SHIPMENTS_PER_WEEK: u32 = 1;
pub const MIN_AVG_IMPORT_VALUE: Usd = 1_000.0;

/// Annual program costs for one regime. Not driven by shipment volume.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingCosts {
    pub consulting: Usd,
    pub management: Usd,
    pub software: Usd,
    pub bond: Usd,
}

impl OperatingCosts {
    pub fn new(consulting: Usd, management: Usd, software: Usd, bond: Usd) -> Self {
        Self {
            consulting,
            management,
            software,
            bond,
        }
    }

    pub fn total(&self) -> Usd {
        self.consulting + self.management + self.software + self.bond
    }

    fn clamped(self, regime: &str) -> Self {
        Self {
            consulting: floor_at(self.consulting, 0.0, regime, "consulting"),
            management: floor_at(self.management, 0.0, regime, "management"),
            software: floor_at(self.software, 0.0, regime, "software"),
            bond: floor_at(self.bond, 0.0, regime, "bond"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    pub shipments_per_week: u32,
    /// Average imported value per entry.
    pub avg_import_value: Usd,
    pub export_sales_pct: Percent,
    pub off_spec_pct: Percent,
    pub mpf_pct: Percent,
    pub hmf_pct: Percent,
    /// Broker charge per entry.
    pub broker_cost: Usd,
    pub avg_duty_pct: Percent,
    pub ftz_operating: OperatingCosts,
    pub noftz_operating: OperatingCosts,
}

impl Default for InputParameters {
    /// The reference scenario the input form opens with.
    fn default() -> Self {
        Self {
            shipments_per_week: 2,
            avg_import_value: 50_000.0,
            export_sales_pct: 1.0,
            off_spec_pct: 0.25,
            mpf_pct: 0.3464,
            hmf_pct: 0.125,
            broker_cost: 125.0,
            avg_duty_pct: 30.0,
            ftz_operating: OperatingCosts::new(50_000.0, 150_000.0, 40_000.0, 1_000.0),
            noftz_operating: OperatingCosts::default(),
        }
    }
}

impl InputParameters {
    /// Load a scenario file. Absent top-level fields take the reference
    /// values. An operating-cost block that is present replaces the whole
    /// block, and any cost line it leaves out is zero.
    pub fn load(path: &str) -> FtzResult<Self> {
        let content = read_file(path)?;
        let params: InputParameters = serde_json::from_str(&content)?;
        log::debug!("scenario loaded from {path}");
        Ok(params)
    }

    /// Pull every field back inside the input-form ranges.
    pub fn clamped(&self) -> Self {
        let shipments_per_week = if self.shipments_per_week < MIN_SHIPMENTS_PER_WEEK {
            log::warn!(
                "clamp: shipments_per_week {} raised to {MIN_SHIPMENTS_PER_WEEK}",
                self.shipments_per_week
            );
            MIN_SHIPMENTS_PER_WEEK
        } else {
            self.shipments_per_week
        };

        Self {
            shipments_per_week,
            avg_import_value: floor_at(
                self.avg_import_value,
                MIN_AVG_IMPORT_VALUE,
                "input",
                "avg_import_value",
            ),
            export_sales_pct: pct_range(self.export_sales_pct, "export_sales_pct"),
            off_spec_pct: pct_range(self.off_spec_pct, "off_spec_pct"),
            mpf_pct: pct_range(self.mpf_pct, "mpf_pct"),
            hmf_pct: pct_range(self.hmf_pct, "hmf_pct"),
            broker_cost: floor_at(self.broker_cost, 0.0, "input", "broker_cost"),
            avg_duty_pct: pct_range(self.avg_duty_pct, "avg_duty_pct"),
            ftz_operating: self.ftz_operating.clamped("ftz"),
            noftz_operating: self.noftz_operating.clamped("noftz"),
        }
    }
}

fn floor_at(value: f64, min: f64, scope: &str, field: &str) -> f64 {
    // NaN compares false everywhere; treat it as the floor.
    if value >= min {
        value
    } else {
        log::warn!("clamp: {scope}.{field} {value} raised to {min}");
        min
    }
}

fn pct_range(value: Percent, field: &str) -> Percent {
    if value > 100.0 {
        log::warn!("clamp: {field} {value} lowered to 100");
        100.0
    } else {
        floor_at(value, 0.0, "input", field)
    }
}

//! Cost model: FTZ vs non-FTZ annual landed cost comparison.
//!
//! This module is PURE. `compute()` maps one set of inputs to one
//! `DerivedFigures` and keeps no state between calls; callers recompute
//! in full whenever an input changes.
//!
//! Formula structure follows the reference spreadsheet:
//!   - Duty: the rate is never reduced, only the dutiable base shrinks
//!     (exported and off-spec goods leave the zone duty-free).
//!   - MPF: capped per entry. Without FTZ every shipment is an entry;
//!     with FTZ one consolidated entry per week carries the weekly value.
//!   - Broker: charged per entry, so weekly consolidation cuts it to 52.
//!   - HMF: same term in both regimes.

use crate::{
    config::ModelConfig,
    params::{InputParameters, OperatingCosts},
    types::{rate, Usd, WEEKS_PER_YEAR},
};
use serde::Serialize;

/// The thirteen rows of the comparison table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    TotalDuty,
    DutySavedExport,
    DutySavedOffSpec,
    TotalNetDuty,
    TotalMpf,
    BrokerAndHmf,
    Totals,
    Consulting,
    Management,
    Software,
    OperatorBond,
    TotalOperatingCosts,
    NetSavingsToBrand,
}

impl LineItem {
    pub const ALL: [LineItem; 13] = [
        LineItem::TotalDuty,
        LineItem::DutySavedExport,
        LineItem::DutySavedOffSpec,
        LineItem::TotalNetDuty,
        LineItem::TotalMpf,
        LineItem::BrokerAndHmf,
        LineItem::Totals,
        LineItem::Consulting,
        LineItem::Management,
        LineItem::Software,
        LineItem::OperatorBond,
        LineItem::TotalOperatingCosts,
        LineItem::NetSavingsToBrand,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LineItem::TotalDuty           => "Total Duty",
            LineItem::DutySavedExport     => "Duty Saved of Exported Goods",
            LineItem::DutySavedOffSpec    => "Duty Saved on Non-Spec Goods",
            LineItem::TotalNetDuty        => "Total Net Duty",
            LineItem::TotalMpf            => "Total MPF",
            LineItem::BrokerAndHmf        => "Total Broker Costs + HMF",
            LineItem::Totals              => "Totals",
            LineItem::Consulting          => "FTZ Consulting",
            LineItem::Management          => "FTZ Management",
            LineItem::Software            => "FTZ Software Fee",
            LineItem::OperatorBond        => "FTZ Operator Bond",
            LineItem::TotalOperatingCosts => "Total Operating Costs",
            LineItem::NetSavingsToBrand   => "Net Savings to Brand",
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub item: LineItem,
    pub without_ftz: Usd,
    pub with_ftz: Usd,
    pub savings: Usd,
}

impl ComparisonRow {
    /// Savings = Without − With. Used for every row except the duty-saving ones.
    fn delta(item: LineItem, without_ftz: Usd, with_ftz: Usd) -> Self {
        Self {
            item,
            without_ftz,
            with_ftz,
            savings: without_ftz - with_ftz,
        }
    }

    /// Duty-saving rows: the saved amount is the savings, and the With
    /// column carries its negation.
    fn duty_saved(item: LineItem, saved: Usd) -> Self {
        Self {
            item,
            without_ftz: 0.0,
            with_ftz: -saved,
            savings: saved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFigures {
    // Volume
    pub total_import_value: Usd,
    pub entries_per_year: u32,
    // Duty
    pub total_duty: Usd,
    pub duty_saved_export: Usd,
    pub duty_saved_offspec: Usd,
    pub net_duty_without_ftz: Usd,
    pub net_duty_with_ftz: Usd,
    // Fees
    pub mpf_cap_per_entry: Usd,
    pub mpf_without_ftz: Usd,
    pub mpf_with_ftz: Usd,
    pub hmf: Usd,
    pub broker_hmf_without_ftz: Usd,
    pub broker_hmf_with_ftz: Usd,
    // Subtotals before program costs
    pub totals_without_ftz: Usd,
    pub totals_with_ftz: Usd,
    // Program costs
    pub operating_without_ftz: OperatingCosts,
    pub operating_with_ftz: OperatingCosts,
    pub operating_costs_without_ftz: Usd,
    pub operating_costs_with_ftz: Usd,
    // Bottom line
    pub fully_loaded_without_ftz: Usd,
    pub fully_loaded_with_ftz: Usd,
    pub net_savings_to_brand: Usd,
}

/// Run the full comparison for one set of inputs.
pub fn compute(params: &InputParameters, config: &ModelConfig) -> DerivedFigures {
    let weeks = WEEKS_PER_YEAR as f64;
    let shipments = params.shipments_per_week as f64;

    let export_sales = rate(params.export_sales_pct);
    let off_spec = rate(params.off_spec_pct);
    let mpf_rate = rate(params.mpf_pct);
    let hmf_rate = rate(params.hmf_pct);
    let avg_duty = rate(params.avg_duty_pct);

    let weekly_import_value = shipments * params.avg_import_value;
    let total_import_value = weekly_import_value * weeks;

    // ── Duty ───────────────────────────────────────────────

    let total_duty = total_import_value * avg_duty;
    let duty_saved_export = total_import_value * export_sales * avg_duty;
    let duty_saved_offspec = total_import_value * off_spec * avg_duty;

    let net_duty_without_ftz = total_duty;
    let net_duty_with_ftz = total_duty - duty_saved_export - duty_saved_offspec;

    // ── MPF ────────────────────────────────────────────────

    let cap = config.mpf_cap_per_entry;
    let entries_per_year = params.shipments_per_week.saturating_mul(WEEKS_PER_YEAR);

    let per_entry_mpf = (params.avg_import_value * mpf_rate).min(cap);
    let mpf_without_ftz = per_entry_mpf * entries_per_year as f64;

    // One consolidated entry per week; the cap applies to that entry.
    let per_week_mpf = (weekly_import_value * mpf_rate).min(cap);
    let mpf_with_ftz = per_week_mpf * weeks;

    // ── Broker + HMF ───────────────────────────────────────

    let hmf = weekly_import_value * hmf_rate;
    let broker_hmf_without_ftz = entries_per_year as f64 * params.broker_cost + hmf;
    let broker_hmf_with_ftz = weeks * params.broker_cost + hmf;

    // ── Totals ─────────────────────────────────────────────

    let totals_without_ftz = net_duty_without_ftz + mpf_without_ftz + broker_hmf_without_ftz;
    let totals_with_ftz = net_duty_with_ftz + mpf_with_ftz + broker_hmf_with_ftz;

    let operating_costs_without_ftz = params.noftz_operating.total();
    let operating_costs_with_ftz = params.ftz_operating.total();

    let fully_loaded_without_ftz = totals_without_ftz + operating_costs_without_ftz;
    let fully_loaded_with_ftz = totals_with_ftz + operating_costs_with_ftz;

    let net_savings_to_brand = fully_loaded_without_ftz - fully_loaded_with_ftz;

    log::debug!(
        "cost model: imports=${:.0} duty=${:.0} mpf=${:.2}/${:.2} broker+hmf=${:.2}/${:.2} net_savings=${:.2}",
        total_import_value,
        total_duty,
        mpf_without_ftz,
        mpf_with_ftz,
        broker_hmf_without_ftz,
        broker_hmf_with_ftz,
        net_savings_to_brand
    );

    DerivedFigures {
        total_import_value,
        entries_per_year,
        total_duty,
        duty_saved_export,
        duty_saved_offspec,
        net_duty_without_ftz,
        net_duty_with_ftz,
        mpf_cap_per_entry: cap,
        mpf_without_ftz,
        mpf_with_ftz,
        hmf,
        broker_hmf_without_ftz,
        broker_hmf_with_ftz,
        totals_without_ftz,
        totals_with_ftz,
        operating_without_ftz: params.noftz_operating,
        operating_with_ftz: params.ftz_operating,
        operating_costs_without_ftz,
        operating_costs_with_ftz,
        fully_loaded_without_ftz,
        fully_loaded_with_ftz,
        net_savings_to_brand,
    }
}

impl DerivedFigures {
    /// The comparison table, one row per `LineItem::ALL` entry.
    pub fn rows(&self) -> [ComparisonRow; 13] {
        let without = &self.operating_without_ftz;
        let with = &self.operating_with_ftz;
        [
            // Duty is the same in both regimes; the saving shows up below.
            ComparisonRow {
                item: LineItem::TotalDuty,
                without_ftz: self.total_duty,
                with_ftz: self.total_duty,
                savings: 0.0,
            },
            ComparisonRow::duty_saved(LineItem::DutySavedExport, self.duty_saved_export),
            ComparisonRow::duty_saved(LineItem::DutySavedOffSpec, self.duty_saved_offspec),
            ComparisonRow::delta(
                LineItem::TotalNetDuty,
                self.net_duty_without_ftz,
                self.net_duty_with_ftz,
            ),
            ComparisonRow::delta(LineItem::TotalMpf, self.mpf_without_ftz, self.mpf_with_ftz),
            ComparisonRow::delta(
                LineItem::BrokerAndHmf,
                self.broker_hmf_without_ftz,
                self.broker_hmf_with_ftz,
            ),
            ComparisonRow::delta(LineItem::Totals, self.totals_without_ftz, self.totals_with_ftz),
            ComparisonRow::delta(LineItem::Consulting, without.consulting, with.consulting),
            ComparisonRow::delta(LineItem::Management, without.management, with.management),
            ComparisonRow::delta(LineItem::Software, without.software, with.software),
            ComparisonRow::delta(LineItem::OperatorBond, without.bond, with.bond),
            ComparisonRow::delta(
                LineItem::TotalOperatingCosts,
                self.operating_costs_without_ftz,
                self.operating_costs_with_ftz,
            ),
            ComparisonRow {
                item: LineItem::NetSavingsToBrand,
                without_ftz: self.fully_loaded_without_ftz,
                with_ftz: self.fully_loaded_with_ftz,
                savings: self.net_savings_to_brand,
            },
        ]
    }

    pub fn row(&self, item: LineItem) -> ComparisonRow {
        // Discriminants follow declaration order, same as `ALL`.
        self.rows()[item as usize]
    }

    /// Duty avoided on exported and off-spec goods.
    pub fn duty_savings(&self) -> Usd {
        self.duty_saved_export + self.duty_saved_offspec
    }

    pub fn mpf_savings(&self) -> Usd {
        self.mpf_without_ftz - self.mpf_with_ftz
    }

    pub fn broker_hmf_savings(&self) -> Usd {
        self.broker_hmf_without_ftz - self.broker_hmf_with_ftz
    }

    /// Savings before program costs.
    pub fn gross_savings(&self) -> Usd {
        self.totals_without_ftz - self.totals_with_ftz
    }
}

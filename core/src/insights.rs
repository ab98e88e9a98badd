//! Insights narrative: the summary block shown under the comparison table.
//!
//! Template-filled from `DerivedFigures`; no generative behaviour.

use crate::{
    cost_model::DerivedFigures,
    format::{percent, usd},
    types::Usd,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub net_savings: Usd,
    // Key drivers
    pub duty_savings: Usd,
    pub mpf_savings: Usd,
    pub broker_hmf_savings: Usd,
    pub operating_costs_without_ftz: Usd,
    pub operating_costs_with_ftz: Usd,
    /// Net savings as a share of the fully-loaded non-FTZ cost base.
    pub savings_pct: f64,
}

impl Insights {
    pub fn from_figures(figures: &DerivedFigures) -> Self {
        Self {
            net_savings: figures.net_savings_to_brand,
            duty_savings: figures.duty_savings(),
            mpf_savings: figures.mpf_savings(),
            broker_hmf_savings: figures.broker_hmf_savings(),
            operating_costs_without_ftz: figures.operating_costs_without_ftz,
            operating_costs_with_ftz: figures.operating_costs_with_ftz,
            savings_pct: savings_pct(figures),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Based on your current assumptions, your company could realize approximately \
             **{net} in net annual savings** by operating in an FTZ.\n\
             \n\
             **Key drivers behind this result:**\n\
             - Duty Savings on Exports & Non-Spec Goods: {duty}\n\
             - MPF Savings from weekly entry structure: {mpf}\n\
             - Broker + HMF Savings: {broker}\n\
             - Costs Without FTZ vs Costs With FTZ: {op_without} → {op_with}\n\
             \n\
             This equates to roughly **{pct} reduction** in your fully loaded logistics \
             cost base, assuming shipment volumes and duty rates remain consistent.\n",
            net = usd(self.net_savings),
            duty = usd(self.duty_savings),
            mpf = usd(self.mpf_savings),
            broker = usd(self.broker_hmf_savings),
            op_without = usd(self.operating_costs_without_ftz),
            op_with = usd(self.operating_costs_with_ftz),
            pct = percent(self.savings_pct),
        )
    }
}

/// `net / fully_loaded_without * 100`, with a zero base replaced by 1.0.
pub fn savings_pct(figures: &DerivedFigures) -> f64 {
    let base = if figures.fully_loaded_without_ftz != 0.0 {
        figures.fully_loaded_without_ftz
    } else {
        1.0
    };
    figures.net_savings_to_brand / base * 100.0
}

//! Answer templates, rendered against the current figures.
//!
//! Every answer is built fresh from `DerivedFigures` at the moment of the
//! question, so a changed input is reflected in the very next answer.

use super::catalog::TemplateId;
use crate::{
    cost_model::DerivedFigures,
    format::{percent, usd, usd_cents},
    insights::savings_pct,
    types::WEEKS_PER_YEAR,
};

/// Return on the FTZ program spend, derived per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnMetrics {
    /// `net_savings / ftz_operating_costs`; 0 when there are no program costs.
    pub roi: f64,
    /// `1 / roi`, only when the program pays back at all.
    pub payback_years: Option<f64>,
}

impl ReturnMetrics {
    pub fn from_figures(figures: &DerivedFigures) -> Self {
        let cost = figures.operating_costs_with_ftz;
        let roi = if cost != 0.0 {
            figures.net_savings_to_brand / cost
        } else {
            0.0
        };
        let payback_years = (roi > 0.0).then(|| 1.0 / roi);
        Self { roi, payback_years }
    }
}

pub fn render(template: TemplateId, figures: &DerivedFigures, metrics: &ReturnMetrics) -> String {
    let f = figures;
    match template {
        TemplateId::NetSavings => format!(
            "Your **net savings to brand** are **{}** per year. That is the fully loaded \
             cost without an FTZ ({}) minus the fully loaded cost with an FTZ ({}).",
            usd_cents(f.net_savings_to_brand),
            usd(f.fully_loaded_without_ftz),
            usd(f.fully_loaded_with_ftz),
        ),

        TemplateId::Roi => {
            if f.operating_costs_with_ftz == 0.0 {
                format!(
                    "Your estimated **ROI is {}**. With no FTZ operating costs entered there \
                     is nothing to return on, so ROI is reported as zero. Add consulting, \
                     management, software and bond costs to see a real figure.",
                    percent(metrics.roi * 100.0),
                )
            } else {
                format!(
                    "Your estimated **ROI is {}**: {} in net savings against {} of annual \
                     FTZ operating costs.",
                    percent(metrics.roi * 100.0),
                    usd(f.net_savings_to_brand),
                    usd(f.operating_costs_with_ftz),
                )
            }
        }

        TemplateId::Payback => match metrics.payback_years {
            Some(years) => format!(
                "At current assumptions the FTZ program pays for itself in about \
                 **{years:.1} years** (roughly {:.0} months).",
                years * 12.0
            ),
            None => format!(
                "Payback is **not reached** at current assumptions: net savings are {}, \
                 so the FTZ operating costs of {} are not recovered.",
                usd(f.net_savings_to_brand),
                usd(f.operating_costs_with_ftz),
            ),
        },

        TemplateId::WhatIsFtz => "A **Foreign-Trade Zone (FTZ)** is a secure area treated as \
             outside U.S. customs territory for duty purposes. Goods can be stored, processed \
             or re-exported there without paying duty until they enter U.S. commerce, and \
             entries can be filed weekly instead of per shipment."
            .to_string(),

        TemplateId::ImportValue => format!(
            "Your **total value imported** is **{}** per year ({} entries at your current \
             shipment rate).",
            usd(f.total_import_value),
            f.entries_per_year,
        ),

        TemplateId::TotalDuty => format!(
            "**Total duty** on {} of annual imports is **{}**. The duty rate itself is the \
             same with or without an FTZ; only the dutiable base changes.",
            usd(f.total_import_value),
            usd(f.total_duty),
        ),

        TemplateId::DutySavings => format!(
            "An FTZ avoids **{}** of duty per year: {} on exported goods and {} on off-spec \
             merchandise. Net duty drops from {} to {}.",
            usd(f.duty_savings()),
            usd(f.duty_saved_export),
            usd(f.duty_saved_offspec),
            usd(f.net_duty_without_ftz),
            usd(f.net_duty_with_ftz),
        ),

        TemplateId::ExportDuty => format!(
            "Goods exported straight out of the zone never enter U.S. commerce, so no duty \
             is owed on them. That saves **{}** per year at your export share.",
            usd(f.duty_saved_export),
        ),

        TemplateId::OffSpecDuty => format!(
            "Off-spec merchandise can be destroyed or returned from inside the zone without \
             paying duty. That saves **{}** per year at your off-spec share.",
            usd(f.duty_saved_offspec),
        ),

        TemplateId::NetDuty => format!(
            "**Total net duty** is {} without an FTZ and {} with one, a saving of **{}**.",
            usd(f.net_duty_without_ftz),
            usd(f.net_duty_with_ftz),
            usd(f.net_duty_without_ftz - f.net_duty_with_ftz),
        ),

        TemplateId::Mpf => format!(
            "The **Merchandise Processing Fee (MPF)** is a percentage of entered value, \
             capped per entry. Without an FTZ you pay it on {} entries ({}); with weekly \
             entry you pay it on {} ({}). MPF savings: **{}**.",
            f.entries_per_year,
            usd(f.mpf_without_ftz),
            WEEKS_PER_YEAR,
            usd(f.mpf_with_ftz),
            usd(f.mpf_savings()),
        ),

        TemplateId::MpfCap => format!(
            "MPF is capped at **{}** per entry. The cap applies to each individual entry, \
             so consolidating a week of shipments into one entry lets the cap absorb more value.",
            usd_cents(f.mpf_cap_per_entry),
        ),

        TemplateId::WeeklyEntry => format!(
            "With **weekly entry**, all shipments leaving the zone in a week are filed as one \
             customs entry: {} entries per year instead of {}. Per-entry MPF and broker \
             charges drop accordingly.",
            WEEKS_PER_YEAR,
            f.entries_per_year,
        ),

        TemplateId::Hmf => format!(
            "The **Harbor Maintenance Fee (HMF)** applies to waterborne cargo value. This \
             model charges it the same in both regimes ({}), so it does not add to FTZ savings.",
            usd_cents(f.hmf),
        ),

        TemplateId::Broker => format!(
            "**Broker costs + HMF** are {} without an FTZ and {} with one. Brokers bill per \
             entry, so weekly filing saves **{}**.",
            usd(f.broker_hmf_without_ftz),
            usd(f.broker_hmf_with_ftz),
            usd(f.broker_hmf_savings()),
        ),

        TemplateId::OperatingCosts => {
            let op = &f.operating_with_ftz;
            format!(
                "**FTZ operating costs** total {} per year: consulting {}, management {}, \
                 software {}, operator bond {}. Without an FTZ you carry {}.",
                usd(f.operating_costs_with_ftz),
                usd(op.consulting),
                usd(op.management),
                usd(op.software),
                usd(op.bond),
                usd(f.operating_costs_without_ftz),
            )
        }

        TemplateId::FullyLoaded => format!(
            "Before operating costs you spend {} without an FTZ and {} with one. Fully \
             loaded, that is **{}** versus **{}**.",
            usd(f.totals_without_ftz),
            usd(f.totals_with_ftz),
            usd(f.fully_loaded_without_ftz),
            usd(f.fully_loaded_with_ftz),
        ),

        TemplateId::SavingsPercent => format!(
            "Net savings are **{}** of your fully loaded logistics cost base without an FTZ.",
            percent(savings_pct(f)),
        ),

        TemplateId::KeyDrivers => format!(
            "**Key drivers:**\n\
             - Duty savings on exports & non-spec goods: {}\n\
             - MPF savings from weekly entry: {}\n\
             - Broker + HMF savings: {}\n\
             - Operating costs: {} → {}",
            usd(f.duty_savings()),
            usd(f.mpf_savings()),
            usd(f.broker_hmf_savings()),
            usd(f.operating_costs_without_ftz),
            usd(f.operating_costs_with_ftz),
        ),

        TemplateId::NegativeSavings => {
            if f.net_savings_to_brand < 0.0 {
                format!(
                    "Savings are negative because FTZ operating costs ({}) exceed the duty and \
                     fee savings ({}). Higher volumes, export share or duty rates would change that.",
                    usd(f.operating_costs_with_ftz - f.operating_costs_without_ftz),
                    usd(f.gross_savings()),
                )
            } else {
                format!(
                    "Your savings aren't negative: the FTZ nets **{}** per year at current assumptions.",
                    usd(f.net_savings_to_brand),
                )
            }
        }

        TemplateId::DutyDeferral => "Inside an FTZ, duty is paid only when goods leave the zone \
             for U.S. commerce, which improves cash flow. This model does not value that \
             deferral; it counts only duty that is avoided outright."
            .to_string(),

        TemplateId::ImproveSavings => "Savings grow with more shipments per week (more entries \
             to consolidate), a larger export or off-spec share, and a higher duty rate. \
             Lowering FTZ consulting, management or software costs helps directly. Adjust the \
             inputs and watch Net Savings to Brand."
            .to_string(),

        TemplateId::Methodology => format!(
            "The model annualises imports over {} weeks, removes duty on exported and off-spec \
             goods, caps MPF per entry (one entry per week with an FTZ), charges brokers per \
             entry, and adds each regime's operating costs. Net savings = fully loaded cost \
             without FTZ − with FTZ.",
            WEEKS_PER_YEAR,
        ),
    }
}

//! Cost model tests: reference scenario fixture and row conventions.

use ftz_core::{
    config::ModelConfig,
    cost_model::{compute, LineItem},
    params::{InputParameters, OperatingCosts},
};

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: got {actual}, expected {expected}"
    );
}

/// The reference scenario pinned as a regression fixture.
#[test]
fn reference_scenario_matches_spreadsheet() {
    let f = compute(&InputParameters::default(), &ModelConfig::default());

    assert_close(f.total_import_value, 5_200_000.0, "total_import_value");
    assert_eq!(f.entries_per_year, 104);
    assert_close(f.total_duty, 1_560_000.0, "total_duty");
    assert_close(f.duty_saved_export, 15_600.0, "duty_saved_export");
    assert_close(f.duty_saved_offspec, 3_900.0, "duty_saved_offspec");
    assert_close(f.net_duty_with_ftz, 1_540_500.0, "net_duty_with_ftz");

    // 104 × min(173.20, cap) vs 52 × min(346.40, cap)
    assert_close(f.mpf_without_ftz, 18_012.8, "mpf_without_ftz");
    assert_close(f.mpf_with_ftz, 18_012.8, "mpf_with_ftz");

    assert_close(f.hmf, 125.0, "hmf");
    assert_close(f.broker_hmf_without_ftz, 13_125.0, "broker_hmf_without_ftz");
    assert_close(f.broker_hmf_with_ftz, 6_625.0, "broker_hmf_with_ftz");

    assert_close(f.totals_without_ftz, 1_591_137.8, "totals_without_ftz");
    assert_close(f.totals_with_ftz, 1_565_137.8, "totals_with_ftz");
    assert_close(f.operating_costs_with_ftz, 241_000.0, "operating_costs_with_ftz");
    assert_close(f.operating_costs_without_ftz, 0.0, "operating_costs_without_ftz");
    assert_close(f.fully_loaded_without_ftz, 1_591_137.8, "fully_loaded_without_ftz");
    assert_close(f.fully_loaded_with_ftz, 1_806_137.8, "fully_loaded_with_ftz");
    assert_close(f.net_savings_to_brand, -215_000.0, "net_savings_to_brand");
}

/// The MPF cap binds on the consolidated weekly entry long before it binds per shipment.
#[test]
fn mpf_cap_binds_on_weekly_entry() {
    let params = InputParameters {
        shipments_per_week: 10,
        ..InputParameters::default()
    };
    let f = compute(&params, &ModelConfig::default());

    // Per shipment: 50,000 × 0.003464 = 173.20, under the cap.
    assert_close(f.mpf_without_ftz, 173.2 * 520.0, "mpf_without_ftz");
    // Per week: 500,000 × 0.003464 = 1,732 → capped at 634.62.
    assert_close(f.mpf_with_ftz, 634.62 * 52.0, "mpf_with_ftz");
    assert!(f.mpf_savings() > 0.0);
}

/// A configured cap replaces the statutory default.
#[test]
fn mpf_cap_is_configurable() {
    let config = ModelConfig {
        mpf_cap_per_entry: 100.0,
        ..ModelConfig::default()
    };
    let f = compute(&InputParameters::default(), &config);

    assert_close(f.mpf_without_ftz, 100.0 * 104.0, "mpf_without_ftz");
    assert_close(f.mpf_with_ftz, 100.0 * 52.0, "mpf_with_ftz");
    assert_eq!(f.mpf_cap_per_entry, 100.0);
}

/// Duty-saving rows: Without = 0, With = −saved, Savings = +saved.
#[test]
fn duty_saving_rows_use_their_own_sign_convention() {
    let f = compute(&InputParameters::default(), &ModelConfig::default());

    let export = f.row(LineItem::DutySavedExport);
    assert_eq!(export.without_ftz, 0.0);
    assert_close(export.with_ftz, -15_600.0, "export with");
    assert_close(export.savings, 15_600.0, "export savings");

    let offspec = f.row(LineItem::DutySavedOffSpec);
    assert_eq!(offspec.without_ftz, 0.0);
    assert_close(offspec.with_ftz, -3_900.0, "offspec with");
    assert_close(offspec.savings, 3_900.0, "offspec savings");

    let duty = f.row(LineItem::TotalDuty);
    assert_eq!(duty.without_ftz, duty.with_ftz);
    assert_eq!(duty.savings, 0.0);
}

/// Every other row: Savings = Without − With; the last row carries net savings.
#[test]
fn remaining_rows_subtract() {
    let f = compute(&InputParameters::default(), &ModelConfig::default());

    for row in f.rows() {
        match row.item {
            LineItem::TotalDuty | LineItem::DutySavedExport | LineItem::DutySavedOffSpec => {}
            _ => assert_close(
                row.savings,
                row.without_ftz - row.with_ftz,
                row.item.label(),
            ),
        }
    }

    let bottom = f.row(LineItem::NetSavingsToBrand);
    assert_eq!(bottom.savings, f.net_savings_to_brand);
    assert_eq!(bottom.without_ftz, f.fully_loaded_without_ftz);
    assert_eq!(bottom.with_ftz, f.fully_loaded_with_ftz);
}

/// Operating cost rows show each regime's line items independently.
#[test]
fn operating_cost_rows_per_regime() {
    let params = InputParameters {
        noftz_operating: OperatingCosts::new(1_000.0, 0.0, 500.0, 0.0),
        ..InputParameters::default()
    };
    let f = compute(&params, &ModelConfig::default());

    let consulting = f.row(LineItem::Consulting);
    assert_eq!(consulting.without_ftz, 1_000.0);
    assert_eq!(consulting.with_ftz, 50_000.0);
    assert_eq!(consulting.savings, -49_000.0);

    let total = f.row(LineItem::TotalOperatingCosts);
    assert_eq!(total.without_ftz, 1_500.0);
    assert_eq!(total.with_ftz, 241_000.0);
}

/// Labels are the captions of the comparison table, in order.
#[test]
fn thirteen_rows_with_captions() {
    let f = compute(&InputParameters::default(), &ModelConfig::default());
    let labels: Vec<_> = f.rows().iter().map(|r| r.item.label()).collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0], "Total Duty");
    assert_eq!(labels[5], "Total Broker Costs + HMF");
    assert_eq!(labels[12], "Net Savings to Brand");
}

/// Without program costs, a high-volume importer comes out ahead.
#[test]
fn positive_savings_without_program_costs() {
    let params = InputParameters {
        shipments_per_week: 20,
        export_sales_pct: 10.0,
        ftz_operating: OperatingCosts::default(),
        ..InputParameters::default()
    };
    let f = compute(&params, &ModelConfig::default());
    assert!(
        f.net_savings_to_brand > 0.0,
        "expected positive savings, got {}",
        f.net_savings_to_brand
    );
    assert_close(f.net_savings_to_brand, f.gross_savings(), "net vs gross");
}

/// Zero rates collapse duty and fees to zero instead of failing.
#[test]
fn zero_rates_degrade_to_zero() {
    let params = InputParameters {
        avg_duty_pct: 0.0,
        mpf_pct: 0.0,
        hmf_pct: 0.0,
        broker_cost: 0.0,
        ..InputParameters::default()
    };
    let f = compute(&params, &ModelConfig::default());
    assert_eq!(f.total_duty, 0.0);
    assert_eq!(f.mpf_without_ftz, 0.0);
    assert_eq!(f.broker_hmf_with_ftz, 0.0);
    assert_close(f.net_savings_to_brand, -241_000.0, "net_savings_to_brand");
}

/// Rows serialize with snake_case item keys for the JSON report.
#[test]
fn rows_serialize_with_snake_case_items() {
    let f = compute(&InputParameters::default(), &ModelConfig::default());
    let rows = serde_json::to_value(f.rows()).unwrap();

    assert_eq!(rows[0]["item"], "total_duty");
    assert_eq!(rows[12]["item"], "net_savings_to_brand");
    assert_eq!(rows[12]["savings"], serde_json::json!(f.net_savings_to_brand));
}

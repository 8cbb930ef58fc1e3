//! Integration tests for the cost engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - The reference single-role payroll case
//! - Multi-role rosters across all three phases
//! - ROM fee gross-up and its undefined case
//! - Coverage against payroll cost and total fee
//! - Lenient input handling (fraction/percentage mixes, unparsable cells)
//! - Allocation warnings
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use cm_cost_engine::api::{AppState, create_router};
use cm_cost_engine::calculation::{compute_costs, coverage, normalize_percent, required_fee, validate_rows};
use cm_cost_engine::config::ConfigLoader;
use cm_cost_engine::models::{LenientNumber, PhaseDurations, RoleEntry};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/cm_default").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_estimate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/estimate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn role(name: &str, pre: Value, con: Value, post: Value, compensation: Value) -> Value {
    json!({
        "name": name,
        "pre_pct": pre,
        "con_pct": con,
        "post_pct": post,
        "total_compensation": compensation
    })
}

fn create_request(
    weeks: (u32, u32, u32),
    burden: &str,
    overhead: &str,
    profit: &str,
    budget: &str,
    proposals: (&str, &str, &str),
    roster: Vec<Value>,
) -> Value {
    json!({
        "phase_weeks": { "pre_weeks": weeks.0, "con_weeks": weeks.1, "post_weeks": weeks.2 },
        "burden_percent": burden,
        "overhead_percent": overhead,
        "profit_percent": profit,
        "project_budget": budget,
        "proposals": { "low": proposals.0, "mid": proposals.1, "high": proposals.2 },
        "roster": roster
    })
}

fn assert_decimal_approx(actual: &Value, expected: &str, dp: u32) {
    let actual = decimal(actual.as_str().unwrap()).round_dp(dp);
    let expected = decimal(expected);
    assert_eq!(actual, expected, "Expected {}, got {}", expected, actual);
}

// =============================================================================
// SECTION 1: Payroll cost
// =============================================================================

#[tokio::test]
async fn test_reference_single_role() {
    // 100000 * 1.15 * (0.3 * 0.5 + 0.3 * 0.5) = 34500
    let request = create_request(
        (26, 26, 0),
        "15",
        "0",
        "0",
        "0",
        ("0", "0", "0"),
        vec![role("CM", json!(30), json!(30), json!(30), json!(100000))],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["costs"]["roles"][0];
    assert_decimal_approx(&row["loaded_annual"], "115000", 2);
    assert_decimal_approx(&row["project_year_fraction"], "0.30", 4);
    assert_decimal_approx(&row["project_cost"], "34500", 2);
    assert_decimal_approx(&result["totals"]["total_payroll_cost"], "34500", 2);
}

#[tokio::test]
async fn test_full_team_across_three_phases() {
    // Fractions: 13/52 = 0.25, 39/52 = 0.75, 13/52 = 0.25; no burden.
    // CM:          160000 * (0.5*0.25 + 0.5*0.75 + 0.5*0.25) = 100000
    // Site Manager 120000 * (0*0.25 + 1*0.75 + 0.2*0.25)     =  96000
    // Estimator:    90000 * (0.4*0.25)                       =   9000
    let request = create_request(
        (13, 39, 13),
        "0",
        "0",
        "0",
        "0",
        ("0", "0", "0"),
        vec![
            role("CM", json!(50), json!("50"), json!(0.5), json!(160000)),
            role("Site Manager", json!(0), json!(100), json!(20), json!("120 000")),
            role("Estimator", json!(40), json!(0), json!(0), json!(90000)),
        ],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let roles = result["costs"]["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 3);
    assert_decimal_approx(&roles[0]["project_cost"], "100000", 2);
    assert_decimal_approx(&roles[1]["project_cost"], "96000", 2);
    assert_decimal_approx(&roles[2]["project_cost"], "9000", 2);
    assert_decimal_approx(&result["totals"]["total_payroll_cost"], "205000", 2);
    assert_eq!(result["metrics"][0]["display"], "$205 000");
}

#[tokio::test]
async fn test_unparsable_cells_count_as_zero() {
    let request = create_request(
        (0, 52, 0),
        "0",
        "0",
        "0",
        "0",
        ("0", "0", "0"),
        vec![
            role("CM", json!(null), json!("full"), json!(0), json!(100000)),
            role("Coordinator", json!(0), json!(100), json!(0), json!("TBD")),
        ],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_approx(&result["totals"]["total_payroll_cost"], "0", 2);
    assert_eq!(
        result["interpretation"][0]["message"],
        "Enter team and durations to compute payroll cost."
    );
}

// =============================================================================
// SECTION 2: ROM fee and totals
// =============================================================================

#[tokio::test]
async fn test_rom_fee_grosses_up_payroll() {
    // Payroll 52 weeks * 100% * 100000 = 100000; ROM = 100000 / 0.85
    let request = create_request(
        (0, 52, 0),
        "0",
        "10",
        "5",
        "1 000 000",
        ("0", "0", "0"),
        vec![role("CM", json!(0), json!(100), json!(0), json!(100000))],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let totals = &result["totals"];
    assert_decimal_approx(&totals["rom_fee"], "117647.06", 2);
    assert_decimal_approx(&totals["overhead_dollars"], "100000", 2);
    assert_decimal_approx(&totals["profit_dollars"], "50000", 2);
    assert_decimal_approx(&totals["total_fee"], "250000", 2);
    assert_eq!(result["rom_fee_display"], "$117 647");
}

#[tokio::test]
async fn test_rom_fee_undefined_when_markups_exceed_revenue() {
    let request = create_request(
        (0, 52, 0),
        "0",
        "60",
        "45",
        "0",
        ("0", "100000", "0"),
        vec![role("CM", json!(0), json!(100), json!(0), json!(100000))],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["totals"]["rom_fee"].is_null());
    assert_eq!(result["rom_fee_display"], "—");
    assert_eq!(result["interpretation"][0]["level"], "error");
    assert_eq!(
        result["interpretation"][0]["message"],
        "Overhead% + Profit% must be less than 100% to compute ROM fee."
    );
    // No ROM message when the ROM fee is undefined.
    assert_eq!(result["interpretation"].as_array().unwrap().len(), 2);
}

// =============================================================================
// SECTION 3: Coverage
// =============================================================================

#[tokio::test]
async fn test_coverage_table_against_payroll_and_total_fee() {
    // Payroll 100000, budget 500000 @ 10% + 5% -> total fee 175000
    let request = create_request(
        (0, 52, 0),
        "0",
        "10",
        "5",
        "500000",
        ("50000", "150 000", "200000"),
        vec![role("CM", json!(0), json!(100), json!(0), json!(100000))],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let rows = result["coverage"].as_array().unwrap();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["proposal"], "low");
    assert_decimal_approx(&rows[0]["payroll_coverage"], "50", 2);
    assert_eq!(rows[0]["payroll_status"], "below");

    assert_decimal_approx(&rows[1]["payroll_coverage"], "150", 2);
    assert_eq!(rows[1]["payroll_status"], "covered");
    assert_decimal_approx(&rows[1]["fee_coverage"], "85.71", 2);
    assert_eq!(rows[1]["fee_status"], "below");

    assert_decimal_approx(&rows[2]["fee_coverage"], "114.29", 2);
    assert_eq!(rows[2]["fee_status"], "covered");

    let display = result["coverage_display"].as_array().unwrap();
    assert_eq!(display[1]["proposal"], "Mid");
    assert_eq!(display[1]["fee"], "$150 000");
    assert_eq!(display[1]["payroll_covered"], "150.0%");
    assert_eq!(display[1]["fee_covered"], "85.7%");

    let messages: Vec<&str> = result["interpretation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Mid proposal covers payroll cost (≥ 100%).",
            "Mid proposal is below ROM required fee (overhead/profit not fully covered)."
        ]
    );
}

#[tokio::test]
async fn test_coverage_without_costs_has_no_result() {
    let request = create_request(
        (0, 0, 0),
        "15",
        "0",
        "0",
        "0",
        ("50000", "60000", "70000"),
        vec![],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    for row in result["coverage"].as_array().unwrap() {
        assert!(row["payroll_coverage"].is_null());
        assert!(row["fee_coverage"].is_null());
        assert_eq!(row["payroll_status"], "undefined");
    }
    assert_eq!(result["coverage_display"][0]["payroll_covered"], "—");
}

// =============================================================================
// SECTION 4: Allocation warnings
// =============================================================================

#[tokio::test]
async fn test_over_allocated_row_warns_and_still_computes() {
    let request = create_request(
        (0, 52, 0),
        "0",
        "0",
        "0",
        "0",
        ("0", "0", "0"),
        vec![
            role("CM", json!(30), json!(30), json!(40), json!(100000)),
            role("Site Manager", json!(30), json!(30), json!(45), json!(100000)),
        ],
    );

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "PHASE_OVER_ALLOCATED");
    assert_eq!(
        warnings[0]["message"],
        "Row 2 (Site Manager): Pre+Con+Post = 105.0% (should be ≤ 100%)."
    );
    assert_decimal_approx(&result["totals"]["total_payroll_cost"], "60000", 2);
}

// =============================================================================
// SECTION 5: Error cases
// =============================================================================

#[tokio::test]
async fn test_negative_burden_is_rejected() {
    let request = json!({ "burden_percent": -1 });

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_roster_of_wrong_shape_is_rejected() {
    let request = json!({ "roster": "CM" });

    let (status, result) = post_estimate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/estimate")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// SECTION 6: Library contract
// =============================================================================

#[test]
fn test_library_contract_examples() {
    assert_eq!(normalize_percent(&LenientNumber::from("0.3")), decimal("0.3"));
    assert_eq!(normalize_percent(&LenientNumber::from("30")), decimal("0.3"));
    assert_eq!(normalize_percent(&LenientNumber::from("?")), Decimal::ZERO);

    let costs = compute_costs(&[], &PhaseDurations::default(), decimal("0.15"));
    assert_eq!(costs.total_payroll_cost, Decimal::ZERO);

    assert_eq!(
        required_fee(decimal("100000"), decimal("0.60"), decimal("0.45")),
        None
    );
    assert_eq!(coverage(decimal("150000"), decimal("100000")), Some(decimal("150")));
    assert_eq!(coverage(decimal("1"), Decimal::ZERO), None);

    let roster = vec![RoleEntry::new("CM", 30, 30, 40, 0)];
    assert!(validate_rows(&roster).is_empty());
}

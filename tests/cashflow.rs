use solar_roi_calculator::{cashflow, chart, projection};

#[test]
fn series_has_years_plus_one_entries() {
    let series = cashflow::project(375_000.0, 50_750.0, 0.03, 25);
    assert_eq!(series.len(), 26);
    assert_eq!(series[0], -375_000.0);

    // 연수 매개변수는 일반적이어야 한다.
    assert_eq!(cashflow::project(100.0, 10.0, 0.0, 0).len(), 1);
    assert_eq!(cashflow::project(100.0, 10.0, 0.05, 40).len(), 41);
}

#[test]
fn escalation_applies_to_original_savings() {
    let savings = 50_750.0;
    let series = cashflow::project(375_000.0, savings, 0.03, 25);
    for i in 1..=25 {
        let delta = series[i] - series[i - 1];
        let expected = savings * 1.03f64.powi(i as i32 - 1);
        assert!(
            (delta - expected).abs() < 1e-6,
            "year {i}: delta={delta} expected={expected}"
        );
    }
}

#[test]
fn minimum_area_scenario() {
    let r = projection::compute(10.0);
    assert!((r.system_size_kw - 1.0).abs() < 1e-9);
    assert!((r.system_cost - 75_000.0).abs() < 1e-9);
    // 연간 절감액 = 1450 kWh × ₩7 = ₩10,150
    assert!((r.annual_savings - 10_150.0).abs() < 1e-9);
    let series = cashflow::project(
        r.system_cost,
        r.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    assert_eq!(series[0], -75_000.0);
    assert!((series[1] - (-64_850.0)).abs() < 1e-6);
}

#[test]
fn payback_year_is_first_nonnegative_balance() {
    let r = projection::compute(50.0);
    let series = cashflow::project(
        r.system_cost,
        r.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    let payback = cashflow::payback_year(&series).expect("recoups within horizon");
    assert!(payback >= 1 && payback <= 25);
    assert!(series[payback] >= 0.0);
    assert!(series[payback - 1] < 0.0);

    // 절감액이 0이면 영원히 회수되지 않는다.
    let never = cashflow::project(1000.0, 0.0, 0.03, 25);
    assert_eq!(cashflow::payback_year(&never), None);
}

#[test]
fn theme_toggle_leaves_numbers_untouched() {
    let before = projection::compute(120.0);
    let series_before = cashflow::project(
        before.system_cost,
        before.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    let theme = chart::Theme::Light.toggled();
    assert_eq!(theme, chart::Theme::Dark);
    assert_ne!(chart::palette(chart::Theme::Light), chart::palette(theme));
    let after = projection::compute(120.0);
    let series_after = cashflow::project(
        after.system_cost,
        after.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    assert_eq!(before, after);
    assert_eq!(series_before, series_after);
}

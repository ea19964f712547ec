use solar_roi_calculator::projection::{
    self, ANNUAL_GEN_PER_KW, CO2_PER_KWH, COST_PER_KW, ENERGY_RATE, SQM_PER_KW, TREES_PER_TON_CO2,
};

const EPS: f64 = 1e-9;

#[test]
fn formulas_hold_exactly() {
    for area in [0.0, 10.0, 37.0, 250.0, 500.0] {
        let r = projection::compute(area);
        assert!((r.system_size_kw - area / SQM_PER_KW).abs() < EPS);
        assert!((r.system_cost - r.system_size_kw * COST_PER_KW).abs() < EPS);
        assert!((r.annual_production_kwh - r.system_size_kw * ANNUAL_GEN_PER_KW).abs() < EPS);
        assert!((r.annual_savings - r.annual_production_kwh * ENERGY_RATE).abs() < EPS);
        assert!(
            (r.co2_savings_tons - r.annual_production_kwh * CO2_PER_KWH / 1000.0).abs() < EPS
        );
        assert!((r.trees_planted - r.co2_savings_tons * TREES_PER_TON_CO2).abs() < EPS);
    }
}

#[test]
fn all_fields_nonnegative_and_monotonic() {
    let mut prev = projection::compute(0.0);
    for area in (0..=500).step_by(10) {
        let r = projection::compute(f64::from(area));
        assert!(r.system_size_kw >= 0.0);
        assert!(r.system_cost >= 0.0);
        assert!(r.annual_production_kwh >= 0.0);
        assert!(r.annual_savings >= 0.0);
        assert!(r.co2_savings_tons >= 0.0);
        assert!(r.trees_planted >= 0.0);
        assert!(r.system_size_kw >= prev.system_size_kw);
        assert!(r.system_cost >= prev.system_cost);
        assert!(r.annual_production_kwh >= prev.annual_production_kwh);
        assert!(r.annual_savings >= prev.annual_savings);
        assert!(r.co2_savings_tons >= prev.co2_savings_tons);
        assert!(r.trees_planted >= prev.trees_planted);
        prev = r;
    }
}

#[test]
fn compute_is_pure() {
    let a = projection::compute(123.0);
    let b = projection::compute(123.0);
    assert_eq!(a, b);
}

#[test]
fn reference_scenario_area_50() {
    let r = projection::compute(50.0);
    assert!((r.system_size_kw - 5.0).abs() < EPS);
    assert!((r.annual_production_kwh - 7250.0).abs() < EPS);
    assert!((r.system_cost - 375_000.0).abs() < EPS);
    assert!((r.annual_savings - 50_750.0).abs() < EPS);
    assert!((r.co2_savings_tons - 5.945).abs() < 1e-6);
    assert!((r.trees_planted - 297.25).abs() < 1e-6);
}

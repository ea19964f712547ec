//! 지붕 면적으로부터 태양광 설비 규모와 연간 경제/환경 지표를 산출한다.

/// 1kW 용량에 필요한 지붕 면적 [m²/kW]
pub const SQM_PER_KW: f64 = 10.0;
/// 1kW당 연간 발전량 [kWh/kW·년]
pub const ANNUAL_GEN_PER_KW: f64 = 1450.0;
/// 1kW당 설치 비용 [₩/kW]
pub const COST_PER_KW: f64 = 75_000.0;
/// 전력 요금 단가 [₩/kWh]
pub const ENERGY_RATE: f64 = 7.0;
/// 계통 전력 CO₂ 배출 계수 [kg/kWh]
pub const CO2_PER_KWH: f64 = 0.82;
/// CO₂ 1톤/년 상쇄에 해당하는 나무 수 [그루/톤]
pub const TREES_PER_TON_CO2: f64 = 50.0;
/// 연간 절감액 상승률 (고정 3%)
pub const SAVINGS_ESCALATION_RATE: f64 = 0.03;
/// 누적 절감 전망 기간 [년]
pub const PROJECTION_YEARS: u32 = 25;

/// 면적 기반 투자 전망 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// 설비 용량 [kW]
    pub system_size_kw: f64,
    /// 총 설치 비용 [₩]
    pub system_cost: f64,
    /// 연간 발전량 [kWh/년]
    pub annual_production_kwh: f64,
    /// 연간 전기요금 절감액 [₩/년]
    pub annual_savings: f64,
    /// 연간 CO₂ 절감량 [톤/년]
    pub co2_savings_tons: f64,
    /// 상응하는 식수 효과 [그루]
    pub trees_planted: f64,
}

/// 지붕 면적[m²]으로부터 전망 지표를 계산한다.
///
/// 순수 함수이며 음수가 아닌 유한 입력에 대해 항상 성공한다. 입력 범위
/// 제한([10,500] 등)은 호출 측 컨트롤러가 담당한다.
pub fn compute(area_m2: f64) -> ProjectionResult {
    let system_size_kw = area_m2 / SQM_PER_KW;
    let annual_production_kwh = system_size_kw * ANNUAL_GEN_PER_KW;
    let system_cost = system_size_kw * COST_PER_KW;
    let annual_savings = annual_production_kwh * ENERGY_RATE;
    let co2_savings_kg = annual_production_kwh * CO2_PER_KWH;
    let co2_savings_tons = co2_savings_kg / 1000.0;
    let trees_planted = co2_savings_tons * TREES_PER_TON_CO2;
    ProjectionResult {
        system_size_kw,
        system_cost,
        annual_production_kwh,
        annual_savings,
        co2_savings_tons,
        trees_planted,
    }
}

//! 초기 투자비와 연간 절감액으로부터 누적 현금흐름 시계열을 만든다.

/// 연도별 누적 잔액 시계열을 계산한다. 반환 길이는 `years + 1`.
///
/// 0년차 잔액은 `-system_cost`, i년차(i≥1)는 직전 잔액에
/// `annual_savings × (1+escalation_rate)^(i-1)`을 더한 값이다. 상승률은
/// 매년 원래 절감액에 독립적으로 적용되며 잔액에 복리되지 않는다.
pub fn project(
    system_cost: f64,
    annual_savings: f64,
    escalation_rate: f64,
    years: u32,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(years as usize + 1);
    let mut balance = -system_cost;
    series.push(balance);
    for year in 1..=years {
        balance += annual_savings * (1.0 + escalation_rate).powi(year as i32 - 1);
        series.push(balance);
    }
    series
}

/// 누적 잔액이 처음으로 0 이상이 되는 연차를 반환한다. 기간 내 회수되지
/// 않으면 None.
pub fn payback_year(series: &[f64]) -> Option<usize> {
    series.iter().position(|balance| *balance >= 0.0)
}

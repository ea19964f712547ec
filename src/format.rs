//! 화면 표시용 숫자/통화 포맷터. 로케일·통화 쌍은 프로세스 수명 동안
//! ₩ + 3자리 그룹으로 고정된다.

/// 통화 기호.
pub const CURRENCY_SYMBOL: &str = "₩";

/// 통화 문자열로 포맷한다. 소수부 없음, 음수는 기호 앞에 부호를 붙인다.
/// 예: 375000.0 → "₩375,000", -64850.0 → "-₩64,850"
pub fn currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let grouped = group_thousands(rounded.abs() as u64);
    if negative {
        format!("-{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{grouped}")
    }
}

/// 일반 숫자를 최대 `max_decimals`자리 소수로 포맷한다.
///
/// 반올림은 이 함수에서 한 번만 수행한다. 호출 전에 별도로 반올림한 값을
/// 넘기면 표시 자릿수가 어긋날 수 있으므로 원시 값을 그대로 넘긴다.
/// 소수부의 후행 0은 제거한다. 예: number(5.0, 1) → "5", number(5.945, 1) → "5.9"
pub fn number(value: f64, max_decimals: u32) -> String {
    let scale = 10f64.powi(max_decimals as i32);
    let rounded = (value * scale).round() / scale;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if max_decimals > 0 {
        let mut frac = format!("{:.*}", max_decimals as usize, abs.fract());
        // "0.xxx" 형태에서 소수부만 취한다.
        frac.drain(..2);
        let trimmed = frac.trim_end_matches('0');
        if !trimmed.is_empty() {
            out.push('.');
            out.push_str(trimmed);
        }
    }
    out
}

/// 천 단위 구분 기호를 삽입한다.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups: Vec<String> = Vec::new();
    while value > 0 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    let mut out = groups.pop().unwrap_or_default();
    // 최상위 그룹의 선행 0 제거
    out = out.trim_start_matches('0').to_string();
    while let Some(g) = groups.pop() {
        out.push(',');
        out.push_str(&g);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_signs() {
        assert_eq!(currency(375_000.0), "₩375,000");
        assert_eq!(currency(-64_850.0), "-₩64,850");
        assert_eq!(currency(0.0), "₩0");
        assert_eq!(currency(50_750.4), "₩50,750");
    }

    #[test]
    fn number_rounds_once_and_trims() {
        assert_eq!(number(5.0, 1), "5");
        assert_eq!(number(5.945, 1), "5.9");
        assert_eq!(number(7250.0, 0), "7,250");
        assert_eq!(number(297.25, 0), "297");
        assert_eq!(number(-12.34, 1), "-12.3");
    }
}

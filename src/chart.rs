//! 누적 절감 차트에 공급할 데이터와 테마별 스타일을 준비한다. 실제
//! 렌더링은 GUI 쪽 egui_plot이 담당한다.

use crate::format;

/// 차트 색상 테마.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// RGB 색상.
pub type Rgb = (u8, u8, u8);

/// 차트에 적용할 색 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    /// 축 제목/범례 글자색
    pub text: Rgb,
    /// 격자선 색
    pub grid: Rgb,
    /// 눈금 라벨 색
    pub tick: Rgb,
    /// 데이터 선 색
    pub line: Rgb,
    /// 면 채움 색
    pub fill: Rgb,
}

/// 테마에 해당하는 팔레트. 라이트는 따뜻한 갈색 계열, 다크는 어두운 배경
/// 위의 밝은 회색 계열.
pub fn palette(theme: Theme) -> ChartPalette {
    match theme {
        Theme::Light => ChartPalette {
            text: (93, 64, 55),
            grid: (215, 204, 200),
            tick: (141, 110, 99),
            line: (230, 126, 34),
            fill: (243, 156, 18),
        },
        Theme::Dark => ChartPalette {
            text: (224, 224, 224),
            grid: (66, 66, 66),
            tick: (189, 189, 189),
            line: (255, 167, 38),
            fill: (255, 183, 77),
        },
    }
}

/// 시계열을 (연차, 잔액) 좌표로 변환한다.
pub fn series_points(series: &[f64]) -> Vec<[f64; 2]> {
    series
        .iter()
        .enumerate()
        .map(|(year, balance)| [year as f64, *balance])
        .collect()
}

/// X축 눈금 라벨. 짝수 연차 정수 눈금만 "Year N"으로 표시하고 나머지는
/// 숨긴다.
pub fn x_tick_label(x: f64) -> Option<String> {
    let year = x.round();
    if (x - year).abs() > 1e-6 {
        return None;
    }
    let year = year as i64;
    if year < 0 || year % 2 != 0 {
        return None;
    }
    Some(format!("Year {year}"))
}

/// Y축 눈금 라벨. 천 단위 통화에 k 접미사를 붙인다. 예: 375000 → "₩375k"
pub fn y_tick_label(value: f64) -> String {
    let thousands = (value / 1000.0).round() as i64;
    if thousands < 0 {
        format!("-{}{}k", format::CURRENCY_SYMBOL, -thousands)
    } else {
        format!("{}{}k", format::CURRENCY_SYMBOL, thousands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_year_ticks_only() {
        assert_eq!(x_tick_label(0.0).as_deref(), Some("Year 0"));
        assert_eq!(x_tick_label(24.0).as_deref(), Some("Year 24"));
        assert_eq!(x_tick_label(7.0), None);
        assert_eq!(x_tick_label(12.5), None);
        assert_eq!(x_tick_label(-2.0), None);
    }

    #[test]
    fn y_ticks_in_thousands() {
        assert_eq!(y_tick_label(375_000.0), "₩375k");
        assert_eq!(y_tick_label(-75_000.0), "-₩75k");
        assert_eq!(y_tick_label(0.0), "₩0k");
    }

    #[test]
    fn points_enumerate_years() {
        let pts = series_points(&[-100.0, -40.0, 30.0]);
        assert_eq!(pts, vec![[0.0, -100.0], [1.0, -40.0], [2.0, 30.0]]);
    }
}

//! 면적 입력 상태 머신. 슬라이더/버튼 입력을 [10,500] 범위의 정수로
//! 관리한다.

/// 면적 최소값 [m²]
pub const AREA_MIN: u32 = 10;
/// 면적 최대값 [m²]
pub const AREA_MAX: u32 = 500;
/// 버튼 증감 폭 [m²]
pub const AREA_STEP: u32 = 5;
/// 시작 기본 면적 [m²]
pub const AREA_DEFAULT: u32 = 50;

/// 현재 입력 면적의 단일 소유자.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaState {
    value: u32,
}

impl Default for AreaState {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaState {
    pub fn new() -> Self {
        Self { value: AREA_DEFAULT }
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: value.clamp(AREA_MIN, AREA_MAX),
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    /// 연속 컨트롤(슬라이더) 값을 그대로 반영한다. 범위 제한은 컨트롤
    /// 자체의 것을 신뢰한다.
    pub fn set(&mut self, value: u32) {
        self.value = value;
    }

    /// 범위를 벗어난 값은 경계로 잘라 반영한다.
    pub fn set_clamped(&mut self, value: u32) {
        self.value = value.clamp(AREA_MIN, AREA_MAX);
    }

    /// +5. 최대값에서는 아무 일도 하지 않는다. 값이 바뀌면 true.
    pub fn increment(&mut self) -> bool {
        if self.value < AREA_MAX {
            self.value = (self.value + AREA_STEP).min(AREA_MAX);
            true
        } else {
            false
        }
    }

    /// -5. 최소값에서는 아무 일도 하지 않는다. 값이 바뀌면 true.
    pub fn decrement(&mut self) -> bool {
        if self.value > AREA_MIN {
            self.value = self.value.saturating_sub(AREA_STEP).max(AREA_MIN);
            true
        } else {
            false
        }
    }
}

/// 텍스트 입력을 면적 값으로 해석한다. 잘못된 입력은 None(무시).
pub fn parse_area(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

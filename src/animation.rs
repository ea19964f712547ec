//! 표시 값 전환 애니메이션. 프레임마다 경과 시간을 샘플링해 선형 보간하고,
//! 완료 시 목표값에 정확히 고정한다.

use std::time::{Duration, Instant};

/// 값 전환 기본 시간.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(400);

/// 시작값에서 목표값으로 가는 단일 선형 보간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAnimation {
    start: f64,
    end: f64,
    duration: Duration,
}

impl ValueAnimation {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: ANIMATION_DURATION,
        }
    }

    pub fn with_duration(start: f64, end: f64, duration: Duration) -> Self {
        Self { start, end, duration }
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// 경과 시간에 해당하는 보간 값. 진행률은 [0,1]로 클램프하며 완료
    /// 시점 이후에는 보간 오차 없이 정확히 목표값을 반환한다.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            self.end
        } else {
            self.start + (self.end - self.start) * progress
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// 표시 슬롯 하나의 현재 값과 진행 중인 애니메이션.
///
/// 슬롯당 애니메이션은 항상 최대 한 개다. 진행 중에 새 목표가 들어오면
/// 현재 표시 중인 값에서 새 목표로 향하는 애니메이션으로 교체된다.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    shown: f64,
    active: Option<(Instant, ValueAnimation)>,
}

impl AnimatedValue {
    pub fn new(initial: f64) -> Self {
        Self {
            shown: initial,
            active: None,
        }
    }

    /// 현재 표시 값에서 `target`으로 새 애니메이션을 시작한다. 진행 중인
    /// 애니메이션이 있으면 대체한다.
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        if (target - self.shown).abs() < f64::EPSILON {
            self.active = None;
            self.shown = target;
            return;
        }
        self.active = Some((now, ValueAnimation::new(self.shown, target)));
    }

    /// 현재 시각 기준으로 표시 값을 갱신해 반환한다. 완료된 애니메이션은
    /// 목표값을 고정하고 해제한다.
    pub fn tick(&mut self, now: Instant) -> f64 {
        if let Some((started, anim)) = self.active {
            let elapsed = now.saturating_duration_since(started);
            self.shown = anim.value_at(elapsed);
            if anim.is_finished(elapsed) {
                self.shown = anim.end();
                self.active = None;
            }
        }
        self.shown
    }

    pub fn shown(&self) -> f64 {
        self.shown
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_linearly_and_pins_to_target() {
        let anim = ValueAnimation::new(0.0, 100.0);
        assert_eq!(anim.value_at(Duration::ZERO), 0.0);
        let mid = anim.value_at(Duration::from_millis(200));
        assert!((mid - 50.0).abs() < 1e-9);
        assert_eq!(anim.value_at(Duration::from_millis(400)), 100.0);
        // 진행률 클램프: 시간이 더 지나도 목표값 그대로.
        assert_eq!(anim.value_at(Duration::from_millis(4000)), 100.0);
    }

    #[test]
    fn decreasing_transition_is_monotonic_in_value() {
        let anim = ValueAnimation::new(100.0, 20.0);
        let mut prev = anim.value_at(Duration::ZERO);
        for ms in (0..=400).step_by(40) {
            let v = anim.value_at(Duration::from_millis(ms));
            assert!(v <= prev + 1e-9);
            prev = v;
        }
        assert_eq!(prev, 20.0);
    }

    #[test]
    fn retarget_starts_from_currently_shown_value() {
        let t0 = Instant::now();
        let mut slot = AnimatedValue::new(0.0);
        slot.animate_to(100.0, t0);
        let halfway = slot.tick(t0 + Duration::from_millis(200));
        assert!((halfway - 50.0).abs() < 1.0);
        // 절반 진행 시점에 새 목표 도착: 표시 중이던 값에서 다시 출발한다.
        slot.animate_to(10.0, t0 + Duration::from_millis(200));
        assert!(slot.is_animating());
        let v = slot.tick(t0 + Duration::from_millis(200));
        assert!((v - halfway).abs() < 1e-9);
        let done = slot.tick(t0 + Duration::from_millis(700));
        assert_eq!(done, 10.0);
        assert!(!slot.is_animating());
    }

    #[test]
    fn same_target_is_a_no_op() {
        let t0 = Instant::now();
        let mut slot = AnimatedValue::new(42.0);
        slot.animate_to(42.0, t0);
        assert!(!slot.is_animating());
        assert_eq!(slot.tick(t0 + Duration::from_millis(100)), 42.0);
    }
}

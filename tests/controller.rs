use solar_roi_calculator::controller::{self, AreaState};

#[test]
fn starts_at_default() {
    assert_eq!(AreaState::new().get(), 50);
}

#[test]
fn increment_boundaries() {
    let mut area = AreaState::with_value(500);
    assert!(!area.increment());
    assert_eq!(area.get(), 500);

    let mut area = AreaState::with_value(495);
    assert!(area.increment());
    assert_eq!(area.get(), 500);
}

#[test]
fn decrement_boundaries() {
    let mut area = AreaState::with_value(10);
    assert!(!area.decrement());
    assert_eq!(area.get(), 10);

    let mut area = AreaState::with_value(15);
    assert!(area.decrement());
    assert_eq!(area.get(), 10);
}

#[test]
fn stepping_stays_in_domain() {
    let mut area = AreaState::new();
    for _ in 0..200 {
        area.increment();
    }
    assert_eq!(area.get(), 500);
    for _ in 0..200 {
        area.decrement();
    }
    assert_eq!(area.get(), 10);
}

#[test]
fn clamped_set_and_parse() {
    let mut area = AreaState::new();
    area.set_clamped(9999);
    assert_eq!(area.get(), 500);
    area.set_clamped(3);
    assert_eq!(area.get(), 10);

    assert_eq!(controller::parse_area(" 120 "), Some(120));
    assert_eq!(controller::parse_area("abc"), None);
    assert_eq!(controller::parse_area("-5"), None);
    assert_eq!(controller::parse_area(""), None);
}

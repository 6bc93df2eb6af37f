use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn easing_is_symmetric_and_bounded() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!((ease_in_out_quad(0.25) + ease_in_out_quad(0.75) - 1.0).abs() < 1e-6);
    assert_eq!(ease_in_out_quad(-1.0), 0.0);
    assert_eq!(ease_in_out_quad(2.0), 1.0);
}

#[test]
fn clock_starts_at_first_tick() {
    let t0 = Instant::now();
    let mut v = AnimatedValue::new(0.0);
    v.animate_to(100.0, ms(200));

    assert!(!v.tick(t0 + ms(500)));
    assert_eq!(v.value(), 0.0);
    assert!(v.is_animating());

    assert!(!v.tick(t0 + ms(600)));
    assert_eq!(v.value(), 50.0);

    assert!(v.tick(t0 + ms(700)));
    assert_eq!(v.value(), 100.0);
    assert!(!v.is_animating());
    assert!(!v.tick(t0 + ms(800)));
}

#[test]
fn target_reports_destination() {
    let mut v = AnimatedValue::new(3.0);
    assert_eq!(v.target(), 3.0);
    v.animate_to(9.0, ms(10));
    assert_eq!(v.target(), 9.0);
    v.set(1.0);
    assert_eq!(v.target(), 1.0);
    assert!(!v.is_animating());
}

#[test]
fn retarget_starts_from_current_value() {
    let t0 = Instant::now();
    let mut v = AnimatedValue::new(0.0);
    v.animate_to(100.0, ms(100));
    v.tick(t0);
    v.tick(t0 + ms(50));
    let mid = v.value();

    v.animate_to(0.0, ms(100));
    v.tick(t0 + ms(50));
    assert_eq!(v.value(), mid);
    assert!(v.tick(t0 + ms(150)));
    assert_eq!(v.value(), 0.0);
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let mut v = AnimatedValue::new(0.0);
    v.animate_to(1.0, Duration::ZERO);
    assert!(v.tick(Instant::now()));
    assert_eq!(v.value(), 1.0);
}

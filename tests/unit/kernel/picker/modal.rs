use super::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn opened(t0: Instant) -> ModalLifecycle {
    let mut modal = ModalLifecycle::new(ModalTimings::default());
    assert_eq!(modal.set_visible(true), vec![ModalEvent::Mounted]);
    modal.tick(t0);
    assert_eq!(modal.tick(t0 + ms(300)), vec![ModalEvent::Opened]);
    modal
}

#[test]
fn opening_runs_fade_and_slide_concurrently() {
    let t0 = Instant::now();
    let mut modal = ModalLifecycle::new(ModalTimings::default());
    assert_eq!(modal.phase(), AnimationPhase::Closed);
    assert!(!modal.is_mounted());

    assert_eq!(modal.set_visible(true), vec![ModalEvent::Mounted]);
    assert_eq!(modal.phase(), AnimationPhase::Opening);
    assert!(modal.is_interactive());
    assert_eq!(modal.opacity(), 0.0);
    assert_eq!(modal.translate_y(), 300.0);

    assert!(modal.tick(t0).is_empty());
    assert!(modal.tick(t0 + ms(250)).is_empty());
    assert_eq!(modal.opacity(), 1.0);
    assert!(modal.translate_y() > 0.0);
    assert_eq!(modal.phase(), AnimationPhase::Opening);

    assert_eq!(modal.tick(t0 + ms(300)), vec![ModalEvent::Opened]);
    assert_eq!(modal.phase(), AnimationPhase::Open);
    assert_eq!(modal.translate_y(), 0.0);
    assert!(!modal.is_animating());
}

#[test]
fn surface_stays_mounted_for_the_whole_slide_down() {
    let t0 = Instant::now();
    let mut modal = opened(t0);
    let t1 = t0 + ms(1000);

    assert!(modal.set_visible(false).is_empty());
    assert_eq!(modal.phase(), AnimationPhase::Closing);
    assert!(!modal.is_interactive());
    assert!(modal.is_mounted());

    assert!(modal.tick(t1).is_empty());
    assert!(modal.tick(t1 + ms(200)).is_empty());
    assert_eq!(modal.opacity(), 0.0);
    assert!(modal.tick(t1 + ms(249)).is_empty());
    assert!(modal.is_mounted());

    assert_eq!(modal.tick(t1 + ms(250)), vec![ModalEvent::Unmounted]);
    assert_eq!(modal.phase(), AnimationPhase::Closed);
    assert_eq!(modal.translate_y(), 400.0);
}

#[test]
fn long_fade_out_keeps_surface_mounted_past_slide_down() {
    let t0 = Instant::now();
    let timings = ModalTimings {
        fade_out: ms(500),
        slide_down: ms(100),
        ..ModalTimings::default()
    };
    let mut modal = ModalLifecycle::new(timings);
    modal.set_visible(true);
    modal.tick(t0);
    assert_eq!(modal.tick(t0 + ms(300)), vec![ModalEvent::Opened]);

    let t1 = t0 + ms(1000);
    modal.set_visible(false);
    assert!(modal.tick(t1).is_empty());
    assert!(modal.tick(t1 + ms(150)).is_empty());
    assert_eq!(modal.phase(), AnimationPhase::Closing);
    assert_eq!(modal.translate_y(), 400.0);
    assert!(modal.opacity() > 0.0);
    assert!(modal.is_mounted());

    assert_eq!(modal.tick(t1 + ms(500)), vec![ModalEvent::Unmounted]);
    assert_eq!(modal.phase(), AnimationPhase::Closed);
    assert_eq!(modal.opacity(), 0.0);
}

#[test]
fn show_during_close_reopens_after_unmount() {
    let t0 = Instant::now();
    let mut modal = opened(t0);
    let t1 = t0 + ms(1000);
    modal.set_visible(false);
    modal.tick(t1);

    assert!(modal.set_visible(true).is_empty());
    assert!(modal.reopen_pending());
    assert_eq!(modal.phase(), AnimationPhase::Closing);

    assert_eq!(
        modal.tick(t1 + ms(250)),
        vec![ModalEvent::Unmounted, ModalEvent::Mounted]
    );
    assert_eq!(modal.phase(), AnimationPhase::Opening);
    assert!(!modal.reopen_pending());
    assert_eq!(modal.opacity(), 0.0);
    assert_eq!(modal.translate_y(), 300.0);
}

#[test]
fn hide_again_cancels_pending_reopen() {
    let t0 = Instant::now();
    let mut modal = opened(t0);
    let t1 = t0 + ms(1000);
    modal.set_visible(false);
    modal.tick(t1);
    modal.set_visible(true);
    modal.set_visible(false);
    assert!(!modal.reopen_pending());

    assert_eq!(modal.tick(t1 + ms(250)), vec![ModalEvent::Unmounted]);
    assert_eq!(modal.phase(), AnimationPhase::Closed);
}

#[test]
fn close_during_open_starts_from_current_values() {
    let t0 = Instant::now();
    let mut modal = ModalLifecycle::new(ModalTimings::default());
    modal.set_visible(true);
    modal.tick(t0);
    modal.tick(t0 + ms(150));
    let translate = modal.translate_y();
    assert!(translate > 0.0 && translate < 300.0);

    modal.set_visible(false);
    assert_eq!(modal.phase(), AnimationPhase::Closing);
    modal.tick(t0 + ms(150));
    assert_eq!(modal.translate_y(), translate);
}

#[test]
fn repeated_show_is_a_no_op() {
    let t0 = Instant::now();
    let mut modal = opened(t0);
    assert!(modal.set_visible(true).is_empty());
    assert_eq!(modal.phase(), AnimationPhase::Open);

    let mut closed = ModalLifecycle::new(ModalTimings::default());
    assert!(closed.set_visible(false).is_empty());
    assert_eq!(closed.phase(), AnimationPhase::Closed);
}

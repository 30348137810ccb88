// Host-side tests for the pointer overlay state machine.

use folio_core::{CursorModel, CursorPhase, CURSOR_SCALE_HOVER, CURSOR_SCALE_PRESSED};
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn press_and_release() {
    let mut c = CursorModel::default();
    c.on_move(Vec2::new(10.0, 10.0), false);
    c.on_press();
    assert_eq!(c.phase(), CursorPhase::Pressed);
    for _ in 0..20 {
        c.step_frame(FRAME);
    }
    assert!((c.frame().ring_scale - CURSOR_SCALE_PRESSED).abs() < 1e-4);
    c.on_release();
    assert_eq!(c.phase(), CursorPhase::Idle);
}

#[test]
fn blur_hides_regardless_of_state() {
    let mut c = CursorModel::default();
    c.on_move(Vec2::new(50.0, 50.0), true);
    c.on_press();
    c.on_blur();
    assert_eq!(c.phase(), CursorPhase::Hidden);
    assert_eq!(c.step_frame(FRAME).opacity, 0.0);
    assert!(!c.body_class_active());
}

#[test]
fn focus_restores_last_hover_state_without_movement() {
    let mut c = CursorModel::default();
    c.on_move(Vec2::new(50.0, 50.0), true);
    c.on_blur();
    c.on_focus();
    assert_eq!(c.phase(), CursorPhase::Hovering);
    assert_eq!(c.ring_scale_target(), CURSOR_SCALE_HOVER);
    assert_eq!(c.frame().opacity, 1.0);
    assert!(c.body_class_active());
}

#[test]
fn dot_follows_raw_position_immediately() {
    let mut c = CursorModel::default();
    c.on_move(Vec2::new(300.0, 120.0), false);
    let f = c.step_frame(FRAME);
    assert_eq!(f.dot_pos, Vec2::new(296.0, 116.0));
    assert!(f.ring_pos.x < 296.0);
}

#[test]
fn smoothing_runs_per_frame_not_per_event() {
    let mut c = CursorModel::default();
    for i in 0..100 {
        c.on_move(Vec2::new(i as f32, 0.0), false);
    }
    assert_eq!(c.pointer().smoothed, Vec2::ZERO);
    c.step_frame(FRAME);
    assert!((c.pointer().smoothed.x - 99.0 * 0.15).abs() < 1e-3);
}

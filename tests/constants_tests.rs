// Host-side tests for tuning constants and their relationships.

use folio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Fractions
    assert!(CURSOR_SMOOTHING > 0.0 && CURSOR_SMOOTHING <= 1.0);
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH <= 1.0);
    assert!(PARALLAX_SPEED > 0.0 && PARALLAX_SPEED <= 1.0);

    for t in [
        DEFAULT_VIEW_THRESHOLD,
        SECTION_VIEW_THRESHOLD,
        CARD_VIEW_THRESHOLD,
        TEXT_VIEW_THRESHOLD,
    ] {
        assert!(t > 0.0 && t <= 1.0, "threshold {}", t);
    }

    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG < 45.0);
    assert!(CURSOR_DOT_SIZE_PX < CURSOR_RING_SIZE_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_scales_are_ordered() {
    assert!(CURSOR_SCALE_PRESSED < CURSOR_SCALE_IDLE);
    assert!(CURSOR_SCALE_IDLE < CURSOR_SCALE_HOVER);
    assert!(CURSOR_PRESS_TWEEN_MS < CURSOR_HOVER_TWEEN_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn button_feedback_is_subtle() {
    assert!(BUTTON_PRESS_SCALE < 1.0 && BUTTON_PRESS_SCALE > 0.9);
    assert!(BUTTON_HOVER_SCALE > 1.0 && BUTTON_HOVER_SCALE < 1.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn contact_window_outlasts_submit() {
    assert!(CONTACT_SUCCESS_WINDOW_MS > CONTACT_SUBMIT_DELAY_MS);
    let timing = SiteConfig::default().contact_timing();
    assert_eq!(timing, ContactTiming::default());
}

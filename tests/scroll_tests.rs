// Host-side tests for page scroll progress and scroll-linked triggers.

use folio_core::{
    parallax_offset, scroll_progress, Replay, ScrollMetrics, ScrollProgress, ScrollTrigger,
    TriggerAction, TriggerLayout, TriggerMode, PARALLAX_SPEED,
};

fn metrics(scroll_top: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        document_height,
        viewport_height,
    }
}

#[test]
fn progress_is_always_in_unit_range() {
    for doc in [0.0, 500.0, 800.0, 801.0, 4000.0, 12345.0] {
        let mut top = -1000.0;
        while top <= 15000.0 {
            let p = scroll_progress(&metrics(top, doc, 800.0));
            assert!((0.0..=1.0).contains(&p), "top={} doc={} p={}", top, doc, p);
            top += 137.0;
        }
    }
}

#[test]
fn progress_endpoints() {
    assert_eq!(scroll_progress(&metrics(0.0, 4000.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(&metrics(3200.0, 4000.0, 800.0)), 1.0);
}

#[test]
fn content_no_taller_than_viewport_is_zero() {
    let p = scroll_progress(&metrics(0.0, 800.0, 800.0));
    assert_eq!(p, 0.0);
    assert!(!p.is_nan());
    assert_eq!(scroll_progress(&metrics(30.0, 300.0, 800.0)), 0.0);
}

#[test]
fn non_finite_input_is_zero() {
    assert_eq!(scroll_progress(&metrics(f64::NAN, 4000.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(&metrics(f64::INFINITY, 4000.0, 800.0)), 0.0);
}

#[test]
fn snapshot_tracks_nav_threshold() {
    let mut sp = ScrollProgress::new();
    assert!(!sp.update(&metrics(50.0, 4000.0, 800.0)).scrolled);
    assert!(sp.update(&metrics(51.0, 4000.0, 800.0)).scrolled);
    assert_eq!(sp.snapshot().scroll_top, 51.0);
}

#[test]
fn detail_hero_parallax_scrubs_over_its_height() {
    let layout = TriggerLayout {
        element_top: 0.0,
        element_height: 600.0,
        viewport_height: 900.0,
    };
    let mut t = ScrollTrigger::parse("top top", "bottom top", TriggerMode::Scrub)
        .expect("valid positions");
    assert_eq!(t.update(0.0, &layout), TriggerAction::Scrub(0.0));
    assert_eq!(t.update(300.0, &layout), TriggerAction::Scrub(0.5));
    assert_eq!(t.update(1200.0, &layout), TriggerAction::Scrub(1.0));
}

#[test]
fn toggle_once_ignores_reentry() {
    let layout = TriggerLayout {
        element_top: 2000.0,
        element_height: 500.0,
        viewport_height: 1000.0,
    };
    let mut t = ScrollTrigger::toggle(Replay::Once);
    let mut plays = 0;
    for y in [0.0, 1300.0, 0.0, 1300.0, 0.0, 1300.0] {
        if t.update(y, &layout) == TriggerAction::Play {
            plays += 1;
        }
    }
    assert_eq!(plays, 1);
}

#[test]
fn toggle_repeat_replays_each_entry() {
    let layout = TriggerLayout {
        element_top: 2000.0,
        element_height: 500.0,
        viewport_height: 1000.0,
    };
    let mut t = ScrollTrigger::toggle(Replay::Repeat);
    let actions: Vec<_> = [0.0, 1300.0, 0.0, 1300.0]
        .into_iter()
        .map(|y| t.update(y, &layout))
        .collect();
    assert_eq!(
        actions,
        vec![
            TriggerAction::None,
            TriggerAction::Play,
            TriggerAction::Reverse,
            TriggerAction::Play
        ]
    );
}

#[test]
fn parallax_is_linear_in_scroll() {
    let a = parallax_offset(100.0, 1000.0, 800.0, 0.5);
    let b = parallax_offset(300.0, 1000.0, 800.0, 0.5);
    assert_eq!(b - a, 100.0);
}

#[test]
fn drift_layer_starts_at_rest_when_it_enters_from_below() {
    // Top edge of the frame at 2000px, viewport 800px: it enters at 1200.
    let entering = parallax_offset(1200.0, 2000.0, 800.0, PARALLAX_SPEED);
    assert_eq!(entering, 0.0);
    let later = parallax_offset(1600.0, 2000.0, 800.0, PARALLAX_SPEED);
    assert_eq!(later, 200.0);
}

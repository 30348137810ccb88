// Host-side tests for text splitting and staggered scheduling.

use folio_core::content::{
    hero_greeting_options, hero_name_options, HERO_GREETING, HERO_NAME, HERO_TITLE_MODE,
};
use folio_core::{split_text, TextMode, TextOptions, NBSP};
use std::time::Duration;

#[test]
fn wave_greeting_has_one_unit_per_character() {
    let s = split_text("Hi, I'm", TextMode::Wave, TextOptions::default());
    assert_eq!(s.units.len(), 7);
    assert_eq!(s.label, "Hi, I'm");
    let space = &s.units[3];
    assert!(space.is_space);
    assert_eq!(space.text, NBSP);
    assert_eq!(s.rendered_text(), "Hi, I'm");
}

#[test]
fn fade_splits_on_spaces() {
    let s = split_text("View  My Work", TextMode::Fade, TextOptions::default());
    let words: Vec<&str> = s.units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(words, vec!["View", "", "My", "Work"]);
    assert_eq!(s.label, "View  My Work");
}

#[test]
fn hero_name_starts_after_greeting() {
    let greeting = split_text(HERO_GREETING, HERO_TITLE_MODE, hero_greeting_options());
    let name = split_text(HERO_NAME, HERO_TITLE_MODE, hero_name_options());
    assert_eq!(HERO_TITLE_MODE, TextMode::Wave);
    assert_eq!(greeting.units[0].start, Duration::ZERO);
    assert_eq!(greeting.units[6].start, Duration::from_millis(300));
    assert_eq!(name.units.len(), 9);
    assert_eq!(name.units[0].start, Duration::from_millis(300));
    assert_eq!(name.units[8].start, Duration::from_millis(700));
    assert_eq!(name.label, "Your Name");
}

#[test]
fn label_survives_every_mode() {
    for mode in [
        TextMode::Fade,
        TextMode::SlideUp,
        TextMode::Typewriter,
        TextMode::Reveal,
        TextMode::Wave,
    ] {
        let s = split_text("Let's Work Together", mode, TextOptions::default());
        assert_eq!(s.label, "Let's Work Together");
        assert_eq!(s.rendered_text(), "Let's Work Together");
    }
}

#[test]
fn emoji_is_a_single_typewriter_unit() {
    let s = split_text("🚀 go", TextMode::Typewriter, TextOptions::default());
    assert_eq!(s.units.len(), 4);
    assert_eq!(s.units[0].text, "🚀");
}

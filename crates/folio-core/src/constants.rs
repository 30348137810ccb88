// Motion and interaction tuning constants shared by every section.

// Pointer overlay
pub const CURSOR_SMOOTHING: f32 = 0.15; // fraction of the remaining distance covered per frame
pub const CURSOR_RING_SIZE_PX: f32 = 20.0;
pub const CURSOR_DOT_SIZE_PX: f32 = 8.0;
pub const CURSOR_COLOR: &str = "rgb(139, 92, 246)";
pub const CURSOR_SCALE_IDLE: f32 = 1.0;
pub const CURSOR_SCALE_HOVER: f32 = 1.5;
pub const CURSOR_SCALE_PRESSED: f32 = 0.8;
pub const CURSOR_HOVER_TWEEN_MS: u64 = 300;
pub const CURSOR_PRESS_TWEEN_MS: u64 = 100;
pub const CURSOR_BODY_CLASS: &str = "cursor-custom";
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role=\"button\"], input, textarea, select, [data-cursor=\"pointer\"]";

// Magnetic offset
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_FOLLOW_MS: u64 = 300;
pub const MAGNETIC_SETTLE_MS: u64 = 500;

// Tilt card
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_SPRING_STIFFNESS: f32 = 500.0;
pub const TILT_SPRING_DAMPING: f32 = 100.0;
pub const LIFT_OFFSET_PX: f32 = -10.0;
pub const CARD_HOVER_TWEEN_MS: u64 = 300;
pub const LIFT_SHADOW: &str = "0 20px 40px rgba(0,0,0,0.2)";
pub const GLOW_SHADOW: &str = "0 0 30px rgba(139, 92, 246, 0.3)";

// Buttons
pub const BUTTON_HOVER_SCALE: f32 = 1.02;
pub const BUTTON_PRESS_SCALE: f32 = 0.98;

// Text reveal
pub const TEXT_DURATION_MS: u64 = 500;
pub const TEXT_STAGGER_MS: u64 = 30;
pub const TYPEWRITER_UNIT_MS: u64 = 50;

// Intersection thresholds
pub const DEFAULT_VIEW_THRESHOLD: f64 = 0.1;
pub const SECTION_VIEW_THRESHOLD: f64 = 0.2;
pub const CARD_VIEW_THRESHOLD: f64 = 0.3;
pub const TEXT_VIEW_THRESHOLD: f64 = 0.5;

// Scroll
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const SECTION_REVEAL_MS: u64 = 800;

// Contact flow
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1500;
pub const CONTACT_SUCCESS_WINDOW_MS: u64 = 3000;

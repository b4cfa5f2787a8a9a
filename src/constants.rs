// Shared tuning constants for the effects engine and its browser shell.

// Spawning
pub const BATCH_SIZE: usize = 10; // effects of each variant spawned per pointer-move event

// Fade guards
pub const MIN_FADE_SPAN: f32 = 1e-6; // size ranges narrower than this fade out immediately
pub const INSTANT_FADE_STEP: f32 = 1.0; // a full starting opacity, so one update retires the effect

// Pointer speed
pub const MIN_POINTER_ELAPSED_MS: f32 = 1.0; // floor for the time between two pointer events

// Highlight sweep
pub const SWEEP_ANGLE_DEG: f32 = -45.0;
pub const SWEEP_SPEED: f32 = 1.0; // px per frame
pub const SWEEP_LINE_WIDTH: f32 = 5.0;
pub const SWEEP_DASH: [f32; 2] = [900.0, 5.0];
pub const SWEEP_STYLE: &str = "white";

// Line widths
pub const RING_LINE_WIDTH_DIVISOR: f32 = 30.0; // ring stroke width = size / divisor
pub const SLOW_RING_LINE_WIDTH: f32 = 2.0;

// Default settings
pub const DEFAULT_CURSOR_BLUR_PX: f64 = 40.0;
pub const DEFAULT_REFLECTIVE_BLUR_PX: f64 = 20.0;
pub const DEFAULT_RATIO: f64 = 0.1;

// DOM
pub const CANVAS_ELEMENT_ID: &str = "fx-canvas";

// Shared timing, gesture and scene tuning constants.

// Carousel timing (milliseconds)
pub const ACTIVATE_DELAY_MS: f64 = 50.0; // lets the deactivation styles commit before activation
pub const CARD_TRANSITION_MS: f64 = 800.0; // matches the CSS transition on cards
pub const AUTO_ADVANCE_INTERVAL_MS: f64 = 7000.0;

// Carousel gestures
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Carousel card poses
pub const CARD_OFFSET_PX: f32 = 100.0;
pub const CARD_ROTATE_DEG: f32 = 10.0;
pub const CARD_Z_INACTIVE: i32 = 1;
pub const CARD_Z_ACTIVE: i32 = 5;
pub const INDICATOR_PULSE_SCALE: f32 = 1.2;

// Control feedback (milliseconds)
pub const CLICK_FEEDBACK_MS: i32 = 300;
pub const RIPPLE_LIFETIME_MS: i32 = 700;

// Responsive helpers
pub const RESIZE_DEBOUNCE_MS: i32 = 250;
pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 992.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.1;
pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Scene
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPREAD: f32 = 10.0; // edge length of the particle cube
pub const PARTICLE_SIZE: f32 = 0.02; // full width of a particle in world units
pub const PARTICLE_COLOR: [f32; 4] = [0.353, 0.553, 0.933, 0.8]; // #5a8dee @ 0.8
pub const PARTICLE_SPIN_PER_SEC: f32 = 0.0005 * 60.0; // 0.0005 rad per 60 Hz frame
pub const SCENE_SEED: u64 = 42;
pub const POINTER_TILT: f32 = 0.1;
pub const MESH_SEGMENTS: usize = 16;

pub const GAVEL_COLOR: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // #8b4513
pub const SCALES_COLOR: [f32; 4] = [0.831, 0.686, 0.216, 1.0]; // #d4af37
pub const BOOK_COLOR: [f32; 4] = [0.545, 0.0, 0.0, 1.0]; // #8b0000

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

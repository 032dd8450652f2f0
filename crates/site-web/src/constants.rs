/// DOM selectors and class names shared by the front-end modules.
///
/// The page markup is owned elsewhere; these strings are the whole contract.
// Carousel collaborators
pub const SLIDER_SELECTOR: &str = ".case-slider";
pub const CARD_SELECTOR: &str = ".case-card";
pub const INDICATOR_SELECTOR: &str = ".counter-dot";
pub const PREV_SELECTOR: &str = ".prev-btn";
pub const NEXT_SELECTOR: &str = ".next-btn";

// Carousel classes
pub const ACTIVE_CLASS: &str = "active";
pub const ANIMATING_CLASS: &str = "animating";
pub const CLICKED_CLASS: &str = "clicked";
pub const RIPPLE_CLASS: &str = "ripple-effect";

// Active card hover lift
pub const CARD_LIFT_TRANSFORM: &str = "translateY(-5px) rotateY(0)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) rotateY(0)";
pub const CARD_LIFT_SHADOW: &str = "0 20px 40px rgba(0, 0, 0, 0.4)";
pub const CARD_REST_SHADOW: &str = "0 15px 30px rgba(0, 0, 0, 0.3)";

// Hero scene
pub const HERO_SELECTOR: &str = ".hero-bg";
pub const SCENE_CANVAS_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;z-index:-1;pointer-events:none";

// Responsive helpers
pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const MENU_OVERLAY_CLASS: &str = "menu-overlay";
pub const MENU_OPEN_BODY_CLASS: &str = "menu-open";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEALED_CLASS: &str = "animate";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const TILT_SELECTOR: &str = "[data-tilt]";

// DOM hooks and page behavior tuning for the web front-end.

// Element ids (see index.html)
pub const CANVAS_ID: &str = "cube-canvas";
pub const CONTAINER_ID: &str = "ai-engine"; // 500vh scroll container
pub const INTRO_TITLE_ID: &str = "ai-engine-title";
pub const LAYER_INFO_ID: &str = "layer-info";
pub const LAYER_TITLE_ID: &str = "layer-info-title";
pub const LAYER_DESCRIPTION_ID: &str = "layer-info-description";
pub const HEADER_ID: &str = "site-header";
pub const HERO_ID: &str = "hero";
pub const HERO_ACCENT_ID: &str = "hero-accent";

// Header hides while scrolling down past this offset (CSS px)
pub const HEADER_HIDE_AFTER_PX: f64 = 100.0;
pub const HEADER_HIDDEN_CLASS: &str = "header-hidden";

// Hero copy fades in once after this delay
pub const HERO_REVEAL_MS: i32 = 1000;
pub const HERO_VISIBLE_CLASS: &str = "is-visible";

// Accent gradient angle = pointer x fraction * span + base (degrees)
pub const HERO_GRADIENT_BASE_DEG: f32 = 45.0;
pub const HERO_GRADIENT_SPAN_DEG: f32 = 180.0;

// Hero ribbons (2D canvas behind the hero copy)
pub const RIBBON_CANVAS_ID: &str = "hero-ribbons";
pub const RIBBON_COUNT: usize = 3;
pub const RIBBON_TIME_PER_SEC: f32 = 45.0; // 0.75 per frame at 60 Hz
pub const RIBBON_LINE_WIDTH: f64 = 2.5;
pub const RIBBON_GLOW_BLUR: f64 = 20.0;
pub const RIBBON_GLOW_COLOR: &str = "rgba(16, 185, 129, 0.25)";

// Content cards fade and slide in once when this much of them is visible
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const REVEAL_VISIBLE_CLASS: &str = "in-view";

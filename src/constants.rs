// Page hooks and browser tuning used by the web front-end.

pub const LOG_LEVEL: log::Level = log::Level::Info;

// Presentation mode
pub const START_CONTROL_ID: &str = "start-presentation-btn";
pub const SCROLL_HINT_SELECTOR: &str = ".scroll-indicator";
pub const STEP_SELECTOR: &str = ".interactive-card";
pub const GROUP_SELECTOR: &str = ".split-layout";
pub const SHARED_MEDIA_SELECTOR: &str = ".section-media";
pub const STEP_MEDIA_SELECTOR: &str = "video";
pub const MEDIA_SOURCE_SELECTOR: &str = "source";
pub const SECTION_SELECTOR: &str = "section";
pub const MEDIA_REF_ATTR: &str = "data-media-src";
pub const PRESENTING_CLASS: &str = "presentation-mode";
pub const ACTIVE_CLASS: &str = "active";
pub const START_CONTROL_DISPLAY: &str = "block";

// Hero
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const HAMMER_ID: &str = "hammer";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".container";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

// Physics toy
pub const CHARACTER_ID: &str = "character";
pub const DEMO_CONTAINER_ID: &str = "demoContainer";

// Smooth anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

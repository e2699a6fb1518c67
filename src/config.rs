//! Tuning table for the landing page animations. Everything time- or
//! threshold-shaped lives here so the choreography reads as data.

/// Duration of a smooth scroll to an anchor target.
pub const SMOOTH_SCROLL_MS: f64 = 2000.0;

/// Delay before the hero sequence starts after mount.
pub const HERO_START_DELAY_MS: u32 = 500;
/// Pause between hero phases (typing -> counting -> typing -> reveal).
pub const HERO_PHASE_GAP_MS: u32 = 300;
/// Per-character typing interval.
pub const TYPE_INTERVAL_MS: u32 = 70;
/// Extra delay between unhiding the counter and the first count frame.
pub const COUNT_LEAD_IN_MS: u32 = 100;
/// The counter runs 0..=COUNT_TARGET in roughly this long.
pub const COUNT_DURATION_MS: f64 = 800.0;
pub const COUNT_TARGET: f64 = 70.0;
/// Delay between the tagline reveal and the image/button reveal.
pub const REVEAL_FOLLOW_UP_MS: u32 = 300;

pub const HERO_PHRASE: &str = "Change your life in";
pub const HERO_SUFFIX: &str = "days.";

/// Navbar swaps backgrounds once the page is scrolled past this offset.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAVBAR_BG_TOP: &str = "rgba(25, 25, 25, 0.6)";
pub const NAVBAR_BG_SCROLLED: &str = "rgba(25, 25, 25, 0.7)";

/// Base parallax speed for the first orb; each further orb adds the step.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

/// Feature cards fade in 100ms apart, steps slide in 200ms apart.
pub const CARD_STAGGER_MS: u32 = 100;
pub const STEP_STAGGER_MS: u32 = 200;

/// Progress ring geometry and fill (the ring shows 65% even though the
/// hero counts to 70 days - the ring tracks program completion, not days).
pub const RING_RADIUS: f64 = 45.0;
pub const RING_PERCENT: f64 = 65.0;
pub const RING_GRADIENT_FROM: &str = "#ff6b35";
pub const RING_GRADIENT_TO: &str = "#ff8c42";

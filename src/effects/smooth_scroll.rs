//! Eased scrolling to in-page anchor targets.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::animation::easing::ease_in_out_cubic;
use crate::animation::frame::{next_frame, AnimationToken};
use crate::config;

/// Scroll offset after `elapsed_ms` of a scroll from `start` to `target`.
pub fn offset_at(start: f64, target: f64, elapsed_ms: f64) -> f64 {
    let progress = (elapsed_ms / config::SMOOTH_SCROLL_MS).min(1.0);
    start + (target - start) * ease_in_out_cubic(progress)
}

/// Drives eased scrolls to anchor targets.
///
/// The driver owns the scroll position for its lifetime: starting a new
/// scroll while a previous one is mid-flight invalidates the old loop's
/// guard, and that loop exits at its next frame without writing.
#[derive(Clone, Default)]
pub struct ScrollDriver {
    token: AnimationToken,
}

impl ScrollDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrolls the page so `target`'s document-top offset lands at the top
    /// of the viewport, easing over [`config::SMOOTH_SCROLL_MS`].
    pub fn scroll_to(&self, target: &HtmlElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Start and end are captured once; a layout shift mid-scroll does
        // not retarget an in-flight animation.
        let start = window.page_y_offset().unwrap_or(0.0);
        let end = f64::from(target.offset_top());
        let guard = self.token.begin();

        spawn_local(async move {
            let began = next_frame().await;
            loop {
                let now = next_frame().await;
                if !guard.is_current() {
                    return;
                }
                let elapsed = now - began;
                window.scroll_to_with_x_and_y(0.0, offset_at(start, end, elapsed));
                if elapsed >= config::SMOOTH_SCROLL_MS {
                    return;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target_at_full_duration() {
        assert!((offset_at(0.0, 1000.0, 2000.0) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn halfway_in_time_is_halfway_in_distance() {
        // Cubic ease-in-out passes through (0.5, 0.5).
        assert!((offset_at(0.0, 1000.0, 1000.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn holds_target_past_duration() {
        assert!((offset_at(0.0, 1000.0, 3500.0) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn starts_from_current_offset() {
        assert!((offset_at(250.0, 1250.0, 0.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn handles_upward_scrolls() {
        let offset = offset_at(1000.0, 0.0, 1000.0);
        assert!((offset - 500.0).abs() < 1e-9);
    }
}

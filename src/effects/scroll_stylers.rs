//! Scroll-position-driven styling: the navbar background swap and the
//! gradient-orb parallax.
//!
//! Scroll events only mark a dirty flag; the styles are recomputed at most
//! once per animation frame, so a burst of scroll events costs one write per
//! repaint instead of one per event.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, Window};

use crate::animation::frame::next_frame;
use crate::config;
use crate::effects::dom::{collect_html, Listener};

/// Navbar background for a given scroll offset. The threshold is exclusive:
/// exactly 100px of scroll still shows the resting background.
pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > config::NAVBAR_SCROLL_THRESHOLD {
        config::NAVBAR_BG_SCROLLED
    } else {
        config::NAVBAR_BG_TOP
    }
}

/// Vertical parallax translation for the orb at `index`. Deeper orbs move
/// faster, so the layers separate as the page scrolls.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (config::PARALLAX_BASE_SPEED + config::PARALLAX_SPEED_STEP * index as f64)
}

fn apply(window: &Window, navbar: Option<&HtmlElement>, orbs: &[HtmlElement]) {
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    if let Some(navbar) = navbar {
        let _ = navbar
            .style()
            .set_property("background", navbar_background(scroll_y));
    }
    for (index, orb) in orbs.iter().enumerate() {
        let _ = orb.style().set_property(
            "transform",
            &format!("translateY({}px)", parallax_offset(scroll_y, index)),
        );
    }
}

/// The mounted stylers; dropping detaches the scroll listener.
pub struct ScrollStylers {
    _listener: Listener,
}

pub fn init(document: &Document) -> Option<ScrollStylers> {
    let window = web_sys::window()?;
    let navbar = collect_html(document, ".navbar").into_iter().next();
    if navbar.is_none() {
        warn!("scroll stylers: .navbar not found, background swap disabled");
    }
    let orbs = collect_html(document, ".gradient-orb");
    if navbar.is_none() && orbs.is_empty() {
        return None;
    }

    // Paint the resting state before the first scroll event arrives.
    apply(&window, navbar.as_ref(), &orbs);

    let pending = Rc::new(Cell::new(false));
    let listener = {
        let win = window.clone();
        Listener::attach(window.as_ref(), "scroll", move |_event| {
            if pending.replace(true) {
                return;
            }
            let win = win.clone();
            let navbar = navbar.clone();
            let orbs = orbs.clone();
            let pending = pending.clone();
            spawn_local(async move {
                next_frame().await;
                pending.set(false);
                apply(&win, navbar.as_ref(), &orbs);
            });
        })
    };

    Some(ScrollStylers {
        _listener: listener,
    })
}

//! Progress ring in the phone mockup: the dash offset animates to 65% when
//! the mockup scrolls into view, and the stroke gradient the markup refers
//! to is built once at mount.

use log::warn;
use std::f64::consts::PI;
use web_sys::{Document, Element};

use crate::config;
use crate::effects::dom::collect_html;
use crate::effects::reveal::Reveal;

/// Dash offset that leaves `percent` of the ring stroked.
pub fn ring_dash_offset(percent: f64) -> f64 {
    let circumference = 2.0 * PI * config::RING_RADIUS;
    circumference - (percent / 100.0) * circumference
}

/// Arms the ring: once half the phone mockup is visible, the dash offset is
/// written and CSS transitions the stroke into place.
pub fn init(document: &Document) -> Option<Reveal> {
    let mockups = collect_html(document, ".phone-mockup");
    if mockups.is_empty() {
        warn!("progress ring: .phone-mockup not found");
        return None;
    }
    Reveal::observe(&mockups, 0.5, "0px", |element, _index| {
        let Some(bar) = element.query_selector(".progress-bar").ok().flatten() else {
            return;
        };
        let _ = bar.set_attribute(
            "style",
            &format!("stroke-dashoffset: {}", ring_dash_offset(config::RING_PERCENT)),
        );
    })
}

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn svg_element(document: &Document, name: &str) -> Option<Element> {
    document.create_element_ns(Some(SVG_NS), name).ok()
}

/// Builds the `<defs><linearGradient id="gradient">` node the ring's stroke
/// url() points at and inserts it as the SVG's first child. Runs once at
/// mount; the markup itself stays free of defs.
pub fn inject_gradient(document: &Document) {
    let Some(svg) = document.query_selector(".progress-svg").ok().flatten() else {
        warn!("progress ring: .progress-svg not found, gradient not injected");
        return;
    };
    let (Some(defs), Some(gradient), Some(stop_from), Some(stop_to)) = (
        svg_element(document, "defs"),
        svg_element(document, "linearGradient"),
        svg_element(document, "stop"),
        svg_element(document, "stop"),
    ) else {
        return;
    };

    let _ = gradient.set_attribute("id", "gradient");
    let _ = gradient.set_attribute("x1", "0%");
    let _ = gradient.set_attribute("y1", "0%");
    let _ = gradient.set_attribute("x2", "100%");
    let _ = gradient.set_attribute("y2", "100%");

    let _ = stop_from.set_attribute("offset", "0%");
    let _ = stop_from.set_attribute("stop-color", config::RING_GRADIENT_FROM);
    let _ = stop_to.set_attribute("offset", "100%");
    let _ = stop_to.set_attribute("stop-color", config::RING_GRADIENT_TO);

    let _ = gradient.append_child(&stop_from);
    let _ = gradient.append_child(&stop_to);
    let _ = defs.append_child(&gradient);
    let _ = svg.insert_before(&defs, svg.first_child().as_ref());
}

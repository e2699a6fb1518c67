//! Visibility-triggered reveals.
//!
//! One observer binder covers all instances: feature cards fade up with a
//! per-card stagger, steps slide in from the left with a longer stagger, and
//! the problem image gets a single class toggle. Elements stay observed after
//! firing; every applied effect is idempotent, so a re-entering element is a
//! visual no-op.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;
use crate::effects::dom::collect_html;

/// Stagger delay for the entry at `index` within one callback batch.
pub fn stagger_delay_ms(index: u32, step_ms: u32) -> u32 {
    index * step_ms
}

/// A mounted IntersectionObserver; dropping it disconnects the observer.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    /// Observes `elements` and calls `on_enter(element, batch_index)` for
    /// each entry that is intersecting. The index counts the entry's
    /// position within the callback batch, intersecting or not, which is
    /// what the staggered effects key their delays on.
    pub(crate) fn observe(
        elements: &[HtmlElement],
        threshold: f64,
        root_margin: &str,
        on_enter: impl Fn(Element, u32) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for (index, entry) in entries.iter().enumerate() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_enter(entry.target(), index as u32);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for element in elements {
            observer.observe(element);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn hide(element: &HtmlElement, transform: &str, transition: &str) {
    let style = element.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", transform);
    let _ = style.set_property("transition", transition);
}

fn show(element: &HtmlElement, transform: &str) {
    let style = element.style();
    let _ = style.set_property("opacity", "1");
    let _ = style.set_property("transform", transform);
}

/// Feature cards fade up, 100ms apart, once a tenth of a card is visible.
pub fn feature_cards(document: &Document) -> Option<Reveal> {
    let cards = collect_html(document, ".feature-card");
    if cards.is_empty() {
        warn!("reveal: no .feature-card elements to observe");
        return None;
    }
    for card in &cards {
        hide(card, "translateY(20px)", "opacity 0.6s ease, transform 0.6s ease");
    }
    Reveal::observe(&cards, 0.1, "0px", |element, index| {
        let Ok(card) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        Timeout::new(stagger_delay_ms(index, config::CARD_STAGGER_MS), move || {
            show(&card, "translateY(0)");
        })
        .forget();
    })
}

/// How-it-works steps slide in from the left, 200ms apart.
pub fn steps(document: &Document) -> Option<Reveal> {
    let steps = collect_html(document, ".step");
    if steps.is_empty() {
        warn!("reveal: no .step elements to observe");
        return None;
    }
    for step in &steps {
        hide(step, "translateX(-30px)", "opacity 0.8s ease, transform 0.8s ease");
    }
    Reveal::observe(&steps, 0.2, "0px", |element, index| {
        let Ok(step) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        Timeout::new(stagger_delay_ms(index, config::STEP_STAGGER_MS), move || {
            show(&step, "translateX(0)");
        })
        .forget();
    })
}

/// The problem illustration reveals once it is 20% visible, with a 100px
/// bottom margin so it fires a beat before the natural intersection point.
pub fn problem_image(document: &Document) -> Option<Reveal> {
    let images = collect_html(document, "#problem-image");
    if images.is_empty() {
        warn!("reveal: #problem-image not found");
        return None;
    }
    Reveal::observe(&images, 0.2, "0px 0px -100px 0px", |element, _index| {
        let _ = element.class_list().add_1("revealed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_linearly_with_batch_position() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(1, 100), 100);
        assert_eq!(stagger_delay_ms(3, 200), 600);
    }

    #[test]
    fn first_element_of_a_batch_reveals_immediately() {
        assert_eq!(stagger_delay_ms(0, config::CARD_STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(0, config::STEP_STAGGER_MS), 0);
    }
}

//! Hero intro choreography: type the headline, count the days, type the
//! suffix, then cascade the reveal classes.
//!
//! The sequence is an explicit phase machine stepped by one async scheduler
//! loop. Each phase names the pause taken before it starts, so the whole
//! timeline reads out of [`HeroPhase::next`] instead of being buried in
//! nested timer callbacks.

use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::animation::frame::{next_frame, AnimationGuard, AnimationToken};
use crate::config;
use crate::effects::dom::html_by_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPhase {
    Idle,
    TypingPhrase,
    Counting,
    TypingSuffix,
    Reveal,
}

impl HeroPhase {
    /// The pause taken before the next phase, and the phase itself.
    /// `None` means the sequence is finished.
    pub fn next(self) -> Option<(u32, HeroPhase)> {
        match self {
            HeroPhase::Idle => Some((config::HERO_START_DELAY_MS, HeroPhase::TypingPhrase)),
            HeroPhase::TypingPhrase => Some((config::HERO_PHASE_GAP_MS, HeroPhase::Counting)),
            HeroPhase::Counting => Some((config::HERO_PHASE_GAP_MS, HeroPhase::TypingSuffix)),
            HeroPhase::TypingSuffix => Some((config::HERO_PHASE_GAP_MS, HeroPhase::Reveal)),
            HeroPhase::Reveal => None,
        }
    }
}

/// Per-frame counter increment, sized so a 60fps run finishes in roughly
/// [`config::COUNT_DURATION_MS`].
pub fn count_increment() -> f64 {
    config::COUNT_TARGET / (config::COUNT_DURATION_MS / 16.0)
}

struct HeroElements {
    typing: HtmlElement,
    count: HtmlElement,
    days: HtmlElement,
    title: Option<Element>,
    tagline: Option<Element>,
    image: Option<Element>,
    button: Option<Element>,
}

/// Handle for the running sequence; dropping it stops the chain at its next
/// await point.
pub struct HeroSequencer {
    token: AnimationToken,
}

impl Drop for HeroSequencer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Kicks off the intro sequence. The whole thing is skipped when any of the
/// three text targets is missing; the reveal targets are each optional on
/// their own.
pub fn start(document: &Document) -> Option<HeroSequencer> {
    let (Some(typing), Some(count), Some(days)) = (
        html_by_id(document, "typing-text"),
        html_by_id(document, "count-number"),
        html_by_id(document, "days-text"),
    ) else {
        warn!("hero: typing/count targets not found, skipping intro sequence");
        return None;
    };

    let elements = HeroElements {
        typing,
        count,
        days,
        title: document.query_selector(".hero-title").ok().flatten(),
        tagline: document.get_element_by_id("hero-tagline"),
        image: document.get_element_by_id("hero-image"),
        button: document.get_element_by_id("download-ignite-button"),
    };

    let token = AnimationToken::new();
    let guard = token.begin();
    spawn_local(run(elements, guard));
    Some(HeroSequencer { token })
}

async fn run(elements: HeroElements, guard: AnimationGuard) {
    let mut phase = HeroPhase::Idle;
    while let Some((pause_ms, next)) = phase.next() {
        TimeoutFuture::new(pause_ms).await;
        if !guard.is_current() {
            return;
        }
        match next {
            HeroPhase::Idle => {}
            HeroPhase::TypingPhrase => {
                type_into(&elements.typing, config::HERO_PHRASE, &guard).await
            }
            HeroPhase::Counting => count_up(&elements.count, &guard).await,
            HeroPhase::TypingSuffix => type_into(&elements.days, config::HERO_SUFFIX, &guard).await,
            HeroPhase::Reveal => reveal(&elements, &guard).await,
        }
        phase = next;
    }
}

async fn type_into(target: &HtmlElement, text: &str, guard: &AnimationGuard) {
    let mut typed = String::with_capacity(text.len());
    for ch in text.chars() {
        if !guard.is_current() {
            return;
        }
        typed.push(ch);
        target.set_text_content(Some(&typed));
        TimeoutFuture::new(config::TYPE_INTERVAL_MS).await;
    }
}

async fn count_up(counter: &HtmlElement, guard: &AnimationGuard) {
    let _ = counter.style().set_property("opacity", "1");
    counter.set_text_content(Some("0"));
    TimeoutFuture::new(config::COUNT_LEAD_IN_MS).await;

    let step = count_increment();
    let mut current = 0.0;
    loop {
        next_frame().await;
        if !guard.is_current() {
            return;
        }
        current += step;
        if current >= config::COUNT_TARGET {
            // Snap the final frame so the display never shows 69.
            counter.set_text_content(Some(&format!("{}", config::COUNT_TARGET as i64)));
            return;
        }
        counter.set_text_content(Some(&format!("{}", current.floor() as i64)));
    }
}

async fn reveal(elements: &HeroElements, guard: &AnimationGuard) {
    if let Some(title) = &elements.title {
        let _ = title.class_list().add_1("moved");
    }
    // Tagline first; image and button follow together after the gap.
    if let Some(tagline) = &elements.tagline {
        let _ = tagline.class_list().add_1("revealed");
    }
    TimeoutFuture::new(config::REVEAL_FOLLOW_UP_MS).await;
    if !guard.is_current() {
        return;
    }
    if let Some(image) = &elements.image {
        let _ = image.class_list().add_1("revealed");
    }
    if let Some(button) = &elements.button {
        let _ = button.class_list().add_1("revealed");
    }
}

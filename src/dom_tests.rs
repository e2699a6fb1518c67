//! Browser-side tests for the DOM-bound behavior, run with
//! `wasm-pack test --headless --chrome`. Host `cargo test` covers the pure
//! kernels; everything here needs a real document.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit};

use crate::effects::smooth_scroll::ScrollDriver;
use crate::effects::{dropdown, hero, reveal};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn bubbling_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

fn click(document: &Document, id: &str) {
    document
        .get_element_by_id(id)
        .unwrap()
        .dispatch_event(&bubbling_click())
        .unwrap();
}

fn menu_is_open(document: &Document) -> bool {
    document
        .get_element_by_id("dropdown-menu")
        .unwrap()
        .class_list()
        .contains("active")
}

fn mount_menu(document: &Document) {
    document.body().unwrap().set_inner_html(
        "<button id='menu-button'>menu</button>\
         <div id='dropdown-menu'>\
             <span id='menu-inner'>Sections</span>\
             <a id='menu-link' href='#features'>features</a>\
         </div>\
         <div id='features'></div>\
         <div id='elsewhere'></div>",
    );
}

#[wasm_bindgen_test]
fn dropdown_button_toggles() {
    let document = document();
    mount_menu(&document);
    let _dropdown = dropdown::init(&document, ScrollDriver::new()).unwrap();

    click(&document, "menu-button");
    assert!(menu_is_open(&document));
    click(&document, "menu-button");
    assert!(!menu_is_open(&document));
}

#[wasm_bindgen_test]
fn dropdown_closes_on_outside_but_not_inside_clicks() {
    let document = document();
    mount_menu(&document);
    let _dropdown = dropdown::init(&document, ScrollDriver::new()).unwrap();

    click(&document, "menu-button");
    click(&document, "menu-inner");
    assert!(menu_is_open(&document), "inside click must not close");

    click(&document, "elsewhere");
    assert!(!menu_is_open(&document), "outside click must close");
}

#[wasm_bindgen_test]
fn dropdown_link_scrolls_and_closes() {
    let document = document();
    mount_menu(&document);
    let _dropdown = dropdown::init(&document, ScrollDriver::new()).unwrap();

    click(&document, "menu-button");
    click(&document, "menu-link");
    assert!(!menu_is_open(&document));
}

#[wasm_bindgen_test]
async fn hero_sequence_types_counts_and_reveals() {
    let document = document();
    document.body().unwrap().set_inner_html(
        "<h1 class='hero-title'>\
             <span id='typing-text'></span> \
             <span id='count-number'></span> \
             <span id='days-text'></span>\
         </h1>\
         <p id='hero-tagline'></p>\
         <div id='hero-image'></div>\
         <a id='download-ignite-button'></a>",
    );
    let _sequencer = hero::start(&document).unwrap();

    // The full chain finishes in about 4.3s; leave headroom.
    TimeoutFuture::new(6_000).await;

    let text = |id: &str| {
        document
            .get_element_by_id(id)
            .unwrap()
            .text_content()
            .unwrap_or_default()
    };
    assert_eq!(text("typing-text"), "Change your life in");
    assert_eq!(text("count-number"), "70");
    assert_eq!(text("days-text"), "days.");

    let has_class = |id: &str, class: &str| {
        document
            .get_element_by_id(id)
            .unwrap()
            .class_list()
            .contains(class)
    };
    assert!(has_class("hero-tagline", "revealed"));
    assert!(has_class("hero-image", "revealed"));
    assert!(has_class("download-ignite-button", "revealed"));
    assert!(document
        .query_selector(".hero-title")
        .unwrap()
        .unwrap()
        .class_list()
        .contains("moved"));
}

#[wasm_bindgen_test]
async fn visible_cards_reveal_and_offscreen_cards_stay_hidden() {
    let document = document();
    document.body().unwrap().set_inner_html(
        "<div id='card-a' class='feature-card'>a</div>\
         <div id='card-b' class='feature-card'>b</div>\
         <div id='card-far' class='feature-card'\
              style='position:absolute; top:100000px;'>far</div>",
    );
    let _reveal = reveal::feature_cards(&document).unwrap();

    // Observer callback plus the 0/100ms stagger.
    TimeoutFuture::new(500).await;

    let opacity = |id: &str| {
        document
            .get_element_by_id(id)
            .unwrap()
            .get_attribute("style")
            .unwrap_or_default()
    };
    assert!(opacity("card-a").contains("opacity: 1"));
    assert!(opacity("card-b").contains("opacity: 1"));
    assert!(opacity("card-far").contains("opacity: 0"));
}

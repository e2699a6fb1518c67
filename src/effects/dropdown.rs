//! Nav dropdown: open/close state lives in the DOM as the `active` class on
//! the menu element, and every handler steps the same transition table.
//!
//! Anchor links inside the menu don't navigate; they hand their fragment
//! target to the [`ScrollDriver`] and close the menu.

use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, Node};

use crate::effects::dom::Listener;
use crate::effects::smooth_scroll::ScrollDriver;

const OPEN_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was clicked or touched.
    ButtonActivated,
    /// A click landed outside both the button and the menu.
    OutsideClick,
    /// A click landed inside the open menu, on something other than a link.
    InsideClick,
    /// An anchor link inside the menu was activated.
    LinkActivated,
}

pub fn transition(state: MenuState, event: MenuEvent) -> MenuState {
    match (state, event) {
        (MenuState::Closed, MenuEvent::ButtonActivated) => MenuState::Open,
        (MenuState::Open, MenuEvent::ButtonActivated) => MenuState::Closed,
        (MenuState::Open, MenuEvent::OutsideClick) => MenuState::Closed,
        (MenuState::Open, MenuEvent::LinkActivated) => MenuState::Closed,
        (state, _) => state,
    }
}

fn current(menu: &Element) -> MenuState {
    if menu.class_list().contains(OPEN_CLASS) {
        MenuState::Open
    } else {
        MenuState::Closed
    }
}

fn step(menu: &Element, event: MenuEvent) {
    let classes = menu.class_list();
    let _ = match transition(current(menu), event) {
        MenuState::Open => classes.add_1(OPEN_CLASS),
        MenuState::Closed => classes.remove_1(OPEN_CLASS),
    };
}

/// The mounted controller; dropping it detaches every listener.
pub struct Dropdown {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document, scroll: ScrollDriver) -> Option<Dropdown> {
    let Some(button) = document.get_element_by_id("menu-button") else {
        error!("dropdown: #menu-button not found, menu left inert");
        return None;
    };
    let Some(menu) = document.get_element_by_id("dropdown-menu") else {
        error!("dropdown: #dropdown-menu not found, menu left inert");
        return None;
    };

    let mut listeners = Vec::new();

    // Toggle on click and on touchend. preventDefault on touchend also
    // suppresses the synthetic click that would otherwise toggle twice,
    // and stopPropagation keeps the document-level close handler out of it.
    for event in ["click", "touchend"] {
        let menu = menu.clone();
        listeners.push(Listener::attach(button.as_ref(), event, move |e| {
            e.stop_propagation();
            e.prevent_default();
            step(&menu, MenuEvent::ButtonActivated);
        }));
    }

    // Close when a click lands outside both the button and the menu.
    {
        let button = button.clone();
        let menu = menu.clone();
        listeners.push(Listener::attach(document.as_ref(), "click", move |e| {
            if current(&menu) != MenuState::Open {
                return;
            }
            let inside = e
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| button.contains(Some(&node)) || menu.contains(Some(&node)))
                .unwrap_or(false);
            let event = if inside {
                MenuEvent::InsideClick
            } else {
                MenuEvent::OutsideClick
            };
            step(&menu, event);
        }));
    }

    // Menu links scroll smoothly to their fragment target instead of
    // jumping, then close the menu.
    if let Ok(links) = menu.query_selector_all("a") {
        for i in 0..links.length() {
            let Some(link) = links
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok())
            else {
                continue;
            };
            let target = link.clone();
            let menu = menu.clone();
            let document = document.clone();
            let scroll = scroll.clone();
            listeners.push(Listener::attach(link.as_ref(), "click", move |e| {
                e.prevent_default();
                e.stop_propagation();
                let href = target.get_attribute("href").unwrap_or_default();
                if let Some(id) = href.strip_prefix('#') {
                    if let Some(section) = document
                        .get_element_by_id(id)
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        scroll.scroll_to(&section);
                    }
                }
                step(&menu, MenuEvent::LinkActivated);
            }));
        }
    }

    Some(Dropdown {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_toggles_open_then_closed() {
        let open = transition(MenuState::Closed, MenuEvent::ButtonActivated);
        assert_eq!(open, MenuState::Open);
        assert_eq!(
            transition(open, MenuEvent::ButtonActivated),
            MenuState::Closed
        );
    }

    #[test]
    fn outside_click_closes_open_menu() {
        assert_eq!(
            transition(MenuState::Open, MenuEvent::OutsideClick),
            MenuState::Closed
        );
    }

    #[test]
    fn inside_click_keeps_menu_open() {
        assert_eq!(
            transition(MenuState::Open, MenuEvent::InsideClick),
            MenuState::Open
        );
    }

    #[test]
    fn link_activation_closes_menu() {
        assert_eq!(
            transition(MenuState::Open, MenuEvent::LinkActivated),
            MenuState::Closed
        );
    }

    #[test]
    fn closed_menu_ignores_everything_but_the_button() {
        for event in [
            MenuEvent::OutsideClick,
            MenuEvent::InsideClick,
            MenuEvent::LinkActivated,
        ] {
            assert_eq!(transition(MenuState::Closed, event), MenuState::Closed);
        }
    }
}

//! DOM focus and dismissal helpers for composite widgets.

use aurora_core::{Controllable, Orientation};
use leptos::{ev, html, on_cleanup, window_event_listener, Callable, NodeRef};
use wasm_bindgen::JsCast;

/// Item selector for menus and listboxes.
pub(crate) const MENU_ITEM_SELECTOR: &str =
    r#"[role="menuitem"], [role="menuitemcheckbox"], [role="menuitemradio"]"#;

fn active_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
}

/// Enabled elements matching `selector` inside `container`, in document order.
pub(crate) fn focusable_items(container: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| {
            item.get_attribute("disabled").is_none()
                && item.get_attribute("data-disabled").is_none()
                && item.get_attribute("aria-disabled").as_deref() != Some("true")
        })
        .collect()
}

/// Focuses the first enabled item.
pub(crate) fn focus_first(container: &web_sys::Element, selector: &str) -> bool {
    match focusable_items(container, selector).first() {
        Some(first) => first.focus().is_ok(),
        None => false,
    }
}

fn focus_relative(container: &web_sys::Element, selector: &str, delta: i32) -> bool {
    let items = focusable_items(container, selector);
    if items.is_empty() {
        return false;
    }
    let active = active_element();
    let current = items
        .iter()
        .position(|item| {
            let node: &web_sys::Node = item;
            active.as_ref().is_some_and(|active| active.is_same_node(Some(node)))
        });
    let len = items.len() as i32;
    let next = match current {
        Some(index) => (index as i32 + delta).rem_euclid(len) as usize,
        None if delta < 0 => items.len() - 1,
        None => 0,
    };
    items[next].focus().is_ok()
}

fn focus_edge(container: &web_sys::Element, selector: &str, first: bool) -> bool {
    let items = focusable_items(container, selector);
    let item = if first { items.first() } else { items.last() };
    item.is_some_and(|item| item.focus().is_ok())
}

/// Moves focus for the arrow keys of `orientation` and for Home and End.
/// Prevents the default action when the key was handled.
pub(crate) fn handle_roving_keydown(
    ev: &web_sys::KeyboardEvent,
    container: &web_sys::Element,
    selector: &str,
    orientation: Orientation,
) -> bool {
    let (next, previous) = match orientation {
        Orientation::Horizontal => ("ArrowRight", "ArrowLeft"),
        Orientation::Vertical => ("ArrowDown", "ArrowUp"),
    };
    let key = ev.key();
    let handled = match key.as_str() {
        key if key == next => focus_relative(container, selector, 1),
        key if key == previous => focus_relative(container, selector, -1),
        "Home" => focus_edge(container, selector, true),
        "End" => focus_edge(container, selector, false),
        _ => false,
    };
    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}

/// Closes `open` when a pointer goes down outside `root`.
pub(crate) fn close_on_outside_pointer(root: NodeRef<html::Div>, open: Controllable<bool>) {
    let handle = window_event_listener(ev::pointerdown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root.get_untracked() else {
            return;
        };
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            open.set.call(false);
        }
    });
    on_cleanup(move || handle.remove());
}

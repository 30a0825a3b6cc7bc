use leptos::logging;
use wasm_bindgen::JsCast;

use super::*;

const OPTION_SELECTOR: &str = r#"[role="option"]"#;

#[derive(Clone)]
struct SelectContext {
    value: Controllable<String>,
    open: Controllable<bool>,
    disabled: MaybeSignal<bool>,
    /// `(value, label)` for every mounted item.
    items: RwSignal<Vec<(String, String)>>,
    trigger_id: String,
    content_id: String,
}

impl SelectContext {
    fn label_for(&self, value: &str) -> Option<String> {
        self.items.with(|items| {
            items
                .iter()
                .find(|(item, _)| item == value)
                .map(|(_, label)| label.clone())
        })
    }
}

fn use_select(part: &'static str) -> SelectContext {
    expect_scoped::<SelectContext>(part, "Select")
}

#[component]
/// Single-choice picker with a button trigger and an option list.
///
/// An empty value means nothing is selected and the placeholder shows. With
/// a `name`, the value is also submitted through a hidden input.
pub fn Select(
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let value = use_controllable(value, default_value, on_value_change);
    let open = use_controllable(open, default_open, on_open_change);
    let root = create_node_ref::<html::Div>();
    focus::close_on_outside_pointer(root, open);
    let base = next_part_id("select");
    let context = SelectContext {
        value,
        open,
        disabled,
        items: create_rw_signal(Vec::new()),
        trigger_id: format!("{base}-trigger"),
        content_id: format!("{base}-content"),
    };
    let items = context.items;
    provide_context(context);
    let children = children();

    create_effect(move |_| {
        let current = value.value.get();
        if !current.is_empty() && items.with(|items| !items.iter().any(|(item, _)| *item == current)) {
            logging::warn!("select value {current:?} matches no item");
        }
    });

    view! {
        <div
            class=cn!("aurora-select", class)
            data-size=size.token()
            data-state=move || open_state_token(open.value.get())
            data-disabled=move || flag_token(disabled.get())
            data-required=flag_token(required)
            {..attrs}
            node_ref=root
        >
            {children}
            {name.map(|name| {
                view! {
                    <input
                        type="hidden"
                        name=name
                        value=move || value.value.get()
                        prop:value=move || value.value.get()
                        required=required
                    />
                }
            })}
        </div>
    }
}

#[component]
/// Combobox button showing the current selection. Arrow keys, Enter, and
/// Space open the list.
pub fn SelectTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let select = use_select("SelectTrigger");
    let (open, value, disabled) = (select.open, select.value, select.disabled);
    view! {
        <button
            type="button"
            role="combobox"
            id=select.trigger_id
            aria-haspopup="listbox"
            aria-expanded=move || if open.value.get() { "true" } else { "false" }
            aria-controls=select.content_id
            class=cn!("aurora-select-trigger", class)
            data-state=move || open_state_token(open.value.get())
            data-placeholder=move || flag_token(value.value.with(String::is_empty))
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| open.set.call(!open.get_untracked())
            on:keydown=move |ev: KeyboardEvent| {
                if matches!(ev.key().as_str(), "ArrowDown" | "ArrowUp" | "Enter" | " ") {
                    ev.prevent_default();
                    open.set.call(true);
                }
            }
            {..attrs}
        >
            {children()}
            <span class="aurora-select-icon">{chevron_icon()}</span>
        </button>
    }
}

#[component]
/// Label of the selected item, or the placeholder when nothing is selected.
pub fn SelectValue(
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let select = use_select("SelectValue");
    let value = select.value;
    let text = move || {
        let current = value.value.get();
        if current.is_empty() {
            placeholder.clone().unwrap_or_default()
        } else {
            select.label_for(&current).unwrap_or(current)
        }
    };
    view! {
        <span
            class=cn!("aurora-select-value", class)
            data-placeholder=move || flag_token(value.value.with(String::is_empty))
            {..attrs}
        >
            {text}
        </span>
    }
}

#[component]
/// Option list. It stays mounted while closed so item labels stay known.
pub fn SelectContent(
    #[prop(default = Side::Bottom)] side: Side,
    #[prop(default = 4)] side_offset: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let select = use_select("SelectContent");
    let open = select.open;
    create_effect(move |_| {
        if open.value.get() {
            if let Some(content) = node_ref.get() {
                let selected = content
                    .query_selector(r#"[role="option"][aria-selected="true"]"#)
                    .ok()
                    .flatten()
                    .and_then(|item| item.dyn_into::<web_sys::HtmlElement>().ok());
                match selected {
                    Some(item) => {
                        let _ = item.focus();
                    }
                    None => {
                        focus::focus_first(&content, OPTION_SELECTOR);
                    }
                }
            }
        }
    });
    view! {
        <div
            role="listbox"
            id=select.content_id
            aria-labelledby=select.trigger_id
            hidden=move || !open.value.get()
            class=cn!("aurora-select-content", class)
            style=side_offset_style(side_offset)
            data-state=move || open_state_token(open.value.get())
            data-side=side.token()
            node_ref=node_ref
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    open.set.call(false);
                } else if let Some(content) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &content, OPTION_SELECTOR, Orientation::Vertical);
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Selectable option.
///
/// `label` is the text the trigger shows once the item is selected; it
/// defaults to the value and is also rendered when no children are given.
pub fn SelectItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let select = use_select("SelectItem");
    let label = label.unwrap_or_else(|| value.clone());
    let items = select.items;
    items.update(|items| items.push((value.clone(), label.clone())));
    let registered = value.clone();
    on_cleanup(move || {
        items.update(|items| items.retain(|(item, _)| *item != registered));
    });

    let (current, open) = (select.value, select.open);
    let item = value.clone();
    let selected = Signal::derive(move || current.value.with(|current| *current == item));
    let choose = std::rc::Rc::new(move || {
        if disabled.get_untracked() {
            return;
        }
        current.set.call(value.clone());
        open.set.call(false);
    });
    let on_key = std::rc::Rc::clone(&choose);
    let content = match children {
        Some(children) => children().into_view(),
        None => label.into_view(),
    };
    view! {
        <div
            role="option"
            tabindex="-1"
            aria-selected=move || if selected.get() { "true" } else { "false" }
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-select-item", class)
            data-state=move || checked_state_token(selected.get())
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| choose()
            on:keydown=move |ev: KeyboardEvent| {
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    on_key();
                }
            }
            {..attrs}
        >
            <span class="aurora-select-item-indicator">
                <Show when=move || selected.get()>{check_icon()}</Show>
            </span>
            <span class="aurora-select-item-text">{content}</span>
        </div>
    }
}

#[component]
/// Groups related options.
pub fn SelectGroup(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_select("SelectGroup");
    view! {
        <div role="group" class=cn!("aurora-select-group", class) {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Heading for a [`SelectGroup`].
pub fn SelectLabel(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn!("aurora-select-label", class) {..attrs}>{children()}</div> }
}

#[component]
/// Rule between options.
pub fn SelectSeparator(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! { <div aria-hidden="true" class=cn!("aurora-select-separator", class) {..attrs}></div> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{
        attr, has_attr, opening_tag, opening_tags, render, tag_with_class, test_id,
    };

    #[test]
    fn empty_value_shows_placeholder_and_hides_list() {
        let html = render(|| {
            view! {
                <Select>
                    <SelectTrigger>
                        <SelectValue placeholder="Pick a fruit" />
                    </SelectTrigger>
                    <SelectContent>
                        <SelectItem value="apple" label="Apple" />
                    </SelectContent>
                </Select>
            }
        });
        let trigger = opening_tag(&html, "button");
        assert_eq!(attr(trigger, "role"), Some("combobox"));
        assert_eq!(attr(trigger, "aria-expanded"), Some("false"));
        assert!(has_attr(trigger, "data-placeholder"), "{trigger}");
        assert!(html.contains("Pick a fruit"), "{html}");
        let content = tag_with_class(&html, "aurora-select-content");
        assert!(has_attr(content, "hidden"), "{content}");
        assert_eq!(attr(content, "aria-labelledby"), attr(trigger, "id"));
    }

    #[test]
    fn selected_item_is_marked_and_submitted() {
        let html = render(|| {
            view! {
                <Select default_value="banana" default_open=true name="fruit">
                    <SelectTrigger>
                        <SelectValue placeholder="Pick a fruit" />
                    </SelectTrigger>
                    <SelectContent>
                        <SelectGroup>
                            <SelectLabel>"Fruits"</SelectLabel>
                            <SelectItem value="apple" label="Apple" />
                            <SelectItem value="banana" label="Banana" />
                        </SelectGroup>
                        <SelectSeparator />
                        <SelectItem value="kale" disabled=true>"Kale"</SelectItem>
                    </SelectContent>
                </Select>
            }
        });
        let content = tag_with_class(&html, "aurora-select-content");
        assert!(!has_attr(content, "hidden"), "{content}");
        let options = opening_tags(&html, "div")
            .into_iter()
            .filter(|tag| attr(tag, "role") == Some("option"))
            .collect::<Vec<_>>();
        assert_eq!(options.len(), 3);
        assert_eq!(attr(options[0], "aria-selected"), Some("false"));
        assert_eq!(attr(options[1], "aria-selected"), Some("true"));
        assert_eq!(attr(options[1], "data-state"), Some("checked"));
        assert_eq!(attr(options[2], "aria-disabled"), Some("true"));
        let hidden = opening_tag(&html, "input");
        assert_eq!(attr(hidden, "name"), Some("fruit"));
        assert_eq!(attr(hidden, "value"), Some("banana"));
    }

    #[test]
    fn label_lookup_uses_registered_items() {
        let runtime = create_runtime();
        let context = SelectContext {
            value: use_controllable(None, String::new(), None),
            open: use_controllable(None, false, None),
            disabled: false.into(),
            items: create_rw_signal(vec![("apple".to_string(), "Apple".to_string())]),
            trigger_id: String::from("t"),
            content_id: String::from("c"),
        };
        assert_eq!(context.label_for("apple").as_deref(), Some("Apple"));
        assert_eq!(context.label_for("pear"), None);
        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "SelectItem must be used within Select")]
    fn item_outside_select_panics() {
        render(|| view! { <SelectItem value="apple" /> });
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Select default_value="apple" default_open=true attr:data-testid="root">
                    <SelectTrigger attr:data-testid="trigger">
                        <SelectValue attr:data-testid="value" />
                    </SelectTrigger>
                    <SelectContent attr:data-testid="content">
                        <SelectGroup attr:data-testid="group">
                            <SelectLabel attr:data-testid="label">"Fruit"</SelectLabel>
                            <SelectItem value="apple" attr:data-testid="item">"Apple"</SelectItem>
                        </SelectGroup>
                        <SelectSeparator attr:data-testid="separator" />
                    </SelectContent>
                </Select>
            }
        });
        for (class, id) in [
            ("aurora-select", "root"),
            ("aurora-select-trigger", "trigger"),
            ("aurora-select-value", "value"),
            ("aurora-select-content", "content"),
            ("aurora-select-group", "group"),
            ("aurora-select-label", "label"),
            ("aurora-select-item", "item"),
            ("aurora-select-separator", "separator"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

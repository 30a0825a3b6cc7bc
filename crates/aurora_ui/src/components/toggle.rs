use super::*;

token_enum! {
    /// Toggle treatments, shared by groups and their items.
    pub enum ToggleVariant {
        /// Bordered.
        Outline => "outline",
        /// Borderless.
        Ghost => "ghost",
        /// Glowing when pressed.
        Glow => "glow",
    }
    default Outline;
}

const TOGGLE_ITEM_SELECTOR: &str = "[data-aurora-toggle-item]";

fn pressed_state_token(pressed: bool) -> &'static str {
    if pressed {
        "on"
    } else {
        "off"
    }
}

#[component]
/// Two-state button.
pub fn Toggle(
    #[prop(default = ToggleVariant::Outline)] variant: ToggleVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] pressed: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_pressed: bool,
    #[prop(optional)] on_pressed_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = use_controllable(pressed, default_pressed, on_pressed_change);
    let on = state.value;
    view! {
        <button
            type="button"
            aria-pressed=move || if on.get() { "true" } else { "false" }
            class=cn!("aurora-toggle", class)
            data-variant=variant.token()
            data-size=size.token()
            data-state=move || pressed_state_token(on.get())
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| state.set.call(!state.get_untracked())
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[derive(Clone, Copy)]
struct ToggleGroupContext {
    mode: SelectionMode,
    selection: Controllable<Vec<String>>,
    disabled: MaybeSignal<bool>,
}

#[component]
/// Set of toggles with single or multiple selection.
///
/// The value lists the pressed item values; in single mode it holds at most
/// one entry.
pub fn ToggleGroup(
    #[prop(default = SelectionMode::Single)] mode: SelectionMode,
    #[prop(default = ToggleVariant::Outline)] variant: ToggleVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let selection = use_controllable(value, default_value, on_value_change);
    provide_context(ToggleGroupContext {
        mode,
        selection,
        disabled,
    });
    view! {
        <div
            role="group"
            class=cn!("aurora-toggle-group", class)
            data-variant=variant.token()
            data-size=size.token()
            data-orientation=orientation.token()
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(group) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &group, TOGGLE_ITEM_SELECTOR, orientation);
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Toggle inside a [`ToggleGroup`].
pub fn ToggleGroupItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let group = expect_scoped::<ToggleGroupContext>("ToggleGroupItem", "ToggleGroup");
    let selection = group.selection;
    let item = value.clone();
    let pressed = Signal::derive(move || selection.value.with(|values| values.contains(&item)));
    let is_disabled = move || disabled.get() || group.disabled.get();
    let single = group.mode == SelectionMode::Single;
    let toggled = value.clone();

    view! {
        <button
            type="button"
            role=single.then_some("radio")
            aria-checked=move || single.then(|| if pressed.get() { "true" } else { "false" })
            aria-pressed=move || (!single).then(|| if pressed.get() { "true" } else { "false" })
            value=value
            class=cn!("aurora-toggle-group-item", class)
            data-aurora-toggle-item=""
            data-state=move || pressed_state_token(pressed.get())
            data-disabled=move || flag_token(is_disabled())
            disabled=is_disabled
            node_ref=node_ref
            on:click=move |_| {
                let next = selection
                    .value
                    .with_untracked(|current| toggle_selection(group.mode, true, current, &toggled));
                selection.set.call(next);
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, opening_tags, render, test_id};

    #[test]
    fn toggle_defaults_off() {
        let html = render(|| view! { <Toggle attr:aria-label="Bold">"B"</Toggle> });
        let toggle = opening_tag(&html, "button");
        assert_eq!(attr(toggle, "data-state"), Some("off"));
        assert_eq!(attr(toggle, "aria-pressed"), Some("false"));
        assert_eq!(attr(toggle, "data-variant"), Some("outline"));
        assert_eq!(attr(toggle, "data-size"), Some("md"));
    }

    #[test]
    fn controlled_pressed_toggle() {
        let html = render(|| view! { <Toggle pressed=true variant=ToggleVariant::Glow>"B"</Toggle> });
        let toggle = opening_tag(&html, "button");
        assert_eq!(attr(toggle, "data-state"), Some("on"));
        assert_eq!(attr(toggle, "aria-pressed"), Some("true"));
        assert_eq!(attr(toggle, "data-variant"), Some("glow"));
    }

    #[test]
    fn single_group_items_are_radios() {
        let html = render(|| {
            view! {
                <ToggleGroup default_value=vec!["left".to_string()] attr:aria-label="Alignment">
                    <ToggleGroupItem value="left">"L"</ToggleGroupItem>
                    <ToggleGroupItem value="center">"C"</ToggleGroupItem>
                </ToggleGroup>
            }
        });
        let group = opening_tag(&html, "div");
        assert_eq!(attr(group, "role"), Some("group"));
        assert_eq!(attr(group, "data-variant"), Some("outline"));
        let items = opening_tags(&html, "button");
        assert_eq!(attr(items[0], "role"), Some("radio"));
        assert_eq!(attr(items[0], "aria-checked"), Some("true"));
        assert_eq!(attr(items[0], "data-state"), Some("on"));
        assert_eq!(attr(items[1], "data-state"), Some("off"));
        assert!(!has_attr(items[1], "aria-pressed"), "{}", items[1]);
    }

    #[test]
    fn multiple_group_items_are_pressable_buttons() {
        let html = render(|| {
            view! {
                <ToggleGroup mode=SelectionMode::Multiple value=vec!["bold".to_string(), "italic".to_string()] disabled=true>
                    <ToggleGroupItem value="bold">"B"</ToggleGroupItem>
                    <ToggleGroupItem value="italic">"I"</ToggleGroupItem>
                    <ToggleGroupItem value="underline">"U"</ToggleGroupItem>
                </ToggleGroup>
            }
        });
        let items = opening_tags(&html, "button");
        assert!(!has_attr(items[0], "role"), "{}", items[0]);
        assert_eq!(attr(items[0], "aria-pressed"), Some("true"));
        assert_eq!(attr(items[1], "aria-pressed"), Some("true"));
        assert_eq!(attr(items[2], "aria-pressed"), Some("false"));
        assert!(items.iter().all(|item| has_attr(item, "disabled")));
    }

    #[test]
    #[should_panic(expected = "ToggleGroupItem must be used within ToggleGroup")]
    fn item_outside_group_panics() {
        render(|| view! { <ToggleGroupItem value="a">"A"</ToggleGroupItem> });
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Toggle attr:data-testid="bold">"B"</Toggle>
                <ToggleGroup attr:data-testid="group">
                    <ToggleGroupItem value="left" attr:data-testid="item">"L"</ToggleGroupItem>
                </ToggleGroup>
            }
        });
        assert_eq!(test_id(&html, "aurora-toggle"), Some("bold"));
        assert_eq!(test_id(&html, "aurora-toggle-group"), Some("group"));
        assert_eq!(test_id(&html, "aurora-toggle-group-item"), Some("item"));
    }
}

use super::*;

const RADIO_ITEM_SELECTOR: &str = r#"[role="radio"]"#;

#[derive(Clone, Copy)]
struct RadioGroupContext {
    selected: Controllable<String>,
    disabled: MaybeSignal<bool>,
    size: Size,
}

#[component]
/// Single-choice group.
///
/// An empty value means nothing is selected. With a `name`, a hidden input
/// carries the value for form submission.
pub fn RadioGroup(
    #[prop(default = Size::Md)] size: Size,
    #[prop(default = Orientation::Vertical)] orientation: Orientation,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let selected = use_controllable(value, default_value, on_value_change);
    provide_context(RadioGroupContext {
        selected,
        disabled,
        size,
    });
    let current = selected.value;
    view! {
        <div
            role="radiogroup"
            aria-orientation=orientation.token()
            aria-required=move || flag_token(required.get())
            class=cn!("aurora-radio-group", class)
            data-size=size.token()
            data-orientation=orientation.token()
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(group) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &group, RADIO_ITEM_SELECTOR, orientation);
                }
            }
            {..attrs}
        >
            {children()}
            {name.map(|name| view! { <input type="hidden" name=name value=move || current.get() /> })}
        </div>
    }
}

#[component]
/// One option of a [`RadioGroup`].
pub fn RadioItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let group = expect_scoped::<RadioGroupContext>("RadioItem", "RadioGroup");
    let selected = group.selected;
    let item = value.clone();
    let checked = Signal::derive(move || selected.value.with(|current| *current == item));
    let is_disabled = move || disabled.get() || group.disabled.get();
    let data_state = move || checked_state_token(checked.get());
    let chosen = value.clone();

    view! {
        <button
            type="button"
            role="radio"
            id=id
            value=value
            aria-checked=move || if checked.get() { "true" } else { "false" }
            tabindex=move || if checked.get() || selected.value.with(String::is_empty) { "0" } else { "-1" }
            class=cn!("aurora-radio-item", class)
            data-size=group.size.token()
            data-state=data_state
            data-disabled=move || flag_token(is_disabled())
            disabled=is_disabled
            node_ref=node_ref
            on:click=move |_| selected.set.call(chosen.clone())
            {..attrs}
        >
            <Show when=move || checked.get()>
                <span class="aurora-radio-indicator" data-state=data_state></span>
            </Show>
            {children.map(|children| children())}
        </button>
    }
}

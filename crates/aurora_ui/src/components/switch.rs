use super::input::FieldWiring;
use super::*;

#[component]
/// On/off switch.
pub fn Switch(
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional)] on_checked_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let (_, id, described_by) = FieldWiring::resolve(id);
    let state = use_controllable(checked, default_checked, on_checked_change);
    let on = state.value;
    let data_state = move || checked_state_token(on.get());

    view! {
        <button
            type="button"
            role="switch"
            id=id
            aria-checked=move || if on.get() { "true" } else { "false" }
            aria-describedby=described_by
            class=cn!("aurora-switch", class)
            data-size=size.token()
            data-state=data_state
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| state.set.call(!state.get_untracked())
            {..attrs}
        >
            <span class="aurora-switch-thumb" data-state=data_state></span>
        </button>
        {name.map(|name| {
            view! {
                <input
                    type="checkbox"
                    aria-hidden="true"
                    tabindex="-1"
                    name=name
                    checked=move || on.get()
                    style=VISUALLY_HIDDEN_STYLE
                />
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, render, tag_with_class};

    #[test]
    fn off_by_default() {
        let html = render(|| view! { <Switch attr:aria-label="Toggle" /> });
        let switch = opening_tag(&html, "button");
        assert_eq!(attr(switch, "role"), Some("switch"));
        assert_eq!(attr(switch, "aria-checked"), Some("false"));
        assert_eq!(attr(switch, "data-state"), Some("unchecked"));
        assert_eq!(attr(switch, "data-size"), Some("md"));
        assert_eq!(attr(tag_with_class(&html, "aurora-switch-thumb"), "data-state"), Some("unchecked"));
    }

    #[test]
    fn default_checked_and_disabled() {
        let html = render(|| view! { <Switch default_checked=true disabled=true size=Size::Lg /> });
        let switch = opening_tag(&html, "button");
        assert_eq!(attr(switch, "aria-checked"), Some("true"));
        assert_eq!(attr(switch, "data-state"), Some("checked"));
        assert_eq!(attr(switch, "data-size"), Some("lg"));
        assert!(has_attr(switch, "disabled"), "{switch}");
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Switch attr:data-testid="wifi" attr:aria-label="Wi-Fi" /> });
        let switch = tag_with_class(&html, "aurora-switch");
        assert_eq!(attr(switch, "data-testid"), Some("wifi"));
        assert_eq!(attr(switch, "aria-label"), Some("Wi-Fi"));
    }
}

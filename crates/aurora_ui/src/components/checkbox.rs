use super::input::FieldWiring;
use super::*;

token_enum! {
    /// Tri-state checkbox value.
    pub enum CheckedState {
        /// Not checked.
        Unchecked => "unchecked",
        /// Checked.
        Checked => "checked",
        /// Partially checked, for parent rows of mixed children.
        Indeterminate => "indeterminate",
    }
    default Unchecked;
}

impl CheckedState {
    /// Value reported through `aria-checked`.
    pub fn aria_checked(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Indeterminate => "mixed",
        }
    }

    /// State after activation. Indeterminate resolves to checked.
    pub fn toggled(self) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked | Self::Indeterminate => Self::Checked,
        }
    }
}

impl From<bool> for CheckedState {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

#[component]
/// Tri-state checkbox rendered as a native button.
///
/// With a `name`, a hidden native checkbox mirrors the state for form
/// submission.
pub fn Checkbox(
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] checked: Option<MaybeSignal<CheckedState>>,
    #[prop(optional)] default_checked: CheckedState,
    #[prop(optional)] on_checked_change: Option<Callback<CheckedState>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = "on".to_string(), into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let (wiring, id, described_by) = FieldWiring::resolve(id);
    let state = use_controllable(checked, default_checked, on_checked_change);
    let current = state.value;
    let is_required = move || required.get() || wiring.field_required();
    let bubble_value = value.clone();

    view! {
        <button
            type="button"
            role="checkbox"
            id=id
            value=value
            aria-checked=move || current.get().aria_checked()
            aria-required=move || flag_token(is_required())
            aria-invalid=move || flag_token(wiring.field_error())
            aria-describedby=described_by
            class=cn!("aurora-checkbox", class)
            data-size=size.token()
            data-state=move || current.get().token()
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| state.set.call(state.get_untracked().toggled())
            {..attrs}
        >
            <Show when=move || current.get() != CheckedState::Unchecked>
                <span class="aurora-checkbox-indicator" data-state=move || current.get().token()>
                    {move || match current.get() {
                        CheckedState::Indeterminate => dash_icon().into_view(),
                        _ => check_icon().into_view(),
                    }}
                </span>
            </Show>
        </button>
        {name.map(|name| {
            view! {
                <input
                    type="checkbox"
                    aria-hidden="true"
                    tabindex="-1"
                    name=name
                    value=bubble_value.clone()
                    checked=move || current.get() == CheckedState::Checked
                    required=is_required
                    disabled=move || disabled.get()
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
    use crate::test_support::{attr, has_attr, opening_tag, opening_tags, render, tag_with_class};

    #[test]
    fn toggling_resolves_indeterminate_to_checked() {
        assert_eq!(CheckedState::Unchecked.toggled(), CheckedState::Checked);
        assert_eq!(CheckedState::Checked.toggled(), CheckedState::Unchecked);
        assert_eq!(CheckedState::Indeterminate.toggled(), CheckedState::Checked);
        assert_eq!(CheckedState::from(true), CheckedState::Checked);
    }

    #[test]
    fn unchecked_by_default() {
        let html = render(|| view! { <Checkbox attr:aria-label="Agree" /> });
        let checkbox = opening_tag(&html, "button");
        assert_eq!(attr(checkbox, "role"), Some("checkbox"));
        assert_eq!(attr(checkbox, "aria-checked"), Some("false"));
        assert_eq!(attr(checkbox, "data-state"), Some("unchecked"));
        assert_eq!(attr(checkbox, "data-size"), Some("md"));
        assert_eq!(attr(checkbox, "aria-label"), Some("Agree"));
        assert!(!html.contains("aurora-checkbox-indicator"));
        assert!(opening_tags(&html, "input").is_empty());
    }

    #[test]
    fn indeterminate_reports_mixed() {
        let html = render(|| view! { <Checkbox default_checked=CheckedState::Indeterminate /> });
        let checkbox = opening_tag(&html, "button");
        assert_eq!(attr(checkbox, "aria-checked"), Some("mixed"));
        assert_eq!(attr(checkbox, "data-state"), Some("indeterminate"));
        assert!(html.contains("aurora-checkbox-indicator"));
    }

    #[test]
    fn controlled_checked_with_hidden_input() {
        let html = render(|| {
            view! { <Checkbox checked=CheckedState::Checked name="terms" size=Size::Sm disabled=true /> }
        });
        let checkbox = opening_tag(&html, "button");
        assert_eq!(attr(checkbox, "data-state"), Some("checked"));
        assert!(has_attr(checkbox, "disabled"), "{checkbox}");
        let input = opening_tag(&html, "input");
        assert_eq!(attr(input, "name"), Some("terms"));
        assert_eq!(attr(input, "value"), Some("on"));
        assert!(has_attr(input, "checked"), "{input}");
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Checkbox attr:data-testid="terms" attr:aria-label="Accept terms" /> });
        let checkbox = tag_with_class(&html, "aurora-checkbox");
        assert_eq!(attr(checkbox, "data-testid"), Some("terms"));
        assert_eq!(attr(checkbox, "aria-label"), Some("Accept terms"));
    }
}

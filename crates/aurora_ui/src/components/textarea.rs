use super::input::FieldWiring;
use super::*;

#[component]
/// Multi-line text control. Shares [`InputVariant`] and the form field wiring
/// of [`Input`].
pub fn Textarea(
    #[prop(default = InputVariant::Outline)] variant: InputVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    /// Marks the control for content-sized height.
    #[prop(optional)]
    auto_resize: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let (wiring, id, described_by) = FieldWiring::resolve(id);
    let invalid = move || error.get() || wiring.field_error();
    let initial_value = value
        .as_ref()
        .map(|value| value.get_untracked())
        .unwrap_or_default();

    view! {
        <textarea
            id=id
            name=name
            rows=rows
            placeholder=placeholder
            prop:value=move || value.as_ref().map(|value| value.get())
            class=cn!("aurora-textarea", class)
            data-variant=variant.token()
            data-size=size.token()
            data-error=move || flag_token(invalid())
            data-autoresize=flag_token(auto_resize)
            aria-invalid=move || flag_token(invalid())
            aria-describedby=described_by
            required=move || required.get() || wiring.field_required()
            disabled=move || disabled.get()
            node_ref=node_ref
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            {..attrs}
        >
            {initial_value}
        </textarea>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, render, tag_with_class};

    #[test]
    fn defaults_without_flags() {
        let html = render(|| view! { <Textarea placeholder="Notes" /> });
        let textarea = opening_tag(&html, "textarea");
        assert_eq!(attr(textarea, "data-variant"), Some("outline"));
        assert_eq!(attr(textarea, "data-size"), Some("md"));
        assert!(!has_attr(textarea, "data-error"), "{textarea}");
        assert!(!has_attr(textarea, "data-autoresize"), "{textarea}");
    }

    #[test]
    fn auto_resize_and_error_flags() {
        let html = render(|| {
            view! { <Textarea variant=InputVariant::Ghost size=Size::Lg auto_resize=true error=true rows=4 /> }
        });
        let textarea = opening_tag(&html, "textarea");
        assert_eq!(attr(textarea, "data-variant"), Some("ghost"));
        assert_eq!(attr(textarea, "data-size"), Some("lg"));
        assert_eq!(attr(textarea, "data-autoresize"), Some("true"));
        assert_eq!(attr(textarea, "data-error"), Some("true"));
        assert_eq!(attr(textarea, "rows"), Some("4"));
    }

    #[test]
    fn picks_up_field_id() {
        let html = render(|| {
            view! {
                <FormField name="bio">
                    <FormLabel>"Bio"</FormLabel>
                    <Textarea value="Hello" />
                </FormField>
            }
        });
        let label_for = attr(opening_tag(&html, "label"), "for").expect("label for");
        let textarea = opening_tag(&html, "textarea");
        assert_eq!(attr(textarea, "id"), Some(label_for));
        assert!(html.contains("Hello"), "{html}");
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Textarea attr:data-testid="bio" attr:maxlength="280" /> });
        let textarea = tag_with_class(&html, "aurora-textarea");
        assert_eq!(attr(textarea, "data-testid"), Some("bio"));
        assert_eq!(attr(textarea, "maxlength"), Some("280"));
    }
}

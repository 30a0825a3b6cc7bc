use super::*;

token_enum! {
    /// Text field treatments shared by [`Input`] and [`Textarea`](super::Textarea).
    pub enum InputVariant {
        /// Bordered field.
        Outline => "outline",
        /// Tinted field.
        Filled => "filled",
        /// Borderless field.
        Ghost => "ghost",
    }
    default Outline;
}

/// Accessibility wiring a text control inherits from an enclosing
/// [`FormField`](super::FormField).
#[derive(Clone, Copy)]
pub(crate) struct FieldWiring {
    status: Option<Signal<FieldStatus>>,
}

impl FieldWiring {
    /// Resolves the control id and `aria-describedby` from the nearest field.
    pub(crate) fn resolve(id: Option<String>) -> (Self, Option<String>, Option<String>) {
        let field = use_context::<FormFieldContext>();
        let described_by = field.as_ref().map(FormFieldContext::described_by);
        let id = id.or_else(|| field.as_ref().map(|field| field.id.clone()));
        let wiring = Self {
            status: field.map(|field| field.status),
        };
        (wiring, id, described_by)
    }

    pub(crate) fn field_error(self) -> bool {
        self.status
            .is_some_and(|status| status.with(|status| status.error.is_some()))
    }

    pub(crate) fn field_required(self) -> bool {
        self.status.is_some_and(|status| status.with(|status| status.required))
    }
}

#[component]
/// Single-line text control.
///
/// Inside a [`FormField`](super::FormField) the control takes the field id
/// unless `id` is set, references the field's description and message, and
/// reflects the field's error and required flags.
pub fn Input(
    #[prop(default = InputVariant::Outline)] variant: InputVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let (wiring, id, described_by) = FieldWiring::resolve(id);
    let invalid = move || error.get() || wiring.field_error();
    let initial_value = value.as_ref().map(|value| value.get_untracked());

    view! {
        <input
            type=input_type
            id=id
            name=name
            placeholder=placeholder
            value=initial_value
            prop:value=move || value.as_ref().map(|value| value.get())
            class=cn!("aurora-input", class)
            data-variant=variant.token()
            data-size=size.token()
            data-error=move || flag_token(invalid())
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
        />
    }
}

//! Form grouping with scoped field context.
//!
//! [`FormField`] generates one identifier per instance and publishes a
//! [`FormFieldContext`] to its subtree. [`FormLabel`], [`FormDescription`],
//! and [`FormMessage`] read it to wire `for`, `id`, and live-region linkage
//! without the caller threading ids through props. Inputs rendered inside a
//! field pick the same record up to link `aria-describedby`.

use std::sync::atomic::{AtomicUsize, Ordering};

use aurora_core::{expect_scoped, require_context, UiError};

use super::*;

static NEXT_FIELD_INSTANCE_ID: AtomicUsize = AtomicUsize::new(1);

token_enum! {
    /// Message tone for [`FormMessage`].
    pub enum MessageType {
        /// Validation failure. Falls back to the field error.
        Error => "error",
        /// Positive confirmation.
        Success => "success",
    }
    default Error;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Per-render validation status of a field. Replaced whole, never patched.
pub struct FieldStatus {
    /// Non-empty error text, if the field is invalid.
    pub error: Option<String>,
    /// Whether the field is required.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifiers a field derives from its generated id.
pub struct FieldIds {
    /// Control id; labels point here.
    pub id: String,
    /// Id of the description text.
    pub description_id: String,
    /// Id of the message text.
    pub message_id: String,
}

impl FieldIds {
    /// Derives the linked ids for field `name` and generated `instance`.
    pub fn derive(name: &str, instance: usize) -> Self {
        let id = format!("{name}-field-{instance}");
        Self {
            description_id: format!("{id}-description"),
            message_id: format!("{id}-message"),
            id,
        }
    }
}

#[derive(Clone)]
/// Scoped record published by [`FormField`].
pub struct FormFieldContext {
    /// Control id; contains the field name.
    pub id: String,
    /// Logical field name.
    pub name: String,
    /// `id` + `-description`.
    pub description_id: String,
    /// `id` + `-message`.
    pub message_id: String,
    /// Current validation status.
    pub status: Signal<FieldStatus>,
}

impl FormFieldContext {
    fn new(name: String, ids: FieldIds, status: Signal<FieldStatus>) -> Self {
        Self {
            id: ids.id,
            name,
            description_id: ids.description_id,
            message_id: ids.message_id,
            status,
        }
    }

    /// Current error text.
    pub fn error(&self) -> Option<String> {
        self.status.with(|status| status.error.clone())
    }

    /// Whether the field is currently required.
    pub fn required(&self) -> bool {
        self.status.with(|status| status.required)
    }

    /// Space-separated ids a control should reference in `aria-describedby`.
    pub fn described_by(&self) -> String {
        format!("{} {}", self.description_id, self.message_id)
    }
}

fn next_field_instance() -> usize {
    NEXT_FIELD_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Reads the enclosing field record.
///
/// # Errors
///
/// Returns [`UiError::MissingProvider`] outside a [`FormField`].
pub fn try_use_form_field() -> Result<FormFieldContext, UiError> {
    require_context::<FormFieldContext>("use_form_field", "FormField")
}

/// Reads the enclosing field record.
///
/// # Panics
///
/// Panics with "use_form_field must be used within FormField" outside a
/// [`FormField`].
#[track_caller]
pub fn use_form_field() -> FormFieldContext {
    expect_scoped::<FormFieldContext>("use_form_field", "FormField")
}

#[component]
/// Form root.
pub fn Form(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Form>,
    #[prop(optional)] on_submit: Option<Callback<SubmitEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class=cn!("aurora-form", class)
            node_ref=node_ref
            on:submit=move |ev| {
                if let Some(on_submit) = on_submit.as_ref() {
                    on_submit.call(ev);
                }
            }
            {..attrs}
        >
            {children()}
        </form>
    }
}

#[component]
/// Field grouping that scopes one identifier and its ARIA linkage.
pub fn FormField(
    #[prop(into)] name: String,
    /// Error text; empty means valid.
    #[prop(optional, into)]
    error: Option<MaybeSignal<String>>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ids = FieldIds::derive(&name, next_field_instance());
    let status = Signal::derive(move || FieldStatus {
        error: error
            .as_ref()
            .map(|error| error.get())
            .filter(|error| !error.is_empty()),
        required: required.get(),
    });
    provide_context(FormFieldContext::new(name, ids, status));

    view! {
        <div class=cn!("aurora-form-field", class) {..attrs} node_ref=node_ref>
            {children()}
        </div>
    }
}

#[component]
/// Label bound to the enclosing field's control.
pub fn FormLabel(
    #[prop(default = LabelSize::Md)] size: LabelSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Label>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let field = use_form_field();
    let status = field.status;
    view! {
        <Label
            html_for=field.id
            size=size
            disabled=disabled
            required=Signal::derive(move || status.with(|status| status.required))
            error=Signal::derive(move || status.with(|status| status.error.is_some()))
            class=cn!("aurora-form-label", class)
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </Label>
    }
}

#[component]
/// Helper text linked through the field's description id.
pub fn FormDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let field = use_form_field();
    view! {
        <p
            id=field.description_id
            class=cn!("aurora-form-description", class)
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </p>
    }
}

#[component]
/// Status text linked through the field's message id.
///
/// Renders explicit children when given; otherwise an error-type message
/// shows the field error. With neither, nothing is rendered.
pub fn FormMessage(
    #[prop(default = MessageType::Error)] message_type: MessageType,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let field = use_form_field();
    let status = field.status;
    let message_id = field.message_id;
    let class = cn!("aurora-form-message", class);

    move || {
        let content = match children.as_ref() {
            Some(children) => children().into_view(),
            None if message_type == MessageType::Error => {
                status.with(|status| status.error.clone())?.into_view()
            }
            None => return None,
        };
        let attrs = attrs.clone();
        Some(view! {
            <p
                id=message_id.clone()
                role="alert"
                aria-live="polite"
                data-type=message_type.token()
                class=class.clone()
                {..attrs}
                node_ref=node_ref
            >
                {content}
            </p>
        })
    }
}

use super::*;

token_enum! {
    /// Label sizes.
    pub enum LabelSize {
        /// Compact label.
        Sm => "sm",
        /// Default label.
        Md => "md",
    }
    default Md;
}

#[component]
/// Text label for a form control, with an optional required marker.
pub fn Label(
    #[prop(default = LabelSize::Md)] size: LabelSize,
    /// Id of the labelled control.
    #[prop(optional, into)]
    html_for: Option<String>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Label>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            for=html_for
            class=cn!("aurora-label", class)
            data-size=size.token()
            data-disabled=move || flag_token(disabled.get())
            data-error=move || flag_token(error.get())
            data-required=move || flag_token(required.get())
            {..attrs}
            node_ref=node_ref
        >
            {children()}
            <Show when=move || required.get()>
                <span class="aurora-label-asterisk" aria-hidden="true">"*"</span>
            </Show>
        </label>
    }
}

use super::*;

token_enum! {
    /// Button treatments.
    pub enum ButtonVariant {
        /// Filled button.
        Solid => "solid",
        /// Bordered button.
        Outline => "outline",
        /// Borderless button.
        Ghost => "ghost",
        /// Glowing emphasis button.
        Glow => "glow",
    }
    default Solid;
}

#[component]
/// Action button with loading state.
///
/// A loading button is disabled and shows a small spinner before its content.
pub fn Button(
    #[prop(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] accent: Option<Accent>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Native button type; `button` unless set.
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=cn!("aurora-button", class)
            data-variant=variant.token()
            data-size=size.token()
            data-accent=accent.map(Accent::token)
            data-loading=move || flag_token(loading.get())
            disabled=move || disabled.get() || loading.get()
            node_ref=node_ref
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            <Show when=move || loading.get()>
                <Spinner size=Size::Sm class="aurora-button-spinner" />
            </Show>
            <span class="aurora-button-content" data-loading=move || flag_token(loading.get())>
                {children()}
            </span>
        </button>
    }
}

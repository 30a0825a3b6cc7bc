use super::*;

token_enum! {
    /// Loading indicator styles.
    pub enum SpinnerVariant {
        /// Rotating ring.
        Ring => "ring",
        /// Three bouncing dots.
        Dots => "dots",
        /// Pulsing disc.
        Pulse => "pulse",
    }
    default Ring;
}

#[component]
/// Loading indicator announced as a status.
pub fn Spinner(
    #[prop(default = SpinnerVariant::Ring)] variant: SpinnerVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(default = "Loading")] label: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <span
            role="status"
            aria-label=label
            class=cn!("aurora-spinner", class)
            data-variant=variant.token()
            data-size=size.token()
            {..attrs}
            node_ref=node_ref
        >
            {(variant == SpinnerVariant::Dots).then(|| {
                view! {
                    <span class="aurora-spinner-dot"></span>
                    <span class="aurora-spinner-dot"></span>
                    <span class="aurora-spinner-dot"></span>
                }
            })}
        </span>
    }
}

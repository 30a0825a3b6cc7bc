use super::*;

token_enum! {
    /// Separator treatments.
    pub enum SeparatorVariant {
        /// Hairline rule.
        Default => "default",
        /// Glowing rule.
        Glow => "glow",
    }
    default Default;
}

#[component]
/// Visual or semantic divider.
///
/// Decorative separators are removed from the accessibility tree; semantic
/// ones expose `role="separator"` and report a vertical orientation.
pub fn Separator(
    #[prop(default = SeparatorVariant::Default)] variant: SeparatorVariant,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = true)] decorative: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let role = if decorative { "none" } else { "separator" };
    let aria_orientation =
        (!decorative && orientation == Orientation::Vertical).then_some(orientation.token());

    view! {
        <div
            role=role
            aria-orientation=aria_orientation
            class=cn!("aurora-separator", class)
            data-variant=variant.token()
            data-orientation=orientation.token()
            {..attrs}
            node_ref=node_ref
        ></div>
    }
}

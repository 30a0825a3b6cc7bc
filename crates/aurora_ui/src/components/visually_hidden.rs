use super::*;

/// Inline style that hides content visually while keeping it announced.
pub const VISUALLY_HIDDEN_STYLE: &str = "position: absolute; border: 0; width: 1px; height: 1px; \
     padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); \
     white-space: nowrap; word-wrap: normal";

#[component]
/// Content available to screen readers only.
pub fn VisuallyHidden(
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span style={VISUALLY_HIDDEN_STYLE} {..attrs} node_ref=node_ref>
            {children()}
        </span>
    }
}

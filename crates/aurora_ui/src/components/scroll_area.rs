use super::*;

token_enum! {
    /// Scrollbar treatments.
    pub enum ScrollAreaVariant {
        /// Visible track and thumb.
        Default => "default",
        /// Thumb only.
        Minimal => "minimal",
    }
    default Default;
}

#[component]
/// Scrollable region with styled scrollbars on both axes.
pub fn ScrollArea(
    #[prop(default = ScrollAreaVariant::Default)] variant: ScrollAreaVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    /// Handle to the scrolling viewport.
    #[prop(optional)]
    viewport_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scrollbar = |orientation: Orientation| {
        view! {
            <div class="aurora-scroll-area-scrollbar" data-orientation=orientation.token()>
                <div class="aurora-scroll-area-thumb"></div>
            </div>
        }
    };
    view! {
        <div
            class=cn!("aurora-scroll-area", class)
            data-variant=variant.token()
            style="position: relative; overflow: hidden"
            {..attrs}
            node_ref=node_ref
        >
            <div
                class="aurora-scroll-area-viewport"
                style="width: 100%; height: 100%; overflow: auto"
                node_ref=viewport_ref
            >
                {children()}
            </div>
            {scrollbar(Orientation::Vertical)}
            {scrollbar(Orientation::Horizontal)}
            <div class="aurora-scroll-area-corner"></div>
        </div>
    }
}

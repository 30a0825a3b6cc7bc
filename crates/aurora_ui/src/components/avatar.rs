use super::*;

token_enum! {
    /// Avatar outlines.
    pub enum AvatarVariant {
        /// Round avatar.
        Circle => "circle",
        /// Rounded square.
        Square => "square",
    }
    default Circle;
}

#[component]
/// User image with a text fallback.
///
/// `accent` is forwarded verbatim to `data-accent`.
pub fn Avatar(
    /// Image source. Without one, or with a blank one, the fallback text renders.
    #[prop(optional, into)]
    src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] fallback: Option<String>,
    #[prop(default = AvatarVariant::Circle)] variant: AvatarVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] accent: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let content = match src.filter(|src| !src.trim().is_empty()) {
        Some(src) => view! { <img src=src alt=alt class="aurora-avatar-image" /> }.into_view(),
        None => view! {
            <span class="aurora-avatar-fallback" role="img" aria-label=alt>
                {fallback}
            </span>
        }
        .into_view(),
    };
    view! {
        <span
            class=cn!("aurora-avatar", class)
            data-variant=variant.token()
            data-size=size.token()
            data-accent={accent}
            {..attrs}
            node_ref=node_ref
        >
            {content}
        </span>
    }
}

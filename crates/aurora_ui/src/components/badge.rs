use super::*;

token_enum! {
    /// Badge treatments.
    pub enum BadgeVariant {
        /// Filled badge.
        Solid => "solid",
        /// Bordered badge.
        Outline => "outline",
        /// Glowing badge.
        Glow => "glow",
    }
    default Solid;
}

#[component]
/// Compact status or count marker.
pub fn Badge(
    #[prop(default = BadgeVariant::Solid)] variant: BadgeVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] accent: Option<Accent>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=cn!("aurora-badge", class)
            data-variant=variant.token()
            data-size=size.token()
            data-accent=accent.map(Accent::token)
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, render, tag_with_class};

    #[test]
    fn defaults_to_solid_md_without_accent() {
        let html = render(|| view! { <Badge>"New"</Badge> });
        let badge = opening_tag(&html, "span");
        assert_eq!(attr(badge, "data-variant"), Some("solid"));
        assert_eq!(attr(badge, "data-size"), Some("md"));
        assert!(!has_attr(badge, "data-accent"), "{badge}");
        assert!(html.contains("New"));
    }

    #[test]
    fn every_variant_and_accent_is_projected_verbatim() {
        for &variant in BadgeVariant::ALL {
            for &accent in Accent::ALL {
                let html = render(move || view! { <Badge variant=variant accent=accent>"x"</Badge> });
                let badge = opening_tag(&html, "span");
                assert_eq!(attr(badge, "data-variant"), Some(variant.token()));
                assert_eq!(attr(badge, "data-accent"), Some(accent.token()));
            }
        }
    }

    #[test]
    fn identical_props_render_identically() {
        let first = render(|| view! { <Badge size=Size::Lg accent=Accent::Amber>"Same"</Badge> });
        let second = render(|| view! { <Badge size=Size::Lg accent=Accent::Amber>"Same"</Badge> });
        for name in ["class", "data-variant", "data-size", "data-accent"] {
            assert_eq!(
                attr(opening_tag(&first, "span"), name),
                attr(opening_tag(&second, "span"), name)
            );
        }
    }

    #[test]
    fn forwards_caller_attributes() {
        let html = render(|| view! { <Badge class="custom" attr:title="Count">"3"</Badge> });
        let badge = opening_tag(&html, "span");
        assert_eq!(attr(badge, "class"), Some("aurora-badge custom"));
        assert_eq!(attr(badge, "title"), Some("Count"));
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Badge attr:title="Unread" attr:data-testid="count">"3"</Badge> });
        let badge = tag_with_class(&html, "aurora-badge");
        assert_eq!(attr(badge, "title"), Some("Unread"));
        assert_eq!(attr(badge, "data-testid"), Some("count"));
    }
}

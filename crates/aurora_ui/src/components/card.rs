use aurora_core::{merge_attrs, polymorphic_root, As};
use leptos::html::AnyElement;

use super::*;

token_enum! {
    /// Card surfaces.
    pub enum CardVariant {
        /// Flat surface.
        Surface => "surface",
        /// Raised surface.
        Elevated => "elevated",
        /// Translucent surface.
        Glass => "glass",
    }
    default Surface;
}

#[component]
/// Content container that can render as any sectioning tag.
pub fn Card(
    #[prop(default = CardVariant::Surface)] variant: CardVariant,
    /// Root tag; `div` unless set.
    #[prop(default = As::Div)]
    as_: As,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<AnyElement>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let computed = vec![
        ("class", cn!("aurora-card", class).into_attribute()),
        ("data-variant", variant.token().into_attribute()),
    ];
    polymorphic_root(as_, node_ref, merge_attrs(computed, attrs), children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, test_id};

    #[test]
    fn defaults_to_surface_div() {
        let html = render(|| view! { <Card>"Content"</Card> });
        let card = opening_tag(&html, "div");
        assert_eq!(attr(card, "data-variant"), Some("surface"));
        assert_eq!(attr(card, "class"), Some("aurora-card"));
        assert!(html.contains("Content"));
    }

    #[test]
    fn renders_substituted_tag_with_computed_attributes() {
        let html = render(|| {
            view! {
                <Card as_=As::Section variant=CardVariant::Glass class="custom" attr:aria-label="Stats">
                    "Body"
                </Card>
            }
        });
        let card = opening_tag(&html, "section");
        assert_eq!(attr(card, "data-variant"), Some("glass"));
        assert_eq!(attr(card, "class"), Some("aurora-card custom"));
        assert_eq!(attr(card, "aria-label"), Some("Stats"));
        assert!(html.contains("</section>"));
        assert!(!html.contains("<div"), "{html}");
    }

    #[test]
    fn every_variant_is_projected() {
        for &variant in CardVariant::ALL {
            let html = render(move || view! { <Card variant=variant as_=As::Article /> });
            assert_eq!(attr(opening_tag(&html, "article"), "data-variant"), Some(variant.token()));
        }
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Card attr:data-testid="summary">"Body"</Card> });
        assert_eq!(test_id(&html, "aurora-card"), Some("summary"));
    }
}

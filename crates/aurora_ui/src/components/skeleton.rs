use aurora_core::merge_attrs;

use super::*;

token_enum! {
    /// Placeholder animation styles.
    pub enum SkeletonVariant {
        /// Opacity pulse.
        Pulse => "pulse",
        /// Sweeping highlight.
        Shimmer => "shimmer",
        /// Glowing pulse.
        Glow => "glow",
    }
    default Pulse;
}

token_enum! {
    /// Placeholder outline.
    pub enum SkeletonShape {
        /// Line of text.
        Text => "text",
        /// Circle, for avatars.
        Circular => "circular",
        /// Block.
        Rectangular => "rectangular",
    }
    default Text;
}

fn skeleton_style(width: Option<&str>, height: Option<&str>, radius: Option<&str>) -> Option<String> {
    let rules = [("width", width), ("height", height), ("border-radius", radius)]
        .into_iter()
        .filter_map(|(property, value)| value.map(|value| format!("{property}: {value}")))
        .collect::<Vec<_>>();
    (!rules.is_empty()).then(|| rules.join("; "))
}

#[component]
/// Loading placeholder hidden from assistive technology.
///
/// `width`, `height`, and `radius` take CSS lengths and land in the inline
/// style.
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Pulse)] variant: SkeletonVariant,
    #[prop(default = SkeletonShape::Text)] shape: SkeletonShape,
    #[prop(default = true)] animated: bool,
    #[prop(optional, into)] width: Option<String>,
    #[prop(optional, into)] height: Option<String>,
    #[prop(optional, into)] radius: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let style = skeleton_style(width.as_deref(), height.as_deref(), radius.as_deref());
    let attrs = merge_attrs(vec![("style", style.into_attribute())], attrs);
    view! {
        <div
            aria-hidden="true"
            class=cn!("aurora-skeleton", class)
            data-variant=variant.token()
            data-shape=shape.token()
            data-animated=flag_token(animated)
            {..attrs}
            node_ref=node_ref
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, render, test_id};

    #[test]
    fn defaults_to_animated_pulse_text() {
        let html = render(|| view! { <Skeleton /> });
        let skeleton = opening_tag(&html, "div");
        assert_eq!(attr(skeleton, "aria-hidden"), Some("true"));
        assert_eq!(attr(skeleton, "data-variant"), Some("pulse"));
        assert_eq!(attr(skeleton, "data-shape"), Some("text"));
        assert_eq!(attr(skeleton, "data-animated"), Some("true"));
        assert!(!has_attr(skeleton, "style"), "{skeleton}");
    }

    #[test]
    fn static_circle_with_dimensions() {
        let html = render(|| {
            view! {
                <Skeleton
                    variant=SkeletonVariant::Shimmer
                    shape=SkeletonShape::Circular
                    animated=false
                    width="48px"
                    height="48px"
                />
            }
        });
        let skeleton = opening_tag(&html, "div");
        assert_eq!(attr(skeleton, "data-shape"), Some("circular"));
        assert!(!has_attr(skeleton, "data-animated"), "{skeleton}");
        assert_eq!(attr(skeleton, "style"), Some("width: 48px; height: 48px"));
    }

    #[test]
    fn style_rules_keep_property_order() {
        assert_eq!(skeleton_style(None, None, None), None);
        assert_eq!(
            skeleton_style(Some("100%"), None, Some("4px")).as_deref(),
            Some("width: 100%; border-radius: 4px")
        );
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Skeleton attr:data-testid="placeholder" /> });
        assert_eq!(test_id(&html, "aurora-skeleton"), Some("placeholder"));
    }
}

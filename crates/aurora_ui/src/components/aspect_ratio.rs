use super::*;

fn padding_style(ratio: f64) -> String {
    format!("position: relative; width: 100%; padding-bottom: {}%", 100.0 / ratio)
}

#[component]
/// Box that keeps its content at a fixed width-to-height ratio.
pub fn AspectRatio(
    /// Width divided by height.
    #[prop(default = 16.0 / 9.0)]
    ratio: f64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn!("aurora-aspect-ratio", class) {..attrs} node_ref=node_ref>
            <div style=padding_style(ratio)>
                <div style="position: absolute; inset: 0">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tags, render, test_id};

    #[test]
    fn square_ratio_pads_full_width() {
        assert_eq!(padding_style(1.0), "position: relative; width: 100%; padding-bottom: 100%");
    }

    #[test]
    fn renders_children_in_padded_box() {
        let html = render(|| view! { <AspectRatio class="custom"><span>"Content"</span></AspectRatio> });
        let divs = opening_tags(&html, "div");
        assert_eq!(attr(divs[0], "class"), Some("aurora-aspect-ratio custom"));
        assert!(attr(divs[1], "style").is_some_and(|style| style.contains("padding-bottom: 56.25%")));
        assert!(html.contains("Content"));
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <AspectRatio attr:data-testid="frame">"Media"</AspectRatio> });
        assert_eq!(test_id(&html, "aurora-aspect-ratio"), Some("frame"));
    }
}

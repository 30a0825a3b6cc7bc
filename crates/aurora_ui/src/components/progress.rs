use leptos::logging;

use super::*;

token_enum! {
    /// Progress bar treatments.
    pub enum ProgressVariant {
        /// Flat fill.
        Default => "default",
        /// Glowing fill.
        Glow => "glow",
    }
    default Default;
}

const DEFAULT_MAX: f64 = 100.0;

/// Resolves a usable maximum. Non-positive maxima fall back to 100.
fn effective_max(max: f64) -> f64 {
    if max > 0.0 {
        max
    } else {
        logging::warn!("Progress max must be positive, got {max}; using {DEFAULT_MAX}");
        DEFAULT_MAX
    }
}

/// Completed share in percent, clamped to `[0, 100]`.
fn percentage(value: f64, max: f64) -> f64 {
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn indicator_transform(percent: f64) -> String {
    format!("transform: translateX(-{}%)", 100.0 - percent)
}

fn progress_state(value: f64, max: f64) -> &'static str {
    if value >= max {
        "complete"
    } else {
        "loading"
    }
}

#[component]
/// Determinate or indeterminate progress bar.
pub fn Progress(
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = DEFAULT_MAX)] max: f64,
    #[prop(optional)] indeterminate: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let max = effective_max(max);
    let value_now = move || (!indeterminate).then(|| value.get().clamp(0.0, max));
    let state = move || match value_now() {
        Some(value) => progress_state(value, max),
        None => "indeterminate",
    };
    let indicator_style = [(
        "style",
        (move || value_now().map(|value| indicator_transform(percentage(value, max)))).into_attribute(),
    )];

    view! {
        <div
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=value_now
            class=cn!("aurora-progress", class)
            data-variant=variant.token()
            data-size=size.token()
            data-indeterminate=flag_token(indeterminate)
            data-state=state
            data-max={max}
            {..attrs}
            node_ref=node_ref
        >
            <div class="aurora-progress-indicator" {..indicator_style} data-state=state></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, render, tag_with_class};

    #[test]
    fn non_positive_max_falls_back_to_default() {
        assert_eq!(effective_max(0.0), 100.0);
        assert_eq!(effective_max(-5.0), 100.0);
        assert_eq!(effective_max(20.0), 20.0);
    }

    #[test]
    fn indicator_offset_tracks_percentage() {
        assert_eq!(indicator_transform(percentage(50.0, 100.0)), "transform: translateX(-50%)");
        assert_eq!(indicator_transform(percentage(5.0, 20.0)), "transform: translateX(-75%)");
        assert_eq!(percentage(150.0, 100.0), 100.0);
    }

    #[test]
    fn determinate_bar_reports_value() {
        let html = render(|| view! { <Progress value=40.0 /> });
        let root = opening_tag(&html, "div");
        assert_eq!(attr(root, "role"), Some("progressbar"));
        assert_eq!(attr(root, "aria-valuenow"), Some("40"));
        assert_eq!(attr(root, "aria-valuemax"), Some("100"));
        assert_eq!(attr(root, "data-state"), Some("loading"));
        assert_eq!(attr(root, "data-variant"), Some("default"));
        assert!(!has_attr(root, "data-indeterminate"), "{root}");
        let indicator = tag_with_class(&html, "aurora-progress-indicator");
        assert_eq!(attr(indicator, "style"), Some("transform: translateX(-60%)"));
    }

    #[test]
    fn indeterminate_bar_omits_value_and_offset() {
        let html = render(|| view! { <Progress variant=ProgressVariant::Glow indeterminate=true value=40.0 /> });
        let root = opening_tag(&html, "div");
        assert_eq!(attr(root, "data-indeterminate"), Some("true"));
        assert_eq!(attr(root, "data-state"), Some("indeterminate"));
        assert!(!has_attr(root, "aria-valuenow"), "{root}");
        let indicator = tag_with_class(&html, "aurora-progress-indicator");
        assert!(!has_attr(indicator, "style"), "{indicator}");
    }

    #[test]
    fn full_bar_is_complete() {
        let html = render(|| view! { <Progress value=10.0 max=10.0 /> });
        assert_eq!(attr(opening_tag(&html, "div"), "data-state"), Some("complete"));
    }

    #[test]
    fn forwards_attributes_to_root() {
        let html = render(|| view! { <Progress value=40.0 attr:data-testid="upload" attr:aria-label="Upload" /> });
        let root = tag_with_class(&html, "aurora-progress");
        assert_eq!(attr(root, "data-testid"), Some("upload"));
        assert_eq!(attr(root, "aria-label"), Some("Upload"));
    }
}

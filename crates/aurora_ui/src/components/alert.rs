use super::*;

token_enum! {
    /// Alert severities.
    pub enum AlertVariant {
        /// Neutral information.
        Info => "info",
        /// Positive outcome.
        Success => "success",
        /// Needs attention.
        Warning => "warning",
        /// Failure.
        Error => "error",
    }
    default Info;
}

impl AlertVariant {
    /// Live-region role announced when the caller supplies none.
    pub fn default_role(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

#[component]
/// Inline status banner.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    /// Overrides the severity-derived role.
    #[prop(optional, into)]
    role: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let role = role.unwrap_or_else(|| variant.default_role().to_string());
    view! {
        <div
            role=role
            class=cn!("aurora-alert", class)
            data-variant=variant.token()
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Alert heading.
pub fn AlertTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H5>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <h5 class=cn!("aurora-alert-title", class) {..attrs} node_ref=node_ref>
            {children()}
        </h5>
    }
}

#[component]
/// Alert body text.
pub fn AlertDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=cn!("aurora-alert-description", class) {..attrs} node_ref=node_ref>
            {children()}
        </p>
    }
}

#[component]
/// Decorative alert glyph slot.
pub fn AlertIcon(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <span aria-hidden="true" class=cn!("aurora-alert-icon", class) {..attrs} node_ref=node_ref>
            {children.map(|children| children())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, test_id};

    #[test]
    fn role_follows_severity() {
        for (variant, role) in [
            (AlertVariant::Info, "status"),
            (AlertVariant::Success, "status"),
            (AlertVariant::Warning, "alert"),
            (AlertVariant::Error, "alert"),
        ] {
            let html = render(move || view! { <Alert variant=variant>"Message"</Alert> });
            let alert = opening_tag(&html, "div");
            assert_eq!(attr(alert, "role"), Some(role));
            assert_eq!(attr(alert, "data-variant"), Some(variant.token()));
        }
    }

    #[test]
    fn caller_role_wins() {
        let html = render(|| view! { <Alert variant=AlertVariant::Error role="log">"Message"</Alert> });
        assert_eq!(attr(opening_tag(&html, "div"), "role"), Some("log"));
    }

    #[test]
    fn renders_parts() {
        let html = render(|| {
            view! {
                <Alert>
                    <AlertIcon>"i"</AlertIcon>
                    <AlertTitle>"Heads up"</AlertTitle>
                    <AlertDescription class="custom">"Details"</AlertDescription>
                </Alert>
            }
        });
        assert_eq!(attr(opening_tag(&html, "span"), "aria-hidden"), Some("true"));
        assert_eq!(attr(opening_tag(&html, "h5"), "class"), Some("aurora-alert-title"));
        assert_eq!(
            attr(opening_tag(&html, "p"), "class"),
            Some("aurora-alert-description custom")
        );
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Alert attr:data-testid="root">
                    <AlertIcon attr:data-testid="icon" />
                    <AlertTitle attr:data-testid="title">"Heads up"</AlertTitle>
                    <AlertDescription attr:data-testid="description">"Saved."</AlertDescription>
                </Alert>
            }
        });
        assert_eq!(test_id(&html, "aurora-alert"), Some("root"));
        assert_eq!(test_id(&html, "aurora-alert-icon"), Some("icon"));
        assert_eq!(test_id(&html, "aurora-alert-title"), Some("title"));
        assert_eq!(test_id(&html, "aurora-alert-description"), Some("description"));
    }
}

use super::dialog::{
    dialog_close, dialog_description, dialog_surface, dialog_title, dialog_trigger, DialogScope,
    Dismiss,
};
use super::*;

token_enum! {
    /// Confirmation tone.
    pub enum AlertDialogVariant {
        /// Neutral confirmation.
        Default => "default",
        /// Irreversible action.
        Destructive => "destructive",
    }
    default Default;
}

token_enum! {
    /// Alert dialog widths.
    pub enum AlertDialogSize {
        /// Narrow.
        Sm => "sm",
        /// Default.
        Md => "md",
    }
    default Md;
}

#[derive(Clone)]
struct AlertDialogContext(DialogScope);

fn use_alert_dialog(part: &'static str) -> DialogScope {
    expect_scoped::<AlertDialogContext>(part, "AlertDialog").0
}

#[component]
/// Confirmation dialog root. Renders no element of its own.
pub fn AlertDialog(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    provide_context(AlertDialogContext(DialogScope::new(
        "alert-dialog",
        open,
        default_open,
        on_open_change,
    )));
    children()
}

#[component]
/// Button opening the enclosing [`AlertDialog`].
pub fn AlertDialogTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogTrigger");
    dialog_trigger(
        &scope,
        "dialog",
        cn!("aurora-alert-dialog-trigger", class),
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Confirmation surface. Overlay clicks do not dismiss it.
pub fn AlertDialogContent(
    #[prop(default = AlertDialogVariant::Default)] variant: AlertDialogVariant,
    #[prop(default = AlertDialogSize::Md)] size: AlertDialogSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogContent");
    let mut computed = vec![
        ("data-variant", variant.token().into_attribute()),
        ("data-size", size.token().into_attribute()),
    ];
    computed.extend(attrs);
    dialog_surface(
        scope,
        "alertdialog",
        Dismiss::EscapeOnly,
        "alert-dialog",
        cn!("aurora-alert-dialog-content", class),
        node_ref,
        computed,
        children,
    )
}

#[component]
/// Heading that labels the confirmation.
pub fn AlertDialogTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H2>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogTitle");
    dialog_title(&scope, cn!("aurora-alert-dialog-title", class), node_ref, attrs, children)
}

#[component]
/// Text that describes the consequence.
pub fn AlertDialogDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogDescription");
    dialog_description(
        &scope,
        cn!("aurora-alert-dialog-description", class),
        node_ref,
        attrs,
        children,
    )
}

#[component]
/// Confirming button. Closes the dialog, then reports the click.
pub fn AlertDialogAction(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogAction");
    dialog_close(
        &scope,
        cn!("aurora-alert-dialog-action", class),
        node_ref,
        on_click,
        attrs,
        Some(children),
    )
}

#[component]
/// Dismissing button. Closes the dialog, then reports the click.
pub fn AlertDialogCancel(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_alert_dialog("AlertDialogCancel");
    dialog_close(
        &scope,
        cn!("aurora-alert-dialog-cancel", class),
        node_ref,
        on_click,
        attrs,
        Some(children),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, render, tag_with_class, test_id};

    #[test]
    fn open_dialog_is_an_alertdialog() {
        let html = render(|| {
            view! {
                <AlertDialog open=true>
                    <AlertDialogContent variant=AlertDialogVariant::Destructive size=AlertDialogSize::Sm>
                        <AlertDialogTitle>"Delete project?"</AlertDialogTitle>
                        <AlertDialogDescription>"This cannot be undone."</AlertDialogDescription>
                        <AlertDialogCancel>"Cancel"</AlertDialogCancel>
                        <AlertDialogAction>"Delete"</AlertDialogAction>
                    </AlertDialogContent>
                </AlertDialog>
            }
        });
        let content = tag_with_class(&html, "aurora-alert-dialog-content");
        assert_eq!(attr(content, "role"), Some("alertdialog"));
        assert_eq!(attr(content, "data-variant"), Some("destructive"));
        assert_eq!(attr(content, "data-size"), Some("sm"));
        assert!(attr(content, "aria-labelledby").is_some_and(|id| id.ends_with("-title")));
        assert!(!has_label(tag_with_class(&html, "aurora-alert-dialog-action")));
        assert!(html.contains("Delete project?"));
    }

    fn has_label(tag: &str) -> bool {
        attr(tag, "aria-label").is_some()
    }

    #[test]
    fn closed_dialog_renders_only_trigger() {
        let html = render(|| {
            view! {
                <AlertDialog>
                    <AlertDialogTrigger>"Delete"</AlertDialogTrigger>
                    <AlertDialogContent><AlertDialogTitle>"Sure?"</AlertDialogTitle></AlertDialogContent>
                </AlertDialog>
            }
        });
        assert!(html.contains("aurora-alert-dialog-trigger"));
        assert!(!html.contains("alertdialog"), "{html}");
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <AlertDialog default_open=true>
                    <AlertDialogTrigger attr:data-testid="trigger">"Delete"</AlertDialogTrigger>
                    <AlertDialogContent attr:data-testid="content">
                        <AlertDialogTitle attr:data-testid="title">"Sure?"</AlertDialogTitle>
                        <AlertDialogDescription attr:data-testid="description">
                            "This cannot be undone."
                        </AlertDialogDescription>
                        <AlertDialogCancel attr:data-testid="cancel">"Cancel"</AlertDialogCancel>
                        <AlertDialogAction attr:data-testid="action">"Delete"</AlertDialogAction>
                    </AlertDialogContent>
                </AlertDialog>
            }
        });
        for (class, id) in [
            ("aurora-alert-dialog-trigger", "trigger"),
            ("aurora-alert-dialog-content", "content"),
            ("aurora-alert-dialog-title", "title"),
            ("aurora-alert-dialog-description", "description"),
            ("aurora-alert-dialog-cancel", "cancel"),
            ("aurora-alert-dialog-action", "action"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

use super::dialog::{
    dialog_close, dialog_description, dialog_surface, dialog_title, dialog_trigger, DialogScope,
    Dismiss,
};
use super::*;

#[derive(Clone)]
struct ModalContext(DialogScope);

fn use_modal(part: &'static str) -> DialogScope {
    expect_scoped::<ModalContext>(part, "Modal").0
}

#[component]
/// Modal dialog root. Renders no element of its own.
pub fn Modal(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    provide_context(ModalContext(DialogScope::new(
        "modal",
        open,
        default_open,
        on_open_change,
    )));
    children()
}

#[component]
/// Button opening the enclosing [`Modal`].
pub fn ModalTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_modal("ModalTrigger");
    dialog_trigger(&scope, "dialog", cn!("aurora-modal-trigger", class), node_ref, attrs, children)
}

#[component]
/// Dialog surface with a dismissing overlay.
///
/// Escape or an overlay click closes the modal.
pub fn ModalContent(
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let scope = use_modal("ModalContent");
    let mut computed = vec![("data-size", size.token().into_attribute())];
    computed.extend(attrs);
    dialog_surface(
        scope,
        "dialog",
        Dismiss::Light,
        "modal",
        cn!("aurora-modal-content", class),
        node_ref,
        computed,
        children,
    )
}

#[component]
/// Heading that labels the dialog.
pub fn ModalTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H2>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_modal("ModalTitle");
    dialog_title(&scope, cn!("aurora-modal-title", class), node_ref, attrs, children)
}

#[component]
/// Text that describes the dialog.
pub fn ModalDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_modal("ModalDescription");
    dialog_description(&scope, cn!("aurora-modal-description", class), node_ref, attrs, children)
}

#[component]
/// Button closing the modal. Shows a labelled close icon without children.
pub fn ModalClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let scope = use_modal("ModalClose");
    dialog_close(&scope, cn!("aurora-modal-close", class), node_ref, on_click, attrs, children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, tag_with_class, test_id};

    #[test]
    fn closed_modal_renders_only_trigger() {
        let html = render(|| {
            view! {
                <Modal>
                    <ModalTrigger>"Open"</ModalTrigger>
                    <ModalContent><ModalTitle>"Title"</ModalTitle></ModalContent>
                </Modal>
            }
        });
        let trigger = opening_tag(&html, "button");
        assert_eq!(attr(trigger, "aria-haspopup"), Some("dialog"));
        assert_eq!(attr(trigger, "aria-expanded"), Some("false"));
        assert_eq!(attr(trigger, "data-state"), Some("closed"));
        assert!(!html.contains("role=\"dialog\""), "{html}");
    }

    #[test]
    fn open_modal_wires_title_and_description() {
        let html = render(|| {
            view! {
                <Modal default_open=true>
                    <ModalTrigger>"Open"</ModalTrigger>
                    <ModalContent size=Size::Lg class="custom">
                        <ModalTitle>"Title"</ModalTitle>
                        <ModalDescription>"Description"</ModalDescription>
                        <ModalClose />
                    </ModalContent>
                </Modal>
            }
        });
        let content = tag_with_class(&html, "aurora-modal-content");
        assert_eq!(attr(content, "role"), Some("dialog"));
        assert_eq!(attr(content, "aria-modal"), Some("true"));
        assert_eq!(attr(content, "data-size"), Some("lg"));
        assert_eq!(attr(content, "class"), Some("aurora-modal-content custom"));
        assert_eq!(attr(content, "aria-labelledby"), attr(opening_tag(&html, "h2"), "id"));
        assert_eq!(attr(content, "aria-describedby"), attr(opening_tag(&html, "p"), "id"));
        assert_eq!(
            attr(opening_tag(&html, "button"), "aria-controls"),
            attr(content, "id")
        );
        assert_eq!(attr(tag_with_class(&html, "aurora-modal-overlay"), "data-state"), Some("open"));
        assert_eq!(attr(tag_with_class(&html, "aurora-modal-close"), "aria-label"), Some("Close"));
    }

    #[test]
    #[should_panic(expected = "ModalTitle must be used within Modal")]
    fn title_requires_modal() {
        render(|| view! { <ModalTitle>"Orphan"</ModalTitle> });
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Modal default_open=true>
                    <ModalTrigger attr:data-testid="trigger">"Open"</ModalTrigger>
                    <ModalContent attr:data-testid="content">
                        <ModalTitle attr:data-testid="title">"Title"</ModalTitle>
                        <ModalDescription attr:data-testid="description">"Body"</ModalDescription>
                        <ModalClose attr:data-testid="close" />
                    </ModalContent>
                </Modal>
            }
        });
        for (class, id) in [
            ("aurora-modal-trigger", "trigger"),
            ("aurora-modal-content", "content"),
            ("aurora-modal-title", "title"),
            ("aurora-modal-description", "description"),
            ("aurora-modal-close", "close"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

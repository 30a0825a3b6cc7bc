use super::dialog::{
    dialog_close, dialog_description, dialog_surface, dialog_title, dialog_trigger, DialogScope,
    Dismiss,
};
use super::*;

#[derive(Clone)]
struct SheetContext(DialogScope);

fn use_sheet(part: &'static str) -> DialogScope {
    expect_scoped::<SheetContext>(part, "Sheet").0
}

#[component]
/// Edge-anchored panel root. Renders no element of its own.
pub fn Sheet(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    provide_context(SheetContext(DialogScope::new(
        "sheet",
        open,
        default_open,
        on_open_change,
    )));
    children()
}

#[component]
/// Button opening the enclosing [`Sheet`].
pub fn SheetTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_sheet("SheetTrigger");
    dialog_trigger(&scope, "dialog", cn!("aurora-sheet-trigger", class), node_ref, attrs, children)
}

#[component]
/// Panel sliding in from `side`.
pub fn SheetContent(
    #[prop(default = Side::Right)] side: Side,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let scope = use_sheet("SheetContent");
    let mut computed = vec![
        ("data-side", side.token().into_attribute()),
        ("data-size", size.token().into_attribute()),
    ];
    computed.extend(attrs);
    dialog_surface(
        scope,
        "dialog",
        Dismiss::Light,
        "sheet",
        cn!("aurora-sheet-content", class),
        node_ref,
        computed,
        children,
    )
}

#[component]
/// Heading that labels the sheet.
pub fn SheetTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H2>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_sheet("SheetTitle");
    dialog_title(&scope, cn!("aurora-sheet-title", class), node_ref, attrs, children)
}

#[component]
/// Text that describes the sheet.
pub fn SheetDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = use_sheet("SheetDescription");
    dialog_description(&scope, cn!("aurora-sheet-description", class), node_ref, attrs, children)
}

#[component]
/// Button closing the sheet.
pub fn SheetClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let scope = use_sheet("SheetClose");
    dialog_close(&scope, cn!("aurora-sheet-close", class), node_ref, on_click, attrs, children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, render, tag_with_class, test_id};

    #[test]
    fn defaults_to_right_side() {
        let html = render(|| {
            view! {
                <Sheet default_open=true>
                    <SheetContent><SheetTitle>"Settings"</SheetTitle></SheetContent>
                </Sheet>
            }
        });
        let content = tag_with_class(&html, "aurora-sheet-content");
        assert_eq!(attr(content, "data-side"), Some("right"));
        assert_eq!(attr(content, "data-size"), Some("md"));
    }

    #[test]
    fn each_side_is_projected() {
        for &side in Side::ALL {
            let html = render(move || {
                view! {
                    <Sheet open=true>
                        <SheetContent side=side size=Size::Sm>"Panel"</SheetContent>
                    </Sheet>
                }
            });
            let content = tag_with_class(&html, "aurora-sheet-content");
            assert_eq!(attr(content, "data-side"), Some(side.token()));
        }
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Sheet default_open=true>
                    <SheetTrigger attr:data-testid="trigger">"Menu"</SheetTrigger>
                    <SheetContent attr:data-testid="content">
                        <SheetTitle attr:data-testid="title">"Navigation"</SheetTitle>
                        <SheetDescription attr:data-testid="description">"Pages"</SheetDescription>
                        <SheetClose attr:data-testid="close" />
                    </SheetContent>
                </Sheet>
            }
        });
        for (class, id) in [
            ("aurora-sheet-trigger", "trigger"),
            ("aurora-sheet-content", "content"),
            ("aurora-sheet-title", "title"),
            ("aurora-sheet-description", "description"),
            ("aurora-sheet-close", "close"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

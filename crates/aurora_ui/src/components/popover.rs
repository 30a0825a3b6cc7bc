use super::*;

#[derive(Clone)]
struct PopoverContext {
    open: Controllable<bool>,
    content_id: String,
}

fn use_popover(part: &'static str) -> PopoverContext {
    expect_scoped::<PopoverContext>(part, "Popover")
}

#[component]
/// Click-anchored overlay root.
///
/// Renders a positioning wrapper. A pointer press outside it closes the
/// popover.
pub fn Popover(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_controllable(open, default_open, on_open_change);
    let root = create_node_ref::<html::Div>();
    focus::close_on_outside_pointer(root, open);
    provide_context(PopoverContext {
        open,
        content_id: next_part_id("popover-content"),
    });
    view! {
        <div
            class=cn!("aurora-popover", class)
            data-state=move || open_state_token(open.value.get())
            {..attrs}
            node_ref=root
        >
            {children()}
        </div>
    }
}

#[component]
/// Button toggling the enclosing [`Popover`].
pub fn PopoverTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let popover = use_popover("PopoverTrigger");
    let open = popover.open;
    view! {
        <button
            type="button"
            aria-haspopup="dialog"
            aria-expanded=move || if open.value.get() { "true" } else { "false" }
            aria-controls=popover.content_id
            class=cn!("aurora-popover-trigger", class)
            data-state=move || open_state_token(open.value.get())
            node_ref=node_ref
            on:click=move |_| open.set.call(!open.get_untracked())
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Floating panel shown while the popover is open. Escape closes it.
pub fn PopoverContent(
    #[prop(default = OverlayVariant::Default)] variant: OverlayVariant,
    #[prop(default = Side::Bottom)] side: Side,
    /// Distance from the trigger in pixels.
    #[prop(default = 4)]
    side_offset: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let popover = use_popover("PopoverContent");
    let open = popover.open;
    let class = cn!("aurora-popover-content", class);
    let style = side_offset_style(side_offset);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="dialog"
                    id=popover.content_id.clone()
                    class=class.clone()
                    style=style.clone()
                    data-state="open"
                    data-side=side.token()
                    data-variant=variant.token()
                    node_ref=node_ref
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            open.set.call(false);
                        }
                    }
                    {..attrs}
                >
                    {children()}
                </div>
            }
        })
    }
}

#[component]
/// Pointer toward the trigger.
pub fn PopoverArrow(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    use_popover("PopoverArrow");
    view! { <span aria-hidden="true" class=cn!("aurora-popover-arrow", class) {..attrs}></span> }
}

#[component]
/// Button closing the popover. Shows a labelled close icon without children.
pub fn PopoverClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let open = use_popover("PopoverClose").open;
    let label = children.is_none().then_some("Close");
    let content = match children {
        Some(children) => children().into_view(),
        None => close_icon().into_view(),
    };
    view! {
        <button
            type="button"
            aria-label=label
            class=cn!("aurora-popover-close", class)
            node_ref=node_ref
            on:click=move |_| open.set.call(false)
            {..attrs}
        >
            {content}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, tag_with_class, test_id};

    #[test]
    fn closed_popover_hides_content() {
        let html = render(|| {
            view! {
                <Popover>
                    <PopoverTrigger>"Open"</PopoverTrigger>
                    <PopoverContent>"Popover body"</PopoverContent>
                </Popover>
            }
        });
        let trigger = opening_tag(&html, "button");
        assert_eq!(attr(trigger, "aria-expanded"), Some("false"));
        assert_eq!(attr(trigger, "aria-haspopup"), Some("dialog"));
        assert!(!html.contains("Popover body"));
    }

    #[test]
    fn open_content_carries_side_variant_and_offset() {
        let html = render(|| {
            view! {
                <Popover default_open=true>
                    <PopoverTrigger>"Open"</PopoverTrigger>
                    <PopoverContent variant=OverlayVariant::Glass side=Side::Top>
                        "Popover body"
                        <PopoverArrow />
                        <PopoverClose />
                    </PopoverContent>
                </Popover>
            }
        });
        let content = tag_with_class(&html, "aurora-popover-content");
        assert_eq!(attr(content, "data-side"), Some("top"));
        assert_eq!(attr(content, "data-variant"), Some("glass"));
        assert_eq!(attr(content, "style"), Some("--aurora-side-offset: 4px"));
        assert_eq!(attr(opening_tag(&html, "button"), "aria-controls"), attr(content, "id"));
        assert_eq!(attr(tag_with_class(&html, "aurora-popover-close"), "aria-label"), Some("Close"));
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Popover default_open=true attr:data-testid="root">
                    <PopoverTrigger attr:data-testid="trigger">"Filters"</PopoverTrigger>
                    <PopoverContent attr:data-testid="content">
                        <PopoverArrow attr:data-testid="arrow" />
                        <PopoverClose attr:data-testid="close" />
                    </PopoverContent>
                </Popover>
            }
        });
        for (class, id) in [
            ("aurora-popover", "root"),
            ("aurora-popover-trigger", "trigger"),
            ("aurora-popover-content", "content"),
            ("aurora-popover-arrow", "arrow"),
            ("aurora-popover-close", "close"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

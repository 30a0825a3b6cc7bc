use std::time::Duration;

use super::delay::DelayedOpen;
use super::*;

#[derive(Clone)]
struct HoverCardContext {
    open: Controllable<bool>,
    delay: DelayedOpen,
    open_delay: Duration,
    close_delay: Duration,
}

impl HoverCardContext {
    fn enter(&self) {
        self.delay.schedule(true, self.open_delay);
    }

    fn leave(&self) {
        self.delay.schedule(false, self.close_delay);
    }
}

#[component]
/// Preview card shown while the pointer rests on its trigger.
pub fn HoverCard(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    /// Milliseconds before opening.
    #[prop(default = 300)]
    open_delay: u64,
    /// Milliseconds before closing.
    #[prop(default = 300)]
    close_delay: u64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_controllable(open, default_open, on_open_change);
    provide_context(HoverCardContext {
        open,
        delay: DelayedOpen::new(open),
        open_delay: Duration::from_millis(open_delay),
        close_delay: Duration::from_millis(close_delay),
    });
    view! {
        <div
            class=cn!("aurora-hover-card", class)
            data-state=move || open_state_token(open.value.get())
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Link that opens the card on hover or focus.
pub fn HoverCardTrigger(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::A>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let card = expect_scoped::<HoverCardContext>("HoverCardTrigger", "HoverCard");
    let open = card.open;
    let (enter, leave) = (card.clone(), card.clone());
    let (focus, blur) = (card.clone(), card);
    view! {
        <a
            href=href
            class=cn!("aurora-hover-card-trigger", class)
            data-state=move || open_state_token(open.value.get())
            node_ref=node_ref
            on:pointerenter=move |_| enter.enter()
            on:pointerleave=move |_| leave.leave()
            on:focus=move |_| focus.enter()
            on:blur=move |_| blur.leave()
            {..attrs}
        >
            {children()}
        </a>
    }
}

#[component]
/// Card surface. Hovering it keeps the card open.
pub fn HoverCardContent(
    #[prop(default = OverlayVariant::Default)] variant: OverlayVariant,
    #[prop(default = Side::Bottom)] side: Side,
    #[prop(default = 4)] side_offset: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let card = expect_scoped::<HoverCardContext>("HoverCardContent", "HoverCard");
    let open = card.open;
    let class = cn!("aurora-hover-card-content", class);
    let style = side_offset_style(side_offset);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            let (keep, leave) = (card.clone(), card.clone());
            view! {
                <div
                    class=class.clone()
                    style=style.clone()
                    data-state="open"
                    data-side=side.token()
                    data-variant=variant.token()
                    node_ref=node_ref
                    on:pointerenter=move |_| keep.delay.cancel()
                    on:pointerleave=move |_| leave.leave()
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
pub fn HoverCardArrow(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    expect_scoped::<HoverCardContext>("HoverCardArrow", "HoverCard");
    view! { <span aria-hidden="true" class=cn!("aurora-hover-card-arrow", class) {..attrs}></span> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, tag_with_class, test_id};

    #[test]
    fn trigger_renders_link_and_hides_card() {
        let html = render(|| {
            view! {
                <HoverCard>
                    <HoverCardTrigger href="/user">"@user"</HoverCardTrigger>
                    <HoverCardContent>"Profile"</HoverCardContent>
                </HoverCard>
            }
        });
        let trigger = opening_tag(&html, "a");
        assert_eq!(attr(trigger, "href"), Some("/user"));
        assert_eq!(attr(trigger, "data-state"), Some("closed"));
        assert!(!html.contains("Profile"));
    }

    #[test]
    fn open_card_renders_surface() {
        let html = render(|| {
            view! {
                <HoverCard open=true>
                    <HoverCardTrigger>"@user"</HoverCardTrigger>
                    <HoverCardContent variant=OverlayVariant::Glass side=Side::Right side_offset=8>
                        "Profile"
                        <HoverCardArrow />
                    </HoverCardContent>
                </HoverCard>
            }
        });
        let content = tag_with_class(&html, "aurora-hover-card-content");
        assert_eq!(attr(content, "data-variant"), Some("glass"));
        assert_eq!(attr(content, "data-side"), Some("right"));
        assert_eq!(attr(content, "style"), Some("--aurora-side-offset: 8px"));
        assert!(html.contains("aurora-hover-card-arrow"));
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <HoverCard default_open=true attr:data-testid="root">
                    <HoverCardTrigger attr:data-testid="trigger">"@aurora"</HoverCardTrigger>
                    <HoverCardContent attr:data-testid="content">
                        "Profile"
                        <HoverCardArrow attr:data-testid="arrow" />
                    </HoverCardContent>
                </HoverCard>
            }
        });
        assert_eq!(test_id(&html, "aurora-hover-card"), Some("root"));
        assert_eq!(test_id(&html, "aurora-hover-card-trigger"), Some("trigger"));
        assert_eq!(test_id(&html, "aurora-hover-card-content"), Some("content"));
        assert_eq!(test_id(&html, "aurora-hover-card-arrow"), Some("arrow"));
    }
}

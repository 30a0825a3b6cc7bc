use std::time::Duration;

use super::delay::DelayedOpen;
use super::*;

#[derive(Clone)]
struct TooltipContext {
    open: Controllable<bool>,
    delay: DelayedOpen,
    delay_duration: Duration,
    content_id: String,
}

#[component]
/// Short description shown for a trigger on hover or focus.
pub fn Tooltip(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    /// Milliseconds of hover before the tooltip appears.
    #[prop(default = 700)]
    delay_duration: u64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_controllable(open, default_open, on_open_change);
    provide_context(TooltipContext {
        open,
        delay: DelayedOpen::new(open),
        delay_duration: Duration::from_millis(delay_duration),
        content_id: next_part_id("tooltip"),
    });
    view! {
        <span
            class=cn!("aurora-tooltip", class)
            data-state=move || open_state_token(open.value.get())
            {..attrs}
        >
            {children()}
        </span>
    }
}

#[component]
/// Button described by the tooltip while it is shown.
pub fn TooltipTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let tooltip = expect_scoped::<TooltipContext>("TooltipTrigger", "Tooltip");
    let open = tooltip.open;
    let content_id = tooltip.content_id.clone();
    let (hover, leave) = (tooltip.clone(), tooltip.clone());
    view! {
        <button
            type="button"
            aria-describedby=move || open.value.get().then(|| content_id.clone())
            class=cn!("aurora-tooltip-trigger", class)
            data-state=move || open_state_token(open.value.get())
            node_ref=node_ref
            on:pointerenter=move |_| hover.delay.schedule(true, hover.delay_duration)
            on:pointerleave=move |_| leave.delay.schedule(false, Duration::ZERO)
            on:focus=move |_| open.set.call(true)
            on:blur=move |_| open.set.call(false)
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    tooltip.delay.schedule(false, Duration::ZERO);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Tooltip text.
pub fn TooltipContent(
    #[prop(default = Side::Top)] side: Side,
    #[prop(default = 4)] side_offset: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let tooltip = expect_scoped::<TooltipContext>("TooltipContent", "Tooltip");
    let open = tooltip.open;
    let class = cn!("aurora-tooltip-content", class);
    let style = side_offset_style(side_offset);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="tooltip"
                    id=tooltip.content_id.clone()
                    class=class.clone()
                    style=style.clone()
                    data-state="open"
                    data-side=side.token()
                    {..attrs}
                    node_ref=node_ref
                >
                    {children()}
                </div>
            }
        })
    }
}

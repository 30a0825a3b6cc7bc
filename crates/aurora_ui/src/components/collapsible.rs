use super::*;

#[derive(Clone)]
struct CollapsibleContext {
    open: Controllable<bool>,
    disabled: MaybeSignal<bool>,
    content_id: String,
}

#[component]
/// Disclosure that shows or hides one region.
pub fn Collapsible(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_controllable(open, default_open, on_open_change);
    let is_open = open.value;
    provide_context(CollapsibleContext {
        open,
        disabled,
        content_id: next_part_id("collapsible-content"),
    });
    view! {
        <div
            class=cn!("aurora-collapsible", class)
            data-state=move || open_state_token(is_open.get())
            data-disabled=move || flag_token(disabled.get())
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Button toggling the enclosing [`Collapsible`].
pub fn CollapsibleTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let scope = expect_scoped::<CollapsibleContext>("CollapsibleTrigger", "Collapsible");
    let open = scope.open;
    let disabled = scope.disabled;
    view! {
        <button
            type="button"
            aria-controls=scope.content_id
            aria-expanded=move || if open.value.get() { "true" } else { "false" }
            class=cn!("aurora-collapsible-trigger", class)
            data-state=move || open_state_token(open.value.get())
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| open.set.call(!open.get_untracked())
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Region shown while the enclosing [`Collapsible`] is open.
pub fn CollapsibleContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let scope = expect_scoped::<CollapsibleContext>("CollapsibleContent", "Collapsible");
    let open = scope.open.value;
    let content_id = scope.content_id;
    let class = cn!("aurora-collapsible-content", class);
    move || {
        open.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    id=content_id.clone()
                    class=class.clone()
                    data-state="open"
                    {..attrs}
                    node_ref=node_ref
                >
                    {children()}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, opening_tag, render, test_id};

    #[test]
    fn closed_by_default_hides_content() {
        let html = render(|| {
            view! {
                <Collapsible>
                    <CollapsibleTrigger>"Toggle"</CollapsibleTrigger>
                    <CollapsibleContent>"Hidden content"</CollapsibleContent>
                </Collapsible>
            }
        });
        assert_eq!(attr(opening_tag(&html, "div"), "data-state"), Some("closed"));
        let trigger = opening_tag(&html, "button");
        assert_eq!(attr(trigger, "aria-expanded"), Some("false"));
        assert!(!html.contains("Hidden content"), "{html}");
    }

    #[test]
    fn open_content_is_linked_from_trigger() {
        let html = render(|| {
            view! {
                <Collapsible default_open=true>
                    <CollapsibleTrigger>"Toggle"</CollapsibleTrigger>
                    <CollapsibleContent>"Visible content"</CollapsibleContent>
                </Collapsible>
            }
        });
        let trigger = opening_tag(&html, "button");
        assert_eq!(attr(trigger, "aria-expanded"), Some("true"));
        assert_eq!(attr(trigger, "data-state"), Some("open"));
        let controls = attr(trigger, "aria-controls").expect("aria-controls");
        assert!(html.contains(&format!("id=\"{controls}\"")), "{html}");
        assert!(html.contains("Visible content"));
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Collapsible default_open=true attr:data-testid="root">
                    <CollapsibleTrigger attr:data-testid="trigger">"More"</CollapsibleTrigger>
                    <CollapsibleContent attr:data-testid="content">"Details"</CollapsibleContent>
                </Collapsible>
            }
        });
        assert_eq!(test_id(&html, "aurora-collapsible"), Some("root"));
        assert_eq!(test_id(&html, "aurora-collapsible-trigger"), Some("trigger"));
        assert_eq!(test_id(&html, "aurora-collapsible-content"), Some("content"));
    }
}

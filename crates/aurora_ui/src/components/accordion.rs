use super::*;

const TRIGGER_SELECTOR: &str = "[data-aurora-accordion-trigger]";

#[derive(Clone, Copy)]
struct AccordionContext {
    mode: SelectionMode,
    collapsible: bool,
    expanded: Controllable<Vec<String>>,
    disabled: MaybeSignal<bool>,
    orientation: Orientation,
}

#[derive(Clone)]
struct AccordionItemContext {
    value: String,
    open: Signal<bool>,
    disabled: Signal<bool>,
    trigger_id: String,
    content_id: String,
}

#[component]
/// Stack of disclosure sections.
///
/// The value lists the expanded item values. In single mode at most one item
/// is expanded, and closing it again requires `collapsible`.
pub fn Accordion(
    #[prop(default = SelectionMode::Single)] mode: SelectionMode,
    #[prop(optional)] collapsible: bool,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(default = Orientation::Vertical)] orientation: Orientation,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let expanded = use_controllable(value, default_value, on_value_change);
    provide_context(AccordionContext {
        mode,
        collapsible,
        expanded,
        disabled,
        orientation,
    });
    view! {
        <div
            class=cn!("aurora-accordion", class)
            data-orientation=orientation.token()
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(root) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &root, TRIGGER_SELECTOR, orientation);
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// One section of an [`Accordion`].
pub fn AccordionItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let accordion = expect_scoped::<AccordionContext>("AccordionItem", "Accordion");
    let expanded = accordion.expanded.value;
    let item = value.clone();
    let open = Signal::derive(move || expanded.with(|values| values.contains(&item)));
    let item_disabled = Signal::derive(move || disabled.get() || accordion.disabled.get());
    let base = next_part_id("accordion");
    provide_context(AccordionItemContext {
        value,
        open,
        disabled: item_disabled,
        trigger_id: format!("{base}-trigger"),
        content_id: format!("{base}-content"),
    });
    view! {
        <div
            class=cn!("aurora-accordion-item", class)
            data-state=move || open_state_token(open.get())
            data-disabled=move || flag_token(item_disabled.get())
            data-orientation=accordion.orientation.token()
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Heading button that expands or collapses its [`AccordionItem`].
pub fn AccordionTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let accordion = expect_scoped::<AccordionContext>("AccordionTrigger", "Accordion");
    let item = expect_scoped::<AccordionItemContext>("AccordionTrigger", "AccordionItem");
    let open = item.open;
    let disabled = item.disabled;
    let allow_empty = accordion.collapsible || accordion.mode == SelectionMode::Multiple;
    let locked = move || open.get() && !allow_empty;
    let expanded = accordion.expanded;
    let value = item.value;

    view! {
        <h3 class="aurora-accordion-header" data-state=move || open_state_token(open.get())>
            <button
                type="button"
                id=item.trigger_id
                aria-controls=item.content_id
                aria-expanded=move || if open.get() { "true" } else { "false" }
                aria-disabled=move || flag_token(locked())
                class=cn!("aurora-accordion-trigger", class)
                data-aurora-accordion-trigger=""
                data-state=move || open_state_token(open.get())
                data-disabled=move || flag_token(disabled.get())
                disabled=move || disabled.get()
                node_ref=node_ref
                on:click=move |_| {
                    let next = expanded
                        .value
                        .with_untracked(|current| toggle_selection(accordion.mode, allow_empty, current, &value));
                    expanded.set.call(next);
                }
                {..attrs}
            >
                {children()}
                <span class="aurora-accordion-chevron">{chevron_icon()}</span>
            </button>
        </h3>
    }
}

#[component]
/// Region revealed by an expanded [`AccordionItem`].
pub fn AccordionContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let item = expect_scoped::<AccordionItemContext>("AccordionContent", "AccordionItem");
    let open = item.open;
    let class = cn!("aurora-accordion-content", class);
    move || {
        open.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="region"
                    id=item.content_id.clone()
                    aria-labelledby=item.trigger_id.clone()
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

use super::*;

const NAVIGATION_ITEM_SELECTOR: &str = "[data-aurora-navigation-item]";

#[derive(Clone, Copy)]
struct NavigationContext {
    /// Value of the open item; empty when every item is closed.
    open_item: Controllable<String>,
    orientation: Orientation,
}

#[derive(Clone)]
struct NavigationItemContext {
    value: String,
    trigger_id: String,
    content_id: String,
}

fn use_navigation(part: &'static str) -> NavigationContext {
    expect_scoped::<NavigationContext>(part, "NavigationMenu")
}

fn use_navigation_item(part: &'static str) -> NavigationItemContext {
    expect_scoped::<NavigationItemContext>(part, "NavigationMenuItem")
}

#[component]
/// Site navigation with at most one expanded item.
///
/// The value names the open item; an empty value closes them all. Escape
/// anywhere inside closes the open item.
pub fn NavigationMenu(
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Nav>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open_item = use_controllable(value, default_value, on_value_change);
    provide_context(NavigationContext {
        open_item,
        orientation,
    });
    view! {
        <nav
            aria-label="Main"
            class=cn!("aurora-navigation-menu", class)
            data-orientation=orientation.token()
            node_ref=node_ref
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    open_item.set.call(String::new());
                }
            }
            {..attrs}
        >
            {children()}
        </nav>
    }
}

#[component]
/// Top-level item list. Arrow keys move between triggers and links.
pub fn NavigationMenuList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Ul>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let orientation = use_navigation("NavigationMenuList").orientation;
    view! {
        <ul
            class=cn!("aurora-navigation-menu-list", class)
            data-orientation=orientation.token()
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(list) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &list, NAVIGATION_ITEM_SELECTOR, orientation);
                }
            }
            {..attrs}
        >
            {children()}
        </ul>
    }
}

#[component]
/// One entry of the list. Items without a `value` get a generated one.
pub fn NavigationMenuItem(
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_navigation("NavigationMenuItem");
    let base = next_part_id("navigation");
    provide_context(NavigationItemContext {
        value: value.unwrap_or_else(|| base.clone()),
        trigger_id: format!("{base}-trigger"),
        content_id: format!("{base}-content"),
    });
    view! {
        <li class=cn!("aurora-navigation-menu-item", class) {..attrs}>
            {children()}
        </li>
    }
}

#[component]
/// Button expanding its item on click or hover.
pub fn NavigationMenuTrigger(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open_item = use_navigation("NavigationMenuTrigger").open_item;
    let item = use_navigation_item("NavigationMenuTrigger");
    let value = item.value.clone();
    let expanded = Signal::derive(move || open_item.value.with(|open| *open == value));
    let toggle_value = item.value.clone();
    let hover_value = item.value;
    view! {
        <button
            type="button"
            id=item.trigger_id
            aria-expanded=move || if expanded.get() { "true" } else { "false" }
            aria-controls=item.content_id
            class=cn!("aurora-navigation-menu-trigger", class)
            data-aurora-navigation-item=""
            data-state=move || open_state_token(expanded.get())
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| {
                let next = if expanded.get_untracked() { String::new() } else { toggle_value.clone() };
                open_item.set.call(next);
            }
            on:pointerenter=move |_| {
                if !disabled.get_untracked() {
                    open_item.set.call(hover_value.clone());
                }
            }
            {..attrs}
        >
            {children()}
            <span class="aurora-navigation-menu-chevron">{chevron_icon()}</span>
        </button>
    }
}

#[component]
/// Panel shown while its item is expanded.
pub fn NavigationMenuContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let open_item = use_navigation("NavigationMenuContent").open_item;
    let item = use_navigation_item("NavigationMenuContent");
    let class = cn!("aurora-navigation-menu-content", class);
    move || {
        open_item.value.with(|open| *open == item.value).then(|| {
            let attrs = attrs.clone();
            view! {
                <div
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

#[component]
/// Navigation link. `active` marks the current page.
pub fn NavigationMenuLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::A>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open_item = use_navigation("NavigationMenuLink").open_item;
    view! {
        <a
            href=href
            aria-current=move || active.get().then_some("page")
            class=cn!("aurora-navigation-menu-link", class)
            data-aurora-navigation-item=""
            data-active=move || flag_token(active.get())
            node_ref=node_ref
            on:click=move |_| open_item.set.call(String::new())
            {..attrs}
        >
            {children()}
        </a>
    }
}

#[component]
/// Surface styling the expanded panel area. Open while any item is open.
pub fn NavigationMenuViewport(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let open_item = use_navigation("NavigationMenuViewport").open_item;
    view! {
        <div
            class=cn!("aurora-navigation-menu-viewport", class)
            data-state=move || open_state_token(open_item.value.with(|open| !open.is_empty()))
            {..attrs}
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Marker under the expanded trigger.
pub fn NavigationMenuIndicator(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let open_item = use_navigation("NavigationMenuIndicator").open_item;
    view! {
        <div
            aria-hidden="true"
            class=cn!("aurora-navigation-menu-indicator", class)
            data-state=move || {
                if open_item.value.with(|open| open.is_empty()) { "hidden" } else { "visible" }
            }
            {..attrs}
        >
            <div class="aurora-navigation-menu-indicator-arrow"></div>
        </div>
    }
}

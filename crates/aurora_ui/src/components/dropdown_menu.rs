use super::focus::MENU_ITEM_SELECTOR;
use super::*;

#[derive(Clone)]
struct MenuContext {
    open: Controllable<bool>,
    trigger_id: String,
    content_id: String,
}

#[derive(Clone, Copy)]
struct MenuRadioContext {
    value: Controllable<String>,
}

#[derive(Clone, Copy)]
struct SubMenuContext {
    open: Controllable<bool>,
}

fn use_menu(part: &'static str) -> MenuContext {
    expect_scoped::<MenuContext>(part, "DropdownMenu")
}

fn aria_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Runs `select` for Enter and Space.
fn on_activation_key(ev: &KeyboardEvent, select: impl FnOnce()) {
    if matches!(ev.key().as_str(), "Enter" | " ") {
        ev.prevent_default();
        select();
    }
}

#[component]
/// Menu of actions opened from a trigger button.
pub fn DropdownMenu(
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
    let base = next_part_id("menu");
    provide_context(MenuContext {
        open,
        trigger_id: format!("{base}-trigger"),
        content_id: format!("{base}-content"),
    });
    view! {
        <div
            class=cn!("aurora-dropdown-menu", class)
            data-state=move || open_state_token(open.value.get())
            {..attrs}
            node_ref=root
        >
            {children()}
        </div>
    }
}

#[component]
/// Button toggling the menu. Arrow down opens it.
pub fn DropdownMenuTrigger(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let menu = use_menu("DropdownMenuTrigger");
    let open = menu.open;
    view! {
        <button
            type="button"
            id=menu.trigger_id
            aria-haspopup="menu"
            aria-expanded=move || aria_flag(open.value.get())
            aria-controls=menu.content_id
            class=cn!("aurora-dropdown-menu-trigger", class)
            data-state=move || open_state_token(open.value.get())
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| open.set.call(!open.get_untracked())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "ArrowDown" {
                    ev.prevent_default();
                    open.set.call(true);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Menu surface. Focuses its first item when it opens; arrow keys move
/// between items and Escape closes the menu.
pub fn DropdownMenuContent(
    #[prop(default = OverlayVariant::Default)] variant: OverlayVariant,
    #[prop(default = Side::Bottom)] side: Side,
    #[prop(default = 4)] side_offset: u32,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let menu = use_menu("DropdownMenuContent");
    let open = menu.open;
    create_effect(move |_| {
        if open.value.get() {
            if let Some(content) = node_ref.get() {
                focus::focus_first(&content, MENU_ITEM_SELECTOR);
            }
        }
    });
    let class = cn!("aurora-dropdown-menu-content", class);
    let style = side_offset_style(side_offset);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="menu"
                    id=menu.content_id.clone()
                    aria-labelledby=menu.trigger_id.clone()
                    aria-orientation="vertical"
                    tabindex="-1"
                    class=class.clone()
                    style=style.clone()
                    data-state="open"
                    data-side=side.token()
                    data-variant=variant.token()
                    node_ref=node_ref
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            open.set.call(false);
                        } else if let Some(content) = node_ref.get_untracked() {
                            focus::handle_roving_keydown(&ev, &content, MENU_ITEM_SELECTOR, Orientation::Vertical);
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
/// Action item. Selecting it reports `on_select` and closes the menu.
pub fn DropdownMenuItem(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Indents the item to line up with checkable siblings.
    #[prop(optional)]
    inset: bool,
    #[prop(optional)] on_select: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_menu("DropdownMenuItem").open;
    let select = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_select) = on_select {
            on_select.call(());
        }
        open.set.call(false);
    };
    view! {
        <div
            role="menuitem"
            tabindex="-1"
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-dropdown-menu-item", class)
            data-inset=flag_token(inset)
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| select()
            on:keydown=move |ev: KeyboardEvent| on_activation_key(&ev, select)
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Item toggling a checked state.
pub fn DropdownMenuCheckboxItem(
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional)] on_checked_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_menu("DropdownMenuCheckboxItem").open;
    let checked = use_controllable(checked, default_checked, on_checked_change);
    let is_checked = checked.value;
    let select = move || {
        if disabled.get_untracked() {
            return;
        }
        checked.set.call(!checked.get_untracked());
        open.set.call(false);
    };
    view! {
        <div
            role="menuitemcheckbox"
            tabindex="-1"
            aria-checked=move || aria_flag(is_checked.get())
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-dropdown-menu-checkbox-item", class)
            data-state=move || checked_state_token(is_checked.get())
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| select()
            on:keydown=move |ev: KeyboardEvent| on_activation_key(&ev, select)
            {..attrs}
        >
            <span class="aurora-dropdown-menu-indicator">
                <Show when=move || is_checked.get()>{check_icon()}</Show>
            </span>
            {children()}
        </div>
    }
}

#[component]
/// Group of mutually exclusive radio items.
pub fn DropdownMenuRadioGroup(
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_menu("DropdownMenuRadioGroup");
    provide_context(MenuRadioContext {
        value: use_controllable(value, default_value, on_value_change),
    });
    view! {
        <div role="group" class=cn!("aurora-dropdown-menu-radio-group", class) {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Radio item inside a [`DropdownMenuRadioGroup`].
pub fn DropdownMenuRadioItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = use_menu("DropdownMenuRadioItem").open;
    let group = expect_scoped::<MenuRadioContext>("DropdownMenuRadioItem", "DropdownMenuRadioGroup").value;
    let item = value.clone();
    let selected = Signal::derive(move || group.value.with(|current| *current == item));
    let select = move || {
        if disabled.get_untracked() {
            return;
        }
        group.set.call(value.clone());
        open.set.call(false);
    };
    let select = std::rc::Rc::new(select);
    let on_key = std::rc::Rc::clone(&select);
    view! {
        <div
            role="menuitemradio"
            tabindex="-1"
            aria-checked=move || aria_flag(selected.get())
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-dropdown-menu-radio-item", class)
            data-state=move || checked_state_token(selected.get())
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| select()
            on:keydown=move |ev: KeyboardEvent| on_activation_key(&ev, || on_key())
            {..attrs}
        >
            <span class="aurora-dropdown-menu-indicator">
                <Show when=move || selected.get()>
                    <span class="aurora-dropdown-menu-radio-dot"></span>
                </Show>
            </span>
            {children()}
        </div>
    }
}

#[component]
/// Nested menu root.
pub fn DropdownMenuSub(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_menu("DropdownMenuSub");
    let open = use_controllable(open, default_open, on_open_change);
    provide_context(SubMenuContext { open });
    view! {
        <div
            class=cn!("aurora-dropdown-menu-sub", class)
            data-state=move || open_state_token(open.value.get())
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Item opening its [`DropdownMenuSub`] on hover, click, or arrow right.
pub fn DropdownMenuSubTrigger(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] inset: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = expect_scoped::<SubMenuContext>("DropdownMenuSubTrigger", "DropdownMenuSub").open;
    let show = move || {
        if !disabled.get_untracked() {
            open.set.call(true);
        }
    };
    view! {
        <div
            role="menuitem"
            tabindex="-1"
            aria-haspopup="menu"
            aria-expanded=move || aria_flag(open.value.get())
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-dropdown-menu-sub-trigger", class)
            data-state=move || open_state_token(open.value.get())
            data-inset=flag_token(inset)
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| show()
            on:pointerenter=move |_| show()
            on:keydown=move |ev: KeyboardEvent| {
                if matches!(ev.key().as_str(), "ArrowRight" | "Enter" | " ") {
                    ev.prevent_default();
                    show();
                }
            }
            {..attrs}
        >
            {children()}
            <span class="aurora-dropdown-menu-sub-chevron">{chevron_icon()}</span>
        </div>
    }
}

#[component]
/// Nested menu surface. Arrow left closes it.
pub fn DropdownMenuSubContent(
    #[prop(default = OverlayVariant::Default)] variant: OverlayVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = expect_scoped::<SubMenuContext>("DropdownMenuSubContent", "DropdownMenuSub").open;
    let class = cn!("aurora-dropdown-menu-sub-content", class);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="menu"
                    aria-orientation="vertical"
                    class=class.clone()
                    data-state="open"
                    data-side="right"
                    data-variant=variant.token()
                    node_ref=node_ref
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "ArrowLeft" {
                            ev.stop_propagation();
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
/// Horizontal rule between items.
pub fn DropdownMenuSeparator(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <div
            role="separator"
            aria-orientation="horizontal"
            class=cn!("aurora-dropdown-menu-separator", class)
            {..attrs}
        ></div>
    }
}

#[component]
/// Non-interactive heading.
pub fn DropdownMenuLabel(
    #[prop(optional)] inset: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=cn!("aurora-dropdown-menu-label", class) data-inset=flag_token(inset) {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Groups related items.
pub fn DropdownMenuGroup(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div role="group" class=cn!("aurora-dropdown-menu-group", class) {..attrs}>
            {children()}
        </div>
    }
}

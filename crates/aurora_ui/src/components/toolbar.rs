use super::*;

const TOOLBAR_ITEM_SELECTOR: &str = "[data-aurora-toolbar-item]";

token_enum! {
    /// Toolbar surface treatments.
    pub enum ToolbarVariant {
        /// Opaque bar.
        Default => "default",
        /// Translucent bar.
        Glass => "glass",
    }
    default Default;
}

#[derive(Clone, Copy)]
struct ToolbarContext {
    orientation: Orientation,
}

fn use_toolbar(part: &'static str) -> ToolbarContext {
    expect_scoped::<ToolbarContext>(part, "Toolbar")
}

#[component]
/// Row of controls sharing one tab stop. Arrow keys move between items.
pub fn Toolbar(
    #[prop(default = ToolbarVariant::Default)] variant: ToolbarVariant,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    provide_context(ToolbarContext { orientation });
    view! {
        <div
            role="toolbar"
            aria-orientation=orientation.token()
            class=cn!("aurora-toolbar", class)
            data-variant=variant.token()
            data-orientation=orientation.token()
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(toolbar) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &toolbar, TOOLBAR_ITEM_SELECTOR, orientation);
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Toolbar action button.
pub fn ToolbarButton(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_toolbar("ToolbarButton");
    view! {
        <button
            type="button"
            class=cn!("aurora-toolbar-button", class)
            data-aurora-toolbar-item=""
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Toolbar link.
pub fn ToolbarLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::A>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_toolbar("ToolbarLink");
    view! {
        <a
            href=href
            class=cn!("aurora-toolbar-link", class)
            data-aurora-toolbar-item=""
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </a>
    }
}

#[component]
/// Divider running across the toolbar's orientation.
pub fn ToolbarSeparator(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let across = match use_toolbar("ToolbarSeparator").orientation {
        Orientation::Horizontal => Orientation::Vertical,
        Orientation::Vertical => Orientation::Horizontal,
    };
    view! {
        <div
            role="separator"
            aria-orientation=across.token()
            class=cn!("aurora-toolbar-separator", class)
            data-orientation=across.token()
            {..attrs}
        ></div>
    }
}

#[component]
/// [`ToggleGroup`] laid out along the toolbar.
pub fn ToolbarToggleGroup(
    #[prop(default = SelectionMode::Single)] mode: SelectionMode,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let orientation = use_toolbar("ToolbarToggleGroup").orientation;
    let selection = use_controllable(value, default_value, on_value_change);
    view! {
        <ToggleGroup
            mode=mode
            orientation=orientation
            variant=ToggleVariant::Ghost
            value=selection.value
            on_value_change=selection.set
            disabled=disabled
            class=cn!("aurora-toolbar-toggle-group", class)
            {..attrs}
        >
            {children()}
        </ToggleGroup>
    }
}

#[component]
/// Item of a [`ToolbarToggleGroup`].
pub fn ToolbarToggleItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_toolbar("ToolbarToggleItem");
    view! {
        <ToggleGroupItem
            value=value
            disabled=disabled
            class=cn!("aurora-toolbar-toggle-item", class)
            attr:data-aurora-toolbar-item=""
            {..attrs}
        >
            {children()}
        </ToggleGroupItem>
    }
}

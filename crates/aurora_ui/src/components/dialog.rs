//! Open-state scope and parts shared by the modal, alert dialog, and sheet
//! families. Each family wraps [`DialogScope`] in its own context type so a
//! part only resolves beneath its own root.

use aurora_core::AttrList;

use super::*;

#[derive(Clone)]
pub(crate) struct DialogScope {
    pub(crate) open: Controllable<bool>,
    pub(crate) content_id: String,
    pub(crate) title_id: String,
    pub(crate) description_id: String,
}

impl DialogScope {
    pub(crate) fn new(
        prefix: &str,
        open: Option<MaybeSignal<bool>>,
        default_open: bool,
        on_open_change: Option<Callback<bool>>,
    ) -> Self {
        let base = next_part_id(prefix);
        Self {
            open: use_controllable(open, default_open, on_open_change),
            content_id: format!("{base}-content"),
            title_id: format!("{base}-title"),
            description_id: format!("{base}-description"),
        }
    }
}

/// How a dialog surface may be dismissed besides its close parts.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dismiss {
    /// Escape and overlay clicks close the dialog.
    Light,
    /// Only Escape closes the dialog.
    EscapeOnly,
}

pub(crate) fn dialog_trigger(
    scope: &DialogScope,
    popup: &'static str,
    class: String,
    node_ref: NodeRef<html::Button>,
    attrs: AttrList,
    children: Children,
) -> impl IntoView {
    let open = scope.open;
    view! {
        <button
            type="button"
            aria-haspopup=popup
            aria-expanded=move || if open.value.get() { "true" } else { "false" }
            aria-controls=scope.content_id.clone()
            class=class
            data-state=move || open_state_token(open.value.get())
            node_ref=node_ref
            on:click=move |_| open.set.call(!open.get_untracked())
            {..attrs}
        >
            {children()}
        </button>
    }
}

/// Overlay plus content surface, rendered in place while the scope is open.
/// Focus moves to the surface when it opens.
#[allow(clippy::too_many_arguments)]
pub(crate) fn dialog_surface(
    scope: DialogScope,
    role: &'static str,
    dismiss: Dismiss,
    prefix: &'static str,
    class: String,
    node_ref: NodeRef<html::Div>,
    attrs: AttrList,
    children: ChildrenFn,
) -> impl IntoView {
    let open = scope.open;
    create_effect(move |_| {
        if open.value.get() {
            if let Some(surface) = node_ref.get() {
                let _ = surface.focus();
            }
        }
    });

    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    class=format!("aurora-{prefix}-overlay")
                    data-state="open"
                    on:click=move |_| {
                        if dismiss == Dismiss::Light {
                            open.set.call(false);
                        }
                    }
                ></div>
                <div
                    role=role
                    aria-modal="true"
                    id=scope.content_id.clone()
                    aria-labelledby=scope.title_id.clone()
                    aria-describedby=scope.description_id.clone()
                    tabindex="-1"
                    class=class.clone()
                    data-state="open"
                    node_ref=node_ref
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
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

pub(crate) fn dialog_title(
    scope: &DialogScope,
    class: String,
    node_ref: NodeRef<html::H2>,
    attrs: AttrList,
    children: Children,
) -> impl IntoView {
    view! {
        <h2 id=scope.title_id.clone() class={class} {..attrs} node_ref=node_ref>
            {children()}
        </h2>
    }
}

pub(crate) fn dialog_description(
    scope: &DialogScope,
    class: String,
    node_ref: NodeRef<html::P>,
    attrs: AttrList,
    children: Children,
) -> impl IntoView {
    view! {
        <p id=scope.description_id.clone() class={class} {..attrs} node_ref=node_ref>
            {children()}
        </p>
    }
}

/// Button that closes the scope, then reports the click.
pub(crate) fn dialog_close(
    scope: &DialogScope,
    class: String,
    node_ref: NodeRef<html::Button>,
    on_click: Option<Callback<MouseEvent>>,
    attrs: AttrList,
    children: Option<Children>,
) -> impl IntoView {
    let open = scope.open;
    let label = children.is_none().then_some("Close");
    let content = match children {
        Some(children) => children().into_view(),
        None => close_icon().into_view(),
    };
    view! {
        <button
            type="button"
            aria-label=label
            class=class
            node_ref=node_ref
            on:click=move |ev| {
                open.set.call(false);
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {content}
        </button>
    }
}

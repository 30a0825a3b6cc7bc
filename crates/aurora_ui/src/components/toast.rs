use std::time::Duration;

use super::delay::DelayedOpen;
use super::*;

/// Auto-dismiss delay used when neither the toast nor its provider sets one.
const DEFAULT_DURATION_MS: u64 = 5000;

token_enum! {
    /// Toast severity.
    pub enum ToastVariant {
        /// Neutral notice.
        Info => "info",
        /// Completed action.
        Success => "success",
        /// Needs attention.
        Warning => "warning",
        /// Failed action.
        Error => "error",
    }
    default Info;
}

impl ToastVariant {
    fn politeness(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "assertive",
            Self::Info | Self::Success => "polite",
        }
    }
}

/// Notification queued through [`use_toast`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    /// Heading text.
    pub title: String,
    /// Optional body text.
    pub description: Option<String>,
    /// Severity.
    pub variant: ToastVariant,
    /// Auto-dismiss delay in milliseconds; the provider default when unset.
    pub duration: Option<u64>,
}

impl ToastRequest {
    /// Info toast with a title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Info,
            duration: None,
        }
    }

    /// Sets the body text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the severity.
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the auto-dismiss delay in milliseconds. Zero keeps the toast
    /// until it is closed.
    pub fn duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct QueuedToast {
    id: u64,
    request: ToastRequest,
}

/// Queue of imperative toasts published by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastHandle {
    queue: RwSignal<Vec<QueuedToast>>,
    next_id: StoredValue<u64>,
    default_duration: u64,
}

impl ToastHandle {
    fn new(default_duration: u64) -> Self {
        Self {
            queue: create_rw_signal(Vec::new()),
            next_id: store_value(1),
            default_duration,
        }
    }

    /// Queues a toast for the [`Toaster`] and returns its id.
    pub fn show(&self, request: ToastRequest) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.queue.update(|queue| queue.push(QueuedToast { id, request }));
        id
    }

    /// Removes a queued toast. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.retain(|toast| toast.id != id));
    }

    /// Removes every queued toast.
    pub fn clear(&self) {
        self.queue.update(Vec::clear);
    }
}

/// Returns the toast queue of the enclosing [`ToastProvider`].
///
/// # Panics
///
/// Panics when no [`ToastProvider`] encloses the caller.
pub fn use_toast() -> ToastHandle {
    expect_scoped::<ToastHandle>("use_toast", "ToastProvider")
}

#[component]
/// Publishes the toast queue. Place a [`Toaster`] inside to render it.
pub fn ToastProvider(
    /// Default auto-dismiss delay in milliseconds.
    #[prop(default = DEFAULT_DURATION_MS)]
    duration: u64,
    children: Children,
) -> impl IntoView {
    provide_context(ToastHandle::new(duration));
    children()
}

#[component]
/// Viewport rendering queued toasts in order.
pub fn Toaster(
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = "Notifications")] label: &'static str,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let handle = use_toast();
    let queue = handle.queue;
    view! {
        <ol
            role="region"
            aria-label=label
            tabindex="-1"
            class=cn!("aurora-toast-viewport", class)
            {..attrs}
        >
            <For
                each=move || queue.get()
                key=|toast: &QueuedToast| toast.id
                children=move |toast: QueuedToast| {
                    let id = toast.id;
                    let ToastRequest { title, description, variant, duration } = toast.request;
                    let title = store_value(title);
                    let description = store_value(description);
                    let on_open_change = Callback::new(move |open: bool| {
                        if !open {
                            handle.dismiss(id);
                        }
                    });
                    view! {
                        <Toast
                            variant=variant
                            duration=duration.unwrap_or(handle.default_duration)
                            on_open_change=on_open_change
                        >
                            <ToastTitle>{title.get_value()}</ToastTitle>
                            {description
                                .get_value()
                                .map(|description| view! { <ToastDescription>{description}</ToastDescription> })}
                            <ToastClose />
                        </Toast>
                    }
                }
            />
        </ol>
    }
}

#[derive(Clone, Copy)]
struct ToastContext {
    open: Controllable<bool>,
}

#[component]
/// Single notification.
///
/// Closes itself after `duration` milliseconds; hovering pauses the timer
/// and a zero duration disables it.
pub fn Toast(
    #[prop(default = ToastVariant::Info)] variant: ToastVariant,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(default = true)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] duration: Option<u64>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Li>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = use_controllable(open, default_open, on_open_change);
    let duration = duration
        .or_else(|| use_context::<ToastHandle>().map(|handle| handle.default_duration))
        .unwrap_or(DEFAULT_DURATION_MS);
    let dismiss_after = Duration::from_millis(duration);
    let timer = DelayedOpen::new(open);
    let schedule = {
        let timer = timer.clone();
        move || {
            if dismiss_after.is_zero() {
                timer.cancel();
            } else {
                timer.schedule(false, dismiss_after);
            }
        }
    };
    let restart = schedule.clone();
    let pause = timer.clone();
    create_effect(move |_| {
        if open.value.get() {
            schedule();
        } else {
            timer.cancel();
        }
    });
    provide_context(ToastContext { open });

    let class = cn!("aurora-toast", class);
    move || {
        open.value.get().then(|| {
            let attrs = attrs.clone();
            let (pause, restart) = (pause.clone(), restart.clone());
            view! {
                <li
                    role="status"
                    aria-live=variant.politeness()
                    aria-atomic="true"
                    tabindex="0"
                    class=class.clone()
                    data-state="open"
                    data-variant=variant.token()
                    node_ref=node_ref
                    on:pointerenter=move |_| pause.cancel()
                    on:pointerleave=move |_| restart()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            open.set.call(false);
                        }
                    }
                    {..attrs}
                >
                    {children()}
                </li>
            }
        })
    }
}

#[component]
/// Toast heading.
pub fn ToastTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn!("aurora-toast-title", class) {..attrs}>{children()}</div> }
}

#[component]
/// Toast body text.
pub fn ToastDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn!("aurora-toast-description", class) {..attrs}>{children()}</div> }
}

#[component]
/// Action button. Reports the click, then closes the toast.
///
/// `alt_text` describes an alternative way to perform the action for
/// assistive technology.
pub fn ToastAction(
    #[prop(into)] alt_text: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = expect_scoped::<ToastContext>("ToastAction", "Toast").open;
    view! {
        <button
            type="button"
            aria-description=alt_text
            class=cn!("aurora-toast-action", class)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
                open.set.call(false);
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Button closing the toast. Shows a labelled close icon without children.
pub fn ToastClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let open = expect_scoped::<ToastContext>("ToastClose", "Toast").open;
    let label = children.is_none().then_some("Close");
    let content = match children {
        Some(children) => children().into_view(),
        None => close_icon().into_view(),
    };
    view! {
        <button
            type="button"
            aria-label=label
            class=cn!("aurora-toast-close", class)
            on:click=move |_| open.set.call(false)
            {..attrs}
        >
            {content}
        </button>
    }
}

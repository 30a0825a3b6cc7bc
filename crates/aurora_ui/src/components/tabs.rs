use super::*;

#[derive(Clone)]
struct TabsContext {
    active: Controllable<String>,
    orientation: Orientation,
    base_id: String,
    triggers: RwSignal<Vec<String>>,
}

impl TabsContext {
    fn trigger_id(&self, value: &str) -> String {
        format!("{}-trigger-{value}", self.base_id)
    }

    fn content_id(&self, value: &str) -> String {
        format!("{}-content-{value}", self.base_id)
    }
}

/// Trigger value reached by pressing `key` from `current`, wrapping at the
/// ends.
fn adjacent_tab(triggers: &[String], current: &str, key: &str, orientation: Orientation) -> Option<String> {
    let (next, previous) = match orientation {
        Orientation::Horizontal => ("ArrowRight", "ArrowLeft"),
        Orientation::Vertical => ("ArrowDown", "ArrowUp"),
    };
    let index = triggers.iter().position(|value| value == current)?;
    let len = triggers.len();
    let target = match key {
        key if key == next => (index + 1) % len,
        key if key == previous => (index + len - 1) % len,
        "Home" => 0,
        "End" => len - 1,
        _ => return None,
    };
    triggers.get(target).cloned()
}

#[component]
/// Tabbed panels with one active value.
pub fn Tabs(
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let active = use_controllable(value, default_value, on_value_change);
    provide_context(TabsContext {
        active,
        orientation,
        base_id: next_part_id("tabs"),
        triggers: create_rw_signal(Vec::new()),
    });
    view! {
        <div
            class=cn!("aurora-tabs", class)
            data-orientation=orientation.token()
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Container for [`TabsTrigger`]s.
pub fn TabsList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let tabs = expect_scoped::<TabsContext>("TabsList", "Tabs");
    view! {
        <div
            role="tablist"
            aria-orientation=tabs.orientation.token()
            class=cn!("aurora-tabs-list", class)
            data-orientation=tabs.orientation.token()
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab selecting the panel with the same value.
///
/// Arrow keys along the tabs orientation activate the neighbouring tab.
pub fn TabsTrigger(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let tabs = expect_scoped::<TabsContext>("TabsTrigger", "Tabs");
    tabs.triggers.update(|triggers| triggers.push(value.clone()));
    on_cleanup({
        let value = value.clone();
        let triggers = tabs.triggers;
        move || triggers.update(|registered| registered.retain(|entry| *entry != value))
    });

    let active = tabs.active;
    let orientation = tabs.orientation;
    let triggers = tabs.triggers;
    let item = value.clone();
    let selected = Signal::derive(move || active.value.with(|current| *current == item));
    let chosen = value.clone();
    let trigger_id = tabs.trigger_id(&value);
    let content_id = tabs.content_id(&value);

    view! {
        <button
            type="button"
            role="tab"
            id=trigger_id
            aria-controls=content_id
            aria-selected=move || if selected.get() { "true" } else { "false" }
            tabindex=move || if selected.get() { "0" } else { "-1" }
            class=cn!("aurora-tabs-trigger", class)
            data-state=move || active_state_token(selected.get())
            data-orientation=orientation.token()
            data-disabled=move || flag_token(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            on:click=move |_| active.set.call(chosen.clone())
            on:keydown=move |ev: KeyboardEvent| {
                let next = triggers.with_untracked(|triggers| {
                    adjacent_tab(triggers, &value, &ev.key(), orientation)
                });
                if let Some(next) = next {
                    ev.prevent_default();
                    active.set.call(next);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Panel shown while its value is active.
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = expect_scoped::<TabsContext>("TabsContent", "Tabs");
    let active = tabs.active.value;
    let id = tabs.content_id(&value);
    let labelled_by = tabs.trigger_id(&value);
    let class = cn!("aurora-tabs-content", class);
    move || {
        active.with(|current| *current == value).then(|| {
            let attrs = attrs.clone();
            view! {
                <div
                    role="tabpanel"
                    tabindex="0"
                    id=id.clone()
                    aria-labelledby=labelled_by.clone()
                    class=class.clone()
                    data-state="active"
                    data-orientation=tabs.orientation.token()
                    {..attrs}
                    node_ref=node_ref
                >
                    {children()}
                </div>
            }
        })
    }
}

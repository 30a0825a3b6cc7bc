use std::rc::Rc;

use super::dialog::{dialog_surface, DialogScope, Dismiss};
use super::*;

const VISIBLE_ITEM_SELECTOR: &str = "[data-aurora-command-item]:not([hidden])";

/// Whether every character of `search` appears in `candidate` in order,
/// ignoring case. A blank search matches everything.
pub fn matches_search(candidate: &str, search: &str) -> bool {
    let mut remaining = candidate.chars().flat_map(char::to_lowercase);
    search
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .all(|wanted| remaining.any(|found| found == wanted))
}

#[derive(Clone)]
struct CommandContext {
    search: Controllable<String>,
    filter: bool,
    /// Search terms of every mounted item, keyed by item id.
    items: RwSignal<Vec<(String, Vec<String>)>>,
    list_id: String,
}

impl CommandContext {
    fn shows(&self, terms: &[String]) -> bool {
        !self.filter
            || self
                .search
                .value
                .with(|search| terms.iter().any(|term| matches_search(term, search)))
    }
}

fn use_command(part: &'static str) -> CommandContext {
    expect_scoped::<CommandContext>(part, "Command")
}

#[component]
/// Searchable command palette.
///
/// Items whose value or keywords do not match the search are hidden unless
/// `filter` is off. Arrow keys move between visible items.
pub fn Command(
    #[prop(optional, into)] search: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_search: String,
    #[prop(optional)] on_search_change: Option<Callback<String>>,
    #[prop(default = true)] filter: bool,
    #[prop(default = "Command Menu")] label: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    provide_context(CommandContext {
        search: use_controllable(search, default_search, on_search_change),
        filter,
        items: create_rw_signal(Vec::new()),
        list_id: next_part_id("command-list"),
    });
    view! {
        <div
            aria-label=label
            class=cn!("aurora-command", class)
            node_ref=node_ref
            on:keydown=move |ev| {
                if let Some(command) = node_ref.get_untracked() {
                    focus::handle_roving_keydown(&ev, &command, VISIBLE_ITEM_SELECTOR, Orientation::Vertical);
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Search field driving the filter.
pub fn CommandInput(
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let command = use_command("CommandInput");
    let search = command.search;
    view! {
        <input
            type="text"
            role="combobox"
            aria-autocomplete="list"
            aria-expanded="true"
            aria-controls=command.list_id
            autocomplete="off"
            spellcheck="false"
            placeholder=placeholder
            class=cn!("aurora-command-input", class)
            value=move || search.value.get()
            prop:value=move || search.value.get()
            node_ref=node_ref
            on:input=move |ev| search.set.call(event_target_value(&ev))
            {..attrs}
        />
    }
}

#[component]
/// Listbox holding the items.
pub fn CommandList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let command = use_command("CommandList");
    view! {
        <div role="listbox" id=command.list_id class=cn!("aurora-command-list", class) {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Shown while no mounted item matches the search.
pub fn CommandEmpty(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let command = use_command("CommandEmpty");
    let items = command.items;
    let class = cn!("aurora-command-empty", class);
    move || {
        let empty = items.with(|items| !items.iter().any(|(_, terms)| command.shows(terms)));
        empty.then(|| {
            let attrs = attrs.clone();
            view! {
                <div role="presentation" class=class.clone() {..attrs}>
                    {children()}
                </div>
            }
        })
    }
}

#[component]
/// Labelled set of related items.
pub fn CommandGroup(
    #[prop(optional, into)] heading: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    use_command("CommandGroup");
    let heading_id = heading.as_ref().map(|_| next_part_id("command-group"));
    view! {
        <div role="group" aria-labelledby=heading_id.clone() class=cn!("aurora-command-group", class) {..attrs}>
            {heading.map(|heading| {
                view! {
                    <div aria-hidden="true" id=heading_id class="aurora-command-group-heading">
                        {heading}
                    </div>
                }
            })}
            {children()}
        </div>
    }
}

#[component]
/// Selectable command. `on_select` receives the item value.
pub fn CommandItem(
    #[prop(into)] value: String,
    /// Extra terms the search matches against.
    #[prop(optional)]
    keywords: Vec<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<String>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let command = use_command("CommandItem");
    let id = next_part_id("command-item");
    let mut terms = vec![value.clone()];
    terms.extend(keywords);

    let items = command.items;
    items.update(|items| items.push((id.clone(), terms.clone())));
    let registered = id.clone();
    on_cleanup(move || items.update(|items| items.retain(|(item, _)| *item != registered)));

    let visible = Signal::derive(move || command.shows(&terms));
    let selected = value.clone();
    let select = Rc::new(move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_select) = on_select {
            on_select.call(selected.clone());
        }
    });
    let on_key = Rc::clone(&select);
    view! {
        <div
            role="option"
            id=id
            tabindex="-1"
            hidden=move || !visible.get()
            aria-disabled=move || disabled.get().then_some("true")
            class=cn!("aurora-command-item", class)
            data-aurora-command-item=""
            data-value=value
            data-disabled=move || flag_token(disabled.get())
            node_ref=node_ref
            on:click=move |_| select()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_key();
                }
            }
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Rule between groups. Hidden while searching unless `always_render`.
pub fn CommandSeparator(
    #[prop(optional)] always_render: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let search = use_command("CommandSeparator").search;
    view! {
        <div
            role="separator"
            hidden=move || !always_render && search.value.with(|search| !search.trim().is_empty())
            class=cn!("aurora-command-separator", class)
            {..attrs}
        ></div>
    }
}

#[component]
/// [`Command`] inside a modal dialog.
pub fn CommandDialog(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(default = "Command Menu")] label: &'static str,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let scope = DialogScope::new("command-dialog", open, default_open, on_open_change);
    let title_id = scope.title_id.clone();
    let body: ChildrenFn = Rc::new(move || {
        let children = Rc::clone(&children);
        view! {
            <h2 id=title_id.clone() style=VISUALLY_HIDDEN_STYLE>{label}</h2>
            <Command label=label>{children()}</Command>
        }
    });
    dialog_surface(
        scope,
        "dialog",
        Dismiss::Light,
        "command-dialog",
        cn!("aurora-command-dialog", class),
        node_ref,
        attrs,
        body,
    )
}

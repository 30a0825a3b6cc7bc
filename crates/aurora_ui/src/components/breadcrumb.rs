use aurora_core::{merge_attrs, polymorphic_root, As};
use leptos::html::AnyElement;

use super::*;

#[component]
/// Navigation trail landmark.
pub fn Breadcrumb(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Nav>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav aria-label="Breadcrumb" class=cn!("aurora-breadcrumb", class) {..attrs} node_ref=node_ref>
            {children()}
        </nav>
    }
}

#[component]
/// Ordered trail list.
pub fn BreadcrumbList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Ol>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <ol class=cn!("aurora-breadcrumb-list", class) {..attrs} node_ref=node_ref>
            {children()}
        </ol>
    }
}

#[component]
/// One trail entry.
pub fn BreadcrumbItem(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Li>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <li class=cn!("aurora-breadcrumb-item", class) {..attrs} node_ref=node_ref>
            {children()}
        </li>
    }
}

#[component]
/// Trail link; renders an anchor unless `as_` selects another tag.
pub fn BreadcrumbLink(
    #[prop(default = As::A)] as_: As,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<AnyElement>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let mut computed = vec![("class", cn!("aurora-breadcrumb-link", class).into_attribute())];
    if let Some(href) = href {
        computed.push(("href", href.into_attribute()));
    }
    polymorphic_root(as_, node_ref, merge_attrs(computed, attrs), Some(children))
}

#[component]
/// Presentational divider between entries; `/` when no children are given.
pub fn BreadcrumbSeparator(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let content = match children {
        Some(children) => children().into_view(),
        None => "/".into_view(),
    };
    view! {
        <span
            role="presentation"
            aria-hidden="true"
            class=cn!("aurora-breadcrumb-separator", class)
            {..attrs}
            node_ref=node_ref
        >
            {content}
        </span>
    }
}

#[component]
/// The current page entry.
pub fn BreadcrumbPage(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span aria-current="page" class=cn!("aurora-breadcrumb-page", class) {..attrs} node_ref=node_ref>
            {children()}
        </span>
    }
}

//! Polymorphic root rendering for components that accept an `as_` selector.
//!
//! The render target is a narrowed union of native tags rather than an
//! open-ended component parameter. Computed attributes and forwarded caller
//! attributes are applied to whichever tag was selected, and the caller's
//! [`NodeRef`] is attached to it.

use leptos::html::{self, AnyElement};
use leptos::*;

use crate::token_enum;

token_enum! {
    /// Native tags a polymorphic component may render as its root.
    pub enum As {
        /// `<div>`
        Div => "div",
        /// `<section>`
        Section => "section",
        /// `<article>`
        Article => "article",
        /// `<aside>`
        Aside => "aside",
        /// `<header>`
        Header => "header",
        /// `<footer>`
        Footer => "footer",
        /// `<main>`
        Main => "main",
        /// `<nav>`
        Nav => "nav",
        /// `<span>`
        Span => "span",
        /// `<p>`
        P => "p",
        /// `<li>`
        Li => "li",
        /// `<a>`
        A => "a",
        /// `<button>`
        Button => "button",
        /// `<label>`
        Label => "label",
    }
    default Div;
}

impl As {
    /// Tag name rendered for this target.
    pub fn tag(self) -> &'static str {
        self.token()
    }
}

/// Ordered attribute list applied to a rendered root.
pub type AttrList = Vec<(&'static str, Attribute)>;

/// Combines component-computed attributes with caller-forwarded ones.
///
/// A forwarded attribute replaces a computed attribute of the same name, the
/// way later spread properties win over earlier ones. Order is otherwise
/// preserved: computed first, then forwarded.
pub fn merge_attrs(computed: AttrList, forwarded: AttrList) -> AttrList {
    let mut merged = computed
        .into_iter()
        .filter(|(name, _)| !forwarded.iter().any(|(forwarded, _)| forwarded == name))
        .collect::<AttrList>();
    merged.extend(forwarded);
    merged
}

/// Renders `target` with the merged attribute list, the caller's node ref, and
/// children.
///
/// A target that cannot hold the forwarded attributes simply ignores them; the
/// wrapper does not guard against that.
pub fn polymorphic_root(
    target: As,
    node_ref: NodeRef<AnyElement>,
    attrs: AttrList,
    children: Option<Children>,
) -> HtmlElement<AnyElement> {
    let mut root = html::custom(html::Custom::new(target.tag()))
        .into_any()
        .node_ref(node_ref);
    for (name, value) in attrs {
        root = root.attr(name, value);
    }
    match children {
        Some(children) => root.child(children()),
        None => root,
    }
}

//! Rendering and markup helpers shared by component tests.

use leptos::IntoView;

/// Renders a view tree to HTML through the server renderer.
pub fn render<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(f).to_string()
}

/// Every opening tag of `tag` in document order, including attributes.
pub fn opening_tags<'a>(html: &'a str, tag: &str) -> Vec<&'a str> {
    let needle = format!("<{tag}");
    let mut tags = Vec::new();
    let mut offset = 0;
    while let Some(found) = html[offset..].find(&needle) {
        let start = offset + found;
        let after = start + needle.len();
        let boundary = html[after..].chars().next();
        let Some(end) = html[start..].find('>').map(|end| start + end) else {
            break;
        };
        if matches!(boundary, Some(' ' | '>' | '/')) {
            tags.push(&html[start..=end]);
        }
        offset = end + 1;
    }
    tags
}

/// The first opening tag of `tag`.
///
/// # Panics
///
/// Panics when `html` contains no such element.
pub fn opening_tag<'a>(html: &'a str, tag: &str) -> &'a str {
    opening_tags(html, tag)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no <{tag}> in {html}"))
}

/// The first opening tag carrying `class` among its classes.
///
/// # Panics
///
/// Panics when no element carries the class.
pub fn tag_with_class<'a>(html: &'a str, class: &str) -> &'a str {
    let mut offset = 0;
    while let Some(found) = html[offset..].find('<') {
        let start = offset + found;
        let Some(end) = html[start..].find('>').map(|end| start + end) else {
            break;
        };
        let tag = &html[start..=end];
        if classes(tag).contains(&class) {
            return tag;
        }
        offset = end + 1;
    }
    panic!("no element with class {class} in {html}")
}

/// Value of attribute `name` in an opening tag.
///
/// The server renderer pads `class` lists with a leading space and ends every
/// `style` declaration with `;`. Both are stripped so assertions compare the
/// value a component computed.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    let value = &tag[start..end];
    Some(match name {
        "class" => value.trim(),
        "style" => value.trim().trim_end_matches(';').trim_end(),
        _ => value,
    })
}

/// Class tokens of an opening tag, in order.
pub fn classes<'a>(tag: &'a str) -> Vec<&'a str> {
    attr(tag, "class")
        .map(|classes| classes.split_whitespace().collect())
        .unwrap_or_default()
}

/// Whether an opening tag carries attribute `name`, with or without a value.
pub fn has_attr(tag: &str, name: &str) -> bool {
    [" ", "=", ">", "/"]
        .iter()
        .any(|next| tag.contains(&format!(" {name}{next}")))
}

/// `data-testid` of the first element carrying `class`.
pub fn test_id<'a>(html: &'a str, class: &str) -> Option<&'a str> {
    attr(tag_with_class(html, class), "data-testid")
}

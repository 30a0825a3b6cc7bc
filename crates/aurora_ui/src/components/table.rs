use super::*;

token_enum! {
    /// Table treatments.
    pub enum TableVariant {
        /// Plain rows.
        Default => "default",
        /// Alternating row tint.
        Striped => "striped",
        /// Cell borders.
        Bordered => "bordered",
    }
    default Default;
}

#[component]
/// Data table inside a scrolling wrapper.
pub fn Table(
    #[prop(default = TableVariant::Default)] variant: TableVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] sticky_header: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Table>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="aurora-table-wrapper">
            <table
                class=cn!("aurora-table", class)
                data-variant=variant.token()
                data-size=size.token()
                data-sticky-header=flag_token(sticky_header)
                {..attrs}
                node_ref=node_ref
            >
                {children()}
            </table>
        </div>
    }
}

#[component]
/// Header row group.
pub fn TableHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Thead>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <thead class=cn!("aurora-table-header", class) {..attrs} node_ref=node_ref>
            {children()}
        </thead>
    }
}

#[component]
/// Body row group.
pub fn TableBody(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Tbody>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <tbody class=cn!("aurora-table-body", class) {..attrs} node_ref=node_ref>
            {children()}
        </tbody>
    }
}

#[component]
/// Footer row group.
pub fn TableFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Tfoot>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <tfoot class=cn!("aurora-table-footer", class) {..attrs} node_ref=node_ref>
            {children()}
        </tfoot>
    }
}

#[component]
/// Table row.
pub fn TableRow(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Tr>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr class=cn!("aurora-table-row", class) {..attrs} node_ref=node_ref>
            {children()}
        </tr>
    }
}

#[component]
/// Column header cell.
pub fn TableHead(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Th>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <th class=cn!("aurora-table-head", class) {..attrs} node_ref=node_ref>
            {children()}
        </th>
    }
}

#[component]
/// Data cell.
pub fn TableCell(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Td>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <td class=cn!("aurora-table-cell", class) {..attrs} node_ref=node_ref>
            {children()}
        </td>
    }
}

#[component]
/// Table caption.
pub fn TableCaption(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Caption>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <caption class=cn!("aurora-table-caption", class) {..attrs} node_ref=node_ref>
            {children()}
        </caption>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{attr, has_attr, opening_tag, opening_tags, render, test_id};

    fn sample(variant: TableVariant, sticky_header: bool) -> String {
        render(move || {
            view! {
                <Table variant=variant sticky_header=sticky_header>
                    <TableCaption>"Test Table"</TableCaption>
                    <TableHeader>
                        <TableRow><TableHead>"Name"</TableHead><TableHead>"Value"</TableHead></TableRow>
                    </TableHeader>
                    <TableBody>
                        <TableRow><TableCell>"Item 1"</TableCell><TableCell>"100"</TableCell></TableRow>
                        <TableRow><TableCell>"Item 2"</TableCell><TableCell>"200"</TableCell></TableRow>
                    </TableBody>
                    <TableFooter>
                        <TableRow><TableCell>"Total"</TableCell><TableCell>"300"</TableCell></TableRow>
                    </TableFooter>
                </Table>
            }
        })
    }

    #[test]
    fn renders_table_structure() {
        let html = sample(TableVariant::Default, false);
        assert_eq!(attr(opening_tag(&html, "div"), "class"), Some("aurora-table-wrapper"));
        let table = opening_tag(&html, "table");
        assert_eq!(attr(table, "data-variant"), Some("default"));
        assert_eq!(attr(table, "data-size"), Some("md"));
        assert!(!has_attr(table, "data-sticky-header"), "{table}");
        assert_eq!(opening_tags(&html, "th").len(), 2);
        assert_eq!(opening_tags(&html, "td").len(), 6);
        assert_eq!(opening_tags(&html, "tr").len(), 4);
        for tag in ["thead", "tbody", "tfoot", "caption"] {
            assert_eq!(opening_tags(&html, tag).len(), 1, "{tag}");
        }
    }

    #[test]
    fn striped_sticky_table() {
        let html = sample(TableVariant::Striped, true);
        let table = opening_tag(&html, "table");
        assert_eq!(attr(table, "data-variant"), Some("striped"));
        assert_eq!(attr(table, "data-sticky-header"), Some("true"));
    }

    #[test]
    fn forwards_attributes_to_every_part() {
        let html = render(|| {
            view! {
                <Table attr:data-testid="table">
                    <TableCaption attr:data-testid="caption">"Invoices"</TableCaption>
                    <TableHeader attr:data-testid="header">
                        <TableRow attr:data-testid="row">
                            <TableHead attr:data-testid="head">"Id"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody attr:data-testid="body">
                        <TableRow>
                            <TableCell attr:data-testid="cell">"1"</TableCell>
                        </TableRow>
                    </TableBody>
                    <TableFooter attr:data-testid="footer">
                        <TableRow>
                            <TableCell>"Total"</TableCell>
                        </TableRow>
                    </TableFooter>
                </Table>
            }
        });
        for (class, id) in [
            ("aurora-table", "table"),
            ("aurora-table-caption", "caption"),
            ("aurora-table-header", "header"),
            ("aurora-table-row", "row"),
            ("aurora-table-head", "head"),
            ("aurora-table-body", "body"),
            ("aurora-table-cell", "cell"),
            ("aurora-table-footer", "footer"),
        ] {
            assert_eq!(test_id(&html, class), Some(id), "{class}");
        }
    }
}

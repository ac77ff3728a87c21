//! Parser module: walks the XML tree doxygen writes into `<builddir>/xml`.

pub mod compound;
pub mod index;
pub mod links;
pub mod member;

use roxmltree::Node;

/// Blocks nested in a paragraph that are not part of its prose.
const SKIPPED_BLOCKS: &[&str] = &["parameterlist", "simplesect"];

/// First child element named `tag`.
pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// All child elements named `tag`, in document order.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(tag))
}

/// Text content of `node` and its descendants with whitespace collapsed.
///
/// Inline markup such as `<ref>` or `<computeroutput>` contributes its text;
/// parameter lists and `\return`-style sections do not.
pub(crate) fn text_of(node: Node) -> String {
    let mut raw = String::new();
    collect_text(node, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: Node, out: &mut String) {
    for n in node.children() {
        if n.is_text() {
            out.push_str(n.text().unwrap_or(""));
        } else if n.is_element() && !SKIPPED_BLOCKS.contains(&n.tag_name().name()) {
            // <para>a</para><para>b</para> must not glue into "ab"
            let block = n.has_tag_name("para");
            if block {
                out.push(' ');
            }
            collect_text(n, out);
            if block {
                out.push(' ');
            }
        }
    }
}

/// Text of the child element `tag`, or the empty string when it is absent.
pub(crate) fn child_text(node: Node, tag: &str) -> String {
    child(node, tag).map(text_of).unwrap_or_default()
}

//! Flat XML dump of a traversal tree.
//!
//! One `<element/>` per tree node in top-down (preorder) order, attributes
//! for id, kind, depth, and revisit flag. Meant for archival and manual
//! inspection, not programmatic consumption.

use std::fmt::Write;

use mep_core::TreeIdx;
use mep_model::Network;
use mep_traverse::TraversalTree;

use crate::error::{RenderError, RenderResult};

/// Escape a value for use in XML attribute or text content.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole tree as one XML document.
pub fn render_xml(network: &Network, tree: &TraversalTree) -> RenderResult<String> {
    let mut xml = String::new();
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        xml,
        r#"<network id="{}" name="{}" category="{}">"#,
        network.uid(),
        xml_escape(network.name()),
        network.category()
    )?;
    write_subtree(&mut xml, network, tree, tree.root())?;
    writeln!(xml, "</network>")?;
    Ok(xml)
}

/// Preorder emission, matching the top-down JSON ordering.
fn write_subtree(
    xml: &mut String,
    network: &Network,
    tree: &TraversalTree,
    idx: TreeIdx,
) -> RenderResult<()> {
    let node = tree.node(idx);
    let elem = network
        .element(node.elem)
        .ok_or(RenderError::DanglingElement { elem: node.elem })?;
    writeln!(
        xml,
        r#"  <element id="{}" name="{}" kind="{}" depth="{}" revisit="{}" />"#,
        node.uid,
        xml_escape(&elem.name),
        elem.kind,
        node.depth,
        node.is_revisit()
    )?;
    for &child in node.children() {
        write_subtree(xml, network, tree, child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mep_core::{Category, ElementKind};
    use mep_model::NetworkBuilder;
    use mep_traverse::traverse;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(xml_escape("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn dump_is_preorder_with_attributes() {
        let mut b = NetworkBuilder::new(42, "Supply & Return", Category::Piping);
        let root = b.add_element(1, "Pump", ElementKind::Equipment);
        let pipe = b.add_element(2, "Pipe <main>", ElementKind::Segment);
        b.connect(root, "Out", pipe, "In");
        b.set_root(root);
        let network = b.build().unwrap();
        let tree = traverse(&network).unwrap();

        let xml = render_xml(&network, &tree).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<network id="42" name="Supply &amp; Return" category="piping">"#));

        let root_pos = xml.find(r#"id="1""#).unwrap();
        let pipe_pos = xml.find(r#"id="2""#).unwrap();
        assert!(root_pos < pipe_pos);
        assert!(xml.contains(r#"name="Pipe &lt;main&gt;""#));
        assert!(xml.contains(r#"depth="1""#));
        assert!(xml.contains(r#"revisit="false""#));
        assert!(xml.trim_end().ends_with("</network>"));
    }

    #[test]
    fn revisit_flag_appears() {
        let mut b = NetworkBuilder::new(43, "Loop", Category::Piping);
        let root = b.add_element(1, "Chiller", ElementKind::Equipment);
        let coil = b.add_element(2, "Coil", ElementKind::Terminal);
        b.connect(root, "Supply", coil, "In");
        b.connect(coil, "Out", root, "Return");
        b.set_root(root);
        let network = b.build().unwrap();
        let tree = traverse(&network).unwrap();

        let xml = render_xml(&network, &tree).unwrap();
        assert!(xml.contains(r#"revisit="true""#));
    }
}

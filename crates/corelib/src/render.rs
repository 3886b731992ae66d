//! Plain text, HTML and XML renderings of the ring.
//!
//! Every renderer walks the ring from a chosen start node with
//! [`RingWalk`](crate::RingWalk) and emits each node's label once.

use crate::node::{Format, NodeId};
use crate::Network;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<network>";
const XML_FOOTER: &str = "\n</network>";

const HTML_HEADER: &str = "<HTML>\n<HEAD>\n<TITLE>LAN Simulation</TITLE>\n</HEAD>\n<BODY>\n<H1>LAN SIMULATION</H1>\n\n<UL>";
const HTML_FOOTER: &str = "\n\t<LI>...</LI>\n</UL>\n\n</BODY>\n</HTML>\n";

/// Render the ring starting at `start` in the given format.
pub fn render(network: &Network, start: NodeId, format: Format) -> String {
    let mut buf = String::with_capacity(32 * network.len());
    render_on(network, start, format, &mut buf);
    buf
}

/// Append the rendering of the ring starting at `start` to `buf`.
pub fn render_on(network: &Network, start: NodeId, format: Format, buf: &mut String) {
    match format {
        Format::Text => text_on(network, start, buf),
        Format::Html => html_on(network, start, buf),
        Format::Xml => xml_on(network, start, buf),
    }
}

/// `Workstation Filip [Workstation] -> Node n1 [Node] -> ...  ... `
pub fn text_on(network: &Network, start: NodeId, buf: &mut String) {
    for (_, node) in network.walk(start) {
        node.render_label(buf, Format::Text);
        buf.push_str(" -> ");
    }
    buf.push_str(" ... ");
}

pub fn html_on(network: &Network, start: NodeId, buf: &mut String) {
    buf.push_str(HTML_HEADER);
    for (_, node) in network.walk(start) {
        buf.push_str("\n\t<LI> ");
        node.render_label(buf, Format::Html);
        buf.push_str(" </LI>");
    }
    buf.push_str(HTML_FOOTER);
}

pub fn xml_on(network: &Network, start: NodeId, buf: &mut String) {
    buf.push_str(XML_HEADER);
    for (_, node) in network.walk(start) {
        buf.push_str("\n\t");
        node.render_label(buf, Format::Xml);
    }
    buf.push_str(XML_FOOTER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, RingBuilder};

    fn default_first() -> (Network, NodeId) {
        let network = Network::default_example();
        let first = network.first_node().unwrap();
        (network, first)
    }

    #[test]
    fn test_text() {
        let (network, first) = default_first();
        assert_eq!(
            render(&network, first, Format::Text),
            "Workstation Filip [Workstation] -> Node n1 [Node] -> Workstation Hans [Workstation] -> Printer Andy [Printer] ->  ... "
        );
    }

    #[test]
    fn test_text_is_stable() {
        let (network, first) = default_first();
        assert_eq!(
            render(&network, first, Format::Text),
            render(&network, first, Format::Text)
        );
    }

    #[test]
    fn test_xml() {
        let (network, first) = default_first();
        assert_eq!(
            render(&network, first, Format::Xml),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<network>\
             \n\t<workstation>Filip</workstation>\
             \n\t<node>n1</node>\
             \n\t<workstation>Hans</workstation>\
             \n\t<printer>Andy</printer>\
             \n</network>"
        );
    }

    #[test]
    fn test_html() {
        let (network, first) = default_first();
        assert_eq!(
            render(&network, first, Format::Html),
            "<HTML>\n<HEAD>\n<TITLE>LAN Simulation</TITLE>\n</HEAD>\n<BODY>\n<H1>LAN SIMULATION</H1>\n\n<UL>\
             \n\t<LI> <workstation>Filip</workstation> </LI>\
             \n\t<LI> <node>n1</node> </LI>\
             \n\t<LI> <workstation>Hans</workstation> </LI>\
             \n\t<LI> <printer>Andy</printer> </LI>\
             \n\t<LI>...</LI>\n</UL>\n\n</BODY>\n</HTML>\n"
        );
    }

    #[test]
    fn test_unknown_kind_labels() {
        let network = RingBuilder::new()
            .workstation("w")
            .with_kind("x", NodeKind::Unknown)
            .printer("p")
            .build()
            .unwrap();
        let x = network.find("x").unwrap();

        assert!(render(&network, x, Format::Html).contains("<LI> (Unexpected) </LI>"));
        assert!(render(&network, x, Format::Xml).contains("\n\t<unknown></unknown>"));
        assert!(render(&network, x, Format::Text).starts_with("<unknown></unknown> -> "));
    }

    #[test]
    fn test_render_on_appends() {
        let (network, first) = default_first();
        let mut buf = String::from("ring: ");
        render_on(&network, first, Format::Text, &mut buf);
        assert!(buf.starts_with("ring: Workstation Filip"));
    }
}

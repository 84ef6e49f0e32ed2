use super::*;

enum DumpStep {
    Node(NodeId),
    RawText(NodeId),
    Close(NodeId),
}

impl Dom {
    /// Outer HTML of a node with live form state (value, checked) written
    /// back into the markup.
    pub(crate) fn dump_node(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        let mut steps = vec![DumpStep::Node(node_id)];
        while let Some(step) = steps.pop() {
            match step {
                DumpStep::Node(current) => self.dump_step(current, &mut out, &mut steps),
                DumpStep::RawText(current) => {
                    if let NodeType::Text(text) = &self.nodes[current.0].node_type {
                        out.push_str(text);
                    }
                }
                DumpStep::Close(current) => {
                    if let Some(tag) = self.tag_name(current) {
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
        }
        out
    }

    fn dump_step(&self, node_id: NodeId, out: &mut String, steps: &mut Vec<DumpStep>) {
        let children = &self.nodes[node_id.0].children;
        match &self.nodes[node_id.0].node_type {
            NodeType::Document => {
                steps.extend(children.iter().rev().map(|child| DumpStep::Node(*child)));
            }
            NodeType::Text(text) => out.push_str(&escape_html_text_for_serialization(text)),
            NodeType::Element(element) => {
                push_start_tag(element, out);
                if is_void_tag(&element.tag_name) {
                    return;
                }
                if element.tag_name.eq_ignore_ascii_case("textarea") {
                    out.push_str(&escape_html_text_for_serialization(&element.value));
                    steps.push(DumpStep::Close(node_id));
                    return;
                }
                let raw_text_container = element.tag_name.eq_ignore_ascii_case("script")
                    || element.tag_name.eq_ignore_ascii_case("style");
                steps.push(DumpStep::Close(node_id));
                steps.extend(children.iter().rev().map(|child| {
                    let is_text = matches!(self.nodes[child.0].node_type, NodeType::Text(_));
                    if raw_text_container && is_text {
                        DumpStep::RawText(*child)
                    } else {
                        DumpStep::Node(*child)
                    }
                }));
            }
        }
    }
}

fn push_start_tag(element: &Element, out: &mut String) {
    let mut attrs = element
        .attrs
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<Vec<_>>();
    if element.tag_name.eq_ignore_ascii_case("input") {
        attrs.retain(|(k, _)| k != "checked");
        if element.checked {
            attrs.push(("checked".to_string(), "checked".to_string()));
        }
        if !is_checkbox_or_radio_input_element(element) {
            attrs.retain(|(k, _)| k != "value");
            if !element.value.is_empty() {
                attrs.push(("value".to_string(), element.value.clone()));
            }
        }
    }
    attrs.sort_by(|(left, _), (right, _)| left.cmp(right));

    out.push('<');
    out.push_str(&element.tag_name);
    for (k, v) in attrs {
        out.push(' ');
        out.push_str(&k);
        out.push_str("=\"");
        out.push_str(&escape_html_attr_for_serialization(&v));
        out.push('"');
    }
    out.push('>');
}

fn escape_html_text_for_serialization(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

fn escape_html_attr_for_serialization(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

//! Minimal XML element tree
//!
//! Every interpolated value reaches the output through [`escape_attr`], so
//! domains, paths and destinations taken from the CSV cannot break the markup.

use std::fmt::Write as _;

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self { name, attributes: Vec::new(), children: Vec::new() }
    }

    /// Add an attribute. Attributes are written in insertion order.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Serialize with two-space indentation and no XML declaration.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        if depth > 0 {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }

        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }

        if self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_into(out, depth + 1);
        }
        out.push('\n');
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        assert_eq!(Element::new("rules").to_xml_string(), "<rules />");
        assert_eq!(
            Element::new("rules").attr("configSource", "rules.config").to_xml_string(),
            "<rules configSource=\"rules.config\" />"
        );
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let tree = Element::new("rewrite").child(
            Element::new("rules").child(Element::new("rule").attr("name", "r").child(Element::new("match"))),
        );
        assert_eq!(
            tree.to_xml_string(),
            "<rewrite>\n  <rules>\n    <rule name=\"r\">\n      <match />\n    </rule>\n  </rules>\n</rewrite>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let el = Element::new("add").attr("value", "http://x.com/?a=1&b=\"2\"<'>\n");
        assert_eq!(
            el.to_xml_string(),
            "<add value=\"http://x.com/?a=1&amp;b=&quot;2&quot;&lt;&apos;&gt;&#xA;\" />"
        );
    }

    #[test]
    fn test_accessors() {
        let mut el = Element::new("rule").attr("name", "x");
        assert!(!el.has_children());
        el.push(Element::new("match"));
        assert_eq!(el.name(), "rule");
        assert_eq!(el.attribute("name"), Some("x"));
        assert_eq!(el.attribute("missing"), None);
        assert_eq!(el.children().len(), 1);
    }
}

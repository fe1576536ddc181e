//! Ordered labelled XML tree.
//!
//! Templates and generated documents are plain element trees: a name,
//! optional text, ordered children. Attributes are not part of the
//! document schema and are dropped on read.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::TemplateError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// First child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Follows first-matching children along `path`.
    #[must_use]
    pub fn walk(&self, path: &[&str]) -> Option<&XmlNode> {
        let mut node = self;
        for segment in path {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Mutable variant of [`XmlNode::walk`], over owned path segments.
    #[must_use]
    pub fn walk_mut(&mut self, path: &[String]) -> Option<&mut XmlNode> {
        let mut node = self;
        for segment in path {
            node = node.children.iter_mut().find(|c| c.name == *segment)?;
        }
        Some(node)
    }

    /// Sets the text of the named child, creating it when absent.
    pub fn set_child_text(&mut self, name: &str, value: &str) {
        if let Some(child) = self.child_mut(name) {
            child.text = value.to_string();
        } else {
            let mut child = XmlNode::new(name);
            child.text = value.to_string();
            self.children.push(child);
        }
    }

    /// Sets the text of the first descendant (depth-first) with the
    /// given name. Returns false when no such element exists.
    pub fn set_descendant_text(&mut self, name: &str, value: &str) -> bool {
        for child in &mut self.children {
            if child.name == name {
                child.text = value.to_string();
                return true;
            }
            if child.set_descendant_text(name, value) {
                return true;
            }
        }
        false
    }

    /// Text of the first descendant with the given name (depth-first).
    #[must_use]
    pub fn descendant_text(&self, name: &str) -> Option<&str> {
        if self.name == name {
            return Some(&self.text);
        }
        self.children.iter().find_map(|c| c.descendant_text(name))
    }

    /// Number of descendants (self excluded) with the given name.
    #[must_use]
    pub fn count_descendants(&self, name: &str) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.name == name) + c.count_descendants(name))
            .sum()
    }

    /// Parses a single-rooted XML document into a tree.
    pub fn from_xml_str(text: &str) -> Result<Self, TemplateError> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(XmlNode::new(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                Event::Empty(e) => {
                    let node =
                        XmlNode::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        let raw = String::from_utf8_lossy(t.as_ref()).into_owned();
                        top.text.push_str(&unescape(&raw)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or(TemplateError::EmptyDocument)
    }

    /// Serializes the tree: XML declaration, one tab per nesting depth.
    ///
    /// Output is fully deterministic so generated artifacts can be
    /// compared byte for byte.
    pub fn to_xml_string(&self) -> Result<String, TemplateError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_node(&mut writer, self)?;
        let mut out = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        out.push('\n');
        Ok(out)
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    }
}

fn write_node<W: std::io::Write>(
    writer: &mut Writer<W>,
    node: &XmlNode,
) -> Result<(), TemplateError> {
    if node.children.is_empty() && node.text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(node.name.as_str())))?;
    } else if node.children.is_empty() {
        writer.write_event(Event::Start(BytesStart::new(node.name.as_str())))?;
        writer.write_event(Event::Text(BytesText::new(&node.text)))?;
        writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(node.name.as_str())))?;
        for child in &node.children {
            write_node(writer, child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    }
    Ok(())
}

//! Form field value setter and XML response binders.
//!
//! A [`Document`] is a deterministic, in-memory HTML document. Form fields in
//! it are written with [`form_element::set_value`] (one field) or
//! [`form_element::unpack`] (many fields), and small XML server responses are
//! copied into fields with a [`ResponseBinder`].
//!
//! ```
//! use form_binder::{Document, ResponseBinder};
//!
//! let mut doc = Document::from_html(
//!     "<input id='dataRepositoryURL' type='text'>",
//! )?;
//! ResponseBinder::data_repository_driver()
//!     .apply_str(&mut doc, "<drivers><driver defaultURL='jdbc:mysql://db/esoe'/></drivers>");
//! assert_eq!(
//!     doc.field_value("dataRepositoryURL").as_deref(),
//!     Some("jdbc:mysql://db/esoe")
//! );
//! # Ok::<(), form_binder::Error>(())
//! ```

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

mod binders;
mod core_impl;
mod document;
mod field_value;
pub mod form_element;
mod runtime_state;
mod xml_response;

pub use binders::{AttributeBinding, BindReport, ResponseBinder};
pub use core_impl::form_controls::{ControlKind, InputKind, Strategy};
pub use document::Document;
pub use field_value::FieldValue;
pub use form_element::UnpackReport;
pub use xml_response::{XmlElement, XmlResponse};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    XmlParse(String),
    Dom(String),
    FieldNotFound(String),
    InvalidConfig(String),
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
    AssertionFailed {
        field: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::XmlParse(msg) => write!(f, "xml parse error: {msg}"),
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
            Self::FieldNotFound(field) => write!(f, "field not found: {field}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {field}: expected {expected}, actual {actual}"
            ),
            Self::AssertionFailed {
                field,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {field}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

/// Handle to a node of one [`Document`]. Only meaningful for the document
/// that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: HashMap<String, String>,
    value: String,
    checked: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Dom {
    fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let value = attrs.get("value").cloned().unwrap_or_default();
        let checked = attrs.contains_key("checked");
        let element = Element {
            tag_name,
            attrs,
            value,
            checked,
        };
        let id = self.create_node(Some(parent), NodeType::Element(element));
        // Nodes are created in document order, so the first id wins like getElementById.
        // An empty id never matches.
        if let Some(id_attr) = self
            .element(id)
            .and_then(|element| element.attrs.get("id").cloned())
            .filter(|id_attr| !id_attr.is_empty())
        {
            self.id_index.entry(id_attr).or_insert(id);
        }
        id
    }

    fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text))
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn has_node(&self, node_id: NodeId) -> bool {
        node_id.0 < self.nodes.len()
    }

    fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes[node_id.0].parent
    }

    fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id).and_then(|e| e.attrs.get(name).cloned())
    }
}

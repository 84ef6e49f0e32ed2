use crate::core_impl::form_controls::{ControlKind, Strategy};
use crate::core_impl::parse_html;
use crate::runtime_state::TraceState;
use crate::{Dom, Error, NodeId, Result};

/// An HTML document whose form controls can be read and written.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) dom: Dom,
    pub(crate) trace_state: TraceState,
}

impl Document {
    pub fn from_html(html: &str) -> Result<Self> {
        let dom = parse_html(html)?;
        Ok(Self {
            dom,
            trace_state: TraceState::default(),
        })
    }

    pub fn has_element_id(&self, id: &str) -> bool {
        self.dom.get_element_by_id(id).is_some()
    }

    /// Number of elements whose `name` attribute equals `name`.
    pub fn count_elements_by_name(&self, name: &str) -> usize {
        self.dom.elements_by_name(name).len()
    }

    /// First element in document order whose `id` is `id`. An empty id never
    /// matches.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.dom.get_element_by_id(id)
    }

    /// Every element whose `name` attribute equals `name`, in document order.
    pub fn get_elements_by_name(&self, name: &str) -> Vec<NodeId> {
        self.dom.elements_by_name(name)
    }

    /// Lowercased tag name of an element handle; `None` for handles this
    /// document did not hand out.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        if !self.dom.has_node(node) {
            return None;
        }
        self.dom.tag_name(node)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        if !self.dom.has_node(node) {
            return None;
        }
        self.dom.attr(node, &name.to_ascii_lowercase())
    }

    /// How the field `field` refers to would be written, if it resolves.
    pub fn control_kind(&self, field: &str) -> Option<ControlKind> {
        let node = self.dom.resolve_field(field)?;
        ControlKind::classify(&self.dom, node)
    }

    /// Current value of a field, read the way it was written: text-like
    /// controls report their value, a select its selected option's value, and
    /// a checkbox/radio the value of the first checked control of its group.
    pub fn field_value(&self, field: &str) -> Option<String> {
        let node = self.dom.resolve_field(field)?;
        let strategy = ControlKind::classify(&self.dom, node)?.strategy()?;
        match strategy {
            Strategy::AssignValue | Strategy::SelectOption => self.dom.value(node).ok(),
            Strategy::CheckGroup => {
                let checked = self.dom.first_checked_in_group(node).ok()??;
                self.dom.value(checked).ok()
            }
        }
    }

    pub fn is_checked(&self, id: &str) -> Result<bool> {
        let node = self.element_by_id(id)?;
        self.dom.checked(node)
    }

    pub fn selected_index(&self, field: &str) -> Result<Option<usize>> {
        let node = self.resolve(field)?;
        let kind = ControlKind::classify(&self.dom, node)
            .ok_or_else(|| Error::FieldNotFound(field.to_string()))?;
        if kind != ControlKind::Select {
            return Err(Error::TypeMismatch {
                field: field.to_string(),
                expected: "select".into(),
                actual: kind.describe(),
            });
        }
        self.dom.selected_option_index(node)
    }

    /// Outer HTML of the element with `id`, reflecting live form state.
    pub fn dump_element(&self, id: &str) -> Result<String> {
        let node = self.element_by_id(id)?;
        Ok(self.dom.dump_node(node))
    }

    pub fn assert_value(&self, field: &str, expected: &str) -> Result<()> {
        let node = self.resolve(field)?;
        let actual = self.field_value(field).unwrap_or_default();
        if actual != expected {
            return Err(Error::AssertionFailed {
                field: field.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.snippet(node),
            });
        }
        Ok(())
    }

    pub fn assert_checked(&self, id: &str, expected: bool) -> Result<()> {
        let node = self.element_by_id(id)?;
        let actual = self.dom.checked(node)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                field: id.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
                dom_snippet: self.snippet(node),
            });
        }
        Ok(())
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    /// Forward trace lines to the `log` facade as well as the buffer.
    pub fn set_trace_sink(&mut self, enabled: bool) {
        self.trace_state.to_log = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidConfig(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        self.trace_state.truncate_to_limit();
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    fn element_by_id(&self, id: &str) -> Result<NodeId> {
        self.dom
            .get_element_by_id(id)
            .ok_or_else(|| Error::FieldNotFound(id.to_string()))
    }

    fn resolve(&self, field: &str) -> Result<NodeId> {
        self.dom
            .resolve_field(field)
            .ok_or_else(|| Error::FieldNotFound(field.to_string()))
    }

    fn snippet(&self, node: NodeId) -> String {
        const MAX: usize = 200;
        let dump = self.dom.dump_node(node);
        if dump.chars().count() <= MAX {
            return dump;
        }
        let mut out = dump.chars().take(MAX).collect::<String>();
        out.push_str("...");
        out
    }
}

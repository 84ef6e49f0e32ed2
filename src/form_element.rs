//! Writing values into form fields.
//!
//! These are free functions over an explicit [`Document`]; nothing here keeps
//! state between calls. A field reference is an element `id`, falling back to
//! the first element with that `name`.

use crate::core_impl::form_controls::{ControlKind, Strategy};
use crate::{Document, FieldValue, NodeId, Result};

/// Outcome of [`unpack`], in the order the entries were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

impl UnpackReport {
    pub fn all_applied(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Writes `value` into the field `field` refers to.
///
/// Returns `false` without touching the document when the field does not
/// resolve or its control type has no write strategy.
pub fn set_value(doc: &mut Document, field: &str, value: impl Into<FieldValue>) -> bool {
    let value = value.into().to_field_string();
    let Some(node) = doc.dom.resolve_field(field) else {
        doc.trace_state
            .line(format!("[set] {field} skipped: no element with that id or name"));
        return false;
    };
    let Some(kind) = ControlKind::classify(&doc.dom, node) else {
        return false;
    };
    let Some(strategy) = kind.strategy() else {
        doc.trace_state.line(format!(
            "[set] {field} skipped: unsupported control {}",
            kind.describe()
        ));
        return false;
    };

    match apply_strategy(doc, node, strategy, &value) {
        Ok(detail) => {
            doc.trace_state.line(format!(
                "[set] {field} <{}> {detail}",
                kind.describe()
            ));
            true
        }
        Err(err) => {
            doc.trace_state.line(format!("[set] {field} failed: {err}"));
            false
        }
    }
}

fn apply_strategy(
    doc: &mut Document,
    node: NodeId,
    strategy: Strategy,
    value: &str,
) -> Result<String> {
    match strategy {
        Strategy::AssignValue => {
            doc.dom.set_value(node, value)?;
            Ok(format!("value={value:?}"))
        }
        Strategy::CheckGroup => {
            let matched = doc.dom.check_group_by_value(node, value)?;
            Ok(format!("checked {matched} matching {value:?}"))
        }
        Strategy::SelectOption => match doc.dom.select_first_matching(node, value)? {
            Some(index) => Ok(format!("selectedIndex={index}")),
            None => Ok(format!("no option matches {value:?}, selection kept")),
        },
    }
}

/// Applies [`set_value`] to every `(field, value)` pair in iteration order.
/// A field that cannot be written is recorded and the rest still proceed.
pub fn unpack<I, K, V>(doc: &mut Document, entries: I) -> UnpackReport
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<FieldValue>,
{
    let mut report = UnpackReport::default();
    for (field, value) in entries {
        let field = field.as_ref();
        if set_value(doc, field, value) {
            report.applied.push(field.to_string());
        } else {
            report.skipped.push(field.to_string());
        }
    }
    doc.trace_state.line(format!(
        "[unpack] applied={} skipped={}",
        report.applied.len(),
        report.skipped.len()
    ));
    report
}

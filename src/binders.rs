use crate::form_element::set_value;
use crate::{Document, Error, FieldValue, Result, XmlResponse};

/// Copies one attribute of each matching response element into one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    pub attribute: String,
    pub field: String,
}

/// Copies attribute values out of an XML response into fixed form fields.
///
/// Every element named [`ResponseBinder::tag`] is visited in document order
/// and each of its bound attributes is written to its field, so when a
/// response carries several matching elements the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBinder {
    tag: String,
    bindings: Vec<AttributeBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Elements of the binder's tag that were visited.
    pub elements: usize,
    /// Successful writes, counting repeats of the same field.
    pub written: usize,
    /// Bound fields with no element of that id or name, once per attempt.
    pub missing_fields: Vec<String>,
    /// Bound fields whose element has no write strategy, once per attempt.
    pub unsupported_fields: Vec<String>,
    pub parse_error: Option<Error>,
}

impl ResponseBinder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            bindings: Vec::new(),
        }
    }

    pub fn bind_attribute(
        mut self,
        attribute: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        self.bindings.push(AttributeBinding {
            attribute: attribute.into(),
            field: field.into(),
        });
        self
    }

    /// Service node endpoints reported for a SPEP node URL: assertion
    /// consumer, single logout and cache clear.
    pub fn service_endpoints() -> Self {
        Self::new("endpoint")
            .bind_attribute("acs", "AssertionConsumerService")
            .bind_attribute("sls", "SingleLogoutService")
            .bind_attribute("ccs", "CacheClearService")
    }

    /// Default JDBC URL reported for the chosen data repository driver.
    pub fn data_repository_driver() -> Self {
        Self::new("driver").bind_attribute("defaultURL", "dataRepositoryURL")
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn bindings(&self) -> &[AttributeBinding] {
        &self.bindings
    }

    pub fn validate(&self) -> Result<()> {
        if self.tag.trim().is_empty() {
            return Err(Error::InvalidConfig("binder tag name is empty".into()));
        }
        if let Some(binding) = self
            .bindings
            .iter()
            .find(|binding| binding.attribute.is_empty() || binding.field.is_empty())
        {
            return Err(Error::InvalidConfig(format!(
                "binder for <{}> has an empty binding {:?} -> {:?}",
                self.tag, binding.attribute, binding.field
            )));
        }
        Ok(())
    }

    pub fn apply(&self, doc: &mut Document, response: &XmlResponse) -> BindReport {
        let mut report = BindReport::default();
        for element in response.get_elements_by_tag_name(&self.tag) {
            report.elements += 1;
            for binding in &self.bindings {
                let value = FieldValue::from(element.get_attribute(&binding.attribute));
                if set_value(doc, &binding.field, value) {
                    report.written += 1;
                } else if doc.dom.resolve_field(&binding.field).is_some() {
                    report.unsupported_fields.push(binding.field.clone());
                } else {
                    report.missing_fields.push(binding.field.clone());
                }
            }
        }
        doc.trace_state.line(format!(
            "[bind] <{}> elements={} written={} missing={} unsupported={}",
            self.tag,
            report.elements,
            report.written,
            report.missing_fields.len(),
            report.unsupported_fields.len()
        ));
        report
    }

    /// Parses `xml` best-effort and applies whatever elements were read.
    pub fn apply_str(&self, doc: &mut Document, xml: &str) -> BindReport {
        let (response, parse_error) = XmlResponse::parse_lenient(xml);
        if let Some(err) = &parse_error {
            doc.trace_state
                .line(format!("[bind] <{}> response is malformed: {err}", self.tag));
        }
        let mut report = self.apply(doc, &response);
        report.parse_error = parse_error;
        report
    }
}

use super::*;

/// The `type` of an `<input>`, as the DOM reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Hidden,
    Password,
    Submit,
    Checkbox,
    Radio,
    /// Any other type HTML defines (`email`, `number`, `file`, ...).
    Other(String),
}

impl InputKind {
    /// Missing or unknown `type` values fall back to `text`, matching what
    /// `HTMLInputElement.type` reports for them.
    pub fn from_type_attr(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Text;
        };
        let lowered = raw.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "text" => Self::Text,
            "hidden" => Self::Hidden,
            "password" => Self::Password,
            "submit" => Self::Submit,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            other if is_defined_input_type(other) => Self::Other(other.to_string()),
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Hidden => "hidden",
            Self::Password => "password",
            Self::Submit => "submit",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Other(kind) => kind.as_str(),
        }
    }
}

/// Classification of a resolved form field, computed once per write.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Input(InputKind),
    Select,
    Textarea,
    /// Elements that are not value-holding form controls (`button`, `div`, ...).
    Other(String),
}

/// How a value is written into a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Write the string into the control's value.
    AssignValue,
    /// Check the controls of the named group whose value matches.
    CheckGroup,
    /// Select the first option whose value matches.
    SelectOption,
}

impl ControlKind {
    pub(crate) fn classify(dom: &Dom, node_id: NodeId) -> Option<Self> {
        let element = dom.element(node_id)?;
        let tag = element.tag_name.to_ascii_lowercase();
        Some(match tag.as_str() {
            "input" => Self::Input(InputKind::from_type_attr(
                element.attrs.get("type").map(String::as_str),
            )),
            "select" => Self::Select,
            "textarea" => Self::Textarea,
            _ => Self::Other(tag),
        })
    }

    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Self::Input(
                InputKind::Submit | InputKind::Hidden | InputKind::Password | InputKind::Text,
            ) => Some(Strategy::AssignValue),
            Self::Input(InputKind::Checkbox | InputKind::Radio) => Some(Strategy::CheckGroup),
            Self::Input(InputKind::Other(_)) => None,
            Self::Select => Some(Strategy::SelectOption),
            Self::Textarea => Some(Strategy::AssignValue),
            Self::Other(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Input(kind) => format!("input[type={}]", kind.as_str()),
            Self::Select => "select".to_string(),
            Self::Textarea => "textarea".to_string(),
            Self::Other(tag) => tag.clone(),
        }
    }
}

fn is_defined_input_type(kind: &str) -> bool {
    matches!(
        kind,
        "button"
            | "checkbox"
            | "color"
            | "date"
            | "datetime-local"
            | "email"
            | "file"
            | "hidden"
            | "image"
            | "month"
            | "number"
            | "password"
            | "radio"
            | "range"
            | "reset"
            | "search"
            | "submit"
            | "tel"
            | "text"
            | "time"
            | "url"
            | "week"
    )
}

pub(super) fn is_checkbox_or_radio_input_element(element: &Element) -> bool {
    if !element.tag_name.eq_ignore_ascii_case("input") {
        return false;
    }
    matches!(
        element
            .attrs
            .get("type")
            .map(|kind| kind.trim().to_ascii_lowercase())
            .as_deref(),
        Some("checkbox") | Some("radio")
    )
}

pub(super) fn is_radio_input(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    if !element.tag_name.eq_ignore_ascii_case("input") {
        return false;
    }

    element
        .attrs
        .get("type")
        .map(|kind| kind.trim().eq_ignore_ascii_case("radio"))
        .unwrap_or(false)
}

pub(super) fn is_textarea(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("textarea"))
}

pub(super) fn is_select(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("select"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_is_case_insensitive_and_defaults_to_text() {
        assert_eq!(InputKind::from_type_attr(Some("CheckBox")), InputKind::Checkbox);
        assert_eq!(InputKind::from_type_attr(Some(" Hidden ")), InputKind::Hidden);
        assert_eq!(InputKind::from_type_attr(None), InputKind::Text);
        assert_eq!(InputKind::from_type_attr(Some("bogus")), InputKind::Text);
        assert_eq!(
            InputKind::from_type_attr(Some("EMAIL")),
            InputKind::Other("email".to_string())
        );
    }

    #[test]
    fn strategy_table_matches_supported_controls() {
        let cases = [
            (ControlKind::Input(InputKind::Text), Some(Strategy::AssignValue)),
            (ControlKind::Input(InputKind::Hidden), Some(Strategy::AssignValue)),
            (ControlKind::Input(InputKind::Password), Some(Strategy::AssignValue)),
            (ControlKind::Input(InputKind::Submit), Some(Strategy::AssignValue)),
            (ControlKind::Input(InputKind::Checkbox), Some(Strategy::CheckGroup)),
            (ControlKind::Input(InputKind::Radio), Some(Strategy::CheckGroup)),
            (ControlKind::Input(InputKind::Other("number".into())), None),
            (ControlKind::Select, Some(Strategy::SelectOption)),
            (ControlKind::Textarea, Some(Strategy::AssignValue)),
            (ControlKind::Other("button".into()), None),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.strategy(), expected, "{}", kind.describe());
        }
    }
}

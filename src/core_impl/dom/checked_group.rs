use super::*;

impl Dom {
    pub(crate) fn checked(&self, node_id: NodeId) -> Result<bool> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::Dom("checked target is not an element".into()))?;
        Ok(element.checked)
    }

    pub(crate) fn set_checked(&mut self, node_id: NodeId, checked: bool) -> Result<()> {
        if checked && is_radio_input(self, node_id) {
            self.uncheck_other_radios_in_group(node_id);
        }
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::Dom("checked target is not an element".into()))?;
        element.checked = checked;
        Ok(())
    }

    pub(crate) fn uncheck_other_radios_in_group(&mut self, target: NodeId) {
        let target_name = self.attr(target, "name").unwrap_or_default();
        if target_name.is_empty() {
            return;
        }
        let target_form = self.find_ancestor_by_tag(target, "form");

        let all_nodes = self.all_element_nodes();
        for node in all_nodes {
            if node == target {
                continue;
            }
            if !is_radio_input(self, node) {
                continue;
            }
            if self.attr(node, "name").unwrap_or_default() != target_name {
                continue;
            }
            if self.find_ancestor_by_tag(node, "form") != target_form {
                continue;
            }
            if let Some(element) = self.element_mut(node) {
                element.checked = false;
            }
        }
    }

    pub(crate) fn normalize_radio_groups(&mut self) -> Result<()> {
        let all_nodes = self.all_element_nodes();
        for node in all_nodes {
            if !is_radio_input(self, node) {
                continue;
            }
            if self.attr(node, "checked").is_some() {
                self.set_checked(node, true)?;
            }
        }
        Ok(())
    }

    /// Checkbox and radio inputs sharing `node_id`'s name, in document order.
    /// A nameless control is a group of one.
    pub(crate) fn checkable_group(&self, node_id: NodeId) -> Vec<NodeId> {
        let name = self.attr(node_id, "name").unwrap_or_default();
        if name.is_empty() {
            return vec![node_id];
        }
        self.elements_by_name(&name)
            .into_iter()
            .filter(|node| {
                self.element(*node)
                    .is_some_and(is_checkbox_or_radio_input_element)
            })
            .collect()
    }

    /// Checks every group member whose value equals `requested` and unchecks
    /// the rest. Returns how many members matched.
    pub(crate) fn check_group_by_value(
        &mut self,
        node_id: NodeId,
        requested: &str,
    ) -> Result<usize> {
        let mut matched = 0usize;
        for member in self.checkable_group(node_id) {
            let is_match = self.value(member)? == requested;
            if is_match {
                matched += 1;
            }
            self.set_checked(member, is_match)?;
        }
        Ok(matched)
    }

    pub(crate) fn first_checked_in_group(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        for member in self.checkable_group(node_id) {
            if self.checked(member)? {
                return Ok(Some(member));
            }
        }
        Ok(None)
    }
}

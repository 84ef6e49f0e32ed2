use super::*;

impl Dom {
    pub(crate) fn collect_select_options(&self, node: NodeId, out: &mut Vec<NodeId>) {
        let mut stack = self.nodes[node.0]
            .children
            .iter()
            .rev()
            .copied()
            .collect::<Vec<_>>();
        while let Some(current) = stack.pop() {
            if self
                .tag_name(current)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("option"))
            {
                out.push(current);
            }
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
    }

    pub(crate) fn select_options(&self, select_node: NodeId) -> Vec<NodeId> {
        let mut options = Vec::new();
        self.collect_select_options(select_node, &mut options);
        options
    }

    pub(crate) fn option_effective_value(&self, option_node: NodeId) -> Result<String> {
        let element = self
            .element(option_node)
            .ok_or_else(|| Error::Dom("option target is not an element".into()))?;
        if !element.tag_name.eq_ignore_ascii_case("option") {
            return Err(Error::Dom("option target is not an option".into()));
        }
        if let Some(value) = element.attrs.get("value") {
            return Ok(value.clone());
        }
        Ok(collapse_whitespace(&self.text_content(option_node)))
    }

    pub(crate) fn is_multiple_select(&self, select_node: NodeId) -> bool {
        self.attr(select_node, "multiple").is_some()
    }

    pub(crate) fn selected_option_index(&self, select_node: NodeId) -> Result<Option<usize>> {
        if !is_select(self, select_node) {
            return Err(Error::Dom("selectedIndex target is not a select".into()));
        }
        let options = self.select_options(select_node);
        if let Some(index) = options
            .iter()
            .position(|option| self.attr(*option, "selected").is_some())
        {
            return Ok(Some(index));
        }
        if options.is_empty() || self.is_multiple_select(select_node) {
            return Ok(None);
        }
        Ok(Some(0))
    }

    pub(crate) fn select_option_at(&mut self, select_node: NodeId, index: usize) -> Result<()> {
        let options = self.select_options(select_node);
        let target = *options
            .get(index)
            .ok_or_else(|| Error::Dom(format!("select has no option at index {index}")))?;
        for option in &options {
            let option_element = self
                .element_mut(*option)
                .ok_or_else(|| Error::Dom("option target is not an element".into()))?;
            if *option == target {
                option_element
                    .attrs
                    .insert("selected".to_string(), "selected".to_string());
            } else {
                option_element.attrs.remove("selected");
            }
        }
        self.sync_select_value(select_node)
    }

    /// Selects the first option whose value equals `requested`; later ties are
    /// never looked at. The selection is left alone when nothing matches.
    pub(crate) fn select_first_matching(
        &mut self,
        select_node: NodeId,
        requested: &str,
    ) -> Result<Option<usize>> {
        if !is_select(self, select_node) {
            return Err(Error::Dom("set value target is not a select".into()));
        }
        let options = self.select_options(select_node);
        for (index, option) in options.iter().enumerate() {
            if self.option_effective_value(*option)? == requested {
                self.select_option_at(select_node, index)?;
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    pub(crate) fn sync_select_value(&mut self, select_node: NodeId) -> Result<()> {
        let value = match self.selected_option_index(select_node)? {
            Some(index) => {
                let option = self.select_options(select_node)[index];
                self.option_effective_value(option)?
            }
            None => String::new(),
        };
        let element = self
            .element_mut(select_node)
            .ok_or_else(|| Error::Dom("select target is not an element".into()))?;
        element.value = value;
        Ok(())
    }

    /// A single-choice select keeps only its last `selected` option, as
    /// parsers do for markup with several.
    pub(crate) fn normalize_select_selection(&mut self, select_node: NodeId) -> Result<()> {
        if !self.is_multiple_select(select_node) {
            let options = self.select_options(select_node);
            if let Some(last) = options
                .iter()
                .rposition(|option| self.attr(*option, "selected").is_some())
            {
                self.select_option_at(select_node, last)?;
                return Ok(());
            }
        }
        self.sync_select_value(select_node)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

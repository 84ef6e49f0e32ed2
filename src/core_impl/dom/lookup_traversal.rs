use super::*;

impl Dom {
    pub(crate) fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    pub(crate) fn elements_by_name(&self, name: &str) -> Vec<NodeId> {
        self.all_element_nodes()
            .into_iter()
            .filter(|node| self.attr(*node, "name").as_deref() == Some(name))
            .collect()
    }

    /// Identifier lookup first, then the first element carrying the name.
    pub(crate) fn resolve_field(&self, field: &str) -> Option<NodeId> {
        if field.is_empty() {
            return None;
        }
        self.get_element_by_id(field)
            .or_else(|| self.elements_by_name(field).into_iter().next())
    }

    /// Pre-order walk over `node_id` and its descendants.
    pub(crate) fn collect_elements_dfs(&self, node_id: NodeId, out: &mut Vec<NodeId>) {
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            if matches!(self.nodes[current.0].node_type, NodeType::Element(_)) {
                out.push(current);
            }
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
    }

    pub(crate) fn all_element_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements_dfs(self.root, &mut out);
        out
    }

    pub(crate) fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            match &self.nodes[current.0].node_type {
                NodeType::Text(text) => out.push_str(text),
                NodeType::Document | NodeType::Element(_) => {
                    stack.extend(self.nodes[current.0].children.iter().rev().copied());
                }
            }
        }
        out
    }

    pub(crate) fn find_ancestor_by_tag(&self, node_id: NodeId, tag: &str) -> Option<NodeId> {
        let mut cursor = self.parent(node_id);
        while let Some(current) = cursor {
            if self
                .tag_name(current)
                .map(|name| name.eq_ignore_ascii_case(tag))
                .unwrap_or(false)
            {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }
}

use crate::foundation::core::{NodeId, VisualProps};

/// One addressable element on the stage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Debug name, not required to be unique.
    pub name: String,
    /// Text payload, swapped by cues.
    pub text: String,
    /// Current visual state.
    pub props: VisualProps,
}

/// Flat arena of nodes owned by one page view.
///
/// Node ids are arena indices. Lookups return `Option` rather than failing:
/// per the degradation contract, a missing target means "skip the cosmetic
/// work", and the caller decides whether that is worth a warning.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    nodes: Vec<Node>,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with default visual properties and no text.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.add_text_node(name, "")
    }

    /// Add a node with default visual properties and the given text.
    pub fn add_text_node(&mut self, name: impl Into<String>, text: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.into(),
            text: text.into(),
            props: VisualProps::default(),
        });
        id
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Look up a node mutably.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Return `true` when `id` refers to a node on this stage.
    pub fn contains(&self, id: NodeId) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    /// Swap a node's text. Returns `false` when the node is missing.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.text.clear();
                node.text.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Number of nodes on the stage.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when the stage has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;

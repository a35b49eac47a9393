//! Namespace, enum and class selection.
//!
//! All queries scan the top-level nodes linearly and return matches in
//! document order, which is what keeps generated output reproducible.

use crate::index::AstIndex;
use crate::node::{NodeRef, NodeTag};

impl AstIndex {
    /// The global `::` namespace, located on first use.
    #[must_use]
    pub fn root_namespace(&self) -> Option<NodeRef> {
        *self.root_namespace.get_or_init(|| {
            self.top_level()
                .iter()
                .copied()
                .find(|node| self.is_root_namespace(*node))
        })
    }

    /// Namespaces declared directly in the global namespace.
    #[must_use]
    pub fn top_namespaces(&self) -> Vec<NodeRef> {
        let Some(root_id) = self.root_namespace().and_then(|root| self.node(root).id()) else {
            tracing::debug!("translation unit has no root namespace");
            return Vec::new();
        };
        self.declared_in(root_id, |tag| tag == &NodeTag::Namespace)
    }

    /// Enumerations declared directly in `namespace`.
    #[must_use]
    pub fn enums_in(&self, namespace: NodeRef) -> Vec<NodeRef> {
        self.node(namespace).id().map_or_else(Vec::new, |id| {
            self.declared_in(id, |tag| tag == &NodeTag::Enumeration)
        })
    }

    /// Classes and structs declared directly in `namespace`.
    #[must_use]
    pub fn classes_in(&self, namespace: NodeRef) -> Vec<NodeRef> {
        self.node(namespace)
            .id()
            .map_or_else(Vec::new, |id| self.declared_in(id, NodeTag::is_class_like))
    }

    /// `EnumValue` children of an enumeration.
    #[must_use]
    pub fn enum_values(&self, enumeration: NodeRef) -> Vec<NodeRef> {
        self.node(enumeration)
            .children()
            .iter()
            .copied()
            .filter(|child| self.node(*child).tag() == &NodeTag::EnumValue)
            .collect()
    }

    /// Number of `Argument` children of a function-like node.
    #[must_use]
    pub fn argument_count(&self, function: NodeRef) -> usize {
        self.node(function)
            .children()
            .iter()
            .filter(|child| self.node(**child).tag() == &NodeTag::Argument)
            .count()
    }

    fn declared_in(&self, context: &str, accept: impl Fn(&NodeTag) -> bool) -> Vec<NodeRef> {
        self.top_level()
            .iter()
            .copied()
            .filter(|node| {
                let node = self.node(*node);
                accept(node.tag()) && node.attr("context") == Some(context)
            })
            .collect()
    }
}

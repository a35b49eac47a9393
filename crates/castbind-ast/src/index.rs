//! Arena-backed index over one translation unit.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::AstError;
use crate::node::{AttributeNode, NodeRef, NodeTag};
use crate::{paths, xml};

/// Name of the global namespace in CastXML output.
pub const ROOT_NAMESPACE: &str = "::";

/// All nodes of one translation unit plus the lookup structures built on them.
///
/// Built once per input file and never mutated afterwards; memoized query
/// results live in `OnceLock` slots so the index can be shared across threads.
#[derive(Debug)]
pub struct AstIndex {
    nodes: Vec<AttributeNode>,
    top_level: Vec<NodeRef>,
    ids: HashMap<String, NodeRef>,
    qualified: Vec<OnceLock<String>>,
    pub(crate) root_namespace: OnceLock<Option<NodeRef>>,
}

impl AstIndex {
    /// Parse a CastXML document.
    ///
    /// # Errors
    /// Returns [`AstError::Xml`] for malformed XML and
    /// [`AstError::EmptyDocument`] when there is no document element.
    pub fn from_xml(text: &str) -> Result<Self, AstError> {
        let forest = xml::parse_forest(text)?;

        let mut ids = HashMap::with_capacity(forest.nodes.len());
        for (idx, node) in forest.nodes.iter().enumerate() {
            if let Some(id) = node.id() {
                let node = NodeRef(u32::try_from(idx).map_err(|_| AstError::TooLarge)?);
                ids.entry(id.to_string()).or_insert(node);
            }
        }

        let qualified = forest.nodes.iter().map(|_| OnceLock::new()).collect();
        tracing::debug!(
            nodes = forest.nodes.len(),
            top_level = forest.top_level.len(),
            "loaded translation unit"
        );

        Ok(Self {
            nodes: forest.nodes,
            top_level: forest.top_level,
            ids,
            qualified,
            root_namespace: OnceLock::new(),
        })
    }

    /// Read and parse a CastXML document from disk.
    ///
    /// # Errors
    /// Returns [`AstError::Io`] if the file cannot be read, otherwise as
    /// [`AstIndex::from_xml`].
    pub fn from_xml_file(path: &Path) -> Result<Self, AstError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_xml(&text)
    }

    #[must_use]
    pub fn node(&self, node: NodeRef) -> &AttributeNode {
        &self.nodes[node.index()]
    }

    /// Elements directly below the document element, in document order.
    #[must_use]
    pub fn top_level(&self) -> &[NodeRef] {
        &self.top_level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<NodeRef> {
        self.ids.get(id).copied()
    }

    /// Resolve `id` and keep it only if its tag satisfies `accept`.
    pub fn by_id_tagged(&self, id: &str, accept: impl Fn(&NodeTag) -> bool) -> Option<NodeRef> {
        self.by_id(id).filter(|node| accept(self.node(*node).tag()))
    }

    pub(crate) fn is_root_namespace(&self, node: NodeRef) -> bool {
        let node = self.node(node);
        node.tag() == &NodeTag::Namespace && node.name() == Some(ROOT_NAMESPACE)
    }

    /// Enclosing scope, unless it is the root namespace or cannot be resolved.
    fn enclosing(&self, node: NodeRef) -> Option<NodeRef> {
        let parent = self.by_id(self.node(node).attr("context")?)?;
        (!self.is_root_namespace(parent)).then_some(parent)
    }

    /// `::`-joined path from the root namespace, e.g. `::Outer::Inner::Name`.
    ///
    /// The root namespace itself yields the empty string. Dangling `context`
    /// links end the walk as if the root had been reached. Every member of a
    /// `context` cycle is named as if declared at the root (`::Name`), so the
    /// result does not depend on which node is queried first.
    #[must_use]
    pub fn fully_qualified_name(&self, node: NodeRef) -> &str {
        if let Some(done) = self.qualified[node.index()].get() {
            return done;
        }
        if self.is_root_namespace(node) {
            return self.qualified[node.index()].get_or_init(String::new);
        }

        let mut chain = vec![node];
        let mut seen = HashSet::from([node]);
        let mut prefix: &str = "";
        let mut current = node;
        while let Some(parent) = self.enclosing(current) {
            if let Some(done) = self.qualified[parent.index()].get() {
                prefix = done;
                break;
            }
            if !seen.insert(parent) {
                tracing::debug!(id = ?self.node(parent).id(), "context cycle");
                let start = chain.iter().position(|link| *link == parent).unwrap_or(0);
                for link in chain.drain(start..) {
                    let name = self.node(link).name().unwrap_or_default();
                    self.qualified[link.index()].get_or_init(|| format!("::{name}"));
                }
                prefix = self.qualified[parent.index()]
                    .get()
                    .map_or("", String::as_str);
                break;
            }
            chain.push(parent);
            current = parent;
        }

        for link in chain.into_iter().rev() {
            let name = self.node(link).name().unwrap_or_default();
            prefix = self.qualified[link.index()].get_or_init(|| format!("{prefix}::{name}"));
        }
        prefix
    }

    /// Absolute path of the file a declaration comes from.
    ///
    /// Follows the node's `file` attribute to a `File` node and normalizes
    /// its `name`. Any missing link yields `None`.
    #[must_use]
    pub fn source_file(&self, node: NodeRef) -> Option<PathBuf> {
        let file_id = self.node(node).attr("file")?;
        let file = self.by_id_tagged(file_id, |tag| tag == &NodeTag::File)?;
        let name = self.node(file).name().filter(|n| !n.is_empty())?;
        paths::absolute(Path::new(name))
    }
}

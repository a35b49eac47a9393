//! Generic attributed AST nodes.

use std::collections::HashMap;

/// Index of a node inside an [`AstIndex`](crate::AstIndex) arena.
///
/// Only meaningful for the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub(crate) u32);

impl NodeRef {
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Element kind of a CastXML node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeTag {
    File,
    Namespace,
    Enumeration,
    EnumValue,
    Class,
    Struct,
    Field,
    Method,
    Argument,
    FundamentalType,
    /// Any element the generator has no use for (`Typedef`, `Constructor`, ...).
    Other(String),
}

impl NodeTag {
    /// Map a CastXML element name onto a tag.
    #[must_use]
    pub fn from_element(name: &str) -> Self {
        match name {
            "File" => Self::File,
            "Namespace" => Self::Namespace,
            "Enumeration" => Self::Enumeration,
            "EnumValue" => Self::EnumValue,
            "Class" => Self::Class,
            "Struct" => Self::Struct,
            "Field" => Self::Field,
            "Method" => Self::Method,
            "Argument" => Self::Argument,
            "FundamentalType" => Self::FundamentalType,
            other => Self::Other(other.to_string()),
        }
    }

    /// Class and Struct are interchangeable for binding purposes.
    #[must_use]
    pub const fn is_class_like(&self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

impl std::fmt::Display for NodeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::File => "File",
            Self::Namespace => "Namespace",
            Self::Enumeration => "Enumeration",
            Self::EnumValue => "EnumValue",
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Field => "Field",
            Self::Method => "Method",
            Self::Argument => "Argument",
            Self::FundamentalType => "FundamentalType",
            Self::Other(name) => name,
        };
        write!(f, "{s}")
    }
}

/// Member access level as recorded in the `access` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    /// Anything that is not explicitly protected or private counts as public.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("protected") => Self::Protected,
            Some("private") => Self::Private,
            _ => Self::Public,
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        };
        write!(f, "{s}")
    }
}

/// A single AST node: a tag plus its string attributes and nested children.
#[derive(Debug, Clone)]
pub struct AttributeNode {
    pub(crate) tag: NodeTag,
    pub(crate) attributes: HashMap<String, String>,
    pub(crate) children: Vec<NodeRef>,
}

impl AttributeNode {
    pub(crate) fn new(tag: NodeTag, attributes: HashMap<String, String>) -> Self {
        Self {
            tag,
            attributes,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> &NodeTag {
        &self.tag
    }

    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Parser-assigned id; nested nodes such as `EnumValue` usually have none.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Nested child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Whitespace-separated id list attribute (`members`, `bases`).
    pub fn id_list<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.attr(key).unwrap_or_default().split_whitespace()
    }

    #[must_use]
    pub fn access(&self) -> Access {
        Access::from_attribute(self.attr("access"))
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.attr("static") == Some("1")
    }

    #[must_use]
    pub fn is_const(&self) -> bool {
        self.attr("const") == Some("1")
    }
}

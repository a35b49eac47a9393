//! Member classification.
//!
//! Partitions a class's directly-declared members into bindable fields and
//! methods, and assigns each method name an accessor kind from its
//! signature. Overloads sharing one name are merged when they form a
//! getter/setter pair and marked [`MemberKind::Duplicate`] otherwise.

use std::collections::HashMap;

use castbind_ast::{Access, AstIndex, AttributeNode, NodeRef, NodeTag};
use serde::Serialize;

use crate::ident;

/// Accessor kind of a bindable member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    /// Public data member.
    Variable,
    /// `T name() const`
    Getter,
    /// `void name(T)`
    Setter,
    /// A getter and a setter overload under one name.
    GetterSetter,
    Function,
    /// Ambiguous overload set; never emitted.
    Duplicate,
}

impl MemberKind {
    /// Kind after seeing `later` under a name already classified as `self`.
    #[must_use]
    pub const fn merge(self, later: Self) -> Self {
        match (self, later) {
            (Self::Getter, Self::Setter) | (Self::Setter, Self::Getter) => Self::GetterSetter,
            _ => Self::Duplicate,
        }
    }

    #[must_use]
    pub const fn is_emitted(self) -> bool {
        !matches!(self, Self::Duplicate)
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Variable => "variable",
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::GetterSetter => "getter-setter",
            Self::Function => "function",
            Self::Duplicate => "duplicate",
        };
        write!(f, "{s}")
    }
}

/// Binding template a class is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassKind {
    /// Fields only: marshaled by value.
    PlainData,
    /// Methods, bases, or nothing bindable at all.
    Full,
}

impl ClassKind {
    /// Jsonipc template name.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::PlainData => "Serializable",
            Self::Full => "Class",
        }
    }

    /// Prefix of the generated statement identifier.
    #[must_use]
    pub const fn ident_prefix(self) -> &'static str {
        match self {
            Self::PlainData => "serializable",
            Self::Full => "class",
        }
    }
}

/// Name → kind mapping that remembers first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindMap {
    entries: Vec<(String, MemberKind)>,
    positions: HashMap<String, usize>,
}

impl KindMap {
    /// Record `kind` for `name`, merging with an earlier entry.
    ///
    /// Returns the kind now stored for `name`.
    pub fn record(&mut self, name: &str, kind: MemberKind) -> MemberKind {
        if let Some(&pos) = self.positions.get(name) {
            let merged = self.entries[pos].1.merge(kind);
            self.entries[pos].1 = merged;
            return merged;
        }
        self.positions.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), kind));
        kind
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<MemberKind> {
        self.positions.get(name).map(|&pos| self.entries[pos].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MemberKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bindable members of one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMembers {
    pub fields: KindMap,
    pub methods: KindMap,
}

impl ClassMembers {
    /// Plain data iff there is at least one field and no method at all
    /// (duplicates included).
    #[must_use]
    pub fn class_kind(&self) -> ClassKind {
        if !self.fields.is_empty() && self.methods.is_empty() {
            ClassKind::PlainData
        } else {
            ClassKind::Full
        }
    }

    /// Method names excluded as ambiguous.
    pub fn duplicates(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .filter(|(_, kind)| *kind == MemberKind::Duplicate)
            .map(|(name, _)| name)
    }
}

/// Public, non-static, and not an implementation-reserved name.
#[must_use]
pub fn is_visible(node: &AttributeNode) -> bool {
    node.access() == Access::Public && !node.is_static() && ident::is_bindable(node.name())
}

/// Whether a method's return type is the fundamental `void`.
///
/// An unresolvable return type counts as non-void.
#[must_use]
pub fn returns_void(index: &AstIndex, method: NodeRef) -> bool {
    index
        .node(method)
        .attr("returns")
        .and_then(|id| index.by_id_tagged(id, |tag| tag == &NodeTag::FundamentalType))
        .is_some_and(|ty| index.node(ty).name() == Some("void"))
}

/// Accessor kind implied by a method's signature.
#[must_use]
pub fn method_kind(index: &AstIndex, method: NodeRef) -> MemberKind {
    let args = index.argument_count(method);
    let is_const = index.node(method).is_const();
    if returns_void(index, method) {
        if args == 1 && !is_const {
            MemberKind::Setter
        } else {
            MemberKind::Function
        }
    } else if args == 0 && is_const {
        MemberKind::Getter
    } else {
        MemberKind::Function
    }
}

/// Classify the directly-declared members of `class`.
///
/// Ids that do not resolve to a `Field` or `Method` are skipped.
#[must_use]
pub fn classify_members(index: &AstIndex, class: NodeRef) -> ClassMembers {
    let mut members = ClassMembers::default();

    for id in index.node(class).id_list("members") {
        let Some(member) = index.by_id(id) else {
            tracing::debug!(id, "unresolvable member id");
            continue;
        };
        let node = index.node(member);
        match node.tag() {
            NodeTag::Field if is_visible(node) => {
                let name = node.name().unwrap_or_default();
                if members.fields.get(name).is_none() {
                    members.fields.record(name, MemberKind::Variable);
                }
            }
            NodeTag::Method if is_visible(node) => {
                let name = node.name().unwrap_or_default();
                members.methods.record(name, method_kind(index, member));
            }
            _ => {}
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn unit(members: &str, body: &str) -> AstIndex {
        let xml = format!(
            r#"<CastXML format="1.1.0">
  <Namespace id="_1" name="::"/>
  <Namespace id="_2" name="Outer" context="_1"/>
  <Class id="_3" name="CC" context="_2" members="{members}"/>
  {body}
  <FundamentalType id="_int" name="int"/>
  <FundamentalType id="_void" name="void"/>
</CastXML>"#
        );
        AstIndex::from_xml(&xml).expect("valid unit")
    }

    fn classify(index: &AstIndex) -> ClassMembers {
        classify_members(index, index.by_id("_3").expect("class"))
    }

    fn kinds(map: &KindMap) -> Vec<(String, MemberKind)> {
        map.iter().map(|(n, k)| (n.to_string(), k)).collect()
    }

    #[rstest]
    #[case::setter(r#"returns="_void""#, 1, MemberKind::Setter)]
    #[case::const_void_one_arg(r#"returns="_void" const="1""#, 1, MemberKind::Function)]
    #[case::void_no_args(r#"returns="_void""#, 0, MemberKind::Function)]
    #[case::void_two_args(r#"returns="_void""#, 2, MemberKind::Function)]
    #[case::getter(r#"returns="_int" const="1""#, 0, MemberKind::Getter)]
    #[case::non_const_getter(r#"returns="_int""#, 0, MemberKind::Function)]
    #[case::value_with_arg(r#"returns="_int" const="1""#, 1, MemberKind::Function)]
    #[case::dangling_return(r#"returns="_404" const="1""#, 0, MemberKind::Getter)]
    fn method_kinds(#[case] attrs: &str, #[case] args: usize, #[case] expected: MemberKind) {
        let arguments = "<Argument type=\"_int\"/>".repeat(args);
        let index = unit(
            "_10",
            &format!(
                r#"<Method id="_10" name="m" context="_3" access="public" {attrs}>{arguments}</Method>"#
            ),
        );
        assert_eq!(method_kind(&index, index.by_id("_10").expect("method")), expected);
    }

    #[test]
    fn reserved_and_hidden_members_are_invisible() {
        let index = unit(
            "_10 _11 _12 _13 _14 _15 _16",
            r#"
  <Field id="_10" name="_lead" context="_3" access="public"/>
  <Field id="_11" name="trail_" context="_3" access="public"/>
  <Field id="_12" name="secret" context="_3" access="private"/>
  <Field id="_13" name="shared" context="_3" access="public" static="1"/>
  <Method id="_14" name="prot" returns="_void" context="_3" access="protected"/>
  <Method id="_15" name="__impl__" returns="_void" context="_3" access="public"/>
  <Field id="_16" name="ok" context="_3" access="public"/>"#,
        );
        let members = classify(&index);
        assert_eq!(kinds(&members.fields), [("ok".to_string(), MemberKind::Variable)]);
        assert!(members.methods.is_empty());
        assert!(
            members
                .fields
                .iter()
                .chain(members.methods.iter())
                .all(|(name, _)| !name.starts_with('_') && !name.ends_with('_'))
        );
    }

    #[test]
    fn getter_and_setter_overloads_merge() {
        let index = unit(
            "_10 _11",
            r#"
  <Method id="_10" name="value" returns="_int" context="_3" access="public" const="1"/>
  <Method id="_11" name="value" returns="_void" context="_3" access="public">
    <Argument type="_int"/>
  </Method>"#,
        );
        let members = classify(&index);
        assert_eq!(
            kinds(&members.methods),
            [("value".to_string(), MemberKind::GetterSetter)]
        );
        assert_eq!(members.duplicates().count(), 0);
    }

    #[rstest]
    #[case::two_functions(
        r#"<Method id="_10" name="run" returns="_void" context="_3" access="public"/>
           <Method id="_11" name="run" returns="_int" context="_3" access="public"/>
           <Method id="_12" name="x" returns="_int" context="_3" access="public"/>"#
    )]
    #[case::two_getters(
        r#"<Method id="_10" name="run" returns="_int" context="_3" access="public" const="1"/>
           <Method id="_11" name="run" returns="_int" context="_3" access="public" const="1"/>
           <Method id="_12" name="x" returns="_int" context="_3" access="public"/>"#
    )]
    #[case::getter_setter_then_more(
        r#"<Method id="_10" name="run" returns="_int" context="_3" access="public" const="1"/>
           <Method id="_11" name="run" returns="_void" context="_3" access="public"><Argument type="_int"/></Method>
           <Method id="_12" name="run" returns="_int" context="_3" access="public"/>"#
    )]
    fn other_collisions_are_duplicates(#[case] body: &str) {
        let index = unit("_10 _11 _12", body);
        let members = classify(&index);
        assert_eq!(members.methods.get("run"), Some(MemberKind::Duplicate));
        assert_eq!(members.duplicates().collect::<Vec<_>>(), ["run"]);
    }

    #[test]
    fn methods_keep_first_seen_order() {
        let index = unit(
            "_12 _10 _11 _13",
            r#"
  <Method id="_10" name="b" returns="_void" context="_3" access="public"/>
  <Method id="_11" name="a" returns="_void" context="_3" access="public"/>
  <Method id="_12" name="c" returns="_void" context="_3" access="public"/>
  <Constructor id="_13" name="CC" context="_3" access="public"/>"#,
        );
        let names: Vec<_> = classify(&index).methods.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn dangling_member_ids_are_skipped() {
        let index = unit(
            "_404 _10",
            r#"<Field id="_10" name="y" context="_3" access="public"/>"#,
        );
        assert_eq!(classify(&index).fields.len(), 1);
    }

    #[test]
    fn plain_data_until_a_method_appears() {
        let fields_only = unit(
            "_10",
            r#"<Field id="_10" name="y" context="_3" access="public"/>"#,
        );
        assert_eq!(classify(&fields_only).class_kind(), ClassKind::PlainData);

        let with_method = unit(
            "_10 _11",
            r#"<Field id="_10" name="y" context="_3" access="public"/>
               <Method id="_11" name="go" returns="_void" context="_3" access="public"/>"#,
        );
        assert_eq!(classify(&with_method).class_kind(), ClassKind::Full);

        let empty = unit("", "");
        assert_eq!(classify(&empty).class_kind(), ClassKind::Full);
    }

    #[rstest]
    #[case(MemberKind::Variable, true)]
    #[case(MemberKind::Getter, true)]
    #[case(MemberKind::Setter, true)]
    #[case(MemberKind::GetterSetter, true)]
    #[case(MemberKind::Function, true)]
    #[case(MemberKind::Duplicate, false)]
    fn only_duplicates_are_withheld(#[case] kind: MemberKind, #[case] emitted: bool) {
        assert_eq!(kind.is_emitted(), emitted);
    }

    #[test]
    fn kind_names() {
        assert_eq!(MemberKind::GetterSetter.to_string(), "getter-setter");
        assert_eq!(ClassKind::PlainData.template(), "Serializable");
        assert_eq!(ClassKind::Full.ident_prefix(), "class");
    }
}

//! Base-class resolution.

use castbind_ast::{AstIndex, NodeRef, NodeTag};

use crate::ident;

/// Class id of a `bases` token such as `_15`, `private:_15` or
/// `virtual:private:_15`.
fn base_id(token: &str) -> &str {
    token.rsplit(':').next().unwrap_or(token)
}

/// Whether the first `::` segment of `qualified` is an allowed namespace.
fn in_allowed_namespace(qualified: &str, allowed: &[String]) -> bool {
    let mut segments = qualified.split("::");
    segments.next() == Some("")
        && segments
            .next()
            .is_some_and(|top| allowed.iter().any(|ns| ns == top))
}

/// Bases of `class` that may be bound as `.inherit<>()` directives.
///
/// Each token is resolved on its own. A base survives only if it resolves
/// to a class or struct with a bindable name whose top-level namespace is
/// in `allowed`; everything else is dropped without error.
#[must_use]
pub fn resolve_bases(index: &AstIndex, class: NodeRef, allowed: &[String]) -> Vec<NodeRef> {
    let mut bases = Vec::new();
    for token in index.node(class).id_list("bases") {
        let Some(base) = index.by_id_tagged(base_id(token), NodeTag::is_class_like) else {
            tracing::debug!(token, "base does not resolve to a class");
            continue;
        };
        if !ident::is_bindable(index.node(base).name()) {
            continue;
        }
        let qualified = index.fully_qualified_name(base);
        if !in_allowed_namespace(qualified, allowed) {
            tracing::debug!(base = qualified, "base outside selected namespaces");
            continue;
        }
        bases.push(base);
    }
    bases
}

//! Run-wide identifier counter.

/// First suffix handed out when nothing else is configured.
pub const DEFAULT_START: u64 = 1001;

/// Monotonic suffix source for generated statement identifiers.
///
/// One counter lives for a whole run and is passed by `&mut` to every
/// file's generation, so identifiers stay unique across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// Suffix the next identifier will get.
    #[must_use]
    pub const fn peek(&self) -> u64 {
        self.next
    }

    /// `"{prefix}_{n}"`, advancing the counter.
    pub fn next_ident(&mut self, prefix: &str) -> String {
        let ident = format!("{prefix}_{}", self.next);
        self.next += 1;
        ident
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new(DEFAULT_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_increase_across_prefixes() {
        let mut counter = IdCounter::default();
        assert_eq!(counter.next_ident("enum"), "enum_1001");
        assert_eq!(counter.next_ident("class"), "class_1002");
        assert_eq!(counter.next_ident("enum"), "enum_1003");
        assert_eq!(counter.peek(), 1004);
    }

    #[test]
    fn custom_start() {
        let mut counter = IdCounter::new(7);
        assert_eq!(counter.next_ident("serializable"), "serializable_7");
    }
}

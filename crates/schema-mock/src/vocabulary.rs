//! Fixed word lists backing the field-specific generators.

use fake::locales::{Data, EN};

/// Workflow tags drawn by [`generate_tags`](crate::generate_tags).
pub const TAGS: &[&str] = &[
    "api",
    "automation",
    "billing",
    "critical",
    "customer",
    "finance",
    "integration",
    "internal",
    "marketing",
    "monitoring",
    "notification",
    "onboarding",
    "reporting",
    "security",
    "support",
    "sync",
];

/// Task and process titles drawn by [`random_title`](crate::random_title).
///
/// Some entries carry stray whitespace; titles are trimmed on output.
pub const TITLES: &[&str] = &[
    "Approve expense report",
    "  Sync customer records",
    "Send onboarding email",
    "Escalate overdue ticket ",
    "Generate monthly invoice",
    "Rotate API credentials",
    " Archive closed orders",
    "Notify account manager",
    "Reconcile payment batch",
    "Review access request  ",
    "Import partner catalogue",
    "Close stale leads",
];

/// Ordered word list used to build descriptions.
#[must_use]
pub fn lorem_words() -> &'static [&'static str] {
    <EN as Data>::LOREM_WORD
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tags_are_distinct() {
        let unique: HashSet<_> = TAGS.iter().collect();
        assert_eq!(unique.len(), TAGS.len());
    }

    #[test]
    fn titles_are_not_blank() {
        assert!(TITLES.iter().all(|title| !title.trim().is_empty()));
    }

    #[test]
    fn lorem_words_are_available() {
        assert!(!lorem_words().is_empty());
    }
}

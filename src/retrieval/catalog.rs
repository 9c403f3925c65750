//! Policy catalog mapping keywords to stored document keys.
//!
//! The catalog is read-only for the lifetime of the process; it is built at
//! startup and injected into the handler rather than read as a global.

/// One policy area and its stored document.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Keyword as shown to users, e.g. `HR`. Matching is case-insensitive.
    pub label: String,
    /// Object key of the document in the blob store.
    pub object_key: String,
    /// Whether `search_policies` scans this document.
    pub searchable: bool,
}

/// Immutable keyword-to-document mapping.
#[derive(Debug, Clone)]
pub struct PolicyCatalog {
    entries: Vec<CatalogEntry>,
}

impl PolicyCatalog {
    /// The catalog shipped with the deployment: five policy areas, of which
    /// the first three participate in substring search.
    #[must_use]
    pub fn builtin() -> Self {
        let entry = |label: &str, object_key: &str, searchable: bool| CatalogEntry {
            label: label.to_string(),
            object_key: object_key.to_string(),
            searchable,
        };

        Self {
            entries: vec![
                entry("HR", "HR_Policies_Notion.md", true),
                entry("IT", "IT_Policies_Confluence.html", true),
                entry("Marketing", "Marketing_Policies_Notion.md", true),
                entry("Finance", "Finance_Policies.docx", false),
                entry("Engineering", "Engineering_Policies.docx", false),
            ],
        }
    }

    /// Case-insensitive keyword lookup.
    #[must_use]
    pub fn resolve(&self, keyword: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(keyword))
    }

    /// Entries that participate in `search_policies`, in fixed catalog order.
    pub fn searchable(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.searchable)
    }

    /// Comma-separated list of valid keywords for prompt messages.
    #[must_use]
    pub fn available_types(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        let catalog = PolicyCatalog::builtin();
        let upper = catalog.resolve("HR").expect("HR resolves");
        let lower = catalog.resolve("hr").expect("hr resolves");
        assert_eq!(upper.object_key, lower.object_key);
        assert_eq!(upper.object_key, "HR_Policies_Notion.md");
    }

    #[test]
    fn resolve_misses_unknown_keyword() {
        let catalog = PolicyCatalog::builtin();
        assert!(catalog.resolve("payroll").is_none());
    }

    #[test]
    fn search_covers_three_of_five_documents() {
        let catalog = PolicyCatalog::builtin();
        let searchable: Vec<&str> = catalog.searchable().map(|e| e.label.as_str()).collect();
        assert_eq!(searchable, vec!["HR", "IT", "Marketing"]);
    }

    #[test]
    fn available_types_lists_all_keywords() {
        let catalog = PolicyCatalog::builtin();
        assert_eq!(
            catalog.available_types(),
            "HR, IT, Marketing, Finance, Engineering"
        );
    }
}

//! Declared variable catalog.
//!
//! The catalog is the source of truth for the platform's environment
//! contract: which variables exist, what shape their values take, and which
//! of them are secrets. It is loaded from embedded section metadata by the
//! catalog adapter; this module holds the domain model and lookups.

use crate::domain::{AppError, EnvKey, ValueKind};

/// A declared variable.
#[derive(Debug, Clone)]
pub struct VarSpec {
    pub key: EnvKey,
    pub description: String,
    pub kind: ValueKind,
    pub required: bool,
    pub secret: bool,
    pub default: Option<String>,
}

/// A comment-delimited section of the env template.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Machine name, e.g. `vector-db`.
    pub name: String,
    /// Header title, e.g. `Vector Database`.
    pub title: String,
    pub summary: String,
    /// Display position within the template.
    pub order: u32,
    pub vars: Vec<VarSpec>,
}

/// The full variable catalog, sections in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<SectionSpec>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys across sections.
    pub fn new(mut sections: Vec<SectionSpec>) -> Result<Self, AppError> {
        sections.sort_by_key(|section| section.order);

        let mut seen: Vec<&str> = Vec::new();
        for section in &sections {
            for var in &section.vars {
                if seen.contains(&var.key.as_str()) {
                    return Err(AppError::InvalidCatalogMetadata {
                        section: section.name.clone(),
                        reason: format!("variable '{}' declared more than once", var.key),
                    });
                }
            }
            seen.extend(section.vars.iter().map(|var| var.key.as_str()));
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|section| section.name.as_str()).collect()
    }

    /// All variables with their owning section, in display order.
    pub fn vars(&self) -> impl Iterator<Item = (&SectionSpec, &VarSpec)> {
        self.sections.iter().flat_map(|section| section.vars.iter().map(move |var| (section, var)))
    }

    pub fn find(&self, key: &str) -> Option<(&SectionSpec, &VarSpec)> {
        self.vars().find(|(_, var)| var.key.as_str() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.vars.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(key: &str) -> VarSpec {
        VarSpec {
            key: EnvKey::new(key).unwrap(),
            description: String::new(),
            kind: ValueKind::Text,
            required: false,
            secret: false,
            default: None,
        }
    }

    fn section(name: &str, order: u32, vars: Vec<VarSpec>) -> SectionSpec {
        SectionSpec {
            name: name.to_string(),
            title: name.to_string(),
            summary: String::new(),
            order,
            vars,
        }
    }

    #[test]
    fn sections_sorted_by_order() {
        let catalog = Catalog::new(vec![
            section("second", 2, vec![var("B_KEY")]),
            section("first", 1, vec![var("A_KEY")]),
        ])
        .unwrap();

        assert_eq!(catalog.section_names(), vec!["first", "second"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_keys_across_sections_rejected() {
        let result = Catalog::new(vec![
            section("a", 1, vec![var("SHARED_KEY")]),
            section("b", 2, vec![var("SHARED_KEY")]),
        ]);

        assert!(matches!(result, Err(AppError::InvalidCatalogMetadata { .. })));
    }

    #[test]
    fn find_returns_owning_section() {
        let catalog = Catalog::new(vec![section("llm", 1, vec![var("LLM_MODEL")])]).unwrap();
        let (section, var) = catalog.find("LLM_MODEL").unwrap();
        assert_eq!(section.name, "llm");
        assert_eq!(var.key.as_str(), "LLM_MODEL");
        assert!(catalog.find("MISSING").is_none());
    }
}

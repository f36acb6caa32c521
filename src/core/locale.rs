// src/core/locale.rs

use crate::models::CommandMapping;

/// An explicit localization context, constructed once from the `--lang`
/// flag and passed through constructors. There is no global language state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    lang: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Locale {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_lowercase(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The mapping description in this locale, falling back to the base
    /// `description` field when no localized variant exists.
    pub fn description<'a>(&self, mapping: &'a CommandMapping) -> &'a str {
        mapping
            .localized_description
            .get(&self.lang)
            .map_or(mapping.description.as_str(), String::as_str)
    }

    /// The mapping notes in this locale, falling back to the base `notes`.
    pub fn notes<'a>(&self, mapping: &'a CommandMapping) -> &'a [String] {
        mapping
            .localized_notes
            .get(&self.lang)
            .map_or(mapping.notes.as_slice(), Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_with_variants() -> CommandMapping {
        CommandMapping {
            id: "ls-docker-images".to_string(),
            linux_command: "ls".to_string(),
            docker_command: "docker images".to_string(),
            category: "list-operations".to_string(),
            description: "base description".to_string(),
            linux_example: String::new(),
            docker_example: String::new(),
            notes: vec!["base note".to_string()],
            warnings: Vec::new(),
            localized_description: [("ja".to_string(), "リスト表示".to_string())].into(),
            localized_notes: [("ja".to_string(), vec!["注記".to_string()])].into(),
        }
    }

    #[test]
    fn selects_localized_variant_when_present() {
        let mapping = mapping_with_variants();
        let ja = Locale::new("ja");
        assert_eq!(ja.description(&mapping), "リスト表示");
        assert_eq!(ja.notes(&mapping), ["注記".to_string()]);
    }

    #[test]
    fn falls_back_to_base_fields() {
        let mapping = mapping_with_variants();
        let de = Locale::new("de");
        assert_eq!(de.description(&mapping), "base description");
        assert_eq!(de.notes(&mapping), ["base note".to_string()]);
    }

    #[test]
    fn language_code_is_normalized() {
        assert_eq!(Locale::new("JA").lang(), "ja");
    }
}

//! Résumé document model — the exchange shape shared by the editor, the LaTeX
//! exporter and the height estimator.
//!
//! Every field is always present after deserialization: missing or `null`
//! lists become empty, missing objects take their zero shape, unknown keys are
//! ignored. Only input of the wrong shape (a number where text is expected) is
//! rejected, and that happens at the `serde` boundary.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    #[serde(deserialize_with = "null_as_default")]
    pub header: Header,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_sections: Vec<CustomSection>,
}

impl Document {
    /// Builds a document from arbitrary JSON, filling every absent field.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Copy of the document without the custom sections the user has hidden.
    pub fn without_hidden_custom_sections(&self) -> Document {
        Document {
            custom_sections: self
                .custom_sections
                .iter()
                .filter(|s| s.visible)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}

/// Contact block. `name`, `email` and `location` are required (possibly empty);
/// the remaining links are optional and skipped by renderers when blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    Name,
    Email,
    Location,
    Linkedin,
    Portfolio,
    Phone,
}

impl Header {
    pub fn set(&mut self, field: HeaderField, value: String) {
        match field {
            HeaderField::Name => self.name = value,
            HeaderField::Email => self.email = value,
            HeaderField::Location => self.location = value,
            HeaderField::Linkedin => self.linkedin = Some(value),
            HeaderField::Portfolio => self.portfolio = Some(value),
            HeaderField::Phone => self.phone = Some(value),
        }
    }
}

/// Returns the optional value only when it carries visible text.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Timeline entries (education / experience / projects)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSection {
    Education,
    Experience,
    Projects,
}

impl TimelineSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineSection::Education => "education",
            TimelineSection::Experience => "experience",
            TimelineSection::Projects => "projects",
        }
    }
}

impl fmt::Display for TimelineSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common behaviour of the three dated, bulleted entry kinds.
pub trait TimelineEntry: Clone {
    /// The entry a user gets when appending to the section.
    fn placeholder() -> Self;

    fn bullets_mut(&mut self) -> &mut Vec<String>;

    /// Text field by its exchange name; `None` if this kind has no such field.
    fn field_mut(&mut self, field: &str) -> Option<&mut String>;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl TimelineEntry for EducationEntry {
    fn placeholder() -> Self {
        EducationEntry {
            institution: "Institution".to_string(),
            degree: "Degree".to_string(),
            location: "Location".to_string(),
            dates: "Dates".to_string(),
            bullets: vec![],
        }
    }

    fn bullets_mut(&mut self) -> &mut Vec<String> {
        &mut self.bullets
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "institution" => Some(&mut self.institution),
            "degree" => Some(&mut self.degree),
            "location" => Some(&mut self.location),
            "dates" => Some(&mut self.dates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl TimelineEntry for ExperienceEntry {
    fn placeholder() -> Self {
        ExperienceEntry {
            company: "Company".to_string(),
            role: "Role".to_string(),
            location: "Location".to_string(),
            dates: "Dates".to_string(),
            bullets: vec![NEW_BULLET.to_string()],
        }
    }

    fn bullets_mut(&mut self) -> &mut Vec<String> {
        &mut self.bullets
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "company" => Some(&mut self.company),
            "role" => Some(&mut self.role),
            "location" => Some(&mut self.location),
            "dates" => Some(&mut self.dates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl TimelineEntry for ProjectEntry {
    fn placeholder() -> Self {
        ProjectEntry {
            title: "Project Title".to_string(),
            tech: "Technologies".to_string(),
            dates: "Dates".to_string(),
            bullets: vec!["Feature 1".to_string()],
        }
    }

    fn bullets_mut(&mut self) -> &mut Vec<String> {
        &mut self.bullets
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "title" => Some(&mut self.title),
            "tech" => Some(&mut self.tech),
            "dates" => Some(&mut self.dates),
            _ => None,
        }
    }
}

/// Text of a bullet appended to a timeline entry.
pub const NEW_BULLET: &str = "New bullet";
/// Text of a bullet appended to a custom-section item.
pub const NEW_DETAIL: &str = "New Detail";

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "null_as_default")]
    pub programming: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub design: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Design,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Programming,
        SkillCategory::Design,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Design => "Design",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Design => &self.design,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Programming => &mut self.programming,
            SkillCategory::Design => &mut self.design,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Categories in display order, skipping the empty ones.
    pub fn non_empty(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        SkillCategory::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, items)| !items.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Custom sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    /// Opaque id, fixed when the section is created.
    #[serde(deserialize_with = "null_as_fresh_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<CustomItem>,
    #[serde(deserialize_with = "null_as_true")]
    pub visible: bool,
}

impl Default for CustomSection {
    fn default() -> Self {
        CustomSection {
            id: fresh_id(),
            title: String::new(),
            items: vec![],
            visible: true,
        }
    }
}

impl CustomSection {
    pub fn placeholder() -> Self {
        CustomSection {
            title: "New Section".to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomItemField {
    Title,
    Subtitle,
    Date,
}

impl CustomItem {
    pub fn placeholder() -> Self {
        CustomItem {
            title: "Title".to_string(),
            subtitle: Some("Subtitle".to_string()),
            date: Some("Dates".to_string()),
            bullets: vec!["Detail".to_string()],
        }
    }

    pub fn set(&mut self, field: CustomItemField, value: String) {
        match field {
            CustomItemField::Title => self.title = value,
            CustomItemField::Subtitle => self.subtitle = Some(value),
            CustomItemField::Date => self.date = Some(value),
        }
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// An explicit `null` id gets a generated one, same as a missing id.
fn null_as_fresh_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(fresh_id))
}

/// Missing or `null` visibility means shown.
fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_normalizes_to_zero_shape() {
        let doc = Document::from_value(json!({})).unwrap();
        assert_eq!(doc, Document::default());
        assert_eq!(doc.header.name, "");
        assert!(doc.education.is_empty());
        assert!(doc.custom_sections.is_empty());
    }

    #[test]
    fn test_null_document_is_default() {
        assert_eq!(
            Document::from_value(serde_json::Value::Null).unwrap(),
            Document::default()
        );
    }

    #[test]
    fn test_null_lists_become_empty() {
        let doc = Document::from_value(json!({
            "header": null,
            "experience": null,
            "skills": { "programming": null, "tools": ["Git"] },
            "customSections": null
        }))
        .unwrap();
        assert!(doc.experience.is_empty());
        assert!(doc.skills.programming.is_empty());
        assert_eq!(doc.skills.tools, vec!["Git"]);
        assert_eq!(doc.header, Header::default());
    }

    #[test]
    fn test_partial_entry_fills_missing_fields() {
        let doc = Document::from_value(json!({
            "experience": [{ "company": "Acme" }]
        }))
        .unwrap();
        let entry = &doc.experience[0];
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.role, "");
        assert!(entry.bullets.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let doc = Document::from_value(json!({
            "header": { "name": "Ada", "twitter": "@ada" },
            "theme": "dark"
        }))
        .unwrap();
        assert_eq!(doc.header.name, "Ada");
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = Document::from_value(json!({ "summary": 42 }));
        assert!(result.is_err(), "a number is not normalizable into text");
    }

    #[test]
    fn test_custom_section_defaults_visible_with_fresh_id() {
        let doc = Document::from_value(json!({
            "customSections": [{ "title": "Awards" }, { "title": "Talks" }]
        }))
        .unwrap();
        let [a, b] = [&doc.custom_sections[0], &doc.custom_sections[1]];
        assert!(a.visible && b.visible);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id, "generated ids must be unique");
    }

    #[test]
    fn test_null_custom_section_visibility_means_shown() {
        let doc = Document::from_value(json!({
            "customSections": [{ "title": "A", "visible": null }]
        }))
        .unwrap();
        assert!(doc.custom_sections[0].visible);
    }

    #[test]
    fn test_null_custom_section_id_is_generated() {
        let doc = Document::from_value(json!({
            "customSections": [{ "id": null, "title": "Awards" }]
        }))
        .unwrap();
        assert!(!doc.custom_sections[0].id.is_empty());
    }

    #[test]
    fn test_custom_section_keeps_supplied_id() {
        let doc = Document::from_value(json!({
            "customSections": [{ "id": "abc", "title": "Awards", "visible": false }]
        }))
        .unwrap();
        assert_eq!(doc.custom_sections[0].id, "abc");
        assert!(!doc.custom_sections[0].visible);
    }

    #[test]
    fn test_round_trip_uses_camel_case_and_skips_absent_options() {
        let doc = Document::default();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("customSections").is_some());
        assert!(value["header"].get("portfolio").is_none());
    }

    #[test]
    fn test_without_hidden_custom_sections() {
        let mut doc = Document::default();
        doc.custom_sections.push(CustomSection {
            title: "Shown".into(),
            ..Default::default()
        });
        doc.custom_sections.push(CustomSection {
            title: "Hidden".into(),
            visible: false,
            ..Default::default()
        });
        let filtered = doc.without_hidden_custom_sections();
        assert_eq!(filtered.custom_sections.len(), 1);
        assert_eq!(filtered.custom_sections[0].title, "Shown");
        assert_eq!(doc.custom_sections.len(), 2, "source must be untouched");
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&Some("site.dev".into())), Some("site.dev"));
    }

    #[test]
    fn test_skills_non_empty_preserves_order() {
        let skills = Skills {
            programming: vec!["Rust".into()],
            design: vec![],
            tools: vec!["Git".into()],
        };
        let cats: Vec<_> = skills.non_empty().map(|(c, _)| c).collect();
        assert_eq!(cats, vec![SkillCategory::Programming, SkillCategory::Tools]);
    }
}

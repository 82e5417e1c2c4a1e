//! Document patches — every edit the editor can make, expressed as a path into
//! the document plus a new value.
//!
//! `Document::apply` never touches the receiver: it returns a fresh document
//! with exactly one substructure replaced, or an error and no document at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::document::{
    CustomItem, CustomItemField, CustomSection, Document, HeaderField, SkillCategory,
    TimelineEntry, TimelineSection, NEW_BULLET, NEW_DETAIL,
};

// ────────────────────────────────────────────────────────────────────────────
// Patch types
// ────────────────────────────────────────────────────────────────────────────

/// The list that owns a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BulletOwner {
    Entry {
        section: TimelineSection,
        index: usize,
    },
    CustomItem {
        section: usize,
        item: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentPatch {
    SetHeader {
        field: HeaderField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    /// Comma-separated list, as typed into the skills row.
    SetSkills {
        category: SkillCategory,
        value: String,
    },
    SetEntryField {
        section: TimelineSection,
        index: usize,
        field: String,
        value: String,
    },
    AppendEntry {
        section: TimelineSection,
    },
    RemoveEntry {
        section: TimelineSection,
        index: usize,
    },
    AppendBullet {
        owner: BulletOwner,
    },
    SetBullet {
        owner: BulletOwner,
        bullet: usize,
        value: String,
    },
    RemoveBullet {
        owner: BulletOwner,
        bullet: usize,
    },
    AppendCustomSection,
    SetCustomSectionTitle {
        section: usize,
        title: String,
    },
    SetCustomSectionVisible {
        section: usize,
        visible: bool,
    },
    RemoveCustomSection {
        section: usize,
    },
    AppendCustomItem {
        section: usize,
    },
    SetCustomItemField {
        section: usize,
        item: usize,
        field: CustomItemField,
        value: String,
    },
    RemoveCustomItem {
        section: usize,
        item: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("{section} has no entry {index} (length {len})")]
    EntryOutOfRange {
        section: TimelineSection,
        index: usize,
        len: usize,
    },

    #[error("{section} entries have no field '{field}'")]
    UnknownField {
        section: TimelineSection,
        field: String,
    },

    #[error("no bullet {index} (length {len})")]
    BulletOutOfRange { index: usize, len: usize },

    #[error("no custom section {index} (length {len})")]
    CustomSectionOutOfRange { index: usize, len: usize },

    #[error("no custom item {index} (length {len})")]
    CustomItemOutOfRange { index: usize, len: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Apply
// ────────────────────────────────────────────────────────────────────────────

/// Runs `$body` with `$list` bound to the mutable entry list of `$section`.
/// Each arm is monomorphized for its entry type.
macro_rules! with_timeline {
    ($doc:expr, $section:expr, |$list:ident| $body:expr) => {
        match $section {
            TimelineSection::Education => {
                let $list = &mut $doc.education;
                $body
            }
            TimelineSection::Experience => {
                let $list = &mut $doc.experience;
                $body
            }
            TimelineSection::Projects => {
                let $list = &mut $doc.projects;
                $body
            }
        }
    };
}

impl Document {
    pub fn apply(&self, patch: &DocumentPatch) -> Result<Document, PatchError> {
        let mut next = self.clone();

        match patch {
            DocumentPatch::SetHeader { field, value } => next.header.set(*field, value.clone()),
            DocumentPatch::SetSummary { value } => next.summary = value.clone(),
            DocumentPatch::SetSkills { category, value } => {
                *next.skills.get_mut(*category) = split_skills(value);
            }
            DocumentPatch::SetEntryField {
                section,
                index,
                field,
                value,
            } => with_timeline!(next, *section, |list| {
                let entry = entry_mut(list, *section, *index)?;
                let slot = entry
                    .field_mut(field)
                    .ok_or_else(|| PatchError::UnknownField {
                        section: *section,
                        field: field.clone(),
                    })?;
                *slot = value.clone();
            }),
            DocumentPatch::AppendEntry { section } => {
                with_timeline!(next, *section, |list| append_placeholder(list))
            }
            DocumentPatch::RemoveEntry { section, index } => {
                with_timeline!(next, *section, |list| {
                    entry_mut(list, *section, *index)?;
                    list.remove(*index);
                })
            }
            DocumentPatch::AppendBullet { owner } => {
                let placeholder = match owner {
                    BulletOwner::Entry { .. } => NEW_BULLET,
                    BulletOwner::CustomItem { .. } => NEW_DETAIL,
                };
                bullets_mut(&mut next, owner)?.push(placeholder.to_string());
            }
            DocumentPatch::SetBullet {
                owner,
                bullet,
                value,
            } => {
                let bullets = bullets_mut(&mut next, owner)?;
                let len = bullets.len();
                let slot = bullets
                    .get_mut(*bullet)
                    .ok_or(PatchError::BulletOutOfRange { index: *bullet, len })?;
                *slot = value.clone();
            }
            DocumentPatch::RemoveBullet { owner, bullet } => {
                let bullets = bullets_mut(&mut next, owner)?;
                if *bullet >= bullets.len() {
                    return Err(PatchError::BulletOutOfRange {
                        index: *bullet,
                        len: bullets.len(),
                    });
                }
                bullets.remove(*bullet);
            }
            DocumentPatch::AppendCustomSection => {
                next.custom_sections.push(CustomSection::placeholder());
            }
            DocumentPatch::SetCustomSectionTitle { section, title } => {
                custom_section_mut(&mut next, *section)?.title = title.clone();
            }
            DocumentPatch::SetCustomSectionVisible { section, visible } => {
                custom_section_mut(&mut next, *section)?.visible = *visible;
            }
            DocumentPatch::RemoveCustomSection { section } => {
                custom_section_mut(&mut next, *section)?;
                next.custom_sections.remove(*section);
            }
            DocumentPatch::AppendCustomItem { section } => {
                custom_section_mut(&mut next, *section)?
                    .items
                    .push(CustomItem::placeholder());
            }
            DocumentPatch::SetCustomItemField {
                section,
                item,
                field,
                value,
            } => custom_item_mut(&mut next, *section, *item)?.set(*field, value.clone()),
            DocumentPatch::RemoveCustomItem { section, item } => {
                custom_item_mut(&mut next, *section, *item)?;
                custom_section_mut(&mut next, *section)?.items.remove(*item);
            }
        }

        Ok(next)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn entry_mut<T: TimelineEntry>(
    list: &mut [T],
    section: TimelineSection,
    index: usize,
) -> Result<&mut T, PatchError> {
    let len = list.len();
    list.get_mut(index).ok_or(PatchError::EntryOutOfRange {
        section,
        index,
        len,
    })
}

fn append_placeholder<T: TimelineEntry>(list: &mut Vec<T>) {
    list.push(T::placeholder());
}

fn bullets_mut<'a>(
    doc: &'a mut Document,
    owner: &BulletOwner,
) -> Result<&'a mut Vec<String>, PatchError> {
    match *owner {
        BulletOwner::Entry { section, index } => with_timeline!(doc, section, |list| {
            entry_mut(list, section, index).map(|e| e.bullets_mut())
        }),
        BulletOwner::CustomItem { section, item } => {
            custom_item_mut(doc, section, item).map(|i| &mut i.bullets)
        }
    }
}

fn custom_section_mut(doc: &mut Document, index: usize) -> Result<&mut CustomSection, PatchError> {
    let len = doc.custom_sections.len();
    doc.custom_sections
        .get_mut(index)
        .ok_or(PatchError::CustomSectionOutOfRange { index, len })
}

fn custom_item_mut(
    doc: &mut Document,
    section: usize,
    item: usize,
) -> Result<&mut CustomItem, PatchError> {
    let items = &mut custom_section_mut(doc, section)?.items;
    let len = items.len();
    items
        .get_mut(item)
        .ok_or(PatchError::CustomItemOutOfRange { index: item, len })
}

/// Splits "Rust, Go,  SQL" into trimmed names, dropping blanks.
fn split_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Other(String),
}

impl EntityKind {
    fn from_label(label: &str) -> Self {
        if label == "User" {
            Self::User
        } else {
            Self::Other(label.to_owned())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::User => "User",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Unspecified,
    Female,
    Male,
}

impl Sex {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unspecified),
            1 => Some(Self::Female),
            2 => Some(Self::Male),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("entity {0} has an empty kind label")]
    EmptyKind(EntityId),
}

/// Entity record as served by the graph API.
#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawEntityRecord {
    pub(super) id: EntityId,
    #[serde(default, alias = "kind")]
    pub(super) label: String,
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default, alias = "handle")]
    pub(super) screen_name: Option<String>,
    #[serde(default, alias = "sexCode")]
    pub(super) sex: Option<i64>,
    #[serde(default)]
    pub(super) city: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawRelationshipRecord {
    #[serde(alias = "sourceId")]
    pub(super) start_node_id: EntityId,
    #[serde(default, alias = "relationshipType")]
    pub(super) relationship_type: String,
    #[serde(alias = "targetEntityData")]
    pub(super) end_node: RawTargetRef,
}

/// Only the id of a nested target is read; its other attributes come from
/// the entity list.
#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawTargetRef {
    pub(super) id: EntityId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: Option<String>,
    pub handle: Option<String>,
    pub sex: Option<Sex>,
    pub city: Option<String>,
}

#[cfg(test)]
impl EntityRecord {
    pub fn new(id: i64, kind: EntityKind) -> Self {
        Self {
            id: EntityId(id),
            kind,
            name: None,
            handle: None,
            sex: None,
            city: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelationshipRecord {
    pub source_id: EntityId,
    pub relationship_type: String,
    pub target_id: EntityId,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl TryFrom<RawEntityRecord> for EntityRecord {
    type Error = RecordError;

    fn try_from(raw: RawEntityRecord) -> Result<Self, Self::Error> {
        let label = raw.label.trim();
        if label.is_empty() {
            return Err(RecordError::EmptyKind(raw.id));
        }

        Ok(Self {
            id: raw.id,
            kind: EntityKind::from_label(label),
            name: non_blank(raw.name),
            handle: non_blank(raw.screen_name),
            sex: raw.sex.and_then(|code| {
                let sex = Sex::from_code(code);
                if sex.is_none() {
                    warn!(id = %raw.id, code, "ignoring unknown sex code");
                }
                sex
            }),
            city: non_blank(raw.city),
        })
    }
}

impl From<RawRelationshipRecord> for RelationshipRecord {
    fn from(raw: RawRelationshipRecord) -> Self {
        Self {
            source_id: raw.start_node_id,
            relationship_type: raw.relationship_type,
            target_id: raw.end_node.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_user(id: i64) -> RawEntityRecord {
        RawEntityRecord {
            id: EntityId(id),
            label: "User".to_owned(),
            name: Some("Anna".to_owned()),
            screen_name: Some("  ".to_owned()),
            sex: Some(1),
            city: None,
        }
    }

    #[test]
    fn validates_user_record_and_drops_blank_strings() {
        let record = EntityRecord::try_from(raw_user(7)).unwrap();

        assert_eq!(record.id, EntityId(7));
        assert_eq!(record.kind, EntityKind::User);
        assert_eq!(record.name.as_deref(), Some("Anna"));
        assert_eq!(record.handle, None);
        assert_eq!(record.sex, Some(Sex::Female));
    }

    #[test]
    fn non_user_labels_keep_their_text() {
        let mut raw = raw_user(3);
        raw.label = "Group".to_owned();

        let record = EntityRecord::try_from(raw).unwrap();
        assert_eq!(record.kind, EntityKind::Other("Group".to_owned()));
        assert_eq!(record.kind.to_string(), "Group");
    }

    #[test]
    fn rejects_empty_kind() {
        let mut raw = raw_user(1);
        raw.label = String::new();
        assert_eq!(
            EntityRecord::try_from(raw),
            Err(RecordError::EmptyKind(EntityId(1)))
        );
    }

    #[test]
    fn unknown_sex_code_keeps_the_entity() {
        let mut raw = raw_user(2);
        raw.sex = Some(9);

        let record = EntityRecord::try_from(raw).unwrap();
        assert_eq!(record.id, EntityId(2));
        assert_eq!(record.sex, None);
        assert_eq!(record.name.as_deref(), Some("Anna"));
    }

    #[test]
    fn relationship_keeps_raw_type_and_target_id() {
        let raw = RawRelationshipRecord {
            start_node_id: EntityId(1),
            relationship_type: " SUBSCRIBED ".to_owned(),
            end_node: RawTargetRef { id: EntityId(2) },
        };

        let record = RelationshipRecord::from(raw);
        assert_eq!(record.source_id, EntityId(1));
        assert_eq!(record.relationship_type, " SUBSCRIBED ");
        assert_eq!(record.target_id, EntityId(2));
    }
}

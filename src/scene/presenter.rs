use crate::social::EntityId;

use super::registry::SceneRegistry;

pub const UNKNOWN_ENTITY: &str = "Unknown entity";
pub const NOT_SET: &str = "not set";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipRow {
    pub relationship_type: String,
    pub target_name: String,
}

/// What the details panel shows for the selected entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySummary {
    pub id: EntityId,
    pub kind: String,
    pub name: Option<String>,
    pub handle: Option<String>,
    pub sex: Option<&'static str>,
    pub city: Option<String>,
    pub relationships: Vec<RelationshipRow>,
}

impl EntitySummary {
    pub fn for_entity(registry: &SceneRegistry, id: EntityId) -> Option<Self> {
        let entity = registry.get(id)?;

        let relationships = entity
            .outgoing()
            .iter()
            .map(|relationship| RelationshipRow {
                relationship_type: relationship.relationship_type.clone(),
                target_name: registry
                    .get(relationship.target)
                    .and_then(|target| target.name())
                    .unwrap_or(UNKNOWN_ENTITY)
                    .to_owned(),
            })
            .collect();

        Some(Self {
            id,
            kind: entity.kind().to_string(),
            name: entity.name().map(str::to_owned),
            handle: entity.handle().map(str::to_owned),
            sex: entity.sex().map(|sex| sex.label()),
            city: entity.city().map(str::to_owned),
            relationships,
        })
    }

    /// One-line tooltip shown while the pointer rests on an entity.
    pub fn hover_label(registry: &SceneRegistry, id: EntityId) -> Option<String> {
        let entity = registry.get(id)?;
        Some(format!(
            "{}  |  {}  |  {}",
            entity.id(),
            entity.kind(),
            entity.name().unwrap_or(NOT_SET)
        ))
    }

    /// `(label, value)` pairs for the attribute block.
    pub fn attribute_rows(&self) -> Vec<(&'static str, String)> {
        let or_not_set = |value: Option<&str>| value.unwrap_or(NOT_SET).to_owned();

        vec![
            ("ID", self.id.to_string()),
            ("Label", self.kind.clone()),
            ("Name", or_not_set(self.name.as_deref())),
            ("Handle", or_not_set(self.handle.as_deref())),
            ("Sex", or_not_set(self.sex)),
            ("City", or_not_set(self.city.as_deref())),
        ]
    }
}

use glam::Vec3;

use crate::social::{EntityId, RelationshipRecord};

use super::registry::EntityMap;

pub const SUBSCRIBED: &str = "SUBSCRIBED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorCategory {
    Subscribed,
    Other,
}

impl ConnectorCategory {
    pub fn classify(relationship_type: &str) -> Self {
        if relationship_type == SUBSCRIBED {
            Self::Subscribed
        } else {
            Self::Other
        }
    }
}

/// Line segment drawn for one resolved relationship.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    pub source: EntityId,
    pub target: EntityId,
    pub start: Vec3,
    pub end: Vec3,
    pub category: ConnectorCategory,
}

/// Resolves relationship records against the registered entities.
///
/// Records whose source or target is not registered are skipped. Every
/// resolved record appends one outgoing relationship to its source and
/// yields one connector.
pub(super) fn link(relationships: &[RelationshipRecord], entities: &mut EntityMap) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for record in relationships {
        let target_id = record.target_id;
        let Some(end) = entities.get(&target_id).map(|target| target.position()) else {
            continue;
        };
        let Some(source) = entities.get_mut(&record.source_id) else {
            continue;
        };

        source.add_relationship(&record.relationship_type, target_id);
        connectors.push(Connector {
            source: record.source_id,
            target: target_id,
            start: source.position(),
            end,
            category: ConnectorCategory::classify(&record.relationship_type),
        });
    }

    connectors
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::scene::entity::{Entity, OutgoingRelationship};
    use crate::social::{EntityKind, EntityRecord};

    fn entity_map(ids: &[i64]) -> EntityMap {
        ids.iter()
            .map(|&id| {
                let record = EntityRecord::new(id, EntityKind::User);
                (EntityId(id), Entity::new(&record, Vec3::splat(id as f32)))
            })
            .collect::<HashMap<_, _>>()
    }

    fn relationship(source: i64, kind: &str, target: i64) -> RelationshipRecord {
        RelationshipRecord {
            source_id: EntityId(source),
            relationship_type: kind.to_owned(),
            target_id: EntityId(target),
        }
    }

    #[test]
    fn subscribed_relationship_links_source_to_target() {
        let mut entities = entity_map(&[1, 2]);

        let connectors = link(&[relationship(1, "SUBSCRIBED", 2)], &mut entities);

        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].category, ConnectorCategory::Subscribed);
        assert_eq!(connectors[0].start, Vec3::splat(1.0));
        assert_eq!(connectors[0].end, Vec3::splat(2.0));
        assert_eq!(
            entities[&EntityId(1)].outgoing(),
            [OutgoingRelationship {
                relationship_type: "SUBSCRIBED".to_owned(),
                target: EntityId(2),
            }]
        );
        assert!(entities[&EntityId(2)].outgoing().is_empty());
    }

    #[test]
    fn missing_endpoint_is_skipped_without_mutation() {
        let mut entities = entity_map(&[1, 2]);

        let connectors = link(
            &[relationship(1, "SUBSCRIBED", 99), relationship(42, "FRIEND", 2)],
            &mut entities,
        );

        assert!(connectors.is_empty());
        assert!(entities.values().all(|entity| entity.outgoing().is_empty()));
    }

    #[test]
    fn other_types_and_duplicates() {
        let mut entities = entity_map(&[1, 2, 3]);

        let connectors = link(
            &[
                relationship(1, "FRIEND", 2),
                relationship(1, "FRIEND", 2),
                relationship(3, "subscribed", 1),
            ],
            &mut entities,
        );

        assert_eq!(connectors.len(), 3);
        assert!(
            connectors
                .iter()
                .all(|connector| connector.category == ConnectorCategory::Other)
        );
        assert_eq!(entities[&EntityId(1)].outgoing().len(), 2);
    }

    #[test]
    fn self_relationship_resolves() {
        let mut entities = entity_map(&[4]);

        let connectors = link(&[relationship(4, "SUBSCRIBED", 4)], &mut entities);

        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].start, connectors[0].end);
    }
}

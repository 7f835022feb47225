use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, warn};

use crate::social::{Dataset, EntityId};

use super::entity::Entity;
use super::layout::{LayoutStrategy, compute_layout};
use super::link::{Connector, link};

pub(super) type EntityMap = HashMap<EntityId, Entity>;

/// Entities and connectors currently shown in the scene.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    entities: EntityMap,
    order: Vec<EntityId>,
    connectors: Vec<Connector>,
    revision: u64,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entity, its marker and every connector.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
        self.connectors.clear();
        self.revision += 1;
    }

    /// Replaces the scene with the first `count` entities of `dataset` placed
    /// by `strategy`, then links the dataset's relationships.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        strategy: LayoutStrategy,
        dataset: &Dataset,
        count: usize,
        rng: &mut R,
    ) {
        self.clear();

        let positions = compute_layout(strategy, &dataset.entities, count, rng);
        self.entities.reserve(positions.len());
        self.order.reserve(positions.len());

        for (record, position) in dataset.entities.iter().zip(positions) {
            let entity = Entity::new(record, position);
            if self.entities.insert(record.id, entity).is_some() {
                warn!(id = %record.id, "duplicate entity id, keeping the later record");
            } else {
                self.order.push(record.id);
            }
        }

        self.connectors = link(&dataset.relationships, &mut self.entities);

        debug!(
            layout = strategy.label(),
            entities = self.entities.len(),
            connectors = self.connectors.len(),
            skipped = dataset.relationships.len().saturating_sub(self.connectors.len()),
            "scene rebuilt"
        );
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Entities in the order they were registered.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[cfg(test)]
    pub(crate) fn with_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut registry = Self::new();
        for entity in entities {
            registry.order.push(entity.id());
            registry.entities.insert(entity.id(), entity);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::social::{EntityKind, EntityRecord, RelationshipRecord};

    fn dataset(entity_count: i64, relationships: &[(i64, &str, i64)]) -> Dataset {
        Dataset {
            entities: (1..=entity_count)
                .map(|id| EntityRecord::new(id, EntityKind::User))
                .collect(),
            relationships: relationships
                .iter()
                .map(|&(source, kind, target)| RelationshipRecord {
                    source_id: EntityId(source),
                    relationship_type: kind.to_owned(),
                    target_id: EntityId(target),
                })
                .collect(),
        }
    }

    #[test]
    fn second_rebuild_leaves_only_its_own_count() {
        let data = dataset(50, &[(1, "SUBSCRIBED", 40), (2, "FRIEND", 3)]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut registry = SceneRegistry::new();

        registry.rebuild(LayoutStrategy::RandomCube, &data, 45, &mut rng);
        assert_eq!(registry.len(), 45);
        assert_eq!(registry.connectors().len(), 2);

        registry.rebuild(
            LayoutStrategy::FibonacciSphere { radius: 30.0 },
            &data,
            10,
            &mut rng,
        );
        assert_eq!(registry.len(), 10);
        assert!(!registry.contains(EntityId(40)));
        assert_eq!(registry.connectors().len(), 1);
    }

    #[test]
    fn repeated_rebuilds_do_not_accumulate_relationships() {
        let data = dataset(5, &[(1, "SUBSCRIBED", 2), (2, "FRIEND", 9), (3, "FRIEND", 1)]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut registry = SceneRegistry::new();

        for round in 0..4 {
            let strategy = if round % 2 == 0 {
                LayoutStrategy::RandomCube
            } else {
                LayoutStrategy::FibonacciSphere { radius: 30.0 }
            };
            registry.rebuild(strategy, &data, 5, &mut rng);

            assert_eq!(registry.connectors().len(), 2);
            let linked = registry
                .entities()
                .map(|entity| entity.outgoing().len())
                .sum::<usize>();
            assert_eq!(linked, 2);
        }
    }

    #[test]
    fn connectors_use_current_positions() {
        let data = dataset(2, &[(1, "SUBSCRIBED", 2)]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut registry = SceneRegistry::new();
        registry.rebuild(
            LayoutStrategy::FibonacciSphere { radius: 30.0 },
            &data,
            2,
            &mut rng,
        );

        let connector = &registry.connectors()[0];
        let source = registry.get(EntityId(1)).map(|entity| entity.position());
        let target = registry.get(EntityId(2)).map(|entity| entity.position());
        assert_eq!(Some(connector.start), source);
        assert_eq!(Some(connector.end), target);
    }

    #[test]
    fn duplicate_ids_keep_the_last_record() {
        let mut data = dataset(2, &[]);
        data.entities
            .push(EntityRecord::new(1, EntityKind::Other("Group".to_owned())));
        let mut rng = StdRng::seed_from_u64(5);
        let mut registry = SceneRegistry::new();

        registry.rebuild(LayoutStrategy::RandomCube, &data, 3, &mut rng);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entities().count(), 2);
        assert_eq!(
            registry.get(EntityId(1)).map(|entity| entity.kind().clone()),
            Some(EntityKind::Other("Group".to_owned()))
        );
    }

    #[test]
    fn zero_count_and_clear_leave_an_empty_scene() {
        let data = dataset(3, &[(1, "FRIEND", 2)]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut registry = SceneRegistry::new();

        registry.rebuild(LayoutStrategy::FibonacciSphere { radius: 30.0 }, &data, 0, &mut rng);
        assert!(registry.is_empty());
        assert!(registry.connectors().is_empty());

        registry.rebuild(LayoutStrategy::RandomCube, &data, 3, &mut rng);
        let revision = registry.revision();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.connectors().is_empty());
        assert!(registry.revision() > revision);
    }
}

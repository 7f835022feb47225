use glam::Vec3;

use crate::social::{EntityId, EntityKind, EntityRecord, Sex};

pub const MARKER_RADIUS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    User,
    Other,
}

/// Pickable sphere drawn for one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub center: Vec3,
    pub radius: f32,
    pub style: MarkerStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingRelationship {
    pub relationship_type: String,
    pub target: EntityId,
}

#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    name: Option<String>,
    handle: Option<String>,
    sex: Option<Sex>,
    city: Option<String>,
    position: Vec3,
    outgoing: Vec<OutgoingRelationship>,
    marker: Marker,
}

impl Entity {
    pub fn new(record: &EntityRecord, position: Vec3) -> Self {
        let style = match record.kind {
            EntityKind::User => MarkerStyle::User,
            EntityKind::Other(_) => MarkerStyle::Other,
        };

        Self {
            id: record.id,
            kind: record.kind.clone(),
            name: record.name.clone(),
            handle: record.handle.clone(),
            sex: record.sex,
            city: record.city.clone(),
            position,
            outgoing: Vec::new(),
            marker: Marker {
                center: position,
                radius: MARKER_RADIUS,
                style,
            },
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn outgoing(&self) -> &[OutgoingRelationship] {
        &self.outgoing
    }

    pub(super) fn add_relationship(&mut self, relationship_type: &str, target: EntityId) {
        self.outgoing.push(OutgoingRelationship {
            relationship_type: relationship_type.to_owned(),
            target,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_follows_position_and_kind() {
        let record = EntityRecord::new(5, EntityKind::Other("Group".to_owned()));
        let entity = Entity::new(&record, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(entity.marker().center, entity.position());
        assert_eq!(entity.marker().style, MarkerStyle::Other);
        assert_eq!(entity.marker().radius, MARKER_RADIUS);
        assert!(entity.outgoing().is_empty());
    }

    #[test]
    fn relationships_are_appended_in_order_without_dedup() {
        let mut entity = Entity::new(&EntityRecord::new(1, EntityKind::User), Vec3::ZERO);
        entity.add_relationship("SUBSCRIBED", EntityId(2));
        entity.add_relationship("SUBSCRIBED", EntityId(2));
        entity.add_relationship("FRIEND", EntityId(3));

        let types = entity
            .outgoing()
            .iter()
            .map(|relationship| relationship.relationship_type.as_str())
            .collect::<Vec<_>>();
        assert_eq!(types, ["SUBSCRIBED", "SUBSCRIBED", "FRIEND"]);
    }
}

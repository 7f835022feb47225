use std::fmt;

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::records::{EntityRecord, RawEntityRecord, RawRelationshipRecord, RelationshipRecord};

fn parse_array<R, T>(raw: &str, what: &str) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    T: TryFrom<R>,
    T::Error: fmt::Display,
{
    let parsed: Value =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON for {what}"))?;
    let items = parsed
        .as_array()
        .ok_or_else(|| anyhow!("expected a JSON array of {what}"))?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let raw_record = match serde_json::from_value::<R>(item.clone()) {
            Ok(raw_record) => raw_record,
            Err(error) => {
                warn!(index, %error, "skipping malformed {what} record");
                continue;
            }
        };

        match T::try_from(raw_record) {
            Ok(record) => records.push(record),
            Err(error) => warn!(index, %error, "skipping invalid {what} record"),
        }
    }

    Ok(records)
}

pub(super) fn parse_entities(raw: &str) -> Result<Vec<EntityRecord>> {
    parse_array::<RawEntityRecord, _>(raw, "entity")
}

pub(super) fn parse_relationships(raw: &str) -> Result<Vec<RelationshipRecord>> {
    parse_array::<RawRelationshipRecord, _>(raw, "relationship")
}

mod fetch;
mod parse;
mod records;

pub use fetch::{DataSource, Dataset, fetch_dataset};
pub use records::{EntityId, EntityKind, EntityRecord, RelationshipRecord, Sex};

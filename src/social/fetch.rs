use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use super::parse::{parse_entities, parse_relationships};
use super::records::{EntityRecord, RelationshipRecord};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Http {
        base_url: String,
    },
    Files {
        nodes: PathBuf,
        relationships: PathBuf,
    },
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Http { base_url } => base_url.clone(),
            Self::Files {
                nodes,
                relationships,
            } => format!("{} + {}", nodes.display(), relationships.display()),
        }
    }
}

/// Everything the viewer loads before the first scene build.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub entities: Vec<EntityRecord>,
    pub relationships: Vec<RelationshipRecord>,
}

enum Endpoint {
    Nodes,
    Relationships,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Relationships => "relationships",
        }
    }
}

fn read_endpoint(source: &DataSource, endpoint: Endpoint) -> Result<String> {
    match source {
        DataSource::Http { base_url } => {
            let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path());
            let client = reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .context("failed to build HTTP client")?;
            client
                .get(&url)
                .send()
                .and_then(|response| response.error_for_status())
                .and_then(|response| response.text())
                .with_context(|| format!("failed to fetch {url}"))
        }
        DataSource::Files {
            nodes,
            relationships,
        } => {
            let path = match endpoint {
                Endpoint::Nodes => nodes,
                Endpoint::Relationships => relationships,
            };
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}

fn fetch_entities(source: &DataSource) -> Result<Vec<EntityRecord>> {
    let raw = read_endpoint(source, Endpoint::Nodes)?;
    parse_entities(&raw).context("failed to parse entity records")
}

fn fetch_relationships(source: &DataSource) -> Result<Vec<RelationshipRecord>> {
    let raw = read_endpoint(source, Endpoint::Relationships)?;
    parse_relationships(&raw).context("failed to parse relationship records")
}

/// Loads both record sets. A failing endpoint is logged and contributes no
/// records; it never fails the whole load.
pub fn fetch_dataset(source: &DataSource) -> Dataset {
    let entities = fetch_entities(source).unwrap_or_else(|error| {
        error!("entity load failed: {error:#}");
        Vec::new()
    });
    let relationships = fetch_relationships(source).unwrap_or_else(|error| {
        error!("relationship load failed: {error:#}");
        Vec::new()
    });

    info!(
        source = %source.describe(),
        entities = entities.len(),
        relationships = relationships.len(),
        "dataset loaded"
    );

    Dataset {
        entities,
        relationships,
    }
}

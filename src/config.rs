use std::path::PathBuf;

use clap::Parser;

use crate::scene::{DEFAULT_SPHERE_RADIUS, LayoutStrategy};
use crate::social::DataSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Base URL serving `/nodes` and `/relationships`.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api_url: String,
    /// Read entities from a JSON file instead of the API.
    #[arg(long, requires = "relationships_file")]
    nodes_file: Option<PathBuf>,
    /// Read relationships from a JSON file instead of the API.
    #[arg(long, requires = "nodes_file")]
    relationships_file: Option<PathBuf>,
    /// Number of entities placed in the scene.
    #[arg(long, default_value_t = 200)]
    count: usize,
    /// Initial layout: `0` for the random cube, anything else for the sphere.
    #[arg(long, default_value = "1")]
    layout: String,
    /// Sphere layout radius in world units; non-positive values use the default.
    #[arg(long, default_value_t = DEFAULT_SPHERE_RADIUS)]
    radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub source: DataSource,
    pub count: usize,
    pub layout: LayoutStrategy,
    pub radius: f32,
}

impl Args {
    pub fn into_config(self) -> ViewerConfig {
        let source = match (self.nodes_file, self.relationships_file) {
            (Some(nodes), Some(relationships)) => DataSource::Files {
                nodes,
                relationships,
            },
            _ => DataSource::Http {
                base_url: self.api_url,
            },
        };

        let radius = if self.radius.is_finite() && self.radius > 0.0 {
            self.radius
        } else {
            DEFAULT_SPHERE_RADIUS
        };

        ViewerConfig {
            source,
            count: self.count,
            layout: LayoutStrategy::from_selector_value(&self.layout, radius),
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> ViewerConfig {
        Args::try_parse_from(std::iter::once("social-graph-3d").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    fn defaults_to_local_api_and_sphere() {
        let config = parse(&[]);

        assert_eq!(
            config.source,
            DataSource::Http {
                base_url: "http://127.0.0.1:8000".to_owned()
            }
        );
        assert_eq!(config.count, 200);
        assert_eq!(
            config.layout,
            LayoutStrategy::FibonacciSphere {
                radius: DEFAULT_SPHERE_RADIUS
            }
        );
    }

    #[test]
    fn file_pair_and_random_layout() {
        let config = parse(&[
            "--nodes-file",
            "nodes.json",
            "--relationships-file",
            "rels.json",
            "--layout",
            "0",
            "--count",
            "12",
        ]);

        assert_eq!(
            config.source,
            DataSource::Files {
                nodes: PathBuf::from("nodes.json"),
                relationships: PathBuf::from("rels.json"),
            }
        );
        assert_eq!(config.layout, LayoutStrategy::RandomCube);
        assert_eq!(config.count, 12);
    }

    #[test]
    fn nodes_file_requires_relationships_file() {
        assert!(Args::try_parse_from(["social-graph-3d", "--nodes-file", "nodes.json"]).is_err());
    }

    #[test]
    fn every_option_has_help_text() {
        let command = Args::command();
        let undocumented = command
            .get_arguments()
            .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
            .filter(|arg| arg.get_help().is_none())
            .map(|arg| arg.get_id().to_string())
            .collect::<Vec<_>>();

        assert!(undocumented.is_empty(), "undocumented: {undocumented:?}");
    }

    #[test]
    fn non_positive_radius_falls_back_to_default() {
        let config = parse(&["--radius=-4"]);
        assert_eq!(config.radius, DEFAULT_SPHERE_RADIUS);
    }
}

mod camera;
mod entity;
mod layout;
mod link;
mod picking;
mod presenter;
mod registry;

pub use camera::OrbitCamera;
pub use entity::MarkerStyle;
pub use layout::{DEFAULT_SPHERE_RADIUS, LayoutStrategy};
pub use link::ConnectorCategory;
pub use picking::{pick, pointer_to_ndc};
pub use presenter::EntitySummary;
pub use registry::SceneRegistry;

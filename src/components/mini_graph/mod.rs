mod component;
mod config;
mod error;
mod layout;
mod loader;
mod nav;
mod render;
mod scene;
mod state;
mod types;

pub use component::{MiniGraph, MiniGraphProps};
pub use config::{LayoutParams, MiniGraphConfig, RenderParams, SiteParams};
pub use error::LoadError;
pub use layout::{Bounds, LayoutNode, Simulation};
pub use loader::load_dataset;
pub use nav::DocLinker;
pub use render::{clicked_href, paint};
pub use scene::{Scene, SceneLine, SceneNode};
pub use types::{Endpoint, GraphData, GraphLink, GraphNode};

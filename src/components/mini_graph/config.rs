/// Physics tuning for the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
	/// Number of steps before the layout stops.
	pub steps: u32,
	/// Spring constant along links.
	pub stiffness: f64,
	/// Pairwise charge, negative to repel.
	pub charge: f64,
	/// Rest length of a link spring.
	pub link_distance: f64,
	/// Velocity multiplier applied after every step.
	pub damping: f64,
	/// Minimum distance kept from every canvas edge.
	pub margin: f64,
	/// Shift all nodes each step so their centroid sits mid-canvas.
	pub centering: bool,
	/// Extra steps granted when a drag or resize wakes a settled layout.
	pub reheat_steps: u32,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			steps: 80,
			stiffness: 0.05,
			charge: -80.0,
			link_distance: 55.0,
			damping: 0.85,
			margin: 10.0,
			centering: false,
			reheat_steps: 60,
		}
	}
}

/// What gets painted and how it looks.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
	/// Only the first this-many links of the dataset are drawn.
	pub max_links: usize,
	/// Only the first this-many nodes of the dataset are drawn.
	pub max_nodes: usize,
	/// Circle radius.
	pub node_radius: f64,
	/// Pointer distance that grabs a node when dragging.
	pub hit_radius: f64,
	/// Circle fill.
	pub node_color: String,
	/// Circle fill under the pointer.
	pub hover_color: String,
	/// Line stroke.
	pub link_color: String,
	/// Line stroke width.
	pub link_width: f64,
}

impl Default for RenderParams {
	fn default() -> Self {
		Self {
			max_links: 120,
			max_nodes: 180,
			node_radius: 3.2,
			hit_radius: 8.0,
			node_color: "#3b82f6".into(),
			hover_color: "#1f2937".into(),
			link_color: "#c9ced6".into(),
			link_width: 0.6,
		}
	}
}

/// Where the dataset and the linked documents live relative to the site root.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteParams {
	/// Dataset file name at the site root.
	pub data_file: String,
	/// Directory holding the linked documents.
	pub docs_dir: String,
	/// Extension appended to ids that lack it.
	pub extension: String,
	/// Path fragments marking a page one directory below the site root.
	pub nested_markers: Vec<String>,
}

impl Default for SiteParams {
	fn default() -> Self {
		Self {
			data_file: "graph.json".into(),
			docs_dir: "papers".into(),
			extension: ".md".into(),
			nested_markers: vec!["/papers/".into(), "/clusters/".into()],
		}
	}
}

/// Everything the `MiniGraph` component can be tuned with.
#[derive(Clone, Debug, PartialEq)]
pub struct MiniGraphConfig {
	/// Physics.
	pub layout: LayoutParams,
	/// Drawing.
	pub render: RenderParams,
	/// Paths.
	pub site: SiteParams,
	/// Canvas width used when the SVG reports no client size.
	pub default_width: f64,
	/// Canvas height used when the SVG reports no client size.
	pub default_height: f64,
	/// Heading above the graph.
	pub title: String,
	/// Hint below the graph.
	pub legend: String,
	/// Fixed RNG seed for reproducible layouts. `None` seeds from `Math.random`.
	pub seed: Option<u64>,
}

impl Default for MiniGraphConfig {
	fn default() -> Self {
		Self {
			layout: LayoutParams::default(),
			render: RenderParams::default(),
			site: SiteParams::default(),
			default_width: 260.0,
			default_height: 220.0,
			title: "Linked documents".into(),
			legend: "● click a node to open it".into(),
			seed: None,
		}
	}
}

impl MiniGraphConfig {
	/// Settings for the standalone full-window graph page.
	pub fn full_page() -> Self {
		Self {
			layout: LayoutParams {
				steps: 300,
				charge: -120.0,
				link_distance: 60.0,
				centering: true,
				..LayoutParams::default()
			},
			render: RenderParams {
				max_links: usize::MAX,
				max_nodes: usize::MAX,
				node_radius: 4.0,
				hit_radius: 10.0,
				..RenderParams::default()
			},
			title: "Document graph".into(),
			legend: "● drag a node to move it, click to open it".into(),
			..Self::default()
		}
	}
}

use super::config::RenderParams;
use super::layout::Simulation;
use super::nav::DocLinker;

/// A drawn link, from `(x1, y1)` to `(x2, y2)` in canvas units.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct SceneLine {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
}

/// A drawn node.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	/// Centre, canvas units.
	pub x: f64,
	/// Centre, canvas units.
	pub y: f64,
	/// Tooltip text.
	pub label: String,
	/// Navigation target on click.
	pub href: String,
}

/// Everything drawn in one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Drawn under the nodes.
	pub lines: Vec<SceneLine>,
	/// One per circle, in dataset order.
	pub nodes: Vec<SceneNode>,
}

impl Scene {
	/// Snapshot of the current layout. The caps apply to the dataset order: the first `max_links` links are
	/// considered, and unresolved ones among them are dropped.
	pub fn build(sim: &Simulation, params: &RenderParams, linker: &DocLinker) -> Self {
		let nodes = sim.nodes();
		let lines = sim
			.links()
			.iter()
			.take(params.max_links)
			.flatten()
			.map(|&(a, b)| SceneLine {
				x1: nodes[a].x,
				y1: nodes[a].y,
				x2: nodes[b].x,
				y2: nodes[b].y,
			})
			.collect();
		let nodes = nodes
			.iter()
			.take(params.max_nodes)
			.map(|node| SceneNode {
				x: node.x,
				y: node.y,
				label: node.label().to_owned(),
				href: linker.doc_href(&node.id),
			})
			.collect();

		Self { lines, nodes }
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::mini_graph::config::{LayoutParams, SiteParams};
	use crate::components::mini_graph::layout::Bounds;
	use crate::components::mini_graph::types::{Endpoint, GraphData, GraphLink, GraphNode};

	fn simulation(data: &GraphData) -> Simulation {
		let mut rng = SmallRng::seed_from_u64(9);
		let bounds = Bounds {
			width: 260.0,
			height: 220.0,
		};
		Simulation::new(data, bounds, LayoutParams::default(), &mut rng)
	}

	fn linker() -> DocLinker {
		DocLinker::new("../", &SiteParams::default())
	}

	fn chain(n: usize) -> GraphData {
		GraphData {
			nodes: (0..n)
				.map(|i| GraphNode {
					id: format!("n{i}"),
					title: None,
				})
				.collect(),
			links: (1..n)
				.map(|i| GraphLink {
					source: Endpoint::Index(i - 1),
					target: Endpoint::Index(i),
				})
				.collect(),
		}
	}

	#[test]
	fn caps_nodes_and_links() {
		let sim = simulation(&chain(300));
		let scene = Scene::build(&sim, &RenderParams::default(), &linker());
		assert_eq!(scene.nodes.len(), 180);
		assert_eq!(scene.lines.len(), 120);
	}

	#[test]
	fn unresolved_links_count_against_the_cap_and_are_not_drawn() {
		let mut data = chain(3);
		data.links.insert(
			0,
			GraphLink {
				source: Endpoint::Id("missing".into()),
				target: Endpoint::Index(0),
			},
		);
		let sim = simulation(&data);
		let params = RenderParams {
			max_links: 2,
			..RenderParams::default()
		};
		let scene = Scene::build(&sim, &params, &linker());

		// first slot is the broken link, second is n0 -> n1
		assert_eq!(scene.lines.len(), 1);
		let (n0, n1) = (&sim.nodes()[0], &sim.nodes()[1]);
		assert_eq!(
			scene.lines[0],
			SceneLine {
				x1: n0.x,
				y1: n0.y,
				x2: n1.x,
				y2: n1.y,
			}
		);
	}

	#[test]
	fn nodes_carry_label_and_target() {
		let data = GraphData {
			nodes: vec![
				GraphNode {
					id: "example".into(),
					title: Some("An Example".into()),
				},
				GraphNode {
					id: "example.md".into(),
					title: Some(String::new()),
				},
			],
			links: Vec::new(),
		};
		let sim = simulation(&data);
		let scene = Scene::build(&sim, &RenderParams::default(), &linker());

		assert_eq!(scene.nodes[0].label, "An Example");
		assert_eq!(scene.nodes[0].href, "../papers/example.md");
		assert_eq!(scene.nodes[1].label, "example.md");
		assert_eq!(scene.nodes[1].href, "../papers/example.md");
		assert_eq!((scene.nodes[0].x, scene.nodes[0].y), (sim.nodes()[0].x, sim.nodes()[0].y));
	}
}

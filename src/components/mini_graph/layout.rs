//! Spring/charge layout over a fixed rectangle.
//!
//! Every step accumulates spring forces along resolved links and an
//! inverse-square repulsion between every pair of nodes into the node
//! velocities, then moves the nodes and damps the velocities. Positions are
//! clamped to stay `margin` away from the canvas edges. A pinned node (one
//! being dragged) holds its position and carries no velocity.

use rand::Rng;

use super::config::LayoutParams;
use super::types::{GraphData, NodeIndex};

/// Size of the drawing area, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Width of the canvas.
	pub width: f64,
	/// Height of the canvas.
	pub height: f64,
}

/// A node as the simulation moves it.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Document identifier.
	pub id: String,
	/// Optional display title.
	pub title: Option<String>,
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
}

impl LayoutNode {
	/// Tooltip text: the title, or the id when there is no usable title.
	pub fn label(&self) -> &str {
		match self.title.as_deref() {
			Some(title) if !title.is_empty() => title,
			_ => &self.id,
		}
	}
}

/// Positions and velocities of one dataset, stepped by [`step`](Self::step).
pub struct Simulation {
	nodes: Vec<LayoutNode>,
	// dataset order, `None` where an endpoint did not resolve
	links: Vec<Option<(usize, usize)>>,
	params: LayoutParams,
	bounds: Bounds,
	pinned: Option<usize>,
}

impl Simulation {
	/// Resolves the links and scatters the nodes uniformly over `bounds`.
	pub fn new<R: Rng + ?Sized>(
		data: &GraphData,
		bounds: Bounds,
		params: LayoutParams,
		rng: &mut R,
	) -> Self {
		let index = NodeIndex::build(&data.nodes);
		let links = data.links.iter().map(|l| index.resolve_link(l)).collect();
		let nodes = data
			.nodes
			.iter()
			.map(|node| LayoutNode {
				id: node.id.clone(),
				title: node.title.clone(),
				x: rng.r#gen::<f64>() * bounds.width,
				y: rng.r#gen::<f64>() * bounds.height,
				vx: 0.0,
				vy: 0.0,
			})
			.collect();

		Self {
			nodes,
			links,
			params,
			bounds,
			pinned: None,
		}
	}

	/// Current nodes, in dataset order.
	pub fn nodes(&self) -> &[LayoutNode] {
		&self.nodes
	}

	/// Links in dataset order; unresolved ones are `None`.
	pub fn links(&self) -> &[Option<(usize, usize)>] {
		&self.links
	}

	/// How many links have an endpoint that matched no node.
	pub fn unresolved_links(&self) -> usize {
		self.links.iter().filter(|l| l.is_none()).count()
	}

	/// The physics constants in use.
	pub fn params(&self) -> &LayoutParams {
		&self.params
	}

	/// The canvas the nodes are kept inside.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Changes the canvas; nodes are pulled back inside on the next step.
	pub fn resize(&mut self, bounds: Bounds) {
		self.bounds = bounds;
	}

	/// Moves a node and zeroes its velocity. Out of range indices are ignored.
	pub fn place(&mut self, index: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.x = x;
			node.y = y;
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}

	/// Places a node and holds it there until [`release`](Self::release).
	pub fn pin(&mut self, index: usize, x: f64, y: f64) {
		if index < self.nodes.len() {
			self.place(index, x, y);
			self.pinned = Some(index);
		}
	}

	/// Lets the pinned node move again.
	pub fn release(&mut self) {
		self.pinned = None;
	}

	/// The node being held, if any.
	pub fn pinned(&self) -> Option<usize> {
		self.pinned
	}

	/// Closest node within `radius` of `(x, y)`.
	pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
		self.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (i, (node.x - x).hypot(node.y - y)))
			.filter(|&(_, d)| d <= radius)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Advances the layout by one step.
	pub fn step(&mut self) {
		self.apply_springs();
		self.apply_charge();
		self.integrate();
	}

	fn apply_springs(&mut self) {
		let (k, rest) = (self.params.stiffness, self.params.link_distance);
		for &(a, b) in self.links.iter().flatten() {
			let (ux, uy, d) = direction(&self.nodes[a], &self.nodes[b]);
			let f = k * (d - rest);
			push_apart(&mut self.nodes, a, b, f * ux, f * uy);
		}
	}

	fn apply_charge(&mut self) {
		let charge = self.params.charge;
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let (ux, uy, d) = direction(&self.nodes[i], &self.nodes[j]);
				let f = charge / (d * d);
				push_apart(&mut self.nodes, i, j, f * ux, f * uy);
			}
		}
	}

	fn integrate(&mut self) {
		let LayoutParams {
			margin,
			damping,
			centering,
			..
		} = self.params;
		let Bounds { width, height } = self.bounds;
		let held = self.pinned.map(|i| (i, self.nodes[i].x, self.nodes[i].y));

		for node in &mut self.nodes {
			node.x += node.vx;
			node.y += node.vy;
		}
		if centering && !self.nodes.is_empty() {
			let n = self.nodes.len() as f64;
			let (sx, sy) = self
				.nodes
				.iter()
				.fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
			let (shift_x, shift_y) = (width / 2.0 - sx / n, height / 2.0 - sy / n);
			for node in &mut self.nodes {
				node.x += shift_x;
				node.y += shift_y;
			}
		}
		for node in &mut self.nodes {
			// max-then-min: a canvas thinner than 2 * margin pins to the far edge
			node.x = node.x.max(margin).min(width - margin);
			node.y = node.y.max(margin).min(height - margin);
			node.vx *= damping;
			node.vy *= damping;
		}
		if let Some((i, x, y)) = held {
			self.place(i, x, y);
		}
	}
}

/// Unit vector from `a` to `b` and their distance, floored at 1.
fn direction(a: &LayoutNode, b: &LayoutNode) -> (f64, f64, f64) {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let d = dx.hypot(dy).max(1.0);
	(dx / d, dy / d, d)
}

/// Adds `(fx, fy)` to node `a` and subtracts it from node `b`.
fn push_apart(nodes: &mut [LayoutNode], a: usize, b: usize, fx: f64, fy: f64) {
	nodes[a].vx += fx;
	nodes[a].vy += fy;
	nodes[b].vx -= fx;
	nodes[b].vy -= fy;
}

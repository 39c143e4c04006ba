use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One document in the dataset.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphNode {
	/// Document identifier, usually its file name.
	#[serde(default, deserialize_with = "lenient_id")]
	pub id: String,
	/// Tooltip text; the id is shown when absent.
	#[serde(default)]
	pub title: Option<String>,
}

/// A link endpoint as written in `graph.json`: a position in `nodes` or a node id.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub enum Endpoint {
	/// Position in the node list. Whole-number floats such as `1.0` count.
	Index(usize),
	/// A node's `id`.
	Id(String),
	/// Anything else (negative or fractional numbers, null, objects). Never resolves.
	Unresolvable(Value),
}

impl From<Value> for Endpoint {
	fn from(value: Value) -> Self {
		match value {
			Value::String(id) => Self::Id(id),
			Value::Number(ref n) => {
				if let Some(i) = n.as_u64().and_then(|i| usize::try_from(i).ok()) {
					return Self::Index(i);
				}
				match n.as_f64() {
					Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => {
						Self::Index(f as usize)
					}
					_ => Self::Unresolvable(value),
				}
			}
			other => Self::Unresolvable(other),
		}
	}
}

/// Accepts any JSON scalar as an id; numbers and booleans keep their JSON text.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::String(id) => id,
		Value::Null => String::new(),
		other => other.to_string(),
	})
}

/// A relationship between two documents.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GraphLink {
	/// First endpoint.
	pub source: Endpoint,
	/// Second endpoint.
	pub target: Endpoint,
}

/// The decoded `graph.json`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GraphData {
	/// Documents, in dataset order.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// Links, in dataset order.
	#[serde(default)]
	pub links: Vec<GraphLink>,
}

/// Id-to-position lookup built once per dataset.
#[derive(Clone, Debug, Default)]
pub struct NodeIndex {
	by_id: HashMap<String, usize>,
	len: usize,
}

impl NodeIndex {
	pub fn build(nodes: &[GraphNode]) -> Self {
		let mut by_id = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			// first occurrence wins on duplicate ids
			by_id.entry(node.id.clone()).or_insert(i);
		}
		Self {
			by_id,
			len: nodes.len(),
		}
	}

	pub fn resolve(&self, node: &Endpoint) -> Option<usize> {
		match node {
			Endpoint::Index(i) => (*i < self.len).then_some(*i),
			Endpoint::Id(id) => self.by_id.get(id).copied(),
			Endpoint::Unresolvable(_) => None,
		}
	}

	/// Both endpoints of `link`, or `None` if either is missing.
	pub fn resolve_link(&self, link: &GraphLink) -> Option<(usize, usize)> {
		Some((self.resolve(&link.source)?, self.resolve(&link.target)?))
	}
}

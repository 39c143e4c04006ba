use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use super::config::RenderParams;
use super::scene::Scene;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Attribute holding a node's navigation target; read by the click handler.
pub const HREF_ATTR: &str = "data-href";

/// Navigation target of the node an event landed on.
pub fn clicked_href(ev: &Event) -> Option<String> {
	ev.target()?
		.dyn_into::<Element>()
		.ok()?
		.get_attribute(HREF_ATTR)
}

/// Stylesheet for the hover highlight, scoped to `#mini-graph`.
pub fn hover_css(params: &RenderParams) -> String {
	format!(
		"#mini-graph circle {{ cursor: pointer; }} #mini-graph circle:hover {{ fill: {}; }}",
		params.hover_color
	)
}

/// Clears `svg` and draws `scene` into it.
pub fn paint(scene: &Scene, params: &RenderParams, svg: &Element) -> Result<(), JsValue> {
	let document = svg
		.owner_document()
		.ok_or_else(|| JsValue::from_str("svg element has no owner document"))?;
	svg.set_inner_html("");
	draw_links(scene, params, svg, &document)?;
	draw_nodes(scene, params, svg, &document)
}

fn draw_links(
	scene: &Scene,
	params: &RenderParams,
	svg: &Element,
	document: &Document,
) -> Result<(), JsValue> {
	let width = params.link_width.to_string();
	for line in &scene.lines {
		let el = document.create_element_ns(Some(SVG_NS), "line")?;
		el.set_attribute("x1", &line.x1.to_string())?;
		el.set_attribute("y1", &line.y1.to_string())?;
		el.set_attribute("x2", &line.x2.to_string())?;
		el.set_attribute("y2", &line.y2.to_string())?;
		el.set_attribute("stroke", &params.link_color)?;
		el.set_attribute("stroke-width", &width)?;
		svg.append_child(&el)?;
	}
	Ok(())
}

fn draw_nodes(
	scene: &Scene,
	params: &RenderParams,
	svg: &Element,
	document: &Document,
) -> Result<(), JsValue> {
	let radius = params.node_radius.to_string();
	for node in &scene.nodes {
		let group = document.create_element_ns(Some(SVG_NS), "g")?;
		let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
		circle.set_attribute("cx", &node.x.to_string())?;
		circle.set_attribute("cy", &node.y.to_string())?;
		circle.set_attribute("r", &radius)?;
		circle.set_attribute("fill", &params.node_color)?;
		circle.set_attribute(HREF_ATTR, &node.href)?;

		let title = document.create_element_ns(Some(SVG_NS), "title")?;
		title.set_text_content(Some(&node.label));

		group.append_child(&circle)?;
		group.append_child(&title)?;
		svg.append_child(&group)?;
	}
	Ok(())
}

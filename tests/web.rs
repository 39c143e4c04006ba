//! Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use mini_graph::{
	Bounds, DocLinker, GraphData, LayoutParams, MiniGraph, MiniGraphConfig, RenderParams, Scene,
	SiteParams, Simulation, clicked_href, load_dataset, paint,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn svg_host() -> Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let svg = document
		.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
		.unwrap();
	document.body().unwrap().append_child(&svg).unwrap();
	svg
}

fn dataset() -> GraphData {
	serde_json::from_str(
		r#"{
			"nodes": [{"id": "a", "title": "Paper A"}, {"id": "b.md"}],
			"links": [{"source": "a", "target": "b.md"}, {"source": "a", "target": "ghost"}]
		}"#,
	)
	.unwrap()
}

fn scene() -> Scene {
	let mut rng = SmallRng::seed_from_u64(4);
	let bounds = Bounds {
		width: 260.0,
		height: 220.0,
	};
	let mut sim = Simulation::new(&dataset(), bounds, LayoutParams::default(), &mut rng);
	sim.step();
	Scene::build(&sim, &RenderParams::default(), &DocLinker::new("", &SiteParams::default()))
}

#[wasm_bindgen_test]
fn paints_resolved_links_and_every_node() {
	let svg = svg_host();
	paint(&scene(), &RenderParams::default(), &svg).unwrap();

	assert_eq!(svg.get_elements_by_tag_name("line").length(), 1);
	let circles = svg.get_elements_by_tag_name("circle");
	assert_eq!(circles.length(), 2);
	let first = circles.item(0).unwrap();
	assert_eq!(first.get_attribute("data-href").as_deref(), Some("papers/a.md"));
	assert_eq!(first.get_attribute("r").as_deref(), Some("3.2"));

	let titles = svg.get_elements_by_tag_name("title");
	assert_eq!(titles.item(0).unwrap().text_content().as_deref(), Some("Paper A"));
	assert_eq!(titles.item(1).unwrap().text_content().as_deref(), Some("b.md"));
}

#[wasm_bindgen_test]
fn repaint_replaces_the_previous_frame() {
	let svg = svg_host();
	let scene = scene();
	paint(&scene, &RenderParams::default(), &svg).unwrap();
	paint(&scene, &RenderParams::default(), &svg).unwrap();
	assert_eq!(svg.get_elements_by_tag_name("g").length(), 2);
	assert_eq!(svg.child_element_count(), 3);
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn bubbling_click() -> Event {
	let init = EventInit::new();
	init.set_bubbles(true);
	Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
async fn load_dataset_reports_a_missing_file() {
	let href = web_sys::window().unwrap().location().href().unwrap();
	let result = load_dataset(&href, "definitely-missing-graph.json").await;
	assert!(result.is_err());
}

#[wasm_bindgen_test]
async fn widget_stays_empty_when_the_dataset_is_missing() {
	let document = web_sys::window().unwrap().document().unwrap();
	let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
	document.body().unwrap().append_child(&host).unwrap();

	let config = MiniGraphConfig {
		site: SiteParams {
			data_file: "definitely-missing-graph.json".into(),
			..SiteParams::default()
		},
		..MiniGraphConfig::default()
	};
	let _mounted = leptos::mount::mount_to(host.clone(), move || view! { <MiniGraph config=config /> });
	sleep(500).await;

	let svg = host.query_selector("#mini-graph").unwrap().expect("svg is mounted");
	assert!(svg.get_attribute("viewBox").is_some());
	assert_eq!(svg.child_element_count(), 0);

	let wrap = host.query_selector("#mini-graph-wrap").unwrap().expect("wrapper is mounted");
	let children = wrap.children();
	let tags: Vec<_> = (0..children.length())
		.filter_map(|i| children.item(i))
		.map(|el| el.tag_name().to_lowercase())
		.collect();
	assert_eq!(tags, vec!["style", "div", "svg", "div"]);
	assert!(wrap.query_selector(".title").unwrap().is_some());
	assert!(wrap.query_selector(".legend").unwrap().is_some());
}

#[wasm_bindgen_test]
fn clicks_bubble_up_to_the_node_target() {
	let svg = svg_host();
	paint(&scene(), &RenderParams::default(), &svg).unwrap();

	let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
	let record = seen.clone();
	let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		record.borrow_mut().push(clicked_href(&ev));
	});
	svg.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
		.unwrap();

	let circle = svg.get_elements_by_tag_name("circle").item(1).unwrap();
	circle.dispatch_event(&bubbling_click()).unwrap();
	let line = svg.get_elements_by_tag_name("line").item(0).unwrap();
	line.dispatch_event(&bubbling_click()).unwrap();
	svg.dispatch_event(&bubbling_click()).unwrap();

	assert_eq!(*seen.borrow(), vec![Some("papers/b.md".to_owned()), None, None]);
}

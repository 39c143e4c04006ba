use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{Element, MouseEvent, Window};

use super::config::{MiniGraphConfig, RenderParams};
use super::error::{self, LoadError};
use super::layout::{Bounds, Simulation};
use super::loader::load_dataset;
use super::nav::{DocLinker, base_path};
use super::render;
use super::scene::Scene;
use super::state::MiniGraphState;

/// Filled once the dataset has loaded.
type WidgetSlot = Rc<RefCell<Option<Rc<Widget>>>>;

/// Link graph that fetches the site's dataset, lays it out and draws it as SVG.
///
/// Stays empty when the dataset cannot be fetched. In fullscreen mode nodes
/// can be dragged and the canvas follows the window size.
#[component]
pub fn MiniGraph(
	#[prop(default = MiniGraphConfig::default())] config: MiniGraphConfig,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let stopped = Arc::new(AtomicBool::new(false));
	let slot: WidgetSlot = Rc::new(RefCell::new(None));
	let css = render::hover_css(&config.render);
	let (title, legend) = (config.title.clone(), config.legend.clone());
	let wrap_class = if fullscreen { "fullscreen" } else { "" };
	let (stopped_init, slot_init) = (stopped.clone(), slot.clone());
	let (default_width, default_height) = (config.default_width, config.default_height);

	Effect::new(move |_| {
		let Some(svg) = svg_ref.get() else {
			return;
		};
		let svg: Element = svg.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let bounds = canvas_bounds(&window, &svg, &config, fullscreen);
		set_view_box(&svg, bounds);

		let (pathname, href) = match page_location(&window) {
			Ok(location) => location,
			Err(err) => {
				debug!("mini graph disabled: {err}");
				return;
			}
		};
		let linker = DocLinker::new(
			base_path(&pathname, &config.site.nested_markers),
			&config.site,
		);
		let (config, stopped, slot) = (config.clone(), stopped_init.clone(), slot_init.clone());

		spawn_local(async move {
			let data = match load_dataset(&href, &linker.data_path(&config.site.data_file)).await {
				Ok(data) => data,
				Err(err) => {
					debug!("mini graph dataset unavailable: {err}");
					return;
				}
			};
			if stopped.load(Ordering::Relaxed) {
				return;
			}

			let mut rng = seeded_rng(config.seed);
			let simulation = Simulation::new(&data, bounds, config.layout.clone(), &mut rng);
			info!(
				"mini graph loaded {} nodes, {} links ({} unresolved)",
				data.nodes.len(),
				data.links.len(),
				simulation.unresolved_links()
			);

			let mut state = MiniGraphState::new(simulation);
			state.start();
			let widget = Rc::new(Widget {
				state: RefCell::new(state),
				render: config.render,
				linker,
				svg,
				stopped,
				dragged: Cell::new(false),
			});
			widget.draw(&widget.state.borrow());
			*slot.borrow_mut() = Some(widget.clone());
			schedule(widget);
		});
	});

	on_cleanup(move || stopped.store(true, Ordering::Relaxed));

	if fullscreen {
		let slot = slot.clone();
		let handle = window_event_listener(ev::resize, move |_| {
			let Some(widget) = slot.borrow().clone() else {
				return;
			};
			let Some(window) = web_sys::window() else {
				return;
			};
			let size = |v: Result<wasm_bindgen::JsValue, _>, fallback: f64| {
				v.ok().and_then(|v| v.as_f64()).filter(|v| *v > 0.0).unwrap_or(fallback)
			};
			widget.resize(Bounds {
				width: size(window.inner_width(), default_width),
				height: size(window.inner_height(), default_height),
			});
		});
		on_cleanup(move || handle.remove());
	}

	let slot_md = slot.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if !fullscreen {
			return;
		}
		let Some(widget) = slot_md.borrow().clone() else {
			return;
		};
		if widget.start_drag(&ev) {
			ev.prevent_default();
			widget.reheat();
		}
	};

	let slot_mm = slot.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(widget) = slot_mm.borrow().clone() else {
			return;
		};
		if widget.drag_to(&ev) {
			widget.reheat();
		}
	};

	let slot_mu = slot.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(widget) = slot_mu.borrow().as_ref() {
			widget.end_drag();
		}
	};

	let slot_ml = slot.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(widget) = slot_ml.borrow().as_ref() {
			widget.end_drag();
		}
	};

	let on_click = move |ev: MouseEvent| {
		// the click that ends a drag is not a navigation
		if let Some(widget) = slot.borrow().as_ref() {
			if widget.dragged.replace(false) {
				return;
			}
		}
		if let Some(href) = render::clicked_href(&ev) {
			navigate(&href);
		}
	};

	view! {
		<div id="mini-graph-wrap" class=wrap_class>
			<style>{css}</style>
			<div class="title">{title}</div>
			<svg
				node_ref=svg_ref
				id="mini-graph"
				on:click=on_click
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
			></svg>
			<div class="legend">{legend}</div>
		</div>
	}
}

/// A mounted, loaded graph. Owned by the component's handlers and by the
/// pending animation frame, if any.
struct Widget {
	state: RefCell<MiniGraphState>,
	render: RenderParams,
	linker: DocLinker,
	svg: Element,
	stopped: Arc<AtomicBool>,
	dragged: Cell<bool>,
}

impl Widget {
	/// One frame: step, redraw, and report whether another frame is wanted.
	fn advance(&self) -> bool {
		let mut state = self.state.borrow_mut();
		if self.stopped.load(Ordering::Relaxed) {
			state.stop();
		}
		if !state.tick() {
			return false;
		}
		self.draw(&state);
		if !state.is_running() {
			debug!("mini graph frame loop idle after {} steps", state.steps_taken());
		}
		state.is_running()
	}

	fn draw(&self, state: &MiniGraphState) {
		let scene = Scene::build(state.simulation(), &self.render, &self.linker);
		if let Err(err) = render::paint(&scene, &self.render, &self.svg) {
			warn!("mini graph redraw failed: {err:?}");
		}
	}

	/// Restarts the frame loop if the layout had settled.
	fn reheat(self: &Rc<Self>) {
		let woke = self.state.borrow_mut().reheat();
		if woke {
			schedule(self.clone());
		}
	}

	fn resize(self: &Rc<Self>, bounds: Bounds) {
		set_view_box(&self.svg, bounds);
		self.state.borrow_mut().simulation_mut().resize(bounds);
		self.reheat();
	}

	/// Grabs the node under the pointer. Returns whether one was hit.
	fn start_drag(&self, ev: &MouseEvent) -> bool {
		self.dragged.set(false);
		let (x, y) = self.pointer(ev);
		let mut state = self.state.borrow_mut();
		let Some(index) = state.simulation().node_at(x, y, self.render.hit_radius) else {
			return false;
		};
		state.simulation_mut().pin(index, x, y);
		true
	}

	fn drag_to(&self, ev: &MouseEvent) -> bool {
		let Some(index) = self.state.borrow().simulation().pinned() else {
			return false;
		};
		let (x, y) = self.pointer(ev);
		self.state.borrow_mut().simulation_mut().pin(index, x, y);
		self.dragged.set(true);
		true
	}

	fn end_drag(&self) {
		self.state.borrow_mut().simulation_mut().release();
	}

	/// Pointer position in canvas units.
	fn pointer(&self, ev: &MouseEvent) -> (f64, f64) {
		let rect = self.svg.get_bounding_client_rect();
		let bounds = self.state.borrow().simulation().bounds();
		let scale = |extent: f64, shown: f64| if shown > 0.0 { extent / shown } else { 1.0 };
		let (x, y) = (
			(ev.client_x() as f64 - rect.left()) * scale(bounds.width, rect.width()),
			(ev.client_y() as f64 - rect.top()) * scale(bounds.height, rect.height()),
		);
		(x.clamp(0.0, bounds.width.max(0.0)), y.clamp(0.0, bounds.height.max(0.0)))
	}
}

/// Queues one animation frame; the frame queues the next while the layout runs.
/// Nothing holds the widget once the loop ends.
fn schedule(widget: Rc<Widget>) {
	request_animation_frame(move || {
		if widget.advance() {
			schedule(widget);
		}
	});
}

fn navigate(href: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(err) = window.location().set_href(href) {
		warn!("mini graph: navigation to {href} failed: {err:?}");
	}
}

fn set_view_box(svg: &Element, bounds: Bounds) {
	if let Err(err) = svg.set_attribute(
		"viewBox",
		&format!("0 0 {} {}", bounds.width, bounds.height),
	) {
		warn!("mini graph: could not set viewBox: {err:?}");
	}
}

fn canvas_bounds(
	window: &Window,
	svg: &Element,
	config: &MiniGraphConfig,
	fullscreen: bool,
) -> Bounds {
	let size = |measured: Option<f64>, fallback: f64| measured.filter(|v| *v > 0.0).unwrap_or(fallback);
	if fullscreen {
		let (w, h) = (
			window.inner_width().ok().and_then(|v| v.as_f64()),
			window.inner_height().ok().and_then(|v| v.as_f64()),
		);
		Bounds {
			width: size(w, config.default_width),
			height: size(h, config.default_height),
		}
	} else {
		Bounds {
			width: size(Some(svg.client_width() as f64), config.default_width),
			height: size(Some(svg.client_height() as f64), config.default_height),
		}
	}
}

/// `(pathname, href)` of the current page.
fn page_location(window: &Window) -> error::Result<(String, String)> {
	let location = window.location();
	match (location.pathname(), location.href()) {
		(Ok(pathname), Ok(href)) => Ok((pathname, href)),
		_ => Err(LoadError::NoLocation),
	}
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
	let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
	SmallRng::seed_from_u64(seed)
}

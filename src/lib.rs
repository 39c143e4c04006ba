//! Leptos client-side link graph for documentation sites.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::wasm_bindgen;

// Modules
mod components;
mod pages;

pub use crate::components::mini_graph::{
	Bounds, DocLinker, Endpoint, GraphData, GraphLink, GraphNode, LayoutNode, LayoutParams,
	LoadError, MiniGraph, MiniGraphConfig, MiniGraphProps, RenderParams, Scene, SceneLine,
	SceneNode, SiteParams, Simulation, clicked_href, load_dataset, paint,
};

// Top-Level pages
use crate::pages::graph::GraphPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Mounts the bare widget onto `document.body` of an existing static page.
#[wasm_bindgen]
pub fn mount_mini_graph() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <MiniGraph /> });
}

/// An app router with the docs home, the full-page graph, and a 404 page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Document graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/graph") view=GraphPage />
			</Routes>
		</Router>
	}
}

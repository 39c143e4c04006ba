use leptos::prelude::*;

use crate::components::mini_graph::{MiniGraph, MiniGraphConfig};

/// Full-window view of the whole document graph.
#[component]
pub fn GraphPage() -> impl IntoView {
	let config = MiniGraphConfig::full_page();

	view! {
		<div class="fullscreen-graph">
			<a class="back-link" href="/">"← back"</a>
			<MiniGraph config=config fullscreen=true />
		</div>
	}
}

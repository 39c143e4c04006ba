use leptos::prelude::*;

use crate::components::mini_graph::MiniGraph;

/// Docs index with the link graph pinned to the corner.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="docs-index">
			<h1>"Documents"</h1>
			<p>
				"Each paper links to the papers it cites. The graph in the corner shows those links; "
				"click a node to open the paper."
			</p>
			<p><a href="/graph">"Open the full graph"</a></p>
		</main>
		<MiniGraph />
	}
}

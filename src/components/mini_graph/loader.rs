use url::Url;

use super::error::Result;
use super::types::GraphData;

/// Resolves `relative` (e.g. `../graph.json`) against the page URL.
pub fn dataset_url(page_href: &str, relative: &str) -> Result<Url> {
	Ok(Url::parse(page_href)?.join(relative)?)
}

/// Fetches and decodes the dataset. Non-2xx responses are errors.
pub async fn load_dataset(page_href: &str, relative: &str) -> Result<GraphData> {
	let url = dataset_url(page_href, relative)?;
	let data = reqwest::get(url)
		.await?
		.error_for_status()?
		.json::<GraphData>()
		.await?;
	Ok(data)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mini_graph::error::LoadError;

	#[test]
	fn joins_against_the_page() {
		let url = dataset_url("https://docs.example.org/site/papers/p1.html", "../graph.json")
			.expect("valid url");
		assert_eq!(url.as_str(), "https://docs.example.org/site/graph.json");

		let url = dataset_url("https://docs.example.org/site/index.html?x=1", "graph.json")
			.expect("valid url");
		assert_eq!(url.as_str(), "https://docs.example.org/site/graph.json");
	}

	#[test]
	fn rejects_a_relative_page_href() {
		assert!(matches!(
			dataset_url("index.html", "graph.json"),
			Err(LoadError::Url(_))
		));
	}
}

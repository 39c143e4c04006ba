use super::config::SiteParams;

/// Relative prefix from the current page back to the site root.
pub fn base_path(pathname: &str, nested_markers: &[String]) -> &'static str {
	if nested_markers.iter().any(|m| pathname.contains(m.as_str())) {
		"../"
	} else {
		""
	}
}

/// Builds site-relative links for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct DocLinker {
	base: &'static str,
	docs_dir: String,
	extension: String,
}

impl DocLinker {
	/// `base` comes from [`base_path`].
	pub fn new(base: &'static str, site: &SiteParams) -> Self {
		Self {
			base,
			docs_dir: site.docs_dir.clone(),
			extension: site.extension.clone(),
		}
	}

	/// Where clicking the node `id` goes.
	pub fn doc_href(&self, id: &str) -> String {
		if id.ends_with(&self.extension) {
			format!("{}{}/{}", self.base, self.docs_dir, id)
		} else {
			format!("{}{}/{}{}", self.base, self.docs_dir, id, self.extension)
		}
	}

	/// Where `file` at the site root is, relative to this page.
	pub fn data_path(&self, file: &str) -> String {
		format!("{}{}", self.base, file)
	}
}

/// Why the widget has nothing to draw.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// The page has no readable `location`.
	#[error("page location is unavailable")]
	NoLocation,
	/// The dataset path did not form a URL against the page.
	#[error("invalid dataset url: {0}")]
	Url(#[from] url::ParseError),
	/// Network failure, non-2xx status, or undecodable JSON.
	#[error("dataset request failed: {0}")]
	Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

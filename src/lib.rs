#![doc(html_root_url = "https://docs.rs/dialox-dom/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod error;
pub mod options;
pub mod portal;
pub mod registry;

pub use error::{OptionsError, PortalError};
pub use options::{LayerOptions, PortalOptions};
pub use portal::{Portal, Target};
pub use registry::{PortalRegistry, DEFAULT_PORTAL_CLASS};

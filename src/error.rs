use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a [`Portal`](`crate::Portal`) could not be mounted or the default portal could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
	#[error("Dialox portal creation failed: Element of selector {selector:?} could not be found in the DOM")]
	TargetNotFound { selector: String },

	#[error("Dialox portal creation failed: Invalid selector {selector:?}: {message}")]
	InvalidSelector { selector: String, message: String },

	#[error("Dialox portal creation failed: No document found for the current window")]
	NoDocument,

	#[error("Dialox portal creation failed: The document has no body")]
	NoBody,

	#[error("Dialox portal creation failed: {operation} threw: {message}")]
	Dom { operation: &'static str, message: String },
}

impl PortalError {
	pub(crate) fn dom(operation: &'static str, error: &JsValue) -> Self {
		Self::Dom {
			operation,
			message: describe_js_error(error),
		}
	}
}

/// Why a JavaScript options object was rejected by [`PortalOptions::from_js`](`crate::PortalOptions::from_js`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
	#[error("Unknown portal option `{path}`")]
	UnknownKey { path: String },

	#[error("Malformed portal option `{path}`: expected {expected}")]
	Malformed { path: String, expected: &'static str },
}

/// Renders a thrown JavaScript value for use in an error message.
///
/// `Error` instances (including `DOMException`s) are rendered as `"{name}: {message}"`.
pub(crate) fn describe_js_error(error: &JsValue) -> String {
	if let Some(error) = error.dyn_ref::<js_sys::Error>() {
		return format!("{}: {}", String::from(error.name()), String::from(error.message()));
	}
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

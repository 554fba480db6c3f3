//! Portal configuration.
//!
//! Options are plain Rust values with fixed defaults. Options coming from JavaScript can be
//! checked and converted with [`PortalOptions::from_js`], which rejects unknown keys and wrong shapes
//! instead of passing them through.

use crate::error::OptionsError;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Configuration of a single generated layer (overlay or content container).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerOptions {
	/// CSS class(es) added to the layer's element, separated by whitespace.
	///
	/// Empty (the default) means no class is added.
	pub class_name: String,
}

impl LayerOptions {
	/// Layer options that add `class_name` to the layer's element.
	#[must_use]
	pub fn with_class(class_name: impl Into<String>) -> Self {
		Self { class_name: class_name.into() }
	}

	/// The individual classes in [`class_name`](`LayerOptions::class_name`).
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.class_name.split_whitespace()
	}

	fn from_js(value: &JsValue, path: &str) -> Result<Self, OptionsError> {
		let mut layer = Self::default();
		let object = match as_object(value, path)? {
			Some(object) => object,
			None => return Ok(layer),
		};

		for key in keys(object, path)? {
			let path = format!("{}.{}", path, key);
			match key.as_str() {
				"className" => {
					let class_name = get(object, &key, &path)?;
					if class_name.is_undefined() || class_name.is_null() {
						continue;
					}
					layer.class_name = class_name.as_string().ok_or(OptionsError::Malformed { path, expected: "a string" })?;
				}
				_ => return Err(OptionsError::UnknownKey { path }),
			}
		}
		Ok(layer)
	}
}

/// Configuration of a [`Portal`](`crate::Portal`).
///
/// The JavaScript shape is `{ overlay?: { className?: string }, content?: { className?: string } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalOptions {
	/// The backdrop layer.
	pub overlay: LayerOptions,
	/// The container for dialog content.
	pub content: LayerOptions,
}

impl PortalOptions {
	/// Same as [`PortalOptions::default`]: no extra classes on either layer.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the overlay's classes.
	#[must_use]
	pub fn with_overlay_class(mut self, class_name: impl Into<String>) -> Self {
		self.overlay = LayerOptions::with_class(class_name);
		self
	}

	/// Replaces the content container's classes.
	#[must_use]
	pub fn with_content_class(mut self, class_name: impl Into<String>) -> Self {
		self.content = LayerOptions::with_class(class_name);
		self
	}

	/// Checks and converts a JavaScript options object.
	///
	/// `undefined` and `null` (at any level) stand for the defaults.
	///
	/// # Errors
	///
	/// Iff `value` contains a key other than `overlay`, `content` or their `className`,
	/// or if any recognised value has the wrong type.
	pub fn from_js(value: &JsValue) -> Result<Self, OptionsError> {
		let mut options = Self::default();
		let object = match as_object(value, "options")? {
			Some(object) => object,
			None => return Ok(options),
		};

		for key in keys(object, "options")? {
			let value = get(object, &key, &key)?;
			match key.as_str() {
				"overlay" => options.overlay = LayerOptions::from_js(&value, &key)?,
				"content" => options.content = LayerOptions::from_js(&value, &key)?,
				_ => return Err(OptionsError::UnknownKey { path: key }),
			}
		}
		Ok(options)
	}
}

fn as_object<'a>(value: &'a JsValue, path: &str) -> Result<Option<&'a Object>, OptionsError> {
	if value.is_undefined() || value.is_null() {
		Ok(None)
	} else if value.is_object() {
		// `instanceof Object` would reject objects created with `Object.create(null)`.
		Ok(Some(value.unchecked_ref()))
	} else {
		Err(OptionsError::Malformed {
			path: path.to_owned(),
			expected: "an object",
		})
	}
}

fn keys(object: &Object, path: &str) -> Result<Vec<String>, OptionsError> {
	Object::keys(object)
		.iter()
		.map(|key| {
			key.as_string().ok_or_else(|| OptionsError::Malformed {
				path: path.to_owned(),
				expected: "string keys",
			})
		})
		.collect()
}

fn get(object: &Object, key: &str, path: &str) -> Result<JsValue, OptionsError> {
	Reflect::get(object, &JsValue::from_str(key)).map_err(|_| OptionsError::Malformed {
		path: path.to_owned(),
		expected: "a readable property",
	})
}

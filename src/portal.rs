use crate::{
	error::{describe_js_error, PortalError},
	options::{LayerOptions, PortalOptions},
};
use core::fmt::{self, Display, Formatter};
use tracing::{debug, error, instrument, trace};
use web_sys::{Document, Element};

/// The surface a [`Portal`] attaches to.
#[derive(Debug, Clone)]
pub enum Target<'a> {
	/// An element that is already part of the document.
	Element(Element),
	/// A CSS selector, resolved to the first matching element in the document.
	Selector(&'a str),
}

impl From<Element> for Target<'_> {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<&Element> for Target<'_> {
	fn from(element: &Element) -> Self {
		Self::Element(element.clone())
	}
}

impl<'a> From<&'a str> for Target<'a> {
	fn from(selector: &'a str) -> Self {
		Self::Selector(selector)
	}
}

impl Display for Target<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Target::Selector(selector) => write!(f, "{:?}", selector),
			Target::Element(element) if cfg!(feature = "dangerous-logging") => write!(f, "{:?}", element),
			Target::Element(element) => write!(f, "<{}>", element.tag_name()),
		}
	}
}

/// A dialog mounting point: a backdrop and a content container attached to a surface element.
///
/// The surface is only referenced. The two generated `<div>`s belong to the [`Portal`]
/// and can be taken out of the document again with [`Portal::detach`].
///
/// A [`Portal`] value only exists fully constructed. Failed mounts return a [`PortalError`] instead.
#[derive(Debug)]
pub struct Portal {
	element: Element,
	overlay: Element,
	content: Element,
	options: PortalOptions,
}

impl Portal {
	/// Resolves `target` in `document` and appends a new overlay, then a new content container, to it.
	///
	/// Failures are logged at error level in addition to being returned.
	/// No nodes are left in the document when this fails.
	///
	/// # Errors
	///
	/// - [`PortalError::TargetNotFound`] iff `target` is a selector that matches no element.
	/// - [`PortalError::InvalidSelector`] iff `target` is a selector the DOM can't parse.
	/// - [`PortalError::Dom`] if creating or appending the layers throws.
	pub fn mount<'a>(document: &Document, target: impl Into<Target<'a>>, options: PortalOptions) -> Result<Self, PortalError> {
		Self::mount_target(document, target.into(), options)
	}

	#[instrument(name = "mount", skip(document, target), fields(target = %target))]
	fn mount_target(document: &Document, target: Target<'_>, options: PortalOptions) -> Result<Self, PortalError> {
		let result = Self::try_mount(document, target, options);
		match &result {
			Ok(portal) => debug!("Mounted portal on {}.", Target::Element(portal.element.clone())),
			Err(portal_error) => error!("{}", portal_error),
		}
		result
	}

	fn try_mount(document: &Document, target: Target<'_>, options: PortalOptions) -> Result<Self, PortalError> {
		let element = match target {
			Target::Element(element) => element,
			Target::Selector(selector) => resolve(document, selector)?,
		};

		let overlay = create_layer(document, &options.overlay)?;
		let content = create_layer(document, &options.content)?;

		element.append_child(&overlay).map_err(|error| PortalError::dom("Node.appendChild", &error))?;
		if let Err(error) = element.append_child(&content) {
			overlay.remove();
			return Err(PortalError::dom("Node.appendChild", &error));
		}

		Ok(Self { element, overlay, content, options })
	}

	/// The surface this portal is attached to.
	#[must_use]
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// The backdrop layer.
	#[must_use]
	pub fn overlay(&self) -> &Element {
		&self.overlay
	}

	/// The container for dialog content.
	#[must_use]
	pub fn content(&self) -> &Element {
		&self.content
	}

	/// The options this portal was mounted with.
	#[must_use]
	pub fn options(&self) -> &PortalOptions {
		&self.options
	}

	/// Whether both the overlay and the content container are still children of the surface.
	#[must_use]
	pub fn is_attached(&self) -> bool {
		self.overlay.parent_element().as_ref() == Some(&self.element) && self.content.parent_element().as_ref() == Some(&self.element)
	}

	/// Removes the overlay and the content container from the document.
	///
	/// The surface stays where it is. Calling this again has no effect.
	#[instrument(skip(self), fields(element = %Target::Element(self.element.clone())))]
	pub fn detach(&self) {
		self.overlay.remove();
		self.content.remove();
		trace!("Detached portal layers.");
	}

	/// Appends the overlay and then the content container to the surface again, e.g. after [`Portal::detach`].
	///
	/// # Errors
	///
	/// [`PortalError::Dom`] if appending throws.
	#[instrument(skip(self), fields(element = %Target::Element(self.element.clone())))]
	pub fn reattach(&self) -> Result<(), PortalError> {
		for layer in [&self.overlay, &self.content] {
			self.element.append_child(layer).map_err(|error| PortalError::dom("Node.appendChild", &error))?;
		}
		trace!("Reattached portal layers.");
		Ok(())
	}
}

fn resolve(document: &Document, selector: &str) -> Result<Element, PortalError> {
	match document.query_selector(selector) {
		Ok(Some(element)) => Ok(element),
		Ok(None) => Err(PortalError::TargetNotFound { selector: selector.to_owned() }),
		Err(error) => Err(PortalError::InvalidSelector {
			selector: selector.to_owned(),
			message: describe_js_error(&error),
		}),
	}
}

fn create_layer(document: &Document, layer: &LayerOptions) -> Result<Element, PortalError> {
	let element = document.create_element("div").map_err(|error| PortalError::dom("Document.createElement", &error))?;
	let class_list = element.class_list();
	for class in layer.classes() {
		class_list.add_1(class).map_err(|error| PortalError::dom("DOMTokenList.add", &error))?;
	}
	trace!(classes = %layer.class_name, "Created layer.");
	Ok(element)
}

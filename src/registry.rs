use crate::{
	error::PortalError,
	options::PortalOptions,
	portal::{Portal, Target},
};
use hashbrown::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument, trace, warn};
use web_sys::{Document, Node};

/// CSS class of the container element created for the [default portal](`PortalRegistry::default_portal`).
pub const DEFAULT_PORTAL_CLASS: &str = "dialox-portal";

/// Name-keyed table of [`Portal`]s for one document, plus a lazily created default portal.
///
/// Create one per application (or per test) and pass it to where portals are needed.
/// Portals are handed out as [`Rc`]s, since the DOM is single-threaded anyway.
#[derive(Debug)]
pub struct PortalRegistry {
	document: Document,
	default: Option<Rc<Portal>>,
	by_name: HashMap<String, Rc<Portal>>,
}

impl PortalRegistry {
	#[must_use]
	pub fn new(document: Document) -> Self {
		Self {
			document,
			default: None,
			by_name: HashMap::new(),
		}
	}

	/// Creates a registry for the current window's document.
	///
	/// # Errors
	///
	/// [`PortalError::NoDocument`] iff there is no window or it has no document.
	pub fn for_window() -> Result<Self, PortalError> {
		let document = web_sys::window().and_then(|window| window.document()).ok_or(PortalError::NoDocument)?;
		Ok(Self::new(document))
	}

	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Retrieves the default portal, creating it first if necessary.
	///
	/// On first use, this appends a `<div class="dialox-portal">` to the document's body and mounts a portal with default options on it.
	/// Later calls return the same [`Portal`], and nothing more is added to the document.
	/// If its layers or its container were taken out of the document in the meantime, they are put back first.
	///
	/// # Errors
	///
	/// [`PortalError::NoBody`] iff the default portal doesn't exist yet and the document has no body.
	/// [`PortalError::Dom`] if the DOM throws while setting it up or reattaching it. In both cases, a later call tries again.
	#[instrument(skip(self))]
	pub fn default_portal(&mut self) -> Result<Rc<Portal>, PortalError> {
		if let Some(default) = &self.default {
			if !default.is_attached() {
				warn!("Default portal was detached. Reattaching it.");
				default.reattach()?;
			}
			if default.element().parent_node().is_none() {
				let body = self.document.body().ok_or(PortalError::NoBody)?;
				body.append_child(default.element()).map_err(|error| PortalError::dom("Node.appendChild", &error))?;
			}
			return Ok(default.clone());
		}

		let body = self.document.body().ok_or(PortalError::NoBody)?;
		let container = self
			.document
			.create_element("div")
			.map_err(|error| PortalError::dom("Document.createElement", &error))?;
		container.set_class_name(DEFAULT_PORTAL_CLASS);
		body.append_child(&container).map_err(|error| PortalError::dom("Node.appendChild", &error))?;

		let portal = match Portal::mount(&self.document, &container, PortalOptions::default()) {
			Ok(portal) => Rc::new(portal),
			Err(error) => {
				container.remove();
				return Err(error);
			}
		};
		debug!("Created default portal.");
		Ok(self.default.insert(portal).clone())
	}

	/// Mounts a new [`Portal`] on `target` and registers it as `name`.
	///
	/// If a portal was already registered under `name`, it is replaced and its layers are [detached](`Portal::detach`).
	/// Existing [`Rc`]s to it stay valid.
	///
	/// If the new portal's surface lies inside the previous portal's layers, those layers are left in place
	/// instead, since detaching them would take the new portal out of the document too.
	///
	/// # Errors
	///
	/// See [`Portal::mount`]. Nothing is registered or replaced in that case.
	#[instrument(skip(self, target))]
	pub fn create<'a>(&mut self, name: &str, target: impl Into<Target<'a>>, options: PortalOptions) -> Result<Rc<Portal>, PortalError> {
		let portal = Rc::new(Portal::mount(&self.document, target, options)?);
		if let Some(previous) = self.by_name.insert(name.to_owned(), portal.clone()) {
			let surface: &Node = portal.element().as_ref();
			if previous.overlay().contains(Some(surface)) || previous.content().contains(Some(surface)) {
				warn!("Replaced portal {:?}. Its layers contain the new portal and stay attached.", name);
			} else {
				warn!("Replaced portal {:?}. Its layers are detached.", name);
				previous.detach();
			}
		}
		Ok(portal)
	}

	/// Retrieves the portal registered as `name`, if any.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<Rc<Portal>> {
		let portal = self.by_name.get(name).cloned();
		trace!(name, found = portal.is_some(), "Portal lookup.");
		portal
	}

	/// Unregisters the portal registered as `name` and [detaches](`Portal::detach`) it.
	#[instrument(skip(self))]
	pub fn remove(&mut self, name: &str) -> Option<Rc<Portal>> {
		let portal = self.by_name.remove(name)?;
		portal.detach();
		Some(portal)
	}

	/// The number of named portals. The default portal isn't counted.
	#[must_use]
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// The names of all registered portals, in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.by_name.keys().map(String::as_str)
	}
}

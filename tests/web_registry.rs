use dialox_dom::{PortalError, PortalOptions, PortalRegistry, DEFAULT_PORTAL_CLASS};
use std::rc::Rc;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Node};

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::{body, capture_logs, fresh_document, surface};

#[wasm_bindgen_test]
fn distinct_names() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document);

	let first = registry.create("first", &app, PortalOptions::new()).unwrap();
	let second = registry.create("second", &app, PortalOptions::new()).unwrap();

	assert!(!Rc::ptr_eq(&first, &second));
	assert!(Rc::ptr_eq(&registry.get("first").unwrap(), &first));
	assert!(Rc::ptr_eq(&registry.get("second").unwrap(), &second));
	assert!(first.is_attached());
	assert!(second.is_attached());
	assert_eq!(app.children().length(), 4);

	assert_eq!(registry.len(), 2);
	let mut names: Vec<_> = registry.names().collect();
	names.sort_unstable();
	assert_eq!(names, ["first", "second"]);
}

#[wasm_bindgen_test]
fn unknown_name() {
	let registry = PortalRegistry::new(fresh_document());

	assert!(registry.get("nope").is_none());
	assert!(registry.is_empty());
}

#[wasm_bindgen_test]
fn default_portal_is_singleton() {
	let document = fresh_document();
	let mut registry = PortalRegistry::new(document.clone());

	let first = registry.default_portal().unwrap();
	let second = registry.default_portal().unwrap();
	let _third = registry.default_portal().unwrap();

	assert!(Rc::ptr_eq(&first, &second));
	let containers = document.get_elements_by_class_name(DEFAULT_PORTAL_CLASS);
	assert_eq!(containers.length(), 1);
	assert_eq!(containers.item(0).as_ref(), Some(first.element()));
	assert_eq!(first.element().parent_element().as_ref(), Some(&Element::from(body(&document))));
	assert!(first.is_attached());
	assert_eq!(first.options(), &PortalOptions::default());

	// The default portal isn't a named one.
	assert!(registry.is_empty());
}

#[wasm_bindgen_test]
fn default_portal_survives_detach() {
	let document = fresh_document();
	let mut registry = PortalRegistry::new(document.clone());

	let first = registry.default_portal().unwrap();
	first.detach();
	assert!(!first.is_attached());

	let second = registry.default_portal().unwrap();
	assert!(Rc::ptr_eq(&first, &second));
	assert!(second.is_attached());
	assert_eq!(second.element().children().length(), 2);
	assert_eq!(document.get_elements_by_class_name(DEFAULT_PORTAL_CLASS).length(), 1);
}

#[wasm_bindgen_test]
fn default_portal_survives_container_removal() {
	let document = fresh_document();
	let mut registry = PortalRegistry::new(document.clone());

	let first = registry.default_portal().unwrap();
	first.element().remove();

	let second = registry.default_portal().unwrap();
	assert!(Rc::ptr_eq(&first, &second));
	assert!(second.is_attached());
	assert_eq!(second.element().parent_element().as_ref(), Some(&Element::from(body(&document))));
	assert_eq!(document.get_elements_by_class_name(DEFAULT_PORTAL_CLASS).length(), 1);
}

#[wasm_bindgen_test]
fn missing_selector_registers_nothing() {
	let document = fresh_document();
	let mut registry = PortalRegistry::new(document);

	let error = registry.create("dialog", ".missing", PortalOptions::new()).unwrap_err();

	assert_eq!(error, PortalError::TargetNotFound { selector: ".missing".to_owned() });
	assert!(registry.get("dialog").is_none());
}

#[wasm_bindgen_test]
fn missing_selector_is_logged() {
	let document = fresh_document();
	let mut registry = PortalRegistry::new(document);

	let (result, logs) = capture_logs(|| registry.create("dialog", ".missing", PortalOptions::new()));

	assert!(result.is_err());
	assert!(
		logs.lines().any(|line| line.contains("ERROR") && line.contains(".missing") && line.contains("could not be found")),
		"{}",
		logs
	);
}

#[wasm_bindgen_test]
fn successful_create_logs_no_error() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document);

	let (result, logs) = capture_logs(|| registry.create("dialog", &app, PortalOptions::new()));

	assert!(result.is_ok());
	assert!(!logs.contains("ERROR"), "{}", logs);
}

#[wasm_bindgen_test]
fn failed_create_keeps_previous() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document);

	let previous = registry.create("dialog", &app, PortalOptions::new()).unwrap();
	registry.create("dialog", ".missing", PortalOptions::new()).unwrap_err();

	assert!(Rc::ptr_eq(&registry.get("dialog").unwrap(), &previous));
	assert!(previous.is_attached());
}

#[wasm_bindgen_test]
fn re_registration_replaces_and_detaches() {
	let document = fresh_document();
	let e1 = surface(&document, "e1");
	let e2 = surface(&document, "e2");
	let mut registry = PortalRegistry::new(document);

	let old = registry.create("x", &e1, PortalOptions::new()).unwrap();
	let new = registry.create("x", &e2, PortalOptions::new()).unwrap();

	let current = registry.get("x").unwrap();
	assert!(Rc::ptr_eq(&current, &new));
	assert_eq!(current.element(), &e2);
	assert_eq!(registry.len(), 1);

	// Still a valid value, but its layers are gone from the document.
	assert_eq!(old.element(), &e1);
	assert!(!old.is_attached());
	assert_eq!(e1.children().length(), 0);
	assert!(new.is_attached());
}

#[wasm_bindgen_test]
fn re_registration_inside_previous_content() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document.clone());

	let outer = registry.create("x", &app, PortalOptions::new()).unwrap();
	let inner = registry.create("x", outer.content(), PortalOptions::new()).unwrap();

	assert!(Rc::ptr_eq(&registry.get("x").unwrap(), &inner));
	assert!(outer.is_attached());
	assert!(inner.is_attached());
	let overlay: &Node = inner.overlay().as_ref();
	assert!(document.contains(Some(overlay)));
}

#[wasm_bindgen_test]
fn remove_detaches() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document);
	registry.create("dialog", &app, PortalOptions::new()).unwrap();

	let removed = registry.remove("dialog").unwrap();

	assert!(!removed.is_attached());
	assert!(registry.get("dialog").is_none());
	assert!(registry.remove("dialog").is_none());
}

#[wasm_bindgen_test]
fn login_end_to_end() {
	let document = fresh_document();
	let app = surface(&document, "app");
	let mut registry = PortalRegistry::new(document);

	let login = registry.create("login", "#app", PortalOptions::new().with_overlay_class("backdrop")).unwrap();

	assert_eq!(login.element(), &app);
	assert_eq!(login.overlay().parent_element().as_ref(), Some(&app));
	assert!(login.overlay().class_list().contains("backdrop"));
	assert!(Rc::ptr_eq(&registry.get("login").unwrap(), &login));
}

#[wasm_bindgen_test]
fn for_window() {
	let registry = PortalRegistry::for_window().unwrap();

	assert!(registry.document().body().is_some());
	assert!(registry.is_empty());
}

//! Mock DOM for browser-free testing
//!
//! Mirrors the calculator page: an `expression` line, a `result` line, an
//! optional `easter` indicator and a `keys` container of `button.key`
//! elements carrying `data-key` tokens.

use std::collections::HashMap;

/// CSS class toggled on the easter indicator while it is shown
pub const VISIBLE_CLASS: &str = "visible";

/// CSS class marking keypad buttons
pub const KEY_CLASS: &str = "key";

/// Attribute holding a button's dispatcher token
pub const DATA_KEY: &str = "data-key";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content.clear();
        self.text_content.push_str(text);
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// True for a keypad button
    #[must_use]
    pub fn is_key_button(&self) -> bool {
        self.tag == "button" && self.has_class(KEY_CLASS)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer activation on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press on the window
    KeyDown {
        /// The key name (`"7"`, `"Enter"`, `"Escape"`, ...)
        key: String,
        /// Whether the handler suppressed the platform default
        default_prevented: bool,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str, default_prevented: bool) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            default_prevented,
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    parents: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page without its keypad
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id("calculator")
                .with_class("calculator"),
            None,
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("expression")
                .with_class("expression")
                .with_text("0"),
            Some("calculator"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("result")
                .with_class("result"),
            Some("calculator"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("easter")
                .with_class("easter"),
            Some("calculator"),
        );
        dom.register_element(
            DomElement::new("div").with_id("keys").with_class("keys"),
            Some("calculator"),
        );
        dom
    }

    /// Registers an element under an optional parent. Elements without an ID
    /// are not addressable and are skipped.
    pub fn register_element(&mut self, element: DomElement, parent: Option<&str>) {
        if element.id.is_empty() {
            return;
        }
        if let Some(parent) = parent {
            self.parents.insert(element.id.clone(), parent.to_string());
            self.children
                .entry(parent.to_string())
                .or_default()
                .push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Removes an element and its descendants
    pub fn remove_element(&mut self, id: &str) {
        for child in self.children.remove(id).unwrap_or_default() {
            self.remove_element(&child);
        }
        if let Some(parent) = self.parents.remove(id) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|c| c != id);
            }
        }
        self.elements.remove(id);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// IDs of an element's children in insertion order
    #[must_use]
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// The nearest element, starting at `id` and walking up, that matches
    #[must_use]
    pub fn closest<F>(&self, id: &str, predicate: F) -> Option<&DomElement>
    where
        F: Fn(&DomElement) -> bool,
    {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let element = self.elements.get(node_id)?;
            if predicate(element) {
                return Some(element);
            }
            current = self.parents.get(node_id).map(String::as_str);
        }
        None
    }

    /// Records an event
    pub fn record_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds or removes a class by ID
    pub fn toggle_element_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.toggle_class(class, on);
        }
    }
}

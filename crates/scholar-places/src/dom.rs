//! Minimal model of the rendered surface the binding owns.
//!
//! Only what the binding touches is modelled: text inputs with `input`
//! listeners, and the container the geocoder node is mounted into. Handles
//! are `Rc`-shared because both the widget and the binding hold them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::widget::{GeocoderNode, GEOCODER_ROOT_CLASS};

/// Identifies one attached listener so it can be detached later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next(counter: &mut u64) -> Self {
        *counter += 1;
        Self(*counter)
    }
}

pub type InputListener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct TextInput {
    value: String,
    class_name: String,
    placeholder: Option<String>,
    disabled: bool,
    next_listener: u64,
    listeners: Vec<(ListenerId, InputListener)>,
}

/// Shared handle to a text input element.
#[derive(Clone, Default)]
pub struct InputHandle(Rc<RefCell<TextInput>>);

impl std::fmt::Debug for InputHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let input = self.0.borrow();
        f.debug_struct("InputHandle")
            .field("value", &input.value)
            .field("class_name", &input.class_name)
            .field("disabled", &input.disabled)
            .field("listeners", &input.listeners.len())
            .finish()
    }
}

impl InputHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(value: &str) -> Self {
        let handle = Self::new();
        handle.set_value(value);
        handle
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    /// Programmatic write; does not fire `input` listeners.
    pub fn set_value(&self, value: &str) {
        let mut input = self.0.borrow_mut();
        if input.value != value {
            value.clone_into(&mut input.value);
        }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    pub fn set_class_name(&self, class_name: &str) {
        class_name.clone_into(&mut self.0.borrow_mut().class_name);
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        self.0.borrow().placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: Option<&str>) {
        self.0.borrow_mut().placeholder = placeholder.map(ToOwned::to_owned);
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    pub fn add_input_listener(&self, listener: InputListener) -> ListenerId {
        let mut input = self.0.borrow_mut();
        let id = ListenerId::next(&mut input.next_listener);
        input.listeners.push((id, listener));
        id
    }

    /// Returns `false` if `id` was not attached.
    pub fn remove_input_listener(&self, id: ListenerId) -> bool {
        let mut input = self.0.borrow_mut();
        let before = input.listeners.len();
        input.listeners.retain(|(attached, _)| *attached != id);
        input.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    /// A user edit: replaces the text and fires every `input` listener.
    ///
    /// Disabled inputs ignore edits.
    pub fn type_text(&self, text: &str) {
        let listeners: Vec<InputListener> = {
            let mut input = self.0.borrow_mut();
            if input.disabled {
                return;
            }
            text.clone_into(&mut input.value);
            input.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(text);
        }
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The child region a binding mounts its geocoder into.
///
/// Owned by exactly one binding; nothing else writes into it.
#[derive(Debug, Default)]
pub struct MountContainer {
    children: Vec<GeocoderNode>,
}

impl MountContainer {
    pub const CLASS_NAME: &'static str = "mapbox-geocoder-container";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: GeocoderNode) {
        self.children.push(node);
    }

    #[must_use]
    pub fn children(&self) -> &[GeocoderNode] {
        &self.children
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The text input of the mounted geocoder, if one is present.
    #[must_use]
    pub fn query_geocoder_input(&self) -> Option<InputHandle> {
        self.children
            .iter()
            .find(|node| node.root_class() == GEOCODER_ROOT_CLASS)
            .and_then(GeocoderNode::input)
    }
}

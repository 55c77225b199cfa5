//! The geocoder widget as an opaque capability.
//!
//! A [`GeocoderFactory`] builds one [`Geocoder`] per configuration. The
//! geocoder hands back a [`GeocoderNode`] to mount, owns that node's input
//! element, and dispatches `result`/`clear` events to listeners attached
//! through [`Geocoder::on`]. Any provider can sit behind these traits
//! without touching the binding's synchronization logic.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{InputHandle, ListenerId};
use crate::error::PlacesError;
use crate::types::SelectionResult;

/// Class on the root element of a mounted geocoder.
pub const GEOCODER_ROOT_CLASS: &str = "mapboxgl-ctrl-geocoder";

/// Construction parameters passed to the provider.
#[derive(Clone, PartialEq, Eq)]
pub struct GeocoderOptions {
    pub access_token: String,
    /// Comma-joined provider categories; `None` means unrestricted.
    pub types: Option<String>,
    /// Comma-joined country codes.
    pub countries: String,
    pub placeholder: String,
    pub limit: u8,
    /// Minimum characters typed before a lookup is issued.
    pub min_length: usize,
    pub fuzzy_match: bool,
    pub routing: bool,
}

impl std::fmt::Debug for GeocoderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderOptions")
            .field("access_token", &"[redacted]")
            .field("types", &self.types)
            .field("countries", &self.countries)
            .field("placeholder", &self.placeholder)
            .field("limit", &self.limit)
            .field("min_length", &self.min_length)
            .field("fuzzy_match", &self.fuzzy_match)
            .field("routing", &self.routing)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Result,
    Clear,
}

#[derive(Debug, Clone)]
pub enum GeocoderEvent {
    Result(SelectionResult),
    Clear,
}

impl GeocoderEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GeocoderEvent::Result(_) => EventKind::Result,
            GeocoderEvent::Clear => EventKind::Clear,
        }
    }
}

pub type EventHandler = Rc<dyn Fn(&GeocoderEvent)>;

/// Listener table shared by a geocoder and the node it mounted.
#[derive(Default)]
pub struct EventRegistry {
    next_id: u64,
    listeners: Vec<(EventKind, ListenerId, EventHandler)>,
}

impl EventRegistry {
    pub fn on(&mut self, kind: EventKind, handler: EventHandler) -> ListenerId {
        let id = ListenerId::next(&mut self.next_id);
        self.listeners.push((kind, id, handler));
        id
    }

    /// Detaches exactly the listener registered under `id` for `kind`.
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|(k, attached, _)| !(*k == kind && *attached == id));
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(k, _, _)| *k == kind).count()
    }

    fn handlers(&self, kind: EventKind) -> Vec<EventHandler> {
        self.listeners
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, _, h)| Rc::clone(h))
            .collect()
    }
}

struct NodeInner {
    input: Option<InputHandle>,
    events: Rc<RefCell<EventRegistry>>,
    suggestions: RefCell<Vec<SelectionResult>>,
}

/// DOM subtree produced by a geocoder: its input plus the suggestion list.
///
/// User interaction with the widget goes through the node: picking a
/// suggestion emits `result`, the clear button emits `clear`.
#[derive(Clone)]
pub struct GeocoderNode {
    inner: Rc<NodeInner>,
}

impl std::fmt::Debug for GeocoderNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderNode")
            .field("input", &self.inner.input)
            .field("suggestions", &self.inner.suggestions.borrow().len())
            .finish_non_exhaustive()
    }
}

impl GeocoderNode {
    #[must_use]
    pub fn new(input: Option<InputHandle>, events: Rc<RefCell<EventRegistry>>) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                input,
                events,
                suggestions: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn root_class(&self) -> &'static str {
        GEOCODER_ROOT_CLASS
    }

    #[must_use]
    pub fn input(&self) -> Option<InputHandle> {
        self.inner.input.clone()
    }

    #[must_use]
    pub fn suggestions(&self) -> Vec<SelectionResult> {
        self.inner.suggestions.borrow().clone()
    }

    pub fn set_suggestions(&self, suggestions: Vec<SelectionResult>) {
        *self.inner.suggestions.borrow_mut() = suggestions;
    }

    /// Picks the suggestion at `index`. Returns `false` if there is none.
    pub fn choose(&self, index: usize) -> bool {
        let picked = self.inner.suggestions.borrow().get(index).cloned();
        match picked {
            Some(result) => {
                self.select(result);
                true
            }
            None => false,
        }
    }

    /// Selects `result`: the input shows its full name, then `result` fires.
    pub fn select(&self, result: SelectionResult) {
        if let Some(input) = &self.inner.input {
            input.set_value(&result.display_name);
        }
        self.inner.suggestions.borrow_mut().clear();
        self.emit(&GeocoderEvent::Result(result));
    }

    /// The widget's clear button: empties the input, then `clear` fires.
    pub fn clear(&self) {
        if let Some(input) = &self.inner.input {
            input.set_value("");
        }
        self.inner.suggestions.borrow_mut().clear();
        self.emit(&GeocoderEvent::Clear);
    }

    fn emit(&self, event: &GeocoderEvent) {
        let handlers = self.inner.events.borrow().handlers(event.kind());
        for handler in handlers {
            handler(event);
        }
    }
}

/// One live widget instance.
pub trait Geocoder {
    /// Builds (or returns the already built) node to mount.
    fn on_add(&mut self) -> GeocoderNode;

    fn on(&mut self, kind: EventKind, handler: EventHandler) -> ListenerId;

    /// Detaches the listener returned by [`Geocoder::on`].
    fn off(&mut self, kind: EventKind, id: ListenerId) -> bool;

    /// Called once when the owning binding tears the instance down.
    fn on_remove(&mut self) {}
}

/// The provider SDK: builds a widget for a set of options.
pub trait GeocoderFactory {
    /// # Errors
    ///
    /// Returns a [`PlacesError`] when the widget cannot be constructed.
    fn create(&self, options: GeocoderOptions) -> Result<Box<dyn Geocoder>, PlacesError>;
}

//! In-memory geocoder used to drive bindings without a network.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scholar_places::{
    ContextEntry, EventHandler, EventKind, EventRegistry, Geocoder, GeocoderFactory,
    GeocoderNode, GeocoderOptions, Geometry, InputHandle, ListenerId, PlacesError,
    SelectionResult,
};

#[derive(Default)]
struct FakeState {
    options: RefCell<Vec<GeocoderOptions>>,
    registries: RefCell<Vec<Rc<RefCell<EventRegistry>>>>,
    nodes: RefCell<Vec<GeocoderNode>>,
    live: Cell<usize>,
    fail: Cell<bool>,
    omit_input: Cell<bool>,
}

/// Records every geocoder it creates and how many are currently mounted.
#[derive(Default)]
pub struct FakeFactory {
    state: Rc<FakeState>,
}

impl FakeFactory {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn as_factory(self: &Rc<Self>) -> Rc<dyn GeocoderFactory> {
        Rc::clone(self) as Rc<dyn GeocoderFactory>
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.fail.set(failing);
    }

    pub fn set_omit_input(&self, omit: bool) {
        self.state.omit_input.set(omit);
    }

    pub fn created(&self) -> usize {
        self.state.options.borrow().len()
    }

    pub fn live(&self) -> usize {
        self.state.live.get()
    }

    pub fn last_options(&self) -> GeocoderOptions {
        self.state
            .options
            .borrow()
            .last()
            .cloned()
            .expect("no geocoder created")
    }

    pub fn node(&self) -> GeocoderNode {
        self.state
            .nodes
            .borrow()
            .last()
            .cloned()
            .expect("no geocoder mounted")
    }

    pub fn registry(&self, index: usize) -> Rc<RefCell<EventRegistry>> {
        Rc::clone(&self.state.registries.borrow()[index])
    }

    /// Listeners of `kind` across every geocoder ever created.
    pub fn total_listeners(&self, kind: EventKind) -> usize {
        self.state
            .registries
            .borrow()
            .iter()
            .map(|r| r.borrow().listener_count(kind))
            .sum()
    }
}

impl GeocoderFactory for FakeFactory {
    fn create(&self, options: GeocoderOptions) -> Result<Box<dyn Geocoder>, PlacesError> {
        if self.state.fail.get() {
            return Err(PlacesError::Api {
                status: 401,
                message: "Not Authorized - Invalid Token".to_string(),
            });
        }
        self.state.options.borrow_mut().push(options);
        let events = Rc::new(RefCell::new(EventRegistry::default()));
        self.state.registries.borrow_mut().push(Rc::clone(&events));
        Ok(Box::new(FakeGeocoder {
            state: Rc::clone(&self.state),
            events,
            mounted: false,
        }))
    }
}

struct FakeGeocoder {
    state: Rc<FakeState>,
    events: Rc<RefCell<EventRegistry>>,
    mounted: bool,
}

impl Geocoder for FakeGeocoder {
    fn on_add(&mut self) -> GeocoderNode {
        let input = (!self.state.omit_input.get()).then(InputHandle::new);
        let node = GeocoderNode::new(input, Rc::clone(&self.events));
        self.state.nodes.borrow_mut().push(node.clone());
        self.state.live.set(self.state.live.get() + 1);
        self.mounted = true;
        node
    }

    fn on(&mut self, kind: EventKind, handler: EventHandler) -> ListenerId {
        self.events.borrow_mut().on(kind, handler)
    }

    fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.events.borrow_mut().off(kind, id)
    }

    fn on_remove(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.state.live.set(self.state.live.get() - 1);
        }
    }
}

/// Collects callback invocations in call order.
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn on_change(&self) -> Rc<dyn Fn(&str)> {
        let log = self.clone();
        Rc::new(move |value: &str| log.0.borrow_mut().push(format!("change:{value}")))
    }

    pub fn on_place_select(&self) -> Rc<dyn Fn(&SelectionResult)> {
        let log = self.clone();
        Rc::new(move |result: &SelectionResult| {
            log.0.borrow_mut().push(format!("select:{}", result.id));
        })
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub fn feature(id: &str, place_name: &str, text: &str) -> SelectionResult {
    SelectionResult {
        id: id.to_string(),
        display_name: place_name.to_string(),
        primary_text: text.to_string(),
        street_address: None,
        context: Vec::new(),
        geometry: Geometry::point(120.98, 14.6),
        category_tags: Vec::new(),
    }
}

pub fn context(id: &str, text: &str) -> ContextEntry {
    ContextEntry {
        id: id.to_string(),
        text: text.to_string(),
        short_code: None,
        wikidata: None,
    }
}

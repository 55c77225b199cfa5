//! [`Geocoder`] implementation backed by the Mapbox geocoding API.
//!
//! The geocoder owns its DOM node and event registry. Lookups are driven by
//! the caller ([`MapboxGeocoder::lookup`]); results land on the node as
//! suggestions, and choosing one fires `result` through the registry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scholar_core::AppConfig;

use crate::client::MapboxClient;
use crate::dom::{InputHandle, ListenerId};
use crate::error::PlacesError;
use crate::types::SelectionResult;
use crate::widget::{
    EventHandler, EventKind, EventRegistry, Geocoder, GeocoderFactory, GeocoderNode,
    GeocoderOptions,
};

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "scholar/0.1 (place-autocomplete)";

/// Builds [`MapboxGeocoder`]s and remembers the most recent one so the
/// caller can drive lookups on whatever the binding currently has mounted.
pub struct MapboxGeocoderFactory {
    base_url: String,
    timeout_secs: u64,
    user_agent: String,
    latest: RefCell<Option<MapboxGeocoder>>,
}

impl Default for MapboxGeocoderFactory {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }
}

impl MapboxGeocoderFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(base_url: &str, timeout_secs: u64, user_agent: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs,
            user_agent: user_agent.to_string(),
            latest: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::with_base_url(
            &config.geocoder_base_url,
            config.geocoder_request_timeout_secs,
            &config.geocoder_user_agent,
        )
    }

    /// The geocoder produced by the last successful `create`.
    #[must_use]
    pub fn latest(&self) -> Option<MapboxGeocoder> {
        self.latest.borrow().clone()
    }
}

impl GeocoderFactory for MapboxGeocoderFactory {
    fn create(&self, options: GeocoderOptions) -> Result<Box<dyn Geocoder>, PlacesError> {
        let client = MapboxClient::with_base_url(
            &options.access_token,
            self.timeout_secs,
            &self.user_agent,
            &self.base_url,
        )?;
        let geocoder = MapboxGeocoder::new(client, options);
        *self.latest.borrow_mut() = Some(geocoder.clone());
        Ok(Box::new(geocoder))
    }
}

struct GeocoderInner {
    client: MapboxClient,
    options: GeocoderOptions,
    events: Rc<RefCell<EventRegistry>>,
    node: RefCell<Option<GeocoderNode>>,
    removed: Cell<bool>,
}

/// Shared handle to one geocoder instance.
#[derive(Clone)]
pub struct MapboxGeocoder {
    inner: Rc<GeocoderInner>,
}

impl std::fmt::Debug for MapboxGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocoder")
            .field("options", &self.inner.options)
            .field("removed", &self.inner.removed.get())
            .finish_non_exhaustive()
    }
}

impl MapboxGeocoder {
    #[must_use]
    pub fn new(client: MapboxClient, options: GeocoderOptions) -> Self {
        Self {
            inner: Rc::new(GeocoderInner {
                client,
                options,
                events: Rc::new(RefCell::new(EventRegistry::default())),
                node: RefCell::new(None),
                removed: Cell::new(false),
            }),
        }
    }

    #[must_use]
    pub fn options(&self) -> &GeocoderOptions {
        &self.inner.options
    }

    #[must_use]
    pub fn node(&self) -> Option<GeocoderNode> {
        self.inner.node.borrow().clone()
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.inner.removed.get()
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner.events.borrow().listener_count(kind)
    }

    /// Fetches suggestions for `query` and shows them on the node.
    ///
    /// Queries shorter than the configured minimum clear the suggestions
    /// without issuing a request.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::WidgetRemoved`] if the widget was torn down before or
    ///   during the request.
    /// - Any error from [`MapboxClient::forward_geocode`].
    pub async fn lookup(&self, query: &str) -> Result<Vec<SelectionResult>, PlacesError> {
        if self.is_removed() {
            return Err(PlacesError::WidgetRemoved);
        }

        let query = query.trim();
        if query.chars().count() < self.inner.options.min_length {
            if let Some(node) = self.node() {
                node.set_suggestions(Vec::new());
            }
            return Ok(Vec::new());
        }

        let results = self
            .inner
            .client
            .forward_geocode(query, &self.inner.options)
            .await?;

        if self.is_removed() {
            return Err(PlacesError::WidgetRemoved);
        }
        if let Some(node) = self.node() {
            node.set_suggestions(results.clone());
        }
        Ok(results)
    }
}

impl Geocoder for MapboxGeocoder {
    fn on_add(&mut self) -> GeocoderNode {
        let input = InputHandle::new();
        input.set_placeholder(Some(&self.inner.options.placeholder));
        let node = GeocoderNode::new(Some(input), Rc::clone(&self.inner.events));
        *self.inner.node.borrow_mut() = Some(node.clone());
        self.inner.removed.set(false);
        node
    }

    fn on(&mut self, kind: EventKind, handler: EventHandler) -> ListenerId {
        self.inner.events.borrow_mut().on(kind, handler)
    }

    fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.inner.events.borrow_mut().off(kind, id)
    }

    fn on_remove(&mut self) {
        self.inner.removed.set(true);
        if let Some(node) = self.inner.node.borrow_mut().take() {
            node.set_suggestions(Vec::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> GeocoderOptions {
        GeocoderOptions {
            access_token: "pk.test".to_string(),
            types: None,
            countries: "ph".to_string(),
            placeholder: "Search for a location".to_string(),
            limit: 5,
            min_length: 2,
            fuzzy_match: true,
            routing: false,
        }
    }

    #[test]
    fn factory_remembers_latest_geocoder() {
        let factory = MapboxGeocoderFactory::with_base_url("http://127.0.0.1:9", 5, "test");
        assert!(factory.latest().is_none());
        let _first = factory.create(options()).expect("create");
        let _second = factory.create(options()).expect("create");
        let latest = factory.latest().expect("latest");
        assert_eq!(latest.options().countries, "ph");
    }

    #[test]
    fn factory_rejects_bad_base_url() {
        let factory = MapboxGeocoderFactory::with_base_url("::nope::", 5, "test");
        assert!(factory.create(options()).is_err());
        assert!(factory.latest().is_none());
    }

    #[test]
    fn on_add_builds_node_with_placeholder() {
        let factory = MapboxGeocoderFactory::new();
        let mut geocoder = factory.create(options()).expect("create");
        let node = geocoder.on_add();
        let input = node.input().expect("input");
        assert_eq!(input.placeholder().as_deref(), Some("Search for a location"));
        assert_eq!(node.root_class(), crate::widget::GEOCODER_ROOT_CLASS);
    }

    #[test]
    fn on_remove_marks_geocoder_removed() {
        let factory = MapboxGeocoderFactory::new();
        let mut geocoder = factory.create(options()).expect("create");
        geocoder.on_add();
        geocoder.on_remove();
        let handle = factory.latest().expect("latest");
        assert!(handle.is_removed());
        assert!(handle.node().is_none());
    }
}

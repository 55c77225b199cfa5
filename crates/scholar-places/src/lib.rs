//! Place-autocomplete inputs backed by an embedded geocoder widget.
//!
//! The binding keeps a host-owned string and the widget's visible text in
//! sync, turns the widget's `result`/`clear` events into plain display
//! strings, and degrades to manual entry when no geocoder can be built.

pub mod autocomplete;
pub mod binding;
pub mod category;
pub mod client;
pub mod derive;
pub mod dom;
pub mod error;
pub mod mapbox;
pub mod places_input;
mod render;
pub mod types;
pub mod widget;

pub use autocomplete::{PlacesAutocomplete, PlacesAutocompleteProps};
pub use binding::{
    is_country_code, ChangeCallback, ComponentRestrictions, CountryRestriction, PlaceBinding,
    PlaceSelectCallback, WidgetConfig,
};
pub use category::{PlaceType, ProviderCategory, TypeFilter};
pub use client::MapboxClient;
pub use derive::{derive_display_value, SelectionScope};
pub use dom::{InputHandle, ListenerId, MountContainer};
pub use error::PlacesError;
pub use mapbox::{MapboxGeocoder, MapboxGeocoderFactory};
pub use places_input::{InputAttributes, PlacesInput, PlacesInputProps};
pub use types::{ContextEntry, Geometry, GeocodeResponse, SelectionResult};
pub use widget::{
    EventHandler, EventKind, EventRegistry, Geocoder, GeocoderEvent, GeocoderFactory,
    GeocoderNode, GeocoderOptions,
};

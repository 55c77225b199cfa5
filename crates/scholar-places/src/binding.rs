//! Synchronization between a host-owned value and a mounted geocoder.
//!
//! [`PlaceBinding`] owns one mount container, at most one live geocoder and
//! a fallback input. Any change to the widget configuration or the access
//! credential tears the geocoder down (listeners detached by the ids they
//! were attached with), clears the container and builds a fresh instance.
//! Without a credential, or when construction fails, the binding stays in
//! manual-entry mode: edits to the fallback input still reach the host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::category::TypeFilter;
use crate::derive::derive_display_value;
use crate::dom::{InputHandle, ListenerId, MountContainer};
use crate::error::PlacesError;
use crate::render::merge_classes;
use crate::types::SelectionResult;
use crate::widget::{
    EventHandler, EventKind, Geocoder, GeocoderEvent, GeocoderFactory, GeocoderOptions,
};

pub type ChangeCallback = Rc<dyn Fn(&str)>;
pub type PlaceSelectCallback = Rc<dyn Fn(&SelectionResult)>;

pub const DEFAULT_PLACEHOLDER: &str = "Search for a location";
pub const SUGGESTION_LIMIT: u8 = 5;
pub const MIN_QUERY_LENGTH: usize = 2;

/// Host styling applied to the geocoder's own input element.
pub const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-input bg-background \
px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm \
file:font-medium placeholder:text-muted-foreground focus-visible:outline-none \
focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
disabled:cursor-not-allowed disabled:opacity-50";

/// `true` for a two-letter ISO 3166-1 alpha-2 style code, in either case.
#[must_use]
pub fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryRestriction {
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRestrictions {
    pub country: CountryRestriction,
}

impl Default for ComponentRestrictions {
    fn default() -> Self {
        Self::country("ph")
    }
}

impl ComponentRestrictions {
    #[must_use]
    pub fn country(code: impl Into<String>) -> Self {
        Self {
            country: CountryRestriction::Single(code.into()),
        }
    }

    #[must_use]
    pub fn countries<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            country: CountryRestriction::List(codes.into_iter().map(Into::into).collect()),
        }
    }

    /// Country codes joined for the provider's `countries` parameter.
    #[must_use]
    pub fn countries_param(&self) -> String {
        match &self.country {
            CountryRestriction::Single(code) => code.clone(),
            CountryRestriction::List(codes) => codes.join(","),
        }
    }
}

/// Everything whose change forces the geocoder to be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetConfig {
    pub types: TypeFilter,
    pub restrictions: ComponentRestrictions,
    pub placeholder: Option<String>,
    pub disabled: bool,
    /// Extra classes merged into the geocoder input's class list.
    pub input_class: Option<String>,
}

impl WidgetConfig {
    #[must_use]
    pub fn options(&self, access_token: &str) -> GeocoderOptions {
        GeocoderOptions {
            access_token: access_token.to_string(),
            types: self.types.provider_param(),
            countries: self.restrictions.countries_param(),
            placeholder: self
                .placeholder
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            limit: SUGGESTION_LIMIT,
            min_length: MIN_QUERY_LENGTH,
            fuzzy_match: true,
            routing: false,
        }
    }

    #[must_use]
    pub fn input_class_name(&self) -> String {
        merge_classes(INPUT_CLASS, self.input_class.as_deref())
    }
}

#[derive(Default)]
struct Shared {
    value: String,
    on_change: Option<ChangeCallback>,
    on_place_select: Option<PlaceSelectCallback>,
}

type SharedState = Rc<RefCell<Shared>>;

/// Records a new value and notifies the host. The borrow is released before
/// the callback runs so the host may read the binding from inside it.
fn commit_value(shared: &SharedState, value: &str) {
    let on_change = {
        let mut state = shared.borrow_mut();
        value.clone_into(&mut state.value);
        state.on_change.clone()
    };
    if let Some(on_change) = on_change {
        on_change(value);
    }
}

struct ActiveWidget {
    geocoder: Box<dyn Geocoder>,
    input: Option<InputHandle>,
    input_listener: Option<ListenerId>,
    result_listener: ListenerId,
    clear_listener: ListenerId,
}

pub struct PlaceBinding {
    shared: SharedState,
    factory: Rc<dyn GeocoderFactory>,
    credential: Option<String>,
    config: WidgetConfig,
    container: MountContainer,
    fallback: InputHandle,
    fallback_listener: ListenerId,
    active: Option<ActiveWidget>,
    instances_created: u64,
}

impl PlaceBinding {
    /// Mounts the binding and, when a credential is present, its geocoder.
    #[must_use]
    pub fn mount(
        factory: Rc<dyn GeocoderFactory>,
        credential: Option<String>,
        config: WidgetConfig,
        value: &str,
    ) -> Self {
        let shared: SharedState = Rc::new(RefCell::new(Shared {
            value: value.to_string(),
            ..Shared::default()
        }));

        let fallback = InputHandle::with_value(value);
        fallback.set_placeholder(config.placeholder.as_deref());
        fallback.set_disabled(config.disabled);
        let fallback_listener = {
            let shared = Rc::clone(&shared);
            fallback.add_input_listener(Rc::new(move |text: &str| commit_value(&shared, text)))
        };

        let mut binding = Self {
            shared,
            factory,
            credential: credential.filter(|t| !t.trim().is_empty()),
            config,
            container: MountContainer::new(),
            fallback,
            fallback_listener,
            active: None,
            instances_created: 0,
        };
        binding.rebuild();
        binding
    }

    /// Replaces the host callbacks without touching the geocoder.
    pub fn set_callbacks(
        &mut self,
        on_change: Option<ChangeCallback>,
        on_place_select: Option<PlaceSelectCallback>,
    ) {
        let mut state = self.shared.borrow_mut();
        state.on_change = on_change;
        state.on_place_select = on_place_select;
    }

    /// Applies a new widget configuration. Returns `true` if the geocoder
    /// was rebuilt.
    pub fn reconfigure(&mut self, config: WidgetConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.fallback.set_placeholder(config.placeholder.as_deref());
        self.fallback.set_disabled(config.disabled);
        self.config = config;
        self.rebuild();
        true
    }

    /// Swaps the access credential. Returns `true` if the geocoder was rebuilt.
    pub fn set_credential(&mut self, credential: Option<String>) -> bool {
        let credential = credential.filter(|t| !t.trim().is_empty());
        if credential == self.credential {
            return false;
        }
        self.credential = credential;
        self.rebuild();
        true
    }

    /// Reflects an externally changed host value into both inputs.
    pub fn sync_value(&mut self, value: &str) {
        value.clone_into(&mut self.shared.borrow_mut().value);
        self.fallback.set_value(value);
        if let Some(input) = self.widget_input() {
            if input.value() != value {
                input.set_value(value);
            }
        }
    }

    /// The binding's mirror of the host value.
    #[must_use]
    pub fn value(&self) -> String {
        self.shared.borrow().value.clone()
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// `true` when no geocoder is mounted and only manual entry works.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.active.is_none()
    }

    #[must_use]
    pub fn widget_input(&self) -> Option<InputHandle> {
        self.active.as_ref().and_then(|active| active.input.clone())
    }

    #[must_use]
    pub fn fallback_input(&self) -> &InputHandle {
        &self.fallback
    }

    #[must_use]
    pub fn container(&self) -> &MountContainer {
        &self.container
    }

    /// Number of geocoders constructed over the binding's lifetime.
    #[must_use]
    pub fn instances_created(&self) -> u64 {
        self.instances_created
    }

    /// Detaches every listener and releases the geocoder.
    pub fn unmount(self) {
        drop(self);
    }

    fn rebuild(&mut self) {
        self.teardown();
        self.container.clear();

        let Some(token) = self.credential.clone() else {
            tracing::debug!("no geocoder access token; place input limited to manual entry");
            return;
        };

        match self.construct(&token) {
            Ok(active) => self.active = Some(active),
            Err(error) => {
                tracing::error!(error = %error, "error initializing place autocomplete");
                self.container.clear();
            }
        }
    }

    fn construct(&mut self, token: &str) -> Result<ActiveWidget, PlacesError> {
        let options = self.config.options(token);
        tracing::debug!(
            types = options.types.as_deref().unwrap_or("*"),
            countries = %options.countries,
            "mounting geocoder"
        );
        let mut geocoder = self.factory.create(options)?;
        self.instances_created += 1;

        self.container.append(geocoder.on_add());
        let input = self.container.query_geocoder_input();

        let input_listener = if let Some(input) = &input {
            input.set_class_name(&self.config.input_class_name());
            input.set_value(&self.value());
            input.set_disabled(self.config.disabled);

            let shared = Rc::clone(&self.shared);
            let fallback = self.fallback.clone();
            Some(input.add_input_listener(Rc::new(move |text: &str| {
                fallback.set_value(text);
                commit_value(&shared, text);
            })))
        } else {
            tracing::warn!("geocoder node has no text input; keystrokes will not reach the host");
            None
        };

        let result_listener = geocoder.on(EventKind::Result, self.result_handler(input.clone()));
        let clear_listener = geocoder.on(EventKind::Clear, self.clear_handler(input.clone()));

        Ok(ActiveWidget {
            geocoder,
            input,
            input_listener,
            result_listener,
            clear_listener,
        })
    }

    fn result_handler(&self, widget_input: Option<InputHandle>) -> EventHandler {
        let shared = Rc::clone(&self.shared);
        let fallback = self.fallback.clone();
        let types = self.config.types.clone();
        Rc::new(move |event: &GeocoderEvent| {
            let GeocoderEvent::Result(result) = event else {
                return;
            };
            let derived = derive_display_value(&types, result);
            if let Some(input) = &widget_input {
                input.set_value(&derived);
            }
            fallback.set_value(&derived);
            commit_value(&shared, &derived);

            let on_place_select = shared.borrow().on_place_select.clone();
            if let Some(on_place_select) = on_place_select {
                on_place_select(result);
            }
        })
    }

    fn clear_handler(&self, widget_input: Option<InputHandle>) -> EventHandler {
        let shared = Rc::clone(&self.shared);
        let fallback = self.fallback.clone();
        Rc::new(move |event: &GeocoderEvent| {
            if !matches!(event, GeocoderEvent::Clear) {
                return;
            }
            if let Some(input) = &widget_input {
                input.set_value("");
            }
            fallback.set_value("");
            commit_value(&shared, "");
        })
    }

    fn teardown(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active
            .geocoder
            .off(EventKind::Result, active.result_listener);
        active.geocoder.off(EventKind::Clear, active.clear_listener);
        if let (Some(input), Some(id)) = (&active.input, active.input_listener) {
            input.remove_input_listener(id);
        }
        active.geocoder.on_remove();
    }
}

impl Drop for PlaceBinding {
    fn drop(&mut self) {
        self.teardown();
        self.container.clear();
        self.fallback.remove_input_listener(self.fallback_listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_codes_are_two_ascii_letters() {
        assert!(is_country_code("ph"));
        assert!(is_country_code("SG"));
        assert!(!is_country_code("phl"));
        assert!(!is_country_code("p1"));
        assert!(!is_country_code(""));
    }

    #[test]
    fn single_country_param() {
        assert_eq!(ComponentRestrictions::default().countries_param(), "ph");
    }

    #[test]
    fn country_list_is_joined_in_order() {
        let restrictions = ComponentRestrictions::countries(["ph", "sg", "my"]);
        assert_eq!(restrictions.countries_param(), "ph,sg,my");
    }

    #[test]
    fn options_translate_config() {
        let config = WidgetConfig {
            types: TypeFilter::regions_and_localities(),
            restrictions: ComponentRestrictions::countries(["ph", "sg"]),
            placeholder: None,
            disabled: false,
            input_class: None,
        };
        let options = config.options("pk.test");
        assert_eq!(options.access_token, "pk.test");
        assert_eq!(
            options.types.as_deref(),
            Some("region,place,locality,district")
        );
        assert_eq!(options.countries, "ph,sg");
        assert_eq!(options.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(options.limit, 5);
        assert_eq!(options.min_length, 2);
        assert!(options.fuzzy_match);
        assert!(!options.routing);
    }

    #[test]
    fn options_without_mapped_types_are_unrestricted() {
        let config = WidgetConfig {
            types: TypeFilter::parse(["geocode"]),
            placeholder: Some("Home town".to_string()),
            ..WidgetConfig::default()
        };
        let options = config.options("pk.test");
        assert!(options.types.is_none());
        assert_eq!(options.placeholder, "Home town");
    }

    #[test]
    fn input_class_merges_extra_classes() {
        let config = WidgetConfig {
            input_class: Some(" pl-9 ".to_string()),
            ..WidgetConfig::default()
        };
        assert_eq!(config.input_class_name(), format!("{INPUT_CLASS} pl-9"));
        assert_eq!(WidgetConfig::default().input_class_name(), INPUT_CLASS);
    }
}

//! Labelled place field restricted by default to regions and localities.

use std::rc::Rc;

use crate::binding::{
    ChangeCallback, ComponentRestrictions, PlaceBinding, PlaceSelectCallback, WidgetConfig,
};
use crate::category::TypeFilter;
use crate::error::PlacesError;
use crate::render::{merge_classes, FallbackInput, PlaceField, AUTOCOMPLETE_ERROR_CLASS};
use crate::widget::GeocoderFactory;

pub struct PlacesAutocompleteProps {
    pub label: String,
    pub value: String,
    pub on_change: ChangeCallback,
    pub placeholder: Option<String>,
    pub on_place_select: Option<PlaceSelectCallback>,
    pub class_name: Option<String>,
    /// Trusted markup rendered before the label text.
    pub icon: Option<String>,
    /// Trusted markup rendered after the label text.
    pub tooltip_content: Option<String>,
    pub component_restrictions: ComponentRestrictions,
    pub types: TypeFilter,
    pub error: Option<String>,
    pub required: bool,
    pub disabled: bool,
}

impl PlacesAutocompleteProps {
    pub fn new(label: impl Into<String>, value: impl Into<String>, on_change: ChangeCallback) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            on_change,
            placeholder: None,
            on_place_select: None,
            class_name: None,
            icon: None,
            tooltip_content: None,
            component_restrictions: ComponentRestrictions::default(),
            types: TypeFilter::regions_and_localities(),
            error: None,
            required: false,
            disabled: false,
        }
    }

    fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            types: self.types.clone(),
            restrictions: self.component_restrictions.clone(),
            placeholder: self.placeholder.clone(),
            disabled: self.disabled,
            input_class: None,
        }
    }
}

pub struct PlacesAutocomplete {
    props: PlacesAutocompleteProps,
    binding: PlaceBinding,
}

impl PlacesAutocomplete {
    /// Mounts with the process-wide access credential.
    #[must_use]
    pub fn mount(props: PlacesAutocompleteProps, factory: Rc<dyn GeocoderFactory>) -> Self {
        let credential = scholar_core::access_token().map(str::to_owned);
        Self::mount_with_credential(props, factory, credential)
    }

    #[must_use]
    pub fn mount_with_credential(
        props: PlacesAutocompleteProps,
        factory: Rc<dyn GeocoderFactory>,
        credential: Option<String>,
    ) -> Self {
        let mut binding =
            PlaceBinding::mount(factory, credential, props.widget_config(), &props.value);
        binding.set_callbacks(
            Some(Rc::clone(&props.on_change)),
            props.on_place_select.clone(),
        );
        Self { props, binding }
    }

    /// Applies a new set of props, rebuilding the geocoder only when its
    /// configuration changed.
    pub fn update(&mut self, props: PlacesAutocompleteProps) {
        self.binding.set_callbacks(
            Some(Rc::clone(&props.on_change)),
            props.on_place_select.clone(),
        );
        self.binding.reconfigure(props.widget_config());
        if props.value != self.props.value {
            self.binding.sync_value(&props.value);
        }
        self.props = props;
    }

    #[must_use]
    pub fn props(&self) -> &PlacesAutocompleteProps {
        &self.props
    }

    /// Element id derived from the label.
    #[must_use]
    pub fn field_id(&self) -> String {
        slugify_label(&self.props.label)
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.binding.value()
    }

    #[must_use]
    pub fn binding(&self) -> &PlaceBinding {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut PlaceBinding {
        &mut self.binding
    }

    /// Renders the field as an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Render`] if the template fails to render.
    pub fn render(&self) -> Result<String, PlacesError> {
        let id = self.field_id();
        let input = FallbackInput {
            id: Some(id.as_str()),
            name: None,
            value: self.binding.value(),
            placeholder: self.props.placeholder.clone(),
            required: self.props.required,
            disabled: self.props.disabled,
            attributes: Vec::new(),
            class_name: String::new(),
        };
        let mut field = PlaceField::for_binding(&self.binding, input);
        field.wrapper_class = merge_classes("space-y-2", self.props.class_name.as_deref());
        field.label = Some(self.props.label.as_str());
        field.label_for = Some(id.as_str());
        field.icon = self.props.icon.as_deref().unwrap_or_default();
        field.tooltip = self.props.tooltip_content.as_deref().unwrap_or_default();
        field.error = self.props.error.as_deref();
        field.error_class = AUTOCOMPLETE_ERROR_CLASS;
        field.to_html()
    }

    pub fn unmount(self) {
        self.binding.unmount();
    }
}

/// Lowercases `label` and replaces each whitespace run with `-`.
#[must_use]
pub fn slugify_label(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify_label("Home  Town\tCity"), "home-town-city");
        assert_eq!(slugify_label("Province"), "province");
    }

    #[test]
    fn slug_keeps_edge_whitespace_as_dash() {
        assert_eq!(slugify_label(" Birth Place "), "-birth-place-");
    }

    #[test]
    fn props_default_to_regions_and_philippines() {
        let props = PlacesAutocompleteProps::new("City", "", Rc::new(|_: &str| {}));
        assert_eq!(props.types, TypeFilter::regions_and_localities());
        assert_eq!(props.component_restrictions.countries_param(), "ph");
        assert!(props.widget_config().input_class.is_none());
    }
}

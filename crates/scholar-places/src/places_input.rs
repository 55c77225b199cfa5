//! Place field that forwards plain input attributes to its fallback input.
//!
//! Unlike [`crate::PlacesAutocomplete`] the type filter is empty by default,
//! the label is optional and targets the caller's `id`, and the host's
//! class list is merged into the geocoder input's classes.

use std::rc::Rc;

use crate::binding::{
    ChangeCallback, ComponentRestrictions, PlaceBinding, PlaceSelectCallback, WidgetConfig,
};
use crate::category::TypeFilter;
use crate::dom::InputHandle;
use crate::error::PlacesError;
use crate::render::{is_attribute_name, FallbackInput, PlaceField, INPUT_ERROR_CLASS};
use crate::widget::GeocoderFactory;

/// Attributes passed through to the fallback input element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAttributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub auto_complete: Option<String>,
    /// Any other `name="value"` pairs, rendered in order.
    pub extra: Vec<(String, String)>,
}

#[derive(Default)]
pub struct PlacesInputProps {
    pub attributes: InputAttributes,
    /// Extra classes for the geocoder input.
    pub class_name: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub tooltip_content: Option<String>,
    pub error: Option<String>,
    pub on_change: Option<ChangeCallback>,
    pub on_place_select: Option<PlaceSelectCallback>,
    pub component_restrictions: ComponentRestrictions,
    pub types: TypeFilter,
    pub disabled: bool,
}

impl PlacesInputProps {
    fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            types: self.types.clone(),
            restrictions: self.component_restrictions.clone(),
            placeholder: self.attributes.placeholder.clone(),
            disabled: self.disabled,
            input_class: self.class_name.clone(),
        }
    }
}

pub struct PlacesInput {
    props: PlacesInputProps,
    binding: PlaceBinding,
}

impl PlacesInput {
    #[must_use]
    pub fn mount(props: PlacesInputProps, factory: Rc<dyn GeocoderFactory>) -> Self {
        let credential = scholar_core::access_token().map(str::to_owned);
        Self::mount_with_credential(props, factory, credential)
    }

    #[must_use]
    pub fn mount_with_credential(
        props: PlacesInputProps,
        factory: Rc<dyn GeocoderFactory>,
        credential: Option<String>,
    ) -> Self {
        let mut binding = PlaceBinding::mount(
            factory,
            credential,
            props.widget_config(),
            &props.attributes.value,
        );
        binding.set_callbacks(props.on_change.clone(), props.on_place_select.clone());
        Self { props, binding }
    }

    pub fn update(&mut self, props: PlacesInputProps) {
        self.binding
            .set_callbacks(props.on_change.clone(), props.on_place_select.clone());
        self.binding.reconfigure(props.widget_config());
        if props.attributes.value != self.props.attributes.value {
            self.binding.sync_value(&props.attributes.value);
        }
        self.props = props;
    }

    /// The underlying fallback input, for callers that hold a reference to
    /// the element.
    #[must_use]
    pub fn input_ref(&self) -> InputHandle {
        self.binding.fallback_input().clone()
    }

    #[must_use]
    pub fn props(&self) -> &PlacesInputProps {
        &self.props
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
    /// Returns [`PlacesError::InvalidAttributeName`] if an extra attribute
    /// name is not made of ASCII alphanumerics, `-`, `_` or `:`, and
    /// [`PlacesError::Render`] if the template fails to render.
    pub fn render(&self) -> Result<String, PlacesError> {
        let attributes = &self.props.attributes;
        if let Some((name, _)) = attributes
            .extra
            .iter()
            .find(|(name, _)| !is_attribute_name(name))
        {
            return Err(PlacesError::InvalidAttributeName(name.clone()));
        }
        let mut passthrough = Vec::with_capacity(attributes.extra.len() + 1);
        if let Some(auto_complete) = &attributes.auto_complete {
            passthrough.push(("autocomplete".to_string(), auto_complete.clone()));
        }
        passthrough.extend(attributes.extra.iter().cloned());

        let input = FallbackInput {
            id: attributes.id.as_deref(),
            name: attributes.name.as_deref(),
            value: self.binding.value(),
            placeholder: attributes.placeholder.clone(),
            required: attributes.required,
            disabled: self.props.disabled,
            attributes: passthrough,
            class_name: String::new(),
        };
        let mut field = PlaceField::for_binding(&self.binding, input);
        field.wrapper_class = "space-y-2".to_string();
        field.label = self.props.label.as_deref();
        field.label_for = attributes.id.as_deref();
        field.icon = self.props.icon.as_deref().unwrap_or_default();
        field.tooltip = self.props.tooltip_content.as_deref().unwrap_or_default();
        field.error = self.props.error.as_deref();
        field.error_class = INPUT_ERROR_CLASS;
        field.to_html()
    }

    pub fn unmount(self) {
        self.binding.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::INPUT_CLASS;

    #[test]
    fn default_props_have_no_type_restriction() {
        let props = PlacesInputProps::default();
        let options = props.widget_config().options("pk.test");
        assert!(options.types.is_none());
        assert_eq!(options.countries, "ph");
    }

    #[test]
    fn class_name_reaches_widget_input_class() {
        let props = PlacesInputProps {
            class_name: Some("pl-9".to_string()),
            ..PlacesInputProps::default()
        };
        assert_eq!(
            props.widget_config().input_class_name(),
            format!("{INPUT_CLASS} pl-9")
        );
    }

    #[test]
    fn placeholder_attribute_becomes_widget_placeholder() {
        let props = PlacesInputProps {
            attributes: InputAttributes {
                placeholder: Some("Barangay, city".to_string()),
                ..InputAttributes::default()
            },
            ..PlacesInputProps::default()
        };
        assert_eq!(
            props.widget_config().options("pk.test").placeholder,
            "Barangay, city"
        );
    }
}

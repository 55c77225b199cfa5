//! HTML rendering of a place field: label, mount container, fallback input
//! and error line.

use askama::Template;

use crate::binding::PlaceBinding;
use crate::dom::MountContainer;
use crate::error::PlacesError;

/// Class of the fallback input while a geocoder is mounted.
const HIDDEN_CLASS: &str = "hidden";

pub(crate) const AUTOCOMPLETE_ERROR_CLASS: &str = "text-sm text-red-500 flex items-center gap-1";
pub(crate) const INPUT_ERROR_CLASS: &str = "text-sm text-destructive flex items-center gap-1";

pub(crate) struct FallbackInput<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub attributes: Vec<(String, String)>,
    pub class_name: String,
}

#[derive(Template)]
#[template(path = "place_field.html")]
pub(crate) struct PlaceField<'a> {
    pub wrapper_class: String,
    pub label: Option<&'a str>,
    pub label_for: Option<&'a str>,
    pub icon: &'a str,
    pub tooltip: &'a str,
    pub container_class: &'static str,
    pub mounted: bool,
    pub input: FallbackInput<'a>,
    pub error: Option<&'a str>,
    pub error_class: &'static str,
}

impl<'a> PlaceField<'a> {
    /// Field skeleton reflecting the binding's current state. The fallback
    /// input stays visible only while no geocoder is mounted.
    pub(crate) fn for_binding(binding: &PlaceBinding, mut input: FallbackInput<'a>) -> Self {
        let mounted = !binding.is_degraded();
        if mounted {
            input.class_name = HIDDEN_CLASS.to_string();
        }
        Self {
            wrapper_class: String::new(),
            label: None,
            label_for: None,
            icon: "",
            tooltip: "",
            container_class: MountContainer::CLASS_NAME,
            mounted,
            input,
            error: None,
            error_class: AUTOCOMPLETE_ERROR_CLASS,
        }
    }

    pub(crate) fn to_html(&self) -> Result<String, PlacesError> {
        Ok(self.render()?)
    }
}

/// `true` for names made of ASCII alphanumerics, `-`, `_` and `:`.
pub(crate) fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

/// Joins a base class list with optional host classes.
pub(crate) fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

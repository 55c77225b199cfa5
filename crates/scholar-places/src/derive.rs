//! Turning a selected place into the string shown in the input.

use crate::category::{PlaceType, ProviderCategory, TypeFilter};
use crate::types::SelectionResult;

/// Granularity the host asked for, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScope {
    Region,
    Place,
    Address,
    Any,
}

impl SelectionScope {
    #[must_use]
    pub fn for_filter(types: &TypeFilter) -> Self {
        if types.contains_any(&[PlaceType::Regions, PlaceType::AdministrativeAreaLevel1]) {
            SelectionScope::Region
        } else if types.contains_any(&[PlaceType::Locality, PlaceType::AdministrativeAreaLevel2]) {
            SelectionScope::Place
        } else if types.contains_any(&[PlaceType::Address, PlaceType::Establishment]) {
            SelectionScope::Address
        } else {
            SelectionScope::Any
        }
    }
}

/// Display string for `result` under the requested `types`.
#[must_use]
pub fn derive_display_value(types: &TypeFilter, result: &SelectionResult) -> String {
    match SelectionScope::for_filter(types) {
        SelectionScope::Region => hierarchy_label(result, ProviderCategory::Region),
        SelectionScope::Place => hierarchy_label(result, ProviderCategory::Place),
        SelectionScope::Address => address_label(result),
        SelectionScope::Any => result.full_name().to_string(),
    }
}

fn hierarchy_label(result: &SelectionResult, category: ProviderCategory) -> String {
    if let Some(entry) = result.context_entry(category) {
        entry.text.clone()
    } else if result.has_tag(category) {
        result.primary_text.clone()
    } else {
        result.full_name().to_string()
    }
}

fn address_label(result: &SelectionResult) -> String {
    match result.street_address.as_deref() {
        Some(street) if !street.is_empty() => format!("{street} {}", result.primary_text),
        _ if result.display_name.is_empty() => result.primary_text.clone(),
        _ => result
            .display_name
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContextEntry, Geometry};

    fn entry(id: &str, text: &str) -> ContextEntry {
        ContextEntry {
            id: id.to_string(),
            text: text.to_string(),
            short_code: None,
            wikidata: None,
        }
    }

    fn result(primary: &str, display: &str, tags: &[&str]) -> SelectionResult {
        SelectionResult {
            id: "test.1".to_string(),
            display_name: display.to_string(),
            primary_text: primary.to_string(),
            street_address: None,
            context: Vec::new(),
            geometry: Geometry::point(121.0, 14.6),
            category_tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn region_scope_uses_region_context_entry() {
        let mut r = result("Makati", "Makati, Metro Manila, Philippines", &["place"]);
        r.context = vec![entry("region.01", "Metro Manila")];
        let types = TypeFilter::parse(["(regions)"]);
        assert_eq!(derive_display_value(&types, &r), "Metro Manila");
    }

    #[test]
    fn region_scope_uses_own_text_for_region_results() {
        let r = result("Central Luzon", "Central Luzon, Philippines", &["region"]);
        let types = TypeFilter::parse(["(regions)"]);
        assert_eq!(derive_display_value(&types, &r), "Central Luzon");
    }

    #[test]
    fn region_scope_falls_back_to_full_name() {
        let r = result("Philippines", "Philippines", &["country"]);
        let types = TypeFilter::parse(["administrative_area_level_1"]);
        assert_eq!(derive_display_value(&types, &r), "Philippines");
    }

    #[test]
    fn region_scope_wins_over_locality() {
        let mut r = result("Cebu City", "Cebu City, Cebu, Philippines", &["place"]);
        r.context = vec![entry("place.9", "Cebu City"), entry("region.7", "Central Visayas")];
        let types = TypeFilter::parse(["locality", "(regions)"]);
        assert_eq!(derive_display_value(&types, &r), "Central Visayas");
    }

    #[test]
    fn place_scope_uses_place_context_entry() {
        let mut r = result("Ayala Avenue", "Ayala Avenue, Makati, Philippines", &["address"]);
        r.context = vec![entry("locality.3", "Bel-Air"), entry("place.4", "Makati")];
        let types = TypeFilter::parse(["locality"]);
        assert_eq!(derive_display_value(&types, &r), "Makati");
    }

    #[test]
    fn place_scope_uses_own_text_for_place_results() {
        let r = result("Davao City", "Davao City, Davao del Sur, Philippines", &["place"]);
        let types = TypeFilter::parse(["administrative_area_level_2"]);
        assert_eq!(derive_display_value(&types, &r), "Davao City");
    }

    #[test]
    fn address_scope_concatenates_street_address() {
        let mut r = result("Main St", "123 Main St, Springfield", &["address"]);
        r.street_address = Some("123 Main St".to_string());
        let types = TypeFilter::parse(["address"]);
        assert_eq!(derive_display_value(&types, &r), "123 Main St Main St");
    }

    #[test]
    fn address_scope_takes_first_segment_without_street_address() {
        let r = result(
            "SM Mall of Asia",
            "SM Mall of Asia , Seaside Blvd, Pasay, Philippines",
            &["poi"],
        );
        let types = TypeFilter::parse(["establishment"]);
        assert_eq!(derive_display_value(&types, &r), "SM Mall of Asia");
    }

    #[test]
    fn address_scope_uses_own_text_without_display_name() {
        let r = result("Rizal Park", "", &["poi"]);
        let types = TypeFilter::parse(["address"]);
        assert_eq!(derive_display_value(&types, &r), "Rizal Park");
    }

    #[test]
    fn unfiltered_uses_full_name_then_own_text() {
        let types = TypeFilter::default();
        let r = result("Baguio", "Baguio, Benguet, Philippines", &["place"]);
        assert_eq!(derive_display_value(&types, &r), "Baguio, Benguet, Philippines");
        let bare = result("Baguio", "", &["place"]);
        assert_eq!(derive_display_value(&types, &bare), "Baguio");
    }

    #[test]
    fn unrecognized_types_behave_like_no_filter() {
        let types = TypeFilter::parse(["geocode"]);
        assert_eq!(SelectionScope::for_filter(&types), SelectionScope::Any);
    }
}

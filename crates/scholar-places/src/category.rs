//! Translation from the host's place-type vocabulary to provider categories.

use std::fmt;

/// Category names understood by the geocoding provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderCategory {
    Region,
    District,
    Place,
    Locality,
    Address,
    Poi,
}

impl ProviderCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderCategory::Region => "region",
            ProviderCategory::District => "district",
            ProviderCategory::Place => "place",
            ProviderCategory::Locality => "locality",
            ProviderCategory::Address => "address",
            ProviderCategory::Poi => "poi",
        }
    }

    /// Prefix of context-entry ids belonging to this category.
    #[must_use]
    pub fn context_prefix(self) -> String {
        format!("{}.", self.as_str())
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract place type requested by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaceType {
    /// `(regions)`
    Regions,
    Locality,
    AdministrativeAreaLevel1,
    AdministrativeAreaLevel2,
    Address,
    Establishment,
    /// Kept verbatim; expands to nothing.
    Unrecognized(String),
}

impl PlaceType {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "(regions)" => PlaceType::Regions,
            "locality" => PlaceType::Locality,
            "administrative_area_level_1" => PlaceType::AdministrativeAreaLevel1,
            "administrative_area_level_2" => PlaceType::AdministrativeAreaLevel2,
            "address" => PlaceType::Address,
            "establishment" => PlaceType::Establishment,
            other => PlaceType::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            PlaceType::Regions => "(regions)",
            PlaceType::Locality => "locality",
            PlaceType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            PlaceType::AdministrativeAreaLevel2 => "administrative_area_level_2",
            PlaceType::Address => "address",
            PlaceType::Establishment => "establishment",
            PlaceType::Unrecognized(raw) => raw,
        }
    }

    /// Static mapping table entry for this type.
    #[must_use]
    pub fn provider_categories(&self) -> &'static [ProviderCategory] {
        use ProviderCategory::{Address, District, Locality, Place, Poi, Region};
        match self {
            PlaceType::Regions => &[Region, Place],
            PlaceType::Locality => &[Place, Locality],
            PlaceType::AdministrativeAreaLevel1 => &[Region],
            PlaceType::AdministrativeAreaLevel2 => &[District, Place],
            PlaceType::Address => &[Address, Place, Poi],
            PlaceType::Establishment => &[Poi, Place],
            PlaceType::Unrecognized(_) => &[],
        }
    }
}

impl From<&str> for PlaceType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of requested place types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeFilter(Vec<PlaceType>);

impl TypeFilter {
    #[must_use]
    pub fn new(types: Vec<PlaceType>) -> Self {
        Self(types)
    }

    /// Builds a filter from raw type names.
    #[must_use]
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|s| PlaceType::parse(s.as_ref()))
            .collect()
    }

    /// Default filter of the labelled autocomplete: regions and localities.
    #[must_use]
    pub fn regions_and_localities() -> Self {
        Self(vec![
            PlaceType::Regions,
            PlaceType::Locality,
            PlaceType::AdministrativeAreaLevel1,
            PlaceType::AdministrativeAreaLevel2,
        ])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, place_type: &PlaceType) -> bool {
        self.0.contains(place_type)
    }

    #[must_use]
    pub fn contains_any(&self, place_types: &[PlaceType]) -> bool {
        place_types.iter().any(|t| self.contains(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaceType> {
        self.0.iter()
    }

    /// Expands every type through the mapping table, keeping the first
    /// occurrence of each provider category.
    #[must_use]
    pub fn provider_categories(&self) -> Vec<ProviderCategory> {
        let mut expanded: Vec<ProviderCategory> = Vec::new();
        for category in self.0.iter().flat_map(PlaceType::provider_categories) {
            if !expanded.contains(category) {
                expanded.push(*category);
            }
        }
        expanded
    }

    /// Comma-joined provider categories, or `None` when nothing maps.
    #[must_use]
    pub fn provider_param(&self) -> Option<String> {
        let categories = self.provider_categories();
        if categories.is_empty() {
            return None;
        }
        Some(
            categories
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl FromIterator<PlaceType> for TypeFilter {
    fn from_iter<T: IntoIterator<Item = PlaceType>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

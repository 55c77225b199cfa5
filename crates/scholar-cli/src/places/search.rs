use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use scholar_core::AppConfig;
use scholar_places::{
    derive_display_value, ComponentRestrictions, GeocoderFactory, MapboxGeocoderFactory,
    PlacesAutocomplete, PlacesAutocompleteProps, SelectionResult, TypeFilter,
};

/// Run one lookup through a mounted place field and print the suggestions.
///
/// # Errors
///
/// Returns an error if no access token is configured, the geocoder cannot be
/// built, the lookup fails, or `pick` is out of range.
pub(crate) async fn run_places_search(
    config: &AppConfig,
    query: &str,
    types: TypeFilter,
    countries: &[String],
    pick: Option<usize>,
) -> anyhow::Result<()> {
    if scholar_core::access_token().is_none() {
        anyhow::bail!("MAPBOX_ACCESS_TOKEN is required for place search");
    }

    let factory = Rc::new(MapboxGeocoderFactory::from_app_config(config));
    let selected: Rc<RefCell<Option<SelectionResult>>> = Rc::new(RefCell::new(None));

    let mut props = PlacesAutocompleteProps::new(
        "Location",
        "",
        Rc::new(|value: &str| tracing::debug!(value, "field value changed")),
    );
    props.types = types.clone();
    props.component_restrictions = ComponentRestrictions::countries(countries.iter().cloned());
    props.on_place_select = Some({
        let selected = Rc::clone(&selected);
        Rc::new(move |result: &SelectionResult| {
            *selected.borrow_mut() = Some(result.clone());
        })
    });

    let field = PlacesAutocomplete::mount(
        props,
        Rc::clone(&factory) as Rc<dyn GeocoderFactory>,
    );
    if field.binding().is_degraded() {
        anyhow::bail!("geocoder could not be initialized; see logs for details");
    }
    let geocoder = factory
        .latest()
        .context("geocoder was not created for the mounted field")?;

    if let Some(input) = field.binding().widget_input() {
        input.type_text(query);
    }
    let suggestions = geocoder.lookup(query).await?;

    if suggestions.is_empty() {
        println!("no places found for '{query}'");
        return Ok(());
    }

    println!("{:<4}{:<28}PLACE", "#", "VALUE");
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:<4}{:<28}{}",
            i,
            derive_display_value(&types, suggestion),
            suggestion.display_name
        );
    }

    if let Some(index) = pick {
        let node = geocoder.node().context("geocoder node is not mounted")?;
        if !node.choose(index) {
            anyhow::bail!(
                "no suggestion at index {index}; {} available",
                suggestions.len()
            );
        }
        let value = field.value();
        let picked = selected.borrow().clone();
        if let Some(result) = picked {
            println!();
            println!("selected: {value}");
            println!("place:    {}", result.display_name);
            println!(
                "location: {:.5}, {:.5}",
                result.geometry.latitude(),
                result.geometry.longitude()
            );
        }
    }

    field.unmount();
    Ok(())
}

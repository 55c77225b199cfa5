//! `MapboxGeocoder` driven end to end through a mounted binding.

mod common;

use std::rc::Rc;

use common::CallLog;
use scholar_places::{
    EventKind, MapboxGeocoderFactory, PlacesAutocomplete, PlacesAutocompleteProps, PlacesError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mount(server: &MockServer, log: &CallLog) -> (Rc<MapboxGeocoderFactory>, PlacesAutocomplete) {
    let factory = Rc::new(MapboxGeocoderFactory::with_base_url(
        &server.uri(),
        5,
        "scholar-test",
    ));
    let mut props = PlacesAutocompleteProps::new("City", "", log.on_change());
    props.on_place_select = Some(log.on_place_select());
    let field = PlacesAutocomplete::mount_with_credential(
        props,
        Rc::clone(&factory) as Rc<dyn scholar_places::GeocoderFactory>,
        Some("pk.test".to_string()),
    );
    (factory, field)
}

fn body() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {
                "id": "place.1",
                "place_type": ["place"],
                "text": "Makati",
                "place_name": "Makati, Metro Manila, Philippines",
                "geometry": { "type": "Point", "coordinates": [121.03, 14.55] },
                "context": [{ "id": "region.1", "text": "Metro Manila" }]
            },
            {
                "id": "place.2",
                "place_type": ["place"],
                "text": "Makilala",
                "place_name": "Makilala, Cotabato, Philippines",
                "geometry": { "type": "Point", "coordinates": [125.09, 6.96] },
                "context": [{ "id": "region.2", "text": "Soccsksargen" }]
            }
        ]
    })
}

#[tokio::test]
async fn lookup_then_choose_updates_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocoding/v5/mapbox.places/Mak.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .expect(1)
        .mount(&server)
        .await;

    let log = CallLog::default();
    let (factory, field) = mount(&server, &log);
    let geocoder = factory.latest().expect("geocoder");
    assert_eq!(geocoder.listener_count(EventKind::Result), 1);

    let suggestions = geocoder.lookup("Mak").await.expect("lookup");
    assert_eq!(suggestions.len(), 2);

    let node = geocoder.node().expect("node");
    assert_eq!(node.suggestions().len(), 2);
    assert!(node.choose(1));

    assert_eq!(log.entries(), vec!["change:Soccsksargen", "select:place.2"]);
    assert_eq!(field.value(), "Soccsksargen");
    assert!(node.suggestions().is_empty());
}

#[tokio::test]
async fn short_query_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .expect(0)
        .mount(&server)
        .await;

    let log = CallLog::default();
    let (factory, _field) = mount(&server, &log);
    let geocoder = factory.latest().expect("geocoder");

    let suggestions = geocoder.lookup(" M ").await.expect("lookup");
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn lookup_after_unmount_is_rejected() {
    let server = MockServer::start().await;

    let log = CallLog::default();
    let (factory, field) = mount(&server, &log);
    let geocoder = factory.latest().expect("geocoder");
    field.unmount();

    assert!(geocoder.is_removed());
    assert_eq!(geocoder.listener_count(EventKind::Result), 0);
    assert_eq!(geocoder.listener_count(EventKind::Clear), 0);
    let err = geocoder.lookup("Makati").await.expect_err("removed");
    assert!(matches!(err, PlacesError::WidgetRemoved));
}

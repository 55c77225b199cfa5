use super::*;

fn test_client(base_url: &str) -> MapboxClient {
    MapboxClient::with_base_url("pk.test", 30, "scholar-test", base_url)
        .expect("client construction should not fail")
}

fn options(types: Option<&str>, countries: &str) -> GeocoderOptions {
    GeocoderOptions {
        access_token: "pk.test".to_string(),
        types: types.map(str::to_string),
        countries: countries.to_string(),
        placeholder: "Search for a location".to_string(),
        limit: 5,
        min_length: 2,
        fuzzy_match: true,
        routing: false,
    }
}

#[test]
fn build_url_constructs_geocoding_path_and_query() {
    let client = test_client("https://api.mapbox.com");
    let url = client
        .build_url("Manila", &options(Some("region,place"), "ph"))
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://api.mapbox.com/geocoding/v5/mapbox.places/Manila.json?access_token=pk.test&autocomplete=true&fuzzyMatch=true&limit=5&routing=false&country=ph&types=region%2Cplace"
    );
}

#[test]
fn build_url_keeps_base_path_prefix() {
    let client = test_client("http://localhost:9000/proxy/");
    let url = client.build_url("Cebu", &options(None, "ph")).expect("url");
    assert!(
        url.as_str()
            .starts_with("http://localhost:9000/proxy/geocoding/v5/mapbox.places/Cebu.json?"),
        "unexpected url: {url}"
    );
}

#[test]
fn build_url_omits_types_when_unrestricted() {
    let client = test_client("https://api.mapbox.com/");
    let url = client.build_url("Davao", &options(None, "ph,sg")).expect("url");
    assert!(!url.as_str().contains("types="));
    assert!(url.as_str().contains("country=ph%2Csg"));
}

#[test]
fn build_url_encodes_query_segment() {
    let client = test_client("https://api.mapbox.com");
    let url = client
        .build_url("Quezon City/Metro", &options(None, "ph"))
        .expect("url");
    assert!(
        url.path().ends_with("/Quezon%20City%2FMetro.json"),
        "query should be one encoded segment: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = MapboxClient::with_base_url("pk.test", 30, "ua", "not a url")
        .expect_err("should reject");
    assert!(matches!(err, PlacesError::InvalidBaseUrl { .. }));
}

#[test]
fn redacted_url_hides_token() {
    let client = test_client("https://api.mapbox.com");
    let url = client.build_url("Iloilo", &options(None, "ph")).expect("url");
    let masked = redact_token(&url);
    assert!(!masked.contains("pk.test"));
    assert!(masked.contains("Iloilo.json"));
}

#[test]
fn debug_redacts_token() {
    let client = test_client("https://api.mapbox.com");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("pk.test"));
}

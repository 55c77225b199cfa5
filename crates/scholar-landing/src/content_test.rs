use std::env::VarError;
use std::path::Path;

use super::*;
use crate::icon::{Accent, Icon};
use crate::stats::StatCard;

fn brand(name: &str) -> BrandConfig {
    let name = name.to_string();
    BrandConfig::from_lookup(move |key| match key {
        "BRAND_NAME" => Ok(name.clone()),
        _ => Err(VarError::NotPresent),
    })
}

#[test]
fn defaults_follow_brand() {
    let content = LandingContent::for_brand(&brand("Bayanihan Grant"));
    assert_eq!(content.hero.title, "Scholarship");
    assert_eq!(content.logo.text, "Scholarship");
    assert!(content.stats.body.contains("The Bayanihan Grant program"));
    assert!(content.cta.body.contains("Apply for a Bayanihan Grant today"));
    assert!(content.process.body.contains("apply for a Bayanihan Grant"));
}

#[test]
fn defaults_have_expected_shape() {
    let content = LandingContent::for_brand(&brand("Scholarship"));
    assert_eq!(content.stats.items.len(), 4);
    assert_eq!(content.stats.items[1].value, "$750K");
    assert_eq!(content.stats.items[1].icon, Icon::DollarSign);
    assert_eq!(content.testimonials.items.len(), 3);
    assert_eq!(content.testimonials.items[2].initials, "SC");
    assert_eq!(content.process.steps.len(), 6);
    assert_eq!(content.process.steps[0].title, "Create Profile");
    assert_eq!(content.process.steps[5].color, Accent::Emerald);
    assert_eq!(content.process.important_dates.len(), 4);
    assert_eq!(content.cta.primary.href, "/register");
    assert_eq!(content.cta.secondary.label, "Apply Now");
    assert_eq!(content.cta.secondary.href, "/login");
    content.validate().expect("defaults are valid");
}

#[test]
fn overrides_replace_only_named_sections() {
    let yaml = r"
cta:
  heading: Applications close soon
  body: Do not miss the deadline.
  primary: { label: Register, href: /register }
  secondary: { label: Sign in, href: /login }
testimonials:
  heading: Voices
  body: From our scholars.
  items:
    - quote: It changed everything.
      name: Ana Reyes
      role: College Scholar
";
    let mut content = LandingContent::for_brand(&brand("Scholarship"));
    let default_hero = content.hero.clone();
    content.apply(LandingOverrides::from_yaml(yaml).expect("parse"));

    assert_eq!(content.cta.heading, "Applications close soon");
    assert_eq!(content.testimonials.items.len(), 1);
    assert_eq!(content.testimonials.items[0].initials, "AR");
    assert_eq!(content.hero, default_hero);
    content.validate().expect("valid");
}

#[test]
fn empty_yaml_overrides_nothing() {
    let overrides = LandingOverrides::from_yaml("  \n").expect("parse");
    assert_eq!(overrides, LandingOverrides::default());
}

#[test]
fn unknown_section_is_rejected() {
    let err = LandingOverrides::from_yaml("footer:\n  text: hi\n").unwrap_err();
    assert!(matches!(err, LandingError::Parse(_)));
}

#[test]
fn validate_rejects_empty_hero_title() {
    let mut content = LandingContent::for_brand(&brand("Scholarship"));
    content.hero.title = "  ".to_string();
    let err = content.validate().unwrap_err();
    assert!(err.to_string().contains("hero title must be non-empty"));
}

#[test]
fn validate_rejects_too_many_stats() {
    let mut content = LandingContent::for_brand(&brand("Scholarship"));
    content.stats.items = (0..=MAX_STATS)
        .map(|i| StatCard {
            icon: Icon::Users,
            value: i.to_string(),
            label: format!("Stat {i}"),
            description: String::new(),
        })
        .collect();
    let err = content.validate().unwrap_err();
    assert!(err.to_string().contains("at most 12"));
}

#[test]
fn validate_rejects_nameless_testimonial() {
    let mut content = LandingContent::for_brand(&brand("Scholarship"));
    content.testimonials.items[1].name = String::new();
    let err = content.validate().unwrap_err();
    assert!(err.to_string().contains("testimonial #2 name"));
}

#[test]
fn load_without_path_returns_defaults() {
    let b = brand("Scholarship");
    let content = load_landing(None, &b).expect("load");
    assert_eq!(content, LandingContent::for_brand(&b));
}

#[test]
fn load_missing_file_is_io_error() {
    let err = load_landing(Some(Path::new("/nonexistent/landing.yaml")), &brand("X")).unwrap_err();
    assert!(matches!(err, LandingError::Io { .. }));
}

#[test]
fn load_landing_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("landing.yaml");
    assert!(path.exists(), "landing.yaml missing at {path:?}");
    let content = load_landing(Some(&path), &brand("Scholarship")).expect("failed to load landing.yaml");
    assert!(!content.stats.items.is_empty());
    assert!(content.stats.items.len() <= MAX_STATS);
}

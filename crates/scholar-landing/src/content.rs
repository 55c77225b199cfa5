//! The full set of landing sections and its optional YAML override.

use std::path::Path;

use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::cta::CtaSection;
use crate::error::LandingError;
use crate::hero::HeroSection;
use crate::logo::AppLogo;
use crate::process::ProcessSection;
use crate::stats::StatsSection;
use crate::testimonials::TestimonialsSection;

/// Upper bound on impact stats shown in one grid.
pub const MAX_STATS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingContent {
    pub logo: AppLogo,
    pub hero: HeroSection,
    pub stats: StatsSection,
    pub testimonials: TestimonialsSection,
    pub process: ProcessSection,
    pub cta: CtaSection,
}

/// Sections replaced wholesale by a content file. Absent keys keep the
/// brand-derived defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LandingOverrides {
    pub hero: Option<HeroSection>,
    pub stats: Option<StatsSection>,
    pub testimonials: Option<TestimonialsSection>,
    pub process: Option<ProcessSection>,
    pub cta: Option<CtaSection>,
}

impl LandingOverrides {
    /// Parses override YAML. An empty document overrides nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Parse`] if the YAML is malformed or names an
    /// unknown section.
    pub fn from_yaml(yaml: &str) -> Result<Self, LandingError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl LandingContent {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            logo: AppLogo::for_brand(brand),
            hero: HeroSection::for_brand(brand),
            stats: StatsSection::for_brand(brand),
            testimonials: TestimonialsSection::for_brand(brand),
            process: ProcessSection::for_brand(brand),
            cta: CtaSection::for_brand(brand),
        }
    }

    pub fn apply(&mut self, overrides: LandingOverrides) {
        if let Some(hero) = overrides.hero {
            self.hero = hero;
        }
        if let Some(stats) = overrides.stats {
            self.stats = stats;
        }
        if let Some(mut testimonials) = overrides.testimonials {
            testimonials.fill_initials();
            self.testimonials = testimonials;
        }
        if let Some(process) = overrides.process {
            self.process = process;
        }
        if let Some(cta) = overrides.cta {
            self.cta = cta;
        }
    }

    /// Checks that every section can be rendered meaningfully.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::Validation`] describing the first problem.
    pub fn validate(&self) -> Result<(), LandingError> {
        require(&self.hero.title, "hero title")?;
        require(&self.hero.primary_action.label, "hero primary action label")?;
        require(&self.hero.primary_action.href, "hero primary action href")?;
        require(&self.stats.heading, "stats heading")?;
        require(&self.testimonials.heading, "testimonials heading")?;
        require(&self.process.heading, "process heading")?;
        require(&self.cta.heading, "call-to-action heading")?;

        if self.stats.items.len() > MAX_STATS {
            return Err(LandingError::Validation(format!(
                "{} stats configured; at most {MAX_STATS} are allowed",
                self.stats.items.len()
            )));
        }
        for (i, stat) in self.stats.items.iter().enumerate() {
            require(&stat.label, &format!("stat #{} label", i + 1))?;
            require(&stat.value, &format!("stat '{}' value", stat.label))?;
        }
        for (i, testimonial) in self.testimonials.items.iter().enumerate() {
            require(&testimonial.name, &format!("testimonial #{} name", i + 1))?;
            require(
                &testimonial.quote,
                &format!("testimonial from '{}' quote", testimonial.name),
            )?;
        }
        for (i, step) in self.process.steps.iter().enumerate() {
            require(&step.title, &format!("process step #{} title", i + 1))?;
        }
        Ok(())
    }
}

fn require(value: &str, what: &str) -> Result<(), LandingError> {
    if value.trim().is_empty() {
        return Err(LandingError::Validation(format!("{what} must be non-empty")));
    }
    Ok(())
}

/// Builds the landing content for `brand`, applying the overrides in `path`
/// when given.
///
/// # Errors
///
/// Returns [`LandingError::Io`] if the file cannot be read,
/// [`LandingError::Parse`] if it is not valid override YAML, or
/// [`LandingError::Validation`] if the merged content fails validation.
pub fn load_landing(path: Option<&Path>, brand: &BrandConfig) -> Result<LandingContent, LandingError> {
    let mut content = LandingContent::for_brand(brand);

    if let Some(path) = path {
        let yaml = std::fs::read_to_string(path).map_err(|e| LandingError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        content.apply(LandingOverrides::from_yaml(&yaml)?);
        tracing::info!(path = %path.display(), "landing content overrides applied");
    }

    content.validate()?;
    Ok(content)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;

//! Landing page content for the scholarship portal.
//!
//! Every section is a plain record built from the active [`BrandConfig`];
//! [`LandingContent`] gathers them, can be overridden from YAML, and renders
//! to a complete HTML page.
//!
//! [`BrandConfig`]: scholar_core::BrandConfig

pub mod content;
pub mod cta;
pub mod error;
pub mod hero;
pub mod icon;
pub mod logo;
pub mod page;
pub mod process;
pub mod stats;
pub mod testimonials;

pub use content::{load_landing, LandingContent, LandingOverrides, MAX_STATS};
pub use cta::CtaSection;
pub use error::LandingError;
pub use hero::{HeroSection, HeroStat, ScholarshipCard, StepCard};
pub use icon::{Accent, Icon, Link};
pub use logo::AppLogo;
pub use page::render_landing;
pub use process::{ImportantDate, ProcessSection, ProcessStep};
pub use stats::{StatCard, StatsSection};
pub use testimonials::{Testimonial, TestimonialsSection};

use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::icon::Link;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaSection {
    pub heading: String,
    pub body: String,
    pub primary: Link,
    pub secondary: Link,
}

impl CtaSection {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            heading: "Ready to Begin Your Scholarship Journey?".to_string(),
            body: format!(
                "Take the first step toward academic success and financial support. \
                 Apply for a {} today and invest in your future.",
                brand.name
            ),
            primary: Link::new("Create Account", "/register"),
            secondary: Link::new("Apply Now", "/login"),
        }
    }
}

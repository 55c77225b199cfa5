use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLogo {
    pub text: String,
    pub icon: Icon,
}

impl AppLogo {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            text: brand.logo_text.clone(),
            icon: Icon::GraduationCap,
        }
    }
}

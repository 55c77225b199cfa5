use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub icon: Icon,
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSection {
    pub heading: String,
    pub body: String,
    pub items: Vec<StatCard>,
}

impl StatsSection {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            heading: "Our Impact".to_string(),
            body: format!(
                "The {} program has made a significant difference in the lives of students and communities.",
                brand.name
            ),
            items: vec![
                card(
                    Icon::GraduationCap,
                    "100+",
                    "Scholars Supported",
                    "Students receiving financial aid annually",
                ),
                card(
                    Icon::DollarSign,
                    "$750K",
                    "Scholarship Funding",
                    "Total annual scholarship budget",
                ),
                card(
                    Icon::HeartHandshake,
                    "1,000+",
                    "Service Hours",
                    "Community service completed by scholars",
                ),
                card(
                    Icon::Users,
                    "85%",
                    "Graduation Rate",
                    "Scholars who complete their degrees",
                ),
            ],
        }
    }
}

fn card(icon: Icon, value: &str, label: &str, description: &str) -> StatCard {
    StatCard {
        icon,
        value: value.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::icon::{Accent, Icon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub color: Accent,
}

impl ProcessStep {
    #[must_use]
    pub fn text_class(&self) -> String {
        self.color.text_class()
    }

    #[must_use]
    pub fn bg_class(&self) -> String {
        self.color.bg_class()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDate {
    pub label: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSection {
    pub heading: String,
    pub body: String,
    pub steps: Vec<ProcessStep>,
    #[serde(default)]
    pub important_dates: Vec<ImportantDate>,
}

impl ProcessSection {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            heading: "Application Process".to_string(),
            body: format!(
                "Follow these simple steps to apply for a {} and begin your journey toward academic success.",
                brand.name
            ),
            steps: vec![
                step(
                    Icon::UserPlus,
                    "Create Profile",
                    "Sign up and complete your student profile with personal and academic information.",
                    Accent::Blue,
                ),
                step(
                    Icon::FileText,
                    "Apply for Scholarship",
                    "Select a scholarship program that matches your academic level and submit your application.",
                    Accent::Purple,
                ),
                step(
                    Icon::Upload,
                    "Upload Documents",
                    "Submit all required documentation to verify your eligibility for the scholarship.",
                    Accent::Orange,
                ),
                step(
                    Icon::ClipboardCheck,
                    "Application Review",
                    "Our team will review your application and documents to determine eligibility.",
                    Accent::Green,
                ),
                step(
                    Icon::HeartHandshake,
                    "Complete Service",
                    "Fulfill your community service requirement as part of the scholarship program.",
                    Accent::Red,
                ),
                step(
                    Icon::Wallet,
                    "Receive Funding",
                    "Once approved and service is completed, scholarship funds will be disbursed.",
                    Accent::Emerald,
                ),
            ],
            important_dates: vec![
                date("Application Deadline", "3 months from now"),
                date("Document Submission", "Within 2 weeks of application"),
                date("Application Review Period", "2-4 weeks after submission"),
                date("Community Service Completion", "Before end of semester"),
            ],
        }
    }
}

fn step(icon: Icon, title: &str, description: &str, color: Accent) -> ProcessStep {
    ProcessStep {
        icon,
        title: title.to_string(),
        description: description.to_string(),
        color,
    }
}

fn date(label: &str, when: &str) -> ImportantDate {
    ImportantDate {
        label: label.to_string(),
        when: when.to_string(),
    }
}

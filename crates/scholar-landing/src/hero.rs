//! Hero banner: headline, calls to action, quick stats and featured cards.

use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, Link};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCard {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    /// Entrance animation delay.
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipCard {
    pub title: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub requirements: String,
    pub icon: Icon,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    pub badge: String,
    pub lead: String,
    pub title: String,
    pub subtitle: String,
    pub primary_action: Link,
    pub secondary_action: Link,
    pub highlights: Vec<String>,
    pub stats: Vec<HeroStat>,
    pub steps: Vec<StepCard>,
    pub scholarships: Vec<ScholarshipCard>,
}

impl HeroSection {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        Self {
            badge: "Applications Open for 2024-2025".to_string(),
            lead: "Unlock Your Potential with".to_string(),
            title: brand.hero_title.clone(),
            subtitle: "Empowering exceptional students through financial support, mentorship, \
                       and community engagement to build the leaders of tomorrow."
                .to_string(),
            primary_action: Link::new("Start Your Application", "/register"),
            secondary_action: Link::new("Explore Scholarships", "#scholarships"),
            highlights: vec![
                "Tuition and book allowances".to_string(),
                "One-on-one mentorship".to_string(),
                "Community service placements".to_string(),
            ],
            stats: vec![
                stat("100+", "Scholars Supported", Icon::Users),
                stat("$750,000", "Annual Funding", Icon::BookOpen),
                stat("85%", "Graduation Rate", Icon::TrendingUp),
                stat("1,000+", "Service Hours", Icon::HeartHandshake),
            ],
            steps: vec![
                StepCard {
                    number: 1,
                    title: "Create Your Profile".to_string(),
                    description: "Register and tell us about your studies and goals.".to_string(),
                    icon: Icon::UserPlus,
                    delay_ms: 200,
                },
                StepCard {
                    number: 2,
                    title: "Submit Your Application".to_string(),
                    description: "Choose a program and upload your documents.".to_string(),
                    icon: Icon::FileText,
                    delay_ms: 400,
                },
                StepCard {
                    number: 3,
                    title: "Serve and Get Funded".to_string(),
                    description: "Complete your service hours and receive your award.".to_string(),
                    icon: Icon::Wallet,
                    delay_ms: 600,
                },
            ],
            scholarships: vec![
                ScholarshipCard {
                    title: "High School Scholarship".to_string(),
                    amount: "$1,500".to_string(),
                    kind: "High School".to_string(),
                    requirements: "Enrolled in grades 9-12 with good academic standing".to_string(),
                    icon: Icon::School,
                    delay_ms: 800,
                },
                ScholarshipCard {
                    title: "College Scholarship".to_string(),
                    amount: "$5,000".to_string(),
                    kind: "College".to_string(),
                    requirements: "Full-time undergraduate with 20 service hours per term"
                        .to_string(),
                    icon: Icon::GraduationCap,
                    delay_ms: 1000,
                },
            ],
        }
    }
}

fn stat(value: &str, label: &str, icon: Icon) -> HeroStat {
    HeroStat {
        value: value.to_string(),
        label: label.to_string(),
        icon,
    }
}

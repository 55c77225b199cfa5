use scholar_core::BrandConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    /// Avatar fallback; derived from `name` when left empty.
    #[serde(default)]
    pub initials: String,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            quote: quote.into(),
            initials: initials(&name),
            name,
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsSection {
    pub heading: String,
    pub body: String,
    pub items: Vec<Testimonial>,
}

impl TestimonialsSection {
    #[must_use]
    pub fn for_brand(brand: &BrandConfig) -> Self {
        let name = &brand.name;
        Self {
            heading: "Scholar Testimonials".to_string(),
            body: format!(
                "Hear from students whose academic journeys have been transformed by the {name} program."
            ),
            items: vec![
                Testimonial::new(
                    format!(
                        "The {name} has been life-changing. Not only did it ease my financial burden, \
                         but the community service component helped me grow as a person."
                    ),
                    "Maria Santos",
                    "College Scholar",
                ),
                Testimonial::new(
                    "As a high school student, the Future Leaders Scholarship gave me confidence \
                     and resources to pursue my academic goals. The mentorship was invaluable.",
                    "James Wilson",
                    "High School Scholar",
                ),
                Testimonial::new(
                    format!(
                        "The application process was straightforward, and the support from the \
                         {name} team throughout my academic journey has been exceptional."
                    ),
                    "Sophia Chen",
                    "College Scholar",
                ),
            ],
        }
    }

    /// Fills in initials the content source left blank.
    pub(crate) fn fill_initials(&mut self) {
        for item in &mut self.items {
            if item.initials.trim().is_empty() {
                item.initials = initials(&item.name);
            }
        }
    }
}

/// Uppercased first letters of the first and last words of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.next_back().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("Maria Santos"), "MS");
        assert_eq!(initials("juan dela cruz"), "JC");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn quotes_mention_brand() {
        let brand = BrandConfig::from_lookup(|key| match key {
            "BRAND_NAME" => Ok("Acme Grant".to_string()),
            _ => Err(std::env::VarError::NotPresent),
        });
        let section = TestimonialsSection::for_brand(&brand);
        assert_eq!(section.items.len(), 3);
        assert!(section.items[0].quote.starts_with("The Acme Grant has been life-changing."));
        assert_eq!(section.items[1].initials, "JW");
        assert!(section.body.contains("Acme Grant program"));
    }
}

use serde::{Deserialize, Serialize};

/// Icon from the lucide set, rendered as a `data-lucide` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    BookOpen,
    CheckCircle,
    ClipboardCheck,
    DollarSign,
    FileText,
    GraduationCap,
    HeartHandshake,
    MousePointer,
    School,
    TrendingUp,
    Upload,
    UserPlus,
    Users,
    Wallet,
}

impl Icon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::BookOpen => "book-open",
            Icon::CheckCircle => "check-circle",
            Icon::ClipboardCheck => "clipboard-check",
            Icon::DollarSign => "dollar-sign",
            Icon::FileText => "file-text",
            Icon::GraduationCap => "graduation-cap",
            Icon::HeartHandshake => "heart-handshake",
            Icon::MousePointer => "mouse-pointer",
            Icon::School => "school",
            Icon::TrendingUp => "trending-up",
            Icon::Upload => "upload",
            Icon::UserPlus => "user-plus",
            Icon::Users => "users",
            Icon::Wallet => "wallet",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color family used to tint a process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Orange,
    Green,
    Red,
    Emerald,
}

impl Accent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Red => "red",
            Accent::Emerald => "emerald",
        }
    }

    #[must_use]
    pub fn text_class(self) -> String {
        format!("text-{}-500", self.as_str())
    }

    #[must_use]
    pub fn bg_class(self) -> String {
        let color = self.as_str();
        format!("bg-{color}-50 dark:bg-{color}-950/30")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_classes() {
        assert_eq!(Accent::Blue.text_class(), "text-blue-500");
        assert_eq!(Accent::Emerald.bg_class(), "bg-emerald-50 dark:bg-emerald-950/30");
    }

    #[test]
    fn icon_serializes_as_lucide_name() {
        let json = serde_json::to_string(&Icon::GraduationCap).expect("serialize");
        assert_eq!(json, "\"graduation-cap\"");
        assert_eq!(Icon::HeartHandshake.to_string(), "heart-handshake");
    }
}

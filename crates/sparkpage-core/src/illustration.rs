//! Illustration keyword resolution for page sections.
//!
//! The model describes illustrations with free-text keywords; the
//! presentation layer maps them onto a small fixed icon set.

/// The icon set the presentation layer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Lightbulb,
    Zap,
    Users,
    Target,
    CheckCircle,
    Rocket,
    Paintbrush,
    Code,
    Sparkle,
}

impl Icon {
    /// Stable lowercase name, usable as a CSS class or asset key.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Lightbulb => "lightbulb",
            Icon::Zap => "zap",
            Icon::Users => "users",
            Icon::Target => "target",
            Icon::CheckCircle => "check-circle",
            Icon::Rocket => "rocket",
            Icon::Paintbrush => "paintbrush",
            Icon::Code => "code",
            Icon::Sparkle => "sparkle",
        }
    }

    /// A terminal-friendly glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Lightbulb => "💡",
            Icon::Zap => "⚡",
            Icon::Users => "👥",
            Icon::Target => "🎯",
            Icon::CheckCircle => "✅",
            Icon::Rocket => "🚀",
            Icon::Paintbrush => "🖌️",
            Icon::Code => "💻",
            Icon::Sparkle => "✨",
        }
    }
}

// Tag order is the tie-break: "solution" is probed before "problem" so a
// keyword mentioning both resolves to the solution icon.
const ORDERED_TAGS: [(&str, Icon); 8] = [
    ("solution", Icon::CheckCircle),
    ("problem", Icon::Target),
    ("features", Icon::Zap),
    ("users", Icon::Users),
    ("idea", Icon::Lightbulb),
    ("rocket", Icon::Rocket),
    ("design", Icon::Paintbrush),
    ("code", Icon::Code),
];

/// Resolve a free-text illustration keyword to an icon.
///
/// Case-insensitive substring match against the fixed tag order; unknown
/// keywords fall back to the sparkle icon. Pure and total.
pub fn resolve(keyword: &str) -> Icon {
    let keyword = keyword.to_lowercase();
    for (tag, icon) in ORDERED_TAGS {
        if keyword.contains(tag) {
            return icon;
        }
    }
    Icon::Sparkle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve() {
        assert_eq!(resolve("rocket"), Icon::Rocket);
        assert_eq!(resolve("a designer's touch"), Icon::Paintbrush);
        assert_eq!(resolve("code-review"), Icon::Code);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve("ROCKET launch"), Icon::Rocket);
        assert_eq!(resolve("Big Idea"), Icon::Lightbulb);
    }

    #[test]
    fn solution_wins_the_tie_break() {
        assert_eq!(resolve("solution-and-problem"), Icon::CheckCircle);
        assert_eq!(resolve("problem then solution"), Icon::CheckCircle);
    }

    #[test]
    fn unknown_keywords_fall_back_to_sparkle() {
        assert_eq!(resolve("unknown-thing"), Icon::Sparkle);
        assert_eq!(resolve(""), Icon::Sparkle);
    }

    #[test]
    fn icon_names_are_stable() {
        assert_eq!(Icon::CheckCircle.name(), "check-circle");
        assert_eq!(resolve("users everywhere").name(), "users");
    }
}

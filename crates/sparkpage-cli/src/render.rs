//! Render a generated page as terminal text, markdown, or a standalone
//! HTML page.

use anyhow::Result;
use clap::ValueEnum;
use html_escape::encode_text;

use sparkpage_core::{illustration, GeneratedAppData, Icon, Section};

/// Supported output formats.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Format {
    /// Plain text for the terminal
    Text,
    /// Markdown document
    Markdown,
    /// Standalone HTML page
    Html,
    /// Raw page JSON
    Json,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no skipped variants")
            .get_name()
            .fmt(f)
    }
}

/// Render the page in the requested format.
pub fn render(page: &GeneratedAppData, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => text(page),
        Format::Markdown => markdown(page),
        Format::Html => html(page),
        Format::Json => serde_json::to_string_pretty(page)?,
    })
}

fn glyph(keyword: &str) -> &'static str {
    illustration::resolve(keyword).glyph()
}

fn statements(page: &GeneratedAppData) -> [&Section; 3] {
    [
        &page.problem_statement,
        &page.solution_statement,
        &page.target_audience,
    ]
}

fn text(page: &GeneratedAppData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n{}\n",
        glyph(&page.hero_illustration),
        page.app_name,
        page.tagline
    ));

    out.push_str("\nFeatures\n");
    for feature in &page.features {
        out.push_str(&format!(
            "  {} {}: {}\n",
            glyph(&feature.illustration),
            feature.title,
            feature.description
        ));
    }

    for section in statements(page) {
        out.push_str(&format!(
            "\n{} {}\n  {}\n",
            glyph(&section.illustration),
            section.title,
            section.description
        ));
    }

    out.push_str(&format!(
        "\n{}\n  {}\n  [ {} ]\n",
        page.cta.title, page.cta.description, page.cta.button_text
    ));
    out
}

fn markdown(page: &GeneratedAppData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# {} {}\n\n> {}\n",
        glyph(&page.hero_illustration),
        page.app_name,
        page.tagline
    ));

    out.push_str("\n## Features\n\n");
    for feature in &page.features {
        out.push_str(&format!(
            "- {} **{}**: {}\n",
            glyph(&feature.illustration),
            feature.title,
            feature.description
        ));
    }

    for section in statements(page) {
        out.push_str(&format!(
            "\n## {} {}\n\n{}\n",
            glyph(&section.illustration),
            section.title,
            section.description
        ));
    }

    out.push_str(&format!(
        "\n## {}\n\n{}\n\n**[ {} ]**\n",
        page.cta.title, page.cta.description, page.cta.button_text
    ));
    out
}

fn html_section(icon: Icon, title: &str, description: &str, class: &str) -> String {
    format!(
        "  <section class=\"{}\">\n    <span class=\"icon icon-{}\">{}</span>\n    <h2>{}</h2>\n    <p>{}</p>\n  </section>\n",
        class,
        icon.name(),
        icon.glyph(),
        encode_text(title),
        encode_text(description)
    )
}

fn html(page: &GeneratedAppData) -> String {
    let hero = illustration::resolve(&page.hero_illustration);

    let mut body = String::new();
    body.push_str(&format!(
        "  <header class=\"hero\">\n    <span class=\"icon icon-{}\">{}</span>\n    <h1>{}</h1>\n    <p class=\"tagline\">{}</p>\n  </header>\n",
        hero.name(),
        hero.glyph(),
        encode_text(&page.app_name),
        encode_text(&page.tagline)
    ));

    body.push_str("  <section class=\"features\">\n    <h2>Features</h2>\n    <ul>\n");
    for feature in &page.features {
        let icon = illustration::resolve(&feature.illustration);
        body.push_str(&format!(
            "      <li><span class=\"icon icon-{}\">{}</span><h3>{}</h3><p>{}</p></li>\n",
            icon.name(),
            icon.glyph(),
            encode_text(&feature.title),
            encode_text(&feature.description)
        ));
    }
    body.push_str("    </ul>\n  </section>\n");

    for (section, class) in statements(page)
        .into_iter()
        .zip(["problem", "solution", "audience"])
    {
        body.push_str(&html_section(
            illustration::resolve(&section.illustration),
            &section.title,
            &section.description,
            class,
        ));
    }

    body.push_str(&format!(
        "  <section class=\"cta\">\n    <h2>{}</h2>\n    <p>{}</p>\n    <button>{}</button>\n  </section>\n",
        encode_text(&page.cta.title),
        encode_text(&page.cta.description),
        encode_text(&page.cta.button_text)
    ));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(&page.app_name),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkpage_core::CallToAction;

    fn page() -> GeneratedAppData {
        GeneratedAppData {
            app_name: "PawPal".into(),
            tagline: "Walks on demand".into(),
            hero_illustration: "rocket".into(),
            features: vec![
                Section {
                    title: "First".into(),
                    description: "a".into(),
                    illustration: "zap".into(),
                },
                Section {
                    title: "Second".into(),
                    description: "b".into(),
                    illustration: "code".into(),
                },
            ],
            problem_statement: Section {
                title: "The Problem".into(),
                description: "p".into(),
                illustration: "problem".into(),
            },
            solution_statement: Section {
                title: "Our Solution".into(),
                description: "s".into(),
                illustration: "solution".into(),
            },
            target_audience: Section {
                title: "Who It's For".into(),
                description: "t".into(),
                illustration: "users".into(),
            },
            cta: CallToAction {
                title: "Ready?".into(),
                description: "go".into(),
                button_text: "Launch Now".into(),
            },
        }
    }

    #[test]
    fn text_keeps_feature_order() {
        let out = text(&page());
        let first = out.find("First").unwrap();
        let second = out.find("Second").unwrap();
        assert!(first < second);
        assert!(out.contains("PawPal"));
        assert!(out.contains("[ Launch Now ]"));
    }

    #[test]
    fn markdown_has_section_headings() {
        let out = markdown(&page());
        assert!(out.contains("# 🚀 PawPal"));
        assert!(out.contains("## Features"));
        assert!(out.contains("## 🎯 The Problem"));
        assert!(out.contains("## ✅ Our Solution"));
    }

    #[test]
    fn html_escapes_model_text() {
        let mut evil = page();
        evil.app_name = "<script>alert(1)</script>".into();
        let out = html(&evil);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn html_tags_sections_with_resolved_icons() {
        let out = html(&page());
        assert!(out.contains("icon-rocket"));
        assert!(out.contains("icon-check-circle"));
        assert!(out.contains("icon-target"));
    }

    #[test]
    fn json_output_uses_wire_names() {
        let out = render(&page(), Format::Json).unwrap();
        assert!(out.contains("\"appName\""));
        assert!(out.contains("\"buttonText\""));
    }
}

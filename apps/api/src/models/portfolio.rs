//! Portfolio data model — the snapshot the rendering engine consumes.
//!
//! The editor owns mutation; this process only reads. Every request carries a
//! complete snapshot, so no field is optional — "absent" is expressed as an
//! empty string or empty vector, and renderers suppress the affected element.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Root aggregate. Sequence order is render order; empty sequences suppress
/// their section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioState {
    pub meta: Meta,
    pub theme: Theme,
    pub profile: Profile,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
}

/// SEO / document metadata. Free-text and URL strings, consumed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub favicon: String,
    pub og_image: String,
}

/// Visual configuration. Color fields are hex strings used verbatim as CSS
/// values; `background_image` may be a URL or a CSS gradient expression, with
/// the empty string meaning "flat background_color, no overlay".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub layout: Layout,
    pub font: Font,
    pub primary_color: String,
    pub background_color: String,
    pub background_image: String,
    /// Overlay opacity in [0, 1]; meaningful only when `background_image` is set.
    pub background_overlay: f64,
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub location: String,
    /// Empty string means "no resume link".
    pub resume_url: String,
}

/// `id` is list identity for the editor only — unique per sequence, never rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// Free-text date range, e.g. "2022 - Present".
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    /// Empty string means "no image block on the card".
    pub image_url: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    /// For `Platform::Email`, conventionally an email-scheme URL ("mailto:...").
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Closed sets
// ────────────────────────────────────────────────────────────────────────────

/// Layout strategy. Deserialization never fails: an unrecognized value falls
/// back to `Bold`, so a malformed editor payload still renders a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Modern,
    Minimal,
    Bold,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Minimal => "minimal",
            Layout::Bold => "bold",
        }
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "modern" => Layout::Modern,
            "minimal" => Layout::Minimal,
            "bold" => Layout::Bold,
            _ => Layout::Bold,
        })
    }
}

/// Web font. Unrecognized values fall back to `Inter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Inter,
    PlayfairDisplay,
    SpaceGrotesk,
}

impl Font {
    /// CSS font-family name, as served by the font provider.
    pub fn family(&self) -> &'static str {
        match self {
            Font::Inter => "Inter",
            Font::PlayfairDisplay => "Playfair Display",
            Font::SpaceGrotesk => "Space Grotesk",
        }
    }

    /// The family name in Google Fonts URL form (space → `+`).
    pub fn query(&self) -> String {
        self.family().replace(' ', "+")
    }
}

impl Serialize for Font {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.family())
    }
}

impl<'de> Deserialize<'de> for Font {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "Inter" => Font::Inter,
            "Playfair Display" => Font::PlayfairDisplay,
            "Space Grotesk" => Font::SpaceGrotesk,
            _ => Font::Inter,
        })
    }
}

/// Social platform. Unknown slugs are kept as `Other` — the icon renderer
/// emits them verbatim, which resolves to the icon CDN's fallback image
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Github,
    Twitter,
    Linkedin,
    Instagram,
    Youtube,
    Email,
    Website,
    Other(String),
}

impl Platform {
    pub fn slug(&self) -> &str {
        match self {
            Platform::Github => "github",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Email => "email",
            Platform::Website => "website",
            Platform::Other(slug) => slug,
        }
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "github" => Platform::Github,
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::Linkedin,
            "instagram" => Platform::Instagram,
            "youtube" => Platform::Youtube,
            "email" => Platform::Email,
            "website" => Platform::Website,
            _ => Platform::Other(s),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sample snapshot
// ────────────────────────────────────────────────────────────────────────────

impl PortfolioState {
    /// The default snapshot the editor boots from. Also seeds engine tests.
    pub fn sample() -> Self {
        PortfolioState {
            meta: Meta {
                title: "John Doe | Portfolio".to_string(),
                description: "Portfolio of a creative developer.".to_string(),
                favicon: "https://cdn.simpleicons.org/react".to_string(),
                og_image: "https://picsum.photos/1200/630".to_string(),
            },
            theme: Theme {
                layout: Layout::Modern,
                font: Font::Inter,
                primary_color: "#4f46e5".to_string(),
                background_color: "#f8fafc".to_string(),
                background_image: String::new(),
                background_overlay: 0.9,
                text_color: "#1e293b".to_string(),
            },
            profile: Profile {
                name: "John Doe".to_string(),
                title: "Creative Frontend Developer".to_string(),
                bio: "I build accessible, pixel-perfect, and performant web experiences. \
                      Passionate about UI/UX and open source."
                    .to_string(),
                avatar: "https://picsum.photos/400/400".to_string(),
                location: "New York, USA".to_string(),
                resume_url: String::new(),
            },
            skills: [
                "React",
                "TypeScript",
                "Tailwind CSS",
                "Node.js",
                "UI/UX Design",
                "Figma",
                "Next.js",
                "GraphQL",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            experiences: vec![
                Experience {
                    id: "1".to_string(),
                    company: "Tech Corp".to_string(),
                    role: "Senior Frontend Engineer".to_string(),
                    period: "2022 - Present".to_string(),
                    description: "Leading the frontend team in building scalable web \
                                  applications using React and TypeScript."
                        .to_string(),
                },
                Experience {
                    id: "2".to_string(),
                    company: "Startup Inc".to_string(),
                    role: "Web Developer".to_string(),
                    period: "2020 - 2022".to_string(),
                    description: "Collaborated with designers to implement responsive user \
                                  interfaces and improve site performance."
                        .to_string(),
                },
            ],
            socials: vec![
                SocialLink {
                    id: "1".to_string(),
                    platform: Platform::Github,
                    url: "https://github.com".to_string(),
                },
                SocialLink {
                    id: "2".to_string(),
                    platform: Platform::Linkedin,
                    url: "https://linkedin.com".to_string(),
                },
                SocialLink {
                    id: "3".to_string(),
                    platform: Platform::Twitter,
                    url: "https://twitter.com".to_string(),
                },
                SocialLink {
                    id: "4".to_string(),
                    platform: Platform::Email,
                    url: "mailto:john@example.com".to_string(),
                },
            ],
            projects: vec![
                Project {
                    id: "1".to_string(),
                    title: "E-commerce Dashboard".to_string(),
                    description: "A comprehensive dashboard designed for online retailers to \
                                  track sales and analytics."
                        .to_string(),
                    link: "#".to_string(),
                    image_url: "https://picsum.photos/600/400?random=1".to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Tailwind".to_string(),
                        "Recharts".to_string(),
                    ],
                },
                Project {
                    id: "2".to_string(),
                    title: "Task Management App".to_string(),
                    description: "A collaborative tool to help teams organize and prioritize \
                                  their daily workflow."
                        .to_string(),
                    link: "#".to_string(),
                    image_url: "https://picsum.photos/600/400?random=2".to_string(),
                    tags: vec!["TypeScript".to_string(), "Node.js".to_string()],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_falls_back_to_bold() {
        let layout: Layout = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(layout, Layout::Bold);
    }

    #[test]
    fn test_known_layouts_round_trip() {
        for (json, expected) in [
            ("\"modern\"", Layout::Modern),
            ("\"minimal\"", Layout::Minimal),
            ("\"bold\"", Layout::Bold),
        ] {
            let layout: Layout = serde_json::from_str(json).unwrap();
            assert_eq!(layout, expected);
            assert_eq!(serde_json::to_string(&layout).unwrap(), json);
        }
    }

    #[test]
    fn test_unknown_font_falls_back_to_inter() {
        let font: Font = serde_json::from_str("\"Comic Sans MS\"").unwrap();
        assert_eq!(font, Font::Inter);
    }

    #[test]
    fn test_font_query_substitutes_spaces() {
        assert_eq!(Font::PlayfairDisplay.query(), "Playfair+Display");
        assert_eq!(Font::SpaceGrotesk.query(), "Space+Grotesk");
        assert_eq!(Font::Inter.query(), "Inter");
    }

    #[test]
    fn test_unknown_platform_kept_as_other() {
        let platform: Platform = serde_json::from_str("\"mastodon\"").unwrap();
        assert_eq!(platform, Platform::Other("mastodon".to_string()));
        assert_eq!(platform.slug(), "mastodon");
    }

    #[test]
    fn test_sample_snapshot_round_trips_through_json() {
        let sample = PortfolioState::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let back: PortfolioState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile.name, "John Doe");
        assert_eq!(back.theme.layout, Layout::Modern);
        assert_eq!(back.socials[3].platform, Platform::Email);
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"imageUrl\""));
    }
}

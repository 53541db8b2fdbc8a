//! Rendering engine — the pure pipeline from a portfolio snapshot to a
//! complete static HTML document.
//!
//! Flow: snapshot → layout dispatch → section renderers → document assembler.
//! One call, one string; no I/O, no shared state, safe to invoke concurrently.
//! The engine is total: for any well-typed snapshot it returns a document,
//! degrading malformed enum values to defaults instead of failing.

pub mod document;
pub mod escape;
pub mod handlers;
pub mod sections;
pub mod theme;

mod bold;
mod minimal;
mod modern;

use crate::models::portfolio::{Layout, PortfolioState};

/// Renders one snapshot into a standalone HTML document.
///
/// All layout-specific markup lives behind this dispatch — no other module
/// special-cases `theme.layout`.
pub fn render_portfolio(state: &PortfolioState) -> String {
    let layout_html = match state.theme.layout {
        Layout::Modern => modern::compose(state),
        Layout::Minimal => minimal::compose(state),
        Layout::Bold => bold::compose(state),
    };

    document::assemble(state, &layout_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Platform, Project, SocialLink};

    fn sample() -> PortfolioState {
        PortfolioState::sample()
    }

    fn with_layout(layout: Layout) -> PortfolioState {
        let mut state = sample();
        state.theme.layout = layout;
        state
    }

    #[test]
    fn test_all_layouts_render_profile_and_content() {
        for layout in [Layout::Modern, Layout::Minimal, Layout::Bold] {
            let state = with_layout(layout);
            let html = render_portfolio(&state);
            assert!(html.contains("John Doe"), "{layout:?}: missing name");
            assert!(
                html.contains("pixel-perfect, and performant"),
                "{layout:?}: missing bio"
            );
            for project in &state.projects {
                assert!(html.contains(&project.title), "{layout:?}: missing project");
            }
            for exp in &state.experiences {
                assert!(html.contains(&exp.role), "{layout:?}: missing role");
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let state = sample();
        assert_eq!(render_portfolio(&state), render_portfolio(&state));
    }

    #[test]
    fn test_empty_skills_suppresses_section_container() {
        for layout in [Layout::Modern, Layout::Minimal, Layout::Bold] {
            let mut state = with_layout(layout);
            state.skills.clear();
            let html = render_portfolio(&state);
            assert!(!html.contains(">Skills</h3>"), "{layout:?}");
            assert!(!html.contains("px-3 py-1.5 rounded-lg"), "{layout:?}");
        }
    }

    #[test]
    fn test_empty_experiences_suppresses_section() {
        for (layout, heading) in [
            (Layout::Modern, "Experience"),
            (Layout::Minimal, "Work Experience"),
            (Layout::Bold, "Experience"),
        ] {
            let mut state = with_layout(layout);
            state.experiences.clear();
            let html = render_portfolio(&state);
            assert!(!html.contains(heading), "{layout:?}");
        }
    }

    #[test]
    fn test_empty_projects_keeps_container_with_zero_cards() {
        for (layout, heading) in [
            (Layout::Modern, "Selected Projects"),
            (Layout::Minimal, ">Projects</h2>"),
            (Layout::Bold, "Featured Work"),
        ] {
            let mut state = with_layout(layout);
            state.projects.clear();
            let html = render_portfolio(&state);
            assert!(html.contains(heading), "{layout:?}: container missing");
            assert!(!html.contains("project-card"), "{layout:?}: stray card");
        }
    }

    #[test]
    fn test_script_in_bio_is_never_executable() {
        for layout in [Layout::Modern, Layout::Minimal, Layout::Bold] {
            let mut state = with_layout(layout);
            state.profile.bio = "<script>alert(1)</script>".to_string();
            let html = render_portfolio(&state);
            assert!(!html.contains("<script>alert(1)</script>"), "{layout:?}");
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{layout:?}");
        }
    }

    #[test]
    fn test_unknown_layout_value_renders_bold_markup() {
        let mut state = sample();
        let mut value = serde_json::to_value(&state).unwrap();
        value["theme"]["layout"] = serde_json::Value::String("holographic".to_string());
        state = serde_json::from_value(value).unwrap();
        let html = render_portfolio(&state);
        assert!(html.contains("Featured Work"));
        assert!(html.contains("Ready to collaborate?"));
    }

    #[test]
    fn test_unknown_platform_renders_unresolved_icon() {
        let mut state = sample();
        state.socials.push(SocialLink {
            id: "9".to_string(),
            platform: Platform::Other("mastodon".to_string()),
            url: "https://mastodon.social/@jd".to_string(),
        });
        let html = render_portfolio(&state);
        assert!(html.contains("cdn.simpleicons.org/mastodon/4f46e5"));
    }

    #[test]
    fn test_missing_email_social_keeps_disabled_contact_anchor() {
        for layout in [Layout::Modern, Layout::Minimal, Layout::Bold] {
            let mut state = with_layout(layout);
            state.socials.retain(|s| s.platform != Platform::Email);
            let html = render_portfolio(&state);
            assert!(
                html.contains(r#"href="" class="#),
                "{layout:?}: contact anchor omitted"
            );
            assert!(html.contains("opacity-50 pointer-events-none"), "{layout:?}");
        }
    }

    #[test]
    fn test_end_to_end_minimal_scenario() {
        let mut state = with_layout(Layout::Minimal);
        state.projects = vec![Project {
            id: "1".to_string(),
            title: "Demo".to_string(),
            description: "A demo project.".to_string(),
            link: "#".to_string(),
            image_url: String::new(),
            tags: vec![],
        }];
        state.socials = vec![SocialLink {
            id: "1".to_string(),
            platform: Platform::Email,
            url: "mailto:a@b.com".to_string(),
        }];
        state.experiences.clear();
        state.skills.clear();

        let html = render_portfolio(&state);
        assert!(html.contains("Demo"));
        assert!(html.contains(r#"href="mailto:a@b.com""#));

        // No image block inside the only project card.
        let card_start = html.find("project-card").unwrap();
        let card_end = html[card_start..].find("</article>").unwrap() + card_start;
        assert!(!html[card_start..card_end].contains("<img"));
    }

    #[test]
    fn test_overlay_opacity_appears_in_output() {
        let mut state = sample();
        state.theme.background_image = "https://example.com/bg.jpg".to_string();
        state.theme.background_overlay = 0.9;
        let html = render_portfolio(&state);
        assert!(html.contains("opacity: 0.9;"));
        assert!(html.contains(r#"<div class="bg-overlay"></div>"#));
    }
}

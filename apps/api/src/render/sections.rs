//! Section renderers — pure `(subsection, theme) → fragment` functions.
//!
//! Each fragment is composed by one of the layout strategies; no layout
//! emits section markup of its own beyond the surrounding containers.
//! Shared policy: an empty optional field suppresses its own element only,
//! and no renderer can fail for any well-typed input — the editor allows
//! transient empty states while the user types.

use crate::models::portfolio::{Experience, Platform, Project, SocialLink, Theme};
use crate::render::escape::escape_html;
use crate::render::theme::icon_color_slug;

/// One linkable icon per social entry, preserving input order — duplicates
/// and empty urls included. Icon source is derived from the platform slug
/// and the primary color.
pub fn social_icons(socials: &[SocialLink], theme: &Theme) -> String {
    let color = icon_color_slug(theme);
    socials
        .iter()
        .map(|social| {
            format!(
                r#"
    <a href="{url}" target="_blank" rel="noopener noreferrer" class="social-icon transition-transform hover:-translate-y-1 opacity-80 hover:opacity-100">
      <img src="https://cdn.simpleicons.org/{slug}/{color}" alt="{slug}" class="w-6 h-6" />
    </a>
  "#,
                url = escape_html(&social.url),
                slug = escape_html(social.platform.slug()),
                color = color,
            )
        })
        .collect()
}

/// One card per project. The image block is emitted only when `image_url` is
/// non-empty; tags render one chip each in order, empty-string tags included.
/// The "View Project" link uses `link` verbatim — `#` is a valid placeholder.
pub fn project_cards(projects: &[Project], theme: &Theme) -> String {
    projects
        .iter()
        .map(|project| {
            let image_block = if project.image_url.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<div class="aspect-video w-full overflow-hidden bg-gray-100/10">
        <img src="{src}" alt="{alt}" class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105" loading="lazy" />
      </div>"#,
                    src = escape_html(&project.image_url),
                    alt = escape_html(&project.title),
                )
            };

            let tag_chips: String = project
                .tags
                .iter()
                .map(|tag| {
                    format!(
                        r#"<span class="text-xs font-medium px-2 py-1 rounded-full bg-black/5 dark:bg-white/10 opacity-70">{}</span>"#,
                        escape_html(tag)
                    )
                })
                .collect();

            format!(
                r#"
    <article class="project-card group relative bg-white/10 border border-white/10 dark:border-white/5 rounded-xl overflow-hidden shadow-sm hover:shadow-lg transition-all duration-300 hover:scale-[1.01] flex flex-col h-full backdrop-blur-sm">
      {image_block}
      <div class="p-6 flex-1 flex flex-col">
        <div class="flex flex-wrap gap-2 mb-3">
          {tag_chips}
        </div>
        <h3 class="text-xl font-bold mb-2">{title}</h3>
        <p class="opacity-80 leading-relaxed mb-6 text-sm flex-1">{description}</p>
        <a href="{link}" target="_blank" class="inline-flex items-center text-sm font-semibold hover:underline decoration-2 underline-offset-4 mt-auto" style="color: {primary}">
          View Project &rarr;
        </a>
      </div>
    </article>
  "#,
                image_block = image_block,
                tag_chips = tag_chips,
                title = escape_html(&project.title),
                description = escape_html(&project.description),
                link = escape_html(&project.link),
                primary = theme.primary_color,
            )
        })
        .collect()
}

/// One chip per skill, in order. Callers suppress the surrounding section
/// when the sequence is empty.
pub fn skill_chips(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"
    <span class="px-3 py-1.5 rounded-lg bg-black/5 dark:bg-white/10 text-sm font-medium opacity-90">{}</span>
  "#,
                escape_html(skill)
            )
        })
        .collect()
}

/// Outlined skill chips used by the bold layout.
pub fn skill_outline_chips(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="border border-current px-3 py-1 rounded-full text-sm">{}</span>"#,
                escape_html(skill)
            )
        })
        .collect()
}

/// Dashed timeline entries — the modern layout's experience treatment.
pub fn experience_timeline(experiences: &[Experience], theme: &Theme) -> String {
    experiences
        .iter()
        .map(|exp| {
            format!(
                r#"
    <div class="relative pl-8 border-l-2 border-dashed border-gray-300 dark:border-gray-700 pb-8 last:pb-0">
      <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-white dark:bg-gray-900 border-2" style="border-color: {primary}"></div>
      <div class="mb-1 flex flex-wrap items-center gap-2">
        <h4 class="font-bold text-lg">{role}</h4>
        <span class="text-sm opacity-60">at {company}</span>
      </div>
      <p class="text-xs font-mono opacity-50 mb-2 uppercase tracking-wide">{period}</p>
      <p class="opacity-80 text-sm leading-relaxed">{description}</p>
    </div>
  "#,
                primary = theme.primary_color,
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                period = escape_html(&exp.period),
                description = escape_html(&exp.description),
            )
        })
        .collect()
}

/// Period-first rows — the minimal layout's experience treatment.
pub fn experience_rows(experiences: &[Experience]) -> String {
    experiences
        .iter()
        .map(|exp| {
            format!(
                r#"
                <div class="flex flex-col md:flex-row gap-2 md:gap-8 text-center md:text-left">
                   <div class="md:w-32 flex-shrink-0 text-sm opacity-50 font-mono py-1">{period}</div>
                   <div>
                      <h4 class="font-bold">{role}</h4>
                      <p class="text-sm opacity-60 mb-2">{company}</p>
                      <p class="opacity-80 text-sm">{description}</p>
                   </div>
                </div>
              "#,
                period = escape_html(&exp.period),
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                description = escape_html(&exp.description),
            )
        })
        .collect()
}

/// Bordered cards — the bold layout's experience treatment.
pub fn experience_cards(experiences: &[Experience], theme: &Theme) -> String {
    experiences
        .iter()
        .map(|exp| {
            format!(
                r#"
                     <div class="p-8 border border-current border-opacity-10 rounded-2xl hover:bg-white/5 transition-colors">
                        <span class="text-sm font-mono opacity-50 mb-2 block">{period}</span>
                        <h3 class="text-2xl font-bold mb-1">{role}</h3>
                        <div class="text-lg opacity-70 mb-4" style="color: {primary}">{company}</div>
                        <p class="opacity-80 leading-relaxed">{description}</p>
                     </div>
                  "#,
                period = escape_html(&exp.period),
                role = escape_html(&exp.role),
                primary = theme.primary_color,
                company = escape_html(&exp.company),
                description = escape_html(&exp.description),
            )
        })
        .collect()
}

/// The send-email call-to-action target: the `url` of the FIRST entry whose
/// platform is `email`. Later email entries are ignored; none at all yields
/// the empty string, and callers still emit the anchor (disabled-looking,
/// never omitted).
pub fn contact_target(socials: &[SocialLink]) -> &str {
    socials
        .iter()
        .find(|s| s.platform == Platform::Email)
        .map(|s| s.url.as_str())
        .unwrap_or("")
}

/// Classes appended to a contact anchor whose target is empty.
pub fn disabled_link_classes(target: &str) -> &'static str {
    if target.is_empty() {
        " opacity-50 pointer-events-none"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::PortfolioState;

    fn sample() -> PortfolioState {
        PortfolioState::sample()
    }

    #[test]
    fn test_social_icons_preserve_order_and_duplicates() {
        let state = sample();
        let mut socials = state.socials.clone();
        socials.push(socials[0].clone()); // duplicate github
        let html = social_icons(&socials, &state.theme);
        assert_eq!(html.matches("cdn.simpleicons.org/github").count(), 2);
        assert_eq!(html.matches("<a href=").count(), socials.len());
        let github = html.find("cdn.simpleicons.org/github").unwrap();
        let linkedin = html.find("cdn.simpleicons.org/linkedin").unwrap();
        assert!(github < linkedin);
    }

    #[test]
    fn test_social_icon_color_has_no_hash() {
        let state = sample();
        let html = social_icons(&state.socials, &state.theme);
        assert!(html.contains("cdn.simpleicons.org/github/4f46e5"));
        assert!(!html.contains("github/#"));
    }

    #[test]
    fn test_social_icon_with_empty_url_still_emitted() {
        let state = sample();
        let mut socials = state.socials.clone();
        socials[0].url = String::new();
        let html = social_icons(&socials, &state.theme);
        assert!(html.contains(r#"<a href="" target="_blank""#));
    }

    #[test]
    fn test_project_card_omits_image_block_when_url_empty() {
        let state = sample();
        let mut projects = state.projects.clone();
        projects[0].image_url = String::new();
        let html = project_cards(&projects[..1], &state.theme);
        assert!(!html.contains("<img"));
        assert!(html.contains("E-commerce Dashboard"));
    }

    #[test]
    fn test_project_card_renders_empty_tag_as_empty_chip() {
        let state = sample();
        let mut projects = state.projects.clone();
        projects[0].tags = vec!["Rust".to_string(), String::new()];
        let html = project_cards(&projects[..1], &state.theme);
        assert!(html.contains(">Rust</span>"));
        assert_eq!(html.matches("rounded-full bg-black/5").count(), 2);
    }

    #[test]
    fn test_project_link_hash_placeholder_kept_verbatim() {
        let state = sample();
        let html = project_cards(&state.projects, &state.theme);
        assert!(html.contains(r##"<a href="#" target="_blank""##));
    }

    #[test]
    fn test_project_title_and_description_escaped() {
        let state = sample();
        let mut projects = state.projects.clone();
        projects[0].title = "<b>Demo</b>".to_string();
        projects[0].description = "Tom & Jerry".to_string();
        let html = project_cards(&projects[..1], &state.theme);
        assert!(html.contains("&lt;b&gt;Demo&lt;/b&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<b>Demo</b>"));
    }

    #[test]
    fn test_skill_chips_one_per_skill_in_order() {
        let state = sample();
        let html = skill_chips(&state.skills);
        assert_eq!(html.matches("<span").count(), state.skills.len());
        assert!(html.find("React").unwrap() < html.find("GraphQL").unwrap());
    }

    #[test]
    fn test_experience_fragments_carry_all_fields() {
        let state = sample();
        for html in [
            experience_timeline(&state.experiences, &state.theme),
            experience_rows(&state.experiences),
            experience_cards(&state.experiences, &state.theme),
        ] {
            assert!(html.contains("Senior Frontend Engineer"));
            assert!(html.contains("Tech Corp"));
            assert!(html.contains("2022 - Present"));
            assert!(html.contains("Startup Inc"));
        }
    }

    #[test]
    fn test_contact_target_takes_first_email_entry() {
        let state = sample();
        let mut socials = state.socials.clone();
        socials.push(SocialLink {
            id: "5".to_string(),
            platform: Platform::Email,
            url: "mailto:second@example.com".to_string(),
        });
        assert_eq!(contact_target(&socials), "mailto:john@example.com");
    }

    #[test]
    fn test_contact_target_empty_when_no_email_entry() {
        let state = sample();
        let socials: Vec<SocialLink> = state
            .socials
            .iter()
            .filter(|s| s.platform != Platform::Email)
            .cloned()
            .collect();
        assert_eq!(contact_target(&socials), "");
        assert_eq!(disabled_link_classes(""), " opacity-50 pointer-events-none");
        assert_eq!(disabled_link_classes("mailto:a@b.com"), "");
    }
}

//! Minimal layout — narrow centered column, typographic emphasis, footer
//! contact link with the copyright line.

use crate::models::portfolio::PortfolioState;
use crate::render::escape::escape_html;
use crate::render::sections;

pub fn compose(state: &PortfolioState) -> String {
    let profile = &state.profile;
    let theme = &state.theme;

    let skills_block = if state.skills.is_empty() {
        String::new()
    } else {
        format!(
            r#"
             <div class="flex flex-wrap gap-2 justify-center pt-2 max-w-lg mx-auto">
                {}
             </div>
          "#,
            sections::skill_chips(&state.skills)
        )
    };

    let experience_section = if state.experiences.is_empty() {
        String::new()
    } else {
        format!(
            r#"
        <section class="space-y-10">
           <h2 class="text-xs font-bold uppercase tracking-widest opacity-40 text-center">Work Experience</h2>
           <div class="space-y-10">
              {}
           </div>
        </section>
        "#,
            sections::experience_rows(&state.experiences)
        )
    };

    let contact = sections::contact_target(&state.socials);

    format!(
        r#"
      <div class="max-w-2xl mx-auto px-6 py-20 space-y-20 relative z-10">
        <header class="text-center space-y-8">
          <img src="{avatar}" alt="{name}" class="w-24 h-24 rounded-full object-cover mx-auto ring-2 ring-offset-4 ring-offset-transparent shadow-lg" style="--tw-ring-color: {primary}" />
          <div>
            <h1 class="text-4xl md:text-5xl font-bold mb-4 tracking-tight">{name}</h1>
            <p class="text-xl opacity-60 font-light">{title}</p>
          </div>
          <p class="max-w-lg mx-auto text-lg leading-relaxed opacity-80">{bio}</p>
          <div class="flex gap-6 justify-center">
            {social_icons}
          </div>
          {skills_block}
        </header>
        {experience_section}
        <section class="space-y-10">
          <h2 class="text-xs font-bold uppercase tracking-widest opacity-40 text-center">Projects</h2>
          <div class="grid gap-12">
             {project_cards}
          </div>
        </section>

        <footer class="text-center pt-12 border-t border-black/5 dark:border-white/10">
          <a href="{contact}" class="inline-block mb-8 text-2xl font-bold hover:underline{disabled}" style="color: {primary}">Get in touch</a>
          <p class="opacity-50 text-sm">© {year} {name}.</p>
        </footer>
      </div>
    "#,
        avatar = escape_html(&profile.avatar),
        name = escape_html(&profile.name),
        title = escape_html(&profile.title),
        bio = escape_html(&profile.bio),
        primary = theme.primary_color,
        social_icons = sections::social_icons(&state.socials, theme),
        skills_block = skills_block,
        experience_section = experience_section,
        project_cards = sections::project_cards(&state.projects, theme),
        contact = escape_html(contact),
        disabled = sections::disabled_link_classes(contact),
        year = chrono::Utc::now().format("%Y"),
    )
}

//! Modern layout — sticky profile sidebar with a main column of experience,
//! projects and a contact call-to-action.

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
              <div class="pt-4">
                <h3 class="text-xs font-bold uppercase tracking-widest opacity-50 mb-3">Skills</h3>
                <div class="flex flex-wrap gap-2 justify-center md:justify-start">
                  {}
                </div>
              </div>
            "#,
            sections::skill_chips(&state.skills)
        )
    };

    let resume_link = if profile.resume_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a href="{url}" class="inline-block px-6 py-2.5 rounded-full font-medium text-white transition-all hover:opacity-90 hover:shadow-lg w-full md:w-auto text-center" style="background-color: {primary}">Download Resume</a>"#,
            url = escape_html(&profile.resume_url),
            primary = theme.primary_color,
        )
    };

    let experience_section = if state.experiences.is_empty() {
        String::new()
    } else {
        format!(
            r#"
          <section>
            <h2 class="text-2xl font-bold mb-8 flex items-center gap-3 pb-4 border-b border-black/5 dark:border-white/10">
              <span class="text-2xl">⚡</span> Experience
            </h2>
            <div class="ml-2">
              {}
            </div>
          </section>
          "#,
            sections::experience_timeline(&state.experiences, theme)
        )
    };

    let contact = sections::contact_target(&state.socials);

    format!(
        r#"
      <div class="max-w-6xl mx-auto px-6 py-12 md:py-24 grid grid-cols-1 md:grid-cols-12 gap-12 relative z-10">
        <!-- Sidebar / Profile -->
        <div class="md:col-span-4 lg:col-span-3 space-y-8 md:sticky md:top-24 h-fit">
          <div class="space-y-6 text-center md:text-left">
            <div class="relative inline-block mx-auto md:mx-0">
               <img src="{avatar}" alt="{name}" class="w-32 h-32 md:w-48 md:h-48 rounded-full object-cover border-4 shadow-xl relative z-10 bg-white" style="border-color: {primary}" />
               <div class="absolute inset-0 rounded-full blur-2xl opacity-40 -z-10 transform translate-y-4" style="background-color: {primary}"></div>
            </div>
            <div>
              <h1 class="text-3xl md:text-4xl font-bold tracking-tight mb-2 leading-tight">{name}</h1>
              <p class="text-lg opacity-75 font-medium" style="color: {primary}">{title}</p>
              <p class="text-sm opacity-60 mt-1 flex items-center justify-center md:justify-start gap-1">
                <svg width="14" height="14" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"></path><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"></path></svg>
                {location}
              </p>
            </div>
            <p class="opacity-80 leading-relaxed text-sm md:text-base">{bio}</p>
            {skills_block}
            <div class="flex gap-4 justify-center md:justify-start pt-4">
              {social_icons}
            </div>
             {resume_link}
          </div>
        </div>

        <!-- Main Content -->
        <div class="md:col-span-8 lg:col-span-9 space-y-20">
          {experience_section}
          <section>
            <h2 class="text-2xl font-bold mb-8 flex items-center gap-3 pb-4 border-b border-black/5 dark:border-white/10">
              <span class="text-2xl">🚀</span> Selected Projects
            </h2>
            <div class="grid grid-cols-1 gap-8">
              {project_cards}
            </div>
          </section>

          <section id="contact" class="bg-black/5 dark:bg-white/10 rounded-3xl p-8 md:p-12 text-center md:text-left relative overflow-hidden">
            <div class="relative z-10">
                <h2 class="text-3xl font-bold mb-4">Let's build something great.</h2>
                <p class="opacity-70 mb-8 max-w-lg text-lg">Interested in working together? I'm always open to discussing new projects and opportunities.</p>
                <a href="{contact}" class="inline-flex items-center gap-2 px-8 py-3 rounded-full text-white font-semibold transition-transform hover:scale-105{disabled}" style="background-color: {primary}">
                Send me an email
                </a>
            </div>
            <div class="absolute right-0 bottom-0 opacity-10 transform translate-x-1/3 translate-y-1/3">
                 <svg width="300" height="300" viewBox="0 0 24 24" fill="currentColor"><path d="M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z"/></svg>
            </div>
          </section>
        </div>
      </div>
    "#,
        avatar = escape_html(&profile.avatar),
        name = escape_html(&profile.name),
        title = escape_html(&profile.title),
        location = escape_html(&profile.location),
        bio = escape_html(&profile.bio),
        primary = theme.primary_color,
        skills_block = skills_block,
        social_icons = sections::social_icons(&state.socials, theme),
        resume_link = resume_link,
        experience_section = experience_section,
        project_cards = sections::project_cards(&state.projects, theme),
        contact = escape_html(contact),
        disabled = sections::disabled_link_classes(contact),
    )
}

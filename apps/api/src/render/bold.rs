//! Bold layout — full-bleed hero with a split-name gradient headline,
//! card-grid experience and a large closing call-to-action. Also the
//! fallback strategy for unrecognized layout values.

use crate::models::portfolio::PortfolioState;
use crate::render::escape::escape_html;
use crate::render::sections;

/// Splits a display name into the leading word and the remainder, so the
/// remainder can carry the gradient treatment. Single-word names leave the
/// remainder empty.
fn split_name(name: &str) -> (&str, String) {
    let mut words = name.split(' ');
    let first = words.next().unwrap_or("");
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}

pub fn compose(state: &PortfolioState) -> String {
    let profile = &state.profile;
    let theme = &state.theme;
    let (first_name, rest_name) = split_name(&profile.name);

    let skills_block = if state.skills.is_empty() {
        String::new()
    } else {
        format!(
            r#"
              <div class="flex flex-wrap gap-2 opacity-80">
                 {}
              </div>
             "#,
            sections::skill_outline_chips(&state.skills)
        )
    };

    let resume_link = if profile.resume_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="mx-2 opacity-20">|</span> <a href="{}" class="font-bold hover:underline">Resume</a>"#,
            escape_html(&profile.resume_url)
        )
    };

    let experience_section = if state.experiences.is_empty() {
        String::new()
    } else {
        format!(
            r#"
             <section>
                <h2 class="text-4xl font-extrabold mb-12">Experience</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                  {}
                </div>
             </section>
             "#,
            sections::experience_cards(&state.experiences, theme)
        )
    };

    let contact = sections::contact_target(&state.socials);
    let contact_label = if contact.is_empty() {
        "Get in touch".to_string()
    } else {
        escape_html(contact.strip_prefix("mailto:").unwrap_or(contact))
    };

    format!(
        r#"
      <div class="min-h-screen flex flex-col relative z-10">
        <header class="px-6 py-12 md:py-28 max-w-7xl mx-auto w-full grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
          <div class="order-2 md:order-1 space-y-8">
             <div class="flex items-center gap-3">
                 <span class="inline-block w-8 h-1 rounded-full" style="background-color: {primary}"></span>
                 <span class="text-sm font-bold tracking-widest uppercase opacity-60">{title}</span>
             </div>
             <h1 class="text-5xl md:text-8xl font-extrabold leading-tight tracking-tighter">
               {first_name} <br/>
               <span class="text-transparent bg-clip-text" style="background-image: linear-gradient(to right, {primary}, {text_color})">{rest_name}</span>.
             </h1>
             <p class="text-xl md:text-2xl opacity-70 max-w-lg leading-relaxed">{bio}</p>
             {skills_block}
             <div class="flex gap-6 pt-4 items-center">
                {social_icons}
                {resume_link}
             </div>
          </div>
          <div class="order-1 md:order-2 flex justify-center md:justify-end">
             <div class="relative w-72 h-72 md:w-[500px] md:h-[500px]">
                <div class="absolute inset-0 rounded-full blur-[100px] opacity-30 animate-pulse" style="background-color: {primary}"></div>
                <img src="{avatar}" class="relative w-full h-full object-cover rounded-[3rem] rotate-3 hover:rotate-0 transition-transform duration-700 shadow-2xl grayscale hover:grayscale-0" alt="{name}" />
             </div>
          </div>
        </header>

        <main class="flex-grow px-6 py-20 bg-black/5 dark:bg-white/5 backdrop-blur-md">
           <div class="max-w-7xl mx-auto space-y-24">
             {experience_section}
             <section>
               <h2 class="text-4xl font-extrabold mb-12">Featured Work</h2>
               <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                  {project_cards}
               </div>
             </section>

             <section class="py-20 text-center">
                <h2 class="text-4xl md:text-6xl font-black mb-8">Ready to collaborate?</h2>
                <a href="{contact}" class="inline-block text-2xl md:text-3xl border-b-4 border-current pb-2 hover:opacity-70 transition-opacity{disabled}" style="border-color: {primary}">
                  {contact_label}
                </a>
             </section>
           </div>
        </main>
      </div>
    "#,
        primary = theme.primary_color,
        text_color = theme.text_color,
        title = escape_html(&profile.title),
        first_name = escape_html(first_name),
        rest_name = escape_html(&rest_name),
        bio = escape_html(&profile.bio),
        skills_block = skills_block,
        social_icons = sections::social_icons(&state.socials, theme),
        resume_link = resume_link,
        avatar = escape_html(&profile.avatar),
        name = escape_html(&profile.name),
        experience_section = experience_section,
        project_cards = sections::project_cards(&state.projects, theme),
        contact = escape_html(contact),
        disabled = sections::disabled_link_classes(contact),
        contact_label = contact_label,
    )
}

//! Prompt builders for the two suggestion calls.
//!
//! Both prompts ask for short plain text — the result is stored into an
//! ordinary string field of the snapshot, so no markdown or JSON is wanted.

/// Prompt for a portfolio biography suggestion (max 80 words).
pub fn build_bio_prompt(name: &str, title: &str, current_bio: &str) -> String {
    format!(
        "Write a professional yet engaging portfolio biography (max 80 words) \
         for a person named {name} who is a {title}.\n\
         Current draft context (if any): \"{current_bio}\".\n\
         Make it sound confident and approachable. Do not use markdown, just plain text."
    )
}

/// Prompt for a project description rewrite (max 40 words).
pub fn build_project_prompt(title: &str, description: &str) -> String {
    format!(
        "Refine this project description to be more impactful and result-oriented (max 40 words).\n\
         Project Title: {title}\n\
         Draft Description: \"{description}\"\n\
         Return only the refined text."
    )
}

//! HTML escaping — the single choke point for user-supplied text.
//!
//! Every free-text field interpolated into an HTML text or attribute position
//! goes through [`escape_html`]. Theme values emitted inside the `<style>`
//! element (colors, background expressions, overlay opacity) are CSS values by
//! contract and are not routed through here.

/// Escapes the five characters that can alter HTML structure in text or
/// double/single-quoted attribute positions.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

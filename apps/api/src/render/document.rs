//! Document assembler — wraps a composed layout fragment in the full
//! standalone HTML shell: head metadata, font loading, the background /
//! overlay branch, and the body.

use crate::models::portfolio::PortfolioState;
use crate::render::escape::escape_html;
use crate::render::theme;

/// Produces the complete `<!DOCTYPE html>` document. The output needs no
/// build step or server — it renders as-is in a browser, in a sandboxed
/// iframe, or served with `text/html`.
pub fn assemble(state: &PortfolioState, layout_html: &str) -> String {
    let meta = &state.meta;
    let t = &state.theme;

    // Overlay only exists on the background-image branch; on the flat-color
    // branch the element is omitted entirely, not emitted empty.
    let overlay_style = theme::overlay_style(t);
    let overlay_div = if overlay_style.is_some() {
        r#"<div class="bg-overlay"></div>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">

    <!-- Open Graph -->
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{og_image}">
    <meta property="og:type" content="website">

    <link rel="icon" href="{favicon}">
    <link href="{font_link}" rel="stylesheet">
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
      body {{
        font-family: {font_family};
        {body_background}
      }}
      .bg-overlay {{
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        z-index: 0;
        pointer-events: none;
        {overlay_style}
      }}
    </style>
</head>
<body class="min-h-screen transition-colors duration-300 relative text-[{text_color}]">
    {overlay_div}
    {layout_html}
</body>
</html>"#,
        title = escape_html(&meta.title),
        description = escape_html(&meta.description),
        og_image = escape_html(&meta.og_image),
        favicon = escape_html(&meta.favicon),
        font_link = theme::font_stylesheet_url(t),
        font_family = theme::font_family_decl(t),
        body_background = theme::body_background(t),
        overlay_style = overlay_style.unwrap_or_default(),
        text_color = escape_html(&t.text_color),
        overlay_div = overlay_div,
        layout_html = layout_html,
    )
}

//! HTML document renderer.
//!
//! Produces a standalone page using the class names of the original web
//! view (`container`, `grid`, `card`, `pill-alive`, ...), so an existing
//! stylesheet applies unchanged. All interpolated text is escaped.

use std::borrow::Cow;

use rickdex_core::locale::Locale;

use crate::render::card::{cards, Card};
use crate::state::{RenderState, ViewState};

/// Render `state` as a complete HTML document.
pub fn render_page(state: &ViewState, locale: Locale) -> String {
    let strings = locale.strings();
    let title = escape(strings.title);
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", locale.as_str()));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str("<div class=\"container\">\n");
    out.push_str("  <header class=\"header\">\n");
    out.push_str(&format!("    <h1>{title}</h1>\n"));
    out.push_str("  </header>\n");

    match state.select() {
        RenderState::Loading => {
            out.push_str("  <div class=\"loading-container\">\n");
            out.push_str("    <div class=\"spinner\"></div>\n");
            out.push_str(&format!(
                "    <p class=\"state\">{}</p>\n",
                escape(strings.loading)
            ));
            out.push_str("  </div>\n");
        }
        RenderState::Error(message) => {
            out.push_str("  <div class=\"error-container\">\n");
            out.push_str(&format!(
                "    <p class=\"state error\">{} {}</p>\n",
                escape(strings.error_prefix),
                escape(message)
            ));
            out.push_str("  </div>\n");
        }
        RenderState::Populated(characters) => {
            out.push_str("  <div class=\"grid\">\n");
            for card in cards(characters, locale) {
                push_card(&mut out, &card, locale);
            }
            out.push_str("  </div>\n");
        }
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn push_card(out: &mut String, card: &Card<'_>, locale: Locale) {
    let strings = locale.strings();
    let style = card.status_style.as_str();
    let name = escape(card.name);

    out.push_str(&format!("    <article class=\"card\" data-key=\"{}\">\n", card.key));
    out.push_str("      <div class=\"card-image-wrapper\">\n");
    out.push_str(&format!(
        "        <img class=\"avatar\" src=\"{}\" alt=\"{name}\">\n",
        escape(card.image)
    ));
    out.push_str(&format!(
        "        <div class=\"status-indicator status-{style}\"></div>\n"
    ));
    out.push_str("      </div>\n");
    out.push_str("      <div class=\"cardBody\">\n");
    out.push_str(&format!("        <h2 class=\"name\">{name}</h2>\n"));
    out.push_str("        <div class=\"meta\">\n");
    out.push_str(&format!(
        "          <span class=\"pill pill-{style}\">{}</span>\n",
        escape(card.status_label)
    ));
    out.push_str(&format!(
        "          <span class=\"pill pill-species\">{}</span>\n",
        escape(card.species)
    ));
    out.push_str("        </div>\n");
    out.push_str("        <div class=\"info-section\">\n");
    push_info_item(out, strings.origin_label, card.origin);
    push_info_item(out, strings.location_label, card.location);
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </article>\n");
}

fn push_info_item(out: &mut String, label: &str, value: &str) {
    out.push_str("          <p class=\"info-item\">\n");
    out.push_str(&format!(
        "            <span class=\"info-label\">{}</span>\n",
        escape(label)
    ));
    out.push_str(&format!(
        "            <span class=\"info-value\">{}</span>\n",
        escape(value)
    ));
    out.push_str("          </p>\n");
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

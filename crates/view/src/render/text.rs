//! Terminal renderer: a title, then a loading line, an error line, or a
//! grid of boxed cards.

use rickdex_core::locale::Locale;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::card::{cards, Card};
use crate::state::{RenderState, ViewState};

/// Inner width of a card box, in terminal columns.
pub const CARD_WIDTH: usize = 30;

/// Upper bound on cards per row.
pub const MAX_GRID_COLUMNS: usize = 8;

/// Render `state` as plain text with `columns` cards per row.
///
/// `columns` is clamped to `1..=MAX_GRID_COLUMNS`.
pub fn render_page(state: &ViewState, locale: Locale, columns: usize) -> String {
    let strings = locale.strings();
    let mut out = String::new();

    out.push_str(strings.title);
    out.push('\n');
    out.push_str(&"=".repeat(strings.title.width()));
    out.push_str("\n\n");

    match state.select() {
        RenderState::Loading => {
            out.push_str(strings.loading);
            out.push('\n');
        }
        RenderState::Error(message) => {
            out.push_str(&format!("{} {message}\n", strings.error_prefix));
        }
        RenderState::Populated(characters) => {
            let columns = columns.clamp(1, MAX_GRID_COLUMNS);
            let all = cards(characters, locale);
            for row in all.chunks(columns) {
                push_row(&mut out, row, locale);
            }
        }
    }

    out
}

/// Draw one row of cards side by side.
fn push_row(out: &mut String, row: &[Card<'_>], locale: Locale) {
    let boxes: Vec<Vec<String>> = row.iter().map(|card| card_lines(card, locale)).collect();
    let height = boxes.first().map_or(0, Vec::len);

    for line in 0..height {
        let joined: Vec<&str> = boxes.iter().map(|b| b[line].as_str()).collect();
        out.push_str(joined.join(" ").trim_end());
        out.push('\n');
    }
    out.push('\n');
}

/// The lines of one boxed card. Every card has the same height.
pub fn card_lines(card: &Card<'_>, locale: Locale) -> Vec<String> {
    let strings = locale.strings();
    let border = "─".repeat(CARD_WIDTH + 2);

    let body = [
        card.name.to_string(),
        format!("[{}] {}", card.status_label, card.species),
        format!("{} {}", strings.origin_label, card.origin),
        format!("{} {}", strings.location_label, card.location),
    ];

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{border}┐"));
    for text in &body {
        lines.push(format!("│ {} │", fit(&single_line(text), CARD_WIDTH)));
    }
    lines.push(format!("└{border}┘"));
    lines
}

/// Replace control characters (newlines, tabs, ...) with spaces so a
/// value stays on its box line.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Pad or truncate `s` to exactly `width` display columns, marking
/// truncation with an ellipsis.
fn fit(s: &str, width: usize) -> String {
    let len = s.width();
    if len <= width {
        let mut padded = String::with_capacity(s.len() + width - len);
        padded.push_str(s);
        padded.extend(std::iter::repeat(' ').take(width - len));
        return padded;
    }

    let budget = width.saturating_sub(1);
    let mut cut = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        cut.push(c);
        used += w;
    }
    cut.push('…');
    used += 1;
    // A wide character that did not fit can leave one column over.
    cut.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use rickdex_core::character::Character;

    fn populated(records: serde_json::Value) -> ViewState {
        let characters: Vec<Character> = serde_json::from_value(records).unwrap();
        ViewState {
            loading: false,
            error_msg: String::new(),
            characters,
        }
    }

    #[test]
    fn loading_page() {
        let page = render_page(&ViewState::default(), Locale::En, 3);

        assert!(page.starts_with("Rick & Morty Characters\n=======================\n\n"));
        assert!(page.contains("Loading characters..."));
        assert!(!page.contains('┌'));
    }

    #[test]
    fn error_page() {
        let state = ViewState {
            loading: false,
            error_msg: "HTTP 500".into(),
            characters: Vec::new(),
        };

        let page = render_page(&state, Locale::Es, 3);

        assert!(page.ends_with("Error: HTTP 500\n"));
    }

    #[test]
    fn single_card() {
        let state = populated(serde_json::json!([{
            "id": 1, "name": "Rick", "status": "Alive", "species": "Human", "image": "u",
            "origin": { "name": "Earth" }, "location": { "name": "Earth" }
        }]));

        let page = render_page(&state, Locale::En, 3);

        assert_eq!(page.matches('┌').count(), 1);
        assert!(page.contains("│ Rick "));
        assert!(page.contains("│ [Alive] Human "));
        assert!(page.contains("│ Origin: Earth "));
        assert!(page.contains("│ Location: Earth "));
    }

    #[test]
    fn missing_places_show_placeholder() {
        let state = populated(serde_json::json!([{ "id": 5, "name": "Jerry", "status": "Alive" }]));

        let page = render_page(&state, Locale::En, 3);

        assert!(page.contains("Origin: Unknown"));
        assert!(page.contains("Location: Unknown"));
    }

    #[test]
    fn cards_wrap_by_column_count() {
        let records: Vec<_> = (1..=5).map(|id| serde_json::json!({ "id": id })).collect();
        let state = populated(serde_json::Value::Array(records));

        let page = render_page(&state, Locale::En, 2);

        let top_lines: Vec<_> = page.lines().filter(|l| l.starts_with('┌')).collect();
        assert_eq!(top_lines.len(), 3);
        assert_eq!(top_lines[0].matches('┌').count(), 2);
        assert_eq!(top_lines[2].matches('┌').count(), 1);
    }

    #[test]
    fn zero_columns_is_clamped_to_one() {
        let records: Vec<_> = (1..=2).map(|id| serde_json::json!({ "id": id })).collect();
        let page = render_page(&populated(serde_json::Value::Array(records)), Locale::En, 0);

        assert_eq!(page.lines().filter(|l| l.starts_with('┌')).count(), 2);
    }

    #[test]
    fn long_values_are_truncated() {
        let fitted = fit("Abradolf Lincler the Magnificent Clone", 10);

        assert_eq!(fitted.chars().count(), 10);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn wide_names_keep_the_box_aligned() {
        let state = populated(serde_json::json!([{
            "id": 1, "name": "ニンジャ・リック", "status": "Alive", "species": "Human"
        }]));
        let RenderState::Populated(characters) = state.select() else {
            panic!("expected populated state");
        };
        let card = &cards(characters, Locale::En)[0];

        let lines = card_lines(card, Locale::En);

        assert!(lines[1].contains("ニンジャ・リック"));
        for line in &lines {
            assert_eq!(line.width(), CARD_WIDTH + 4, "misaligned line {line:?}");
        }
    }

    #[test]
    fn wide_values_truncate_by_columns() {
        let fitted = fit("宇宙海賊フィル・キャッシュ", 9);

        assert_eq!(fitted.width(), 9);
        assert!(fitted.trim_end().ends_with('…'));
        assert!(fitted.starts_with("宇宙海賊"));
    }

    #[test]
    fn control_characters_stay_on_one_line() {
        let state = populated(serde_json::json!([{
            "id": 1, "name": "Mr.\nPoopybutthole", "species": "Alien\tthing"
        }]));

        let page = render_page(&state, Locale::En, 1);

        assert!(page.contains("│ Mr. Poopybutthole "));
        assert!(page.contains("Alien thing"));
        assert!(!page.contains('\t'));
        let lines: Vec<_> = page.lines().filter(|l| l.starts_with('│')).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.width() == CARD_WIDTH + 4));
    }

    #[test]
    fn short_values_are_padded() {
        assert_eq!(fit("Rick", 6), "Rick  ");
    }

    #[test]
    fn empty_grid_renders_no_cards() {
        let page = render_page(&populated(serde_json::json!([])), Locale::En, 3);

        assert!(!page.contains('┌'));
        assert!(!page.contains("Error"));
        assert!(!page.contains("Loading"));
    }
}

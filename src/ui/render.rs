//! ui::render
//!
//! Text rendering of hexagram views.
//!
//! # Layout
//!
//! ```text
//! #44 天風姤 (姤)  palace 乾 金
//! 6  ⚊  戌土 父母
//! 5  ⚊  申金 兄弟
//! 4  ⚊  午火 官鬼  応
//! 3  ⚊  酉金 兄弟
//! 2  ⚊  亥水 子孫      伏 寅木 妻財
//! 1  ⚋  丑土 父母  世
//! ```
//!
//! Lines print top to bottom, the way a hexagram is drawn.

use std::fmt::Write;

use crate::core::catalog::HexagramRecord;
use crate::core::types::Symbol;
use crate::core::view::{HexagramView, Line};

/// Render a view as text, one line per row, top line first.
pub fn render_view(view: &HexagramView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "#{} {} ({})  palace {} {}",
        view.id, view.full_name, view.name, view.palace, view.palace_element
    );
    if !view.flags.is_empty() {
        let flags: Vec<_> = view.flags.iter().map(|f| f.symbol()).collect();
        let _ = write!(out, "  [{}]", flags.join(" "));
    }
    out.push('\n');

    for line in view.lines.iter().rev() {
        out.push_str(&render_line(line));
        out.push('\n');
    }
    out
}

/// Render a single line row.
pub fn render_line(line: &Line) -> String {
    let marker = match (line.is_self, line.is_response) {
        (true, true) => "世応",
        (true, false) => "世",
        (false, true) => "応",
        (false, false) => "  ",
    };

    let mut row = format!(
        "{}  {}  {}{} {}  {}",
        line.position,
        line.polarity.glyph(),
        line.branch,
        line.element,
        line.relative,
        marker
    );
    if let Some(hidden) = &line.hidden_spirit {
        let _ = write!(row, "  伏 {}", hidden);
    }
    row.trim_end().to_string()
}

/// One-line summary of a catalogue record, for listings.
pub fn render_summary(record: &HexagramRecord) -> String {
    format!(
        "{:>2}  {}  {}宮 世{} 応{}",
        record.id.get(),
        record.full_name,
        record.palace,
        record.shi,
        record.ying
    )
}

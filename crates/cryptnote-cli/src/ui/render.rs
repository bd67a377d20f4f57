//! Line builders for command output.
//!
//! Each helper returns the pretty form when `ctx.mode` is pretty and a
//! stable `key=value` form otherwise, so scripts can parse plain output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{label_style, paint, Badge};

/// `Cryptnote · open (v2)` when pretty, `cryptnote open` otherwise.
pub fn header(ctx: &UiContext, command: &str, detail: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("cryptnote {}", command);
    }
    let name = paint("Cryptnote", label_style(), ctx.color);
    match detail {
        Some(detail) => format!("{} \u{00B7} {} ({})", name, command, detail),
        None => format!("{} \u{00B7} {}", name, command),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let marker = paint(kind.symbol(ctx.unicode), kind.style(), ctx.color);
    format!("{} {}", marker, message)
}

/// `Created: ...` when pretty, `created=...` otherwise.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", paint(&format!("{}:", key), label_style(), ctx.color), value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    kv(ctx, "Hint", text)
}

/// Summary printed after a seal or a file write.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(items.iter().map(|(k, v)| format!("{}{}", indent, kv(ctx, k, v))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-column `Field`/`Value` listing of a parsed message.
///
/// Plain output is one `field value` pair per line with no header.
pub fn field_table(ctx: &UiContext, rows: &[(&str, String)]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|(field, value)| format!("{} {}", field, value))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let heading = |text: &str| {
        let cell = Cell::new(text);
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    };

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(vec![heading("Field"), heading("Value")]);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value.clone()]);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    table.to_string()
}

/// Extra spacing between pretty blocks; nothing in plain mode.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Report a failed command on stderr, with an optional hint line.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    if ctx.mode.is_pretty() {
        eprintln!("{}", badge(ctx, Badge::Err, message));
    } else {
        eprintln!("error={}", message);
    }
    if let Some(text) = error_hint {
        eprintln!("{}", hint(ctx, text));
    }
}

use mams_core::enums::{
    AssetCategory, AssetStatus, AuditAction, AuditEntity, Priority, ReportStatus, ReportType,
    Severity, Tone, TransferStatus,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    pub icons: bool,
}

/// Render an aligned table for string rows. Amounts are right-aligned. With
/// `color`, status-like cells take their badge tone; with `icons`, typed
/// columns get their glyph in front.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let key_value = headers == ["key", "value"];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    // Key/value tables name the field in the first column.
                    let field = match row.first() {
                        Some(key) if key_value && index == 1 => key.as_str(),
                        _ => *header,
                    };
                    match icon_for(field, value).and_then(glyph) {
                        Some(mark) if options.icons => format!("{mark} {value}"),
                        _ => value.to_string(),
                    }
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain([display_width(header), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(rows.iter().zip(&cells).map(|(row, row_cells)| {
        widths
            .iter()
            .zip(row_cells)
            .enumerate()
            .map(|(index, (width, cell))| {
                let truncated = truncate_text(cell, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_status(row.get(index).map_or("-", String::as_str), padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }));
    lines.join("\n")
}

/// Shrink the widest shrinkable column one step at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| {
                **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH)
            })
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Integers and amounts, but not dates or ids.
fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.replace(',', "").parse::<f64>().is_ok()
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap the padded cell in the ANSI colour of `value`'s badge tone, if any.
fn colorize_status(value: &str, padded: String) -> String {
    match tone_of(value).and_then(ansi_code) {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

/// Badge tone for a status-like cell. Statuses are tried before priority and
/// severity words, so `high` and `medium` read as priorities.
fn tone_of(value: &str) -> Option<Tone> {
    let value = Value::String(value.trim().to_ascii_lowercase());
    match value.as_str() {
        Some("true") => return Some(Tone::Success),
        Some("false") => return Some(Tone::Destructive),
        _ => {}
    }
    parse::<TransferStatus>(&value)
        .map(TransferStatus::tone)
        .or_else(|| parse::<AssetStatus>(&value).map(AssetStatus::tone))
        .or_else(|| parse::<ReportStatus>(&value).map(ReportStatus::tone))
        .or_else(|| parse::<Priority>(&value).map(Priority::tone))
        .or_else(|| parse::<Severity>(&value).map(Severity::tone))
}

/// Icon name for a cell, chosen by the field it belongs to.
fn icon_for(field: &str, value: &str) -> Option<&'static str> {
    let value = Value::String(value.trim().to_ascii_lowercase());
    match field {
        "category" => parse::<AssetCategory>(&value).map(AssetCategory::icon),
        "status" | "previous_status" => parse::<TransferStatus>(&value)
            .map(TransferStatus::icon)
            .or_else(|| parse::<AssetStatus>(&value).map(AssetStatus::icon)),
        "action" => parse::<AuditAction>(&value).map(AuditAction::icon),
        "entity" => parse::<AuditEntity>(&value).map(AuditEntity::icon),
        "type" | "report_type" => parse::<ReportType>(&value).map(ReportType::icon),
        _ => None,
    }
}

/// Single-column terminal glyph for an icon name.
fn glyph(icon: &str) -> Option<char> {
    let glyph = match icon {
        "check-circle" => '✔',
        "x-circle" => '✖',
        "clock" => '◷',
        "truck" => '⛟',
        "alert-triangle" => '△',
        "car" => '▣',
        "swords" => '⚔',
        "target" => '◎',
        "wrench" => '⚒',
        "radio" => '☏',
        "plus" => '+',
        "edit" => '✎',
        "trash-2" => '✗',
        "arrow-right-left" => '⇄',
        "eye" => '◉',
        "user" => '☺',
        "users" => '☻',
        "shield" => '⛨',
        "file-text" => '☰',
        "history" => '↺',
        "dollar-sign" => '$',
        _ => return None,
    };
    Some(glyph)
}

fn parse<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}

const fn ansi_code(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Success => Some("32"),
        Tone::Warning => Some("33"),
        Tone::Destructive => Some("31"),
        Tone::Secondary => Some("34"),
        Tone::Accent => Some("36"),
        Tone::Muted => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("pending", Some(Tone::Warning))]
    #[case("in-transit", Some(Tone::Secondary))]
    #[case("Completed", Some(Tone::Success))]
    #[case("decommissioned", Some(Tone::Destructive))]
    #[case("generating", Some(Tone::Warning))]
    #[case("urgent", Some(Tone::Destructive))]
    #[case("critical", Some(Tone::Destructive))]
    #[case("false", Some(Tone::Destructive))]
    #[case("Fort Bragg", None)]
    fn status_cells_map_to_tones(#[case] cell: &str, #[case] expected: Option<Tone>) {
        assert_eq!(tone_of(cell), expected);
    }

    #[rstest]
    #[case("4500000", true)]
    #[case("1,250", true)]
    #[case("2024-08-15", false)]
    #[case("TRF-001", false)]
    #[case("-", false)]
    fn numeric_detection(#[case] cell: &str, #[case] expected: bool) {
        assert_eq!(looks_numeric(cell), expected);
    }

    #[test]
    fn colored_cells_keep_alignment() {
        let headers = ["id", "status"];
        let rows = vec![
            vec!["TRF-001".to_string(), "pending".to_string()],
            vec!["TRF-002".to_string(), "approved".to_string()],
        ];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
                icons: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[33mpending "));
        assert_eq!(strip_ansi(lines[2]).len(), strip_ansi(lines[3]).len());
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "reason"];
        let rows = vec![vec![
            "TRF-001".to_string(),
            "Training exercise support for the northern rotation".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
                icons: false,
            },
        );
        for line in table.lines() {
            assert!(display_width(line) <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[rstest]
    #[case("status", "in-transit", Some("truck"))]
    #[case("status", "maintenance", Some("alert-triangle"))]
    #[case("category", "communication", Some("radio"))]
    #[case("action", "delete", Some("trash-2"))]
    #[case("entity", "report", Some("file-text"))]
    #[case("type", "financial", Some("dollar-sign"))]
    #[case("reason", "pending", None)]
    #[case("status", "unknown", None)]
    fn icon_follows_field(
        #[case] field: &str,
        #[case] value: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(icon_for(field, value), expected);
    }

    #[test]
    fn every_icon_has_a_glyph() {
        let icons = AssetCategory::ALL
            .into_iter()
            .map(AssetCategory::icon)
            .chain(AssetStatus::ALL.into_iter().map(AssetStatus::icon))
            .chain(TransferStatus::ALL.into_iter().map(TransferStatus::icon))
            .chain(
                [
                    AuditAction::Create,
                    AuditAction::Update,
                    AuditAction::Delete,
                    AuditAction::Transfer,
                    AuditAction::View,
                    AuditAction::Login,
                    AuditAction::Logout,
                ]
                .into_iter()
                .map(AuditAction::icon),
            )
            .chain(
                [
                    AuditEntity::Asset,
                    AuditEntity::User,
                    AuditEntity::Transfer,
                    AuditEntity::Report,
                    AuditEntity::System,
                ]
                .into_iter()
                .map(AuditEntity::icon),
            )
            .chain(
                [
                    ReportType::Asset,
                    ReportType::Transfer,
                    ReportType::Maintenance,
                    ReportType::Financial,
                    ReportType::Security,
                ]
                .into_iter()
                .map(ReportType::icon),
            );
        for icon in icons {
            assert!(glyph(icon).is_some(), "no glyph for {icon}");
        }
    }

    #[test]
    fn icons_prefix_typed_columns_and_keep_alignment() {
        let headers = ["id", "status", "reason"];
        let rows = vec![
            vec![
                "TRF-001".to_string(),
                "pending".to_string(),
                "approved".to_string(),
            ],
            vec![
                "TRF-002".to_string(),
                "in-transit".to_string(),
                "-".to_string(),
            ],
        ];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
                icons: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[33m◷ pending"), "{}", lines[2]);
        assert!(strip_ansi(lines[3]).contains("⛟ in-transit"));
        // Free-text columns stay undecorated even when they hold a status word.
        assert!(!strip_ansi(lines[2]).contains("✔"));
        assert_eq!(
            display_width(&strip_ansi(lines[2])),
            display_width(&strip_ansi(lines[3]))
        );
    }

    #[test]
    fn key_value_rows_take_icons_from_the_key() {
        let headers = ["key", "value"];
        let rows = vec![
            vec!["id".to_string(), "AST-001".to_string()],
            vec!["category".to_string(), "vehicle".to_string()],
        ];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
                icons: true,
            },
        );
        assert!(table.contains("▣ vehicle"));
        assert!(!table.contains("▣ AST-001"));
    }

    fn strip_ansi(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' && chars.peek() == Some(&'[') {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
                continue;
            }
            out.push(ch);
        }
        out
    }
}

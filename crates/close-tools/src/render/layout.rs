//! Layout model and its evaluator.
//!
//! A [`Layout`] is a static, ordered description of the lines rendered for one record kind. Every
//! value goes through a [`Cell`], and every cell carries its own placeholder, so missing, `null`
//! and empty values are handled here and nowhere else.

use super::RenderError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone as _};
use serde_json::{Map, Value};
use tracing::warn;

/// Field path inside a record; `&[]` addresses the value itself.
pub type Path = &'static [&'static str];

const DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Rendering description for one record kind.
#[derive(Debug)]
pub struct Layout {
    /// First line of every record, if any (e.g. `Task:`).
    pub(crate) heading: Option<&'static str>,
    /// Plural noun for counts and the empty sentinel ("leads", "email activities").
    pub(crate) plural: &'static str,
    pub(crate) items: &'static [Item],
    /// Envelope-level summary fields, rendered only when present.
    pub(crate) aggregates: &'static [Field],
}

impl Layout {
    #[must_use]
    pub fn plural(&self) -> &'static str {
        self.plural
    }

    /// Sentinel rendered for an empty result set.
    #[must_use]
    pub fn empty_sentinel(&self) -> String {
        format!("No {} found.", self.plural)
    }
}

#[derive(Debug)]
pub(crate) enum Item {
    Field(Field),
    Blank,
    Section(Section),
}

/// One `Label: value` line.
#[derive(Debug)]
pub(crate) struct Field {
    pub label: &'static str,
    pub cell: Cell,
}

#[derive(Debug)]
pub(crate) enum Cell {
    Text {
        path: Path,
        or: &'static str,
    },
    /// First path that yields a value.
    FirstOf {
        paths: &'static [Path],
        or: &'static str,
    },
    /// Present parts joined with a space.
    Words {
        paths: &'static [Path],
        or: &'static str,
    },
    Timestamp {
        path: Path,
        or: &'static str,
    },
    Flag {
        path: Path,
        yes: &'static str,
        no: &'static str,
    },
    /// Length of a list; `0` when absent.
    Count {
        path: Path,
    },
    /// Each list element rendered through `item`, joined with `sep`.
    Join {
        path: Path,
        item: &'static [Piece],
        sep: &'static str,
        or: &'static str,
    },
    /// Like `Join`, over the first path holding a non-empty list.
    JoinFirst {
        paths: &'static [Path],
        item: &'static [Piece],
        sep: &'static str,
        or: &'static str,
    },
    /// Integer minor currency units shown in major units (`/ 100`), `0` when absent,
    /// optionally followed by a period.
    MinorUnits {
        path: Path,
        period: Option<(Path, &'static str)>,
    },
    /// US cents shown as `$d.cc`.
    Cents {
        path: Path,
        or: &'static str,
    },
    Suffixed {
        path: Path,
        suffix: &'static str,
        or: &'static str,
    },
    /// Object entries as `key=value, ...` (grouped counts).
    Pairs {
        path: Path,
        or: &'static str,
    },
}

impl Cell {
    fn path(&self) -> Path {
        match self {
            Self::FirstOf { paths, .. }
            | Self::Words { paths, .. }
            | Self::JoinFirst { paths, .. } => {
                paths.first().copied().unwrap_or(&[])
            }
            Self::Text { path, .. }
            | Self::Timestamp { path, .. }
            | Self::Flag { path, .. }
            | Self::Count { path }
            | Self::Join { path, .. }
            | Self::MinorUnits { path, .. }
            | Self::Cents { path, .. }
            | Self::Suffixed { path, .. }
            | Self::Pairs { path, .. } => *path,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Piece {
    Lit(&'static str),
    Cell(Cell),
}

/// A titled block of bullets drawn from a nested list or map.
#[derive(Debug)]
pub(crate) struct Section {
    pub title: &'static str,
    pub path: Path,
    pub body: SectionBody,
    pub empty: &'static str,
}

#[derive(Debug)]
pub(crate) enum SectionBody {
    /// `- {head}` per list element, followed by indented `Label: value` detail lines.
    Bullets {
        head: &'static [Piece],
        details: &'static [Field],
        separator: &'static str,
    },
    /// `- key: value` per object entry.
    Entries,
}

pub(crate) fn evaluate(layout: &Layout, record: &Value) -> Result<String, RenderError> {
    if !record.is_object() {
        return Err(RenderError::NotAnObject(type_name(record)));
    }

    let mut lines: Vec<String> = Vec::with_capacity(layout.items.len() + 1);
    if let Some(heading) = layout.heading {
        lines.push(heading.to_string());
    }
    for item in layout.items {
        match item {
            Item::Field(field) => lines.push(field_line(field, record)?),
            Item::Blank => lines.push(String::new()),
            Item::Section(section) => lines.push(section_block(section, record)?),
        }
    }
    Ok(lines.join("\n"))
}

/// Aggregate lines for the fields present on `envelope`; a malformed one is skipped alone.
pub(crate) fn aggregate_lines(layout: &Layout, envelope: &Value) -> Vec<String> {
    layout
        .aggregates
        .iter()
        .filter(|field| lookup(envelope, field.cell.path()).is_some())
        .filter_map(|field| match field_line(field, envelope) {
            Ok(line) => Some(line),
            Err(e) => {
                warn!(kind = layout.plural, aggregate = field.label, error = %e, "skipping malformed aggregate");
                None
            }
        })
        .collect()
}

fn field_line(field: &Field, ctx: &Value) -> Result<String, RenderError> {
    Ok(format!("{}: {}", field.label, cell(&field.cell, ctx)?))
}

fn section_block(section: &Section, record: &Value) -> Result<String, RenderError> {
    let entries = match (&section.body, lookup(record, section.path)) {
        (_, None) => Vec::new(),
        (
            SectionBody::Bullets {
                head,
                details,
                separator: _,
            },
            Some(Value::Array(items)),
        ) => items
            .iter()
            .map(|item| bullet(head, details, item))
            .collect::<Result<Vec<_>, _>>()?,
        (SectionBody::Entries, Some(Value::Object(map))) => map_entries(map),
        (SectionBody::Bullets { .. }, Some(other)) => {
            return Err(shape_error(section.path, "a list", other));
        }
        (SectionBody::Entries, Some(other)) => {
            return Err(shape_error(section.path, "an object", other));
        }
    };

    let body = if entries.is_empty() {
        section.empty.to_string()
    } else {
        let separator = match section.body {
            SectionBody::Bullets { separator, .. } => separator,
            SectionBody::Entries => "\n",
        };
        entries.join(separator)
    };
    Ok(format!("{}:\n{body}", section.title))
}

fn bullet(head: &[Piece], details: &[Field], item: &Value) -> Result<String, RenderError> {
    let mut out = format!("- {}", pieces(head, item)?);
    for detail in details {
        out.push_str("\n  ");
        out.push_str(&field_line(detail, item)?);
    }
    Ok(out)
}

fn map_entries(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .map(|(k, v)| format!("- {k}: {}", scalar_text(v).unwrap_or_default()))
        .collect()
}

fn pieces(parts: &[Piece], ctx: &Value) -> Result<String, RenderError> {
    let mut out = String::new();
    for part in parts {
        match part {
            Piece::Lit(s) => out.push_str(s),
            Piece::Cell(c) => out.push_str(&cell(c, ctx)?),
        }
    }
    Ok(out)
}

fn cell(cell: &Cell, ctx: &Value) -> Result<String, RenderError> {
    let text = match cell {
        Cell::Text { path, or } => text_at(ctx, path).unwrap_or_else(|| (*or).to_string()),
        Cell::FirstOf { paths, or } => paths
            .iter()
            .find_map(|p| text_at(ctx, p))
            .unwrap_or_else(|| (*or).to_string()),
        Cell::Words { paths, or } => {
            let words: Vec<String> = paths.iter().filter_map(|p| text_at(ctx, p)).collect();
            if words.is_empty() {
                (*or).to_string()
            } else {
                words.join(" ")
            }
        }
        Cell::Timestamp { path, or } => {
            text_at(ctx, path).map_or_else(|| (*or).to_string(), |raw| format_timestamp(&raw))
        }
        Cell::Flag { path, yes, no } => {
            let set = lookup(ctx, path).and_then(Value::as_bool).unwrap_or(false);
            (if set { *yes } else { *no }).to_string()
        }
        Cell::Count { path } => match lookup(ctx, path) {
            None => "0".to_string(),
            Some(Value::Array(items)) => items.len().to_string(),
            Some(other) => return Err(shape_error(path, "a list", other)),
        },
        Cell::Join {
            path,
            item,
            sep,
            or,
        } => match lookup(ctx, path) {
            None => (*or).to_string(),
            Some(Value::Array(items)) if items.is_empty() => (*or).to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| pieces(item, v))
                .collect::<Result<Vec<_>, _>>()?
                .join(sep),
            Some(other) => return Err(shape_error(path, "a list", other)),
        },
        Cell::JoinFirst {
            paths,
            item,
            sep,
            or,
        } => {
            let mut found = None;
            for path in *paths {
                match lookup(ctx, path) {
                    None => {}
                    Some(Value::Array(items)) if items.is_empty() => {}
                    Some(Value::Array(items)) => {
                        found = Some(items);
                        break;
                    }
                    Some(other) => return Err(shape_error(path, "a list", other)),
                }
            }
            match found {
                Some(items) => items
                    .iter()
                    .map(|v| pieces(item, v))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(sep),
                None => (*or).to_string(),
            }
        }
        Cell::MinorUnits { path, period } => {
            let major = lookup(ctx, path).and_then(number).unwrap_or(0.0) / 100.0;
            match period {
                Some((period_path, default)) => {
                    let period =
                        text_at(ctx, period_path).unwrap_or_else(|| (*default).to_string());
                    format!("{} {period}", format_number(major))
                }
                None => format_number(major),
            }
        }
        Cell::Cents { path, or } => lookup(ctx, path)
            .and_then(number)
            .map_or_else(|| (*or).to_string(), |cents| format!("${:.2}", cents / 100.0)),
        Cell::Suffixed { path, suffix, or } => {
            text_at(ctx, path).map_or_else(|| (*or).to_string(), |v| format!("{v}{suffix}"))
        }
        Cell::Pairs { path, or } => match lookup(ctx, path) {
            None => (*or).to_string(),
            Some(Value::Object(map)) if map.is_empty() => (*or).to_string(),
            Some(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| format!("{k}={}", scalar_text(v).unwrap_or_default()))
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => return Err(shape_error(path, "an object", other)),
        },
    };
    Ok(text)
}

/// Walk `path`; `null` counts as absent.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    (!current.is_null()).then_some(current)
}

fn text_at(ctx: &Value, path: &[&str]) -> Option<String> {
    lookup(ctx, path).and_then(scalar_text)
}

/// Display text of a value; `None` for null, blank strings and empty containers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Local long form of an ISO timestamp; unparseable input is echoed unchanged.
pub(crate) fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DATETIME_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        && let Some(local) = Local.from_local_datetime(&naive).earliest()
    {
        return local.format(DATETIME_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

fn shape_error(path: &[&str], expected: &'static str, found: &Value) -> RenderError {
    RenderError::Shape {
        path: path.join("."),
        expected,
        found: type_name(found),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Cell, Field, Item, Layout, Piece, Section, SectionBody, evaluate, format_timestamp,
    };
    use crate::render::RenderError;
    use chrono::{DateTime, Local};
    use serde_json::json;

    static SAMPLE: Layout = Layout {
        heading: Some("Sample:"),
        plural: "samples",
        items: &[
            Item::Field(Field {
                label: "Name",
                cell: Cell::Text {
                    path: &["name"],
                    or: "No name",
                },
            }),
            Item::Field(Field {
                label: "Owner",
                cell: Cell::FirstOf {
                    paths: &[&["owner", "name"], &["owner_name"]],
                    or: "Unassigned",
                },
            }),
            Item::Field(Field {
                label: "Full Name",
                cell: Cell::Words {
                    paths: &[&["first"], &["last"]],
                    or: "No name",
                },
            }),
            Item::Field(Field {
                label: "Done",
                cell: Cell::Flag {
                    path: &["done"],
                    yes: "Yes",
                    no: "No",
                },
            }),
            Item::Field(Field {
                label: "Tags",
                cell: Cell::Join {
                    path: &["tags"],
                    item: &[Piece::Cell(Cell::Text {
                        path: &[],
                        or: "?",
                    })],
                    sep: "|",
                    or: "No tags",
                },
            }),
            Item::Field(Field {
                label: "Amount",
                cell: Cell::MinorUnits {
                    path: &["amount"],
                    period: None,
                },
            }),
            Item::Field(Field {
                label: "Wait",
                cell: Cell::Suffixed {
                    path: &["wait"],
                    suffix: "s",
                    or: "N/A",
                },
            }),
            Item::Field(Field {
                label: "Groups",
                cell: Cell::Pairs {
                    path: &["groups"],
                    or: "None",
                },
            }),
            Item::Blank,
            Item::Section(Section {
                title: "Items",
                path: &["items"],
                body: SectionBody::Bullets {
                    head: &[
                        Piece::Cell(Cell::Text {
                            path: &["sku"],
                            or: "No SKU",
                        }),
                        Piece::Lit(" x"),
                        Piece::Cell(Cell::Text {
                            path: &["qty"],
                            or: "0",
                        }),
                    ],
                    details: &[Field {
                        label: "Note",
                        cell: Cell::Text {
                            path: &["note"],
                            or: "No note",
                        },
                    }],
                    separator: "\n",
                },
                empty: "No items",
            }),
            Item::Section(Section {
                title: "Extra",
                path: &["extra"],
                body: SectionBody::Entries,
                empty: "No extra",
            }),
        ],
        aggregates: &[],
    };

    #[test]
    fn empty_record_renders_every_placeholder() {
        let text = evaluate(&SAMPLE, &json!({})).expect("renders");
        assert_eq!(
            text,
            "Sample:\nName: No name\nOwner: Unassigned\nFull Name: No name\nDone: No\n\
             Tags: No tags\nAmount: 0\nWait: N/A\nGroups: None\n\nItems:\nNo items\nExtra:\nNo extra"
        );
    }

    #[test]
    fn null_and_blank_values_count_as_missing() {
        let text = evaluate(
            &SAMPLE,
            &json!({ "name": "  ", "owner": null, "tags": [], "extra": {}, "groups": {} }),
        )
        .expect("renders");
        assert!(text.contains("Name: No name"));
        assert!(text.contains("Owner: Unassigned"));
        assert!(text.contains("Tags: No tags"));
        assert!(text.contains("Groups: None"));
        assert!(text.contains("Extra:\nNo extra"));
    }

    #[test]
    fn present_values_fill_cells_and_sections() {
        let text = evaluate(
            &SAMPLE,
            &json!({
                "name": "Widget",
                "owner_name": "Ann",
                "first": "Jane",
                "last": "Doe",
                "done": true,
                "tags": ["a", 2, null],
                "amount": 12345,
                "wait": 30,
                "groups": { "annual": 1, "monthly": 2 },
                "items": [{ "sku": "W-1", "qty": 2 }, { "note": "gift" }],
                "extra": { "color": "red", "size": 3 },
            }),
        )
        .expect("renders");
        assert!(text.contains("Owner: Ann"));
        assert!(text.contains("Full Name: Jane Doe"));
        assert!(text.contains("Done: Yes"));
        assert!(text.contains("Tags: a|2|?"));
        assert!(text.contains("Amount: 123.45"));
        assert!(text.contains("Wait: 30s"));
        assert!(text.contains("Groups: annual=1, monthly=2"));
        assert!(text.contains("Items:\n- W-1 x2\n  Note: No note\n- No SKU x0\n  Note: gift"));
        assert!(text.contains("Extra:\n- color: red\n- size: 3"));
    }

    #[test]
    fn nested_path_through_a_scalar_is_absent_not_an_error() {
        let text = evaluate(&SAMPLE, &json!({ "owner": "user_123" })).expect("renders");
        assert!(text.contains("Owner: Unassigned"));
    }

    #[test]
    fn wrong_container_shapes_are_render_errors() {
        for bad in [
            json!({ "items": "oops" }),
            json!({ "tags": { "a": 1 } }),
            json!({ "extra": [1, 2] }),
            json!({ "groups": 3 }),
        ] {
            let err = evaluate(&SAMPLE, &bad).expect_err("shape");
            assert!(matches!(err, RenderError::Shape { .. }), "{bad}: {err}");
        }
        assert!(matches!(
            evaluate(&SAMPLE, &json!(["not", "a", "record"])),
            Err(RenderError::NotAnObject(_))
        ));
    }

    #[test]
    fn timestamps_render_in_local_time() {
        let raw = "2024-03-05T14:07:09.331000+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .expect("rfc3339")
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string();
        assert_eq!(format_timestamp(raw), expected);
        assert_eq!(format_timestamp("2024-03-05"), "3/5/2024");
        assert_eq!(format_timestamp("next tuesday"), "next tuesday");
    }
}

//! Rendering of tables, messages and errors.
//!
//! Every function takes `use_color: Option<bool>`: `None` leaves styling to
//! terminal detection, `Some` forces it on or off. Tests pass `Some(false)` to
//! compare plain text.

use super::styles::{BORDER, ERROR, HEADER, INFO, NULL, SUCCESS, WARNING};
use console::Style;
use emptrack::api::{CmdMessage, MessageLevel};
use emptrack::commands::CmdResult;
use emptrack::error::TrackerError;
use emptrack::model::{Table, Value};
use unicode_width::UnicodeWidthStr;

const EMPTY_TABLE: &str = "No rows found.";

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    let styled = style.apply_to(text);
    match use_color {
        Some(c) => styled.force_styling(c).to_string(),
        None => styled.to_string(),
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn render_table(table: &Table, use_color: Option<bool>) -> String {
    if table.is_empty() {
        return format!("\n{}\n", paint(&INFO, EMPTY_TABLE, use_color));
    }

    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        paint(&BORDER, &format!("+{}+", segments.join("+")), use_color)
    };
    let bar = paint(&BORDER, "|", use_color);

    let mut output = String::from("\n");
    output.push_str(&rule);
    output.push('\n');

    output.push_str(&bar);
    for (header, width) in table.headers.iter().zip(&widths) {
        output.push_str(&format!(" {} {}", paint(&HEADER, &pad(header, *width), use_color), bar));
    }
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');

    for (row, values) in cells.iter().zip(&table.rows) {
        output.push_str(&bar);
        for ((cell, value), width) in row.iter().zip(values).zip(&widths) {
            let padded = pad(cell, *width);
            let shown = if value.is_null() {
                paint(&NULL, &padded, use_color)
            } else {
                padded
            };
            output.push_str(&format!(" {} {}", shown, bar));
        }
        output.push('\n');
    }
    output.push_str(&rule);
    output.push('\n');
    output
}

fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let mut output = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*INFO,
            MessageLevel::Success => &*SUCCESS,
            MessageLevel::Warning => &*WARNING,
            MessageLevel::Error => &*ERROR,
        };
        output.push_str(&paint(style, &message.content, use_color));
        output.push('\n');
    }
    output
}

/// Table first, then messages.
pub fn render_result(result: &CmdResult, use_color: Option<bool>) -> String {
    let mut output = String::new();
    if let Some(table) = &result.table {
        output.push_str(&render_table(table, use_color));
    }
    output.push_str(&render_messages(&result.messages, use_color));
    output
}

pub fn render_error(error: &TrackerError, use_color: Option<bool>) -> String {
    format!("{}\n", paint(&ERROR, &format!("Error: {}", error), use_color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departments() -> Table {
        Table {
            headers: vec!["id".into(), "name".into()],
            rows: vec![
                vec![Value::Integer(1), Value::from("Engineering")],
                vec![Value::Integer(2), Value::from("Legal")],
            ],
        }
    }

    #[test]
    fn test_render_empty_table() {
        let output = render_table(&Table::default(), Some(false));
        assert_eq!(output, "\nNo rows found.\n");
    }

    #[test]
    fn test_render_table_is_aligned() {
        let output = render_table(&departments(), Some(false));
        let expected = "
+----+-------------+
| id | name        |
+----+-------------+
| 1  | Engineering |
| 2  | Legal       |
+----+-------------+
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_null_as_text() {
        let table = Table {
            headers: vec!["manager".into()],
            rows: vec![vec![Value::Null], vec![Value::from("John Doe")]],
        };
        let output = render_table(&table, Some(false));
        assert!(output.contains("| null     |"));
        assert!(output.contains("| John Doe |"));
    }

    #[test]
    fn test_render_wide_characters() {
        let table = Table {
            headers: vec!["name".into()],
            rows: vec![vec![Value::from("研究")]],
        };
        let output = render_table(&table, Some(false));
        assert!(output.contains("| 研究 |"));
        assert!(output.contains("+------+"));
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Legal department added successfully."),
            CmdMessage::warning("No roles available, add a role first."),
        ];
        let output = render_messages(&messages, Some(false));
        assert_eq!(
            output,
            "Legal department added successfully.\nNo roles available, add a role first.\n"
        );
    }

    #[test]
    fn test_render_messages_colored() {
        let messages = vec![CmdMessage::error("boom")];
        let output = render_messages(&messages, Some(true));
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("boom"));
    }

    #[test]
    fn test_render_result_table_before_messages() {
        let result = CmdResult::default()
            .with_table(departments())
            .with_message(CmdMessage::info("done"));
        let output = render_result(&result, Some(false));
        assert!(output.find("Engineering").unwrap() < output.find("done").unwrap());
    }

    #[test]
    fn test_render_error() {
        let output = render_error(&TrackerError::ConnectionClosed, Some(false));
        assert_eq!(
            output,
            "Error: The database connection has already been closed\n"
        );
    }
}

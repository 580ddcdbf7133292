//! CSV codec for exports and imports
//!
//! Writer and reader follow RFC 4180: fields containing a comma, quote or
//! line break are quoted, quotes inside are doubled, records end with CRLF.

use std::io::Write;

use crate::error::{KumaError, Result};
use crate::kuma::CsvRecord;

/// Escape a value for CSV output
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_line<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
    write!(writer, "{}\r\n", line.join(","))?;
    Ok(())
}

/// Write a header row followed by one line per record
pub fn write_csv<W: Write, R: CsvRecord>(writer: &mut W, rows: &[R]) -> Result<()> {
    write_line(writer, R::HEADER)?;
    for row in rows {
        write_line(writer, &row.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// One parsed record and the line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLine {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parse CSV text into records
///
/// Blank lines are skipped. A leading byte order mark is ignored.
pub fn parse_csv(text: &str) -> Result<Vec<CsvLine>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Whether the current record has any content yet
    let mut started = false;
    let mut line = 1;
    let mut record_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                started = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                end_record(&mut records, &mut fields, &mut field, started, record_line);
                started = false;
                line += 1;
                record_line = line;
            }
            _ => {
                field.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        return Err(KumaError::Csv {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    end_record(&mut records, &mut fields, &mut field, started, record_line);

    Ok(records)
}

fn end_record(
    records: &mut Vec<CsvLine>,
    fields: &mut Vec<String>,
    field: &mut String,
    started: bool,
    line: usize,
) {
    if !started {
        fields.clear();
        field.clear();
        return;
    }
    fields.push(std::mem::take(field));
    records.push(CsvLine {
        line,
        fields: std::mem::take(fields),
    });
}

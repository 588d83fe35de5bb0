//! CSV encoding of a [`Report`].

use super::types::Report;

pub const CSV_HEADER: [&str; 4] = [
    "Uploaded File Name",
    "Source File Name",
    "Similarity (%)",
    "Status",
];

/// Quotes a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let line: Vec<String> = fields.into_iter().map(escape_field).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

/// Formats a percentage with at most two decimals and no trailing zeros.
pub fn format_percent(percent: f64) -> String {
    let fixed = format!("{:.2}", percent);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Encodes the report table as CSV with a header row and LF line endings.
pub fn to_csv(report: &Report) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER);

    for row in report.rows() {
        let percent = format_percent(row.similarity_percent);
        push_record(
            &mut out,
            [
                row.submission_name.as_str(),
                row.source_name.as_str(),
                percent.as_str(),
                row.status.as_str(),
            ],
        );
    }

    out
}

impl Report {
    pub fn to_csv(&self) -> String {
        to_csv(self)
    }
}

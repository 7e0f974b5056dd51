use crate::domain::model::ValidationResult;
use crate::utils::error::Result;
use std::io::Write;

pub const COLUMNS: [&str; 8] = [
    "email",
    "valid",
    "result",
    "reason",
    "is_role",
    "is_disposable",
    "is_free",
    "did_you_mean",
];

fn cell_bool(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

fn cell_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Appends validation results as CSV rows in a fixed column order. The
/// header goes out once at construction, before any result arrives.
pub struct ResultWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut inner = csv::Writer::from_writer(sink);
        inner.write_record(COLUMNS)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, row: &ValidationResult) -> Result<()> {
        self.inner.write_record([
            row.email.as_str(),
            cell_bool(row.valid),
            cell_str(&row.result),
            cell_str(&row.reason),
            cell_bool(row.is_role),
            cell_bool(row.is_disposable),
            cell_bool(row.is_free),
            cell_str(&row.did_you_mean),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(rows: &[ValidationResult]) -> String {
        let mut writer = ResultWriter::new(Vec::new()).unwrap();
        for row in rows {
            writer.write(row).unwrap();
        }
        writer.flush().unwrap();
        String::from_utf8(writer.inner.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn header_is_written_even_with_no_rows() {
        assert_eq!(
            written(&[]),
            "email,valid,result,reason,is_role,is_disposable,is_free,did_you_mean\n"
        );
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let row = ValidationResult {
            email: "a@example.com".to_string(),
            valid: Some(true),
            ..Default::default()
        };
        let output = written(&[row]);
        let mut lines = output.lines().skip(1);
        assert_eq!(lines.next(), Some("a@example.com,true,,,,,,"));
    }

    #[test]
    fn full_payload_round_trips_in_column_order() {
        let row = ValidationResult {
            email: "b@example.com".to_string(),
            valid: Some(false),
            result: Some("undeliverable".to_string()),
            reason: Some("Invalid Domain".to_string()),
            is_role: Some(false),
            is_disposable: Some(true),
            is_free: Some(false),
            did_you_mean: Some("b@example.org".to_string()),
        };
        let output = written(&[row]);
        let mut lines = output.lines().skip(1);
        assert_eq!(
            lines.next(),
            Some("b@example.com,false,undeliverable,Invalid Domain,false,true,false,b@example.org")
        );
    }
}

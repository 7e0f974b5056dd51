use crate::core::input::InputSource;
use crate::domain::model::PrecheckSummary;
use crate::utils::error::Result;
use crate::utils::syntax::check_syntax;

/// Advisory syntax pass over the input, before any network traffic.
///
/// Rows with more than one field and addresses that fail the local syntax
/// rules are counted as bad and logged with their line number, but nothing
/// is filtered out: the remote API stays the authority and every field is
/// still dispatched afterwards.
pub fn run_precheck(source: &InputSource) -> Result<PrecheckSummary> {
    let mut reader = source.csv_reader()?;
    let mut summary = PrecheckSummary::default();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() == 1 {
            let address = &record[0];
            match check_syntax(address) {
                Ok(()) => summary.ok += 1,
                Err(reason) => {
                    tracing::warn!("line {line}: {address}: {reason}");
                    summary.bad += 1;
                }
            }
        } else {
            tracing::warn!("line {line}: expected 1 field, found {}", record.len());
            summary.bad += 1;
        }
    }

    tracing::info!(
        "Scanned input {}, contains {} syntactically OK and {} bad addresses",
        source.label(),
        summary.ok,
        summary.bad
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precheck(data: &str) -> PrecheckSummary {
        run_precheck(&InputSource::Inline(data.to_string())).unwrap()
    }

    #[test]
    fn all_good_input_counts_every_line_ok() {
        let summary = precheck("a@example.com\nb@example.com\nc@example.com\n");
        assert_eq!(summary, PrecheckSummary { ok: 3, bad: 0 });
    }

    #[test]
    fn bad_syntax_is_counted_not_fatal() {
        let summary = precheck("a@example.com\nnot-an-address\n");
        assert_eq!(summary, PrecheckSummary { ok: 1, bad: 1 });
    }

    #[test]
    fn multi_field_rows_count_as_bad() {
        let summary = precheck("a@example.com,extra\nb@example.com\n");
        assert_eq!(summary, PrecheckSummary { ok: 1, bad: 1 });
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(precheck(""), PrecheckSummary::default());
    }
}

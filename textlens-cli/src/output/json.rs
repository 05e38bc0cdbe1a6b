//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<Report>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textlens_core::{SourceKind, TextAnalyzer};

    #[test]
    fn test_outputs_array_of_reports() {
        let analysis = TextAnalyzer::new().analyze_text("story.txt", "Noon is noon.");
        let report = Report::from_analysis(&analysis, SourceKind::WebResource).unwrap();

        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_report(&report).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let reports = parsed.as_array().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["file_name"], "story.txt");
        assert_eq!(reports[0]["source"], "web_resource");
        assert_eq!(reports[0]["metrics"]["most_used_words"]["noon"], 2);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}

//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use serde_json::Value;
use std::io::{self, Write};
use textlens_core::metrics::metric_title;

/// Plain text formatter - outputs one `TITLE: value` line per metric
pub struct TextFormatter<W: Write> {
    writer: W,
    reports_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports_written: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.reports_written > 0 {
            writeln!(self.writer)?;
        }
        self.reports_written += 1;

        writeln!(self.writer, "== {} ({}) ==", report.file_name, report.source)?;
        for (key, value) in &report.metrics {
            let title = metric_title(key).unwrap_or(key.as_str());
            writeln!(self.writer, "{}: {}", title, render(value))?;
        }
        writeln!(
            self.writer,
            "{}: {}",
            metric_title("reversed_text").unwrap_or("reversed_text"),
            report.reversed_text_file
        )?;
        writeln!(
            self.writer,
            "{}: {}",
            metric_title("reversed_words_intact").unwrap_or("reversed_words_intact"),
            report.reversed_words_intact_file
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textlens_core::{SourceKind, TextAnalyzer};

    fn output_for(texts: &[(&str, &str)]) -> String {
        let analyzer = TextAnalyzer::new();
        let mut formatter = TextFormatter::new(Vec::new());
        for (name, text) in texts {
            let analysis = analyzer.analyze_text(name, text);
            let report = Report::from_analysis(&analysis, SourceKind::LocalFile).unwrap();
            formatter.format_report(&report).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_titles_and_values() {
        let output = output_for(&[("palindromes.txt", "Madam Anna sees a deed.")]);

        assert!(output.starts_with("== palindromes.txt (local file) =="));
        assert!(output.contains("The number of words: 4\n"));
        assert!(output.contains(r#"Palindrome words: ["madam","anna","sees","deed"]"#));
        assert!(output.contains("Are all words in the text palindromes: true\n"));
        assert!(output.contains("Reversed text: reversed/reversed_palindromes.txt\n"));
    }

    #[test]
    fn test_reports_are_separated() {
        let output = output_for(&[("a.txt", "Noon."), ("b.txt", "Level.")]);
        assert!(output.contains("\n\n== b.txt (local file) =="));
    }
}

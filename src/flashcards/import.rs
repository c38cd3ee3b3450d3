//! Heuristic CSV ingestion for flashcards.
//!
//! Accepts loosely formatted exports: a header row is optional and column
//! names are matched against a small set of aliases. Rows are split on
//! commas outside double quotes, so quoted fields may contain commas.
//! Individual bad rows are counted and skipped rather than failing the
//! whole file; only an empty file or unresolvable columns abort the parse.
//!
//! Known ambiguity, inherited from the format: a headerless file whose
//! first data row happens to contain one of the header tokens (say a topic
//! literally named "Question") is mistaken for a headered file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted header names for the topic column.
pub const TOPIC_ALIASES: [&str; 3] = ["topic", "category", "group"];
/// Accepted header names for the front (prompt) column.
pub const FRONT_ALIASES: [&str; 3] = ["question", "front", "q"];
/// Accepted header names for the back (answer) column.
pub const BACK_ALIASES: [&str; 3] = ["answer", "back", "a"];

/// Tokens whose presence anywhere in the first line marks it as a header.
const HEADER_TOKENS: [&str; 6] = ["topic", "category", "question", "front", "answer", "back"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CsvImportError {
    #[error("CSV contains no data rows")]
    Empty,

    #[error(
        "CSV must have columns for topic (topic, category or group), \
         front (question, front or q) and back (answer, back or a); \
         without a header row the first three columns are used in that order"
    )]
    UnresolvedColumns,
}

/// One accepted row, tagged with its topic for later grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvRecord {
    pub topic: String,
    pub front: String,
    pub back: String,
}

/// Accepted records in file order plus the number of rejected rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvParseOutcome {
    pub records: Vec<CsvRecord>,
    pub rejected: usize,
}

/// Parse raw CSV text into flashcard records.
///
/// Lines are trimmed and blank lines dropped before anything else. The
/// first surviving line is treated as a header when it contains any of the
/// recognised tokens; otherwise columns 0, 1, 2 map to topic, front, back.
/// A row is accepted only when all three fields are non-empty after
/// trimming; short and incomplete rows count toward `rejected`.
pub fn parse_flashcards_csv(raw: &str) -> Result<CsvParseOutcome, CsvImportError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(CsvImportError::Empty);
    }

    let first = lines[0].to_lowercase();
    let has_header = HEADER_TOKENS.iter().any(|token| first.contains(token));

    let (topic_idx, front_idx, back_idx) = if has_header {
        let headers: Vec<String> = lines[0]
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect();
        let find = |aliases: &[&str]| headers.iter().position(|h| aliases.contains(&h.as_str()));
        match (find(&TOPIC_ALIASES), find(&FRONT_ALIASES), find(&BACK_ALIASES)) {
            (Some(t), Some(f), Some(b)) => (t, f, b),
            _ => return Err(CsvImportError::UnresolvedColumns),
        }
    } else {
        (0, 1, 2)
    };
    let max_idx = topic_idx.max(front_idx).max(back_idx);

    let mut records = Vec::new();
    let mut rejected = 0usize;
    let data_rows = if has_header { &lines[1..] } else { &lines[..] };

    for line in data_rows {
        let fields = split_quoted(line);
        if fields.len() <= max_idx {
            rejected += 1;
            continue;
        }
        let topic = fields[topic_idx].trim();
        let front = fields[front_idx].trim();
        let back = fields[back_idx].trim();
        if topic.is_empty() || front.is_empty() || back.is_empty() {
            rejected += 1;
            continue;
        }
        records.push(CsvRecord {
            topic: topic.to_string(),
            front: front.to_string(),
            back: back.to_string(),
        });
    }

    Ok(CsvParseOutcome { records, rejected })
}

/// Split a row on commas that are not inside double quotes, then trim each
/// field and strip one layer of surrounding quotes.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| strip_quotes(field.trim()).to_string())
        .collect()
}

fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headered_file_with_blank_row() {
        let raw = "Topic,Question,Answer\nMath,2+2?,4\n,,\nCS,What is LIFO?,Stack";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.rejected, 1);
        assert_eq!(
            outcome.records[0],
            CsvRecord {
                topic: "Math".to_string(),
                front: "2+2?".to_string(),
                back: "4".to_string(),
            }
        );
        assert_eq!(outcome.records[1].topic, "CS");
        assert_eq!(outcome.records[1].back, "Stack");
    }

    #[test]
    fn test_headerless_fallback_uses_first_three_columns() {
        let outcome = parse_flashcards_csv("Math,2+2?,4").unwrap();
        assert_eq!(outcome.rejected, 0);
        assert_eq!(
            outcome.records,
            vec![CsvRecord {
                topic: "Math".to_string(),
                front: "2+2?".to_string(),
                back: "4".to_string(),
            }]
        );
    }

    #[test]
    fn test_header_aliases_and_column_reordering() {
        let raw = "Q,A,Category\nWhat is LIFO?,Stack,CS";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records.len(), 1);
        let rec = &outcome.records[0];
        assert_eq!(rec.topic, "CS");
        assert_eq!(rec.front, "What is LIFO?");
        assert_eq!(rec.back, "Stack");
    }

    #[test]
    fn test_quoted_commas_survive_splitting() {
        let raw = "Topic,Question,Answer\nCS,\"What are stacks, really?\",\"LIFO, per definition\"";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].front, "What are stacks, really?");
        assert_eq!(outcome.records[0].back, "LIFO, per definition");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(parse_flashcards_csv(""), Err(CsvImportError::Empty));
        assert_eq!(parse_flashcards_csv("  \n\n  \n"), Err(CsvImportError::Empty));
    }

    #[test]
    fn test_header_without_resolvable_columns_fails() {
        // "question" triggers header detection, but no topic alias exists.
        let raw = "question,answer\n2+2?,4";
        assert_eq!(
            parse_flashcards_csv(raw),
            Err(CsvImportError::UnresolvedColumns)
        );
    }

    #[test]
    fn test_short_rows_are_rejected_not_fatal() {
        let raw = "Topic,Question,Answer\nMath,2+2?,4\nonly-one-field\nMath,incomplete";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.rejected, 2);
    }

    #[test]
    fn test_lines_are_trimmed_before_parsing() {
        let raw = "  Topic,Question,Answer  \r\n  Math , 2+2? , 4  \r\n";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].topic, "Math");
        assert_eq!(outcome.records[0].front, "2+2?");
    }

    #[test]
    fn test_one_quote_layer_is_stripped() {
        let raw = "Topic,Question,Answer\nCS,\"\"double\"\",plain";
        let outcome = parse_flashcards_csv(raw).unwrap();
        assert_eq!(outcome.records[0].front, "\"double\"");
    }
}

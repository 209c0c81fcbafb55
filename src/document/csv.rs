use std::io::Cursor;

use crate::error::LoadError;

/// Parses CSV content into rows. Records may have differing field counts.
pub(super) fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, LoadError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut rows = Vec::new();
    for (line_num, record) in reader.records().enumerate() {
        let record = record.map_err(|err| {
            LoadError::corrupt("csv", format!("record {}: {err}", line_num + 1))
        })?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::parse_rows;

    #[test]
    fn parse_rows_handles_quotes_and_ragged_records() {
        let rows = parse_rows("name,score\n\"Doe, Jane\",91\nsolo\n").expect("csv should parse");
        assert_eq!(
            rows,
            vec![
                vec!["name".to_string(), "score".to_string()],
                vec!["Doe, Jane".to_string(), "91".to_string()],
                vec!["solo".to_string()],
            ]
        );
    }

    #[test]
    fn parse_rows_yields_nothing_for_blank_input() {
        let rows = parse_rows("").expect("empty csv should parse");
        assert!(rows.is_empty());
    }
}

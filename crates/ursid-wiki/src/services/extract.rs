//! Wikitext species-table extraction.
//!
//! The input is split on `{{Species table/end}}` into tables and each table on
//! `{{Species table/row` into rows. Four independent patterns pick the name,
//! binomial, image file and range out of a row; a row missing any of them is
//! dropped without error. This is best-effort scraping, not a wikitext parser.

use std::sync::LazyLock;

use futures::future::join_all;
use regex::Regex;

use super::ImageResolver;
use crate::config::wikitext;
use crate::models::{BearRecord, RawRow};

/// `|name=[[Polar bear]]`
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|name=\[\[(.*?)\]\]").expect("NAME regex"));

/// `|binomial=Ursus maritimus` up to the line break.
static BINOMIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|binomial=(.*?)\n").expect("BINOMIAL regex"));

/// `|image=File:Polar bear.jpg` up to the line break.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|image=(.*?)\n").expect("IMAGE regex"));

/// `|range=Arctic (circumpolar)`: everything up to the first parenthesis,
/// which must come before the next field. Whitespace before it is kept, line
/// breaks included. A range with no parenthesis does not match.
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|range=([^|(]*)\(").expect("RANGE regex"));

const FILE_PREFIX: &str = "File:";

/// Split a document into species-table blocks.
pub fn species_tables(text: &str) -> impl Iterator<Item = &str> {
    text.split(wikitext::TABLE_END)
}

/// Split a species table into candidate row fragments.
///
/// The first fragment is whatever precedes the first row marker.
pub fn table_rows(table: &str) -> impl Iterator<Item = &str> {
    table.split(wikitext::ROW_START)
}

/// Capture the four required fields of one row.
///
/// Returns `None` if any field is missing.
#[must_use]
pub fn parse_row(row: &str) -> Option<RawRow> {
    let name = capture(&NAME, row)?;
    let binomial = capture(&BINOMIAL, row)?;
    let image = capture(&IMAGE, row)?;
    let range = capture(&RANGE, row)?;

    Some(RawRow {
        name: name.to_string(),
        binomial: binomial.to_string(),
        image_file: image_token(image).to_string(),
        range: range.to_string(),
    })
}

/// Extract every complete species row, resolving images through `resolver`.
///
/// Rows of one table are resolved concurrently and the table is finished
/// before the next one starts. Output keeps source order.
pub async fn extract_bears<R>(text: &str, resolver: &R) -> Vec<BearRecord>
where
    R: ImageResolver + ?Sized,
{
    let mut bears = Vec::new();

    for (index, table) in species_tables(text).enumerate() {
        let mut skipped = 0usize;
        let rows: Vec<RawRow> = table_rows(table)
            .filter_map(|row| {
                let parsed = parse_row(row);
                if parsed.is_none() {
                    skipped += 1;
                }
                parsed
            })
            .collect();

        if rows.is_empty() {
            continue;
        }

        let records = join_all(rows.into_iter().map(|row| async move {
            let image = resolver.resolve(&row.image_file).await;
            row.into_record(image)
        }))
        .await;

        tracing::debug!(table = index, records = records.len(), skipped, "Extracted species table");
        bears.extend(records);
    }

    bears
}

fn capture<'a>(pattern: &Regex, row: &'a str) -> Option<&'a str> {
    pattern.captures(row)?.get(1).map(|m| m.as_str())
}

/// `" File:Polar bear.jpg "` -> `"Polar bear.jpg"`
fn image_token(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix(FILE_PREFIX).unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    const POLAR: &str = "\n|name=[[Polar bear]]\n|binomial=Ursus maritimus\n|image=Polar_bear.jpg\n|range=Arctic (circumpolar)\n}}\n";

    #[derive(Default)]
    struct RecordingResolver {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageResolver for RecordingResolver {
        async fn resolve(&self, file_name: &str) -> String {
            self.calls.lock().unwrap().push(file_name.to_string());
            format!("https://upload.test/{file_name}")
        }
    }

    fn table(rows: &[&str]) -> String {
        let mut out = String::from("{{Species table/start}}\n");
        for row in rows {
            out.push_str(wikitext::ROW_START);
            out.push_str(row);
        }
        out.push_str(wikitext::TABLE_END);
        out
    }

    #[test]
    fn test_parse_row_all_fields() {
        let row = parse_row(POLAR).unwrap();
        assert_eq!(row.name, "Polar bear");
        assert_eq!(row.binomial, "Ursus maritimus");
        assert_eq!(row.image_file, "Polar_bear.jpg");
        assert_eq!(row.range, "Arctic ");
    }

    #[test]
    fn test_parse_row_strips_file_prefix() {
        let row = parse_row(
            "|name=[[Sun bear]]\n|binomial=Helarctos malayanus\n|image= File:Sun bear.jpg \n|range=Asia (tropics)\n",
        )
        .unwrap();
        assert_eq!(row.image_file, "Sun bear.jpg");
        assert_eq!(row.range, "Asia ");
    }

    #[test]
    fn test_parse_row_missing_field() {
        let missing_name = "|binomial=Ursus arctos\n|image=Bear.jpg\n|range=Eurasia (wide)\n";
        let missing_binomial = "|name=[[Brown bear]]\n|image=Bear.jpg\n|range=Eurasia (wide)\n";
        let missing_image = "|name=[[Brown bear]]\n|binomial=Ursus arctos\n|range=Eurasia (wide)\n";
        let missing_range = "|name=[[Brown bear]]\n|binomial=Ursus arctos\n|image=Bear.jpg\n";

        assert!(parse_row(missing_name).is_none());
        assert!(parse_row(missing_binomial).is_none());
        assert!(parse_row(missing_image).is_none());
        assert!(parse_row(missing_range).is_none());
    }

    #[test]
    fn test_binomial_needs_line_break() {
        assert!(parse_row("|name=[[Brown bear]]\n|image=Bear.jpg\n|range=x (y)|binomial=Ursus arctos").is_none());
    }

    #[test]
    fn test_empty_range_is_captured_empty() {
        let row = parse_row("|name=[[Cave bear]]\n|binomial=Ursus spelaeus\n|image=Cave.jpg\n|range=(extinct)\n")
            .unwrap();
        assert_eq!(row.range, "");
        assert_eq!(row.range_or_default(), "Unknown");
    }

    #[test]
    fn test_range_spans_line_break_before_parenthesis() {
        let row = parse_row("|name=[[Polar bear]]\n|binomial=Ursus maritimus\n|image=Polar.jpg\n|range=Arctic\n(circumpolar)\n")
            .unwrap();
        assert_eq!(row.range, "Arctic\n");
    }

    #[test]
    fn test_range_without_parenthesis_drops_row() {
        let bare = "|name=[[Sun bear]]\n|binomial=Helarctos malayanus\n|image=Sun.jpg\n|range=Asia\n";
        let next_field = "|name=[[Sun bear]]\n|binomial=Helarctos malayanus\n|image=Sun.jpg\n|range=Asia\n|size=x\n";
        let paren_after_field = "|name=[[Sloth bear]]\n|binomial=Melursus ursinus\n|image=Sloth.jpg\n|range=India|size=(large)\n";

        assert!(parse_row(bare).is_none());
        assert!(parse_row(next_field).is_none());
        assert!(parse_row(paren_after_field).is_none());
    }

    #[test]
    fn test_splitting() {
        let text = format!("{}{}", table(&[POLAR, POLAR]), table(&[POLAR]));
        let tables: Vec<&str> = species_tables(&text).collect();
        // trailing fragment after the last end marker
        assert_eq!(tables.len(), 3);
        assert_eq!(table_rows(tables[0]).count(), 3);
        assert_eq!(table_rows(tables[1]).count(), 2);
    }

    #[tokio::test]
    async fn test_extract_worked_example() {
        let resolver = RecordingResolver::default();
        let bears = extract_bears(&table(&[POLAR]), &resolver).await;

        assert_eq!(
            bears,
            vec![BearRecord {
                name: "Polar bear".to_string(),
                binomial: "Ursus maritimus".to_string(),
                image: "https://upload.test/Polar_bear.jpg".to_string(),
                range: "Arctic ".to_string(),
            }]
        );
        assert_eq!(*resolver.calls.lock().unwrap(), vec!["Polar_bear.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_extract_no_rows() {
        let resolver = RecordingResolver::default();
        assert!(extract_bears("", &resolver).await.is_empty());
        assert!(extract_bears("== Extant species ==\nno tables here", &resolver).await.is_empty());
        assert!(resolver.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extract_skips_incomplete_row_only() {
        let broken = "\n|name=[[Ghost bear]]\n|image=Ghost.jpg\n|range=Nowhere (myth)\n";
        let sun = "\n|name=[[Sun bear]]\n|binomial=Helarctos malayanus\n|image=Sun.jpg\n|range=Asia (tropics)\n";
        let resolver = RecordingResolver::default();

        let bears = extract_bears(&table(&[POLAR, broken, sun]), &resolver).await;

        let names: Vec<&str> = bears.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Polar bear", "Sun bear"]);
        assert_eq!(resolver.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_extract_keeps_order_across_tables() {
        let sun = "\n|name=[[Sun bear]]\n|binomial=Helarctos malayanus\n|image=Sun.jpg\n|range=Asia (tropics)\n";
        let cave = "\n|name=[[Cave bear]]\n|binomial=Ursus spelaeus\n|image=Cave.jpg\n|range=(extinct)\n";
        let text = format!("{}\n{}", table(&[POLAR, sun]), table(&[cave]));

        let bears = extract_bears(&text, &RecordingResolver::default()).await;

        let names: Vec<&str> = bears.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Polar bear", "Sun bear", "Cave bear"]);
        assert_eq!(bears[2].range, "Unknown");
    }
}

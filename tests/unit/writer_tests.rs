/*!
 * Tests for the .docx report writer
 */

use docproof::document::writer::{
    LEADS_HEADING, QUOTES_HEADING, TAGS_HEADING, TEXT_HEADING, TITLES_HEADING,
};
use docproof::document::{
    DocumentReader, DocumentWriter, collapse_separators, free_tags_line, strip_quote_marks,
    tags_from_list_line,
};
use docproof::proofreading::OutputRecord;
use crate::common;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_record() -> OutputRecord {
    OutputRecord {
        titles: strings(&["„Tytuł pierwszy”", "\"Tytuł drugi\"", "Tytuł trzeci"]),
        leads: strings(&["Lead jeden", "Lead dwa", "“Lead trzy”"]),
        tags_from_list: strings(&["kultura", "idee"]),
        tags: strings(&["muzyka", "teatr"]),
        quotes: strings(&["Cytat A", "Cytat B"]),
        output_text: "Pierwszy akapit.\nDrugi akapit.".to_string(),
    }
}

#[test]
fn test_strip_quote_marks_shouldRemoveAllQuoteCharacters() {
    assert_eq!(strip_quote_marks("„Ala” \"ma\" “kota”"), "Ala ma kota");
    assert_eq!(strip_quote_marks("bez cudzysłowów"), "bez cudzysłowów");
}

#[test]
fn test_collapse_separators_shouldBeIdempotent() {
    let once = collapse_separators("a, , , b, , c");
    assert_eq!(once, "a, b, c");
    assert_eq!(collapse_separators(&once), once);
}

#[test]
fn test_tags_from_list_line_shouldPrefixLabel() {
    assert_eq!(tags_from_list_line(&strings(&["kultura", "idee"])), "Tagi z listy: kultura, idee");
}

#[test]
fn test_tags_from_list_line_withEmptyEntries_shouldCollapseSeparators() {
    assert_eq!(tags_from_list_line(&strings(&["kultura", "", "idee"])), "Tagi z listy: kultura, idee");
}

#[test]
fn test_free_tags_line_shouldStartWithHash() {
    assert_eq!(free_tags_line(&strings(&["muzyka", "teatr", "film"])), "#muzyka, teatr, film");
    assert_eq!(free_tags_line(&[]), "#");
}

#[test]
fn test_write_document_shouldProduceSectionsInFixedOrder() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("report.docx");

    DocumentWriter::new(&path).write_document(&sample_record()).unwrap();
    let text = DocumentReader::new(&path).read_docx().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            TITLES_HEADING,
            "Tytuł pierwszy",
            "Tytuł drugi",
            "Tytuł trzeci",
            LEADS_HEADING,
            "Lead jeden",
            "Lead dwa",
            "Lead trzy",
            TAGS_HEADING,
            "Tagi z listy: kultura, idee",
            "#muzyka, teatr",
            QUOTES_HEADING,
            "Cytat A",
            "Cytat B",
            TEXT_HEADING,
            "Pierwszy akapit.",
            "Drugi akapit.",
        ]
    );
}

#[test]
fn test_write_document_withShortLists_shouldWriteWhatItHas() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("short.docx");
    let record = OutputRecord {
        titles: strings(&["Jedyny tytuł"]),
        output_text: "Tekst.".to_string(),
        ..Default::default()
    };

    DocumentWriter::new(&path).write_document(&record).unwrap();
    let text = DocumentReader::new(&path).read_docx().unwrap();

    let titles_at = text.find(TITLES_HEADING).unwrap();
    let leads_at = text.find(LEADS_HEADING).unwrap();
    assert_eq!(text[titles_at..leads_at].lines().count(), 2);
    assert!(text.contains("Jedyny tytuł"));
    assert!(text.ends_with("Tekst."));
}

#[test]
fn test_write_document_shouldCreateMissingParentDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("output").join("nested").join("output.docx");

    DocumentWriter::new(&path).write_document(&OutputRecord::default()).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_write_document_shouldOverwriteExistingFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "output.docx", "stale content").unwrap();

    DocumentWriter::new(&path).write_document(&sample_record()).unwrap();

    let text = DocumentReader::new(&path).read_docx().unwrap();
    assert!(text.starts_with(TITLES_HEADING));
}

#[test]
fn test_build_shouldNotTouchFilesystem() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("never.docx");
    let writer = DocumentWriter::new(&path);

    let _docx = DocumentWriter::build(&sample_record());

    assert_eq!(writer.path(), path.as_path());
    assert!(!path.exists());
}

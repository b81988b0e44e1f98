/*!
 * Tests for file and directory utilities
 */

use docproof::errors::DocumentError;
use docproof::file_utils::FileManager;
use crate::common;

#[test]
fn test_first_docx_shouldPickFirstByName() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path();
    common::create_test_docx(dir, "b_artykul.docx", &["b"]).unwrap();
    common::create_test_docx(dir, "a_artykul.docx", &["a"]).unwrap();
    common::create_test_file(dir, "notatki.txt", "x").unwrap();

    let first = FileManager::first_docx(dir).unwrap();

    assert_eq!(first.file_name().unwrap(), "a_artykul.docx");
}

#[test]
fn test_find_docx_files_shouldSkipLockFilesAndOtherExtensions() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path();
    common::create_test_file(dir, "~$artykul.docx", "lock").unwrap();
    common::create_test_file(dir, "artykul.doc", "old format").unwrap();
    common::create_test_docx(dir, "artykul.DOCX", &["a"]).unwrap();

    let files = FileManager::find_docx_files(dir).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "artykul.DOCX");
}

#[test]
fn test_find_docx_files_shouldNotDescendIntoSubdirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("archiwum");
    FileManager::ensure_dir(&nested).unwrap();
    common::create_test_docx(&nested, "stary.docx", &["x"]).unwrap();

    let files = FileManager::find_docx_files(temp_dir.path()).unwrap();

    assert!(files.is_empty());
}

#[test]
fn test_first_docx_withEmptyDirectory_shouldReturnNoInputFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let result = FileManager::first_docx(temp_dir.path());
    assert!(matches!(result, Err(DocumentError::NoInputFile(_))));
}

#[test]
fn test_first_docx_withMissingDirectory_shouldReturnNoInputFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let result = FileManager::first_docx(temp_dir.path().join("article"));
    assert!(matches!(result, Err(DocumentError::NoInputFile(_))));
}

#[test]
fn test_ensure_dir_shouldCreateNestedDirectories() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested).unwrap();
    FileManager::ensure_dir(&nested).unwrap();

    assert!(FileManager::dir_exists(&nested));
    assert!(!FileManager::file_exists(&nested));
}

/*!
 * Reading and writing of `.docx` documents.
 *
 * - `reader`: extracts the article body as plain text
 * - `writer`: renders the proofreading results into a styled report
 */

pub mod reader;
pub mod writer;

pub use reader::DocumentReader;
pub use writer::{DocumentWriter, collapse_separators, free_tags_line, strip_quote_marks, tags_from_list_line};

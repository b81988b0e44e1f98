use log::{debug, warn};
use std::ops::Range;

// @module: Sentence-aware chunking of document text

/// A bounded-length span of the source document processed as one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    // @field: Position in the chunk sequence
    pub index: usize,

    // @field: Byte range into the document text (untrimmed)
    pub span: Range<usize>,

    // @field: Trimmed chunk content
    pub text: String,
}

impl Chunk {
    /// True when the span holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// First few characters, for log lines
    pub fn preview(&self) -> String {
        self.text.chars().take(10).collect()
    }
}

/// Splits a document into chunks on sentence boundaries
pub struct DocumentProcessor<'a> {
    document: &'a str,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(document: &'a str) -> Self {
        Self { document }
    }

    /// Split the document into chunks of at most `max_chars` characters.
    ///
    /// Each chunk ends right after the last `.` inside its window, or exactly at
    /// the window edge when the window has no period. The final chunk always
    /// runs to the end of the text. Spans cover the document with no gaps or
    /// overlaps; only `Chunk::text` is trimmed.
    pub fn chunk_document(&self, max_chars: usize) -> Vec<Chunk> {
        if self.document.is_empty() {
            warn!("Document is empty, nothing to chunk");
            return Vec::new();
        }

        let max_chars = max_chars.max(1);

        // Byte offset of every char, plus the end of the text
        let offsets: Vec<usize> = self
            .document
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.document.len()))
            .collect();
        let char_len = offsets.len() - 1;

        let mut chunks = Vec::new();
        let mut cursor = 0;

        while cursor < char_len {
            let candidate_end = cursor + max_chars;
            let end = if candidate_end >= char_len {
                char_len
            } else {
                let window = &self.document[offsets[cursor]..offsets[candidate_end]];
                match window.rfind('.') {
                    // '.' is one byte wide, so the char after it starts at pos + 1
                    Some(pos) => {
                        let byte_end = offsets[cursor] + pos + 1;
                        offsets.partition_point(|&o| o < byte_end)
                    }
                    None => {
                        debug!("No sentence boundary in window at char {}, cutting at {}", cursor, candidate_end);
                        candidate_end
                    }
                }
            };

            let span = offsets[cursor]..offsets[end];
            chunks.push(Chunk {
                index: chunks.len(),
                text: self.document[span.clone()].trim().to_string(),
                span,
            });
            cursor = end;
        }

        chunks
    }
}

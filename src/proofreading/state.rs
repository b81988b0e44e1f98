/// Result of running one chunk through the per-chunk prompts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkOutcome {
    /// Generated heading, when headings are enabled
    pub heading: Option<String>,
    /// Proofread text of the (possibly heading-prefixed) chunk
    pub corrected: String,
    /// Summary of the (possibly heading-prefixed) chunk
    pub summary: String,
    /// Quotes picked from the chunk, in response order
    pub quotes: Vec<String>,
}

/// Accumulated results of the chunk loop
///
/// Starts empty and only ever grows; `absorb` consumes the state and returns
/// the extended one so the loop threads it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProofreadingState {
    pub output_text: String,
    pub summary: String,
    pub quotes: Vec<String>,
    pub chunks_processed: usize,
}

impl ProofreadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk's outcome
    pub fn absorb(mut self, outcome: ChunkOutcome) -> Self {
        self.output_text.push_str(&outcome.corrected);
        self.summary.push_str(&outcome.summary);
        self.quotes.extend(outcome.quotes);
        self.chunks_processed += 1;
        self
    }

    /// First `max_chars` characters of the running summary
    pub fn summary_excerpt(&self, max_chars: usize) -> String {
        self.summary.chars().take(max_chars).collect()
    }
}

/// Everything the report writer needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRecord {
    pub titles: Vec<String>,
    pub leads: Vec<String>,
    pub tags_from_list: Vec<String>,
    pub tags: Vec<String>,
    pub quotes: Vec<String>,
    pub output_text: String,
}

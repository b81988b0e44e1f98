/*!
 * LLM-driven editorial pipeline.
 *
 * - `prompts`: instruction templates and their length limits
 * - `editor`: one completion call per editorial operation
 * - `state`: per-chunk outcomes, the accumulator and the output record
 * - `proofreader`: the chunk loop and the document-level calls
 */

pub mod editor;
pub mod prompts;
pub mod proofreader;
pub mod state;

pub use editor::Editor;
pub use proofreader::Proofreader;
pub use state::{ChunkOutcome, OutputRecord, ProofreadingState};

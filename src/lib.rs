/*!
 * # docproof - LLM-assisted article proofreading
 *
 * A Rust library that proofreads a `.docx` article with a text-completion
 * model and produces an editorial report.
 *
 * ## Features
 *
 * - Read the article body from a `.docx` file
 * - Split it into bounded chunks on sentence boundaries
 * - Per chunk: proofread, summarize, pick quotes, optionally add a heading
 * - Per document: propose titles, leads, tags from a fixed vocabulary and free-form tags
 * - Write everything to a styled `.docx` report
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_processor`: Sentence-aware chunking
 * - `document`: `.docx` reading and report writing
 * - `proofreading`: Prompt templates, editorial operations and the chunk pipeline
 * - `providers`: Completion provider trait and implementations:
 *   - `providers::openai`: OpenAI completions client
 *   - `providers::mock`: Deterministic provider for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod document_processor;
pub mod errors;
pub mod file_utils;
pub mod proofreading;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document_processor::{Chunk, DocumentProcessor};
pub use proofreading::{OutputRecord, Proofreader};
pub use errors::{AppError, DocumentError, ProofreadingError, ProviderError};

//! RAG (Retrieval-Augmented Generation) for single-video question answering.
//!
//! Retrieval finds the transcript chunks most similar to the question,
//! prompt assembly folds them into a fixed instruction template, and
//! generation hands the result to a language model.

mod generate;
mod prompt;
mod retriever;

pub use generate::{Generator, OpenAIGenerator};
pub use prompt::{assemble_prompt, PROMPT_TEMPLATE};
pub use retriever::Retriever;

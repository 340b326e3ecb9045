//! Prompt assembly for answer generation.

use crate::chunking::TextChunk;

/// Instruction template for answer generation.
///
/// This is a fixed constant, not user-configurable: downstream compatibility
/// checks compare assembled prompts byte-for-byte, so the exact text
/// (including the leading newline and the blank line before the context
/// block) must not change.
pub const PROMPT_TEMPLATE: &str = "\nYou are a helpful assistant.\nAnswer ONLY from the provided transcript context.\nIf the context is insufficient, just say you don't know.\n\n{context}\nQuestion: {question}\n";

/// Build the generation prompt from retrieved chunks and the question.
///
/// Chunk texts are joined in retrieved-rank order with a blank-line
/// separator; the question is embedded verbatim.
pub fn assemble_prompt(chunks: &[TextChunk], question: &str) -> String {
    let context = chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    PROMPT_TEMPLATE
        .replace("{context}", &context)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(content: &str, order: usize) -> TextChunk {
        TextChunk {
            content: content.to_string(),
            start_offset: 0,
            order,
        }
    }

    #[test]
    fn test_template_is_exact() {
        // Byte-for-byte compatibility check for the instruction template.
        assert_eq!(
            PROMPT_TEMPLATE,
            "\nYou are a helpful assistant.\n\
             Answer ONLY from the provided transcript context.\n\
             If the context is insufficient, just say you don't know.\n\
             \n\
             {context}\n\
             Question: {question}\n"
        );
    }

    #[test]
    fn test_assemble_joins_chunks_with_blank_line() {
        let chunks = vec![chunk("first part", 0), chunk("second part", 1)];
        let prompt = assemble_prompt(&chunks, "what happened?");

        assert!(prompt.contains("first part\n\nsecond part"));
        assert!(prompt.ends_with("Question: what happened?\n"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{question}"));
    }

    #[test]
    fn test_assemble_preserves_retrieved_rank_order() {
        // Chunks arrive ranked by similarity, not transcript order; the
        // context block must keep the ranked order.
        let chunks = vec![chunk("ranked first", 7), chunk("ranked second", 2)];
        let prompt = assemble_prompt(&chunks, "q");

        let first = prompt.find("ranked first").unwrap();
        let second = prompt.find("ranked second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_assemble_empty_context() {
        let prompt = assemble_prompt(&[], "anything?");
        assert!(prompt.contains("\n\n\nQuestion: anything?\n"));
    }
}

//! Prompt assembly for article generation.

use schreiber_core::text::truncate_chars;
use schreiber_core::GenerationOptions;

/// Hard cap on the source excerpt embedded in a prompt, in characters.
pub const SOURCE_TEXT_CAP: usize = 30_000;

/// Render the article-generation prompt. Rendering is pure: the same
/// source and options always produce the same prompt.
pub fn build_prompt(source_text: &str, options: &GenerationOptions) -> String {
    let source = truncate_chars(source_text, SOURCE_TEXT_CAP);
    let guidance = options.user_guidance.as_deref().unwrap_or("None");
    format!(
        "\nYou are an assistant that must generate three things from the provided source text \
         (which is a transcript of an interview or a web article).\n\
         1) A short, catchy title (max 10 words).\n\
         2) Two to three subheadings suitable for the article.\n\
         3) A {}-word well-structured article in {} with the requested tone: {}.\n\
         User guidance: {}\n\
         Source:\n\
         \"\"\"{}\"\"\"\n\
         Format your response as JSON with fields: title, subheadings (array), article.\n",
        options.length.word_target(),
        options.language,
        options.tone,
        guidance,
        source,
    )
}

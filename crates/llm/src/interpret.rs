//! Interpretation of generated text as structured article data.

use schreiber_core::ArticleResult;

/// What one generation produced. Text that parses as the requested JSON
/// shape becomes `Structured`; everything else is carried verbatim as
/// `Unstructured` and rendered by the caller as an opaque fallback.
#[derive(Debug)]
pub enum GenerationOutcome {
    Structured(ArticleResult),
    Unstructured(String),
}

/// Single parse attempt: the candidate is the substring from the first `{`
/// to the end of the text, taken as-is. Models that wrap their JSON in
/// code fences or append trailing prose land in `Unstructured`; the raw
/// text is always preserved, so interpretation never fails.
pub fn interpret(generated: &str) -> GenerationOutcome {
    if let Some(start) = generated.find('{') {
        if let Ok(article) = serde_json::from_str::<ArticleResult>(&generated[start..]) {
            return GenerationOutcome::Structured(article);
        }
    }
    GenerationOutcome::Unstructured(generated.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_json_object_is_structured() {
        let generated = r#"{"title":"T","subheadings":["a","b"],"article":"Body."}"#;
        match interpret(generated) {
            GenerationOutcome::Structured(article) => {
                assert_eq!(article.title.as_deref(), Some("T"));
                assert_eq!(article.subheadings, vec!["a", "b"]);
                assert_eq!(article.article.as_deref(), Some("Body."));
            }
            GenerationOutcome::Unstructured(_) => panic!("expected structured outcome"),
        }
    }

    #[test]
    fn leading_prose_before_json_is_dropped() {
        let generated = r#"Here is your article: {"title":"T","article":"Body."}"#;
        assert!(matches!(interpret(generated), GenerationOutcome::Structured(_)));
    }

    #[test]
    fn trailing_prose_after_json_is_unstructured() {
        let generated = r#"{"title":"T"} hope this helps!"#;
        match interpret(generated) {
            GenerationOutcome::Unstructured(raw) => assert_eq!(raw, generated),
            GenerationOutcome::Structured(_) => panic!("trailing prose must not parse"),
        }
    }

    #[test]
    fn code_fence_wrapped_json_is_unstructured() {
        let generated = "```json\n{\"title\":\"T\"}\n```";
        assert!(matches!(interpret(generated), GenerationOutcome::Unstructured(_)));
    }

    #[test]
    fn text_without_a_brace_is_unstructured() {
        match interpret("hello world") {
            GenerationOutcome::Unstructured(raw) => assert_eq!(raw, "hello world"),
            GenerationOutcome::Structured(_) => panic!("no brace, no structure"),
        }
    }

    #[test]
    fn malformed_json_after_brace_is_unstructured() {
        assert!(matches!(
            interpret(r#"{"title": unterminated"#),
            GenerationOutcome::Unstructured(_)
        ));
    }

    #[test]
    fn partial_fields_still_structure() {
        match interpret(r#"{"article":"Only a body."}"#) {
            GenerationOutcome::Structured(article) => {
                assert!(article.title.is_none());
                assert!(article.subheadings.is_empty());
                assert_eq!(article.article.as_deref(), Some("Only a body."));
            }
            GenerationOutcome::Unstructured(_) => panic!("expected structured outcome"),
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let generated = r#"{"title":"T","confidence":0.9}"#;
        assert!(matches!(interpret(generated), GenerationOutcome::Structured(_)));
    }

    #[test]
    fn empty_string_is_unstructured() {
        match interpret("") {
            GenerationOutcome::Unstructured(raw) => assert!(raw.is_empty()),
            GenerationOutcome::Structured(_) => panic!("empty text has no structure"),
        }
    }
}

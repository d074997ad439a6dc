//! HTML for the playground form: one prompt box, one button, three read-only outputs.

use std::fmt::Write;

use crate::pipeline::DisplayOutput;

pub const PAGE_TITLE: &str = "Prompting Playground";
const PROMPT_PLACEHOLDER: &str =
    "e.g., 'Solve the equation: 2x + 5 = 15' or 'Explain how photosynthesis works'";

/// State of the form page: what was submitted and, after a run, what came back.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub prompt: String,
    pub output: Option<DisplayOutput>,
}

/// Render the whole page. All prompt and model text is HTML-escaped.
pub fn render_page(view: &PageView) -> String {
    let (technique, transformed_prompt, response) = match &view.output {
        Some(output) => (
            output.technique.as_str(),
            output.transformed_prompt.as_str(),
            output.response.as_str(),
        ),
        None => ("", "", ""),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");
    html.push_str(
        "<p>Enter your prompt and let the AI choose the best prompting technique!</p>\n",
    );
    html.push_str("<form method=\"post\" action=\"/\" class=\"row\">\n<div class=\"column\">\n");
    html.push_str("<label for=\"prompt\">Enter your prompt</label>\n");
    let _ = writeln!(
        html,
        "<textarea id=\"prompt\" name=\"prompt\" rows=\"3\" placeholder=\"{}\">{}</textarea>",
        html_escape::encode_double_quoted_attribute(PROMPT_PLACEHOLDER),
        html_escape::encode_text(&view.prompt)
    );
    html.push_str("<button type=\"submit\">Generate Response</button>\n</div>\n");
    html.push_str("<div class=\"column\">\n");
    write_output(&mut html, "technique", "Selected Technique", 1, technique);
    write_output(
        &mut html,
        "transformed_prompt",
        "Transformed Prompt",
        3,
        transformed_prompt,
    );
    write_output(&mut html, "response", "AI Response", 8, response);
    html.push_str("</div>\n</form>\n</body>\n</html>\n");

    html
}

fn write_output(html: &mut String, id: &str, label: &str, rows: usize, value: &str) {
    let _ = writeln!(html, "<label for=\"{id}\">{label}</label>");
    let _ = writeln!(
        html,
        "<textarea id=\"{id}\" rows=\"{rows}\" readonly>{}</textarea>",
        html_escape::encode_text(value)
    );
}

const STYLE: &str = "<style>
body { font-family: sans-serif; margin: 2rem; }
.row { display: flex; gap: 2rem; }
.column { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
textarea { width: 100%; font: inherit; }
button { padding: 0.5rem 1rem; }
</style>
";

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_output() -> DisplayOutput {
        DisplayOutput {
            technique: "Using technique: Few-Shot".to_string(),
            transformed_prompt: "Example 1: a → b".to_string(),
            response: "All done.".to_string(),
            known_technique: None,
        }
    }

    #[test]
    fn test_empty_page_has_form_and_outputs() {
        let html = render_page(&PageView::default());

        assert!(html.contains("<title>Prompting Playground</title>"));
        assert!(html.contains("<form method=\"post\" action=\"/\""));
        assert!(html.contains("name=\"prompt\""));
        assert!(html.contains("Generate Response"));
        assert!(html.contains("<textarea id=\"technique\" rows=\"1\" readonly></textarea>"));
        assert!(html.contains("<textarea id=\"transformed_prompt\" rows=\"3\" readonly></textarea>"));
        assert!(html.contains("<textarea id=\"response\" rows=\"8\" readonly></textarea>"));
    }

    #[test]
    fn test_page_with_output() {
        let view = PageView {
            prompt: "Fix my grammar".to_string(),
            output: Some(create_test_output()),
        };
        let html = render_page(&view);

        assert!(html.contains(">Fix my grammar</textarea>"));
        assert!(html.contains(">Using technique: Few-Shot</textarea>"));
        assert!(html.contains(">Example 1: a → b</textarea>"));
        assert!(html.contains(">All done.</textarea>"));
    }

    #[test]
    fn test_page_escapes_user_and_model_text() {
        let mut output = create_test_output();
        output.response = "</textarea><script>alert(1)</script>".to_string();
        let view = PageView {
            prompt: "<b>bold</b> & more".to_string(),
            output: Some(output),
        };
        let html = render_page(&view);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    }
}

//! HTML rendering for the form-based interface

use precis_engine::Summary;

/// Statistics shown under a summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// Summary text (may be empty)
    pub summary: String,
    /// Input length in characters
    pub input_length: usize,
    /// Summary length in characters
    pub summary_length: usize,
    /// Percentage reduction
    pub compression_ratio: f64,
}

impl From<&Summary> for SummaryView {
    fn from(summary: &Summary) -> Self {
        Self {
            summary: summary.text.clone(),
            input_length: summary.input_chars,
            summary_length: summary.summary_chars,
            compression_ratio: summary.compression_ratio(),
        }
    }
}

/// Everything the page template needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    /// Previously submitted text, echoed back into the textarea
    pub text_input: String,
    /// Previously submitted URL
    pub url_input: String,
    /// User-facing error message
    pub error: Option<String>,
    /// Summary and statistics
    pub result: Option<SummaryView>,
}

impl PageView {
    /// Page showing an error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 40px; line-height: 1.6; color: #333; background-color: #f5f5f5; }
.container { max-width: 1000px; margin: 0 auto; background-color: white; padding: 30px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.header { text-align: center; margin-bottom: 30px; }
.options-container { display: flex; flex-wrap: wrap; gap: 20px; }
.option-card { flex: 1; min-width: 300px; background-color: #f9f9f9; padding: 20px; border-radius: 6px; }
.option-card h3 { color: #3498db; border-bottom: 2px solid #3498db; padding-bottom: 10px; margin-top: 0; }
textarea, input[type="text"] { width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 16px; }
textarea { min-height: 150px; resize: vertical; }
.btn { background-color: #3498db; color: white; padding: 12px 20px; border: none; border-radius: 4px; cursor: pointer; font-size: 16px; font-weight: bold; }
.error { color: #e74c3c; font-weight: bold; padding: 10px; background-color: #fadbd8; border-radius: 4px; margin: 10px 0; }
.summary { background-color: #f9f9f9; padding: 25px; border-radius: 6px; margin-top: 30px; border-left: 4px solid #2ecc71; }
.summary p { font-size: 18px; line-height: 1.8; text-align: justify; }
.stats { margin-top: 20px; font-size: 0.9em; color: #7f8c8d; display: flex; flex-wrap: wrap; gap: 15px; }
.stat-item { background-color: #ecf0f1; padding: 10px 15px; border-radius: 4px; flex: 1; min-width: 200px; }
"#;

/// Render the full page
pub fn render_page(view: &PageView) -> String {
    let error = view
        .error
        .as_deref()
        .map(|e| {
            format!(
                r#"<p class="error"><strong>Error:</strong> {}</p>"#,
                escape_html(e)
            )
        })
        .unwrap_or_default();

    let result = view.result.as_ref().map(render_summary).unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Text Summarizer</title>
<style>{style}</style>
</head>
<body>
<div class="container">
  <div class="header">
    <h1>Text Summarizer</h1>
    <p>Extract key information from text, web pages, or PDF files</p>
  </div>
  <div class="options-container">
    <div class="option-card">
      <h3>Option 1: Enter text directly</h3>
      <form method="POST" action="/summarize-text">
        <textarea name="text" placeholder="Enter your text here...">{text}</textarea><br><br>
        <input type="submit" value="Summarize Text" class="btn">
      </form>
    </div>
    <div class="option-card">
      <h3>Option 2: Enter a URL</h3>
      <form method="POST" action="/summarize-url">
        <input type="text" name="url" placeholder="https://example.com" value="{url}"><br><br>
        <input type="submit" value="Scrape and Summarize" class="btn">
      </form>
    </div>
    <div class="option-card">
      <h3>Option 3: Upload a PDF</h3>
      <form method="POST" action="/summarize-pdf" enctype="multipart/form-data">
        <input type="file" name="pdf_file" accept=".pdf"><br><br>
        <input type="submit" value="Upload and Summarize" class="btn">
      </form>
    </div>
  </div>
  {error}
  {result}
</div>
</body>
</html>
"#,
        style = STYLE,
        text = escape_html(&view.text_input),
        url = escape_html(&view.url_input),
        error = error,
        result = result,
    )
}

fn render_summary(result: &SummaryView) -> String {
    let body = if result.summary.is_empty() {
        r#"<p><em>No sentences were selected: the text is too short for the current ratio.</em></p>"#
            .to_string()
    } else {
        format!("<p>{}</p>", escape_html(&result.summary))
    };

    format!(
        r#"<div id="summary-section" class="summary">
    <h3>Summary</h3>
    {body}
    <div class="stats">
      <div class="stat-item"><strong>Input Length:</strong> {input} characters</div>
      <div class="stat-item"><strong>Summary Length:</strong> {summary} characters</div>
      <div class="stat-item"><strong>Compression Ratio:</strong> {ratio}%</div>
    </div>
  </div>"#,
        body = body,
        input = result.input_length,
        summary = result.summary_length,
        ratio = result.compression_ratio,
    )
}

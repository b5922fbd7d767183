//! HTTP request handlers for the summarization service.
//!
//! Serves the HTML form interface (text, URL, PDF upload), a JSON API and a
//! health check using axum.

use crate::config::ServerConfig;
use crate::render::{render_page, PageView, SummaryView};
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router as AxumRouter,
};
use precis_acquire::{extract_text_from_pdf_bytes, ExtractError, FetchError, WebFetcher};
use precis_engine::{
    SelectedSentence, SummarizeError, SummarizeOptions, Summarizer, Summary, SummaryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Summarizer over the process-wide linguistic resources
    pub summarizer: Arc<Summarizer>,
    /// HTTP client for URL acquisition
    pub fetcher: WebFetcher,
    /// Server settings
    pub config: Arc<ServerConfig>,
}

/// Text form submission
#[derive(Debug, Deserialize)]
pub struct TextForm {
    /// Text to summarize
    #[serde(default)]
    pub text: String,
}

/// URL form submission
#[derive(Debug, Deserialize)]
pub struct UrlForm {
    /// Page to scrape
    #[serde(default)]
    pub url: String,
}

/// JSON summarization request
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize
    pub text: String,
    /// Fraction of sentences to keep; server default when absent
    #[serde(default)]
    pub ratio: Option<f64>,
    /// Output order; server default when absent
    #[serde(default)]
    pub order: Option<SummaryOrder>,
}

/// JSON summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Summary text (empty when no sentence was selected)
    pub summary: String,
    /// Input length in characters
    pub input_length: usize,
    /// Summary length in characters
    pub summary_length: usize,
    /// Percentage reduction
    pub compression_ratio: f64,
    /// Sentences detected in the input
    pub total_sentences: usize,
    /// Selected sentences in output order
    pub selected_sentences: Vec<SelectedSentence>,
}

impl From<Summary> for SummarizeResponse {
    fn from(summary: Summary) -> Self {
        Self {
            compression_ratio: summary.compression_ratio(),
            summary: summary.text,
            input_length: summary.input_chars,
            summary_length: summary.summary_chars,
            total_sentences: summary.total_sentences,
            selected_sentences: summary.selected,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Stopword language
    pub language: String,
    /// Size of the stopword vocabulary
    pub stopwords: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Machine-readable error category
    pub kind: String,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Engine rejected the request
    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    /// Web page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// PDF could not be read
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Input exceeds the configured maximum
    #[error("Input too long: {chars} characters (max: {max})")]
    InputTooLarge {
        /// Submitted length
        chars: usize,
        /// Configured maximum
        max: usize,
    },

    /// Summarization exceeded its wall-clock budget
    #[error("Summarization timed out after {0} seconds")]
    Timeout(u64),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Summarize(SummarizeError::ResourceLoad(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Summarize(_) | AppError::InputTooLarge { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Fetch(_) | AppError::Extract(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Summarize(SummarizeError::EmptyInput) => "empty_input",
            AppError::Summarize(SummarizeError::InvalidRatio(_)) => "invalid_ratio",
            AppError::Summarize(SummarizeError::ResourceLoad(_)) => "resource_load",
            AppError::Fetch(_) => "fetch",
            AppError::Extract(_) => "extract",
            AppError::InputTooLarge { .. } => "input_too_large",
            AppError::Timeout(_) => "timeout",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
            kind: self.kind().to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Run the engine on the blocking pool under the configured time budget
async fn run_summarizer(
    state: &AppState,
    text: String,
    options: SummarizeOptions,
) -> Result<Summary, AppError> {
    let chars = text.chars().count();
    let max = state.config.max_input_chars;
    if chars > max {
        return Err(AppError::InputTooLarge { chars, max });
    }

    let summarizer = Arc::clone(&state.summarizer);
    let task = tokio::task::spawn_blocking(move || summarizer.summarize_with(&text, options));

    let summary = tokio::time::timeout(state.config.summarize_timeout(), task)
        .await
        .map_err(|_| AppError::Timeout(state.config.summarize_timeout_secs))?
        .map_err(|e| AppError::Internal(e.to_string()))??;

    info!(
        input_chars = summary.input_chars,
        summary_chars = summary.summary_chars,
        sentences = summary.total_sentences,
        selected = summary.selected.len(),
        "Summarized"
    );
    Ok(summary)
}

fn page(status: StatusCode, view: PageView) -> (StatusCode, Html<String>) {
    (status, Html(render_page(&view)))
}

/// GET / - Empty form page
async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /summarize-text - Summarize submitted text
async fn summarize_text(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> (StatusCode, Html<String>) {
    if form.text.trim().is_empty() {
        return page(
            StatusCode::BAD_REQUEST,
            PageView::error("Please enter some text to summarize"),
        );
    }

    let options = state.summarizer.defaults();
    let view = PageView {
        text_input: form.text.clone(),
        ..PageView::default()
    };

    match run_summarizer(&state, form.text, options).await {
        Ok(summary) => page(
            StatusCode::OK,
            PageView {
                result: Some(SummaryView::from(&summary)),
                ..view
            },
        ),
        Err(e) => page(
            e.status(),
            PageView {
                error: Some(format!("Error summarizing text: {}", e)),
                ..view
            },
        ),
    }
}

/// POST /summarize-url - Scrape a page and summarize it
async fn summarize_url(
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> (StatusCode, Html<String>) {
    let url = form.url.trim().to_string();
    if url.is_empty() {
        return page(
            StatusCode::BAD_REQUEST,
            PageView::error("Please enter a URL to scrape"),
        );
    }

    let view = PageView {
        url_input: url.clone(),
        ..PageView::default()
    };

    let text = match state.fetcher.fetch_text(&url).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%url, error = %e, "URL acquisition failed");
            let e = AppError::from(e);
            return page(
                e.status(),
                PageView {
                    error: Some(format!(
                        "Failed to scrape text from the URL ({}). Please check the URL and try again.",
                        e
                    )),
                    ..view
                },
            );
        }
    };

    match run_summarizer(&state, text, state.summarizer.defaults()).await {
        Ok(summary) => page(
            StatusCode::OK,
            PageView {
                result: Some(SummaryView::from(&summary)),
                ..view
            },
        ),
        Err(e) => page(
            e.status(),
            PageView {
                error: Some(format!("Error processing URL: {}", e)),
                ..view
            },
        ),
    }
}

/// Uploaded file name and contents
struct Upload {
    filename: String,
    data: Vec<u8>,
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("pdf_file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok(Some(Upload {
            filename,
            data: data.to_vec(),
        }));
    }
    Ok(None)
}

/// POST /summarize-pdf - Extract an uploaded PDF and summarize it
async fn summarize_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return page(StatusCode::BAD_REQUEST, PageView::error("No file uploaded")),
        Err(e) => return page(e.status(), PageView::error(e.to_string())),
    };

    if upload.filename.is_empty() {
        return page(StatusCode::BAD_REQUEST, PageView::error("No file selected"));
    }
    if !upload.filename.to_lowercase().ends_with(".pdf") {
        return page(
            StatusCode::BAD_REQUEST,
            PageView::error("The uploaded file must be a PDF"),
        );
    }

    let extracted =
        tokio::task::spawn_blocking(move || extract_text_from_pdf_bytes(&upload.data)).await;
    let text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(error = %e, "PDF extraction failed");
            return page(
                StatusCode::UNPROCESSABLE_ENTITY,
                PageView::error(
                    "Failed to extract text from the PDF. The file might be corrupted or password-protected.",
                ),
            );
        }
        Err(e) => {
            return page(
                StatusCode::INTERNAL_SERVER_ERROR,
                PageView::error(format!("Error processing PDF: {}", e)),
            )
        }
    };

    match run_summarizer(&state, text, state.summarizer.defaults()).await {
        Ok(summary) => page(
            StatusCode::OK,
            PageView {
                result: Some(SummaryView::from(&summary)),
                ..PageView::default()
            },
        ),
        Err(e) => page(
            e.status(),
            PageView::error(format!("Error processing PDF: {}", e)),
        ),
    }
}

/// POST /api/summarize - JSON summarization
async fn api_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let defaults = state.summarizer.defaults();
    let options = SummarizeOptions {
        ratio: request.ratio.unwrap_or(defaults.ratio),
        order: request.order.unwrap_or(defaults.order),
    };

    let summary = run_summarizer(&state, request.text, options).await?;
    Ok(Json(SummarizeResponse::from(summary)))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let resources = state.summarizer.resources();
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        language: resources.language().to_string(),
        stopwords: resources.stopwords().len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.config.max_upload_bytes;
    AxumRouter::new()
        .route("/", get(index))
        .route("/summarize-text", post(summarize_text))
        .route("/summarize-url", post(summarize_url))
        .route("/summarize-pdf", post(summarize_pdf))
        .route("/api/summarize", post(api_summarize))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

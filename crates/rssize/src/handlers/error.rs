use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::pipeline::PipelineError;

/// Handler error type.
///
/// Clients only ever see a fixed body per status; the details go to the log.
#[derive(Debug)]
pub enum ApiError {
    /// The calendar id failed validation.
    NotFound,
    /// A pipeline stage failed.
    Pipeline(PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            ApiError::Pipeline(err) => {
                let stage = err.stage();
                let calendar_id = err.calendar_id().to_string();
                // `{:#}` renders the whole source chain on one line
                let chain = format!("{:#}", anyhow::Error::new(err));
                tracing::error!(
                    calendar_id = %calendar_id,
                    stage,
                    error = %chain,
                    "Feed generation failed"
                );

                (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response()
            }
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self::Pipeline(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rssize_core::fetch::FetchError;

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not Found");
    }

    #[tokio::test]
    async fn test_pipeline_error_hides_details() {
        let err = PipelineError::Fetch {
            calendar_id: "42".to_string(),
            url: "https://adventar.org/calendars/42".to_string(),
            source: FetchError::Request("secret-host.internal refused".to_string()),
        };

        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Error");
    }
}

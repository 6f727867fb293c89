//! Shared HTTP response check for the upstream client.

use crate::upstream::error::UpstreamError;

/// Returns the response unchanged on success; maps any non-success status to
/// [`UpstreamError::Api`] with the status code and whatever body text could
/// be read.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, UpstreamError> {
    if !resp.status().is_success() {
        return Err(UpstreamError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[actix_web::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[actix_web::test]
    async fn failure_carries_status_and_body() {
        let resp = mock_response(500, "boom");
        let err = check_response(resp).await.unwrap_err();
        match err {
            UpstreamError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::model::ScanStatus;

const CACHE_ERROR_HEADER: &str = "x-cache";
const CACHE_ERROR_VALUE: &str = "Error from cloudfront";

/// Status code that indicates the dispatcher blocked the path.
///
/// Normally a blocked path answers 404. When an upstream cache reports an
/// error page of its own, the origin's 404 is hidden and a blocked path
/// answers 200 instead.
pub fn blocked_status(headers: &HeaderMap) -> StatusCode {
    let cache_error = headers
        .get(CACHE_ERROR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == CACHE_ERROR_VALUE)
        .unwrap_or(false);

    if cache_error {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Maps a probe outcome to its scan status. Pure and total.
pub fn classify(status_code: Option<StatusCode>, headers: &HeaderMap) -> ScanStatus {
    match status_code {
        None => ScanStatus::Failed,
        Some(code) if code == blocked_status(headers) => ScanStatus::Safe,
        Some(_) => ScanStatus::Vulnerable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn cache_error_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_ERROR_HEADER, HeaderValue::from_static(CACHE_ERROR_VALUE));
        headers
    }

    #[test]
    fn no_response_is_failed() {
        assert_eq!(classify(None, &HeaderMap::new()), ScanStatus::Failed);
        assert_eq!(classify(None, &cache_error_headers()), ScanStatus::Failed);
    }

    #[test]
    fn not_found_is_safe() {
        assert_eq!(
            classify(Some(StatusCode::NOT_FOUND), &HeaderMap::new()),
            ScanStatus::Safe
        );
    }

    #[test]
    fn any_other_status_is_vulnerable() {
        for code in [
            StatusCode::OK,
            StatusCode::MOVED_PERMANENTLY,
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert_eq!(
                classify(Some(code), &HeaderMap::new()),
                ScanStatus::Vulnerable
            );
        }
    }

    #[test]
    fn cache_error_flips_the_blocked_status_to_ok() {
        let headers = cache_error_headers();

        assert_eq!(classify(Some(StatusCode::OK), &headers), ScanStatus::Safe);
        assert_eq!(
            classify(Some(StatusCode::NOT_FOUND), &headers),
            ScanStatus::Vulnerable
        );
        assert_eq!(
            classify(Some(StatusCode::INTERNAL_SERVER_ERROR), &headers),
            ScanStatus::Vulnerable
        );
    }

    #[test]
    fn unrelated_cache_header_values_keep_the_default_boundary() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_ERROR_HEADER, HeaderValue::from_static("Hit from cloudfront"));

        assert_eq!(
            classify(Some(StatusCode::NOT_FOUND), &headers),
            ScanStatus::Safe
        );
        assert_eq!(classify(Some(StatusCode::OK), &headers), ScanStatus::Vulnerable);
    }
}

use url::Url;

use crate::error::JobError;

/// Where a completed job's result file lives.
///
/// Path-style `s3.amazonaws.com` URIs are fetched through the S3 API (the
/// bucket is usually private, so a plain GET would 403); anything else is
/// treated as a presigned or public HTTPS URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLocation {
    S3 { bucket: String, key: String },
    Https(Url),
}

pub fn classify_uri(raw: &str) -> Result<ResultLocation, JobError> {
    let url = Url::parse(raw).map_err(|e| JobError::BadResultUri(format!("{raw}: {e}")))?;

    if url.host_str() != Some("s3.amazonaws.com") {
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(JobError::BadResultUri(format!(
                "{raw}: unsupported scheme {}",
                url.scheme()
            )));
        }
        return Ok(ResultLocation::Https(url));
    }

    let mut parts = url.path().trim_start_matches('/').splitn(2, '/');
    let bucket = parts.next().filter(|b| !b.is_empty());
    let key = parts.next().filter(|k| !k.is_empty());

    match (bucket, key) {
        (Some(bucket), Some(key)) => Ok(ResultLocation::S3 {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }),
        _ => Err(JobError::BadResultUri(format!(
            "{raw}: s3 uri without bucket/key"
        ))),
    }
}

pub type Result<T> = std::result::Result<T, JobError>;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// The transcription service or result storage could not be reached, or
    /// answered with a transport-level failure. Retryable at the caller's
    /// discretion.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The job itself failed upstream. Not retryable.
    #[error("transcription job {name:?} failed: {reason}")]
    JobFailed { name: String, reason: String },

    /// The job exists but has not completed yet.
    #[error("transcription job {name:?} is still {status}")]
    NotReady { name: String, status: String },

    /// The job response was missing a field a completed job must have.
    #[error("job response is missing {0}")]
    MissingField(&'static str),

    /// The result URI could not be parsed or points somewhere unfetchable.
    #[error("bad result uri: {0}")]
    BadResultUri(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The fetched payload did not deserialize as a transcript file.
    #[error("bad result payload: {0}")]
    BadPayload(#[from] serde_json::Error),
}

//! Batch-job collaborator: looks up a transcription job, optionally waits
//! for it to finish, and downloads the result payload into a parsed
//! [`TranscriptFile`].
//!
//! This crate owns the whole I/O failure taxonomy ([`JobError`]); the
//! reconstruction core never sees it and only ever receives a
//! fully-materialized payload.

mod error;
mod fetch;

use std::time::Duration;

use aws_sdk_transcribe::types::TranscriptionJobStatus;
use scribe_transcribe_interface::TranscriptFile;

pub use error::{JobError, Result};
pub use fetch::{classify_uri, ResultLocation};

/// What the service currently says about a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Completed { transcript_uri: String },
    Failed { reason: String },
    Pending { status: String },
}

pub struct JobClient {
    transcribe: aws_sdk_transcribe::Client,
    s3: aws_sdk_s3::Client,
    http: reqwest::Client,
}

impl JobClient {
    /// Build a client from the ambient AWS configuration (environment,
    /// profile, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            transcribe: aws_sdk_transcribe::Client::new(&config),
            s3: aws_sdk_s3::Client::new(&config),
            http: reqwest::Client::new(),
        }
    }

    /// Ask the service for the current state of `name`.
    pub async fn job_state(&self, name: &str) -> Result<JobState> {
        let output = self
            .transcribe
            .get_transcription_job()
            .transcription_job_name(name)
            .send()
            .await
            .map_err(|e| JobError::UpstreamUnavailable(e.to_string()))?;

        let job = output
            .transcription_job()
            .ok_or(JobError::MissingField("transcription_job"))?;
        let status = job
            .transcription_job_status()
            .ok_or(JobError::MissingField("transcription_job_status"))?;

        match status {
            TranscriptionJobStatus::Completed => {
                let transcript_uri = job
                    .transcript()
                    .and_then(|t| t.transcript_file_uri())
                    .ok_or(JobError::MissingField("transcript_file_uri"))?
                    .to_string();
                Ok(JobState::Completed { transcript_uri })
            }
            TranscriptionJobStatus::Failed => Ok(JobState::Failed {
                reason: job
                    .failure_reason()
                    .unwrap_or("no failure reason given")
                    .to_string(),
            }),
            other => Ok(JobState::Pending {
                status: other.as_str().to_string(),
            }),
        }
    }

    /// Fetch the result of a job that must already be complete.
    pub async fn fetch_completed(&self, name: &str) -> Result<TranscriptFile> {
        match self.job_state(name).await? {
            JobState::Completed { transcript_uri } => self.fetch_result(&transcript_uri).await,
            JobState::Failed { reason } => Err(JobError::JobFailed {
                name: name.to_string(),
                reason,
            }),
            JobState::Pending { status } => Err(JobError::NotReady {
                name: name.to_string(),
                status,
            }),
        }
    }

    /// Poll until the job completes or fails, then fetch the result.
    pub async fn wait_for_completion(
        &self,
        name: &str,
        poll_interval: Duration,
    ) -> Result<TranscriptFile> {
        loop {
            match self.job_state(name).await? {
                JobState::Completed { transcript_uri } => {
                    return self.fetch_result(&transcript_uri).await;
                }
                JobState::Failed { reason } => {
                    return Err(JobError::JobFailed {
                        name: name.to_string(),
                        reason,
                    });
                }
                JobState::Pending { status } => {
                    tracing::info!(job = name, %status, "job not finished, polling again");
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }
    }

    /// Download and parse a result payload from its URI.
    pub async fn fetch_result(&self, uri: &str) -> Result<TranscriptFile> {
        match classify_uri(uri)? {
            ResultLocation::S3 { bucket, key } => {
                tracing::debug!(%bucket, %key, "fetching result from s3");
                let object = self
                    .s3
                    .get_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
                    .map_err(|e| JobError::UpstreamUnavailable(e.to_string()))?;
                let bytes = object
                    .body
                    .collect()
                    .await
                    .map_err(|e| JobError::UpstreamUnavailable(e.to_string()))?
                    .into_bytes();
                Ok(serde_json::from_slice(&bytes)?)
            }
            ResultLocation::Https(url) => {
                tracing::debug!(%url, "fetching result over https");
                let file = self
                    .http
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<TranscriptFile>()
                    .await?;
                Ok(file)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_https_result_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/result.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jobName": "weekly-sync",
                "results": {
                    "transcripts": [{ "transcript": "hello" }],
                    "audio_segments": [
                        { "speaker_label": "spk_0", "transcript": "hello" }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let client = JobClient::from_env().await;
        let file = client
            .fetch_result(&format!("{}/result.json", server.uri()))
            .await
            .unwrap();

        assert_eq!(file.job_name.as_deref(), Some("weekly-sync"));
        assert_eq!(file.results.audio_segments.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn http_error_status_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gone.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = JobClient::from_env().await;
        let err = client
            .fetch_result(&format!("{}/gone.json", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, JobError::Http(_)));
    }

    #[tokio::test]
    async fn non_transcript_payload_is_bad_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weird.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "not": "it" })),
            )
            .mount(&server)
            .await;

        let client = JobClient::from_env().await;
        let err = client
            .fetch_result(&format!("{}/weird.json", server.uri()))
            .await
            .unwrap_err();

        // reqwest's .json() wraps the serde error
        assert!(matches!(err, JobError::Http(_)));
    }
}

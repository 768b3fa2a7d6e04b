//! SeaTunnel REST API client.
//!
//! Every remote capability is one async method. Each call reads the current
//! connection settings once, sends a single request and decodes the JSON
//! answer. Nothing is retried or cached.

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use super::error::{ApiError, ApiResult};
use super::types::{ApiKeyUpdate, ConnectionSettings, JobId, SubmitJobOptions, UploadSource};

/// Multipart field carrying the uploaded job configuration.
const UPLOAD_FIELD: &str = "config_file";

/// Connection state. Replaced as a whole on every update so readers never
/// see a URL from one generation next to headers from another.
struct Connection {
    base_url: String,
    api_key: Option<String>,
    headers: HeaderMap,
}

impl Connection {
    fn new(base_url: String, api_key: Option<String>) -> ApiResult<Self> {
        let api_key = api_key.filter(|key| !key.is_empty());
        let headers = default_headers(api_key.as_deref())?;
        Ok(Self { base_url, api_key, headers })
    }

    fn settings(&self) -> ConnectionSettings {
        ConnectionSettings { url: self.base_url.clone(), has_api_key: self.api_key.is_some() }
    }

    /// Base URL with `segments` appended, each percent-encoded as exactly
    /// one path segment.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::InvalidLocalInput(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::InvalidLocalInput(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Check a caller-supplied value used as a path segment.
///
/// `.` and `..` would be dropped by URL normalisation and an empty value
/// would collapse the path, so all three are refused.
fn path_segment(value: &str) -> ApiResult<&str> {
    match value {
        "" | "." | ".." => {
            Err(ApiError::InvalidLocalInput(format!("{:?} is not a valid path segment", value)))
        }
        value => Ok(value),
    }
}

/// Build the per-client header set: JSON content type, plus a bearer token
/// when a key is present.
fn default_headers(api_key: Option<&str>) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|e| ApiError::InvalidLocalInput(format!("API key is not a valid header: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Request payload variants.
enum RequestBody {
    Json(Value),
    Text(String),
    Multipart(Form),
}

/// SeaTunnel REST API client.
pub struct SeaTunnelClient {
    http: reqwest::Client,
    connection: RwLock<Connection>,
}

impl SeaTunnelClient {
    /// Create a new client for the given base URL and optional API key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> ApiResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            connection: RwLock::new(Connection::new(base_url.into(), api_key)?),
        })
    }

    /// Get current connection settings.
    pub fn get_connection_settings(&self) -> ConnectionSettings {
        self.connection.read().settings()
    }

    /// Update the base URL and/or API key.
    ///
    /// A missing or empty URL keeps the current one. The key is kept,
    /// replaced or cleared according to `api_key`; clearing removes the
    /// `Authorization` header entirely.
    pub fn update_connection_settings(
        &self,
        url: Option<String>,
        api_key: ApiKeyUpdate,
    ) -> ApiResult<ConnectionSettings> {
        let mut connection = self.connection.write();

        let base_url = match url {
            Some(url) if !url.is_empty() => url,
            _ => connection.base_url.clone(),
        };
        let api_key = match api_key {
            ApiKeyUpdate::Keep => connection.api_key.clone(),
            ApiKeyUpdate::Set(key) => Some(key),
            ApiKeyUpdate::Clear => None,
        };

        *connection = Connection::new(base_url, api_key)?;
        let settings = connection.settings();
        tracing::info!(url = %settings.url, has_api_key = settings.has_api_key, "Connection settings updated");

        Ok(settings)
    }

    /// Snapshot of the default headers attached to every request.
    pub fn default_headers(&self) -> HeaderMap {
        self.connection.read().headers.clone()
    }

    /// Send one request and decode the JSON answer.
    async fn request(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<RequestBody>,
    ) -> ApiResult<Value> {
        let (url, mut headers) = {
            let connection = self.connection.read();
            (connection.endpoint(segments)?, connection.headers.clone())
        };

        // Request-specific content types win over the default one. Multipart
        // bodies get no client-side content type at all; the transport adds
        // the boundary.
        match &body {
            Some(RequestBody::Text(_)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
            }
            Some(RequestBody::Multipart(_)) => {
                headers.remove(CONTENT_TYPE);
            }
            Some(RequestBody::Json(_)) | None => {}
        }

        tracing::debug!(%method, %url, "SeaTunnel API request");

        let mut builder = self.http.request(method.clone(), url.clone()).headers(headers);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Request error");
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Failed to read response body");
            ApiError::from(e)
        })?;

        if !status.is_success() {
            tracing::error!(%method, %url, status = status.as_u16(), "HTTP error");
            return Err(ApiError::RemoteRejected { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Response is not valid JSON");
            ApiError::from(e)
        })
    }

    /// Submit a job whose configuration is given inline.
    ///
    /// `POST /submit-job`, content sent as `text/plain`.
    pub async fn submit_job(
        &self,
        content: impl Into<String>,
        options: &SubmitJobOptions,
    ) -> ApiResult<Value> {
        self.request(
            Method::POST,
            &["submit-job"],
            &options.query_pairs(),
            Some(RequestBody::Text(content.into())),
        )
        .await
    }

    /// Submit several jobs at once.
    ///
    /// `request_body` is forwarded to `POST /submit-jobs` exactly as given.
    /// It is not inspected or validated here.
    pub async fn submit_jobs(&self, request_body: Value) -> ApiResult<Value> {
        self.request(Method::POST, &["submit-jobs"], &[], Some(RequestBody::Json(request_body)))
            .await
    }

    /// Submit a job by uploading its configuration file.
    ///
    /// `POST /submit-job/upload` with a multipart `config_file` field. When
    /// `options.format` is unset it is inferred from the file extension.
    /// A [`UploadSource::Path`] is opened and closed here; a
    /// [`UploadSource::Reader`] stays with the caller.
    pub async fn submit_job_upload(
        &self,
        source: UploadSource<'_>,
        options: &SubmitJobOptions,
    ) -> ApiResult<Value> {
        let mut options = options.clone();
        if options.format.is_none() {
            options.format = source.inferred_format();
        }

        let file_name = source.file_name();
        let contents = read_upload(source).await?;
        let form = Form::new().part(UPLOAD_FIELD, Part::bytes(contents).file_name(file_name));

        self.request(
            Method::POST,
            &["submit-job", "upload"],
            &options.query_pairs(),
            Some(RequestBody::Multipart(form)),
        )
        .await
    }

    /// Stop a running job.
    pub async fn stop_job(&self, job_id: &JobId, stop_with_save_point: bool) -> ApiResult<Value> {
        let body = serde_json::json!({
            "jobId": job_id.to_body_value(),
            "isStopWithSavePoint": stop_with_save_point,
        });
        self.request(Method::POST, &["stop-job"], &[], Some(RequestBody::Json(body))).await
    }

    /// Get information about a job.
    pub async fn get_job_info(&self, job_id: &JobId) -> ApiResult<Value> {
        let id = job_id.as_path_segment();
        self.request(Method::GET, &["job-info", path_segment(&id)?], &[], None).await
    }

    /// Get information about a running job.
    pub async fn get_running_job(&self, job_id: &JobId) -> ApiResult<Value> {
        let id = job_id.as_path_segment();
        self.request(Method::GET, &["running-job", path_segment(&id)?], &[], None).await
    }

    /// List all running jobs.
    pub async fn get_running_jobs(&self) -> ApiResult<Value> {
        self.request(Method::GET, &["running-jobs"], &[], None).await
    }

    /// List finished jobs in the given state (FINISHED, CANCELED, FAILED, UNKNOWABLE).
    ///
    /// The state is not checked against the known values; it is only kept to
    /// a single path segment.
    pub async fn get_finished_jobs(&self, state: &str) -> ApiResult<Value> {
        self.request(Method::GET, &["finished-jobs", path_segment(state)?], &[], None).await
    }

    /// Get the cluster overview, optionally filtered by tags.
    pub async fn get_overview(&self, tags: Option<&BTreeMap<String, String>>) -> ApiResult<Value> {
        let query: Vec<(&str, String)> = tags
            .map(|tags| tags.iter().map(|(k, v)| (k.as_str(), v.clone())).collect())
            .unwrap_or_default();
        self.request(Method::GET, &["overview"], &query, None).await
    }

    /// Get system monitoring information.
    pub async fn get_system_monitoring_information(&self) -> ApiResult<Value> {
        self.request(Method::GET, &["system-monitoring-information"], &[], None).await
    }
}

impl fmt::Debug for SeaTunnelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeaTunnelClient")
            .field("settings", &self.get_connection_settings())
            .finish_non_exhaustive()
    }
}

/// Read the whole upload into memory.
///
/// A path is opened here and the handle is dropped on every exit from this
/// function, before the request is sent. A caller's reader is only read,
/// asynchronously, and stays open.
async fn read_upload(source: UploadSource<'_>) -> ApiResult<Vec<u8>> {
    let mut contents = Vec::new();

    match source {
        UploadSource::Path(path) => {
            let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
                ApiError::InvalidLocalInput(format!("cannot open {}: {}", path.display(), e))
            })?;
            file.read_to_end(&mut contents).await.map_err(|e| {
                ApiError::InvalidLocalInput(format!("cannot read {}: {}", path.display(), e))
            })?;
        }
        UploadSource::Reader { file_name, reader } => {
            reader.read_to_end(&mut contents).await.map_err(|e| {
                ApiError::InvalidLocalInput(format!("cannot read {}: {}", file_name, e))
            })?;
        }
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SeaTunnelClient {
        SeaTunnelClient::new("http://localhost:8090", Some("test_key".to_string())).unwrap()
    }

    #[test]
    fn test_init_headers() {
        let client = client();
        let headers = client.default_headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test_key");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_init_without_key() {
        let client = SeaTunnelClient::new("http://localhost:8090", None).unwrap();
        assert!(client.default_headers().get(AUTHORIZATION).is_none());
        assert!(!client.get_connection_settings().has_api_key);
    }

    #[test]
    fn test_get_connection_settings() {
        let settings = client().get_connection_settings();
        assert_eq!(
            settings,
            ConnectionSettings { url: "http://localhost:8090".to_string(), has_api_key: true }
        );
    }

    #[test]
    fn test_settings_never_expose_key() {
        let client = client();
        let json = serde_json::to_string(&client.get_connection_settings()).unwrap();
        assert!(!json.contains("test_key"));
        assert!(!format!("{:?}", client).contains("test_key"));
    }

    #[test]
    fn test_update_connection_settings() {
        let client = client();
        let settings = client
            .update_connection_settings(
                Some("http://new-host:8090".to_string()),
                ApiKeyUpdate::Set("new_key".to_string()),
            )
            .unwrap();

        assert_eq!(settings.url, "http://new-host:8090");
        assert!(settings.has_api_key);
        assert_eq!(client.default_headers().get(AUTHORIZATION).unwrap(), "Bearer new_key");
    }

    #[test]
    fn test_update_with_nothing_keeps_settings() {
        let client = client();
        let settings = client.update_connection_settings(None, ApiKeyUpdate::Keep).unwrap();

        assert_eq!(settings.url, "http://localhost:8090");
        assert!(settings.has_api_key);
        assert_eq!(client.default_headers().get(AUTHORIZATION).unwrap(), "Bearer test_key");
    }

    #[test]
    fn test_update_empty_url_keeps_url() {
        let client = client();
        let settings =
            client.update_connection_settings(Some(String::new()), ApiKeyUpdate::Keep).unwrap();
        assert_eq!(settings.url, "http://localhost:8090");
    }

    #[test]
    fn test_clear_key_removes_header() {
        let client = client();
        let settings = client.update_connection_settings(None, ApiKeyUpdate::Clear).unwrap();

        assert!(!settings.has_api_key);
        let headers = client.default_headers();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_key_leaves_settings_untouched() {
        let client = client();
        let result =
            client.update_connection_settings(None, ApiKeyUpdate::Set("bad\nkey".to_string()));

        assert!(matches!(result, Err(ApiError::InvalidLocalInput(_))));
        assert_eq!(client.default_headers().get(AUTHORIZATION).unwrap(), "Bearer test_key");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let connection = Connection::new("http://localhost:8090/".to_string(), None).unwrap();
        let url = connection.endpoint(&["overview"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8090/overview");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let connection = Connection::new("http://gateway/seatunnel/".to_string(), None).unwrap();
        let url = connection.endpoint(&["submit-job", "upload"]).unwrap();
        assert_eq!(url.as_str(), "http://gateway/seatunnel/submit-job/upload");
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let connection = Connection::new("http://localhost:8090".to_string(), None).unwrap();

        let url = connection.endpoint(&["job-info", "a/b"]).unwrap();
        assert_eq!(url.path(), "/job-info/a%2Fb");

        let url = connection.endpoint(&["finished-jobs", "FAILED?x=1#frag"]).unwrap();
        assert_eq!(url.path(), "/finished-jobs/FAILED%3Fx=1%23frag");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_dot_segments_rejected() {
        for value in ["", ".", ".."] {
            assert!(matches!(path_segment(value), Err(ApiError::InvalidLocalInput(_))));
        }
        assert_eq!(path_segment("../overview").unwrap(), "../overview");
    }

    #[test]
    fn test_invalid_base_url() {
        let connection = Connection::new("not a url".to_string(), None).unwrap();
        assert!(matches!(connection.endpoint(&["overview"]), Err(ApiError::InvalidLocalInput(_))));
    }

    #[tokio::test]
    async fn test_read_upload_missing_path() {
        let result =
            read_upload(UploadSource::Path("/definitely/not/here/job.conf".into())).await;
        assert!(matches!(result, Err(ApiError::InvalidLocalInput(_))));
    }

    #[tokio::test]
    async fn test_read_upload_leaves_reader_usable() {
        let mut cursor = std::io::Cursor::new(b"env {}".to_vec());
        let contents = read_upload(UploadSource::Reader {
            file_name: "job.conf".to_string(),
            reader: &mut cursor,
        })
        .await
        .unwrap();

        assert_eq!(contents, b"env {}");
        // Caller still owns the handle and can keep using it.
        cursor.set_position(0);
        assert_eq!(cursor.get_ref().len(), 6);
    }
}

/// Raw outcome of a single Jira call.
///
/// Every service method hands this back next to its decoded result, and
/// every error raised after Jira answered carries one, so
/// callers can always look at the status code and body Jira sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseScheme {
    /// HTTP status code.
    pub code: u16,
    /// Fully-qualified URL the request was sent to.
    pub endpoint: String,
    /// HTTP method of the request.
    pub method: String,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl ResponseScheme {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Body as UTF-8 text, lossily converted.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }
}

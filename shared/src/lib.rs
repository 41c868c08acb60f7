use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod validate;

pub use validate::{is_valid_email, FieldErrors};

/// Number of rows every list screen asks for per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Quiet period for search inputs before a request is issued, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Portal role attached to the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Tutor,
    Student,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Tutor => "Tutor",
            Role::Student => "Student",
        }
    }
}

/// Read-only description of the signed-in user, handed to every screen by
/// props. Nothing in the frontend mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    /// Organization scope forwarded to list requests as a filter.
    pub organization: String,
}

impl UserSession {
    /// Session used when `/auth/me` is unreachable (local development against
    /// a bare API server).
    pub fn local_fallback() -> Self {
        Self {
            user_id: "local-admin".to_string(),
            display_name: "Portal Admin".to_string(),
            role: Role::Admin,
            organization: "main".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    pub price_per_hour: f64,
    /// Display name of the assigned tutor, if the server joined one in.
    #[serde(default)]
    pub tutor_name: Option<String>,
}

/// Editable course fields, as sent to create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub subject: String,
    pub description: String,
    pub price_per_hour: f64,
}

impl CourseDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Course name is required");
        }
        if self.subject.trim().is_empty() {
            errors.add("subject", "Subject is required");
        }
        if self.price_per_hour <= 0.0 {
            errors.add("price_per_hour", "Hourly rate must be greater than zero");
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub grade_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub grade_level: String,
}

impl StudentDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Student name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.add("email", "Enter a valid email address");
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
}

impl TutorDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Tutor name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.add("email", "Enter a valid email address");
        }
        if self.subject.trim().is_empty() {
            errors.add("subject", "Subject is required");
        }
        errors
    }
}

/// Server-computed class status. The client renders it but never derives it;
/// the sign-in window below is the only clock math done locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Coming,
    Active,
    Completed,
}

impl ClassStatus {
    /// Wire value, also used when building the `status=<csv>` filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Coming => "coming",
            ClassStatus::Active => "active",
            ClassStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassStatus::Coming => "Upcoming",
            ClassStatus::Active => "In progress",
            ClassStatus::Completed => "Completed",
        }
    }
}

/// Where a class session sits relative to the wall clock. Derived fresh at
/// every render; never stored, so it can advance without user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Open,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(default)]
    pub tutor_name: Option<String>,
    /// RFC 3339 timestamps.
    pub start_time: String,
    pub end_time: String,
    pub status: ClassStatus,
    #[serde(default)]
    pub location: Option<String>,
}

impl ClassSession {
    pub fn phase(&self, now_millis: i64) -> SessionPhase {
        let (Some(start), Some(end)) = (
            parse_rfc3339_millis(&self.start_time),
            parse_rfc3339_millis(&self.end_time),
        ) else {
            // Unreadable times never open the window.
            return SessionPhase::NotStarted;
        };
        if now_millis < start {
            SessionPhase::NotStarted
        } else if now_millis <= end {
            SessionPhase::Open
        } else {
            SessionPhase::Completed
        }
    }

    /// True while `now` falls inside `[start_time, end_time]`.
    pub fn sign_in_window_open(&self, now_millis: i64) -> bool {
        self.phase(now_millis) == SessionPhase::Open
    }
}

/// Parse an RFC 3339 timestamp into epoch milliseconds.
pub fn parse_rfc3339_millis(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// Editable class-session fields. The tutor picks the two attendance codes
/// here; they are opaque to the client and checked only by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDraft {
    pub course_id: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub sign_in_code: String,
    pub sign_out_code: String,
}

impl ClassDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.course_id.trim().is_empty() {
            errors.add("course_id", "Course is required");
        }
        let start = parse_rfc3339_millis(self.start_time.trim());
        let end = parse_rfc3339_millis(self.end_time.trim());
        if start.is_none() {
            errors.add("start_time", "Start time must be an RFC 3339 timestamp");
        }
        if end.is_none() {
            errors.add("end_time", "End time must be an RFC 3339 timestamp");
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add("end_time", "End time must be after the start time");
            }
        }
        if self.sign_in_code.trim().is_empty() {
            errors.add("sign_in_code", "Sign-in code is required");
        }
        if self.sign_out_code.trim().is_empty() {
            errors.add("sign_out_code", "Sign-out code is required");
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// One attendance row. Created by sign-in, completed by sign-out; the client
/// treats it as append-only history and never edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub class_id: String,
    pub course_name: String,
    pub student_id: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub sign_in_time: Option<String>,
    #[serde(default)]
    pub sign_out_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub class_id: String,
    pub sign_in_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutRequest {
    pub class_id: String,
    pub sign_out_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCounts {
    pub courses: u32,
    pub students: u32,
    pub tutors: u32,
    pub classes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub counts: ResourceCounts,
    #[serde(default)]
    pub recent_students: Vec<Student>,
    #[serde(default)]
    pub upcoming_classes: Vec<ClassSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCounts {
    pub coming: u32,
    pub active: u32,
    pub completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorDashboard {
    pub class_counts: ClassCounts,
    #[serde(default)]
    pub today_classes: Vec<ClassSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    #[serde(default)]
    pub upcoming_classes: Vec<ClassSession>,
    #[serde(default)]
    pub recent_attendance: Vec<AttendanceRecord>,
}

/// What a list screen is currently asking the server for. Page, settled
/// search text, and any extra filters (organization scope, class status CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            filters: BTreeMap::new(),
        }
    }
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Replace the settled search text. The page snaps back to 1 because the
    /// result set just changed shape.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Set or clear an extra filter. An empty value removes the key. Also
    /// snaps the page back to 1.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 1;
        self
    }

    /// Render as `page=<p>&limit=<n>[&search=...][&k=v...]`, filters in key
    /// order. Values are percent-encoded; commas survive so CSV filters like
    /// `status=coming,active` stay readable.
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.page_size);
        let search = self.search.trim();
        if !search.is_empty() {
            out.push_str("&search=");
            out.push_str(&url_encode(search));
        }
        for (key, value) in &self.filters {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(&url_encode(value));
        }
        out
    }
}

fn url_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages_for(total: u32, page_size: u32) -> u32 {
    if total == 0 || page_size == 0 {
        return 1;
    }
    (total + page_size - 1) / page_size
}

/// One page of a listed resource, already normalized. Replaced wholesale on
/// every accepted fetch; never merged with the previous page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u32,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Raw list response as the server sends it. Some endpoints omit
/// `currentPage` or the totals; `normalize` papers over that so component
/// logic only ever sees a complete [`ListPage`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ListEnvelope<T> {
    /// Collapse the envelope into the one `{ok, data, error}` contract.
    ///
    /// `success: false` becomes [`ApiError::Rejected`] carrying the server
    /// message verbatim when present. Missing counters are reconstructed so
    /// `current_page ∈ [1, total_pages]` and
    /// `total_pages == max(1, ceil(total / page_size))` always hold.
    pub fn normalize(self, requested_page: u32, page_size: u32) -> Result<ListPage<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message));
        }
        let total = self.total.unwrap_or(self.data.len() as u32);
        let total_pages = self
            .total_pages
            .unwrap_or_else(|| total_pages_for(total, page_size))
            .max(1);
        let current_page = self
            .current_page
            .unwrap_or(requested_page)
            .clamp(1, total_pages);
        Ok(ListPage {
            items: self.data,
            current_page,
            total_pages,
            total_count: total,
        })
    }
}

/// Response to create/update/delete and the attendance sign-in/out calls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationEnvelope {
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Envelope for single-payload endpoints (`/auth/me`, `/dashboard/*`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> DataEnvelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Transport("response was missing its data payload".to_string()))
    }
}

/// Failure of one API call, after normalization.
///
/// `Rejected` means the request completed but the server said no; the
/// message, when present, is surfaced to the user verbatim. `Transport`
/// covers everything else (network failure, unrecognized response shape) and
/// is only ever surfaced as a generic per-action message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Rejected(Option<String>),
    Transport(String),
}

impl ApiError {
    /// Text to show the user, given a generic fallback for this action.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) => message.clone(),
            ApiError::Rejected(None) | ApiError::Transport(_) => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(Some(message)) => write!(f, "rejected by server: {}", message),
            ApiError::Rejected(None) => write!(f, "rejected by server"),
            ApiError::Transport(detail) => write!(f, "transport failure: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

/// Ticket counter behind the stale-response guard.
///
/// Every outgoing request takes a ticket from `begin`; when its response
/// lands, the result is applied only if the ticket is still the latest one
/// issued. A slow page-2 reply can therefore never clobber a faster page-1
/// reply requested after it.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_at(start: &str, end: &str) -> ClassSession {
        ClassSession {
            id: "class-1".to_string(),
            course_id: "course-1".to_string(),
            course_name: "Algebra".to_string(),
            tutor_name: None,
            start_time: start.to_string(),
            end_time: end.to_string(),
            status: ClassStatus::Coming,
            location: None,
        }
    }

    fn millis(value: &str) -> i64 {
        parse_rfc3339_millis(value).unwrap()
    }

    #[test]
    fn test_total_pages_for() {
        // 23 records at 10 per page fill three pages
        assert_eq!(total_pages_for(23, 10), 3);
        assert_eq!(total_pages_for(30, 10), 3);
        assert_eq!(total_pages_for(1, 10), 1);

        // An empty result set still has one (empty) page
        assert_eq!(total_pages_for(0, 10), 1);
    }

    #[test]
    fn test_normalize_fills_missing_counters() {
        // The classes endpoint omits currentPage; totals may be missing too
        let envelope = ListEnvelope::<u32> {
            success: true,
            data: vec![1, 2, 3],
            current_page: None,
            total_pages: None,
            total: Some(23),
            message: None,
        };
        let page = envelope.normalize(2, 10).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 23);
        assert_eq!(page.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize_derives_total_from_items_when_absent() {
        let envelope = ListEnvelope::<u32> {
            success: true,
            data: vec![7, 8],
            current_page: None,
            total_pages: None,
            total: None,
            message: None,
        };
        let page = envelope.normalize(1, 10).unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_normalize_clamps_current_page_into_range() {
        let envelope = ListEnvelope::<u32> {
            success: true,
            data: vec![],
            current_page: None,
            total_pages: Some(3),
            total: Some(23),
            message: None,
        };
        // Requested page drifted past the end (e.g. after deletes)
        let page = envelope.normalize(9, 10).unwrap();
        assert_eq!(page.current_page, 3);
    }

    #[test]
    fn test_normalize_rejection_keeps_server_message() {
        let envelope = ListEnvelope::<u32> {
            success: false,
            data: vec![],
            current_page: None,
            total_pages: None,
            total: None,
            message: Some("Organization not found".to_string()),
        };
        let err = envelope.normalize(1, 10).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected(Some("Organization not found".to_string()))
        );
        assert_eq!(
            err.user_message("Failed to load courses"),
            "Organization not found"
        );
    }

    #[test]
    fn test_normalize_rejection_without_message_uses_fallback() {
        let envelope = ListEnvelope::<u32> {
            success: false,
            data: vec![],
            current_page: None,
            total_pages: None,
            total: None,
            message: None,
        };
        let err = envelope.normalize(1, 10).unwrap_err();
        assert_eq!(
            err.user_message("Failed to load courses"),
            "Failed to load courses"
        );
    }

    #[test]
    fn test_list_envelope_decodes_camel_case_wire() {
        let body = r#"{
            "success": true,
            "data": [{"id": "c1", "name": "Algebra", "subject": "Math", "pricePerHour": 40.0}],
            "currentPage": 1,
            "totalPages": 3,
            "total": 23
        }"#;
        let envelope: ListEnvelope<Course> = serde_json::from_str(body).unwrap();
        let page = envelope.normalize(1, 10).unwrap();
        assert_eq!(page.items[0].name, "Algebra");
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_mutation_envelope_into_result() {
        let ok = MutationEnvelope {
            success: true,
            message: Some("Course created".to_string()),
        };
        assert_eq!(ok.into_result().unwrap(), Some("Course created".to_string()));

        let rejected = MutationEnvelope {
            success: false,
            message: Some("Invalid code".to_string()),
        };
        let err = rejected.into_result().unwrap_err();
        assert_eq!(err.user_message("Failed to sign out"), "Invalid code");
    }

    #[test]
    fn test_data_envelope_missing_payload_is_transport() {
        let envelope = DataEnvelope::<UserSession> {
            success: true,
            data: None,
            message: None,
        };
        match envelope.into_result() {
            Err(ApiError::Transport(_)) => {}
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[test]
    fn test_query_string_basic() {
        let query = ResourceQuery::new();
        assert_eq!(query.to_query_string(), "page=1&limit=10");
    }

    #[test]
    fn test_query_string_encodes_search() {
        let query = ResourceQuery::new().with_search("alg ebra&co");
        assert_eq!(
            query.to_query_string(),
            "page=1&limit=10&search=alg%20ebra%26co"
        );
    }

    #[test]
    fn test_query_string_filters_in_key_order_with_csv_intact() {
        let query = ResourceQuery::new()
            .with_filter("status", "coming,active")
            .with_filter("organization", "main");
        assert_eq!(
            query.to_query_string(),
            "page=1&limit=10&organization=main&status=coming,active"
        );
    }

    #[test]
    fn test_with_search_resets_page() {
        let query = ResourceQuery::new().with_page(4).with_search("newton");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "newton");
    }

    #[test]
    fn test_with_filter_resets_page_and_empty_value_clears() {
        let query = ResourceQuery::new()
            .with_page(4)
            .with_filter("status", "completed");
        assert_eq!(query.page, 1);

        let cleared = query.with_filter("status", "");
        assert!(cleared.filters.is_empty());
    }

    #[test]
    fn test_class_phase_follows_wall_clock() {
        let class = class_at("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z");

        assert_eq!(
            class.phase(millis("2026-03-02T08:00:00Z")),
            SessionPhase::NotStarted
        );
        assert_eq!(
            class.phase(millis("2026-03-02T09:30:00Z")),
            SessionPhase::Open
        );
        assert_eq!(
            class.phase(millis("2026-03-02T10:30:00Z")),
            SessionPhase::Completed
        );

        // Window bounds are inclusive
        assert_eq!(
            class.phase(millis("2026-03-02T09:00:00Z")),
            SessionPhase::Open
        );
        assert_eq!(
            class.phase(millis("2026-03-02T10:00:00Z")),
            SessionPhase::Open
        );

        assert!(class.sign_in_window_open(millis("2026-03-02T09:30:00Z")));
        assert!(!class.sign_in_window_open(millis("2026-03-02T08:00:00Z")));
    }

    #[test]
    fn test_class_phase_with_unreadable_times_stays_closed() {
        let class = class_at("soon", "later");
        assert_eq!(class.phase(0), SessionPhase::NotStarted);
        assert!(!class.sign_in_window_open(0));
    }

    #[test]
    fn test_course_draft_requires_name() {
        let draft = CourseDraft {
            name: "   ".to_string(),
            subject: "Math".to_string(),
            description: String::new(),
            price_per_hour: 40.0,
        };
        let errors = draft.validate();
        assert_eq!(errors.get("name"), Some("Course name is required"));
        assert_eq!(errors.len(), 1);

        let valid = CourseDraft {
            name: "Algebra II".to_string(),
            subject: "Math".to_string(),
            description: "Quadratics onward".to_string(),
            price_per_hour: 40.0,
        };
        assert!(valid.validate().is_empty());
    }

    #[test]
    fn test_student_draft_checks_email_format() {
        let draft = StudentDraft {
            name: "Dana Ruiz".to_string(),
            email: "dana-at-example.com".to_string(),
            phone: String::new(),
            grade_level: "9".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));

        let valid = StudentDraft {
            name: "Dana Ruiz".to_string(),
            email: "dana@example.com".to_string(),
            phone: String::new(),
            grade_level: "9".to_string(),
        };
        assert!(valid.validate().is_empty());
    }

    #[test]
    fn test_tutor_draft_requires_subject() {
        let draft = TutorDraft {
            name: "Sam Okafor".to_string(),
            email: "sam@example.com".to_string(),
            subject: String::new(),
        };
        let errors = draft.validate();
        assert_eq!(errors.get("subject"), Some("Subject is required"));
    }

    #[test]
    fn test_class_draft_requires_orderly_window_and_codes() {
        let draft = ClassDraft {
            course_id: "course-1".to_string(),
            start_time: "2026-03-02T10:00:00Z".to_string(),
            end_time: "2026-03-02T09:00:00Z".to_string(),
            location: String::new(),
            sign_in_code: String::new(),
            sign_out_code: "leave-42".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(
            errors.get("end_time"),
            Some("End time must be after the start time")
        );
        assert_eq!(errors.get("sign_in_code"), Some("Sign-in code is required"));
        assert_eq!(errors.get("course_id"), None);
    }

    #[test]
    fn test_request_sequence_latest_ticket_wins() {
        let mut sequence = RequestSequence::new();
        let page_one = sequence.begin();
        let page_two = sequence.begin();

        // page-1 was superseded before it completed
        assert!(!sequence.is_current(page_one));
        assert!(sequence.is_current(page_two));
    }

    #[test]
    fn test_sign_in_request_wire_shape() {
        let request = SignInRequest {
            class_id: "class-1".to_string(),
            sign_in_code: "enter-7".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["classId"], "class-1");
        assert_eq!(body["signInCode"], "enter-7");
    }

    #[test]
    fn test_session_roles_decode_from_wire() {
        let body = r#"{
            "userId": "u1",
            "displayName": "Ana",
            "role": "tutor",
            "organization": "main"
        }"#;
        let session: UserSession = serde_json::from_str(body).unwrap();
        assert_eq!(session.role, Role::Tutor);
        assert_eq!(session.role.label(), "Tutor");
    }
}

use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use shared::{
    AdminDashboard, ApiError, AttendanceRecord, ClassDraft, ClassSession, Course, CourseDraft,
    DataEnvelope, ListEnvelope, ListPage, MutationEnvelope, ResourceQuery, SignInRequest,
    SignOutRequest, Student, StudentDashboard, StudentDraft, Tutor, TutorDashboard, TutorDraft,
    UserSession,
};

/// API client for communicating with the portal server.
///
/// Every response is normalized into `Result<_, ApiError>` here, before it
/// reaches any component logic: either the parsed payload, a `Rejected` with
/// the server's own message, or a `Transport` for anything that did not
/// complete or did not match the envelope contract.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Courses, as a generic CRUD capability.
    pub fn courses(&self) -> ResourceClient<Course, CourseDraft> {
        ResourceClient::new(self.clone(), "courses")
    }

    pub fn students(&self) -> ResourceClient<Student, StudentDraft> {
        ResourceClient::new(self.clone(), "students")
    }

    pub fn tutors(&self) -> ResourceClient<Tutor, TutorDraft> {
        ResourceClient::new(self.clone(), "tutors")
    }

    pub fn classes(&self) -> ResourceClient<ClassSession, ClassDraft> {
        ResourceClient::new(self.clone(), "classes")
    }

    /// Attendance history is list-only; the records are written through
    /// sign-in/sign-out, never through CRUD calls.
    pub fn attendance_records(&self) -> ResourceClient<AttendanceRecord, ()> {
        ResourceClient::new(self.clone(), "attendance/records")
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Option<String>, ApiError> {
        self.post_mutation("/attendance/sign-in", request).await
    }

    pub async fn sign_out(&self, request: &SignOutRequest) -> Result<Option<String>, ApiError> {
        self.post_mutation("/attendance/sign-out", request).await
    }

    /// Who is signed in. Auth itself lives entirely on the server; the
    /// client only reads the answer.
    pub async fn current_session(&self) -> Result<UserSession, ApiError> {
        let envelope: DataEnvelope<UserSession> = self.get_json("/auth/me").await?;
        envelope.into_result()
    }

    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        let envelope: DataEnvelope<AdminDashboard> = self.get_json("/dashboard/admin").await?;
        envelope.into_result()
    }

    pub async fn tutor_dashboard(&self) -> Result<TutorDashboard, ApiError> {
        let envelope: DataEnvelope<TutorDashboard> = self.get_json("/dashboard/tutor").await?;
        envelope.into_result()
    }

    pub async fn student_dashboard(&self) -> Result<StudentDashboard, ApiError> {
        let envelope: DataEnvelope<StudentDashboard> = self.get_json("/dashboard/student").await?;
        envelope.into_result()
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn post_mutation<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope: MutationEnvelope = decode(response).await?;
        envelope.into_result()
    }

    async fn put_mutation<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope: MutationEnvelope = decode(response).await?;
        envelope.into_result()
    }

    async fn delete_mutation(&self, path: &str) -> Result<Option<String>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let envelope: MutationEnvelope = decode(response).await?;
        envelope.into_result()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a response body into the expected envelope type.
///
/// Error bodies are attempted too: a 4xx carrying `{success: false, ...}`
/// still counts as a completed (rejected) call. Only an unreadable body is a
/// transport failure.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let completed_ok = response.ok();
    match response.json::<T>().await {
        Ok(value) => Ok(value),
        Err(_) if !completed_ok => {
            Err(ApiError::Transport(format!("server returned status {}", status)))
        }
        Err(e) => Err(ApiError::Transport(e.to_string())),
    }
}

/// Capability handle for one server-managed resource: `{list, create,
/// update, delete}` against a fixed endpoint path.
///
/// Each list screen binds one of these (via the `ApiClient` constructors
/// above) and supplies only its field schema; everything else about the
/// list/CRUD flow is shared.
pub struct ResourceClient<T, D> {
    api: ApiClient,
    path: &'static str,
    _marker: PhantomData<(T, D)>,
}

impl<T, D> ResourceClient<T, D> {
    fn new(api: ApiClient, path: &'static str) -> Self {
        Self {
            api,
            path,
            _marker: PhantomData,
        }
    }
}

impl<T, D> Clone for ResourceClient<T, D> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            path: self.path,
            _marker: PhantomData,
        }
    }
}

impl<T, D> PartialEq for ResourceClient<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api && self.path == other.path
    }
}

impl<T: DeserializeOwned, D: Serialize> ResourceClient<T, D> {
    pub async fn list(&self, query: &ResourceQuery) -> Result<ListPage<T>, ApiError> {
        let envelope: ListEnvelope<T> = self
            .api
            .get_json(&format!("/{}?{}", self.path, query.to_query_string()))
            .await?;
        envelope.normalize(query.page, query.page_size)
    }

    pub async fn create(&self, draft: &D) -> Result<Option<String>, ApiError> {
        self.api.post_mutation(&format!("/{}", self.path), draft).await
    }

    pub async fn update(&self, id: &str, draft: &D) -> Result<Option<String>, ApiError> {
        self.api
            .put_mutation(&format!("/{}/{}", self.path, id), draft)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.api
            .delete_mutation(&format!("/{}/{}", self.path, id))
            .await
    }
}

//! Public API facade over the request dispatcher.
//!
//! # Responsibility
//! - Give callers typed per-entity CRUD functions instead of raw simulated
//!   requests.
//! - Apply the uniform simulated network latency so caller loading states
//!   stay exercised.
//!
//! # Invariants
//! - UI-facing code goes through this module only; the dispatcher is not a
//!   supported entry point.
//! - `get`/`update` surface missing records as `None` and `delete` as
//!   `false` — NotFound never becomes an error.

use crate::dispatch::{route_segment, ApiRequest, ApiResponse, Dispatcher, Verb};
use crate::model::EntityKind;
use crate::store::StoreError;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::thread;
use std::time::Duration;

pub mod appointments;
pub mod disease_analyses;
pub mod dose_records;
pub mod family_members;
pub mod health_metrics;
pub mod health_reports;
pub mod health_trends;
pub mod insights;
pub mod insurance_policies;
pub mod medications;
pub mod prescriptions;
pub mod reminders;

/// Uniform simulated network latency applied to every facade call.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(100);

pub type ApiResult<T> = Result<T, ApiError>;

/// Facade-level error: storage faults or typed decoding failures.
#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
    Decode(serde_json::Error),
    /// Dispatcher returned a response shape the operation cannot produce.
    InconsistentResponse(&'static str),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "response decoding failed: {err}"),
            Self::InconsistentResponse(details) => {
                write!(f, "inconsistent dispatcher response: {details}")
            }
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InconsistentResponse(_) => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Binds a domain model to its entity collection.
pub trait ApiRecord: Serialize + DeserializeOwned {
    const KIND: EntityKind;
}

/// Per-session facade client: dispatcher + caller identity + latency.
pub struct ApiClient<'conn> {
    dispatcher: Dispatcher<'conn>,
    caller_id: String,
    latency: Duration,
}

impl<'conn> ApiClient<'conn> {
    /// Constructs a client for one caller identity over a ready connection.
    pub fn try_new(conn: &'conn Connection, caller_id: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            dispatcher: Dispatcher::try_new(conn)?,
            caller_id: caller_id.into(),
            latency: SIMULATED_LATENCY,
        })
    }

    /// Overrides the simulated latency; tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn caller_id(&self) -> &str {
        &self.caller_id
    }

    /// Lists the records visible to this caller.
    pub fn list_records<T: ApiRecord>(&mut self) -> ApiResult<Vec<T>> {
        let response = self.execute(Verb::Get, collection_path(T::KIND), None)?;
        match response {
            ApiResponse::Records(values) => values
                .into_iter()
                .map(|value| serde_json::from_value(value).map_err(ApiError::Decode))
                .collect(),
            ApiResponse::NotFound { .. } => Ok(Vec::new()),
            _ => Err(ApiError::InconsistentResponse("list expected a collection")),
        }
    }

    /// Fetches one record by id; `None` when absent or not visible.
    pub fn get_record<T: ApiRecord>(&mut self, id: &str) -> ApiResult<Option<T>> {
        let response = self.execute(Verb::Get, record_path(T::KIND, id), None)?;
        decode_optional_record(response)
    }

    /// Creates a record; the returned value carries the assigned id and
    /// timestamps.
    pub fn create_record<T: ApiRecord>(&mut self, payload: &T) -> ApiResult<T> {
        let body = serde_json::to_value(payload).map_err(ApiError::Decode)?;
        let response = self.execute(Verb::Post, collection_path(T::KIND), Some(body))?;
        match response {
            ApiResponse::Record(value) => serde_json::from_value(value).map_err(ApiError::Decode),
            _ => Err(ApiError::InconsistentResponse("create expected a record")),
        }
    }

    /// Applies a partial update; `None` when no record has the id.
    pub fn update_record<T: ApiRecord>(&mut self, id: &str, patch: Value) -> ApiResult<Option<T>> {
        let response = self.execute(Verb::Put, record_path(T::KIND, id), Some(patch))?;
        decode_optional_record(response)
    }

    /// Hard-deletes a record; `false` when no record has the id.
    pub fn delete_record<T: ApiRecord>(&mut self, id: &str) -> ApiResult<bool> {
        let response = self.execute(Verb::Delete, record_path(T::KIND, id), None)?;
        match response {
            ApiResponse::Deleted { .. } => Ok(true),
            ApiResponse::NotFound { .. } => Ok(false),
            _ => Err(ApiError::InconsistentResponse("delete expected a marker")),
        }
    }

    fn execute(
        &mut self,
        verb: Verb,
        path: String,
        body: Option<Value>,
    ) -> ApiResult<ApiResponse> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        let mut request = ApiRequest::new(verb, path, self.caller_id.clone());
        if let Some(body) = body {
            request = request.with_body(body);
        }
        Ok(self.dispatcher.dispatch(&request)?)
    }
}

fn collection_path(kind: EntityKind) -> String {
    format!("/api/{}", route_segment(kind))
}

fn record_path(kind: EntityKind, id: &str) -> String {
    format!("/api/{}/{id}", route_segment(kind))
}

fn decode_optional_record<T: ApiRecord>(response: ApiResponse) -> ApiResult<Option<T>> {
    match response {
        ApiResponse::Record(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(ApiError::Decode),
        ApiResponse::NotFound { .. } => Ok(None),
        _ => Err(ApiError::InconsistentResponse("expected a single record")),
    }
}

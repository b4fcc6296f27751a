//! Route table for the simulated API.
//!
//! # Responsibility
//! - Map (path, verb) pairs onto an explicit entity/action route.
//!
//! # Invariants
//! - Every dispatchable collection is an `EntityKind` variant; the match on
//!   route segments is exhaustive over `EntityKind::ALL`, so adding a
//!   collection without a route fails the unit tests here rather than
//!   surfacing as a runtime 404.
//! - Id presence disambiguates LIST from GET/UPDATE/DELETE.

use crate::model::EntityKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// `/api/<segment>` with an optional `/<id>` tail.
static PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/api/([a-z]+(?:-[a-z]+)*)(?:/([A-Za-z0-9_.:-]+))?/?$").expect("valid route regex")
});

/// HTTP-style verb of a simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Verb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A simulated request as the facade constructs it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub path: String,
    pub verb: Verb,
    /// Identity header supplied by the session context.
    pub caller_id: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(verb: Verb, path: impl Into<String>, caller_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            verb,
            caller_id: caller_id.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Collection operation selected by route resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    List,
    Get(String),
    Create,
    Update(String),
    Delete(String),
}

impl RouteAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get(_) => "get",
            Self::Create => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}

/// A resolved route: which collection, which operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: EntityKind,
    pub action: RouteAction,
}

/// Returns the path segment under `/api/` for one collection.
pub fn route_segment(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Medications => "medications",
        EntityKind::DoseRecords => "dose-records",
        EntityKind::FamilyMembers => "family-members",
        EntityKind::HealthReports => "health-reports",
        EntityKind::Prescriptions => "prescriptions",
        EntityKind::Appointments => "appointments",
        EntityKind::HealthMetrics => "health-metrics",
        EntityKind::DiseaseAnalyses => "disease-analyses",
        EntityKind::HealthTrends => "health-trends",
        EntityKind::InsurancePolicies => "insurance-policies",
        EntityKind::AiInsights => "ai-insights",
        EntityKind::SelfReminders => "self-reminders",
    }
}

fn kind_for_segment(segment: &str) -> Option<EntityKind> {
    EntityKind::ALL
        .into_iter()
        .find(|kind| route_segment(*kind) == segment)
}

/// Resolves a (path, verb) pair to a route, or `None` when no route exists.
///
/// `None` is the structured not-found outcome; resolution never panics on
/// arbitrary paths.
pub fn resolve_route(path: &str, verb: Verb) -> Option<Route> {
    let captures = PATH_RE.captures(path)?;
    let kind = kind_for_segment(captures.get(1)?.as_str())?;
    let id = captures.get(2).map(|capture| capture.as_str().to_string());

    let action = match (verb, id) {
        (Verb::Get, None) => RouteAction::List,
        (Verb::Get, Some(id)) => RouteAction::Get(id),
        (Verb::Post, None) => RouteAction::Create,
        (Verb::Put, Some(id)) => RouteAction::Update(id),
        (Verb::Delete, Some(id)) => RouteAction::Delete(id),
        _ => return None,
    };

    Some(Route { kind, action })
}

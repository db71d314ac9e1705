use std::fmt;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::models::{Identity, Role};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Login,
    // Candidate
    Upload,
    CandidateDashboard,
    ResumeBuilder,
    Interview,
    // Either role
    Settings,
    // HR
    HrDashboard,
    JobPosting,
    InterviewSchedule,
}

const ALL_ROUTES: &[Route] = &[
    Route::Home,
    Route::Login,
    Route::Upload,
    Route::CandidateDashboard,
    Route::ResumeBuilder,
    Route::Interview,
    Route::Settings,
    Route::HrDashboard,
    Route::JobPosting,
    Route::InterviewSchedule,
];

const BOTH_ROLES: &[Role] = &[Role::Hr, Role::Candidate];
const CANDIDATE_ONLY: &[Role] = &[Role::Candidate];
const HR_ONLY: &[Role] = &[Role::Hr];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Upload => "/upload",
            Route::CandidateDashboard => "/dashboard",
            Route::ResumeBuilder => "/resume-builder",
            Route::Interview => "/interview",
            Route::Settings => "/settings",
            Route::HrDashboard => "/hr-dashboard",
            Route::JobPosting => "/job-posting",
            Route::InterviewSchedule => "/interview-schedule",
        }
    }

    /// Maps a path back to its route. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            p => p,
        };
        ALL_ROUTES.iter().copied().find(|r| r.path() == normalized)
    }

    pub fn all() -> &'static [Route] {
        ALL_ROUTES
    }

    /// Where a freshly signed-in user of `role` lands.
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Hr => Route::HrDashboard,
            Role::Candidate => Route::CandidateDashboard,
        }
    }

    /// `None` for public pages.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Home | Route::Login => None,
            Route::Upload | Route::CandidateDashboard | Route::ResumeBuilder | Route::Interview => {
                Some(CANDIDATE_ONLY)
            }
            Route::Settings => Some(BOTH_ROLES),
            Route::HrDashboard | Route::JobPosting | Route::InterviewSchedule => Some(HR_ONLY),
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles().is_none()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Protected-route check.
///
/// Anonymous users are sent to the login page; signed-in users who lack the
/// role are sent to their own dashboard.
pub fn guard(identity: Option<&Identity>, route: Route) -> GuardDecision {
    let Some(allowed) = route.allowed_roles() else {
        return GuardDecision::Allow;
    };
    match identity {
        None => GuardDecision::Redirect(Route::Login),
        Some(identity) if allowed.contains(&identity.role()) => GuardDecision::Allow,
        Some(identity) => GuardDecision::Redirect(Route::dashboard_for(identity.role())),
    }
}

/// The router the session hands redirects to. The session does not own routing.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!("Navigating to {route}");
    }
}

/// Remembers every redirect. Clones share the same history.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<Route>>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Route> {
        self.history.lock().ok().and_then(|h| h.last().copied())
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut history) = self.history.lock() {
            history.push(route);
        }
    }
}

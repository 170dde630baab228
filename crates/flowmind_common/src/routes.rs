//! Portal navigation routes
//!
//! Single place that knows the URL shape of the three portal surfaces a
//! dispatched action can land on. The dispatcher and any front-end agree
//! on these paths by construction.

use crate::intent_rules::{ActionKind, Department, WorkflowSubtype};
use std::fmt;

/// Navigation target for a dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalRoute {
    /// Workflow creation page, pre-selected subtype, auto-start flag set
    WorkflowRequest(WorkflowSubtype),
    /// Ticket creation page for a target department, auto-start flag set
    SupportTicket(Department),
    /// Document library / search page. Takes no parameters - every
    /// document action lands here.
    DocumentLibrary,
}

impl PortalRoute {
    /// Map a rule's dispatch behavior to its navigation target
    pub fn for_action(action: ActionKind) -> Self {
        match action {
            ActionKind::StartWorkflow(subtype) => PortalRoute::WorkflowRequest(subtype),
            ActionKind::OpenTicket(dept) => PortalRoute::SupportTicket(dept),
            ActionKind::SearchDocuments => PortalRoute::DocumentLibrary,
        }
    }

    /// Portal-relative path including query string
    pub fn path(&self) -> String {
        match self {
            PortalRoute::WorkflowRequest(subtype) => {
                format!("/portal/requests/new?type={}&auto=true", subtype.as_str())
            }
            PortalRoute::SupportTicket(dept) => {
                format!("/portal/support/new?dept={}&auto=true", dept.as_str())
            }
            PortalRoute::DocumentLibrary => "/portal/documents".to_string(),
        }
    }

    /// Absolute URL when a portal base is configured, relative otherwise
    pub fn url(&self, base_url: Option<&str>) -> String {
        match base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), self.path()),
            None => self.path(),
        }
    }
}

impl fmt::Display for PortalRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

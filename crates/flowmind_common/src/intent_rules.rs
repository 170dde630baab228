//! Static intent rule table
//!
//! Hard-coded, testable rules for the proactive-action feature. Each rule
//! fires when any of its keywords appears (case-insensitively) in the
//! user's chat message. The table is immutable at run time; new intents
//! are additive data here, never new branches in the resolver.
//!
//! Keywords must be stored lowercase - the resolver lowercases the
//! message once and compares against the keywords as written.

use crate::priority::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a suggested action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Workflow,
    Ticket,
    Document,
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCategory::Workflow => write!(f, "workflow"),
            ActionCategory::Ticket => write!(f, "ticket"),
            ActionCategory::Document => write!(f, "document"),
        }
    }
}

/// Business-process subtype for workflow actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowSubtype {
    LeaveRequest,
    ExpenseReimbursement,
    MeetingRequest,
}

impl WorkflowSubtype {
    /// Query-parameter value used by the workflow creation page
    pub const fn as_str(self) -> &'static str {
        match self {
            WorkflowSubtype::LeaveRequest => "leave_request",
            WorkflowSubtype::ExpenseReimbursement => "expense_reimbursement",
            WorkflowSubtype::MeetingRequest => "meeting_request",
        }
    }
}

/// Target support queue for ticket actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    It,
    Hr,
}

impl Department {
    /// Query-parameter value used by the ticket creation page
    pub const fn as_str(self) -> &'static str {
        match self {
            Department::It => "it",
            Department::Hr => "hr",
        }
    }
}

/// Dispatch behavior attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "param", rename_all = "snake_case")]
pub enum ActionKind {
    /// Navigate to the workflow creation page with an auto-start flag
    StartWorkflow(WorkflowSubtype),
    /// Navigate to the ticket creation page for a department
    OpenTicket(Department),
    /// Navigate to the document library / search page
    SearchDocuments,
}

/// One entry of the static rule table
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// Stable identifier, also used as the produced action id
    pub id: &'static str,
    pub category: ActionCategory,
    /// Lowercase substrings; the rule fires if any one matches
    pub keywords: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub action: ActionKind,
}

impl IntentRule {
    /// Check the rule against an already-lowercased message
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// The fixed rule table, in declaration order.
///
/// Declaration order is load-bearing: equal-priority matches keep this
/// order in resolver output. Note the deliberate overlap - "schedule" is
/// a keyword of both `contact-hr` and `schedule-meeting`, so a message
/// containing it triggers both rules.
pub static RULES: &[IntentRule] = &[
    IntentRule {
        id: "create-leave-request",
        category: ActionCategory::Workflow,
        keywords: &["leave", "vacation", "time off", "pto", "holiday", "sick day"],
        title: "Request Time Off",
        description: "Start a leave request for vacation, PTO, or sick days",
        priority: Priority::High,
        action: ActionKind::StartWorkflow(WorkflowSubtype::LeaveRequest),
    },
    IntentRule {
        id: "create-it-ticket",
        category: ActionCategory::Ticket,
        keywords: &[
            "password",
            "computer",
            "laptop",
            "software",
            "internet",
            "email",
            "access",
            "login",
            "technical",
            "it issue",
        ],
        title: "Open an IT Ticket",
        description: "Get help from the IT support team",
        priority: Priority::High,
        action: ActionKind::OpenTicket(Department::It),
    },
    IntentRule {
        id: "create-expense-request",
        category: ActionCategory::Workflow,
        keywords: &[
            "expense",
            "reimburse",
            "receipt",
            "travel",
            "meal",
            "business",
            "cost",
            "money",
        ],
        title: "Submit an Expense",
        description: "Start an expense reimbursement request",
        priority: Priority::High,
        action: ActionKind::StartWorkflow(WorkflowSubtype::ExpenseReimbursement),
    },
    IntentRule {
        id: "search-documents",
        category: ActionCategory::Document,
        keywords: &["policy", "handbook", "document", "form", "procedure", "guideline"],
        title: "Search Documents",
        description: "Browse the company document library",
        priority: Priority::Medium,
        action: ActionKind::SearchDocuments,
    },
    IntentRule {
        id: "contact-hr",
        category: ActionCategory::Ticket,
        keywords: &["hr", "human resources", "benefits", "payroll", "schedule", "manager"],
        title: "Contact HR",
        description: "Open a ticket with the HR team",
        priority: Priority::Medium,
        action: ActionKind::OpenTicket(Department::Hr),
    },
    IntentRule {
        id: "schedule-meeting",
        category: ActionCategory::Workflow,
        keywords: &["meeting", "appointment", "schedule", "calendar"],
        title: "Schedule a Meeting",
        description: "Start a meeting request",
        priority: Priority::Low,
        action: ActionKind::StartWorkflow(WorkflowSubtype::MeetingRequest),
    },
];

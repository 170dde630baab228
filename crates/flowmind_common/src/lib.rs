//! FlowMindAI Intent Core - shared library
//!
//! Deterministic proactive-action engine for the FlowMindAI employee
//! portal: maps free-text chat messages to ranked action suggestions and
//! dispatches a chosen suggestion (portal navigation + toast + analytics
//! callback).
//!
//! ## Architecture
//!
//! ```text
//! +-----------+     +----------------+     +------------------+
//! | chat view | --> | IntentResolver | --> | suggestion cards |
//! | (message) |     | (rule table)   |     | (ranked list)    |
//! +-----------+     +----------------+     +------------------+
//!                                                   |
//!                                                   v (user picks one)
//!                                          +------------------+
//!                                          | Dispatcher       |
//!                                          | route+toast+log  |
//!                                          +------------------+
//! ```
//!
//! No LLM calls anywhere in this crate - all matching is keyword-based
//! and fully deterministic.

pub mod action_dispatch;
pub mod config;
pub mod errors;
pub mod intent_resolver;
pub mod intent_rules;
pub mod notifications;
pub mod priority;
pub mod routes;

pub use action_dispatch::{Dispatcher, Navigate};
pub use config::PortalConfig;
pub use errors::DispatchError;
pub use intent_resolver::{resolve, SuggestedAction};
pub use intent_rules::{ActionCategory, ActionKind, Department, IntentRule, WorkflowSubtype, RULES};
pub use notifications::{Notify, Toast, ToastVariant};
pub use priority::Priority;
pub use routes::PortalRoute;

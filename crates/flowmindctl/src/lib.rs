//! FlowMind Control - terminal client for the FlowMindAI employee portal
//!
//! Wires the intent core to a terminal surface: suggestion cards,
//! toast lines, navigation (print or browser launch), and a chat REPL.

pub mod display;
pub mod logging;
pub mod navigator;
pub mod repl;

//! Terminal navigator
//!
//! Stands in for the browser router of the web portal: prints the
//! resolved portal URL, and optionally launches it in the system
//! browser when a base URL is configured.

use anyhow::{Context, Result};
use flowmind_common::{Navigate, PortalConfig, PortalRoute};
use owo_colors::OwoColorize;
use std::process::Command;
use tracing::debug;

pub struct TerminalNavigator {
    base_url: Option<String>,
    open_links: bool,
}

impl TerminalNavigator {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            open_links: config.open_links,
        }
    }

    pub fn resolve_url(&self, route: &PortalRoute) -> String {
        route.url(self.base_url.as_deref())
    }
}

impl Navigate for TerminalNavigator {
    fn navigate(&mut self, route: &PortalRoute) -> Result<()> {
        let url = self.resolve_url(route);
        println!("{} {}", "→".cyan(), url.underline());

        // Browser launch only makes sense for absolute URLs.
        if self.open_links && self.base_url.is_some() {
            debug!(url = %url, "launching browser");
            open_in_browser(&url)
                .with_context(|| format!("failed to open {url} in the browser"))?;
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

fn open_in_browser(url: &str) -> Result<()> {
    Command::new(OPENER).arg(url).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowmind_common::{Department, WorkflowSubtype};

    #[test]
    fn test_relative_url_without_base() {
        let navigator = TerminalNavigator::from_config(&PortalConfig::default());
        assert_eq!(
            navigator.resolve_url(&PortalRoute::SupportTicket(Department::Hr)),
            "/portal/support/new?dept=hr&auto=true"
        );
    }

    #[test]
    fn test_absolute_url_with_configured_base() {
        let config = PortalConfig {
            base_url: Some("https://app.flowmind.ai".to_string()),
            ..PortalConfig::default()
        };
        let navigator = TerminalNavigator::from_config(&config);
        assert_eq!(
            navigator.resolve_url(&PortalRoute::WorkflowRequest(WorkflowSubtype::LeaveRequest)),
            "https://app.flowmind.ai/portal/requests/new?type=leave_request&auto=true"
        );
    }
}

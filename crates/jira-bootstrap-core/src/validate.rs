//! Simulation context validation
//!
//! Checks a built [`SimulationContext`] against the invariants the
//! simulator relies on. The first violation found is reported.

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::{AppError, Result};
use crate::mock_context::deployment_host_suffix;
use crate::model::{AgentStatus, IntegrationDescriptor, ProcessingStatus, Session, SimulationContext};

fn invalid(msg: impl Into<String>) -> AppError {
    AppError::InvalidContext(msg.into())
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| invalid(format!("{field} is not a valid URL ({value}): {e}")))
}

/// Validate a standalone simulation context as of `now`
pub fn validate(ctx: &SimulationContext, now: DateTime<Utc>) -> Result<()> {
    validate_integration(&ctx.integration)?;
    validate_processing(&ctx.processing, now)?;
    validate_agent(&ctx.agent)?;
    validate_session(&ctx.session)?;
    Ok(())
}

pub fn validate_integration(integration: &IntegrationDescriptor) -> Result<()> {
    if integration.installed {
        return Err(invalid("integration must not be installed in standalone mode"));
    }
    parse_url("icon", &integration.icon)?;
    parse_url("uiURL", &integration.ui_url)?;
    parse_url("publisher.avatar", &integration.publisher.avatar)?;
    parse_url("publisher.url", &integration.publisher.url)?;
    Ok(())
}

pub fn validate_processing(status: &ProcessingStatus, now: DateTime<Utc>) -> Result<()> {
    let ordered = [
        ("createdDate", status.created_date),
        ("lastExportRequestedDate", status.last_export_requested_date),
        ("lastExportCompletedDate", status.last_export_completed_date),
        ("lastProcessedDate", status.last_processed_date),
        ("now", now),
    ];
    for pair in ordered.windows(2) {
        let (earlier_name, earlier) = pair[0];
        let (later_name, later) = pair[1];
        if earlier > later {
            return Err(invalid(format!(
                "{earlier_name} ({}) is after {later_name} ({})",
                earlier.timestamp_millis(),
                later.timestamp_millis()
            )));
        }
    }
    Ok(())
}

pub fn validate_agent(agent: &AgentStatus) -> Result<()> {
    if agent.running && agent.enrollment_id.is_empty() {
        return Err(invalid("a running agent needs an enrollment id"));
    }
    Ok(())
}

pub fn validate_session(session: &Session) -> Result<()> {
    if session.customer.id.is_empty() {
        return Err(invalid("customer id must not be empty"));
    }
    if session.user.name.is_empty() {
        return Err(invalid("user name must not be empty"));
    }
    for (field, value) in [("graphqlUrl", &session.graphql_url), ("authUrl", &session.auth_url)] {
        let url = parse_url(field, value)?;
        let suffix = deployment_host_suffix(&session.env);
        let targets_env = url
            .host_str()
            .and_then(|host| host.strip_suffix(suffix.as_str()))
            .map(|service| !service.is_empty() && !service.contains('.'))
            .unwrap_or(false);
        if !targets_env {
            return Err(invalid(format!(
                "{field} ({value}) does not target deployment '{}'",
                session.env
            )));
        }
    }
    Ok(())
}

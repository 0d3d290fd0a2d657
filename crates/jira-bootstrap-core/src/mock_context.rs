//! Mock context generation for standalone mode
//!
//! Builds the fixed Jira fixture the simulator renders when the UI runs
//! outside the host application. Every timestamp is derived from a single
//! `now` input, so two builds at different instants differ only by that
//! delta.

use chrono::{DateTime, Duration, Utc};

use crate::config::BootstrapConfig;
use crate::model::{
    AgentStatus, Customer, InstalledLocation, IntegrationDescriptor, ProcessingState,
    ProcessingStatus, Publisher, Session, SimulationContext, User,
};
use crate::simulation_id::SimulationId;

const INTEGRATION_NAME: &str = "Jira";
const INTEGRATION_DESCRIPTION: &str = "The official Atlassian Jira integration for Pinpoint";
const INTEGRATION_TAG: &str = "Issue Management";
const INTEGRATION_REF_TYPE: &str = "jira";
const INTEGRATION_ICON: &str = "https://pinpoint.com/images/integrations/Jira.svg";

const PUBLISHER_NAME: &str = "Pinpoint";
const PUBLISHER_AVATAR: &str = "https://pinpoint.com/logo/logomark/blue.png";
const PUBLISHER_URL: &str = "https://pinpoint.com";

const AGENT_ENROLLMENT_ID: &str = "123";

const CUSTOMER_ID: &str = "359d4a0ffac0329c";
const CUSTOMER_NAME: &str = "Pinpoint";
const USER_NAME: &str = "Jeff Haynie";

/// Offsets from `now`, as (days, minutes)
const CREATED_AGO: (i64, i64) = (5, 1);
const EXPORT_COMPLETED_AGO: (i64, i64) = (5, 0);
const PROCESSED_AGO: (i64, i64) = (2, 0);
const THROTTLE_WINDOW_MINUTES: i64 = 42;

fn ago(now: DateTime<Utc>, (days, minutes): (i64, i64)) -> DateTime<Utc> {
    now - Duration::days(days) - Duration::minutes(minutes)
}

/// Whether every timestamp derived from `now` is representable
///
/// [`MockContextBuilder::build`] panics on overflow otherwise.
pub fn supports_instant(now: DateTime<Utc>) -> bool {
    let (days, minutes) = CREATED_AGO;
    let earliest = now.checked_sub_signed(Duration::days(days) + Duration::minutes(minutes));
    let latest = now.checked_add_signed(Duration::minutes(THROTTLE_WINDOW_MINUTES));
    earliest.is_some() && latest.is_some()
}

/// Host suffix every endpoint of a deployment shares: `.api.<env>.pinpoint.com`
pub fn deployment_host_suffix(env: &str) -> String {
    format!(".api.{env}.pinpoint.com")
}

/// GraphQL endpoint for a deployment tag
pub fn graphql_url(env: &str) -> String {
    format!("https://graph{}/graphql", deployment_host_suffix(env))
}

/// Auth endpoint for a deployment tag
pub fn auth_url(env: &str) -> String {
    format!("https://auth{}", deployment_host_suffix(env))
}

/// Builds the standalone [`SimulationContext`]
#[derive(Debug, Clone)]
pub struct MockContextBuilder {
    simulation_id: SimulationId,
    deployment_env: String,
    ui_url: String,
}

impl Default for MockContextBuilder {
    fn default() -> Self {
        Self::from_config(&BootstrapConfig::default())
    }
}

impl MockContextBuilder {
    pub fn from_config(config: &BootstrapConfig) -> Self {
        Self {
            simulation_id: SimulationId::new(config.simulation_id.clone()),
            deployment_env: config.deployment_env.clone(),
            ui_url: config.default_ui_url.clone(),
        }
    }

    /// Use the current page address as the integration's UI entry URL
    pub fn with_ui_url(mut self, ui_url: impl Into<String>) -> Self {
        self.ui_url = ui_url.into();
        self
    }

    pub fn with_simulation_id(mut self, id: SimulationId) -> Self {
        self.simulation_id = id;
        self
    }

    pub fn simulation_id(&self) -> &SimulationId {
        &self.simulation_id
    }

    /// Build the context as of `now`
    pub fn build(&self, now: DateTime<Utc>) -> SimulationContext {
        SimulationContext {
            integration: self.integration(),
            processing: Self::processing(now),
            agent: Self::agent(),
            session: self.session(),
        }
    }

    /// Build the context as of the wall clock
    pub fn build_now(&self) -> SimulationContext {
        self.build(Utc::now())
    }

    fn integration(&self) -> IntegrationDescriptor {
        IntegrationDescriptor {
            name: INTEGRATION_NAME.to_string(),
            description: INTEGRATION_DESCRIPTION.to_string(),
            tags: vec![INTEGRATION_TAG.to_string()],
            installed: false,
            ref_type: INTEGRATION_REF_TYPE.to_string(),
            icon: INTEGRATION_ICON.to_string(),
            publisher: Publisher {
                name: PUBLISHER_NAME.to_string(),
                avatar: PUBLISHER_AVATAR.to_string(),
                url: PUBLISHER_URL.to_string(),
            },
            ui_url: self.ui_url.clone(),
        }
    }

    fn processing(now: DateTime<Utc>) -> ProcessingStatus {
        let created = ago(now, CREATED_AGO);
        ProcessingStatus {
            created_date: created,
            processed: true,
            last_processed_date: ago(now, PROCESSED_AGO),
            // The first export was requested the moment the integration was created
            last_export_requested_date: created,
            last_export_completed_date: ago(now, EXPORT_COMPLETED_AGO),
            state: ProcessingState::Idle,
            // Expiry is populated to show the shape; throttling stays off
            throttled: false,
            throttled_until_date: now + Duration::minutes(THROTTLE_WINDOW_MINUTES),
            paused: false,
            location: InstalledLocation::Cloud,
        }
    }

    fn agent() -> AgentStatus {
        AgentStatus {
            enrollment_id: AGENT_ENROLLMENT_ID.to_string(),
            running: true,
        }
    }

    fn session(&self) -> Session {
        Session {
            customer: Customer {
                id: CUSTOMER_ID.to_string(),
                name: CUSTOMER_NAME.to_string(),
            },
            user: User {
                id: String::new(),
                name: USER_NAME.to_string(),
                avatar_url: String::new(),
            },
            env: self.deployment_env.clone(),
            graphql_url: graphql_url(&self.deployment_env),
            auth_url: auth_url(&self.deployment_env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_734_720_000_000).unwrap()
    }

    #[test]
    fn test_timestamp_offsets() {
        let now = fixed_now();
        let ctx = MockContextBuilder::default().build(now);
        let p = &ctx.processing;

        assert_eq!(now - p.created_date, Duration::days(5) + Duration::minutes(1));
        assert_eq!(p.last_export_requested_date, p.created_date);
        assert_eq!(now - p.last_export_completed_date, Duration::days(5));
        assert_eq!(now - p.last_processed_date, Duration::days(2));
        assert_eq!(p.throttled_until_date - now, Duration::minutes(42));
    }

    #[test]
    fn test_timestamps_ordered() {
        let now = fixed_now();
        let p = MockContextBuilder::default().build(now).processing;

        assert!(p.created_date <= p.last_export_requested_date);
        assert!(p.last_export_requested_date <= p.last_export_completed_date);
        assert!(p.last_export_completed_date <= p.last_processed_date);
        assert!(p.last_processed_date <= now);
    }

    #[test]
    fn test_fresh_install_state() {
        let ctx = MockContextBuilder::default().build(fixed_now());

        assert!(!ctx.integration.installed);
        assert_eq!(ctx.processing.state, ProcessingState::Idle);
        assert_eq!(ctx.processing.location, InstalledLocation::Cloud);
        assert!(ctx.processing.processed);
        assert!(!ctx.processing.paused);
        assert!(!ctx.processing.throttled);
        assert!(ctx.agent.running);
        assert!(!ctx.agent.enrollment_id.is_empty());
    }

    #[test]
    fn test_builds_differ_only_by_time_delta() {
        let builder = MockContextBuilder::default();
        let t0 = fixed_now();
        let t1 = t0 + Duration::milliseconds(1234);
        let a = builder.build(t0);
        let b = builder.build(t1);

        assert_eq!(a.integration, b.integration);
        assert_eq!(a.agent, b.agent);
        assert_eq!(a.session, b.session);

        let delta = t1 - t0;
        assert_eq!(b.processing.created_date - a.processing.created_date, delta);
        assert_eq!(
            b.processing.last_processed_date - a.processing.last_processed_date,
            delta
        );
        assert_eq!(
            b.processing.last_export_requested_date - a.processing.last_export_requested_date,
            delta
        );
        assert_eq!(
            b.processing.last_export_completed_date - a.processing.last_export_completed_date,
            delta
        );
        assert_eq!(
            b.processing.throttled_until_date - a.processing.throttled_until_date,
            delta
        );
    }

    #[test]
    fn test_session_targets_edge() {
        let session = MockContextBuilder::default().build(fixed_now()).session;

        assert_eq!(session.env, "edge");
        assert_eq!(session.graphql_url, "https://graph.api.edge.pinpoint.com/graphql");
        assert_eq!(session.auth_url, "https://auth.api.edge.pinpoint.com");
        assert_eq!(session.customer.id, "359d4a0ffac0329c");
        assert_eq!(session.user.name, "Jeff Haynie");
    }

    #[test]
    fn test_configured_env_flows_into_endpoints() {
        let config = BootstrapConfig::new().with_deployment_env("stable");
        let session = MockContextBuilder::from_config(&config)
            .build(fixed_now())
            .session;

        assert_eq!(session.env, "stable");
        assert!(session.graphql_url.contains(".stable."));
        assert!(session.auth_url.contains(".stable."));
    }

    #[test]
    fn test_supports_instant_at_range_edges() {
        assert!(supports_instant(fixed_now()));
        assert!(!supports_instant(DateTime::<Utc>::MAX_UTC));
        assert!(!supports_instant(DateTime::<Utc>::MIN_UTC));
        assert!(supports_instant(DateTime::<Utc>::MAX_UTC - Duration::minutes(42)));
        assert!(supports_instant(
            DateTime::<Utc>::MIN_UTC + Duration::days(5) + Duration::minutes(1)
        ));
    }

    #[test]
    fn test_ui_url_override() {
        let ctx = MockContextBuilder::default()
            .with_ui_url("http://localhost:3000/setup")
            .build(fixed_now());
        assert_eq!(ctx.integration.ui_url, "http://localhost:3000/setup");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(MockContextBuilder::default().build(fixed_now())).unwrap();

        assert_eq!(json["integration"]["refType"], "jira");
        assert_eq!(json["integration"]["uiURL"], "http://localhost:3000/");
        assert_eq!(json["integration"]["installed"], false);
        assert_eq!(json["processingDetail"]["state"], "IDLE");
        assert_eq!(json["selfManagedAgent"]["enrollment_id"], "123");
        assert_eq!(json["session"]["user"]["avatar_url"], "");
        assert_eq!(json["session"]["graphqlUrl"], "https://graph.api.edge.pinpoint.com/graphql");
    }
}

//! String enums shared with the host platform.
//!
//! Each enum has one snake_case spelling used for display, [`FromStr`]
//! parsing and serde, so a value read from TOML, YAML or JSON round-trips to
//! the same string the host expects. Unknown strings are rejected.
//!
//! [`FromStr`]: std::str::FromStr
//!
//! # Examples
//!
//! ```
//! use connector_sdk_core::{ConnectorCategory, TriggerStrategy};
//! use strum::VariantNames;
//!
//! assert_eq!("webhook".parse::<TriggerStrategy>().unwrap(), TriggerStrategy::Webhook);
//! assert_eq!(ConnectorCategory::DeveloperTools.to_string(), "developer_tools");
//! assert!(TriggerStrategy::VARIANTS.contains(&"polling"));
//! ```

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// How a trigger learns about new events.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TriggerStrategy {
    /// The host polls the trigger on an interval (the default).
    #[default]
    Polling,
    /// The provider calls a per-flow webhook URL.
    Webhook,
    /// Fired on a cron-like schedule.
    Scheduled,
    /// The provider calls one app-level webhook shared by all flows.
    AppWebhook,
    /// Fired explicitly by a user.
    Manual,
}

/// Credential scheme used by a connector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthType {
    #[default]
    None,
    #[serde(rename = "oauth2")]
    #[strum(serialize = "oauth2")]
    OAuth2,
    Basic,
    Secret,
    Custom,
}

/// Catalog group a connector is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConnectorCategory {
    #[default]
    App,
    Core,
    Ai,
    Communication,
    Productivity,
    DeveloperTools,
    Finance,
    Marketing,
    Storage,
    Utility,
}

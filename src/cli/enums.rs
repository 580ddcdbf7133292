//! Value enums for CLI filters

use clap::ValueEnum;

/// Alert status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertStatus {
    New,
    Assigned,
    Closed,
    Escalated,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::New => "new",
            AlertStatus::Assigned => "assigned",
            AlertStatus::Closed => "closed",
            AlertStatus::Escalated => "escalated",
        }
    }
}

/// Incident status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IncidentStatus {
    Open,
    Assigned,
    Closed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Assigned => "assigned",
            IncidentStatus::Closed => "closed",
        }
    }
}

/// Timestamp field an alert time range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertTimeField {
    #[value(name = "firstSeen", alias = "first-seen")]
    FirstSeen,
    #[value(name = "lastSeen", alias = "last-seen")]
    LastSeen,
}

impl AlertTimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertTimeField::FirstSeen => "firstSeen",
            AlertTimeField::LastSeen => "lastSeen",
        }
    }
}

/// Timestamp field an incident time range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IncidentTimeField {
    #[value(name = "createdAt", alias = "created-at")]
    CreatedAt,
    #[value(name = "updatedAt", alias = "updated-at")]
    UpdatedAt,
}

impl IncidentTimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentTimeField::CreatedAt => "createdAt",
            IncidentTimeField::UpdatedAt => "updatedAt",
        }
    }
}

/// Resource kinds known to KUMA Core
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Collector,
    Correlator,
    Storage,
    #[value(name = "activeList")]
    ActiveList,
    #[value(name = "aggregationRule")]
    AggregationRule,
    Connector,
    #[value(name = "correlationRule")]
    CorrelationRule,
    Dictionary,
    #[value(name = "enrichmentRule")]
    EnrichmentRule,
    Destination,
    Filter,
    Normalizer,
    #[value(name = "responseRule")]
    ResponseRule,
    Search,
    Agent,
    Proxy,
    Secret,
    #[value(name = "contextTable")]
    ContextTable,
    #[value(name = "emailTemplate")]
    EmailTemplate,
    #[value(name = "segmentationRule")]
    SegmentationRule,
    #[value(name = "eventRouter")]
    EventRouter,
}

impl ResourceKind {
    /// Kind as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Collector => "collector",
            ResourceKind::Correlator => "correlator",
            ResourceKind::Storage => "storage",
            ResourceKind::ActiveList => "activeList",
            ResourceKind::AggregationRule => "aggregationRule",
            ResourceKind::Connector => "connector",
            ResourceKind::CorrelationRule => "correlationRule",
            ResourceKind::Dictionary => "dictionary",
            ResourceKind::EnrichmentRule => "enrichmentRule",
            ResourceKind::Destination => "destination",
            ResourceKind::Filter => "filter",
            ResourceKind::Normalizer => "normalizer",
            ResourceKind::ResponseRule => "responseRule",
            ResourceKind::Search => "search",
            ResourceKind::Agent => "agent",
            ResourceKind::Proxy => "proxy",
            ResourceKind::Secret => "secret",
            ResourceKind::ContextTable => "contextTable",
            ResourceKind::EmailTemplate => "emailTemplate",
            ResourceKind::SegmentationRule => "segmentationRule",
            ResourceKind::EventRouter => "eventRouter",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

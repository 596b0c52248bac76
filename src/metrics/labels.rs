//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

use crate::ports::PortGroup;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct GroupLabels {
    pub group: String,
}

impl From<&PortGroup> for GroupLabels {
    fn from(group: &PortGroup) -> Self {
        Self {
            group: group.command_target(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PortLabels {
    pub port: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ReadLabels {
    pub cached: String,
}

impl ReadLabels {
    #[must_use]
    pub fn new(cached: bool) -> Self {
        Self {
            cached: cached.to_string(),
        }
    }
}

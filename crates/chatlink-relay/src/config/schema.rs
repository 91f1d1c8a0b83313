use serde::Deserialize;

use chatlink_core::error::{ChatLinkError, Result};
use chatlink_core::protocol::{CHANNEL_NAME, MAX_PAYLOAD_BYTES};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    pub version: u32,

    #[serde(default)]
    pub relay: RelaySection,
}

impl RelayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChatLinkError::UnsupportedVersion);
        }
        self.relay.validate()?;
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            relay: RelaySection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySection {
    /// Channel tag this relay claims on the shared transport.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Inbound payload cap. May be tightened below the u16 framing limit,
    /// never raised above it.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl RelaySection {
    pub fn validate(&self) -> Result<()> {
        if self.channel.is_empty() {
            return Err(ChatLinkError::BadConfig(
                "relay.channel must not be empty".into(),
            ));
        }
        if !(1..=MAX_PAYLOAD_BYTES).contains(&self.max_payload_bytes) {
            return Err(ChatLinkError::BadConfig(format!(
                "relay.max_payload_bytes must be between 1 and {MAX_PAYLOAD_BYTES}"
            )));
        }
        Ok(())
    }
}

fn default_channel() -> String {
    CHANNEL_NAME.into()
}
fn default_max_payload_bytes() -> usize {
    MAX_PAYLOAD_BYTES
}

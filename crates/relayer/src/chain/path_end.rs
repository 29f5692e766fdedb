use core::fmt::{Display, Error as FmtError, Formatter};

use serde_derive::{Deserialize, Serialize};

use ibc_packet_relay_types::core::ics24_host::identifier::{ChannelId, PortId};

/// One end of a channel: the port and channel identifiers under which a
/// chain stores the packet state of that channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PathEnd {
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl PathEnd {
    pub fn new(port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }
}

impl Display for PathEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.port_id, self.channel_id)
    }
}

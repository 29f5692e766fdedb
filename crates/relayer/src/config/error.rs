use std::io;
use std::path::PathBuf;

use flex_error::{define_error, TraceError};

use ibc_packet_relay_types::core::ics24_host::identifier::ChainId;

define_error! {
    Error {
        Io
            { path: PathBuf }
            [ TraceError<io::Error> ]
            |e| { format!("cannot access config file {}", e.path.display()) },

        Decode
            { path: PathBuf }
            [ TraceError<toml::de::Error> ]
            |e| { format!("config file {} is not a valid configuration", e.path.display()) },

        Encode
            [ TraceError<toml::ser::Error> ]
            |_| { "configuration cannot be serialized to TOML" },

        Write
            [ TraceError<io::Error> ]
            |_| { "failed to write the serialized configuration" },

        DuplicateChains
            { chain_id: ChainId }
            |e| { format!("chain {} is configured more than once", e.chain_id) },
    }
}

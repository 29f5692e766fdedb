use core::num::ParseIntError;

use flex_error::{define_error, TraceError};

use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        Identifier
            [ ValidationError ]
            | _ | { "invalid port or channel identifier in packet" },

        ZeroPacketSequence
            | _ | { "packet sequence 0 is never assigned" },

        ZeroPacketData
            | _ | { "packet carries no data" },

        InvalidTimeoutHeight
            [ Ics02Error ]
            | _ | { "packet timeout height is neither `0-0` nor a valid height" },

        InvalidStringAsSequence
            { value: String }
            [ TraceError<ParseIntError> ]
            | e | { format_args!("`{}` is not a packet sequence", e.value) },

        InvalidAcknowledgement
            | _ | { "acknowledgement bytes are empty" },
    }
}

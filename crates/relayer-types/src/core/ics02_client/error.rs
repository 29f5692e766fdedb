use core::num::ParseIntError;

use flex_error::{define_error, TraceError};

use crate::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidHeight
            | _ | { "height cannot end up zero or negative" },

        InvalidHeightResult
            { height: Height, delta: u64 }
            | e | {
                format_args!("height {0} cannot be lowered by {1} without reaching zero",
                    e.height, e.delta)
            },

        HeightConversion
            { height: String }
            [ TraceError<ParseIntError> ]
            | e | {
                format_args!("cannot convert into a `Height` type from string {0}",
                    e.height)
            },
    }
}

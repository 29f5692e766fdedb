use flex_error::define_error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    ValidationError {
        Empty
            | _ | { "identifier is empty" },

        ContainSeparator
            { id: String }
            | e | { format_args!("identifier `{}` contains the path separator `/`", e.id) },

        InvalidLength
            {
                id: String,
                length: usize,
                min: usize,
                max: usize,
            }
            | e | {
                format_args!("identifier `{}` is {} characters long, expected {} to {}",
                    e.id, e.length, e.min, e.max)
            },

        InvalidCharacter
            { id: String }
            | e | {
                format_args!("identifier `{}` contains characters other than alphanumerics and `{}`",
                    e.id, crate::core::ics24_host::validate::VALID_SPECIAL_CHARS)
            },
    }
}

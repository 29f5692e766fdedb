use serde::ser::{Error, Serializer};
use subtle_encoding::hex;

pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = String::from_utf8(hex::encode_upper(data)).map_err(S::Error::custom)?;
    serializer.serialize_str(&hex)
}

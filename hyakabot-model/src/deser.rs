use std::fmt;

use serde::de::{Error, Unexpected, Visitor};
use time::OffsetDateTime;

pub(super) mod epoch_millis {
    use serde::Deserializer;

    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<OffsetDateTime, D::Error> {
        d.deserialize_any(EpochMillis)
    }

    pub(super) struct EpochMillis;

    impl<'de> Visitor<'de> for EpochMillis {
        type Value = OffsetDateTime;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a unix timestamp in milliseconds, as integer or string")
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
            OffsetDateTime::from_unix_timestamp_nanos(v as i128 * 1_000_000)
                .map_err(|_| Error::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
            OffsetDateTime::from_unix_timestamp_nanos(v as i128 * 1_000_000)
                .map_err(|_| Error::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
            let millis: i64 = v
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(v), &self))?;

            self.visit_i64(millis)
        }
    }
}

//! UTC timestamp formatting shared by entities and error envelopes.
//!
//! Moments go over the wire as RFC 3339 with whole seconds and a `Z`
//! suffix, e.g. `2019-06-20T19:53:07Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serialize a UTC moment with second precision
pub fn serialize<S>(moment: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(moment))
}

/// Format a UTC moment with second precision
pub fn format(moment: &DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_drops_subseconds() {
        let moment = DateTime::parse_from_rfc3339("2019-06-20T19:53:07.250Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format(&moment), "2019-06-20T19:53:07Z");
    }
}

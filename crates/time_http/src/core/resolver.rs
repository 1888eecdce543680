use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{TimeServerError, TimeServerResult},
    models::LocalTimeInZone,
    utils::{self, OFFSET_TIME_FORMAT, REFERENCE_TIMEZONE},
};

/// Converts instants into local times across IANA timezones.
///
/// The resolver never reads the clock itself; callers pass the instant in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneTimeResolver;

impl ZoneTimeResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_zone(&self, identifier: &str) -> TimeServerResult<Tz> {
        Tz::from_str(identifier).map_err(|_| TimeServerError::UnknownZone {
            identifier: identifier.to_string(),
        })
    }

    /// Resolve `instant` in every zone of `zones`, in order.
    ///
    /// Duplicates are resolved independently. The first unknown zone aborts
    /// the whole call.
    pub fn resolve<S>(
        &self,
        instant: DateTime<Utc>,
        zones: &[S],
    ) -> TimeServerResult<Vec<LocalTimeInZone>>
    where
        S: AsRef<str>,
    {
        zones
            .iter()
            .map(|zone| self.resolve_one(instant, zone.as_ref()))
            .collect()
    }

    fn resolve_one(
        &self,
        instant: DateTime<Utc>,
        identifier: &str,
    ) -> TimeServerResult<LocalTimeInZone> {
        let timezone = self.parse_zone(identifier)?;
        let local = instant.with_timezone(&timezone);

        Ok(LocalTimeInZone {
            time_zone: timezone.name().to_string(),
            local_time: utils::format_local_time(&local),
        })
    }

    /// Full offset datetime of `instant` in the reference zone
    pub fn resolve_reference(&self, instant: DateTime<Utc>) -> String {
        utils::format_zoned_datetime(&instant.with_timezone(&REFERENCE_TIMEZONE))
    }

    /// Offset time (`HH:MM:SS+HH:MM`) of `instant` in `zone`
    pub fn local_offset_time(&self, instant: DateTime<Utc>, zone: Tz) -> String {
        instant
            .with_timezone(&zone)
            .format(OFFSET_TIME_FORMAT)
            .to_string()
    }
}

/// Detect the host's IANA timezone, falling back to UTC
pub fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}

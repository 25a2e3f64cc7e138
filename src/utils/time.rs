use chrono::{DateTime, Utc};

pub const SECONDS_PER_HOUR: f64 = 3600.;

/// This is the standard way of storing a moment in time-hedge: fractional seconds since the Unix
/// epoch.
pub fn epoch_seconds(moment: DateTime<Utc>) -> f64 {
    moment.timestamp() as f64 + f64::from(moment.timestamp_subsec_nanos()) / 1e9
}

/// Hours passed between two epoch timestamps. Negative if `to` is before `from`.
pub fn hours_between(from: f64, to: f64) -> f64 {
    (to - from) / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{epoch_seconds, hours_between};

    #[test]
    fn epoch_seconds_keeps_fraction() {
        let moment = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(epoch_seconds(moment), 1_700_000_000.5);
        assert_eq!(epoch_seconds(Utc.timestamp_opt(0, 0).unwrap()), 0.);
    }

    #[test]
    fn hours_between_epochs() {
        let start = Utc.with_ymd_and_hms(2024, 4, 5, 9, 0, 0).unwrap();
        let end = start + Duration::minutes(150);
        assert_eq!(hours_between(epoch_seconds(start), epoch_seconds(end)), 2.5);
        assert_eq!(hours_between(epoch_seconds(end), epoch_seconds(start)), -2.5);
    }
}

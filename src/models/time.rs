use serde::*;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(qtty::Days);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Shift by a number of (possibly fractional) days.
    pub fn offset_days(&self, days: f64) -> Self {
        Self::new(self.value() + days)
    }

    /// Shift by a number of (possibly fractional) hours.
    pub fn offset_hours(&self, hours: f64) -> Self {
        Self::new(self.value() + hours / 24.0)
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.value() - 40587.0) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + 40587.0)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos)
            .unwrap_or_else(|| chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}

impl std::ops::Sub for ModifiedJulianDate {
    type Output = qtty::Days;

    fn sub(self, rhs: Self) -> qtty::Days {
        qtty::Days::new(self.value() - rhs.value())
    }
}

#[cfg(test)]
mod tests {
    use super::ModifiedJulianDate;

    #[test]
    fn test_mjd_new_and_value() {
        let mjd = ModifiedJulianDate::new(61000.5);
        assert_eq!(mjd.value(), 61000.5);
    }

    #[test]
    fn test_mjd_offset_days() {
        let mjd = ModifiedJulianDate::new(61000.0);
        assert_eq!(mjd.offset_days(365.0).value(), 61365.0);
        assert_eq!(mjd.offset_days(-0.5).value(), 60999.5);
    }

    #[test]
    fn test_mjd_offset_hours() {
        let mjd = ModifiedJulianDate::new(61000.0);
        assert!((mjd.offset_hours(12.0).value() - 61000.5).abs() < 1e-12);
    }

    #[test]
    fn test_mjd_sub_gives_days() {
        let a = ModifiedJulianDate::new(61003.25);
        let b = ModifiedJulianDate::new(61000.0);
        assert!(((a - b).value() - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_mjd_ordering() {
        assert!(ModifiedJulianDate::new(60000.0) < ModifiedJulianDate::new(60001.0));
    }

    #[test]
    fn test_mjd_unix_epoch() {
        // MJD 40587.0 corresponds to the Unix epoch (1970-01-01)
        let mjd = ModifiedJulianDate::new(40587.0);
        assert!(mjd.to_unix_timestamp().abs() < 1.0);
    }

    #[test]
    fn test_mjd_roundtrip_datetime() {
        let original = ModifiedJulianDate::new(61771.276910532266);
        let roundtrip = ModifiedJulianDate::from_datetime(original.to_datetime());
        assert!((original.value() - roundtrip.value()).abs() < 1e-9);
    }
}

//! Device-local time.
//!
//! The watch keeps local wall-clock time, so every timestamp the host sends
//! is the Unix time shifted by the host's UTC offset.

use chrono::{Local, Offset};

/// A Unix timestamp paired with the UTC offset it should be shifted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceTime {
    /// Seconds since the Unix epoch (UTC).
    pub unix_secs: i64,
    /// Local offset from UTC in seconds (east positive).
    pub utc_offset_secs: i32,
}

impl DeviceTime {
    /// Capture the current time and local UTC offset.
    pub fn now() -> Self {
        let now = Local::now();
        DeviceTime {
            unix_secs: now.timestamp(),
            utc_offset_secs: now.offset().fix().local_minus_utc(),
        }
    }

    /// Build a device time from explicit parts.
    pub fn new(unix_secs: i64, utc_offset_secs: i32) -> Self {
        DeviceTime {
            unix_secs,
            utc_offset_secs,
        }
    }

    /// Seconds since the epoch as seen on the watch's local clock.
    pub fn local_secs(&self) -> i64 {
        self.unix_secs + i64::from(self.utc_offset_secs)
    }

    /// Local seconds in the decimal string form used by notifications.
    pub fn to_notification_string(&self) -> String {
        self.local_secs().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_secs_applies_offset() {
        let t = DeviceTime::new(1_700_000_000, 3600);
        assert_eq!(t.local_secs(), 1_700_003_600);

        let t = DeviceTime::new(1_700_000_000, -5 * 3600);
        assert_eq!(t.local_secs(), 1_699_982_000);
    }

    #[test]
    fn test_notification_string() {
        let t = DeviceTime::new(1_700_000_000, 0);
        assert_eq!(t.to_notification_string(), "1700000000");
    }

    #[test]
    fn test_now_is_after_epoch() {
        let t = DeviceTime::now();
        assert!(t.unix_secs > 1_600_000_000);
        assert!(t.utc_offset_secs.abs() <= 14 * 3600);
    }
}

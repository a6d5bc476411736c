//! Protocol constants
//!
//! Endpoint identifiers, per-endpoint command codes, capability bits and
//! fixed payload lengths used on the Pebble wire protocol.

// ============================================================================
// Endpoints
// ============================================================================

/// Firmware update endpoint.
pub const ENDPOINT_FIRMWARE: u16 = 1;
/// Watch clock.
pub const ENDPOINT_TIME: u16 = 11;
/// Firmware version query and reply.
pub const ENDPOINT_FIRMWARE_VERSION: u16 = 16;
/// Host version / capability negotiation.
pub const ENDPOINT_PHONE_VERSION: u16 = 17;
/// System messages.
pub const ENDPOINT_SYSTEM_MESSAGE: u16 = 18;
/// Music metadata and playback control.
pub const ENDPOINT_MUSIC_CONTROL: u16 = 32;
/// Call state and call control.
pub const ENDPOINT_PHONE_CONTROL: u16 = 33;
/// Messages addressed to watch applications.
pub const ENDPOINT_APPLICATION_MESSAGE: u16 = 48;
/// Application launcher.
pub const ENDPOINT_LAUNCHER: u16 = 49;
/// Device logs.
pub const ENDPOINT_LOGS: u16 = 2000;
/// Ping / pong.
pub const ENDPOINT_PING: u16 = 2001;
/// Log dump.
pub const ENDPOINT_LOG_DUMP: u16 = 2002;
/// Device reset.
pub const ENDPOINT_RESET: u16 = 2003;
/// Application endpoint.
pub const ENDPOINT_APP: u16 = 2004;
/// Application logs.
pub const ENDPOINT_APP_LOGS: u16 = 2006;
/// Notifications (email, SMS, social).
pub const ENDPOINT_NOTIFICATION: u16 = 3000;
/// Resources.
pub const ENDPOINT_RESOURCE: u16 = 4000;
/// System registry.
pub const ENDPOINT_SYS_REG: u16 = 5000;
/// Factory registry.
pub const ENDPOINT_FCT_REG: u16 = 5001;
/// Installed application management.
pub const ENDPOINT_APP_MANAGER: u16 = 6000;
/// Data logging.
pub const ENDPOINT_DATA_LOG: u16 = 6778;
/// RunKeeper.
pub const ENDPOINT_RUNKEEPER: u16 = 7000;
/// Screenshots.
pub const ENDPOINT_SCREENSHOT: u16 = 8000;
/// Bulk binary upload.
pub const ENDPOINT_PUT_BYTES: u16 = 48879;

// ============================================================================
// Notification Kinds (ENDPOINT_NOTIFICATION)
// ============================================================================

/// Email notification.
pub const NOTIFICATION_EMAIL: u8 = 0;
/// SMS notification.
pub const NOTIFICATION_SMS: u8 = 1;
/// Twitter notification.
pub const NOTIFICATION_TWITTER: u8 = 2;
/// Facebook notification.
pub const NOTIFICATION_FACEBOOK: u8 = 3;

// ============================================================================
// Phone Control Codes (ENDPOINT_PHONE_CONTROL)
// ============================================================================

/// Answer the call.
pub const PHONE_CONTROL_ANSWER: u8 = 1;
/// Hang up (the only code the watch sends that is acted on).
pub const PHONE_CONTROL_HANGUP: u8 = 2;
/// Query call state.
pub const PHONE_CONTROL_GET_STATE: u8 = 3;
/// Incoming call.
pub const PHONE_CONTROL_INCOMING_CALL: u8 = 4;
/// Outgoing call.
pub const PHONE_CONTROL_OUTGOING_CALL: u8 = 5;
/// Missed call.
pub const PHONE_CONTROL_MISSED_CALL: u8 = 6;
/// Ringing.
pub const PHONE_CONTROL_RING: u8 = 7;
/// Call started.
pub const PHONE_CONTROL_START: u8 = 8;
/// Call ended.
pub const PHONE_CONTROL_END: u8 = 9;

/// Correlation cookie carried by every phone-control frame. Always zero.
pub const PHONE_CONTROL_COOKIE: i32 = 0;

// ============================================================================
// Music Control Codes (ENDPOINT_MUSIC_CONTROL)
// ============================================================================

/// Toggle play/pause.
pub const MUSIC_CONTROL_PLAY_PAUSE: u8 = 1;
/// Pause.
pub const MUSIC_CONTROL_PAUSE: u8 = 2;
/// Play.
pub const MUSIC_CONTROL_PLAY: u8 = 3;
/// Next track.
pub const MUSIC_CONTROL_NEXT: u8 = 4;
/// Previous track.
pub const MUSIC_CONTROL_PREVIOUS: u8 = 5;
/// Volume up.
pub const MUSIC_CONTROL_VOLUME_UP: u8 = 6;
/// Volume down.
pub const MUSIC_CONTROL_VOLUME_DOWN: u8 = 7;
/// Push artist/album/track metadata to the watch.
pub const MUSIC_CONTROL_SET_MUSIC_INFO: u8 = 16;

// ============================================================================
// Time, Firmware Version and App Manager Codes
// ============================================================================

/// Read the watch clock.
pub const TIME_GET_TIME: u8 = 0;
/// Set the watch clock.
pub const TIME_SET_TIME: u8 = 2;

/// Request the firmware version.
pub const FIRMWARE_VERSION_GET_VERSION: u8 = 0;

/// Query the installed application banks.
pub const APP_MANAGER_GET_APP_BANK_STATUS: u8 = 1;
/// Remove an installed application.
pub const APP_MANAGER_REMOVE_APP: u8 = 2;

/// Result code the watch sends when an app was removed.
pub const APP_MANAGER_RES_SUCCESS: i32 = 1;

// ============================================================================
// Phone Version / Capability Negotiation (ENDPOINT_PHONE_VERSION)
// ============================================================================

/// Marker byte in the command position of the phone-version reply.
pub const PHONE_VERSION_MARKER: u8 = 0x01;
/// Sentinel word following the marker.
pub const PHONE_VERSION_SENTINEL: i32 = -1;

/// Protocol magic of this codec's version. Bump it if the watch rejects us.
pub const APP_VERSION_MAGIC: u8 = 2;
/// Major version of this codec.
pub const APP_VERSION_MAJOR: u8 = 2;
/// Minor version of this codec.
pub const APP_VERSION_MINOR: u8 = 3;
/// Patch version of this codec.
pub const APP_VERSION_PATCH: u8 = 0;

/// Session capability: remote debugging ("gammaray").
pub const SESSION_CAPS_GAMMARAY: u32 = 0x8000_0000;

/// Remote capability: telephony.
pub const REMOTE_CAPS_TELEPHONY: u32 = 0x0000_0010;
/// Remote capability: SMS.
pub const REMOTE_CAPS_SMS: u32 = 0x0000_0020;
/// Remote capability: GPS.
pub const REMOTE_CAPS_GPS: u32 = 0x0000_0040;
/// Remote capability: Bluetooth LE.
pub const REMOTE_CAPS_BTLE: u32 = 0x0000_0080;
/// Remote capability: rear camera.
pub const REMOTE_CAPS_REAR_CAMERA: u32 = 0x0000_0100;
/// Remote capability: accelerometer.
pub const REMOTE_CAPS_ACCEL: u32 = 0x0000_0200;
/// Remote capability: gyroscope.
pub const REMOTE_CAPS_GYRO: u32 = 0x0000_0400;
/// Remote capability: compass.
pub const REMOTE_CAPS_COMPASS: u32 = 0x0000_0800;

/// Remote OS: unknown.
pub const REMOTE_OS_UNKNOWN: u8 = 0;
/// Remote OS: iOS.
pub const REMOTE_OS_IOS: u8 = 1;
/// Remote OS: Android.
pub const REMOTE_OS_ANDROID: u8 = 2;
/// Remote OS: OS X.
pub const REMOTE_OS_OSX: u8 = 3;
/// Remote OS: Linux.
pub const REMOTE_OS_LINUX: u8 = 4;
/// Remote OS: Windows.
pub const REMOTE_OS_WINDOWS: u8 = 5;

// ============================================================================
// Sizes
// ============================================================================

/// Bytes preceding the length-counted part of a frame (length + endpoint).
pub const LENGTH_PREFIX: usize = 4;
/// Full header size: length, endpoint and command byte.
pub const HEADER_SIZE: usize = 5;
/// Declared length of a set-time frame.
pub const LENGTH_SET_TIME: u16 = 5;
/// Declared length of a remove-app frame.
pub const LENGTH_REMOVE_APP: u16 = 9;
/// Declared length of a phone-version frame.
pub const LENGTH_PHONE_VERSION: u16 = 17;

/// Longest Pascal string body; longer inputs are truncated.
pub const MAX_PASCAL_STRING_LEN: usize = 255;
/// Width of the fixed text fields in firmware and app descriptors.
pub const FIXED_STRING_LEN: usize = 32;
/// Size of one app-bank record: id, index, name, creator, flags, version.
pub const APP_RECORD_SIZE: usize = 4 + 4 + FIXED_STRING_LEN + FIXED_STRING_LEN + 4 + 2;

/// Timestamp value asking `encode_set_time` to use the current local time.
pub const SET_TIME_NOW: i64 = -1;

//! Commands that can be sent to the watch.

use crate::constants::*;
use crate::frame::{encode_message, FrameWriter};
use crate::time::DeviceTime;
use crate::types::*;

/// Messages the host sends to the watch.
///
/// Timestamps are device-local seconds (see [`DeviceTime::local_secs`]).
/// The `encode_*` functions below build these with the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SMS notification.
    SmsNotification {
        /// Sender.
        from: String,
        /// Message text.
        body: String,
        /// Device-local receive time.
        timestamp: i64,
    },

    /// Email notification.
    EmailNotification {
        /// Sender.
        from: String,
        /// Subject line.
        subject: String,
        /// Message text.
        body: String,
        /// Device-local receive time.
        timestamp: i64,
    },

    /// Set the watch clock.
    SetTime {
        /// Device-local seconds; truncated to 32 bits on the wire.
        timestamp: i64,
    },

    /// Report the phone's call state.
    SetCallState {
        /// Phone number.
        number: String,
        /// Contact name.
        name: String,
        /// New call state.
        state: CallState,
    },

    /// Push now-playing metadata.
    SetMusicInfo {
        artist: String,
        album: String,
        track: String,
    },

    /// Ask for the firmware version.
    FirmwareVersionRequest,

    /// Ask for the installed application banks.
    AppInfoRequest,

    /// Remove an installed application.
    AppDelete {
        /// Application id.
        id: i32,
        /// Bank index.
        index: i32,
    },

    /// Answer the watch's version request with host capabilities.
    PhoneVersion {
        /// Raw OS byte of the host.
        os: u8,
    },
}

impl Command {
    /// The endpoint this command is sent to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Command::SmsNotification { .. } | Command::EmailNotification { .. } => {
                Endpoint::Notification
            }
            Command::SetTime { .. } => Endpoint::Time,
            Command::SetCallState { .. } => Endpoint::PhoneControl,
            Command::SetMusicInfo { .. } => Endpoint::MusicControl,
            Command::FirmwareVersionRequest => Endpoint::FirmwareVersion,
            Command::AppInfoRequest | Command::AppDelete { .. } => Endpoint::AppManager,
            Command::PhoneVersion { .. } => Endpoint::PhoneVersion,
        }
    }

    /// The command byte, or `None` for call states that have no single
    /// frame of their own.
    pub fn code(&self) -> Option<u8> {
        match self {
            Command::SmsNotification { .. } => Some(NOTIFICATION_SMS),
            Command::EmailNotification { .. } => Some(NOTIFICATION_EMAIL),
            Command::SetTime { .. } => Some(TIME_SET_TIME),
            Command::SetCallState { state, .. } => state.phone_control_code(),
            Command::SetMusicInfo { .. } => Some(MUSIC_CONTROL_SET_MUSIC_INFO),
            Command::FirmwareVersionRequest => Some(FIRMWARE_VERSION_GET_VERSION),
            Command::AppInfoRequest => Some(APP_MANAGER_GET_APP_BANK_STATUS),
            Command::AppDelete { .. } => Some(APP_MANAGER_REMOVE_APP),
            Command::PhoneVersion { .. } => Some(PHONE_VERSION_MARKER),
        }
    }

    /// Encode the command to wire bytes.
    ///
    /// Never fails. A call state the watch cannot show yields an empty
    /// vector, which is not a frame and must not be sent.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Command::SmsNotification {
                from,
                body,
                timestamp,
            } => {
                let ts = timestamp.to_string();
                encode_message(
                    ENDPOINT_NOTIFICATION,
                    NOTIFICATION_SMS,
                    &[from.as_str(), body.as_str(), ts.as_str()],
                )
            }

            Command::EmailNotification {
                from,
                subject,
                body,
                timestamp,
            } => {
                // Body goes before subject on the wire.
                let ts = timestamp.to_string();
                encode_message(
                    ENDPOINT_NOTIFICATION,
                    NOTIFICATION_EMAIL,
                    &[from.as_str(), body.as_str(), ts.as_str(), subject.as_str()],
                )
            }

            Command::SetTime { timestamp } => FrameWriter::new(ENDPOINT_TIME, TIME_SET_TIME)
                .put_u32(*timestamp as u32)
                .finish(),

            Command::SetCallState {
                number,
                name,
                state,
            } => encode_call_state(number, name, *state),

            Command::SetMusicInfo {
                artist,
                album,
                track,
            } => encode_message(
                ENDPOINT_MUSIC_CONTROL,
                MUSIC_CONTROL_SET_MUSIC_INFO,
                &[artist.as_str(), album.as_str(), track.as_str()],
            ),

            Command::FirmwareVersionRequest => {
                encode_message(ENDPOINT_FIRMWARE_VERSION, FIRMWARE_VERSION_GET_VERSION, &[])
            }

            Command::AppInfoRequest => {
                encode_message(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &[])
            }

            Command::AppDelete { id, index } => {
                FrameWriter::new(ENDPOINT_APP_MANAGER, APP_MANAGER_REMOVE_APP)
                    .put_i32(*id)
                    .put_i32(*index)
                    .finish()
            }

            Command::PhoneVersion { os } => {
                let session_caps = if *os == HOST_OS.code() {
                    SESSION_CAPS_GAMMARAY
                } else {
                    0
                };
                let remote_caps = REMOTE_CAPS_SMS | REMOTE_CAPS_TELEPHONY | u32::from(*os);

                FrameWriter::new(ENDPOINT_PHONE_VERSION, PHONE_VERSION_MARKER)
                    .put_i32(PHONE_VERSION_SENTINEL)
                    .put_u32(session_caps)
                    .put_u32(remote_caps)
                    .put_u8(APP_VERSION_MAGIC)
                    .put_u8(APP_VERSION_MAJOR)
                    .put_u8(APP_VERSION_MINOR)
                    .put_u8(APP_VERSION_PATCH)
                    .finish()
            }
        }
    }
}

fn encode_call_state(number: &str, name: &str, state: CallState) -> Vec<u8> {
    let parts = [number, name];
    match state {
        CallState::Outgoing => {
            // The watch has no working outgoing-call screen. Sending incoming
            // then start shows the call without vibrating.
            let mut frames = encode_message(
                ENDPOINT_PHONE_CONTROL,
                PHONE_CONTROL_INCOMING_CALL,
                &parts,
            );
            frames.extend(encode_message(ENDPOINT_PHONE_CONTROL, PHONE_CONTROL_START, &parts));
            frames
        }
        other => match other.phone_control_code() {
            Some(code) => encode_message(ENDPOINT_PHONE_CONTROL, code, &parts),
            None => {
                log::debug!("call state {:?} has no watch representation", other);
                Vec::new()
            }
        },
    }
}

// ============================================================================
// Convenience Encoders
// ============================================================================

/// Encode an SMS notification stamped with the current local time.
pub fn encode_sms(from: &str, body: &str) -> Vec<u8> {
    Command::SmsNotification {
        from: from.to_string(),
        body: body.to_string(),
        timestamp: DeviceTime::now().local_secs(),
    }
    .encode()
}

/// Encode an email notification stamped with the current local time.
pub fn encode_email(from: &str, subject: &str, body: &str) -> Vec<u8> {
    Command::EmailNotification {
        from: from.to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        timestamp: DeviceTime::now().local_secs(),
    }
    .encode()
}

/// Encode a set-time frame. Pass [`SET_TIME_NOW`] to use the current
/// local time.
pub fn encode_set_time(timestamp: i64) -> Vec<u8> {
    let timestamp = if timestamp == SET_TIME_NOW {
        DeviceTime::now().local_secs()
    } else {
        timestamp
    };
    Command::SetTime { timestamp }.encode()
}

/// Encode a call state change. Returns an empty vector for states the
/// watch cannot display, and two frames for [`CallState::Outgoing`].
pub fn encode_set_call_state(number: &str, name: &str, state: CallState) -> Vec<u8> {
    encode_call_state(number, name, state)
}

/// Encode now-playing metadata.
pub fn encode_set_music_info(artist: &str, album: &str, track: &str) -> Vec<u8> {
    Command::SetMusicInfo {
        artist: artist.to_string(),
        album: album.to_string(),
        track: track.to_string(),
    }
    .encode()
}

/// Encode a firmware version request.
pub fn encode_firmware_version_req() -> Vec<u8> {
    Command::FirmwareVersionRequest.encode()
}

/// Encode an app bank status request.
pub fn encode_app_info_req() -> Vec<u8> {
    Command::AppInfoRequest.encode()
}

/// Encode an app removal request.
pub fn encode_app_delete(id: i32, index: i32) -> Vec<u8> {
    Command::AppDelete { id, index }.encode()
}

/// Encode the host version and capability reply.
pub fn encode_phone_version(os: u8) -> Vec<u8> {
    Command::PhoneVersion { os }.encode()
}

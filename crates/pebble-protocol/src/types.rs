//! Common types used in the protocol.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A service endpoint on the watch.
///
/// Known endpoints map one-to-one onto their `ENDPOINT_*` id; anything else
/// is kept as [`Endpoint::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Firmware,
    Time,
    FirmwareVersion,
    PhoneVersion,
    SystemMessage,
    MusicControl,
    PhoneControl,
    ApplicationMessage,
    Launcher,
    Logs,
    Ping,
    LogDump,
    Reset,
    App,
    AppLogs,
    Notification,
    Resource,
    SysReg,
    FctReg,
    AppManager,
    DataLog,
    RunKeeper,
    Screenshot,
    PutBytes,
    /// An id this codec does not know.
    Unknown(u16),
}

impl From<u16> for Endpoint {
    fn from(id: u16) -> Self {
        match id {
            ENDPOINT_FIRMWARE => Endpoint::Firmware,
            ENDPOINT_TIME => Endpoint::Time,
            ENDPOINT_FIRMWARE_VERSION => Endpoint::FirmwareVersion,
            ENDPOINT_PHONE_VERSION => Endpoint::PhoneVersion,
            ENDPOINT_SYSTEM_MESSAGE => Endpoint::SystemMessage,
            ENDPOINT_MUSIC_CONTROL => Endpoint::MusicControl,
            ENDPOINT_PHONE_CONTROL => Endpoint::PhoneControl,
            ENDPOINT_APPLICATION_MESSAGE => Endpoint::ApplicationMessage,
            ENDPOINT_LAUNCHER => Endpoint::Launcher,
            ENDPOINT_LOGS => Endpoint::Logs,
            ENDPOINT_PING => Endpoint::Ping,
            ENDPOINT_LOG_DUMP => Endpoint::LogDump,
            ENDPOINT_RESET => Endpoint::Reset,
            ENDPOINT_APP => Endpoint::App,
            ENDPOINT_APP_LOGS => Endpoint::AppLogs,
            ENDPOINT_NOTIFICATION => Endpoint::Notification,
            ENDPOINT_RESOURCE => Endpoint::Resource,
            ENDPOINT_SYS_REG => Endpoint::SysReg,
            ENDPOINT_FCT_REG => Endpoint::FctReg,
            ENDPOINT_APP_MANAGER => Endpoint::AppManager,
            ENDPOINT_DATA_LOG => Endpoint::DataLog,
            ENDPOINT_RUNKEEPER => Endpoint::RunKeeper,
            ENDPOINT_SCREENSHOT => Endpoint::Screenshot,
            ENDPOINT_PUT_BYTES => Endpoint::PutBytes,
            other => Endpoint::Unknown(other),
        }
    }
}

impl From<Endpoint> for u16 {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Firmware => ENDPOINT_FIRMWARE,
            Endpoint::Time => ENDPOINT_TIME,
            Endpoint::FirmwareVersion => ENDPOINT_FIRMWARE_VERSION,
            Endpoint::PhoneVersion => ENDPOINT_PHONE_VERSION,
            Endpoint::SystemMessage => ENDPOINT_SYSTEM_MESSAGE,
            Endpoint::MusicControl => ENDPOINT_MUSIC_CONTROL,
            Endpoint::PhoneControl => ENDPOINT_PHONE_CONTROL,
            Endpoint::ApplicationMessage => ENDPOINT_APPLICATION_MESSAGE,
            Endpoint::Launcher => ENDPOINT_LAUNCHER,
            Endpoint::Logs => ENDPOINT_LOGS,
            Endpoint::Ping => ENDPOINT_PING,
            Endpoint::LogDump => ENDPOINT_LOG_DUMP,
            Endpoint::Reset => ENDPOINT_RESET,
            Endpoint::App => ENDPOINT_APP,
            Endpoint::AppLogs => ENDPOINT_APP_LOGS,
            Endpoint::Notification => ENDPOINT_NOTIFICATION,
            Endpoint::Resource => ENDPOINT_RESOURCE,
            Endpoint::SysReg => ENDPOINT_SYS_REG,
            Endpoint::FctReg => ENDPOINT_FCT_REG,
            Endpoint::AppManager => ENDPOINT_APP_MANAGER,
            Endpoint::DataLog => ENDPOINT_DATA_LOG,
            Endpoint::RunKeeper => ENDPOINT_RUNKEEPER,
            Endpoint::Screenshot => ENDPOINT_SCREENSHOT,
            Endpoint::PutBytes => ENDPOINT_PUT_BYTES,
            Endpoint::Unknown(id) => id,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Unknown(id) => write!(f, "unknown endpoint ({})", id),
            known => write!(f, "{:?} ({})", known, u16::from(*known)),
        }
    }
}

/// Call state reported by the host's call manager.
///
/// Only the first four have a representation on the watch; `Accept` and
/// `Reject` encode to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallState {
    /// Call connected.
    Start,
    /// Call finished.
    End,
    /// Phone is ringing.
    Incoming,
    /// Host placed a call.
    Outgoing,
    /// User accepted the call on the host.
    Accept,
    /// User rejected the call on the host.
    Reject,
}

impl CallState {
    /// Phone-control code for this state, if the watch has one.
    ///
    /// `Outgoing` has none of its own; it is sent as an incoming frame
    /// followed by a start frame.
    pub fn phone_control_code(&self) -> Option<u8> {
        match self {
            CallState::Start => Some(PHONE_CONTROL_START),
            CallState::End => Some(PHONE_CONTROL_END),
            CallState::Incoming => Some(PHONE_CONTROL_INCOMING_CALL),
            CallState::Outgoing | CallState::Accept | CallState::Reject => None,
        }
    }
}

/// Music playback request sent by the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicCommand {
    PlayPause,
    Pause,
    Play,
    Next,
    Previous,
}

impl MusicCommand {
    /// Map a music-control code. Volume codes and anything unknown give `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            MUSIC_CONTROL_PLAY_PAUSE => Some(MusicCommand::PlayPause),
            MUSIC_CONTROL_PAUSE => Some(MusicCommand::Pause),
            MUSIC_CONTROL_PLAY => Some(MusicCommand::Play),
            MUSIC_CONTROL_NEXT => Some(MusicCommand::Next),
            MUSIC_CONTROL_PREVIOUS => Some(MusicCommand::Previous),
            _ => None,
        }
    }

    /// The wire code for this command.
    pub fn code(&self) -> u8 {
        match self {
            MusicCommand::PlayPause => MUSIC_CONTROL_PLAY_PAUSE,
            MusicCommand::Pause => MUSIC_CONTROL_PAUSE,
            MusicCommand::Play => MUSIC_CONTROL_PLAY,
            MusicCommand::Next => MUSIC_CONTROL_NEXT,
            MusicCommand::Previous => MUSIC_CONTROL_PREVIOUS,
        }
    }
}

/// Call control request sent by the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallCommand {
    /// User hung up on the watch.
    End,
}

/// Operating system of the host, as advertised during version negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOs {
    Unknown,
    Ios,
    Android,
    Osx,
    Linux,
    Windows,
}

impl RemoteOs {
    /// The raw OS byte.
    pub fn code(&self) -> u8 {
        match self {
            RemoteOs::Unknown => REMOTE_OS_UNKNOWN,
            RemoteOs::Ios => REMOTE_OS_IOS,
            RemoteOs::Android => REMOTE_OS_ANDROID,
            RemoteOs::Osx => REMOTE_OS_OSX,
            RemoteOs::Linux => REMOTE_OS_LINUX,
            RemoteOs::Windows => REMOTE_OS_WINDOWS,
        }
    }
}

impl From<u8> for RemoteOs {
    fn from(code: u8) -> Self {
        match code {
            REMOTE_OS_IOS => RemoteOs::Ios,
            REMOTE_OS_ANDROID => RemoteOs::Android,
            REMOTE_OS_OSX => RemoteOs::Osx,
            REMOTE_OS_LINUX => RemoteOs::Linux,
            REMOTE_OS_WINDOWS => RemoteOs::Windows,
            _ => RemoteOs::Unknown,
        }
    }
}

/// The platform this codec runs on. Only this OS gets the remote-debug
/// session capability.
pub const HOST_OS: RemoteOs = RemoteOs::Android;

/// An application installed in one of the watch's app banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceApp {
    /// Application id.
    pub id: i32,
    /// Bank index.
    pub index: i32,
    /// Display name (32-byte field, trimmed).
    pub name: String,
    /// Creator (32-byte field, trimmed).
    pub creator: String,
    /// Application flags.
    pub flags: i32,
    /// Version, rendered in decimal.
    pub version: String,
}

impl DeviceApp {
    /// Create an app descriptor.
    pub fn new(
        id: i32,
        index: i32,
        name: &str,
        creator: &str,
        flags: i32,
        version: &str,
    ) -> Self {
        DeviceApp {
            id,
            index,
            name: name.to_string(),
            creator: creator.to_string(),
            flags,
            version: version.to_string(),
        }
    }
}

/// App management operations the watch reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppManagementOperation {
    Delete,
}

/// Outcome of an app management operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppManagementOutcome {
    Success,
    Failure,
}

impl From<i32> for AppManagementOutcome {
    fn from(code: i32) -> Self {
        if code == APP_MANAGER_RES_SUCCESS {
            AppManagementOutcome::Success
        } else {
            AppManagementOutcome::Failure
        }
    }
}

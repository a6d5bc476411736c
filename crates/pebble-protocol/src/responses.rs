//! Frames received from the watch.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::*;
use crate::frame::{FrameHeader, FrameReader};
use crate::types::*;

/// A command decoded from a watch frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceCommand {
    /// Playback request. `None` when the code is not one we act on
    /// (volume keys, unknown codes).
    MusicControl(Option<MusicCommand>),

    /// Call control request. `None` for anything other than hang-up.
    CallControl(Option<CallCommand>),

    /// Firmware version reply.
    VersionInfo {
        /// Firmware version string, e.g. `v2.9.1`.
        firmware_version: String,
    },

    /// Installed applications, in bank order.
    AppInfo {
        /// One entry per used bank.
        apps: Vec<DeviceApp>,
    },

    /// Outcome of an app management request.
    AppManagementResult {
        /// What was attempted.
        operation: AppManagementOperation,
        /// How it went.
        outcome: AppManagementOutcome,
    },
}

/// Decode a single complete frame.
///
/// Returns `Ok(None)` for endpoints and sub-commands this codec does not
/// handle; those are logged rather than treated as errors. Fails only when
/// the frame is too short for the fields its endpoint requires.
pub fn decode(frame: &[u8]) -> ProtocolResult<Option<DeviceCommand>> {
    DeviceCommand::decode(frame)
}

impl DeviceCommand {
    /// Decode a command from a frame. See [`decode`].
    pub fn decode(frame: &[u8]) -> ProtocolResult<Option<Self>> {
        let mut reader = FrameReader::new(frame);
        let header = reader.read_header()?;

        log::debug!(
            "frame: endpoint={} command={} length={}",
            header.endpoint(),
            header.command,
            header.length
        );
        if header.frame_len() != frame.len() {
            log::warn!(
                "declared length {} does not match {}-byte frame",
                header.length,
                frame.len()
            );
        }

        match header.endpoint() {
            Endpoint::MusicControl => {
                let command = MusicCommand::from_code(header.command);
                if command.is_none() {
                    log::debug!("unmapped music control command {}", header.command);
                }
                Ok(Some(DeviceCommand::MusicControl(command)))
            }

            Endpoint::PhoneControl => match header.command {
                PHONE_CONTROL_HANGUP => {
                    Ok(Some(DeviceCommand::CallControl(Some(CallCommand::End))))
                }
                other => {
                    log::info!("unknown phone control command {}", other);
                    Ok(Some(DeviceCommand::CallControl(None)))
                }
            },

            Endpoint::FirmwareVersion => decode_version_info(&mut reader).map(Some),

            Endpoint::AppManager => decode_app_manager(&header, &mut reader),

            other => {
                log::debug!("ignoring frame for {}", other);
                Ok(None)
            }
        }
    }
}

fn decode_version_info(reader: &mut FrameReader<'_>) -> ProtocolResult<DeviceCommand> {
    // Numeric version word; only the string is used.
    let _version = reader.read_i32()?;
    let firmware_version = reader.read_fixed_string(FIXED_STRING_LEN)?;
    Ok(DeviceCommand::VersionInfo { firmware_version })
}

fn decode_app_manager(
    header: &FrameHeader,
    reader: &mut FrameReader<'_>,
) -> ProtocolResult<Option<DeviceCommand>> {
    match header.command {
        APP_MANAGER_GET_APP_BANK_STATUS => {
            let apps = decode_app_banks(reader)?;
            Ok(Some(DeviceCommand::AppInfo { apps }))
        }

        APP_MANAGER_REMOVE_APP => {
            let result = reader.read_i32()?;
            Ok(Some(DeviceCommand::AppManagementResult {
                operation: AppManagementOperation::Delete,
                outcome: AppManagementOutcome::from(result),
            }))
        }

        other => {
            log::info!("unknown app manager command {}", other);
            Ok(None)
        }
    }
}

/// Read the bank status reply. Only `banks_used` records follow; the total
/// bank count is not used to bound or check it.
fn decode_app_banks(reader: &mut FrameReader<'_>) -> ProtocolResult<Vec<DeviceApp>> {
    let _total_banks = reader.read_i32()?;
    let banks_used = reader.read_i32()?.max(0) as usize;

    // Cap the allocation by what the frame can actually hold.
    let mut apps = Vec::with_capacity(banks_used.min(reader.remaining() / APP_RECORD_SIZE));
    for _ in 0..banks_used {
        apps.push(decode_app_record(reader)?);
    }
    Ok(apps)
}

fn decode_app_record(reader: &mut FrameReader<'_>) -> ProtocolResult<DeviceApp> {
    let id = reader.read_i32()?;
    let index = reader.read_i32()?;
    let name = reader.read_fixed_string(FIXED_STRING_LEN)?;
    let creator = reader.read_fixed_string(FIXED_STRING_LEN)?;
    let flags = reader.read_i32()?;
    let version = reader.read_u16()?;

    Ok(DeviceApp {
        id,
        index,
        name,
        creator,
        flags,
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(endpoint: u16, command: u8, payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&((payload.len() + 1) as u16).to_be_bytes());
        buf.extend_from_slice(&endpoint.to_be_bytes());
        buf.push(command);
        buf.extend_from_slice(payload);
        buf
    }

    fn fixed(text: &str) -> [u8; 32] {
        let mut field = [0u8; 32];
        field[..text.len()].copy_from_slice(text.as_bytes());
        field
    }

    fn app_record(
        id: i32,
        index: i32,
        name: &str,
        creator: &str,
        flags: i32,
        version: u16,
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&index.to_be_bytes());
        buf.extend_from_slice(&fixed(name));
        buf.extend_from_slice(&fixed(creator));
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&version.to_be_bytes());
        buf
    }

    #[test]
    fn test_music_control_codes() {
        let cases = [
            (MUSIC_CONTROL_PLAY_PAUSE, MusicCommand::PlayPause),
            (MUSIC_CONTROL_PAUSE, MusicCommand::Pause),
            (MUSIC_CONTROL_PLAY, MusicCommand::Play),
            (MUSIC_CONTROL_NEXT, MusicCommand::Next),
            (MUSIC_CONTROL_PREVIOUS, MusicCommand::Previous),
        ];
        for (code, expected) in cases {
            let cmd = decode(&frame(ENDPOINT_MUSIC_CONTROL, code, &[])).unwrap();
            assert_eq!(cmd, Some(DeviceCommand::MusicControl(Some(expected))));
        }
    }

    #[test]
    fn test_music_control_unmapped_code() {
        let cmd = decode(&frame(ENDPOINT_MUSIC_CONTROL, MUSIC_CONTROL_VOLUME_UP, &[])).unwrap();
        assert_eq!(cmd, Some(DeviceCommand::MusicControl(None)));
    }

    #[test]
    fn test_phone_control() {
        let cmd = decode(&frame(ENDPOINT_PHONE_CONTROL, PHONE_CONTROL_HANGUP, &[])).unwrap();
        assert_eq!(cmd, Some(DeviceCommand::CallControl(Some(CallCommand::End))));

        let cmd = decode(&frame(ENDPOINT_PHONE_CONTROL, PHONE_CONTROL_ANSWER, &[])).unwrap();
        assert_eq!(cmd, Some(DeviceCommand::CallControl(None)));
    }

    #[test]
    fn test_firmware_version() {
        let mut payload = 0x0002_0901i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&fixed("v2.9.1-dev"));
        let cmd = decode(&frame(ENDPOINT_FIRMWARE_VERSION, 0, &payload)).unwrap();
        assert_eq!(
            cmd,
            Some(DeviceCommand::VersionInfo {
                firmware_version: "v2.9.1-dev".to_string()
            })
        );
    }

    #[test]
    fn test_firmware_version_truncated() {
        let mut payload = 1i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&[b'v'; 10]);
        let err = decode(&frame(ENDPOINT_FIRMWARE_VERSION, 0, &payload)).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::FrameTooShort {
                expected: 5 + 4 + 32,
                actual: 5 + 4 + 10
            }
        );
    }

    #[test]
    fn test_app_bank_status() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&8i32.to_be_bytes());
        payload.extend_from_slice(&2i32.to_be_bytes());
        payload.extend(app_record(100, 0, "Sports", "Pebble Technology", 3, 5));
        payload.extend(app_record(200, 1, "Golf", "Pebble Technology", 0, 65535));

        let cmd = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &payload))
            .unwrap()
            .unwrap();

        let DeviceCommand::AppInfo { apps } = cmd else {
            panic!("Expected AppInfo");
        };
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].id, 100);
        assert_eq!(apps[0].name, "Sports");
        assert_eq!(apps[0].creator, "Pebble Technology");
        assert_eq!(apps[0].flags, 3);
        assert_eq!(apps[0].version, "5");
        assert_eq!(apps[1].index, 1);
        assert_eq!(apps[1].version, "65535");
    }

    #[test]
    fn test_app_bank_status_no_apps() {
        let mut payload = 8i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&0i32.to_be_bytes());
        let cmd = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &payload))
            .unwrap();
        assert_eq!(cmd, Some(DeviceCommand::AppInfo { apps: vec![] }));
    }

    #[test]
    fn test_app_bank_status_negative_count() {
        let mut payload = 8i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&(-5i32).to_be_bytes());
        let cmd = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &payload))
            .unwrap();
        assert_eq!(cmd, Some(DeviceCommand::AppInfo { apps: vec![] }));
    }

    #[test]
    fn test_app_bank_status_ignores_total_banks() {
        let mut payload = 0i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&2i32.to_be_bytes());
        payload.extend(app_record(10, 0, "Watchface", "Me", 1, 2));
        payload.extend(app_record(11, 1, "Timer", "You", 0, 3));

        let cmd = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &payload))
            .unwrap();
        assert_eq!(
            cmd,
            Some(DeviceCommand::AppInfo {
                apps: vec![
                    DeviceApp::new(10, 0, "Watchface", "Me", 1, "2"),
                    DeviceApp::new(11, 1, "Timer", "You", 0, "3"),
                ],
            })
        );
    }

    #[test]
    fn test_app_bank_status_missing_record() {
        let mut payload = 8i32.to_be_bytes().to_vec();
        payload.extend_from_slice(&2i32.to_be_bytes());
        payload.extend(app_record(1, 0, "One", "Me", 0, 1));

        let err = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_GET_APP_BANK_STATUS, &payload))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::FrameTooShort { .. }));
    }

    #[test]
    fn test_remove_app_result() {
        let ok = decode(&frame(ENDPOINT_APP_MANAGER, APP_MANAGER_REMOVE_APP, &1i32.to_be_bytes()))
            .unwrap();
        assert_eq!(
            ok,
            Some(DeviceCommand::AppManagementResult {
                operation: AppManagementOperation::Delete,
                outcome: AppManagementOutcome::Success,
            })
        );

        let failed = decode(&frame(
            ENDPOINT_APP_MANAGER,
            APP_MANAGER_REMOVE_APP,
            &2i32.to_be_bytes(),
        ))
        .unwrap();
        assert_eq!(
            failed,
            Some(DeviceCommand::AppManagementResult {
                operation: AppManagementOperation::Delete,
                outcome: AppManagementOutcome::Failure,
            })
        );
    }

    #[test]
    fn test_unknown_app_manager_command() {
        let cmd = decode(&frame(ENDPOINT_APP_MANAGER, 9, &[])).unwrap();
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_unknown_endpoint() {
        assert_eq!(decode(&frame(ENDPOINT_PING, 0, &[1, 2, 3])).unwrap(), None);
        assert_eq!(decode(&frame(4242, 1, &[])).unwrap(), None);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(
            decode(&[]),
            Err(ProtocolError::FrameTooShort {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn test_serialize_app_info() {
        let cmd = DeviceCommand::AppInfo {
            apps: vec![DeviceApp::new(1, 0, "Sports", "Pebble", 4, "5")],
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"Sports\""));
        let back: DeviceCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}

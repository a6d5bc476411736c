//! Pebble Smartwatch Endpoint Protocol
//!
//! This crate converts host-side intents (notifications, call state, music
//! metadata, app inventory queries) into wire frames for a Pebble watch, and
//! converts frames received from the watch into [`DeviceCommand`] values.
//!
//! # Protocol Overview
//!
//! Every frame starts with a 5-byte big-endian header:
//!
//! ```text
//! +----------------+----------------+-------------+---------------------+
//! | length (u16)   | endpoint (u16) | command(u8) | payload             |
//! +----------------+----------------+-------------+---------------------+
//! ```
//!
//! `length` counts everything after itself except the endpoint, i.e. the
//! command byte plus the payload. Each endpoint owns its own command code
//! space and payload layout.
//!
//! - **Encoding** (host → watch): build a [`Command`] and call
//!   [`Command::encode`], or use one of the `encode_*` helpers which fill in
//!   the current device-local time.
//! - **Decoding** (watch → host): hand exactly one complete frame to
//!   [`decode`]. Stream reassembly belongs to the transport.
//!
//! # Example
//!
//! ```rust
//! use pebble_protocol::{decode, encode_set_music_info, DeviceCommand, MusicCommand};
//!
//! let frame = encode_set_music_info("Artist", "Album", "Track");
//! assert_eq!(&frame[2..4], &[0x00, 0x20]);
//!
//! let cmd = decode(&[0x00, 0x01, 0x00, 0x20, 0x03]).unwrap();
//! assert_eq!(cmd, Some(DeviceCommand::MusicControl(Some(MusicCommand::Play))));
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod responses;
mod time;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use responses::*;
pub use time::*;
pub use types::*;

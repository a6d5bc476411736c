//! Frame encoding/decoding utilities.
//!
//! All multi-byte fields are big-endian:
//!
//! ```text
//! offset 0: u16 length    // command byte + payload
//! offset 2: u16 endpoint
//! offset 4: u8  command
//! offset 5: payload (length - 1 bytes)
//! ```
//!
//! Variable text travels as Pascal strings: one length byte followed by at
//! most 255 raw bytes, no terminator.

use bytes::{Buf, BufMut};

use crate::constants::*;
use crate::error::*;
use crate::types::Endpoint;

/// The fixed 5-byte header at the start of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Declared length: command byte plus payload.
    pub length: u16,
    /// Raw endpoint id.
    pub endpoint: u16,
    /// Command byte, interpreted per endpoint.
    pub command: u8,
}

impl FrameHeader {
    /// Parse the header from the start of a frame.
    pub fn parse(frame: &[u8]) -> ProtocolResult<Self> {
        FrameReader::new(frame).read_header()
    }

    /// The endpoint as a typed value.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from(self.endpoint)
    }

    /// Total frame size implied by the declared length.
    pub fn frame_len(&self) -> usize {
        self.length as usize + LENGTH_PREFIX
    }
}

/// Builds a single frame, filling in the length once the payload is known.
#[derive(Debug)]
pub struct FrameWriter {
    buf: Vec<u8>,
}

impl FrameWriter {
    /// Start a frame for `endpoint` with the given command byte.
    pub fn new(endpoint: u16, command: u8) -> Self {
        Self::with_capacity(endpoint, command, 64)
    }

    /// Start a frame, reserving room for `payload_len` bytes after the header.
    pub fn with_capacity(endpoint: u16, command: u8, payload_len: usize) -> Self {
        let mut buf = Vec::with_capacity(HEADER_SIZE + payload_len);
        buf.put_u16(0); // patched in finish()
        buf.put_u16(endpoint);
        buf.put_u8(command);
        FrameWriter { buf }
    }

    /// Append a big-endian `i32`.
    pub fn put_i32(mut self, value: i32) -> Self {
        self.buf.put_i32(value);
        self
    }

    /// Append a big-endian `u32`.
    pub fn put_u32(mut self, value: u32) -> Self {
        self.buf.put_u32(value);
        self
    }

    /// Append a single byte.
    pub fn put_u8(mut self, value: u8) -> Self {
        self.buf.put_u8(value);
        self
    }

    /// Append a Pascal string, truncating to 255 bytes.
    pub fn put_pascal_string(mut self, s: &str) -> Self {
        let bytes = s.as_bytes();
        let len = bytes.len().min(MAX_PASCAL_STRING_LEN);
        if len < bytes.len() {
            log::trace!("truncating {}-byte string field to {}", bytes.len(), len);
        }
        self.buf.put_u8(len as u8);
        self.buf.put_slice(&bytes[..len]);
        self
    }

    /// Write the length field and return the frame bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let length = (self.buf.len() - LENGTH_PREFIX) as u16;
        self.buf[..2].copy_from_slice(&length.to_be_bytes());
        self.buf
    }
}

/// Encoded size of a Pascal string field for `s`.
pub fn pascal_string_len(s: &str) -> usize {
    1 + s.len().min(MAX_PASCAL_STRING_LEN)
}

/// Encode a frame whose payload is a list of Pascal strings.
///
/// Phone-control frames carry a 4-byte cookie between the command byte and
/// the strings. Empty strings encode as a single `0x00`.
pub fn encode_message(endpoint: u16, command: u8, parts: &[&str]) -> Vec<u8> {
    let cookie_len = if endpoint == ENDPOINT_PHONE_CONTROL { 4 } else { 0 };
    let payload_len = cookie_len + parts.iter().map(|p| pascal_string_len(p)).sum::<usize>();
    let mut writer = FrameWriter::with_capacity(endpoint, command, payload_len);
    if endpoint == ENDPOINT_PHONE_CONTROL {
        writer = writer.put_i32(PHONE_CONTROL_COOKIE);
    }
    for part in parts {
        writer = writer.put_pascal_string(part);
    }
    writer.finish()
}

/// A bounds-checked big-endian read cursor over one frame.
///
/// Every read that would run past the end fails with
/// [`ProtocolError::FrameTooShort`] instead of panicking.
#[derive(Debug)]
pub struct FrameReader<'a> {
    buf: &'a [u8],
    total: usize,
}

impl<'a> FrameReader<'a> {
    /// Wrap a complete frame.
    pub fn new(frame: &'a [u8]) -> Self {
        FrameReader {
            buf: frame,
            total: frame.len(),
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.total - self.buf.remaining()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, n: usize) -> ProtocolResult<()> {
        if self.buf.remaining() < n {
            return Err(ProtocolError::FrameTooShort {
                expected: self.position() + n,
                actual: self.total,
            });
        }
        Ok(())
    }

    /// Read the 5-byte frame header.
    pub fn read_header(&mut self) -> ProtocolResult<FrameHeader> {
        self.ensure(HEADER_SIZE)?;
        Ok(FrameHeader {
            length: self.buf.get_u16(),
            endpoint: self.buf.get_u16(),
            command: self.buf.get_u8(),
        })
    }

    pub fn read_u8(&mut self) -> ProtocolResult<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16(&mut self) -> ProtocolResult<u16> {
        self.ensure(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn read_i32(&mut self) -> ProtocolResult<i32> {
        self.ensure(4)?;
        Ok(self.buf.get_i32())
    }

    /// Read a fixed-width text field, trimming padding at both ends.
    pub fn read_fixed_string(&mut self, width: usize) -> ProtocolResult<String> {
        self.ensure(width)?;
        let text = trim_padding(&self.buf[..width]);
        self.buf.advance(width);
        Ok(text)
    }
}

/// Decode a padded text field: lossy UTF-8 with NUL, space and other
/// control characters stripped from both ends.
fn trim_padding(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}

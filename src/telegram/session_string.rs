//! Session strings in the layout the Telegram MCP server reads from `TELEGRAM_SESSION_STRING`.
//!
//! Version `1`: the version character followed by URL-safe base64 (padded) of
//! `dc_id: u8 | ip: 4 or 16 bytes | port: u16 BE | auth_key: 256 bytes`.
use std::net::{IpAddr, SocketAddr};

use base64::{engine::general_purpose::URL_SAFE, Engine as _};

use super::SessionToken;

pub const SESSION_VERSION: char = '1';
pub const AUTH_KEY_LEN: usize = 256;

/// Encode the authenticated data-center connection as a session string.
///
/// Returns `None` when `dc_id` does not fit the single-byte field.
pub fn encode(dc_id: i32, addr: SocketAddr, auth_key: &[u8; AUTH_KEY_LEN]) -> Option<SessionToken> {
    let dc_id = u8::try_from(dc_id).ok()?;
    let ip = match addr.ip() {
        IpAddr::V4(ip) => ip.octets().to_vec(),
        IpAddr::V6(ip) => ip.octets().to_vec(),
    };

    let mut packed = Vec::with_capacity(1 + ip.len() + 2 + AUTH_KEY_LEN);
    packed.push(dc_id);
    packed.extend_from_slice(&ip);
    packed.extend_from_slice(&addr.port().to_be_bytes());
    packed.extend_from_slice(auth_key);

    let mut encoded = String::with_capacity(1 + packed.len().div_ceil(3) * 4);
    encoded.push(SESSION_VERSION);
    URL_SAFE.encode_string(&packed, &mut encoded);
    Some(SessionToken::new(encoded))
}

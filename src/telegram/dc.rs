use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DC_PORT: u16 = 443;

/// Production data centers as published by Telegram.
const PRODUCTION_DCS: [(i32, Ipv4Addr); 5] = [
    (1, Ipv4Addr::new(149, 154, 175, 53)),
    (2, Ipv4Addr::new(149, 154, 167, 51)),
    (3, Ipv4Addr::new(149, 154, 175, 100)),
    (4, Ipv4Addr::new(149, 154, 167, 91)),
    (5, Ipv4Addr::new(91, 108, 56, 130)),
];

/// Address of production data center `dc_id`, if it exists.
pub fn production_address(dc_id: i32) -> Option<SocketAddr> {
    PRODUCTION_DCS
        .iter()
        .find(|(id, _)| *id == dc_id)
        .map(|(_, ip)| SocketAddr::V4(SocketAddrV4::new(*ip, DC_PORT)))
}

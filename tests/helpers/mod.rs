/* tests/helpers/mod.rs */
#![allow(dead_code)]

use apdu_reader::RawEnum;

/// Three-place enumeration over `u8`; `0x04` and above are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Place {
	First = 0x01,
	Second = 0x02,
	Third = 0x03,
}

impl RawEnum for Place {
	type Raw = u8;

	fn from_raw(raw: u8) -> Option<Self> {
		match raw {
			0x01 => Some(Self::First),
			0x02 => Some(Self::Second),
			0x03 => Some(Self::Third),
			_ => None,
		}
	}
}

/// Decode a hex fixture, ignoring spaces.
pub(crate) fn bytes(hex: &str) -> Vec<u8> {
	let compact: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
	hex::decode(compact).unwrap()
}

/// Build an extended-length command: header, body, optional Le.
pub(crate) fn command(ins: u8, p1: u8, body: &[u8], le: Option<u16>) -> Vec<u8> {
	let mut msg = vec![0x00, ins, p1, 0x00, 0x00]; // cla ins p1 p2 lc0
	let len = body.len() as u16;
	msg.push((len >> 8) as u8);
	msg.push(len as u8);
	msg.extend_from_slice(body);
	if let Some(le) = le {
		msg.push((le >> 8) as u8);
		msg.push(le as u8);
	}
	msg
}

/* src/apdu.rs */

use crate::{Error, RawEnum, Reader};

/// Instruction byte of a U2F raw-message command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
	/// Register a new key handle (`0x01`).
	Register = 0x01,
	/// Sign a challenge with an existing key handle (`0x02`).
	Authenticate = 0x02,
	/// Report the protocol version string (`0x03`).
	Version = 0x03,
}

impl RawEnum for CommandCode {
	type Raw = u8;

	fn from_raw(raw: u8) -> Option<Self> {
		match raw {
			0x01 => Some(Self::Register),
			0x02 => Some(Self::Authenticate),
			0x03 => Some(Self::Version),
			_ => None,
		}
	}
}

/// The zero byte announcing an extended (three byte) Lc field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthMarker {
	Extended = 0x00,
}

impl RawEnum for LengthMarker {
	type Raw = u8;

	fn from_raw(raw: u8) -> Option<Self> {
		(raw == 0x00).then_some(Self::Extended)
	}
}

/// Extended-length command header: CLA, INS, P1, P2 and a 16-bit Lc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHeader {
	/// Class byte.
	pub cla: u8,
	/// Instruction.
	pub ins: CommandCode,
	/// First parameter byte.
	pub p1: u8,
	/// Second parameter byte.
	pub p2: u8,
	/// Length of the command data that follows the header.
	pub data_length: u16,
}

impl CommandHeader {
	/// Encoded size of the header in bytes.
	pub const LEN: usize = 7;

	/// Decode a header from the current position of `r`.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when the header is truncated, or
	/// [`Error::InvalidEnumValue`] when the instruction is unknown or the
	/// extended length marker is not `0x00`.
	pub fn parse(r: &mut Reader<'_>) -> Result<Self, Error> {
		parse_header(r).inspect_err(|err| tracing::debug!(%err, "rejected command header"))
	}

	/// Decode a header from the start of `data`.
	///
	/// ```
	/// use apdu_reader::{CommandCode, CommandHeader};
	///
	/// let hdr = CommandHeader::parse_bytes(&[0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00])?;
	/// assert_eq!(hdr.ins, CommandCode::Version);
	/// assert_eq!(hdr.data_length, 0);
	/// # Ok::<(), apdu_reader::Error>(())
	/// ```
	///
	/// # Errors
	///
	/// Same as [`CommandHeader::parse`].
	pub fn parse_bytes(data: &[u8]) -> Result<Self, Error> {
		Self::parse(&mut Reader::new(data))
	}
}

fn parse_header(r: &mut Reader<'_>) -> Result<CommandHeader, Error> {
	let cla = r.read_u8()?;
	let ins = r.read_enum::<CommandCode>()?;
	let p1 = r.read_u8()?;
	let p2 = r.read_u8()?;
	r.read_enum::<LengthMarker>()?;
	let data_length = r.read_u16()?;
	tracing::trace!(cla, ?ins, p1, p2, data_length, "decoded command header");
	Ok(CommandHeader {
		cla,
		ins,
		p1,
		p2,
		data_length,
	})
}

/// A complete command: header, body, and optional expected response length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
	/// Decoded header.
	pub header: CommandHeader,
	/// Command data, `header.data_length` bytes long.
	pub data: &'a [u8],
	/// Le field when present. An encoded `0x0000` means 65536.
	pub max_response_length: Option<u32>,
}

impl<'a> Command<'a> {
	/// Decode a command from `data`. Bytes after the Le field are ignored;
	/// use [`Command::parse_from`] to inspect them.
	///
	/// # Errors
	///
	/// Same as [`Command::parse_from`].
	pub fn parse(data: &'a [u8]) -> Result<Self, Error> {
		Self::parse_from(&mut Reader::new(data))
	}

	/// Decode a command from the current position of `r`, leaving `r` just
	/// past the Le field (or the body when no Le is present).
	///
	/// ```
	/// use apdu_reader::{Command, Reader};
	///
	/// let raw = [0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0xEE];
	/// let mut r = Reader::new(&raw);
	/// let cmd = Command::parse_from(&mut r)?;
	/// assert_eq!(cmd.max_response_length, Some(256));
	/// assert_eq!(r.rest(), &[0xEE]);
	/// # Ok::<(), apdu_reader::Error>(())
	/// ```
	///
	/// # Errors
	///
	/// Returns an error when the header is invalid, the body is shorter than
	/// the header's data length, or a single byte follows the body where a
	/// two-byte Le is expected.
	pub fn parse_from(r: &mut Reader<'a>) -> Result<Self, Error> {
		let header = CommandHeader::parse(r)?;
		let body = r
			.read_data(header.data_length)
			.inspect_err(|err| tracing::debug!(%err, "truncated command body"))?;
		let max_response_length = if r.is_empty() {
			None
		} else {
			let le = r
				.read_u16()
				.inspect_err(|err| tracing::debug!(%err, "truncated Le field"))?;
			Some(if le == 0 { 0x1_0000 } else { u32::from(le) })
		};
		Ok(Self {
			header,
			data: body,
			max_response_length,
		})
	}
}

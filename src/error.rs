/* src/error.rs */

/// Errors produced while decoding values out of a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Fewer bytes remain than the requested value needs.
	///
	/// The reader position is left untouched.
	#[error("end of buffer: need {need} bytes, have {have}")]
	EndOfBuffer {
		/// Bytes required by the read.
		need: usize,
		/// Bytes actually remaining.
		have: usize,
	},

	/// The raw value was read but names no declared enumerant.
	///
	/// The bytes holding the raw value have already been consumed.
	#[error("invalid {type_name} value: {value:#06x}")]
	InvalidEnumValue {
		/// Rust type name of the enumeration.
		type_name: &'static str,
		/// Raw value widened to `u16`.
		value: u16,
	},
}

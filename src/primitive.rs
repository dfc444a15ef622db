/* src/primitive.rs */

use crate::Endian;

mod sealed {
	pub trait Sealed {}

	impl Sealed for u8 {}
	impl Sealed for u16 {}
}

/// Fixed-width unsigned integer that a [`Reader`](crate::Reader) can decode.
///
/// Implemented for `u8` and `u16` only; the trait is sealed.
pub trait Primitive: sealed::Sealed + Copy + Into<u16> {
	/// Encoded width in bytes.
	const WIDTH: usize;

	/// Decode from the first [`Self::WIDTH`] bytes of `bytes`.
	///
	/// Returns `None` when `bytes` is shorter than the width.
	fn decode(bytes: &[u8], endian: Endian) -> Option<Self>;
}

impl Primitive for u8 {
	const WIDTH: usize = 1;

	fn decode(bytes: &[u8], _endian: Endian) -> Option<Self> {
		bytes.first().copied()
	}
}

impl Primitive for u16 {
	const WIDTH: usize = 2;

	fn decode(bytes: &[u8], endian: Endian) -> Option<Self> {
		let raw: [u8; 2] = bytes.get(..2)?.try_into().ok()?;
		Some(match endian {
			Endian::Big => Self::from_be_bytes(raw),
			Endian::Little => Self::from_le_bytes(raw),
		})
	}
}

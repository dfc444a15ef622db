/* src/reader.rs */

use crate::{Endian, Error, Primitive, RawEnum};

/// Sequential byte reader with bounds checking.
///
/// Wraps a borrowed buffer and a read position. Every operation either
/// consumes the full width of the value it returns or leaves the position
/// alone; the one exception is enum decoding, see [`Reader::read_enum`].
///
/// ```
/// use apdu_reader::{Endian, Reader};
///
/// let mut r = Reader::new(&[0x00, 0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(r.read::<u16>()?, 0x0001);
/// assert_eq!(r.read_with::<u16>(Endian::Little)?, 0x0302);
/// assert_eq!(r.remaining(), 1);
/// assert!(r.read::<u16>().is_err());
/// assert_eq!(r.remaining(), 1);
/// # Ok::<(), apdu_reader::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	/// Create a reader positioned at the start of `data`.
	#[must_use]
	pub const fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Create a reader positioned at `offset` bytes into `data`.
	///
	/// # Panics
	///
	/// Panics if `offset` is past the end of `data`.
	#[must_use]
	pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
		assert!(
			offset <= data.len(),
			"offset {offset} out of bounds for buffer of {} bytes",
			data.len()
		);
		Self { data, pos: offset }
	}

	/// Number of unread bytes.
	#[must_use]
	pub const fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Whether every byte has been consumed.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Current read position from the start of the buffer.
	#[must_use]
	pub const fn offset(&self) -> usize {
		self.pos
	}

	/// The unread tail of the buffer. Does not advance.
	#[must_use]
	pub fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	/// Peek a big-endian integer without advancing.
	///
	/// Returns `None` when fewer than `T::WIDTH` bytes remain.
	#[must_use]
	pub fn peek<T: Primitive>(&self) -> Option<T> {
		self.peek_with(Endian::Big)
	}

	/// Peek an integer in the given byte order without advancing.
	#[must_use]
	pub fn peek_with<T: Primitive>(&self, endian: Endian) -> Option<T> {
		T::decode(self.span(T::WIDTH)?, endian)
	}

	/// Read a big-endian integer.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when fewer than `T::WIDTH` bytes
	/// remain; the position is unchanged.
	pub fn read<T: Primitive>(&mut self) -> Result<T, Error> {
		self.read_with(Endian::Big)
	}

	/// Read an integer in the given byte order.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when fewer than `T::WIDTH` bytes
	/// remain; the position is unchanged.
	pub fn read_with<T: Primitive>(&mut self, endian: Endian) -> Result<T, Error> {
		let val = self
			.peek_with(endian)
			.ok_or_else(|| self.end_of_buffer(T::WIDTH))?;
		self.pos += T::WIDTH;
		Ok(val)
	}

	/// Read a big-endian integer, or `None` without advancing when too few
	/// bytes remain.
	pub fn try_read<T: Primitive>(&mut self) -> Option<T> {
		self.try_read_with(Endian::Big)
	}

	/// Read an integer in the given byte order, or `None` without advancing
	/// when too few bytes remain.
	pub fn try_read_with<T: Primitive>(&mut self, endian: Endian) -> Option<T> {
		let val = self.peek_with(endian)?;
		self.pos += T::WIDTH;
		Some(val)
	}

	/// Read a single byte.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when the buffer is exhausted.
	pub fn read_u8(&mut self) -> Result<u8, Error> {
		self.read()
	}

	/// Read a big-endian `u16`.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when fewer than 2 bytes remain.
	pub fn read_u16(&mut self) -> Result<u16, Error> {
		self.read()
	}

	/// Read a little-endian `u16`.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when fewer than 2 bytes remain.
	pub fn read_u16_le(&mut self) -> Result<u16, Error> {
		self.read_with(Endian::Little)
	}

	/// Peek the next `n` bytes without advancing.
	///
	/// `n` may be any integer type. Returns `None` when fewer than `n` bytes
	/// remain or when `n` has no `usize` representation. `n == 0` always
	/// yields an empty slice.
	#[must_use]
	pub fn peek_data<N: TryInto<usize>>(&self, n: N) -> Option<&'a [u8]> {
		self.span(n.try_into().ok()?)
	}

	/// Read the next `n` bytes as a slice of the underlying buffer.
	///
	/// ```
	/// use apdu_reader::Reader;
	///
	/// let mut r = Reader::new(&[0x00, 0x01, 0x02, 0x03, 0x04]);
	/// assert_eq!(r.read_data(2u8)?, &[0x00, 0x01]);
	/// assert!(r.read_data(4u64).is_err());
	/// assert_eq!(r.remaining(), 3);
	/// # Ok::<(), apdu_reader::Error>(())
	/// ```
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] when fewer than `n` bytes remain; the
	/// position is unchanged. A count with no `usize` representation is
	/// reported with `need` saturated to `usize::MAX`.
	pub fn read_data<N: TryInto<usize>>(&mut self, n: N) -> Result<&'a [u8], Error> {
		let n = n.try_into().unwrap_or(usize::MAX);
		let bytes = self.span(n).ok_or_else(|| self.end_of_buffer(n))?;
		self.pos += n;
		Ok(bytes)
	}

	/// Peek an enumerant without advancing.
	///
	/// Returns `None` both when the raw value is missing and when it names no
	/// enumerant.
	#[must_use]
	pub fn peek_enum<E: RawEnum>(&self) -> Option<E> {
		E::from_raw(self.peek_with(E::ENDIAN)?)
	}

	/// Read an enumerant.
	///
	/// The raw integer is consumed as soon as it is present, even when it
	/// names no enumerant, so a caller can resume after the bad field.
	///
	/// # Errors
	///
	/// Returns [`Error::EndOfBuffer`] with the position unchanged when the raw
	/// value is truncated, or [`Error::InvalidEnumValue`] with the raw value
	/// already consumed when it does not map to an enumerant.
	pub fn read_enum<E: RawEnum>(&mut self) -> Result<E, Error> {
		let raw: E::Raw = self.read_with(E::ENDIAN)?;
		E::from_raw(raw).ok_or_else(|| Error::InvalidEnumValue {
			type_name: core::any::type_name::<E>(),
			value: raw.into(),
		})
	}

	/// Read an enumerant, or `None`.
	///
	/// A truncated raw value leaves the position unchanged. A raw value that
	/// names no enumerant is still consumed, so [`Reader::remaining`] tells
	/// the two cases apart.
	pub fn try_read_enum<E: RawEnum>(&mut self) -> Option<E> {
		let raw: E::Raw = self.try_read_with(E::ENDIAN)?;
		E::from_raw(raw)
	}

	fn span(&self, n: usize) -> Option<&'a [u8]> {
		if self.remaining() < n {
			return None;
		}
		Some(&self.data[self.pos..self.pos + n])
	}

	const fn end_of_buffer(&self, need: usize) -> Error {
		Error::EndOfBuffer {
			need,
			have: self.remaining(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	enum Tag {
		Short = 0x0102,
	}

	impl RawEnum for Tag {
		type Raw = u16;
		const ENDIAN: Endian = Endian::Little;

		fn from_raw(raw: u16) -> Option<Self> {
			(raw == 0x0102).then_some(Self::Short)
		}
	}

	#[test]
	fn with_offset_at_end() {
		let r = Reader::with_offset(&[0x01, 0x02], 2);
		assert_eq!(r.remaining(), 0);
		assert!(r.is_empty());
		assert_eq!(r.rest(), &[] as &[u8]);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn with_offset_past_end() {
		let _ = Reader::with_offset(&[0x01], 2);
	}

	#[test]
	fn offset_tracks_reads() {
		let mut r = Reader::new(&[0x01, 0x02, 0x03]);
		assert_eq!(r.offset(), 0);
		r.read_u16().unwrap();
		assert_eq!(r.offset(), 2);
		assert_eq!(r.rest(), &[0x03]);
	}

	#[test]
	fn wide_enum_uses_declared_byte_order() {
		let mut r = Reader::new(&[0x02, 0x01, 0x01, 0x02]);
		assert_eq!(r.read_enum::<Tag>().unwrap(), Tag::Short);
		let err = r.read_enum::<Tag>().unwrap_err();
		assert!(matches!(
			err,
			Error::InvalidEnumValue { value: 0x0201, .. }
		));
		assert!(r.is_empty());
	}

	#[test]
	fn truncated_wide_enum_is_not_consumed() {
		let mut r = Reader::new(&[0x02]);
		assert_eq!(
			r.read_enum::<Tag>().unwrap_err(),
			Error::EndOfBuffer { need: 2, have: 1 }
		);
		assert_eq!(r.try_read_enum::<Tag>(), None);
		assert_eq!(r.remaining(), 1);
	}

	#[test]
	fn zero_length_read_on_exhausted_buffer() {
		let mut r = Reader::with_offset(&[0xFF], 1);
		assert_eq!(r.peek_data(0usize), Some(&[] as &[u8]));
		assert_eq!(r.read_data(0usize).unwrap(), &[] as &[u8]);
		assert_eq!(r.remaining(), 0);
	}

	#[test]
	fn negative_count_is_never_satisfied() {
		let mut r = Reader::new(&[0x01, 0x02]);
		assert_eq!(r.peek_data(-1i32), None);
		assert_eq!(
			r.read_data(-1i64).unwrap_err(),
			Error::EndOfBuffer {
				need: usize::MAX,
				have: 2
			}
		);
		assert_eq!(r.remaining(), 2);
	}

	#[test]
	fn read_data_borrows_buffer() {
		let buf = [0xAA, 0xBB, 0xCC];
		let slice = {
			let mut r = Reader::new(&buf);
			r.read_data(2u8).unwrap()
		};
		assert_eq!(slice, &[0xAA, 0xBB]);
	}
}

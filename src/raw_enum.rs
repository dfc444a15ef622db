/* src/raw_enum.rs */

use crate::{Endian, Primitive};

/// An enumeration encoded on the wire as a fixed-width integer.
///
/// Only some raw values name an enumerant; [`RawEnum::from_raw`] maps the
/// rest to `None`. The [`Reader`](crate::Reader) enum operations are written
/// against this trait.
///
/// ```
/// use apdu_reader::{RawEnum, Reader};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Color {
///     Red = 1,
///     Green = 2,
/// }
///
/// impl RawEnum for Color {
///     type Raw = u8;
///
///     fn from_raw(raw: u8) -> Option<Self> {
///         match raw {
///             1 => Some(Self::Red),
///             2 => Some(Self::Green),
///             _ => None,
///         }
///     }
/// }
///
/// let mut r = Reader::new(&[0x02]);
/// assert_eq!(r.read_enum::<Color>().unwrap(), Color::Green);
/// ```
pub trait RawEnum: Sized {
	/// Integer type carrying the raw value.
	type Raw: Primitive;

	/// Byte order of the raw value.
	const ENDIAN: Endian = Endian::Big;

	/// Map a raw value to its enumerant.
	fn from_raw(raw: Self::Raw) -> Option<Self>;
}

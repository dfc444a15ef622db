/* src/endian.rs */

/// Byte order used to decode multi-byte integers.
///
/// Single-byte values ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
	/// Most significant byte first (network order).
	#[default]
	Big,
	/// Least significant byte first.
	Little,
}

/* src/lib.rs */

//! Bounds-checked byte cursor for decoding APDU-style binary frames.
//!
//! [`Reader`] walks a borrowed byte buffer and extracts typed fields:
//!
//! - `u8` and `u16` integers in either byte order ([`Endian`]),
//! - fixed-length byte runs as zero-copy slices,
//! - enumerations carried as raw integers ([`RawEnum`]).
//!
//! Each value kind comes as a non-consuming `peek`, a strict `read`
//! returning [`Error`], and a lenient `try_read` returning `Option`.
//!
//! [`CommandHeader`] and [`Command`] decode U2F raw-message commands on top
//! of the reader.
//!
//! ```
//! use apdu_reader::Reader;
//!
//! let mut r = Reader::new(&[0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00]);
//! let cla = r.read_u8()?;
//! let ins = r.read_u8()?;
//! assert_eq!((cla, ins), (0x00, 0x03));
//! assert_eq!(r.remaining(), 5);
//! # Ok::<(), apdu_reader::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate alloc;

mod apdu;
mod endian;
mod error;
mod primitive;
mod raw_enum;
mod reader;

pub use crate::apdu::{Command, CommandCode, CommandHeader};
pub use crate::endian::Endian;
pub use crate::error::Error;
pub use crate::primitive::Primitive;
pub use crate::raw_enum::RawEnum;
pub use crate::reader::Reader;

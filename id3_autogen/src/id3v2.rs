//! Recognizing a leading ID3v2 header
//!
//! The header strip never trusts this, it cuts at the first `0xFF` byte. The parsed
//! header is only used to warn when the two disagree.

use byteorder::{BigEndian, ByteOrder};

/// The identifier at the start of an ID3v2 tag
pub const ID3V2_MARKER: [u8; 3] = *b"ID3";

const HEADER_SIZE: u32 = 10;

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

/// The fixed 10 byte header of an ID3v2 tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LeadingHeader {
	/// The tag version
	pub version: Id3v2Version,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
	/// Whether a 10 byte footer follows the contents
	pub footer: bool,
}

impl LeadingHeader {
	/// Parse the header at the start of `bytes`
	///
	/// Returns `None` if `bytes` doesn't start with a valid ID3v2 header.
	pub fn parse(bytes: &[u8]) -> Option<Self> {
		let header = bytes.get(..HEADER_SIZE as usize)?;

		if header[..3] != ID3V2_MARKER {
			return None;
		}

		let version = match header[3] {
			2 => Id3v2Version::V2,
			3 => Id3v2Version::V3,
			4 => Id3v2Version::V4,
			major => {
				log::debug!("Found an invalid ID3v2 version (v{major}.{})", header[4]);
				return None;
			},
		};

		let flags = header[5];
		let footer = version == Id3v2Version::V4 && flags & 0x10 == 0x10;

		let raw_size = BigEndian::read_u32(&header[6..]);
		// Every size byte must have its high bit clear
		if raw_size & 0x8080_8080 != 0 {
			log::debug!("ID3v2 size isn't synchsafe: {raw_size:#010X}");
			return None;
		}

		Some(Self {
			version,
			size: unsynch(raw_size),
			footer,
		})
	}

	/// The total size of the tag, including the header and footer
	pub fn full_tag_size(&self) -> u64 {
		u64::from(self.size) + u64::from(HEADER_SIZE) + if self.footer { 10 } else { 0 }
	}
}

fn unsynch(n: u32) -> u32 {
	let mut out = 0;
	let mut mask = 0x7F00_0000;

	while mask != 0 {
		out >>= 1;
		out |= n & mask;
		mask >>= 8;
	}

	out
}

/* demos/parse_command.rs */
#![allow(missing_docs)]

use apdu_reader::{Command, Endian, Error, Reader};

fn main() {
	let raw = build_sample_authenticate();

	match Command::parse(&raw) {
		Ok(cmd) => {
			println!("CLA: {:#04x}", cmd.header.cla);
			println!("INS: {:?}", cmd.header.ins);
			println!("P1/P2: {:#04x} {:#04x}", cmd.header.p1, cmd.header.p2);
			println!("Data ({} bytes)", cmd.data.len());
			if let Some(le) = cmd.max_response_length {
				println!("Le: {le}");
			}

			if let Err(e) = print_authenticate_body(cmd.data) {
				eprintln!("Malformed authenticate body: {e}");
			}
		}
		Err(e) => eprintln!("Error: {e}"),
	}

	let mut r = Reader::new(&[0x34, 0x12]);
	match r.read_with::<u16>(Endian::Little) {
		Ok(v) => println!("Little-endian u16: {v:#06x}"),
		Err(e) => eprintln!("Error: {e}"),
	}
}

fn print_authenticate_body(data: &[u8]) -> Result<(), Error> {
	let mut body = Reader::new(data);
	let challenge = body.read_data(32u8)?;
	let application = body.read_data(32u8)?;
	let handle_len = body.read_u8()?;
	let handle = body.read_data(handle_len)?;

	println!("Challenge: {challenge:02x?}");
	println!("Application: {application:02x?}");
	println!("Key handle ({handle_len} bytes): {handle:02x?}");
	if !body.is_empty() {
		println!("Trailing bytes: {}", body.remaining());
	}
	Ok(())
}

fn build_sample_authenticate() -> Vec<u8> {
	let handle = [0x5A; 16];
	let mut body = Vec::new();
	body.extend_from_slice(&[0xC1; 32]); // challenge parameter
	body.extend_from_slice(&[0xA9; 32]); // application parameter
	body.push(handle.len() as u8);
	body.extend_from_slice(&handle);

	let mut msg = vec![0x00, 0x02, 0x03, 0x00, 0x00]; // cla ins p1 p2 lc0
	let len = body.len() as u16;
	msg.push((len >> 8) as u8);
	msg.push(len as u8);
	msg.extend_from_slice(&body);
	msg.extend_from_slice(&[0x00, 0x00]); // Le
	msg
}

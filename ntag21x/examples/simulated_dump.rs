// Walk through a full session against a simulated NTAG 215: detect the tag,
// write a message, mirror the UID, protect it, and dump the pages.
//
// RUST_LOG=trace cargo run --example simulated_dump

use ntag21x::prelude::*;
use ntag21x::utils::page_dump_line;

fn main() -> Result<()> {
    env_logger::init();

    let uid: Uid = "04 5a 1c 22 6b 3f 80".parse()?;
    let tag = SimulatedTag::new(TagType::Ntag215, uid);
    let mut session = SessionBuilder::new().with_transceiver(tag).build()?;

    let uid = session.discover()?;
    let (geometry, tag_type, _) = session.determine_tag_geometry()?;
    println!("{} uid={} user pages {:?}", tag_type, uid, geometry.user_memory_page_range());

    session.write_user_memory(b"hello from ntag21x", &geometry)?;
    session.enable_uid_mirror(&geometry, 0x10, 0)?;

    let creds = Credentials::new([0x12, 0x34, 0x56, 0x78], [0xAB, 0xCD]);
    let settings = ProtectionSettings::new(creds, 0x10, AccessConfig::default());
    session.set_password(&geometry, &settings)?;
    println!(
        "authenticated: {}",
        session.authenticate(&creds.password, &creds.ack)?
    );

    for (page, data) in session.dump_pages(12)?.iter().enumerate() {
        println!("{}  {}", page_dump_line(page as u8, data.as_bytes()), data.to_ascii_safe());
    }

    session.close()?;
    Ok(())
}

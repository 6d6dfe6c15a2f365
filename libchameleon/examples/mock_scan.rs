// Scan walkthrough against a mock transport

// This example exercises the full command path (frame encode, dispatch,
// reply classification, tag identity) without a physical device: a
// MockTransport plays back canned reply frames. Run with RUST_LOG=debug
// to see the frame traffic.

use libchameleon::prelude::*;
use libchameleon::protocol::Frame;
use libchameleon::transport::MockTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut mock = MockTransport::new();
    // HF scan: 4-byte uid, ATQA 0x0044 in wire order, SAK 0x00
    mock.push_reply(Frame::encode_reply(
        CommandCode::Hf14aScan.as_u16(),
        0x00,
        &[0x04, 0x04, 0x68, 0x95, 0x71, 0x44, 0x00, 0x00],
    )?);
    // GET_VERSION record of an NTAG 215
    mock.push_reply(Frame::encode_reply(
        CommandCode::Hf14aRaw.as_u16(),
        0x00,
        &[0x00, 0x04, 0x04, 0x01, 0x01, 0x00, 0x11, 0x03],
    )?);
    // EM410x scan
    mock.push_reply(Frame::encode_reply(
        CommandCode::Em410xScan.as_u16(),
        0x40,
        &[0x4A, 0x00, 0x10, 0x57, 0xC2],
    )?);

    let mut session = Session::new(Box::new(mock))?;

    println!("=== HF 14a scan ===");
    let tag = session.hf14a_scan()?;
    println!(
        "uid = {}, atqa = {:02x}{:02x}, sak = {:02x}",
        tag.to_hex(),
        tag.atqa()[0],
        tag.atqa()[1],
        tag.sak()
    );

    session.mfu_version()?;
    println!("tag type: {}", session.tag_type()?);

    println!("\n=== EM410x scan ===");
    let tag = session.lf_scan()?;
    println!("id = {}", tag.to_hex());

    Ok(())
}

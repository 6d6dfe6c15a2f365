use libchameleon::protocol::lrc;

#[test]
fn lrc_examples() {
    assert_eq!(lrc(&[]), 0x00);
    assert_eq!(lrc(&[0x01, 0x02, 0x03]), 0xFA);
    assert_eq!(lrc(&[0xFF]), 0x01);
    assert_eq!(lrc(&[0x80, 0x80]), 0x00);
}

#[test]
fn lrc_of_em410x_scan_header() {
    // Command 3000, zero-length payload: the header bytes under the LRC
    assert_eq!(lrc(&[0x0B, 0xB8, 0x00, 0x00, 0x00, 0x00]), 0x3D);
}

#[test]
fn lrc_makes_sum_zero() {
    for data in [&[0x11u8, 0xEF, 0x07][..], &[0u8; 16][..], &[0xFFu8; 7][..]] {
        let check = lrc(data);
        let total: u8 = data
            .iter()
            .fold(check, |acc, b| acc.wrapping_add(*b));
        assert_eq!(total, 0);
    }
}

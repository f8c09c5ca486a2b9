use pn5180::protocol::*;
use pn5180::{BlockData, Command, RequestFlags};

use super::common::{bytes, sample_uid};

#[test]
fn inventory_frames() {
    assert_eq!(encode_inventory(None), bytes("26 01 00"));
    assert_eq!(encode_inventory(Some(0x90)), bytes("36 01 90 00"));
    let flags = RequestFlags::new(0x36);
    assert!(flags.is_inventory());
    assert!(!RequestFlags::addressed().is_inventory());
}

#[test]
fn addressed_frames_carry_uid_in_wire_order() {
    let uid = sample_uid();
    let frame = encode_read_single_block(&uid, 0x05);
    assert_eq!(frame, bytes("22 20 8e 3b 6a 21 50 01 04 e0 05"));
    assert!(RequestFlags::new(frame[0]).is_addressed());
}

#[test]
fn write_single_block_appends_data() {
    let uid = sample_uid();
    let cmd = Command::WriteSingleBlock {
        uid,
        block: 2,
        data: BlockData::from_bytes(bytes("de ad be ef")),
    };
    assert_eq!(cmd.encode(), bytes("22 21 8e 3b 6a 21 50 01 04 e0 02 de ad be ef"));
}

#[test]
fn multiple_block_commands_send_count_minus_one() {
    let uid = sample_uid();
    let read = encode_read_multiple_blocks(&uid, 4, 3);
    assert_eq!(read[10..], [4, 2]);

    let status = encode_get_multiple_block_security_status(&uid, 0, 8);
    assert_eq!(status[1], 0x2C);
    assert_eq!(status[10..], [0, 7]);

    let blocks = vec![
        BlockData::from_bytes(bytes("01 02 03 04")),
        BlockData::from_bytes(bytes("05 06 07 08")),
    ];
    let write = encode_write_multiple_blocks(&uid, 6, &blocks);
    assert_eq!(write[10..], bytes("06 01 01 02 03 04 05 06 07 08")[..]);
}

#[test]
fn metadata_and_state_commands() {
    let uid = sample_uid();
    let cases: Vec<(Vec<u8>, u8, Option<u8>)> = vec![
        (encode_stay_quiet(&uid), 0x02, None),
        (encode_select(&uid), 0x25, None),
        (encode_reset_to_ready(&uid), 0x26, None),
        (encode_write_afi(&uid, 0x10), 0x27, Some(0x10)),
        (encode_lock_afi(&uid), 0x28, None),
        (encode_write_dsfid(&uid, 0x01), 0x29, Some(0x01)),
        (encode_lock_dsfid(&uid), 0x2A, None),
        (encode_get_system_info(&uid), 0x2B, None),
    ];
    for (frame, code, param) in cases {
        assert_eq!(frame[0], 0x22);
        assert_eq!(frame[1], code);
        assert_eq!(&frame[2..10], uid.as_bytes());
        assert_eq!(frame.get(10).copied(), param, "command {:#04x}", code);
        assert_eq!(frame.len(), 10 + param.is_some() as usize);
    }
}

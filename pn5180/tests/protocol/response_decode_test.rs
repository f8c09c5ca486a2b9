use pn5180::protocol::*;
use pn5180::{AfiFamily, Error, ErrorKind, TagError};

use super::common::{bytes, error_response, sample_uid, system_info_response};

#[test]
fn decode_status_reports_tag_errors() {
    match decode_status(&error_response(0x10)) {
        Err(Error::Tag(TagError::BlockNotAvailable)) => {}
        other => panic!("expected BlockNotAvailable, got {:?}", other),
    }
    match decode_status(&error_response(0xB5)) {
        Err(e @ Error::Tag(TagError::CustomCommand(0xB5))) => {
            assert_eq!(e.kind(), ErrorKind::Tag);
            assert!(e.is_tag_error());
        }
        other => panic!("expected CustomCommand, got {:?}", other),
    }
    assert!(matches!(
        decode_status(&error_response(0x42)),
        Err(Error::Tag(TagError::Undefined(0x42)))
    ));
}

#[test]
fn decode_status_error_without_code_is_invalid_length() {
    assert!(matches!(
        decode_status(&[0x01]),
        Err(Error::InvalidLength { expected: 2, actual: 1 })
    ));
    assert!(matches!(decode_status(&[]), Err(Error::InvalidLength { .. })));
}

#[test]
fn system_info_memory_size() {
    let frame = system_info_response(&sample_uid());
    let payload = decode_status(&frame).unwrap();
    let info = decode_system_info(payload).unwrap();

    assert_eq!(info.uid, sample_uid());
    assert_eq!(info.dsfid, Some(0x01));
    assert_eq!(info.afi_family(), Some(AfiFamily::All));
    assert_eq!(info.block_size(), Some(4));
    assert_eq!(info.block_count(), Some(8));
    assert_eq!(info.memory.map(|m| m.total_bytes()), Some(32));
}

#[test]
fn system_info_without_optional_fields() {
    let mut payload = vec![0x00];
    payload.extend_from_slice(sample_uid().as_bytes());
    let info = decode_system_info(&payload).unwrap();
    assert_eq!(info.dsfid, None);
    assert_eq!(info.afi, None);
    assert_eq!(info.memory, None);
    assert_eq!(info.ic_reference, None);

    // flags announce memory size but the bytes are missing
    payload[0] = 0x04;
    assert!(matches!(
        decode_system_info(&payload),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn inventory_payload_keeps_wire_order() {
    let payload = bytes("00 8e 3b 6a 21 50 01 04 e0");
    let tag = decode_inventory(&payload).unwrap();
    assert_eq!(tag.dsfid, 0);
    assert_eq!(tag.uid, sample_uid());
    assert_eq!(tag.uid.to_hex(), "e0040150216a3b8e");
    assert_eq!(tag.uid.manufacturer_code(), 0x04);
}

#[test]
fn block_payloads() {
    let blocks = decode_blocks(&bytes("01 02 03 04 05 06 07 08"), 4, 2).unwrap();
    assert_eq!(blocks[1].as_bytes(), &[5, 6, 7, 8]);
    assert!(decode_blocks(&bytes("01 02 03"), 4, 1).is_err());
    assert_eq!(decode_security_status(&bytes("00 01 00"), 3).unwrap(), vec![0, 1, 0]);
}

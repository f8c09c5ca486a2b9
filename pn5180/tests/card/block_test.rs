use pn5180::{BlockData, Error, TagError};

use super::common::{bytes, error_response, ok_response, reader, sample_uid};

#[test]
fn read_single_block_payload_after_flags() {
    let mut r = reader(vec![bytes("00 4e 46 43 21")]);
    let block = r.read_single_block(&sample_uid(), 0, 4).unwrap();
    assert_eq!(block.as_bytes(), b"NFC!");
    assert_eq!(block.to_ascii_safe(), "NFC!");
}

#[test]
fn read_past_end_of_memory() {
    let mut r = reader(vec![error_response(0x10)]);
    match r.read_single_block(&sample_uid(), 200, 4) {
        Err(Error::Tag(TagError::BlockNotAvailable)) => {}
        other => panic!("expected BlockNotAvailable, got {:?}", other),
    }
}

#[test]
fn write_to_locked_block_is_reported() {
    let mut r = reader(vec![error_response(0x12)]);
    let data = BlockData::from_bytes(bytes("01 02 03 04"));
    assert!(matches!(
        r.write_single_block(&sample_uid(), 3, &data),
        Err(Error::Tag(TagError::BlockIsLocked))
    ));
}

#[test]
fn multiple_blocks_and_security_status() {
    let uid = sample_uid();
    let mut r = reader(vec![
        bytes("00 01 01 01 01 02 02 02 02"),
        bytes("00 00 01"),
        ok_response(),
    ]);
    let blocks = r.read_multiple_blocks(&uid, 0, 2, 4).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].as_bytes(), &[2, 2, 2, 2]);

    assert_eq!(r.get_multiple_block_security_status(&uid, 0, 2).unwrap(), vec![0, 1]);

    r.write_multiple_blocks(&uid, 0, &blocks).unwrap();
    let sent = r.frontend().bus().rf_frames.last().unwrap().clone();
    assert_eq!(sent[1], 0x24);
    assert_eq!(sent[10..12], [0, 1]);
}

#[test]
fn zero_counts_send_nothing() {
    let uid = sample_uid();
    let mut r = reader(vec![]);
    assert!(r.read_multiple_blocks(&uid, 0, 0, 4).unwrap().is_empty());
    assert!(r.get_multiple_block_security_status(&uid, 0, 0).unwrap().is_empty());
    r.write_multiple_blocks(&uid, 0, &[]).unwrap();
    assert!(r.frontend().bus().rf_frames.is_empty());
}

#[test]
fn lock_block_sends_block_number() {
    let mut r = reader(vec![ok_response()]);
    r.lock_block(&sample_uid(), 7).unwrap();
    let sent = &r.frontend().bus().rf_frames[0];
    assert_eq!(sent[1], 0x22);
    assert_eq!(sent[10], 7);
}

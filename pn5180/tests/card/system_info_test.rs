use anyhow::Result;
use pn5180::{AfiFamily, BlockData, Error, RfConfig, TagError};

use super::common::{
    error_response, inventory_response, ok_response, reader, sample_uid, system_info_response,
};

#[test]
fn full_reader_flow() -> Result<()> {
    let uid = sample_uid();
    let mut r = reader(vec![
        inventory_response(0x00, &uid),
        system_info_response(&uid),
        vec![0x00, 0xCA, 0xFE, 0xBA, 0xBE],
        ok_response(),
    ]);

    r.setup_rf()?;
    assert_eq!(r.frontend().bus().rf_configs, vec![RfConfig::ISO15693_ASK100_26]);

    let tag = r.inventory()?;
    let info = r.get_system_info(&tag.uid)?;
    let block_size = info.block_size().unwrap_or(4) as usize;
    assert_eq!(block_size, 4);
    assert_eq!(info.block_count(), Some(8));

    let last = (info.block_count().unwrap_or(1) - 1) as u8;
    let block = r.read_single_block(&tag.uid, last, block_size)?;
    assert_eq!(block.to_hex(), "ca fe ba be");

    r.write_single_block(&tag.uid, last, &BlockData::from_bytes(vec![0u8; block_size]))?;
    r.rf_off()?;
    assert_eq!(r.frontend().bus().pending_tag_responses(), 0);
    Ok(())
}

#[test]
fn afi_and_dsfid_writes() -> Result<()> {
    let uid = sample_uid();
    let mut r = reader(vec![ok_response(), ok_response(), ok_response(), error_response(0x11)]);
    r.write_afi(&uid, 0x90)?;
    r.lock_afi(&uid)?;
    r.write_dsfid(&uid, 0x01)?;
    assert!(matches!(
        r.lock_dsfid(&uid),
        Err(Error::Tag(TagError::BlockAlreadyLocked))
    ));

    let sent = &r.frontend().bus().rf_frames;
    assert_eq!(sent[0][10], 0x90);
    assert_eq!(AfiFamily::from_afi(sent[0][10]), AfiFamily::ItemManagement);
    assert_eq!(sent[2][10], 0x01);
    Ok(())
}

#[test]
fn system_info_error_response() {
    let mut r = reader(vec![error_response(0x02)]);
    match r.get_system_info(&sample_uid()) {
        Err(Error::Tag(e)) => {
            assert_eq!(e, TagError::NotRecognized);
            assert_eq!(e.code(), 0x02);
        }
        other => panic!("expected tag error, got {:?}", other),
    }
}

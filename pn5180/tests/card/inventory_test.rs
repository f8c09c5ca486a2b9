use pn5180::constants::*;
use pn5180::{Error, Iso15693};

use super::common::{inventory_response, ok_response, reader, sample_uid};

#[test]
fn inventory_returns_uid_lsb_first() {
    let uid = sample_uid();
    let mut r = reader(vec![inventory_response(0x00, &uid)]);
    let tag = r.inventory().unwrap();
    assert_eq!(tag.uid, uid);
    assert_eq!(tag.uid.as_bytes()[7], 0xE0);
    assert_eq!(r.frontend().bus().rf_frames, vec![vec![0x26, 0x01, 0x00]]);
}

#[test]
fn empty_field_is_no_card_detected() {
    let mut r = reader(vec![]);
    match r.inventory() {
        Err(e @ Error::NoCardDetected) => assert!(e.is_tag_error()),
        other => panic!("expected NoCardDetected, got {:?}", other),
    }
    assert_eq!(r.detect().unwrap(), None);
}

#[test]
fn not_ready_transceiver_sends_nothing() {
    let mut r = reader(vec![inventory_response(0x00, &sample_uid())]);
    r.frontend_mut().bus_mut().rf_status_override = Some(0x0500_0000);
    assert!(matches!(r.inventory(), Err(Error::NotReady(_))));
    assert!(r.frontend().bus().rf_frames.is_empty());
    assert_eq!(r.frontend().bus().pending_tag_responses(), 1);
}

#[test]
fn quiet_select_and_ready_are_addressed() {
    let uid = sample_uid();
    let mut r = reader(vec![]);

    // a quiet tag never answers
    r.stay_quiet(&uid).unwrap();

    r.frontend_mut().bus_mut().push_tag_response(ok_response());
    r.frontend_mut().bus_mut().push_tag_response(ok_response());
    r.select(&uid).unwrap();
    r.reset_to_ready(&uid).unwrap();

    let codes: Vec<u8> = r.frontend().bus().rf_frames.iter().map(|f| f[1]).collect();
    assert_eq!(codes, vec![0x02, 0x25, 0x26]);
    assert!(r.frontend().bus().rf_frames.iter().all(|f| f[0] == 0x22));
}

#[test]
fn reader_clears_rx_flags_after_each_reply() {
    let uid = sample_uid();
    let mut r = reader(vec![inventory_response(0x01, &uid), inventory_response(0x02, &uid)]);
    assert_eq!(r.inventory().unwrap().dsfid, 0x01);
    assert_eq!(r.inventory().unwrap().dsfid, 0x02);
    let irq = r.frontend().bus().irq_status();
    assert_eq!(irq & (IRQ_RX_SOF_DET | IRQ_RX | IRQ_TX | IRQ_IDLE), 0);
}

#[test]
fn borrowed_device_outlives_reader() {
    let mut dev = pn5180::test_support::initialized_mock_device().unwrap();
    dev.bus_mut().push_tag_response(inventory_response(0x00, &sample_uid()));
    {
        let mut r = Iso15693::new(&mut dev);
        r.inventory().unwrap();
    }
    assert_eq!(dev.bus().rf_frames.len(), 1);
}

use std::time::Duration;

use pn5180::transport::{Clock, HostInterface, MockBus, MockClock};
use pn5180::{Config, Error, ErrorKind};

fn host_with_timeout(timeout: Duration) -> HostInterface<MockBus, MockClock> {
    super::common::init_logger();
    let config = Config::default().with_busy_timeout(timeout);
    HostInterface::new(MockBus::new(), MockClock::new(), config)
}

#[test]
fn busy_stuck_high_times_out_on_virtual_clock() {
    let mut h = host_with_timeout(Duration::from_millis(20));
    h.bus_mut().stuck_busy = Some(true);

    let before = h.clock().now();
    let err = h.transceive(&[0x04, 0x02], 4).unwrap_err();
    let elapsed = h.clock().now() - before;

    match err {
        Error::BusyTimeout {
            expected_busy: false,
            timeout,
        } => assert_eq!(timeout, Duration::from_millis(20)),
        other => panic!("expected BusyTimeout, got {:?}", other),
    }
    assert_eq!(err.kind(), ErrorKind::Hardware);
    assert!(elapsed >= Duration::from_millis(20));
    assert!(elapsed <= Duration::from_millis(20) + Config::default().poll_interval);
    // the chip was never selected
    assert_eq!(h.bus().transactions, 0);
}

#[test]
fn busy_never_rising_releases_nss() {
    let mut h = host_with_timeout(Duration::from_millis(5));
    h.bus_mut().stuck_busy = Some(false);

    match h.transceive(&[0x00, 0x01, 0, 0, 0, 0], 0) {
        Err(Error::BusyTimeout {
            expected_busy: true,
            ..
        }) => {}
        other => panic!("expected BusyTimeout, got {:?}", other),
    }
    assert!(!h.bus().is_selected());
    assert_eq!(h.bus().transactions, 1);
}

#[test]
fn bus_failure_is_hardware_error() {
    let mut h = host_with_timeout(Duration::from_millis(5));
    h.bus_mut().fail_transfers = true;
    let err = h.transceive(&[0x04, 0x02], 4).unwrap_err();
    assert!(matches!(err, Error::Bus(_)));
    assert!(err.is_recoverable());
    assert!(!h.bus().is_selected());
}

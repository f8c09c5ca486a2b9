use anyhow::Result;
use pn5180::constants::*;
use pn5180::test_support::seeded_bus;
use pn5180::transport::MockClock;
use pn5180::{Config, Error, Initialized, Pn5180, Pn5180Builder, Uninitialized, ms};

#[test]
fn builder_initializes_and_reads_versions() -> Result<()> {
    super::common::init_logger();
    let mut dev: Pn5180<_, _, Initialized> = Pn5180Builder::new(seeded_bus(vec![]))
        .with_clock(MockClock::new())
        .initialize()?;

    assert_eq!(dev.product_version()?.to_string(), "4.0");
    assert_eq!(dev.firmware_version()?.to_string(), "4.0");
    assert_eq!(dev.eeprom_version()?.to_string(), "153.0");
    assert_eq!(dev.irq_status()?.bits(), 0);
    Ok(())
}

#[test]
fn uninitialized_reset_consumes_handle() -> Result<()> {
    let raw: Pn5180<_, _, Uninitialized> = Pn5180Builder::new(seeded_bus(vec![]))
        .with_clock(MockClock::new())
        .build_uninitialized();
    assert_eq!(raw.bus().transactions, 0);

    let dev = raw.reset()?;
    assert!(!dev.bus().in_reset());
    // IRQ_CLEAR with every bit set closes the sequence
    let clears = dev.bus().frames_with_opcode(CMD_WRITE_REGISTER);
    assert_eq!(
        clears.last().map(|f| f.as_slice()),
        Some(&[CMD_WRITE_REGISTER, REG_IRQ_CLEAR, 0xFF, 0xFF, 0xFF, 0xFF][..])
    );
    Ok(())
}

#[test]
fn reset_clears_pending_irqs() -> Result<()> {
    let mut dev = Pn5180::new(seeded_bus(vec![]), MockClock::new(), Config::default()).reset()?;
    dev.bus_mut().raise_irq(IRQ_RX | IRQ_TX | IRQ_RX_SOF_DET);
    assert_ne!(dev.irq_status()?.bits(), 0);

    dev.reset()?;
    assert_eq!(dev.irq_status()?.bits(), 0);
    Ok(())
}

#[test]
fn reset_without_idle_reports_irq_timeout() {
    let config = Config::default().with_irq_timeout(ms(20));
    let mut bus = seeded_bus(vec![]);
    bus.suppressed_irqs = IRQ_IDLE;

    let result = Pn5180Builder::new(bus)
        .with_clock(MockClock::new())
        .with_config(config)
        .initialize();
    match result {
        Err(Error::IrqTimeout { mask, timeout }) => {
            assert_eq!(mask, IRQ_IDLE);
            assert_eq!(timeout, ms(20));
        }
        Err(other) => panic!("expected IrqTimeout, got {:?}", other),
        Ok(_) => panic!("expected IrqTimeout, got a device"),
    }
}

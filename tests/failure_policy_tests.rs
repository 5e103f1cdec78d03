//! Failure handling: one attempt per call, writes dropped, reads defaulted,
//! everything recorded in the diagnostics.

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use pbhub::{Error, Function, PbHub, Rgb, TransportError, Variant};

const ADDR: u8 = 0x61;

fn hub(expectations: &[I2cTransaction], variant: Variant) -> PbHub<I2cMock> {
    let _ = env_logger::builder().is_test(true).try_init();
    PbHub::new(I2cMock::new(expectations), ADDR, variant)
}

#[test]
fn failed_reads_return_defaults_without_retry() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![0x65], vec![0x01]).with_error(ErrorKind::Other),
        I2cTransaction::write_read(ADDR, vec![0x66], vec![0x34, 0x02])
            .with_error(ErrorKind::Other),
        I2cTransaction::write_read(ADDR, vec![0xFE], vec![9]).with_error(ErrorKind::Other),
        I2cTransaction::write_read(ADDR, vec![0xFA], vec![1]).with_error(ErrorKind::Other),
    ];
    let mut hub = hub(&expectations, Variant::FullMap);

    assert!(!hub.digital_read(21));
    assert_eq!(hub.analog_read(21), 0);
    assert_eq!(hub.firmware_version(), 0);
    assert_eq!(hub.led_show_mode(), 0);

    assert_eq!(hub.diagnostics().failed_reads, 4);
    assert_eq!(hub.diagnostics().failed_writes, 0);
    // done() panics on any extra (retried) transaction
    hub.release().done();
}

#[test]
fn failed_writes_are_recorded_and_dropped() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x70, 0x01]).with_error(nack),
        I2cTransaction::write(ADDR, vec![0x4A, 0, 0, 4, 0, 1, 1, 1]).with_error(nack),
        I2cTransaction::write(ADDR, vec![0x5C, 45]),
    ];
    let mut hub = hub(&expectations, Variant::FullMap);

    hub.digital_write(30, true);
    hub.fill_led_color(0, 0, 4, Rgb::new(1, 1, 1));
    // The caller carries on after a failure
    hub.set_servo_angle(10, 45);

    assert_eq!(hub.diagnostics().failed_writes, 2);
    match hub.last_error() {
        Some(Error::Transport { register, source }) => {
            assert_eq!(*register, 0x4A);
            assert_eq!(*source, TransportError::Nack { address: ADDR });
        }
        other => panic!("Expected Transport error, got: {:?}", other),
    }
    hub.release().done();
}

#[test]
fn error_kinds_map_to_transport_errors() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![0x44], vec![0])
            .with_error(ErrorKind::ArbitrationLoss),
        I2cTransaction::write_read(ADDR, vec![0x44], vec![0]).with_error(ErrorKind::Bus),
    ];
    let mut hub = hub(&expectations, Variant::FullMap);

    hub.digital_read(0);
    assert!(matches!(
        hub.take_last_error(),
        Some(Error::Transport {
            register: 0x44,
            source: TransportError::ArbitrationLost { address: ADDR }
        })
    ));
    assert!(hub.last_error().is_none());

    hub.digital_read(0);
    assert!(matches!(
        hub.last_error(),
        Some(Error::Transport {
            source: TransportError::Bus { .. },
            ..
        })
    ));
    assert_eq!(hub.diagnostics().failed_reads, 2);

    hub.reset_diagnostics();
    assert!(!hub.diagnostics().has_failures());
    hub.release().done();
}

#[test]
fn reduced_map_skips_extended_functions() {
    // No expectations: nothing may reach the bus
    let mut hub = hub(&[], Variant::ReducedMap);

    hub.set_pwm(10, 100);
    hub.set_led_num(0, 8);
    hub.set_led_color(0, 0, Rgb::BLACK);
    hub.fill_led_color(0, 0, 8, Rgb::BLACK);
    hub.set_led_brightness(0, 10);
    hub.set_led_show_mode(1);
    assert_eq!(hub.led_show_mode(), 0);
    assert_eq!(hub.firmware_version(), 0);

    assert_eq!(hub.diagnostics().failed_writes, 6);
    assert_eq!(hub.diagnostics().failed_reads, 2);
    assert!(matches!(
        hub.last_error(),
        Some(Error::UnsupportedFeature {
            variant: Variant::ReducedMap,
            function: Function::FirmwareVersion
        })
    ));
    hub.release().done();
}

#[test]
fn error_messages_name_the_register() {
    let err = Error::Transport {
        register: 0x65,
        source: TransportError::Timeout { address: 0x61 },
    };
    assert_eq!(
        err.to_string(),
        "Transaction on register 0x65 failed: Bus timeout while addressing 0x61"
    );
    let err = Error::UnsupportedFeature {
        variant: Variant::ReducedMap,
        function: Function::WritePwm,
    };
    assert_eq!(err.to_string(), "PWM is not available on the reduced register map");
}

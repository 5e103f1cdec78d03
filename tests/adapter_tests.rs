//! Host adapter tests: inversion, float scaling and the LED-count gate.

use approx::assert_relative_eq;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use pbhub::{
    AnalogInput, AnalogSensor, DigitalIo, GpioPin, HubPin, LedStrip, LightConfig, PbHub,
    PinConfig, PinMode, PwmOutput, PwmPin, Rgb, RgbStrip, SensorConfig, ServoConfig,
    ServoDrive, ServoOutput, ServoPin, Variant,
};

// Records every capability call instead of touching a bus
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
    level: bool,
    analog: u16,
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Write(u8, bool),
    Read(u8),
    Analog(u8),
    Duty(u8, u8),
    Angle(u8, u8),
    Pulse(u8, u16),
    Length(u8, u16),
    Pixel(u8, u16, Rgb),
    Fill(u8, u16, u16, Rgb),
    Brightness(u8, u8),
}

impl DigitalIo for Recorder {
    fn write_level(&mut self, pin: u8, high: bool) {
        self.calls.push(Call::Write(pin, high));
    }
    fn read_level(&mut self, pin: u8) -> bool {
        self.calls.push(Call::Read(pin));
        self.level
    }
}

impl AnalogInput for Recorder {
    fn read_analog(&mut self, pin: u8) -> u16 {
        self.calls.push(Call::Analog(pin));
        self.analog
    }
}

impl PwmOutput for Recorder {
    fn write_duty(&mut self, pin: u8, duty: u8) {
        self.calls.push(Call::Duty(pin, duty));
    }
}

impl ServoOutput for Recorder {
    fn write_angle(&mut self, pin: u8, angle: u8) {
        self.calls.push(Call::Angle(pin, angle));
    }
    fn write_pulse_us(&mut self, pin: u8, micros: u16) {
        self.calls.push(Call::Pulse(pin, micros));
    }
}

impl LedStrip for Recorder {
    fn set_length(&mut self, slot: u8, count: u16) {
        self.calls.push(Call::Length(slot, count));
    }
    fn set_pixel(&mut self, slot: u8, index: u16, color: Rgb) {
        self.calls.push(Call::Pixel(slot, index, color));
    }
    fn fill(&mut self, slot: u8, start: u16, count: u16, color: Rgb) {
        self.calls.push(Call::Fill(slot, start, count, color));
    }
    fn set_strip_brightness(&mut self, slot: u8, value: u8) {
        self.calls.push(Call::Brightness(slot, value));
    }
}

#[test]
fn gpio_pin_applies_inversion() {
    let mut hub = Recorder::default();
    let mut config = PinConfig::new(30);
    config.inverted = true;
    let pin = GpioPin::from_config(&config).unwrap();

    pin.digital_write(&mut hub, true);
    pin.digital_write(&mut hub, false);
    hub.level = true;
    assert!(!pin.digital_read(&mut hub));
    hub.level = false;
    assert!(pin.digital_read(&mut hub));

    assert_eq!(
        hub.calls,
        vec![
            Call::Write(30, false),
            Call::Write(30, true),
            Call::Read(30),
            Call::Read(30)
        ]
    );
    assert_eq!(pin.to_string(), "pbhub pin 30 (inverted=yes)");
}

#[test]
fn gpio_pin_mode_is_bookkeeping_only() {
    let mut pin = GpioPin::new(HubPin::new(11).unwrap());
    assert_eq!(pin.mode(), PinMode::NONE);
    pin.pin_mode(PinMode::INPUT);
    assert_eq!(pin.mode(), PinMode::INPUT);
    assert!(!pin.is_inverted());
    assert_eq!(pin.to_string(), "pbhub pin 11 (inverted=no)");
}

#[test]
fn pwm_pin_scales_state_to_duty() {
    let mut hub = Recorder::default();
    let pin = PwmPin::new(HubPin::new(21).unwrap());
    pin.write_state(&mut hub, 0.0);
    pin.write_state(&mut hub, 0.5);
    pin.write_state(&mut hub, 1.0);
    pin.write_state(&mut hub, 1.5);
    assert_eq!(
        hub.calls,
        vec![
            Call::Duty(21, 0),
            Call::Duty(21, 127),
            Call::Duty(21, 255),
            Call::Duty(21, 255)
        ]
    );
}

#[test]
fn servo_pin_angle_drive() {
    let mut hub = Recorder::default();
    let servo = ServoPin::from_config(&ServoConfig {
        number: 40,
        drive: ServoDrive::Angle,
    })
    .unwrap();
    servo.write_state(&mut hub, 0.5);
    servo.write_state(&mut hub, 1.0);
    assert_eq!(hub.calls, vec![Call::Angle(40, 90), Call::Angle(40, 180)]);
}

#[test]
fn servo_pin_pulse_drive() {
    let mut hub = Recorder::default();
    let servo = ServoPin::new(
        HubPin::new(41).unwrap(),
        ServoDrive::Pulse {
            min_us: 500,
            max_us: 2500,
        },
    );
    servo.write_state(&mut hub, 0.0);
    servo.write_state(&mut hub, 0.5);
    servo.write_state(&mut hub, 2.0);
    assert_eq!(
        hub.calls,
        vec![
            Call::Pulse(41, 500),
            Call::Pulse(41, 1500),
            Call::Pulse(41, 2500)
        ]
    );

    for micros in [500u16, 1000, 1234, 2500] {
        let state = ServoPin::state_for_pulse(micros, 500, 2500);
        assert_eq!(ServoPin::pulse_for(state, 500, 2500), micros);
    }
    assert_relative_eq!(ServoPin::state_for_pulse(1500, 500, 2500), 0.5);
    assert_relative_eq!(ServoPin::state_for_pulse(100, 500, 2500), 0.0);
    assert_relative_eq!(ServoPin::state_for_pulse(1000, 1000, 1000), 0.0);
}

#[test]
fn analog_sensor_publishes_raw_value() {
    let mut hub = Recorder {
        analog: 564,
        ..Default::default()
    };
    let mut sensor = AnalogSensor::from_config(&SensorConfig::new(20)).unwrap();
    assert_eq!(sensor.state(), None);
    assert_eq!(sensor.update(&mut hub), 564);
    assert_eq!(sensor.state(), Some(564));
    assert_eq!(sensor.update_interval().as_secs(), 60);
    assert_eq!(hub.calls, vec![Call::Analog(20)]);
}

#[test]
fn rgb_strip_sets_count_once_then_fills() {
    let mut hub = Recorder::default();
    let mut strip = RgbStrip::from_config(&LightConfig {
        slot: 2,
        led_count: 16,
    })
    .unwrap();
    assert!(!strip.supports_brightness());

    strip.write_state(&mut hub, 1.0, 0.0, 0.0);
    strip.write_color(&mut hub, Rgb::new(0, 0, 9));
    assert!(strip.state().initialized);

    // Unchanged count keeps the gate closed
    strip.set_led_count(16);
    strip.write_color(&mut hub, Rgb::BLACK);

    strip.set_led_count(30);
    assert!(!strip.state().initialized);
    strip.write_color(&mut hub, Rgb::new(1, 2, 3));

    assert_eq!(
        hub.calls,
        vec![
            Call::Length(2, 16),
            Call::Fill(2, 0, 16, Rgb::new(255, 0, 0)),
            Call::Fill(2, 0, 16, Rgb::new(0, 0, 9)),
            Call::Fill(2, 0, 16, Rgb::BLACK),
            Call::Length(2, 30),
            Call::Fill(2, 0, 30, Rgb::new(1, 2, 3)),
        ]
    );
}

#[test]
fn rgb_strip_on_real_hub() {
    let expectations = [
        I2cTransaction::write(0x61, vec![0x58, 0x03, 0x00]),
        I2cTransaction::write(0x61, vec![0x5A, 0x00, 0x00, 0x03, 0x00, 0, 255, 0]),
        I2cTransaction::write(0x61, vec![0x5A, 0x00, 0x00, 0x03, 0x00, 0, 0, 0]),
    ];
    let mut hub = PbHub::new(I2cMock::new(&expectations), 0x61, Variant::FullMap);
    let mut strip = RgbStrip::new(1, 3);
    strip.write_state(&mut hub, 0.0, 1.0, 0.0);
    strip.write_color(&mut hub, Rgb::BLACK);
    hub.release().done();
}

#[test]
fn adapters_reject_bad_config() {
    assert!(GpioPin::from_config(&PinConfig::new(62)).is_err());
    assert!(RgbStrip::from_config(&LightConfig::new(7)).is_err());
    assert!(ServoPin::from_config(&ServoConfig {
        number: 3,
        drive: ServoDrive::Angle
    })
    .is_err());
}

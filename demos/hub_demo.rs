use hidapi::HidApi;
use pbhub::{
    GpioPin, HidBridge, HubConfig, PbHub, PinConfig, PwmPin, Result, ServoDrive, ServoPin,
};
use std::{thread, time::Duration};

// Blink slot 3 channel 0, sweep a servo on slot 1 and dim slot 5.
const LED_PIN: u8 = 30;
const SERVO_PIN: u8 = 10;
const PWM_PIN: u8 = 51;

fn main() -> Result<()> {
    env_logger::init();
    let hid_api = HidApi::new()?;
    println!("Opening first XR2280x bridge...");
    let bridge = HidBridge::open_first(&hid_api)?;
    bridge.set_speed_khz(100)?;

    let mut hub = PbHub::from_config(bridge, &HubConfig::default())?;
    println!(
        "Hub at 0x{:02X}, firmware version {}",
        hub.address(),
        hub.firmware_version()
    );
    if let Some(err) = hub.take_last_error() {
        eprintln!("Error: hub did not answer: {}", err);
        return Ok(());
    }

    let led = GpioPin::from_config(&PinConfig::new(LED_PIN))?;
    let servo = ServoPin::new(pbhub::HubPin::new(SERVO_PIN)?, ServoDrive::Angle);
    let pwm = PwmPin::new(pbhub::HubPin::new(PWM_PIN)?);

    println!("Running {} / servo {} / pwm {} (Press Ctrl+C to stop)", led, SERVO_PIN, PWM_PIN);
    let mut step = 0u32;
    loop {
        let state = (step % 11) as f32 / 10.0;
        led.digital_write(&mut hub, step % 2 == 0);
        servo.write_state(&mut hub, state);
        pwm.write_state(&mut hub, state);
        println!("analog(20) = {}", hub.analog_read(20));

        if hub.diagnostics().has_failures() {
            eprintln!("Bus failures so far: {:?}", hub.diagnostics());
            hub.reset_diagnostics();
        }
        step = step.wrapping_add(1);
        thread::sleep(Duration::from_millis(250));
    }
}

use hidapi::HidApi;
use pbhub::{HidBridge, LightConfig, PbHub, Result, Rgb, RgbStrip, Variant, DEFAULT_ADDRESS};
use std::{thread, time::Duration};

const STRIP_SLOT: u8 = 0;
const STRIP_LEN: u16 = 16;

fn main() -> Result<()> {
    env_logger::init();
    let hid_api = HidApi::new()?;
    let bridge = HidBridge::open_first(&hid_api)?;
    let mut hub = PbHub::new(bridge, DEFAULT_ADDRESS, Variant::FullMap);

    let mut strip = RgbStrip::from_config(&LightConfig {
        slot: STRIP_SLOT,
        led_count: STRIP_LEN,
    })?;

    println!("Show mode: {}", hub.led_show_mode());
    hub.set_led_brightness(STRIP_SLOT, 64);

    for color in [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)] {
        println!("Filling slot {} with {:?}", STRIP_SLOT, color);
        strip.write_color(&mut hub, color);
        thread::sleep(Duration::from_millis(500));
    }

    // Walk a single white pixel along the strip
    for index in 0..STRIP_LEN {
        strip.write_color(&mut hub, Rgb::BLACK);
        hub.set_led_color(STRIP_SLOT, index, Rgb::new(255, 255, 255));
        thread::sleep(Duration::from_millis(100));
    }
    strip.write_color(&mut hub, Rgb::BLACK);

    match hub.last_error() {
        Some(err) => eprintln!("Last failure: {}", err),
        None => println!("Done, no bus failures."),
    }
    Ok(())
}

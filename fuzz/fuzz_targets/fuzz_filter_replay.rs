//! Fuzz the touchpad filter with arbitrary motion.
//!
//! The first byte picks resolution, averaging and speed. Each following
//! 7-byte record is `dx: i16, dy: i16, step_us: u16, flags: u8`; flag bit 0
//! restarts the filter before the event, bit 1 uses the constant path.
//!
//! Run with:
//!   cargo fuzz run fuzz_filter_replay

#![no_main]

use glide_filters::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&header, records)) = data.split_first() else {
        return;
    };

    let dpi = 100 + u32::from(header) * 16;
    let averaging = header & 1 == 1;
    let Ok(mut filter) = TouchpadAccelerator::create(dpi, DeltaSmoothener::BLUETOOTH, averaging)
    else {
        return;
    };
    let preference = (f64::from(header) / 127.5 - 1.0).clamp(-1.0, 1.0);
    if filter.set_speed(preference).is_err() {
        return;
    }

    let mut time = 0u64;
    for record in records.chunks_exact(7) {
        let dx = f64::from(i16::from_le_bytes([record[0], record[1]])) / 8.0;
        let dy = f64::from(i16::from_le_bytes([record[2], record[3]])) / 8.0;
        time += u64::from(u16::from_le_bytes([record[4], record[5]]));
        let flags = record[6];

        if flags & 1 != 0 {
            filter.restart(time);
        }
        let delta = DeviceFloatCoords::new(dx, dy);
        let out = if flags & 2 != 0 {
            filter.filter_constant(delta, time)
        } else {
            filter.filter(delta, time)
        };
        assert!(out.x.is_finite() && out.y.is_finite());
        assert!(filter.velocity() >= 0.0);
    }
});

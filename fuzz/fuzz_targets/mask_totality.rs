#![no_main]

// Every strategy must be total over arbitrary text: no panics, and the
// formatted result never exceeds the declared length cap.

use libfuzzer_sys::fuzz_target;
use mask_core::Strategy;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    for strategy in Strategy::ALL {
        let formatted = strategy.apply(&raw);
        let _ = strategy.validate(&formatted);
        let _ = strategy.validate(&raw);

        if let Some(cap) = strategy.max_length() {
            assert!(
                formatted.chars().count() <= cap,
                "{} exceeded its cap: {formatted:?}",
                strategy.name()
            );
        }
    }
});

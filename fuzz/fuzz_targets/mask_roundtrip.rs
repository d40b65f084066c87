#![no_main]

// Formatting must be idempotent on its own output, and the masks may only
// ever add punctuation: the digits of the output are a prefix of the
// digits of the input.

use libfuzzer_sys::fuzz_target;
use mask_core::{Strategy, only_digits};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let raw_digits = only_digits(&raw);

    for strategy in Strategy::ALL {
        let once = strategy.format(&raw);
        assert_eq!(
            strategy.format(&once),
            once,
            "{} is not idempotent on {raw:?}",
            strategy.name()
        );

        // Currency re-renders digits (leading zeros collapse, cents pad),
        // so the prefix property only holds for the template masks.
        if !matches!(strategy, Strategy::Normal | Strategy::Currency) {
            let out_digits = only_digits(&once);
            assert!(
                raw_digits.starts_with(&*out_digits),
                "{} invented digits: {raw:?} -> {once:?}",
                strategy.name()
            );
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let report = lws_validate_core::validate_bytes(data);
    // Rendering must not panic either, whatever the outcome.
    let _ = report.lines();
    let _ = report.exit_code();
});

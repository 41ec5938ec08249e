#![no_main]
use libfuzzer_sys::fuzz_target;
use logshim::Config;

fuzz_target!(|data: &str| {
    // Must not panic on any input, including out-of-range level codes
    if let Ok(config) = Config::parse(data) {
        let _ = config.threshold();
        let _ = config.parse_source();
    }
});

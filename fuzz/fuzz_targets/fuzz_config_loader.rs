#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz TOML parsing of Config: arbitrary input must never panic.
    // Both parse errors and validation errors are acceptable outcomes.
    let parsed = toml::from_str::<scale_config::Config>(data);
    if let Ok(cfg) = parsed {
        let _ = cfg.validate();
    }
});

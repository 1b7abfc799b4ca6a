use std::fs;

use crate::die;

pub fn config_export() {
    print!("{}", ac_core::settings::default_toml());
}

pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let c = die!(ac_core::settings::parse_config_toml(&content), "Error: {}");
    println!(
        "OK: cache.capacity={}, search.max_results={}, cleanup.max_age_secs={}, weights=({}, {}, {})",
        c.cache.capacity,
        c.search.max_results,
        c.cleanup.max_age_secs,
        c.weights.base,
        c.weights.frequency,
        c.weights.recency
    );
}

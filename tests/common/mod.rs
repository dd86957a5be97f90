// SPDX-License-Identifier: MIT

use std::sync::Once;

use wilderlist_progress::{AscentLog, Mountain};

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary (RUST_LOG aware).
#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build an ascent log from (mountain id, dates) pairs.
#[allow(dead_code)]
pub fn log_with(entries: &[(&str, &[&str])]) -> AscentLog {
    let mut log = AscentLog::new();
    for (mountain_id, dates) in entries {
        for date in *dates {
            log.record(*mountain_id, *date);
        }
    }
    log
}

/// Build `count` mountains with ids "m0", "m1", ...
#[allow(dead_code)]
pub fn mountains(count: usize) -> Vec<Mountain> {
    (0..count)
        .map(|i| Mountain::new(format!("m{}", i), format!("Mountain {}", i)))
        .collect()
}

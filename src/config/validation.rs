//! Validation rules for simulator configuration.
//!
//! Every rule is checked and all violations are accumulated, so a bad
//! config file is reported in one pass.

use crate::config::error::ConfigViolation;
use crate::config::SimConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Upper bound for both delays, in milliseconds.
pub const MAX_DELAY_MS: u64 = 60_000;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check_auto_delay(config: &SimConfig) -> Check {
    match config.auto_delay_ms {
        0 => Validation::fail(ConfigViolation::AutoDelayTooShort(0)),
        value if value > MAX_DELAY_MS => Validation::fail(ConfigViolation::AutoDelayTooLong {
            max: MAX_DELAY_MS,
            value,
        }),
        _ => Validation::success(()),
    }
}

fn check_menu_pause(config: &SimConfig) -> Check {
    match config.menu_pause_ms {
        Some(value) if value > MAX_DELAY_MS => {
            Validation::fail(ConfigViolation::MenuPauseTooLong {
                max: MAX_DELAY_MS,
                value,
            })
        }
        _ => Validation::success(()),
    }
}

/// Run all rules, accumulating ALL violations.
pub fn validate(config: &SimConfig) -> Check {
    let checks = vec![check_auto_delay(config), check_menu_pause(config)];
    Validation::all_vec(checks).map(|_| ())
}

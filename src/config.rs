//! Calculation policy.
//!
//! The engine itself accepts every prefix in `0..=32`. A [`Policy`] narrows
//! that range, switches the reserved-address checks on or off and controls
//! subnet enumeration. Values come from [`Policy::default`], then the
//! `SUBNET_CALC_*` environment variables (a `.env` file is loaded by the
//! binary), then command-line flags.

use crate::error::{CalcError, Result};
use crate::models::MAX_LENGTH;

/// Default cap on enumerated subnets.
pub const MAX_SUBNETS: usize = 1024;

/// Hard ceiling for the cap, whatever the environment says.
pub const MAX_SUBNETS_LIMIT: usize = 65_536;

/// Prefix range accepted by the web input form.
pub const FORM_MIN_PREFIX: u8 = 8;
pub const FORM_MAX_PREFIX: u8 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Shortest accepted prefix.
    pub min_prefix: u8,
    /// Longest accepted prefix.
    pub max_prefix: u8,
    /// Refuse `0.0.0.0`, loopback and self-broadcast addresses.
    pub reject_reserved: bool,
    /// Fill in [`crate::models::SubnetInfo::subnets`].
    pub enumerate: bool,
    /// Upper bound on enumerated entries.
    pub max_subnets: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            min_prefix: 0,
            max_prefix: MAX_LENGTH,
            reject_reserved: true,
            enumerate: false,
            max_subnets: MAX_SUBNETS,
        }
    }
}

impl Policy {
    /// Prefixes limited to `/8`..`/30`, as the web input form enforces.
    pub fn form() -> Self {
        Policy {
            min_prefix: FORM_MIN_PREFIX,
            max_prefix: FORM_MAX_PREFIX,
            ..Default::default()
        }
    }

    /// No reserved-address checks.
    pub fn lenient() -> Self {
        Policy {
            reject_reserved: false,
            ..Default::default()
        }
    }

    /// Default policy overridden by environment variables.
    ///
    /// - `SUBNET_CALC_MIN_PREFIX`, `SUBNET_CALC_MAX_PREFIX` (0-32)
    /// - `SUBNET_CALC_LENIENT` (`1`, `true`, `yes`, `on`)
    /// - `SUBNET_CALC_ENUMERATE`
    /// - `SUBNET_CALC_MAX_SUBNETS`
    pub fn from_env() -> Result<Self> {
        let default = Policy::default();
        let policy = Policy {
            min_prefix: env_parse_u8("SUBNET_CALC_MIN_PREFIX", default.min_prefix, 0, MAX_LENGTH),
            max_prefix: env_parse_u8("SUBNET_CALC_MAX_PREFIX", default.max_prefix, 0, MAX_LENGTH),
            reject_reserved: !env_parse_bool("SUBNET_CALC_LENIENT", !default.reject_reserved),
            enumerate: env_parse_bool("SUBNET_CALC_ENUMERATE", default.enumerate),
            max_subnets: env_parse_usize(
                "SUBNET_CALC_MAX_SUBNETS",
                default.max_subnets,
                1,
                MAX_SUBNETS_LIMIT,
            ),
        };
        log::debug!("policy from env: {policy:?}");
        policy.validate()?;
        Ok(policy)
    }

    /// Reject prefix ranges that are inverted or wider than 32 bits, and an
    /// enumeration cap outside `1..=MAX_SUBNETS_LIMIT`.
    pub fn validate(&self) -> Result<()> {
        if self.max_prefix > MAX_LENGTH {
            return Err(CalcError::InvalidPrefix(format!(
                "policy maximum /{} is longer than {MAX_LENGTH} bits",
                self.max_prefix
            )));
        }
        if self.min_prefix > self.max_prefix {
            return Err(CalcError::InvalidPrefix(format!(
                "policy range /{}../{} is empty",
                self.min_prefix, self.max_prefix
            )));
        }
        if !(1..=MAX_SUBNETS_LIMIT).contains(&self.max_subnets) {
            return Err(CalcError::InvalidPrefix(format!(
                "policy subnet cap {} is outside 1..={MAX_SUBNETS_LIMIT}",
                self.max_subnets
            )));
        }
        Ok(())
    }

    pub fn allows_prefix(&self, prefix: u8) -> bool {
        (self.min_prefix..=self.max_prefix).contains(&prefix)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse_u8(name: &str, default: u8, min: u8, max: u8) -> u8 {
    match env_var(name).and_then(|v| v.parse::<u8>().ok()) {
        Some(v) => v.clamp(min, max),
        None => default,
    }
}

fn env_parse_usize(name: &str, default: usize, min: usize, max: usize) -> usize {
    match env_var(name).and_then(|v| v.parse::<usize>().ok()) {
        Some(v) => v.clamp(min, max),
        None => default,
    }
}

fn env_parse_bool(name: &str, default: bool) -> bool {
    match env_var(name) {
        Some(value) => {
            let normalized = value.to_ascii_lowercase();
            matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();
        assert!(policy.allows_prefix(0));
        assert!(policy.allows_prefix(32));
        assert!(policy.reject_reserved);
        assert!(!policy.enumerate);
        assert_eq!(policy.max_subnets, MAX_SUBNETS);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_form_policy() {
        let policy = Policy::form();
        assert!(!policy.allows_prefix(7));
        assert!(policy.allows_prefix(8));
        assert!(policy.allows_prefix(30));
        assert!(!policy.allows_prefix(31));
        assert!(policy.reject_reserved);
    }

    #[test]
    fn test_validate() {
        let policy = Policy {
            min_prefix: 24,
            max_prefix: 16,
            ..Default::default()
        };
        assert!(matches!(policy.validate(), Err(CalcError::InvalidPrefix(_))));

        let policy = Policy {
            max_prefix: 40,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_subnet_cap() {
        for cap in [0, MAX_SUBNETS_LIMIT + 1, usize::MAX] {
            let policy = Policy {
                enumerate: true,
                max_subnets: cap,
                ..Default::default()
            };
            assert!(
                matches!(policy.validate(), Err(CalcError::InvalidPrefix(_))),
                "cap {cap} should be rejected"
            );
        }
        for cap in [1, MAX_SUBNETS, MAX_SUBNETS_LIMIT] {
            let policy = Policy {
                max_subnets: cap,
                ..Default::default()
            };
            assert!(policy.validate().is_ok(), "cap {cap}");
        }
    }

    #[test]
    fn test_from_env() {
        // Only this test touches these variables.
        std::env::set_var("SUBNET_CALC_MIN_PREFIX", "12");
        std::env::set_var("SUBNET_CALC_MAX_PREFIX", "99");
        std::env::set_var("SUBNET_CALC_LENIENT", "yes");
        std::env::set_var("SUBNET_CALC_ENUMERATE", "true");
        std::env::set_var("SUBNET_CALC_MAX_SUBNETS", "not-a-number");

        let policy = Policy::from_env().unwrap();
        assert_eq!(policy.min_prefix, 12);
        assert_eq!(policy.max_prefix, 32);
        assert!(!policy.reject_reserved);
        assert!(policy.enumerate);
        assert_eq!(policy.max_subnets, MAX_SUBNETS);

        for name in [
            "SUBNET_CALC_MIN_PREFIX",
            "SUBNET_CALC_MAX_PREFIX",
            "SUBNET_CALC_LENIENT",
            "SUBNET_CALC_ENUMERATE",
            "SUBNET_CALC_MAX_SUBNETS",
        ] {
            std::env::remove_var(name);
        }
    }
}

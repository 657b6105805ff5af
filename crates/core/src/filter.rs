//! Tag-to-predicate registry for excluding specs per environment
//!
//! The registry is a closed enum: every known tag has a variant and a
//! total match decides exclusion, so adding a tag without a predicate
//! is a compile-time error. Unknown tag tokens fail parsing rather
//! than silently passing — a typo must not let an excluded spec run.

use std::str::FromStr;

use crate::error::YokeError;

/// Snapshot of the environment state consulted by filter predicates.
///
/// Captured once at the process edge and passed explicitly so the
/// predicates stay pure and testable without mutating process env.
#[derive(Debug, Clone, Default)]
pub struct CiEnvironment {
    /// Value of `BUILD_QUEUEDBY`, if set
    pub queued_by: Option<String>,
}

impl CiEnvironment {
    /// Capture the relevant variables from the process environment.
    pub fn capture() -> Self {
        Self {
            queued_by: std::env::var("BUILD_QUEUEDBY").ok(),
        }
    }
}

/// Queue identity that marks a run as CI-orchestrated.
const CI_QUEUED_BY: &str = "GitHub";

/// A known metadata tag with an exclusion predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTag {
    /// Spec must not run under CI orchestration (identified by
    /// `BUILD_QUEUEDBY` in the lab).
    SkipCi,
}

impl FilterTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTag::SkipCi => "SkipCI",
        }
    }

    /// Whether a spec carrying this tag is excluded for `env`.
    pub fn excludes(&self, env: &CiEnvironment) -> bool {
        match self {
            FilterTag::SkipCi => env.queued_by.as_deref() == Some(CI_QUEUED_BY),
        }
    }
}

impl FromStr for FilterTag {
    type Err = YokeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "SkipCI" => Ok(FilterTag::SkipCi),
            other => Err(YokeError::UnknownTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn env(queued_by: Option<&str>) -> CiEnvironment {
        CiEnvironment {
            queued_by: queued_by.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_known_tag() {
        assert_eq!("SkipCI".parse::<FilterTag>().unwrap(), FilterTag::SkipCi);
        assert_eq!(FilterTag::SkipCi.as_str(), "SkipCI");
    }

    #[test_case("skipci"; "all lowercase")]
    #[test_case("SkipCi"; "wrong casing")]
    #[test_case("SkipC")]
    #[test_case("")]
    fn test_unknown_tag_fails(token: &str) {
        let err = token.parse::<FilterTag>().unwrap_err();
        assert!(matches!(err, YokeError::UnknownTag(t) if t == token));
    }

    #[test_case(Some("GitHub"), true; "queued by github excludes")]
    #[test_case(Some("alice"), false; "manual queue passes")]
    #[test_case(None, false; "unset passes")]
    fn test_skip_ci_predicate(queued_by: Option<&str>, excluded: bool) {
        assert_eq!(FilterTag::SkipCi.excludes(&env(queued_by)), excluded);
    }
}

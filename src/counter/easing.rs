use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maps linear progress in `[0, 1]` onto display progress in `[0, 1]`.
///
/// Every curve is monotonic non-decreasing with `apply(0) == 0` and
/// `apply(1) == 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOutCubic => 1.0 - (1.0 - p).powi(3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "ease-out-cubic",
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(Easing::Linear),
            "ease-out-cubic" | "ease-out" => Ok(Easing::EaseOutCubic),
            other => Err(format!(
                "unknown easing `{other}` (expected `linear` or `ease-out-cubic`)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOutCubic.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("linear".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!("ease-out".parse::<Easing>(), Ok(Easing::EaseOutCubic));
        assert!("bounce".parse::<Easing>().is_err());
    }
}

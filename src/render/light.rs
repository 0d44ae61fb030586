//! Notification light: `color,onMillis,offMillis`

use serde::Serialize;
use std::str::FromStr;

use super::color::Argb;
use super::strip_whitespace;
use crate::error::FieldParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightSpec {
    pub color: Argb,
    pub on_ms: u32,
    pub off_ms: u32,
}

impl FromStr for LightSpec {
    type Err = FieldParseError;

    /// Whitespace anywhere in the input is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = strip_whitespace(s);
        let parts: Vec<&str> = compact.split(',').collect();
        let [color, on, off] = parts.as_slice() else {
            return Err(FieldParseError::WrongArity {
                expected: 3,
                actual: parts.len(),
            });
        };

        let millis = |v: &str| {
            v.parse::<u32>()
                .map_err(|_| FieldParseError::InvalidNumber(v.to_string()))
        };

        Ok(Self {
            color: color.parse()?,
            on_ms: millis(*on)?,
            off_ms: millis(*off)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_light() {
        let light: LightSpec = "#FF00FF,1000,3000".parse().unwrap();
        assert_eq!(light.color, Argb(0xFFFF_00FF));
        assert_eq!(light.on_ms, 1000);
        assert_eq!(light.off_ms, 3000);
    }

    #[test]
    fn test_parse_light_with_spaces() {
        let light: LightSpec = " #FFFF00FF , 500, 250 ".parse().unwrap();
        assert_eq!(light.color, Argb(0xFFFF_00FF));
        assert_eq!(light.on_ms, 500);
        assert_eq!(light.off_ms, 250);
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            "#FF00FF,1000".parse::<LightSpec>(),
            Err(FieldParseError::WrongArity {
                expected: 3,
                actual: 2
            })
        );
        assert!("#FF00FF,1,2,3".parse::<LightSpec>().is_err());
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(
            "nope,1000,3000".parse::<LightSpec>(),
            Err(FieldParseError::InvalidColor(_))
        ));
        assert!(matches!(
            "#FF00FF,soon,3000".parse::<LightSpec>(),
            Err(FieldParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert_eq!(
            "#FF00FF,1000,-1".parse::<LightSpec>(),
            Err(FieldParseError::InvalidNumber("-1".to_string()))
        );
    }
}

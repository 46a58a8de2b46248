//! Scalar values carried by aligner command-line flags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Value bound to a single command-line flag
///
/// Deserialization never produces [`OptionValue::Path`]; strings read from
/// configuration become [`OptionValue::Word`] and are quoted by flag name
/// when the flag is known to take a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Word(String),
    Path(PathBuf),
}

impl OptionValue {
    /// Text form of the value, before any shell quoting
    pub fn render(&self) -> String {
        match self {
            OptionValue::Integer(v) => v.to_string(),
            // Whole numbers keep their decimal point: 4.0, not 4
            OptionValue::Float(v) if v.fract() == 0.0 => format!("{:.1}", v),
            OptionValue::Float(v) => v.to_string(),
            OptionValue::Word(v) => v.clone(),
            OptionValue::Path(p) => p.display().to_string(),
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, OptionValue::Path(_))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(v) => Some(*v),
            OptionValue::Word(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Parse a value typed on a command line (`11`, `0.5`, `dna`)
    pub fn parse_cli(text: &str) -> Self {
        if let Ok(v) = text.parse::<i64>() {
            return OptionValue::Integer(v);
        }
        if let Ok(v) = text.parse::<f64>() {
            if v.is_finite() {
                return OptionValue::Float(v);
            }
        }
        OptionValue::Word(text.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Integer(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Integer(v as i64)
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        OptionValue::Integer(v as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Word(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Word(v)
    }
}

impl From<PathBuf> for OptionValue {
    fn from(v: PathBuf) -> Self {
        OptionValue::Path(v)
    }
}

impl From<&Path> for OptionValue {
    fn from(v: &Path) -> Self {
        OptionValue::Path(v.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(OptionValue::from(8).render(), "8");
        assert_eq!(OptionValue::from(0.5).render(), "0.5");
        assert_eq!(OptionValue::from(7.0).render(), "7.0");
        assert_eq!(OptionValue::parse_cli("4.0").render(), "4.0");
        assert_eq!(OptionValue::from(-2.0).render(), "-2.0");
        assert_eq!(OptionValue::from("lower").render(), "lower");
        assert_eq!(
            OptionValue::from(PathBuf::from("/tmp/11.ooc")).render(),
            "/tmp/11.ooc"
        );
    }

    #[test]
    fn test_parse_cli() {
        assert_eq!(OptionValue::parse_cli("11"), OptionValue::Integer(11));
        assert_eq!(OptionValue::parse_cli("0.25"), OptionValue::Float(0.25));
        assert_eq!(OptionValue::parse_cli("dna"), OptionValue::Word("dna".into()));
        assert_eq!(OptionValue::parse_cli("nan"), OptionValue::Word("nan".into()));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(OptionValue::Integer(3).as_integer(), Some(3));
        assert_eq!(OptionValue::Word("12".into()).as_integer(), Some(12));
        assert_eq!(OptionValue::Float(1.5).as_integer(), None);
    }

    #[test]
    fn test_untagged_deserialization() {
        let values: Vec<OptionValue> = serde_json::from_str(r#"[5, 2.5, "psl"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Integer(5),
                OptionValue::Float(2.5),
                OptionValue::Word("psl".into()),
            ]
        );
    }
}

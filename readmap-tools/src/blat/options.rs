//! Typed selectors for the BLAT flags the workflows care about

use crate::blat::command::OptionMap;
use readmap_core::{OptionValue, ReadmapError, ReadmapResult};
use std::fmt;
use std::str::FromStr;

/// Flags taking a non-negative integer
pub const INTEGER_FLAGS: &[&str] = &[
    "-dots",
    "-maxGap",
    "-maxIntron",
    "-minMatch",
    "-minRepDivergence",
    "-minScore",
    "-oneOff",
    "-repMatch",
    "-stepSize",
    "-tileSize",
];

/// Flags taking a masking mode
pub const MASK_FLAGS: &[&str] = &["-mask", "-qMask", "-repeats"];

macro_rules! selector {
    ($(#[$meta:meta])* $name:ident, $what:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ReadmapError;

            fn from_str(s: &str) -> ReadmapResult<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ReadmapError::InvalidArgument(format!(
                        "unknown {} '{}', expected one of: {}",
                        $what,
                        s,
                        $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))),
                }
            }
        }

        impl From<$name> for OptionValue {
            fn from(value: $name) -> Self {
                OptionValue::Word(value.as_str().to_string())
            }
        }
    };
}

selector!(
    /// Database (`-t`) sequence type
    DatabaseType, "database type" {
        Dna => "dna",
        Prot => "prot",
        Dnax => "dnax",
    }
);

selector!(
    /// Query (`-q`) sequence type
    QueryType, "query type" {
        Dna => "dna",
        Rna => "rna",
        Prot => "prot",
        Dnax => "dnax",
        Rnax => "rnax",
    }
);

selector!(
    /// Masking mode for `-mask`, `-qMask` and `-repeats`
    MaskType, "mask type" {
        Lower => "lower",
        Upper => "upper",
        Out => "out",
        FileOut => "file.out",
    }
);

selector!(
    /// Report layout (`-out`)
    OutputFormat, "output format" {
        Psl => "psl",
        Pslx => "pslx",
        Axt => "axt",
        Maf => "maf",
        Sim4 => "sim4",
        Wublast => "wublast",
        Blast => "blast",
        Blast8 => "blast8",
        Blast9 => "blast9",
    }
);

/// Database/query pairs the aligner accepts
pub const VALID_COMBINATIONS: &[(DatabaseType, QueryType)] = &[
    (DatabaseType::Dna, QueryType::Dna),
    (DatabaseType::Dna, QueryType::Rna),
    (DatabaseType::Prot, QueryType::Prot),
    (DatabaseType::Dnax, QueryType::Prot),
    (DatabaseType::Dnax, QueryType::Dnax),
    (DatabaseType::Dnax, QueryType::Rnax),
];

fn selector_value<T: FromStr<Err = ReadmapError>>(
    options: &OptionMap,
    flag: &str,
) -> ReadmapResult<Option<T>> {
    match options.get(flag) {
        None => Ok(None),
        Some(OptionValue::Word(text)) => text.parse().map(Some).map_err(|e| match e {
            ReadmapError::InvalidArgument(msg) => {
                ReadmapError::InvalidArgument(format!("{}: {}", flag, msg))
            }
            other => other,
        }),
        Some(other) => Err(ReadmapError::InvalidArgument(format!(
            "{} expects a word, got '{}'",
            flag, other
        ))),
    }
}

/// Check the typed flags of an option map
///
/// Unknown flags pass through untouched. When `-t` or `-q` is absent the
/// aligner's default (`dna`) is assumed for the combination check.
pub fn validate_options(options: &OptionMap) -> ReadmapResult<()> {
    let database = selector_value::<DatabaseType>(options, "-t")?.unwrap_or(DatabaseType::Dna);
    let query = selector_value::<QueryType>(options, "-q")?.unwrap_or(QueryType::Dna);
    if !VALID_COMBINATIONS.contains(&(database, query)) {
        return Err(ReadmapError::InvalidArgument(format!(
            "database type '{}' cannot be searched with query type '{}'",
            database, query
        )));
    }

    for flag in MASK_FLAGS {
        selector_value::<MaskType>(options, flag)?;
    }
    selector_value::<OutputFormat>(options, "-out")?;

    for flag in INTEGER_FLAGS {
        if let Some(value) = options.get(flag) {
            match value.as_integer() {
                Some(n) if n >= 0 => {}
                _ => {
                    return Err(ReadmapError::InvalidArgument(format!(
                        "{} expects a non-negative integer, got '{}'",
                        flag, value
                    )))
                }
            }
        }
    }

    if let Some(value) = options.get("-minIdentity") {
        let identity = match value {
            OptionValue::Integer(n) => *n as f64,
            OptionValue::Float(v) => *v,
            _ => f64::NAN,
        };
        if !(0.0..=100.0).contains(&identity) {
            return Err(ReadmapError::InvalidArgument(format!(
                "-minIdentity expects a percentage, got '{}'",
                value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_parse() {
        assert_eq!("dnax".parse::<DatabaseType>().unwrap(), DatabaseType::Dnax);
        assert_eq!("rna".parse::<QueryType>().unwrap(), QueryType::Rna);
        assert_eq!("file.out".parse::<MaskType>().unwrap(), MaskType::FileOut);
        assert_eq!("blast9".parse::<OutputFormat>().unwrap(), OutputFormat::Blast9);
        assert!("rna".parse::<DatabaseType>().is_err());
        assert!("DNA".parse::<QueryType>().is_err());
    }

    #[test]
    fn test_selector_into_option_value() {
        let options = OptionMap::new()
            .with("-t", DatabaseType::Prot)
            .with("-out", OutputFormat::Blast9);
        assert_eq!(options.get("-t"), Some(&OptionValue::Word("prot".into())));
        assert_eq!(
            options.render_flags().unwrap(),
            vec!["-out=blast9".to_string(), "-t=prot".to_string()]
        );
    }

    #[test]
    fn test_valid_options() {
        let options = OptionMap::new()
            .with("-t", "dnax")
            .with("-q", "rnax")
            .with("-mask", "lower")
            .with("-qMask", "file.out")
            .with("-out", "psl")
            .with("-tileSize", 11)
            .with("-minIdentity", 92.5)
            .with("-ooc", "11.ooc");
        assert!(validate_options(&options).is_ok());
        assert!(validate_options(&OptionMap::new()).is_ok());
    }

    #[test]
    fn test_invalid_combination() {
        let options = OptionMap::new().with("-t", "prot").with("-q", "dna");
        assert!(matches!(
            validate_options(&options),
            Err(ReadmapError::InvalidArgument(_))
        ));

        // -t defaults to dna
        let options = OptionMap::new().with("-q", "prot");
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_invalid_values() {
        for options in [
            OptionMap::new().with("-mask", "middle"),
            OptionMap::new().with("-out", "sam"),
            OptionMap::new().with("-tileSize", -1),
            OptionMap::new().with("-minScore", 2.5),
            OptionMap::new().with("-minIdentity", 101.0),
            OptionMap::new().with("-t", 3),
        ] {
            assert!(validate_options(&options).is_err(), "{:?}", options);
        }
    }

    #[test]
    fn test_error_names_flag() {
        let err = validate_options(&OptionMap::new().with("-repeats", "odd")).unwrap_err();
        assert!(err.to_string().contains("-repeats"));
    }
}

//! Command-line composition for the BLAT aligner
//!
//! A command has the shape
//! `cd "<working-dir>"; <binary> <database> <query> [<flag>=<value> ...] <output>`.
//! Flags are always emitted in byte-wise lexicographic order of their names,
//! whatever order they were inserted in, so the same inputs always produce
//! the same string.

use indexmap::IndexMap;
use readmap_core::{OptionValue, ReadmapError, ReadmapResult};
use std::path::{Path, PathBuf};

/// Flags whose values name files and are therefore always quoted
pub const PATH_FLAGS: &[&str] = &["-ooc", "-makeOoc"];

/// Flag name to value mapping, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: IndexMap<String, OptionValue>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning the value it replaces
    pub fn insert(
        &mut self,
        flag: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(flag.into(), value.into())
    }

    /// Builder form of [`OptionMap::insert`]
    pub fn with(mut self, flag: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(flag, value);
        self
    }

    pub fn get(&self, flag: &str) -> Option<&OptionValue> {
        self.entries.get(flag)
    }

    pub fn remove(&mut self, flag: &str) -> Option<OptionValue> {
        self.entries.shift_remove(flag)
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.entries.contains_key(flag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.entries.iter()
    }

    /// Entries ordered by flag name
    pub fn sorted(&self) -> Vec<(&String, &OptionValue)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Copy of this map with every flag of `overrides` applied on top
    pub fn merged(&self, overrides: &OptionMap) -> OptionMap {
        let mut merged = self.clone();
        for (flag, value) in overrides.iter() {
            merged.insert(flag.clone(), value.clone());
        }
        merged
    }

    /// Render each flag as `name=value`, sorted by name
    pub fn render_flags(&self) -> ReadmapResult<Vec<String>> {
        self.sorted()
            .into_iter()
            .map(|(flag, value)| render_flag(flag, value))
            .collect()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for OptionMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (flag, value) in iter {
            self.insert(flag, value);
        }
    }
}

impl From<IndexMap<String, OptionValue>> for OptionMap {
    fn from(entries: IndexMap<String, OptionValue>) -> Self {
        Self { entries }
    }
}

fn render_flag(flag: &str, value: &OptionValue) -> ReadmapResult<String> {
    if !is_bare_word(flag) {
        return Err(ReadmapError::InvalidArgument(format!(
            "invalid flag name '{}'",
            flag
        )));
    }

    let text = value.render();
    let rendered = if value.is_path() || PATH_FLAGS.contains(&flag) || !is_bare_word(&text) {
        quote(&text)
    } else {
        text
    };
    Ok(format!("{}={}", flag, rendered))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

/// Values that can appear unquoted after `=`: numbers and plain words
fn is_bare_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_word_char)
}

/// Positional paths stay bare unless the shell would split or expand them
fn is_shell_safe(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| is_word_char(c) || matches!(c, '/' | ',' | ':' | '@' | '%' | '='))
}

/// Wrap in double quotes, escaping the characters the shell still
/// interprets inside them
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn shell_word(text: &str) -> String {
    if is_shell_safe(text) {
        text.to_string()
    } else {
        quote(text)
    }
}

/// The three file paths every aligner run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalArguments {
    pub query: PathBuf,
    pub database: PathBuf,
    pub output: PathBuf,
}

impl PositionalArguments {
    /// Paths must be non-empty and absolute, since the aligner runs in its
    /// own working directory
    pub fn new(
        query: impl Into<PathBuf>,
        database: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> ReadmapResult<Self> {
        let args = Self {
            query: query.into(),
            database: database.into(),
            output: output.into(),
        };
        for (name, path) in args.named() {
            if path.as_os_str().is_empty() {
                return Err(ReadmapError::MissingArgument(format!("{} path", name)));
            }
            if !path.is_absolute() {
                return Err(ReadmapError::InvalidArgument(format!(
                    "{} path must be absolute: {}",
                    name,
                    path.display()
                )));
            }
        }
        Ok(args)
    }

    /// Build from a `[query, database, output]` list
    pub fn from_list<P: AsRef<Path>>(paths: &[P]) -> ReadmapResult<Self> {
        match paths {
            [query, database, output] => {
                Self::new(query.as_ref(), database.as_ref(), output.as_ref())
            }
            [_, _] => Err(ReadmapError::MissingArgument("output path".to_string())),
            [_] => Err(ReadmapError::MissingArgument("database path".to_string())),
            [] => Err(ReadmapError::MissingArgument("query path".to_string())),
            _ => Err(ReadmapError::InvalidArgument(format!(
                "expected query, database and output paths, got {} paths",
                paths.len()
            ))),
        }
    }

    fn named(&self) -> [(&'static str, &Path); 3] {
        [
            ("query", self.query.as_path()),
            ("database", self.database.as_path()),
            ("output", self.output.as_path()),
        ]
    }
}

/// Compose the full shell command for one aligner run
///
/// Fails with `MissingArgument` when no positionals are given; nothing is
/// executed or written here.
pub fn compose(
    binary: &str,
    working_dir: &Path,
    options: &OptionMap,
    positionals: Option<&PositionalArguments>,
) -> ReadmapResult<String> {
    let positionals = positionals.ok_or_else(|| {
        ReadmapError::MissingArgument(
            "query, database and output paths must be set before composing".to_string(),
        )
    })?;
    if binary.is_empty() {
        return Err(ReadmapError::MissingArgument("aligner binary".to_string()));
    }

    let mut tokens = vec![
        shell_word(binary),
        shell_word(&positionals.database.display().to_string()),
        shell_word(&positionals.query.display().to_string()),
    ];
    tokens.extend(options.render_flags()?);
    tokens.push(shell_word(&positionals.output.display().to_string()));

    Ok(format!(
        "cd {}; {}",
        quote(&working_dir.display().to_string()),
        tokens.join(" ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn positionals() -> PositionalArguments {
        PositionalArguments::new("/data/query.fasta", "/data/db.fasta", "/data/out.blast9").unwrap()
    }

    #[test]
    fn test_compose_without_options() {
        let cmd = compose("blat", Path::new("/work"), &OptionMap::new(), Some(&positionals())).unwrap();
        assert_eq!(
            cmd,
            r#"cd "/work"; blat /data/db.fasta /data/query.fasta /data/out.blast9"#
        );
    }

    #[test]
    fn test_flags_sorted_and_quoted() {
        let options = OptionMap::new()
            .with("-tileSize", 11)
            .with("-ooc", "11.ooc")
            .with("-minIdentity", 92.5)
            .with("-mask", "lower");

        let cmd = compose("blat", Path::new("/work"), &options, Some(&positionals())).unwrap();
        assert_eq!(
            cmd,
            r#"cd "/work"; blat /data/db.fasta /data/query.fasta -mask=lower -minIdentity=92.5 -ooc="11.ooc" -tileSize=11 /data/out.blast9"#
        );
    }

    #[test]
    fn test_whole_float_keeps_decimal_point() {
        let options = OptionMap::new().with("-minIdentity", OptionValue::parse_cli("4.0"));
        assert_eq!(options.render_flags().unwrap(), vec!["-minIdentity=4.0".to_string()]);
    }

    #[test]
    fn test_missing_positionals() {
        let err = compose("blat", Path::new("/work"), &OptionMap::new(), None).unwrap_err();
        assert!(matches!(err, ReadmapError::MissingArgument(_)));
    }

    #[test]
    fn test_special_values_quoted() {
        let options = OptionMap::new()
            .with("-mask", "file.out")
            .with("-note", "two words")
            .with("-x", PathBuf::from("/refs/x.ooc"))
            .with("-y", "$HOME");
        assert_eq!(
            options.render_flags().unwrap(),
            vec![
                r#"-mask=file.out"#.to_string(),
                r#"-note="two words""#.to_string(),
                r#"-x="/refs/x.ooc""#.to_string(),
                r#"-y="\$HOME""#.to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_flag_name() {
        let options = OptionMap::new().with("-bad flag", 1);
        assert!(matches!(
            options.render_flags(),
            Err(ReadmapError::InvalidArgument(_))
        ));
        let options = OptionMap::new().with("-a=b", 1);
        assert!(options.render_flags().is_err());
    }

    #[test]
    fn test_positional_with_space_is_quoted() {
        let args = PositionalArguments::new("/my data/q.fa", "/db.fa", "/out.txt").unwrap();
        let cmd = compose("blat", Path::new("/w d"), &OptionMap::new(), Some(&args)).unwrap();
        assert_eq!(cmd, r#"cd "/w d"; blat /db.fa "/my data/q.fa" /out.txt"#);
    }

    #[test]
    fn test_positionals_validation() {
        assert!(matches!(
            PositionalArguments::new("", "/db", "/out"),
            Err(ReadmapError::MissingArgument(msg)) if msg == "query path"
        ));
        assert!(matches!(
            PositionalArguments::new("/q", "relative/db.fa", "/out"),
            Err(ReadmapError::InvalidArgument(_))
        ));
        assert!(matches!(
            PositionalArguments::from_list(&["/q", "/db"]),
            Err(ReadmapError::MissingArgument(msg)) if msg == "output path"
        ));
        let args = PositionalArguments::from_list(&["/q", "/db", "/o"]).unwrap();
        assert_eq!(args.database, PathBuf::from("/db"));
    }

    #[test]
    fn test_insert_replaces_and_merge_overrides() {
        let mut base = OptionMap::new().with("-t", "dna").with("-out", "psl");
        assert_eq!(base.insert("-out", "blast9"), Some(OptionValue::Word("psl".into())));
        assert_eq!(base.len(), 2);

        let merged = base.merged(&OptionMap::new().with("-t", "prot").with("-dots", 5));
        assert_eq!(merged.get("-t"), Some(&OptionValue::Word("prot".into())));
        assert_eq!(merged.get("-out"), Some(&OptionValue::Word("blast9".into())));
        assert_eq!(merged.get("-dots"), Some(&OptionValue::Integer(5)));
        assert_eq!(base.get("-t"), Some(&OptionValue::Word("dna".into())));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"a"b\c`d"#), r#""a\"b\\c\`d""#);
    }
}

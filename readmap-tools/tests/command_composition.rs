use proptest::prelude::*;
use readmap_core::{OptionValue, ReadmapError};
use readmap_test::fixtures;
use readmap_tools::{compose, Blat, BlatState, OptionMap, PositionalArguments};
use std::path::Path;

const QUERY: &str = "/tmp/reads/query.fasta";
const DATABASE: &str = "/tmp/reads/db.fasta";
const OUTPUT: &str = "/tmp/reads/out.blast9";

/// Strip the `cd "<dir>"; ` prefix
fn base_command(command: &str) -> &str {
    let end = command.find("\"; ").expect("command starts with cd");
    &command[end + 3..]
}

fn halted_blat(options: OptionMap) -> Blat {
    let mut blat = Blat::new()
        .with_working_dir("/tmp/reads")
        .with_options(options)
        .halt_before_exec(true);
    blat.input_as_list(&[QUERY, DATABASE, OUTPUT]).unwrap();
    blat
}

// ===== Fixture commands =====

#[test]
fn test_blank_options() {
    let mut blat = halted_blat(OptionMap::new());
    let command = blat.compose().unwrap();

    assert!(command.starts_with("cd \"/tmp/reads\"; "));
    assert_eq!(
        base_command(&command),
        format!("blat {} {} {}", DATABASE, QUERY, OUTPUT)
    );
}

#[test]
fn test_full_flag_table() {
    let options: OptionMap = fixtures::full_flag_table().into_iter().collect();
    let mut blat = halted_blat(options);

    assert_eq!(
        base_command(&blat.compose().unwrap()),
        format!("blat {} {} {} {}", DATABASE, QUERY, fixtures::FULL_FLAGS, OUTPUT)
    );
}

#[test]
fn test_search_flag_table() {
    let options: OptionMap = fixtures::search_flag_table().into_iter().collect();
    let mut blat = halted_blat(options);

    let invocation = blat.run().unwrap();
    assert!(invocation.is_halted());
    assert_eq!(blat.state(), BlatState::HaltedBeforeExec);
    assert_eq!(
        base_command(invocation.command()),
        format!("blat {} {} {} {}", DATABASE, QUERY, fixtures::SEARCH_FLAGS, OUTPUT)
    );
}

#[test]
fn test_reversed_insertion_gives_same_command() {
    let forward: OptionMap = fixtures::full_flag_table().into_iter().collect();
    let reversed: OptionMap = fixtures::full_flag_table().into_iter().rev().collect();
    let args = PositionalArguments::new(QUERY, DATABASE, OUTPUT).unwrap();

    assert_eq!(
        compose("blat", Path::new("/w"), &forward, Some(&args)).unwrap(),
        compose("blat", Path::new("/w"), &reversed, Some(&args)).unwrap()
    );
}

#[test]
fn test_recompose_after_run_revalidates() {
    let mut blat = halted_blat(OptionMap::new());
    blat.run().unwrap();

    let err = blat.input_as_list(&[QUERY, DATABASE]).unwrap_err();
    assert!(matches!(err, ReadmapError::MissingArgument(_)));

    blat.input_as_list(&[QUERY, DATABASE, "/tmp/other.out"]).unwrap();
    assert!(blat.compose().unwrap().ends_with(" /tmp/other.out"));
}

#[test]
fn test_default_working_dir_is_current_dir() {
    let mut blat = Blat::new().halt_before_exec(true);
    blat.input_as_list(&[QUERY, DATABASE, OUTPUT]).unwrap();

    let cwd = std::env::current_dir().unwrap();
    let command = blat.compose().unwrap();
    assert!(command.starts_with(&format!("cd \"{}\"; ", cwd.display())));
}

// ===== Properties =====

fn flag_name() -> impl Strategy<Value = String> {
    "-[a-zA-Z]{1,12}"
}

fn flag_value() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        (0i64..10_000).prop_map(OptionValue::Integer),
        "[a-z0-9.]{1,8}".prop_map(OptionValue::Word),
    ]
}

proptest! {
    #[test]
    fn prop_flags_render_sorted(entries in prop::collection::vec((flag_name(), flag_value()), 0..16)) {
        let options: OptionMap = entries.into_iter().collect();
        let rendered = options.render_flags().unwrap();

        let names: Vec<&str> = rendered
            .iter()
            .map(|flag| flag.split('=').next().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
        prop_assert_eq!(rendered.len(), options.len());
    }

    #[test]
    fn prop_compose_is_deterministic(entries in prop::collection::vec((flag_name(), flag_value()), 0..16)) {
        let options: OptionMap = entries.iter().cloned().collect();
        let shuffled: OptionMap = {
            // Same final bindings, inserted in reverse order
            let mut last: Vec<(String, OptionValue)> = Vec::new();
            for (name, value) in entries.iter().rev() {
                if !last.iter().any(|(n, _)| n == name) {
                    last.push((name.clone(), options.get(name).unwrap().clone()));
                }
            }
            last.into_iter().collect()
        };
        let args = PositionalArguments::new(QUERY, DATABASE, OUTPUT).unwrap();

        let first = compose("blat", Path::new("/w"), &options, Some(&args)).unwrap();
        let second = compose("blat", Path::new("/w"), &options, Some(&args)).unwrap();
        let third = compose("blat", Path::new("/w"), &shuffled, Some(&args)).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &third);
        prop_assert!(!first.contains("  "));
    }
}

use assert_cmd::Command;
use predicates::prelude::*;
use readmap_test::{fixtures, StubBlat};
use tempfile::TempDir;

fn readmap_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readmap").unwrap();
    cmd.env("READMAP_HOME", home.path())
        .env("READMAP_WORKSPACE_DIR", home.path())
        .env_remove("READMAP_BLAT")
        .env_remove("READMAP_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_help_command() {
    let home = TempDir::new().unwrap();
    readmap_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("command"))
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("parse"));
}

#[test]
fn test_command_prints_sorted_flags() {
    let home = TempDir::new().unwrap();
    let mut cmd = readmap_cmd(&home);
    cmd.args(["command", "--raw", "--working-dir", "/w"])
        .args(["-q", "/data/q.fa", "-d", "/data/db.fa", "-o", "/data/out.psl"]);
    for (flag, value) in fixtures::search_flag_table() {
        cmd.arg("-p").arg(format!("{}={}", flag, value));
    }

    cmd.assert().success().stdout(format!(
        "cd \"/w\"; blat /data/db.fa /data/q.fa {} /data/out.psl\n",
        fixtures::SEARCH_FLAGS
    ));
}

#[test]
fn test_command_applies_workflow_defaults() {
    let home = TempDir::new().unwrap();
    readmap_cmd(&home)
        .args(["command", "--working-dir", "/w", "-q", "/q.fa", "-d", "/db.fa", "-o", "/out"])
        .assert()
        .success()
        .stdout("cd \"/w\"; blat /db.fa /q.fa -out=blast9 -q=dna -t=dna /out\n");
}

#[test]
fn test_command_rejects_invalid_selector() {
    let home = TempDir::new().unwrap();
    readmap_cmd(&home)
        .args(["command", "-q", "/q.fa", "-d", "/db.fa", "-o", "/out", "-p", "-out=sam"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn test_command_uses_config_options() {
    let home = TempDir::new().unwrap();
    write(
        &home,
        "config.toml",
        "[blat]\nbinary = \"blat34\"\nworking_dir = \"/scratch\"\n\n[blat.options]\n\"-minScore\" = 30\n",
    );

    readmap_cmd(&home)
        .args(["command", "--raw", "-q", "/q.fa", "-d", "/db.fa", "-o", "/out"])
        .assert()
        .success()
        .stdout("cd \"/scratch\"; blat34 /db.fa /q.fa -minScore=30 /out\n");
}

#[test]
fn test_parse_prints_records() {
    let home = TempDir::new().unwrap();
    let report = write(&home, "report.blast9", fixtures::DNA_REPORT);

    let mut expected = fixtures::data_lines(fixtures::DNA_REPORT).join("\n");
    expected.push('\n');

    readmap_cmd(&home)
        .arg("parse")
        .arg(&report)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_parse_json() {
    let home = TempDir::new().unwrap();
    let report = write(&home, "report.blast9", fixtures::PROTEIN_REPORT);

    let output = readmap_cmd(&home)
        .arg("parse")
        .arg(&report)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["query_id"], "NZ_GG770509_647533119_frame_1");
    assert_eq!(first["bit_score"], 872.0);
    assert_eq!(stdout.lines().count(), 33);
}

#[test]
fn test_parse_malformed_exit_code() {
    let home = TempDir::new().unwrap();
    let report = write(&home, "bad.blast9", "# Query: r\nr\ts\t99.0\n");

    readmap_cmd(&home)
        .arg("parse")
        .arg(&report)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_parse_lenient_keeps_going() {
    let home = TempDir::new().unwrap();
    let good = "r\ts\t99.00\t10\t0\t0\t1\t10\t1\t10\t1.0e-05\t20.0";
    let report = write(&home, "bad.blast9", &format!("broken\n{}\n", good));

    readmap_cmd(&home)
        .arg("parse")
        .arg(&report)
        .arg("--lenient")
        .assert()
        .success()
        .stdout(format!("{}\n", good))
        .stderr(predicate::str::contains("1 malformed line"));
}

#[test]
fn test_parse_missing_report_exit_code() {
    let home = TempDir::new().unwrap();
    readmap_cmd(&home)
        .args(["parse", "/nonexistent/report.blast9"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_invalid_config_exit_code() {
    let home = TempDir::new().unwrap();
    write(&home, "config.toml", "this is not toml {{");

    readmap_cmd(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_config_init_and_show() {
    let home = TempDir::new().unwrap();

    readmap_cmd(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.toml").exists());

    readmap_cmd(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(2);

    readmap_cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary = \"blat\""));
}

#[test]
fn test_assign_with_stub_binary() {
    let home = TempDir::new().unwrap();
    let stub = StubBlat::install(&home.path().join("bin"), fixtures::DNA_REPORT).unwrap();
    let query = write(&home, "query.fasta", fixtures::QUERY_FASTA);
    let db = write(&home, "db.fasta", fixtures::DNA_DATABASE_FASTA);

    readmap_cmd(&home)
        .env("READMAP_BLAT", stub.path())
        .arg("assign")
        .arg("-q")
        .arg(&query)
        .arg("-d")
        .arg(&db)
        .arg("-o")
        .arg(home.path().join("out.blast9"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NZ_GG739926_647533195\t13\tNZ_GG739926_647533195\t2235.0",
        ));
}

#[test]
fn test_assign_tool_failure_exit_code() {
    let home = TempDir::new().unwrap();
    let stub =
        StubBlat::install_with_exit(&home.path().join("bin"), "", 2, "bad query").unwrap();

    readmap_cmd(&home)
        .env("READMAP_BLAT", stub.path())
        .args(["assign", "-q", "/q.fa", "-d", "/db.fa"])
        .arg("-o")
        .arg(home.path().join("out.blast9"))
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("bad query"));
}

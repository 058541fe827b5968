use assert_cmd::Command;
use journal_list::storage::{JournalStore, MvStore};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE_DIR: &str = "buildres/abbrv.jabref.org/journals";
const STORE_FILE: &str = "build/resources/main/journals/journal-list.mv";

struct Workspace {
    tmp: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    fn with_lists(lists: &[(&str, &str)]) -> Self {
        let workspace = Self::new();
        let source = workspace.root().join(SOURCE_DIR);
        fs::create_dir_all(&source).expect("create source dir");
        for (name, contents) in lists {
            fs::write(source.join(name), contents).expect("write list");
        }
        workspace
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    fn store_path(&self) -> PathBuf {
        self.root().join(STORE_FILE)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("journal-list-generator").unwrap();
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn missing_source_directory_exits_cleanly() {
    let workspace = Workspace::new();

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(contains("Path ").and(contains("does not exist")));

    assert!(!workspace.store_path().exists());
}

#[test]
fn generates_store_from_lists() {
    let workspace = Workspace::with_lists(&[
        ("journal_abbreviations_acs.csv", "Journal A,J. A.\nJournal B,J. B.\n"),
        ("journal_abbreviations_entrez.csv", "Entrez Only,E. O.\n"),
    ]);

    workspace
        .cmd()
        .assert()
        .success()
        .stdout(contains("Checking journal_abbreviations_acs.csv...\n"))
        .stdout(contains("Checking journal_abbreviations_entrez.csv ignored\n"))
        .stdout(contains("View count").not());

    let store = MvStore::open(workspace.store_path()).unwrap();
    assert_eq!(store.abbreviation_names(), vec!["Journal A", "Journal B"]);
    assert_eq!(store.view_count("exampleCitationKey"), 0);
}

#[test]
fn verbose_flag_increments_example_view_count() {
    let workspace = Workspace::with_lists(&[("a.csv", "Journal A,J. A.\n")]);

    workspace
        .cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(contains("View count for exampleCitationKey: 1"));

    workspace
        .cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(contains("View count for exampleCitationKey: 2"));
}

#[test]
fn other_arguments_are_silently_non_verbose() {
    let workspace = Workspace::with_lists(&[("a.csv", "Journal A,J. A.\n")]);

    workspace
        .cmd()
        .args(["--verbose", "extra"])
        .assert()
        .success()
        .stdout(contains("View count").not());

    workspace
        .cmd()
        .arg("--unknown")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn non_unicode_argument_is_silently_non_verbose() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let workspace = Workspace::with_lists(&[("a.csv", "Journal A,J. A.\n")]);

    workspace
        .cmd()
        .arg(OsStr::from_bytes(&[0x66, 0xff]))
        .assert()
        .success()
        .stdout(contains("View count").not());

    Workspace::new()
        .cmd()
        .arg(OsStr::from_bytes(&[0x66, 0xff]))
        .assert()
        .success()
        .stdout(contains("does not exist"));
}

#[test]
fn malformed_list_fails_the_run() {
    let workspace = Workspace::with_lists(&[("a.csv", "Journal A,J. A.\n")]);
    fs::write(workspace.root().join(SOURCE_DIR).join("b.csv"), [0xff, b',', b'x'])
        .expect("write broken list");

    workspace
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(contains("b.csv"));
}

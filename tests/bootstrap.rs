use report_setup::core::env::{EnvStore, MemoryEnv, ProcessEnv};
use report_setup::setup::dirs;
use report_setup::{configure_environment, Bootstrap};
use serial_test::serial;

/// Clears a process environment variable for the duration of a test, even
/// when an assertion fails.
struct VarGuard(&'static str);

impl VarGuard {
    fn new(name: &'static str) -> Self {
        std::env::remove_var(name);
        Self(name)
    }
}

impl Drop for VarGuard {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

const SAMPLE: &str = r#"
FOO=bar
# comment
BAZ = qux
EMPTY=
=novalue
NOKEY
"#;

#[test]
fn bootstrap_creates_processed_dir() {
    let root = tempfile::tempdir().unwrap();

    let env = Bootstrap::new()
        .project_root(root.path())
        .env_store(MemoryEnv::new())
        .run()
        .unwrap();

    assert!(dirs::processed_dir(root.path()).is_dir());
    assert!(env.is_empty());
}

#[test]
fn bootstrap_is_idempotent() {
    let root = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        Bootstrap::new()
            .project_root(root.path())
            .env_store(MemoryEnv::new())
            .run()
            .unwrap();
    }

    assert!(dirs::processed_dir(root.path()).is_dir());
}

#[test]
fn bootstrap_loads_dotenv() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(".env"), SAMPLE).unwrap();

    let env = Bootstrap::new()
        .project_root(root.path())
        .env_store(MemoryEnv::from_iter([("BAZ", "existing")]))
        .run()
        .unwrap();

    assert_eq!(env.get("FOO").as_deref(), Some("bar"));
    assert_eq!(env.get("BAZ").as_deref(), Some("existing"));
    assert_eq!(env.get("EMPTY").as_deref(), Some(""));
    assert_eq!(env.get("NOKEY").as_deref(), Some(""));
    assert_eq!(env.get(""), None);
    assert_eq!(env.len(), 4);
}

#[test]
fn bootstrap_without_dotenv_leaves_env_unchanged() {
    let root = tempfile::tempdir().unwrap();

    let env = Bootstrap::new()
        .project_root(root.path())
        .env_store(MemoryEnv::from_iter([("FOO", "existing")]))
        .run()
        .unwrap();

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("FOO").as_deref(), Some("existing"));
}

#[test]
fn bootstrap_dotenv_disabled() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(".env"), "FOO=bar").unwrap();

    let env = Bootstrap::new()
        .project_root(root.path())
        .dotenv(false)
        .env_store(MemoryEnv::new())
        .run()
        .unwrap();

    assert!(env.is_empty());
}

#[test]
fn bootstrap_survives_unreadable_dotenv() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(".env"), [0xff, 0xfe, b'=', 0xff]).unwrap();

    // invalid UTF-8 only warns, the render continues with nothing loaded
    let env = Bootstrap::new()
        .project_root(root.path())
        .env_store(MemoryEnv::new())
        .run()
        .unwrap();

    assert!(env.is_empty());
}

#[test]
fn bootstrap_survives_blocked_directory() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("data"), b"not a directory").unwrap();
    std::fs::write(root.path().join(".env"), "FOO=bar").unwrap();

    // the directory failure only warns, the dotfile still loads
    let env = Bootstrap::new()
        .project_root(root.path())
        .env_store(MemoryEnv::new())
        .run()
        .unwrap();

    assert_eq!(env.get("FOO").as_deref(), Some("bar"));
}

#[test]
#[serial]
fn process_env_existing_value_wins() {
    let _existing = VarGuard::new("REPORT_SETUP_TEST_EXISTING");
    let _fresh = VarGuard::new("REPORT_SETUP_TEST_FRESH");
    std::env::set_var("REPORT_SETUP_TEST_EXISTING", "existing");

    let mut env = ProcessEnv;
    assert!(!env.set_if_absent("REPORT_SETUP_TEST_EXISTING", "new"));
    assert!(env.set_if_absent("REPORT_SETUP_TEST_FRESH", "fresh"));

    assert_eq!(
        std::env::var("REPORT_SETUP_TEST_EXISTING").as_deref(),
        Ok("existing")
    );
    assert_eq!(
        std::env::var("REPORT_SETUP_TEST_FRESH").as_deref(),
        Ok("fresh")
    );
}

#[test]
#[serial]
fn configure_environment_with_explicit_root() {
    let _cfg = VarGuard::new("REPORT_SETUP_TEST_CFG");
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join(".env"), "REPORT_SETUP_TEST_CFG=loaded").unwrap();

    configure_environment(Some(root.path())).unwrap();

    assert!(dirs::processed_dir(root.path()).is_dir());
    assert_eq!(
        std::env::var("REPORT_SETUP_TEST_CFG").as_deref(),
        Ok("loaded")
    );
}

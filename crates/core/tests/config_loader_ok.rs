use mdtree_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
notes_root = "/tmp/notes"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.notes_root.display().to_string(), "/tmp/notes");
    assert_eq!(rc.attachments_dir, PathBuf::from("/tmp/notes/.attachments"));
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdtree/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
notes_root = "/tmp/def"

[profiles.work]
notes_root = "/tmp/work"
attachments_dir = "{{notes_root}}/media"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.notes_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.attachments_dir, PathBuf::from("/tmp/work/media"));
}

#[test]
fn load_logging_section_ok() {
    let toml = r#"
version = 1
[profiles.default]
notes_root = "/tmp/n"

[logging]
level = "debug"
file_level = "trace"
file = "{{notes_root}}/mdt.log"
"#;

    let rc = ConfigLoader::from_toml_str(toml, "inline", None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/n/mdt.log")));
}

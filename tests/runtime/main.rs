//! Integration tests for Layer 4: Runtime
//!
//! Session commands, output modes, and saved versification systems.

use lectio_runtime::serialize;
use lectio_runtime::{OutputMode, Session};
use lectio_versification::VersificationSystem;

#[test]
fn session_modes_render_the_same_parse() {
    let mut session = Session::new().unwrap();
    let text = "John 3:16 (KJV); Gen 1";
    assert_eq!(session.eval(text).unwrap(), "John.3.16,Gen.1");

    session.set_mode(OutputMode::Translations);
    assert_eq!(session.eval(text).unwrap(), "John.3.16\tKJV\nGen.1\t");

    session.set_mode(OutputMode::Indices);
    let lines: Vec<String> = session.eval(text).unwrap().lines().map(String::from).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0..9\tJohn.3.16\tKJV"));
    assert!(lines[1].ends_with("\tGen.1\t"));
}

#[test]
fn options_persist_across_lines() {
    let mut session = Session::new().unwrap();
    session.eval(":set versification_system vulgate").unwrap();
    assert_eq!(session.eval("Ps 3:9").unwrap(), "Ps.3.9");
    assert_eq!(session.eval("Ps 10:18").unwrap(), "");
    let options = session.eval(":options").unwrap();
    assert!(options.contains("versification_system = vulgate"));
}

#[test]
fn language_switch_changes_matching() {
    let mut session = Session::new().unwrap();
    session.eval(":lang ja").unwrap();
    assert_eq!(session.eval("Phlm 節 6").unwrap(), "Phlm.1.6");
}

#[test]
fn saved_system_loads_into_a_fresh_session() {
    let dir = std::env::temp_dir();
    let path = dir.join("lectio_runtime_short.msgpack");
    let short = VersificationSystem::default_system().derive("short").with_chapter(
        lectio_foundation::Book::Jude,
        1,
        10,
    );
    serialize::save_to_file(&short, &path).unwrap();

    let mut session = Session::new().unwrap();
    session.set_load_path(dir);
    assert_eq!(
        session.eval(":load-system lectio_runtime_short.msgpack").unwrap(),
        "loaded system short"
    );
    session.eval(":set versification_system short").unwrap();
    assert_eq!(session.eval("Jude 12").unwrap(), "");
    assert_eq!(session.eval("Jude 10").unwrap(), "Jude.1.10");

    let _ = std::fs::remove_file(path);
}

#[test]
fn builtin_systems_survive_serialization() {
    for name in ["default", "kjv", "nab", "nrsv", "vulgate"] {
        let store = lectio_versification::TranslationStore::builtin();
        let system = store.system(name).unwrap();
        let bytes = serialize::to_bytes(system).unwrap();
        assert_eq!(&serialize::from_bytes(&bytes).unwrap(), system);
    }
}

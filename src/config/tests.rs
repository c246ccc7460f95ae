use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_jukebox_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("JUKEBOX_CONFIG_PATH", "/tmp/jukebox-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/jukebox-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("jukebox")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("jukebox")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_jukebox() {
    let s = Settings::default();
    assert_eq!(s.library.dir, "audio");
    assert!(s.library.create_if_missing);
    assert!(!s.library.recursive);
    assert!(matches!(
        s.library.display_fields.as_slice(),
        [TrackDisplayField::Filename]
    ));
    assert_eq!(s.ui.play_glyph, "▶");
    assert_eq!(s.ui.pause_glyph, "| |");
    assert_eq!(s.ui.tick_rate_ms, 16);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 0.4
volume_step = 0.1

[controls]
seek_seconds = 9

[ui]
header_text = "hello"
play_glyph = ">"
pause_glyph = "||"
tick_rate_ms = 33
show_hint = false

[library]
dir = "/srv/music"
create_if_missing = false
extensions = ["mp3"]
recursive = true
max_depth = 3
display_fields = ["artist", "title"]
display_separator = "::"

[logging]
dir = "/tmp/jukebox-logs"
filter = "jukebox=trace"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("JUKEBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("JUKEBOX__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 0.4);
    assert_eq!(s.audio.volume_step, 0.1);
    assert_eq!(s.controls.seek_seconds, 9);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.play_glyph, ">");
    assert_eq!(s.ui.pause_glyph, "||");
    assert_eq!(s.ui.tick_rate_ms, 33);
    assert!(!s.ui.show_hint);
    assert_eq!(s.library.dir, "/srv/music");
    assert!(!s.library.create_if_missing);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.recursive);
    assert_eq!(s.library.max_depth, Some(3));
    assert!(matches!(s.library.display_fields[0], TrackDisplayField::Artist));
    assert!(matches!(s.library.display_fields[1], TrackDisplayField::Title));
    assert_eq!(s.library.display_separator, "::");
    assert_eq!(s.logging.dir, "/tmp/jukebox-logs");
    assert_eq!(s.logging.file_prefix, "jukebox");
    assert_eq!(s.logging.filter, "jukebox=trace");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
seek_seconds = 5
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("JUKEBOX_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("JUKEBOX__CONTROLS__SEEK_SECONDS", "30");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.seek_seconds, 30);
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let s: Settings = toml::from_str(
        r#"
[ui]
pause_glyph = "❚❚"
"#,
    )
    .unwrap();
    assert_eq!(s.ui.pause_glyph, "❚❚");
    assert_eq!(s.ui.play_glyph, "▶");
    assert_eq!(s.audio.initial_volume, 1.0);
    assert_eq!(s.library.dir, "audio");
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.initial_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.tick_rate_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.dir = "  ".to_string();
    assert!(s.validate().is_err());
}

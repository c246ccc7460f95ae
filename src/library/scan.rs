use std::fs;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::ScanError;

use super::display::display_from_fields;
use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Make sure `dir` exists, creating it when the settings allow.
fn prepare_dir(dir: &Path, settings: &LibrarySettings) -> Result<(), ScanError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(ScanError::NotADirectory(dir.to_path_buf()));
        }
        return Ok(());
    }
    if settings.create_if_missing {
        fs::create_dir_all(dir).map_err(|source| ScanError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        info!(dir = %dir.display(), "created music directory");
    }
    Ok(())
}

fn read_track(path: &Path, settings: &LibrarySettings) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist: Option<String> = None;
    let mut album: Option<String> = None;
    let mut duration: Option<Duration> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    title = v.to_string();
                }
            }
            artist = tag
                .get_string(&ItemKey::TrackArtist)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            album = tag
                .get_string(&ItemKey::AlbumTitle)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);
        }
    } else {
        debug!(path = %path.display(), "no readable tags");
    }

    let display = display_from_fields(
        path,
        &title,
        artist.as_deref(),
        album.as_deref(),
        &settings.display_fields,
        &settings.display_separator,
    );

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        album,
        duration,
        display,
    }
}

/// List the audio files under `dir`, sorted by display name
/// (case-insensitive). A missing directory is created when
/// `create_if_missing` is set and yields an empty list.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, ScanError> {
    prepare_dir(dir, settings)?;

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|entry| {
            let path = entry.path();
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_audio_file(path, settings)
        })
        .map(|entry| read_track(entry.path(), settings))
        .collect();

    tracks.sort_by(|a, b| a.display.to_lowercase().cmp(&b.display.to_lowercase()));
    info!(dir = %dir.display(), count = tracks.len(), "scanned library");
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackDisplayField;
    use std::fs;
    use tempfile::tempdir;

    fn by_filename() -> LibrarySettings {
        LibrarySettings {
            display_fields: vec![TrackDisplayField::Filename],
            ..LibrarySettings::default()
        }
    }

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));

        let dotted = LibrarySettings {
            extensions: vec![".MP3".into(), "  ".into()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &dotted));
        assert!(!is_audio_file(Path::new("/tmp/a.ogg"), &dotted));
    }

    #[test]
    fn scan_filters_non_audio_and_sorts_by_display_case_insensitive() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &by_filename()).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].display, "A");
        assert_eq!(tracks[1].display, "b");
        assert_eq!(tracks[1].path, dir.path().join("b.MP3"));
    }

    #[test]
    fn scan_is_top_level_only_by_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), &by_filename()).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "root");
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..by_filename()
        };
        let tracks = scan(dir.path(), &settings).unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "visible");
    }

    #[test]
    fn scan_respects_max_depth_when_recursive() {
        let dir = tempdir().unwrap();
        let d1 = dir.path().join("d1");
        let d2 = d1.join("d2");
        fs::create_dir_all(&d2).unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        fs::write(d1.join("one.mp3"), b"not real").unwrap();
        fs::write(d2.join("two.mp3"), b"not real").unwrap();

        // WalkDir depth counts root as 0, children as 1, grandchildren as 2.
        let settings = LibrarySettings {
            recursive: true,
            max_depth: Some(2),
            ..by_filename()
        };
        let tracks = scan(dir.path(), &settings).unwrap();

        let names: Vec<String> = tracks.iter().map(|t| t.display.clone()).collect();
        assert!(names.contains(&"root".to_string()));
        assert!(names.contains(&"one".to_string()));
        assert!(!names.contains(&"two".to_string()));
    }

    #[test]
    fn scan_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let music = dir.path().join("audio");

        let tracks = scan(&music, &by_filename()).unwrap();
        assert!(tracks.is_empty());
        assert!(music.is_dir());
    }

    #[test]
    fn scan_leaves_missing_directory_alone_when_asked() {
        let dir = tempdir().unwrap();
        let music = dir.path().join("audio");
        let settings = LibrarySettings {
            create_if_missing: false,
            ..by_filename()
        };

        let tracks = scan(&music, &settings).unwrap();
        assert!(tracks.is_empty());
        assert!(!music.exists());
    }

    #[test]
    fn scan_rejects_a_file_as_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        fs::write(&file, b"not real").unwrap();

        let err = scan(&file, &by_filename()).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }
}

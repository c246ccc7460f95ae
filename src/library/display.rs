use std::path::Path;

use crate::config::TrackDisplayField;

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Compose a track's queue name from `fields`, joined with `sep`.
///
/// Blank fields are skipped. When nothing is left the title is used, which
/// for untagged files is the file stem.
pub fn display_from_fields(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Display => {
                parts.extend(non_blank(artist));
                parts.extend(non_blank(Some(title)));
            }
            TrackDisplayField::Title => parts.extend(non_blank(Some(title))),
            TrackDisplayField::Artist => parts.extend(non_blank(artist)),
            TrackDisplayField::Album => parts.extend(non_blank(album)),
            TrackDisplayField::Filename => parts.extend(non_blank(stem)),
            TrackDisplayField::Path => parts.push(path.display().to_string()),
        }
    }

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}

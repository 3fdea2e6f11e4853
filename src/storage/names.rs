//! File name helpers
//!
//! String-level helpers over URLs and paths. Nothing here touches the disk.

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "3gp", "avi", "flv"];

/// Text after the last `/`, or empty when there is none
pub fn file_name_from_url(url: &str) -> String {
    match url.rfind('/') {
        Some(last) => url[last + 1..].to_string(),
        None => String::new(),
    }
}

/// Extension of the last path segment of a URL, without the dot.
///
/// Fragment and query are ignored. Segments containing characters outside
/// `[A-Za-z0-9_.\-()%]` have no extension.
pub fn file_extension(url: &str) -> String {
    let mut url = url;
    if let Some(fragment) = url.rfind('#').filter(|&pos| pos > 0) {
        url = &url[..fragment];
    }
    if let Some(query) = url.rfind('?').filter(|&pos| pos > 0) {
        url = &url[..query];
    }

    let filename = match url.rfind('/') {
        Some(pos) => &url[pos + 1..],
        None => url,
    };

    if filename.is_empty() || !filename.chars().all(is_filename_char) {
        return String::new();
    }

    match filename.rfind('.') {
        Some(dot) => filename[dot + 1..].to_string(),
        None => String::new(),
    }
}

fn is_filename_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '(' | ')' | '%')
}

/// Whether the name carries a still-image extension
pub fn is_image(name: &str) -> bool {
    has_extension_in(name, &IMAGE_EXTENSIONS)
}

/// Whether the name carries a video extension
pub fn is_video(name: &str) -> bool {
    has_extension_in(name, &VIDEO_EXTENSIONS)
}

fn has_extension_in(name: &str, extensions: &[&str]) -> bool {
    let extension = file_extension(name);
    extensions.iter().any(|ext| ext.eq_ignore_ascii_case(&extension))
}

//! Display formatting helpers

/// Format seconds as `M:SS`
///
/// Non-finite and negative inputs render as `0:00`, which is what the player
/// shows before a source has reported its duration.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// Drop the final extension from a file name
///
/// `song.mp3` -> `song`, `a.tar.gz` -> `a.tar`. A trailing dot or a dot inside
/// a directory component is left alone.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..dot]
            }
        }
        None => name,
    }
}

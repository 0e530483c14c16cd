// src/core/sanitize.rs

/// File stem for a table name: spaces become underscores. Path separators get
/// the same treatment so a caption cannot point outside the output directory.
/// Nothing else is touched, so distinct captions may still collide.
pub fn table_file_stem(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect()
}

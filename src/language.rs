use crate::filter::extension_of;

/// Returns the fence tag used for a file's content block.
pub fn language_for(name: &str) -> &'static str {
    match extension_of(name) {
        Some(ext) => language_from_extension(&ext),
        None => language_from_marker_name(&name.to_lowercase()),
    }
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        ".ts" => "typescript",
        ".tsx" => "tsx",
        ".js" => "javascript",
        ".jsx" => "jsx",
        ".py" => "python",
        ".css" => "css",
        ".scss" => "scss",
        ".sass" => "sass",
        ".less" => "less",
        ".json" => "json",
        ".md" => "markdown",
        ".html" => "html",
        ".xml" | ".svg" => "xml",
        ".yml" | ".yaml" => "yaml",
        ".txt" => "text",
        _ => "text",
    }
}

fn language_from_marker_name(name: &str) -> &'static str {
    if name.contains("dockerfile") {
        "dockerfile"
    } else if name.contains("makefile") {
        "makefile"
    } else if name.contains("gitignore") {
        "gitignore"
    } else if name.contains("eslintrc") {
        "json"
    } else {
        "text"
    }
}

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file (chosen by extension) into a typed struct.
/// Unknown extensions are parsed as JSON.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse_contents(&canonical, &contents)
}

fn parse_contents<T: DeserializeOwned>(
    path: &Path,
    contents: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let value = if is_yaml {
        serde_yaml::from_str(contents)
            .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?
    } else {
        serde_json::from_str(contents)
            .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?
    };
    Ok(value)
}

/// Resolve the path against the working directory and check it is a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_calc_core::roi::calculator::RoiInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_yaml_input() {
        let yaml = "start_date: 2025-01-01\ntotal_spent: 250\nclaimed: \"12.5\"\n";
        let input: RoiInput = parse_contents(Path::new("in.yaml"), yaml).unwrap();
        assert_eq!(input.total_spent, dec!(250));
        assert_eq!(input.claimed, dec!(12.5));
        assert_eq!(input.locked, RoiInput::default().locked);
    }

    #[test]
    fn test_parse_json_input() {
        let json = r#"{"start_date": "2025-01-01", "remaining": "10"}"#;
        let input: RoiInput = parse_contents(Path::new("in.json"), json).unwrap();
        assert_eq!(input.remaining, dec!(10));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_contents::<RoiInput>(Path::new("bad.json"), "{").unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<RoiInput>("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}

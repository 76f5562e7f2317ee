//! Console options
//!
//! Defaults can be overridden from the command line (see `main.rs`) and
//! changed at runtime with `set <name> <value>`.

/// Rendering and diagnostics settings for a console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Draw pieces with Unicode chess glyphs instead of FEN letters
    pub glyphs: bool,

    /// Print rank numbers and file letters around the board
    pub coordinates: bool,

    /// Emit `info string` trace lines for every command
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            glyphs: true,
            coordinates: true,
            debug: false,
        }
    }
}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value.map(|v| v.to_ascii_lowercase()) {
        // a bare `set <name>` switches the flag on
        None => Ok(true),
        Some(v) => match v.as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(format!("Invalid value for option {}: {}", name, v)),
        },
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name.to_ascii_lowercase().as_str() {
            "glyphs" => self.glyphs = parse_bool(name, value)?,
            "coordinates" => self.coordinates = parse_bool(name, value)?,
            "debug" => self.debug = parse_bool(name, value)?,
            _ => return Err(format!("Unknown option: {}", name)),
        }
        Ok(())
    }

    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option glyphs {}", self.glyphs),
            format!("option coordinates {}", self.coordinates),
            format!("option debug {}", self.debug),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let options = Options::new();
        assert!(options.glyphs);
        assert!(options.coordinates);
        assert!(!options.debug);
    }

    #[test]
    fn test_set_option_values() {
        let mut options = Options::new();
        options.set_option("glyphs", Some("off")).unwrap();
        assert!(!options.glyphs);
        options.set_option("Debug", None).unwrap();
        assert!(options.debug);
        options.set_option("coordinates", Some("0")).unwrap();
        assert!(!options.coordinates);
    }

    #[test]
    fn test_set_option_errors() {
        let mut options = Options::new();
        assert!(options.set_option("threads", Some("4")).is_err());
        let err = options.set_option("glyphs", Some("maybe")).unwrap_err();
        assert!(err.contains("glyphs"));
        assert_eq!(options, Options::default());
    }
}

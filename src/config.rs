use std::path::PathBuf;

/// Workbook read when no input path is supplied.
pub const DEFAULT_INPUT: &str = "Campaign data.xlsx";
/// Location of the generated document when no output path is supplied.
pub const DEFAULT_OUTPUT: &str = "ApPolForgeSym/CampaignData.json";

/// Paths used by a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Replaces whichever paths were given, keeping the rest.
    pub fn with_overrides(self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or(self.input),
            output: output.unwrap_or(self.output),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_paths() {
        let config = ConvertConfig::default().with_overrides(None, Some("out.json".into()));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("out.json"));
    }
}

//! Visual reordering of mixed right-to-left and left-to-right UI text.
//!
//! Ties the configuration in `rtl-config` to the fixer in `rtl-text`.

use std::path::Path;

use anyhow::Context;

pub use rtl_config::{FixConfig, RtlConfig};
pub use rtl_text::{Classifier, FixDefect, FixOptions, RtlFixer, TagScanner, TextBuffer};

/// Per-call switches for `config`.
pub fn options_from_config(config: &FixConfig) -> FixOptions {
    FixOptions {
        farsi: config.farsi,
        fix_text_tags: config.fix_text_tags,
        preserve_numbers: config.preserve_numbers,
    }
}

/// A fixer whose classifier honours the configured pair-search limit.
pub fn fixer_from_config(config: &FixConfig) -> RtlFixer {
    let classifier = match config.pair_search_limit {
        Some(limit) => Classifier::with_pair_search_limit(limit),
        None => Classifier::new(),
    };
    RtlFixer::new().with_classifier(classifier)
}

/// Load `path` with environment overrides applied on top.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<RtlConfig> {
    let path = path.as_ref();
    let mut config = RtlConfig::load_from_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    config.merge_with_env();
    Ok(config)
}

/// Fix one string with a throwaway fixer.
pub fn fix_str(input: &str, config: &RtlConfig) -> String {
    let mut fixer = fixer_from_config(&config.fix);
    let output = fixer.fix_to_string(input, options_from_config(&config.fix));
    for defect in fixer.defects() {
        tracing::debug!(%defect, "fix defect");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_maps_to_default_options() {
        let config = RtlConfig::default();
        assert_eq!(options_from_config(&config.fix), FixOptions::default());
    }

    #[test]
    fn pair_search_limit_reaches_the_classifier() {
        let mut config = RtlConfig::default();
        config.fix.pair_search_limit = Some(32);
        let fixer = fixer_from_config(&config.fix);
        assert_eq!(fixer.classifier().pair_search_limit(), 32);
    }

    #[test]
    fn fixes_with_config_flags() {
        let mut config = RtlConfig::default();
        assert_eq!(fix_str("سلام abc", &config), "abc مالس");

        config.fix.farsi = false;
        assert_eq!(fix_str("۱۲", &config), "۲۱");
    }

    #[test]
    fn load_config_reports_the_path() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("rtl.toml");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("rtl.toml"));

        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "[fix]\npreserve_numbers = true")?;
        let config = load_config(&path)?;
        assert!(config.fix.preserve_numbers);
        Ok(())
    }
}

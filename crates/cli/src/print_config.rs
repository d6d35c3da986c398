// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use sharefit_config::AppConfig;

/// The effective configuration as YAML, headed by the file it came from.
pub fn render(config: &AppConfig) -> Result<String> {
    let mut rendered = String::new();
    if let Some(path) = config.config_file() {
        rendered.push_str(&format!("# {}\n", path.display()));
    }
    rendered.push_str(&config.to_yaml()?);
    Ok(rendered)
}

pub fn execute(config: &AppConfig) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() -> Result<()> {
        let rendered = render(&AppConfig::default())?;
        assert!(!rendered.starts_with('#'));
        assert!(rendered.contains("strategy: consensus"));
        assert!(rendered.contains("digit_policy: strict"));
        assert!(rendered.contains("parallel: false"));
        assert!(rendered.contains("output: text"));
        Ok(())
    }

    #[test]
    fn test_render_overridden_values() -> Result<()> {
        let config: AppConfig = serde_json::from_str(
            r#"{ "strategy": "smallest", "parallel": true, "output": "json" }"#,
        )?;
        let rendered = render(&config)?;
        assert!(rendered.contains("strategy: smallest"));
        assert!(rendered.contains("parallel: true"));
        assert!(rendered.contains("output: json"));
        Ok(())
    }
}

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One trained pattern with its goodness weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPattern {
    pub pattern: String,
    pub goodness: f64,
}

/// The trained classifier: for each class, the surviving patterns with their
/// weights. Serializes to JSON for machine consumption and renders to a
/// standalone guesser program for end users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    classes: BTreeMap<String, Vec<WeightedPattern>>,
}

/// Calibration constant in the reliability normalization
/// `score / (score + RELIABILITY_OFFSET)`. Fixed, not derived from data.
const RELIABILITY_OFFSET: f64 = 100.0;

impl ClassifierArtifact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pattern(&mut self, class_name: &str, pattern: String, goodness: f64) {
        self.classes
            .entry(class_name.to_string())
            .or_default()
            .push(WeightedPattern { pattern, goodness });
    }

    pub fn classes(&self) -> &BTreeMap<String, Vec<WeightedPattern>> {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Render a standalone Rust program embedding the pattern table. Given a
    /// file (or stdin) it sums `goodness * matches` per class and reports the
    /// reliability `score / (score + 100)` for each.
    pub fn render_program(&self) -> String {
        let mut table = String::new();
        for (class_name, patterns) in &self.classes {
            let _ = write!(table, "    ({class_name:?}, &[");
            for wp in patterns {
                let _ = write!(table, "({:?}, {:?}f64), ", wp.pattern, wp.goodness);
            }
            let _ = writeln!(table, "]),");
        }

        format!(
            r#"//! Generated file-format guesser. Build with the `regex` crate available:
//!     cargo add regex
//! Usage: fguess [FILE]   (reads stdin when no file is given)

use std::io::Read;

const CLASSES: &[(&str, &[(&str, f64)])] = &[
{table}];

fn main() {{
    let mut text = String::new();
    match std::env::args().nth(1) {{
        Some(path) => match std::fs::read(&path) {{
            Ok(bytes) => text = String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {{
                eprintln!("The file {{path}} can't be opened: {{err}}");
                std::process::exit(1);
            }}
        }},
        None => {{
            if std::io::stdin().read_to_string(&mut text).is_err() {{
                eprintln!("Failed to read stdin");
                std::process::exit(1);
            }}
        }}
    }}

    for (class_name, patterns) in CLASSES {{
        let mut score = 0.0;
        for &(pattern, goodness) in *patterns {{
            if let Ok(re) = regex::Regex::new(pattern) {{
                score += goodness * re.find_iter(&text).count() as f64;
            }}
        }}
        let reliability = score / (score + {offset:?});
        println!(
            "The file is {{class_name}} with a reliability of {{:.2}}%",
            100.0 * reliability
        );
    }}
}}
"#,
            table = table,
            offset = RELIABILITY_OFFSET,
        )
    }

    pub fn save_program(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render_program())?;
        Ok(())
    }
}

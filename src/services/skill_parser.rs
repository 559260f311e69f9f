use std::fs;
use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use crate::config::constants::MAX_SKILL_NAME_LEN;
use crate::errors::{ParityError, ParityResult, ResultExt};
use crate::structs::skill_definition::{SkillDefinition, SkillInput, SkillOutput};
use crate::structs::validation_result::ValidationResult;

const FRONTMATTER_DELIMITER: &str = "---";
const STEPS_HEADINGS: &[&str] = &["## steps", "## analysis steps"];
const SECTION_PREFIX: &str = "## ";

static SEMVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid semver regex"));
static NUMBERED_STEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)").expect("valid step regex"));

#[derive(Debug, Default, Deserialize)]
struct RawFrontmatter {
    name: Option<Value>,
    version: Option<Value>,
    description: Option<Value>,
    #[serde(default)]
    inputs: Vec<RawParameter>,
    #[serde(default)]
    outputs: Vec<RawParameter>,
}

#[derive(Debug, Default, Deserialize)]
struct RawParameter {
    name: Option<Value>,
    #[serde(rename = "type")]
    param_type: Option<Value>,
    required: Option<bool>,
    default: Option<Value>,
}

#[derive(Serialize)]
struct FrontmatterOut<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    inputs: &'a [SkillInput],
    outputs: &'a [SkillOutput],
}

/// Plain scalars become text; `1.0.0` and `1.0` both arrive here.
fn scalar_value(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Like `scalar_value`, but an empty string counts as missing.
fn scalar_text(value: &Option<Value>) -> Option<String> {
    scalar_value(value).filter(|s| !s.is_empty())
}

/// Line-oriented parser for SKILL.md documents: YAML frontmatter between
/// `---` lines, then a markdown body with an optional numbered Steps list.
pub struct SkillParser {
    lines: Vec<String>,
    current: usize,
}

impl SkillParser {
    fn new(input: &str) -> Self {
        Self {
            lines: input.trim().lines().map(|s| s.to_string()).collect(),
            current: 0,
        }
    }

    pub fn parse(content: &str) -> ParityResult<SkillDefinition> {
        let mut parser = Self::new(content);
        let frontmatter = parser.split_frontmatter()?;
        let raw = Self::parse_frontmatter(&frontmatter)?;

        let errors = Self::frontmatter_errors(&raw);
        if !errors.is_empty() {
            return Err(ParityError::validation_error(
                "skill",
                &scalar_text(&raw.name).unwrap_or_default(),
                &errors.join("; "),
                Some("Run skill validation for the full list of problems"),
            ));
        }

        let steps = parser.extract_steps();

        Ok(SkillDefinition {
            name: scalar_text(&raw.name).unwrap_or_default(),
            version: scalar_text(&raw.version).unwrap_or_default(),
            description: scalar_text(&raw.description).unwrap_or_default(),
            inputs: raw
                .inputs
                .iter()
                .map(|input| SkillInput {
                    name: scalar_text(&input.name).unwrap_or_default(),
                    input_type: scalar_text(&input.param_type).unwrap_or_default(),
                    required: input.required.unwrap_or(false),
                    default: scalar_value(&input.default),
                })
                .collect(),
            outputs: raw
                .outputs
                .iter()
                .map(|output| SkillOutput {
                    name: scalar_text(&output.name).unwrap_or_default(),
                    output_type: scalar_text(&output.param_type).unwrap_or_default(),
                })
                .collect(),
            steps,
        })
    }

    pub fn parse_file(path: &Path) -> ParityResult<SkillDefinition> {
        let content = fs::read_to_string(path).with_file_context(&path.display().to_string(), "read skill file")?;
        Self::parse(&content)
    }

    /// Collects every problem instead of stopping at the first.
    pub fn validate(content: &str) -> ValidationResult {
        let mut parser = Self::new(content);
        let errors = match parser
            .split_frontmatter()
            .and_then(|frontmatter| Self::parse_frontmatter(&frontmatter))
        {
            Ok(raw) => Self::frontmatter_errors(&raw),
            Err(e) => vec![format!("Parse error: {}", Self::short_reason(&e))],
        };
        ValidationResult::from_errors(errors)
    }

    /// Steps are written one per line, trimmed. A blank step or one that
    /// spans lines could not be read back, so it is rejected.
    pub fn serialize(skill: &SkillDefinition) -> ParityResult<String> {
        for (i, step) in skill.steps.iter().enumerate() {
            if step.trim().is_empty() || step.contains(['\n', '\r']) {
                return Err(ParityError::validation_error(
                    "steps",
                    step,
                    &format!("step {} must be a single non-blank line", i + 1),
                    None,
                ));
            }
        }

        let frontmatter = FrontmatterOut {
            name: &skill.name,
            version: &skill.version,
            description: &skill.description,
            inputs: &skill.inputs,
            outputs: &skill.outputs,
        };
        let yaml = serde_yaml::to_string(&frontmatter)?;
        let body = Self::generate_body(skill);

        Ok(format!("{delim}\n{yaml}{delim}\n\n{body}", delim = FRONTMATTER_DELIMITER))
    }

    fn split_frontmatter(&mut self) -> ParityResult<String> {
        if self.is_eof() || self.current_line().trim_end() != FRONTMATTER_DELIMITER {
            return Err(ParityError::parse_error(
                "SKILL.md",
                Some(1),
                "document must start with YAML frontmatter (---)",
                None,
            ));
        }
        self.advance();

        let start = self.current;
        while !self.is_eof() && self.current_line().trim_end() != FRONTMATTER_DELIMITER {
            self.advance();
        }

        if self.is_eof() {
            return Err(ParityError::parse_error(
                "SKILL.md",
                Some(self.current),
                "frontmatter missing closing ---",
                None,
            ));
        }

        let frontmatter = self.lines[start..self.current].join("\n");
        self.advance();
        Ok(frontmatter)
    }

    fn parse_frontmatter(frontmatter: &str) -> ParityResult<RawFrontmatter> {
        if frontmatter.trim().is_empty() {
            return Ok(RawFrontmatter::default());
        }
        Ok(serde_yaml::from_str(frontmatter)?)
    }

    fn frontmatter_errors(raw: &RawFrontmatter) -> Vec<String> {
        let mut errors = Vec::new();
        let name = scalar_text(&raw.name);
        let version = scalar_text(&raw.version);

        if name.is_none() {
            errors.push("Missing required field: name".to_string());
        }
        if version.is_none() {
            errors.push("Missing required field: version".to_string());
        }
        if scalar_text(&raw.description).is_none() {
            errors.push("Missing required field: description".to_string());
        }

        if let Some(name) = &name {
            if name.chars().count() > MAX_SKILL_NAME_LEN {
                errors.push(format!("Skill name exceeds {} characters", MAX_SKILL_NAME_LEN));
            }
        }

        if let Some(version) = &version {
            if !SEMVER.is_match(version) {
                errors.push("Version must follow semver format (x.y.z)".to_string());
            }
        }

        for input in &raw.inputs {
            match scalar_text(&input.name) {
                None => errors.push("Input missing name".to_string()),
                Some(name) if scalar_text(&input.param_type).is_none() => {
                    errors.push(format!("Input '{}' missing type", name));
                }
                Some(_) => {}
            }
        }

        for output in &raw.outputs {
            match scalar_text(&output.name) {
                None => errors.push("Output missing name".to_string()),
                Some(name) if scalar_text(&output.param_type).is_none() => {
                    errors.push(format!("Output '{}' missing type", name));
                }
                Some(_) => {}
            }
        }

        errors
    }

    /// Numbered items under a Steps heading, up to the next `## ` section.
    fn extract_steps(&mut self) -> Vec<String> {
        let mut steps = Vec::new();
        let mut in_steps = false;

        while !self.is_eof() {
            let line = self.current_line();

            if !in_steps {
                let lowered = line.to_lowercase();
                if STEPS_HEADINGS.iter().any(|heading| lowered.contains(heading)) {
                    in_steps = true;
                }
            } else if line.starts_with(SECTION_PREFIX) {
                break;
            } else if let Some(captures) = NUMBERED_STEP.captures(line) {
                steps.push(captures[1].trim().to_string());
            }

            self.advance();
        }

        steps
    }

    fn generate_body(skill: &SkillDefinition) -> String {
        let mut lines = vec![
            format!("# {}", skill.name),
            String::new(),
            skill.description.clone(),
            String::new(),
        ];

        if !skill.steps.is_empty() {
            lines.push("## Steps".to_string());
            for (i, step) in skill.steps.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, step.trim()));
            }
        }

        lines.join("\n")
    }

    fn short_reason(error: &ParityError) -> String {
        match error {
            ParityError::ParseError { reason, .. } => reason.clone(),
            other => other.user_message(),
        }
    }

    fn current_line(&self) -> &str {
        &self.lines[self.current]
    }

    fn advance(&mut self) {
        self.current += 1;
    }

    fn is_eof(&self) -> bool {
        self.current >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stop_at_next_section() {
        let doc = "---\nname: a\nversion: 1.0.0\ndescription: d\n---\n\n## Analysis Steps\n1. first\n2.  second \n## Notes\n3. ignored";
        let skill = SkillParser::parse(doc).unwrap();
        assert_eq!(skill.steps, vec!["first", "second"]);
    }

    #[test]
    fn body_without_steps_yields_empty_list() {
        let doc = "---\nname: a\nversion: 1.0.0\ndescription: d\n---\n# a\n\n1. not a step";
        assert!(SkillParser::parse(doc).unwrap().steps.is_empty());
    }

    #[test]
    fn empty_frontmatter_reports_all_required_fields() {
        let result = SkillParser::validate("---\n---\nbody");
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }
}

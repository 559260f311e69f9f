use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::account_kind::AccountKind;
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;
use crate::enums::output_format::OutputFormat;
use crate::enums::pattern_type::PatternType;
use crate::enums::pda_command::PdaCommand;
use crate::enums::programs_command::ProgramsCommand;
use crate::enums::skills_command::SkillsCommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample config to ~/.parity/config.toml
    Init,
    /// Check the config file and API key
    Validate,
    Analyze {
        /// Program source file
        path: PathBuf,
        #[clap(short, long, value_enum)]
        framework: Option<Framework>,
        /// Repeatable; defaults to security-audit
        #[clap(short, long = "skill")]
        skills: Vec<String>,
        #[clap(long)]
        min_score: Option<u8>,
        #[clap(long, value_enum, value_delimiter = ',')]
        fail_on: Vec<FindingSeverity>,
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    Skills {
        #[clap(subcommand)]
        action: SkillsCommand,
    },
    /// Validate a SKILL.md document offline
    SkillValidate {
        file: PathBuf,
    },
    Context {
        #[clap(short, long)]
        pattern: Option<String>,
        #[clap(short, long, value_enum)]
        framework: Option<Framework>,
        #[clap(short, long, value_enum)]
        severity: Option<FindingSeverity>,
        #[clap(short = 't', long, value_enum)]
        pattern_type: Option<PatternType>,
    },
    Programs {
        #[clap(subcommand)]
        action: ProgramsCommand,
    },
    Health,
    /// Derive registry account addresses
    Pda {
        #[clap(subcommand)]
        action: PdaCommand,
    },
    /// Decode raw registry account data from a file
    Decode {
        #[clap(value_enum)]
        kind: AccountKind,
        file: PathBuf,
    },
}

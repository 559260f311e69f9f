use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PdaCommand {
    Registry,
    /// Program entry, keyed by program hash
    Program {
        #[clap(long, conflicts_with = "file", required_unless_present = "file")]
        hash: Option<String>,
        /// Hash this file instead of passing --hash
        #[clap(long)]
        file: Option<PathBuf>,
    },
    Analysis {
        program_entry: String,
        auditor: String,
    },
    Skill {
        name: String,
    },
    Auditor {
        authority: String,
    },
    Badge {
        program_entry: String,
    },
    Pattern {
        id: String,
    },
}

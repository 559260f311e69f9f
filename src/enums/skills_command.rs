use clap::Subcommand;

#[derive(Subcommand)]
pub enum SkillsCommand {
    List,
    Get {
        name: String,
    },
    /// Show the skills a composite skill expands to
    Chain {
        name: String,
    },
}

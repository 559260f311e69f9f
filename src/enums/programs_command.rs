use clap::Subcommand;
use crate::config::constants::DEFAULT_PAGE_LIMIT;

#[derive(Subcommand)]
pub enum ProgramsCommand {
    List {
        #[clap(short, long, default_value_t = 1)]
        page: u32,
        #[clap(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    Get {
        /// Hex SHA-256 of the program
        hash: String,
    },
    Stats,
}

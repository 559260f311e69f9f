use serde::{Deserialize, Serialize};
use crate::structs::program_entry::ProgramEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// `/v1/programs` answers with either a bare list or a paginated envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProgramPage {
    Paginated {
        data: Vec<ProgramEntry>,
        pagination: Pagination,
    },
    Bare(Vec<ProgramEntry>),
}

impl ProgramPage {
    pub fn into_entries(self) -> Vec<ProgramEntry> {
        match self {
            Self::Paginated { data, .. } => data,
            Self::Bare(entries) => entries,
        }
    }
}

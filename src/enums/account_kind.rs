use clap::ValueEnum;

/// Registry program account layouts the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountKind {
    Program,
    Auditor,
    Badge,
    Registry,
}

//! Output format shared by every golink command

use clap::ValueEnum;

/// How golinks are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for lists, field/value pairs for one golink
    Table,
    /// RFC 4180 CSV with a header row
    Csv,
    /// Pretty-printed JSON with every field
    Json,
    /// YAML with every field
    Yaml,
}

impl OutputFormat {
    /// Whether status lines such as "✓ Created ..." may share stdout with the data
    pub fn is_human_readable(&self) -> bool {
        matches!(self, OutputFormat::Table)
    }
}

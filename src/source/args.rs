use clap::Args;

use super::SourceKind;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        value_name = "KIND[,KIND...]",
        value_enum,
        value_delimiter = ',',
        default_values_t = [SourceKind::Database, SourceKind::File],
        help = "Data sources to read from, in run order"
    )]
    pub sources: Vec<SourceKind>,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            sources: vec![SourceKind::Database, SourceKind::File],
        }
    }
}

impl SourceArgs {
    /// Requested sources with repeats removed, first occurrence wins.
    pub fn get_source_list(&self) -> Vec<SourceKind> {
        let mut seen = Vec::with_capacity(self.sources.len());
        for kind in &self.sources {
            if !seen.contains(kind) {
                seen.push(*kind);
            }
        }
        seen
    }
}

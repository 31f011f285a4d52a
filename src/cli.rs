use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Generate LookML dimensions for table columns a view does not reference yet",
    long_about = None
)]
pub struct Cli {
    /// Table description file (';'-delimited, '#' comment lines, header row)
    #[arg(short = 't', long = "table")]
    pub table: PathBuf,
    /// Existing LookML view file to scan for ${TABLE}.column references
    #[arg(short = 'l', long = "lookml")]
    pub lookml: PathBuf,
    /// Column name suffix to exclude from generated dimension names, like '_c'
    #[arg(short = 's', long = "suffix")]
    pub suffix: Option<String>,
    /// Report columns referenced in LookML but absent from the table description (true|t|1)
    #[arg(long, value_parser = parse_switch, action = clap::ArgAction::Set, default_value_t = false)]
    pub check: bool,
    /// Emit progress tracing to stderr (true|t|1)
    #[arg(long, value_parser = parse_switch, action = clap::ArgAction::Set, default_value_t = false)]
    pub verbose: bool,
}

/// Permissive on/off switch: `true`, `t`, and `1` enable, anything else
/// (including an empty string) disables. Never an error.
pub fn parse_switch(value: &str) -> Result<bool, String> {
    Ok(matches!(value.trim(), "true" | "t" | "1"))
}

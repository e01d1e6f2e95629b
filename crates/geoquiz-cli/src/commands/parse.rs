use std::path::PathBuf;

use clap::Args;
use geoquiz_core::parse_quiz;

#[derive(Args)]
pub struct ParseArgs {
    /// File with generated quiz text (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_input(args.file.as_deref())?;
    let questions = parse_quiz(&text);
    tracing::debug!(questions = questions.len(), "parsed quiz text");

    let json = if args.compact {
        serde_json::to_string(&questions)?
    } else {
        serde_json::to_string_pretty(&questions)?
    };
    println!("{json}");
    Ok(())
}

use clap::Args;
use geoquiz_core::{Config, QuizGenerator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Place or topic to build the quiz around
    pub keyword: String,
    /// Print the generated text instead of parsed questions
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let generator = QuizGenerator::from_env(config.generation)?;

    let quiz = super::runtime()?.block_on(generator.generate(&args.keyword))?;
    if args.raw {
        println!("{}", quiz.raw_text);
    } else {
        println!("{}", serde_json::to_string_pretty(&quiz)?);
    }
    Ok(())
}

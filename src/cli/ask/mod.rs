//! Ask command - answers one question from the knowledge base

use clap::Args;

use super::{load_config, SourceArgs};
use crate::domain::RagResponse;

/// Arguments for the ask command
#[derive(Args, Clone, Debug)]
pub struct AskArgs {
    /// The question, as one or more words
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Print the full response as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

impl AskArgs {
    pub fn question(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let config = load_config(&args.sources);
    let service = crate::create_knowledge_service(&config)?;

    let response = service.ask(&args.question()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render(&response));
    }

    Ok(())
}

fn render(response: &RagResponse) -> String {
    let mut out = format!("{}\n", response.answer);

    if !response.sources.is_empty() {
        out.push_str("\nSources:\n");
        for result in &response.sources {
            out.push_str(&format!(
                "  - {} [{}] similarity {:.2}, relevance {:.2}\n",
                result.document.title,
                result.document.category,
                result.similarity,
                result.relevance_score
            ));
        }
    }

    out.push_str(&format!("\nConfidence: {:.2}\n", response.confidence));
    out
}

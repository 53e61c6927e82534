use clap::Subcommand;
use summit_config::Config;
use summit_core_fun_contracts::FunFeatureService;
use summit_models::fun::{FunQuestion, FunQuestions};

use crate::environment::{types::FunFeature, Provider, Provides};

#[derive(Debug, Subcommand)]
pub enum FunCommand {
    /// Ask the language model the same way the fun endpoint does
    Ask {
        #[arg(long)]
        universe_question: Option<String>,
        #[arg(long)]
        idea_awake: Option<String>,
    },
}

impl FunCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            FunCommand::Ask {
                universe_question,
                idea_awake,
            } => {
                let questions = FunQuestions {
                    universe_question: FunQuestion::new(universe_question.unwrap_or_default()),
                    idea_awake: FunQuestion::new(idea_awake.unwrap_or_default()),
                };
                ask(config, questions).await
            }
        }
    }
}

async fn ask(config: Config, questions: FunQuestions) -> anyhow::Result<()> {
    let fun: FunFeature = Provider::new(&config)?.provide();

    let answer = fun.ask(questions).await?;
    println!("{answer}");

    Ok(())
}

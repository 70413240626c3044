use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use snaptag::{Classifier, ClassifierConfig, Prediction};

/// Tag video titles with a category (Education, Entertainment, Sports, Technology)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Titles to classify; read from stdin, one per line, when omitted
    titles: Vec<String>,

    /// Additive smoothing for the Naive Bayes model (overrides SNAPTAG_ALPHA)
    #[arg(long)]
    alpha: Option<f64>,

    /// Use uniform class priors instead of learning them from the corpus
    #[arg(long)]
    no_fit_prior: bool,

    /// Print the probability of every category
    #[arg(short, long)]
    scores: bool,

    /// Print one JSON object per title
    #[arg(long)]
    json: bool,

    /// Print information about the trained model before classifying
    #[arg(long)]
    info: bool,
}

impl Args {
    fn config(&self) -> ClassifierConfig {
        let mut config = ClassifierConfig::from_env();
        if let Some(alpha) = self.alpha {
            config = config.with_alpha(alpha);
        }
        if self.no_fit_prior {
            config = config.with_fit_prior(false);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_time = Instant::now();
    info!("Building classifier...");
    let classifier = snaptag::initialize_with_config(args.config())
        .context("failed to train the category classifier")?;
    info!("Classifier built in {:.2?}", start_time.elapsed());

    if args.info {
        let model_info = classifier.info();
        if args.json {
            println!("{}", serde_json::to_string(&model_info)?);
        } else {
            println!("Classes: {:?}", model_info.class_labels);
            println!("Training examples: {}", model_info.num_examples);
            println!("Vocabulary size: {}", model_info.vocabulary_size);
            println!("Smoothing alpha: {}", model_info.alpha);
            println!("Fit prior: {}", model_info.fit_prior);
        }
    }

    if args.titles.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read title from stdin")?;
            process_input(&classifier, &line, &args)?;
        }
    } else {
        for title in &args.titles {
            process_input(&classifier, title, &args)?;
        }
    }

    Ok(())
}

fn process_input(classifier: &Classifier, title: &str, args: &Args) -> Result<()> {
    let prediction = classifier.predict(title);
    info!("{:?} -> {}", title, prediction.category);

    if args.json {
        println!("{}", serde_json::to_string(&TitleResult { title, prediction: &prediction })?);
        return Ok(());
    }

    println!("{}\t{}", prediction.category, title);
    if args.scores {
        let mut probabilities: Vec<_> = prediction.probabilities.iter().collect();
        probabilities.sort_by(|a, b| b.1.total_cmp(a.1).then(a.0.cmp(b.0)));
        for (category, p) in probabilities {
            println!("    {}: {:.1}%", category, p * 100.0);
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct TitleResult<'a> {
    title: &'a str,
    #[serde(flatten)]
    prediction: &'a Prediction,
}

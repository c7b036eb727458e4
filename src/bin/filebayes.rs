use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use filebayes::{
    classifier::{Evidence, NaiveBayesClassifier},
    config::Config,
    logging,
    models::{FileRef, TrainingSet},
    organizer::{
        classify_files, collect_incoming, learn_structure, write_mapping, write_mapping_to,
        Assignment, FileMover, LearnOptions, MappingFormat,
    },
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "filebayes")]
#[command(about = "Learns how a folder tree is organized and files new documents the same way")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (defaults to config/settings.toml, then ~/.config/filebayes/settings.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Evidence to learn from: "name" or "content" (overrides config)
    #[arg(long, global = true)]
    evidence: Option<Evidence>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a folder tree and save the model
    #[command(name = "train")]
    Train {
        /// Folder tree to learn from
        #[arg(value_name = "ROOT")]
        root: PathBuf,
        /// Where to write the model
        #[arg(short, long, value_name = "FILE")]
        model: PathBuf,
    },
    /// Predict a folder for every file in a directory
    #[command(name = "classify")]
    Classify {
        /// Directory of files to classify
        #[arg(value_name = "INCOMING")]
        incoming: PathBuf,
        /// Saved model to use
        #[arg(long, value_name = "FILE", conflicts_with = "root", required_unless_present = "root")]
        model: Option<PathBuf>,
        /// Learn from this folder tree instead of a saved model
        #[arg(long, value_name = "ROOT")]
        root: Option<PathBuf>,
        /// Write the mapping here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Mapping format: text or csv
        #[arg(long, default_value = "text")]
        format: MappingFormat,
        /// Show the best-scoring folders for each file
        #[arg(long)]
        explain: bool,
    },
    /// Learn ROOT, classify INCOMING, write the mapping and optionally move the files
    #[command(name = "organize")]
    Organize {
        /// Folder tree to learn from (and file into)
        #[arg(value_name = "ROOT")]
        root: PathBuf,
        /// Directory of files to classify
        #[arg(value_name = "INCOMING")]
        incoming: PathBuf,
        /// Where to write the mapping
        #[arg(value_name = "MAPPING_FILE")]
        mapping_file: PathBuf,
        /// Move the files into their predicted folders
        #[arg(long)]
        apply: bool,
        /// Dry run (preview only, don't move files)
        #[arg(long)]
        dry_run: bool,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Mapping format: text or csv
        #[arg(long, default_value = "text")]
        format: MappingFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_from(cli.config.as_deref())?;
    logging::init_logging(&config.logging.level);

    let evidence = match cli.evidence {
        Some(evidence) => evidence,
        None => config.classifier.evidence()?,
    };

    match cli.command {
        Commands::Train { root, model } => {
            let clf = train(&root, evidence, &config)?;
            clf.save(&model)
                .with_context(|| format!("Failed to save model: {}", model.display()))?;
            println!(
                "✓ Saved model with {} folders and {} words to {}",
                clf.state().classes.len(),
                clf.state().vocabulary.len(),
                model.display()
            );
        }
        Commands::Classify {
            incoming,
            model,
            root,
            output,
            format,
            explain,
        } => {
            let clf = match (model, root) {
                (Some(model), _) => {
                    let clf = NaiveBayesClassifier::load(&model)
                        .with_context(|| format!("Failed to load model: {}", model.display()))?;
                    if cli.evidence.is_some_and(|e| e != clf.evidence()) {
                        tracing::warn!(
                            model = %clf.evidence(),
                            "--evidence ignored; the saved model fixes its evidence mode"
                        );
                    }
                    clf
                }
                (None, Some(root)) => train(&root, evidence, &config)?,
                (None, None) => anyhow::bail!("Either --model or --root is required"),
            };

            let files = collect_incoming(&incoming, config.organizer.skip_hidden)?;
            let assignments = classify_with_progress(&clf, &files)?;

            match output {
                Some(path) => {
                    write_mapping(&assignments, &path, format)?;
                    println!("✓ Wrote mapping for {} files to {}", assignments.len(), path.display());
                }
                None => write_mapping_to(&assignments, std::io::stdout().lock(), format)?,
            }

            if explain {
                print_explanations(&assignments);
            }
        }
        Commands::Organize {
            root,
            incoming,
            mapping_file,
            apply,
            dry_run,
            yes,
            format,
        } => {
            let clf = train(&root, evidence, &config)?;
            let files = collect_incoming(&incoming, config.organizer.skip_hidden)?;
            if files.is_empty() {
                println!("No files found to classify.");
                return Ok(());
            }

            let assignments = classify_with_progress(&clf, &files)?;
            write_mapping(&assignments, &mapping_file, format)?;
            println!("✓ Wrote mapping to {}", mapping_file.display());

            if apply {
                apply_assignments(
                    &assignments,
                    &root,
                    &incoming,
                    dry_run || config.organizer.dry_run_default,
                    yes || config.organizer.skip_confirmation,
                )?;
            }
        }
    }

    Ok(())
}

fn train(root: &Path, evidence: Evidence, config: &Config) -> Result<NaiveBayesClassifier> {
    let options = LearnOptions {
        skip_hidden: config.organizer.skip_hidden,
        max_depth: config.organizer.max_depth,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("Learning {}", root.display()));

    let data: TrainingSet = learn_structure(root, &options)?;
    if data.is_empty() {
        spinner.finish_and_clear();
        anyhow::bail!(
            "No files found in sub-folders of {}; nothing to learn from",
            root.display()
        );
    }

    let mut clf = NaiveBayesClassifier::new(evidence).with_parallelism(config.classifier.parallel);
    clf.fit(&data).context("Failed to train classifier")?;
    spinner.finish_and_clear();

    println!(
        "📊 Learned {} folders from {} files ({} evidence)",
        clf.state().classes.len(),
        clf.state().total_documents,
        evidence
    );
    Ok(clf)
}

fn classify_with_progress(clf: &NaiveBayesClassifier, files: &[FileRef]) -> Result<Vec<Assignment>> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files classified")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    let assignments = classify_files(clf, files, Some(&pb))?;
    pb.finish_and_clear();
    Ok(assignments)
}

fn print_explanations(assignments: &[Assignment]) {
    for assignment in assignments {
        println!("{}:", assignment.name);
        for (label, score) in assignment.top_scores(3) {
            println!("  {:>10.3}  {}", score, label);
        }
    }
}

fn apply_assignments(
    assignments: &[Assignment],
    root: &Path,
    incoming: &Path,
    dry_run: bool,
    skip_confirmation: bool,
) -> Result<()> {
    let mover = FileMover::new(root)?;
    let preview = mover.plan_moves(assignments, incoming)?;
    if preview.is_empty() {
        println!("Nothing to move.");
        return Ok(());
    }

    println!("{}", preview);

    if !dry_run && !skip_confirmation {
        let confirmed = Confirm::new()
            .with_prompt("Apply these changes?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    mover.execute(&preview, dry_run)?;
    if !dry_run {
        println!("✓ Moved {} files", preview.files_to_move.len());
    }
    Ok(())
}

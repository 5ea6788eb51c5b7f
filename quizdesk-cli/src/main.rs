use clap::{Parser, Subcommand, ValueEnum};
use quizdesk_cli::infrastructure::config::DEFAULT_DATA_FILE;
use quizdesk_cli::presentation::{
    finish_run, render_summaries, render_validation, QuizRunner, TakeOutcome,
};
use quizdesk_cli::{AppConfig, CliError, JsonFileStore, Result};
use quizdesk_core::{
    publish_draft, AuthoringError, DraftQuiz, PublishError, QuizResult, QuizSession, QuizStore,
    UserIdentity,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "quizdesk")]
#[command(version, about = "Quizdesk - author, publish and take multiple-choice quizzes")]
struct Cli {
    /// JSON file holding published quizzes and results
    #[arg(long, global = true, env = "QUIZDESK_DATA", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List published quizzes
    List,

    /// Check a quiz draft and print every problem found
    Validate {
        /// Draft JSON file
        draft: PathBuf,
    },

    /// Validate a draft and publish it as a new quiz
    Publish {
        /// Draft JSON file
        draft: PathBuf,
    },

    /// Take a published quiz interactively
    Take {
        /// ID of the quiz to take
        quiz_id: String,

        /// Display name of the test-taker
        #[arg(short = 'u', long)]
        username: String,

        /// Stable user ID (a fresh one is generated if omitted)
        #[arg(long)]
        user_id: Option<Uuid>,
    },

    /// Print the JSON Schema of a document type
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Draft)]
        kind: SchemaKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    Draft,
    Quiz,
    Result,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.data_file)
        .with_log_level(&cli.log_level)?
        .with_json_logs(cli.json_logs);
    config.validate()?;
    config.log.clone().init().map_err(CliError::Logging)?;

    debug!(data_file = %config.data_file.display(), "Configuration loaded");
    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));

    match cli.command {
        Commands::List => list(store.as_ref()).await,
        Commands::Validate { draft } => validate(&draft).await,
        Commands::Publish { draft } => publish(store.as_ref(), &draft).await,
        Commands::Take {
            quiz_id,
            username,
            user_id,
        } => take(store, &quiz_id, username, user_id).await,
        Commands::Schema { kind } => schema(kind),
    }
}

async fn read_draft(path: &Path) -> Result<DraftQuiz> {
    if !path.exists() {
        return Err(CliError::draft_not_found(path.to_path_buf()));
    }
    let text = tokio::fs::read_to_string(path).await?;
    let draft = serde_json::from_str(&text)?;
    debug!(path = %path.display(), "Draft loaded");
    Ok(draft)
}

async fn list(store: &JsonFileStore) -> Result<()> {
    let summaries = store.list_quizzes().await?;
    render_summaries(&mut std::io::stdout(), &summaries)?;
    Ok(())
}

async fn validate(path: &Path) -> Result<()> {
    let report = read_draft(path).await?.validate();
    render_validation(&mut std::io::stdout(), &report)?;

    if report.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidDraft {
            issues: report.issue_count(),
        })
    }
}

async fn publish(store: &JsonFileStore, path: &Path) -> Result<()> {
    let draft = read_draft(path).await?;

    match publish_draft(store, &draft).await {
        Ok(quiz_id) => {
            info!(%quiz_id, "Quiz published");
            println!("Published quiz {}", quiz_id);
            Ok(())
        }
        Err(AuthoringError::Rejected(PublishError::Invalid(report))) => {
            render_validation(&mut std::io::stdout(), &report)?;
            Err(CliError::InvalidDraft {
                issues: report.issue_count(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

async fn take(
    store: Arc<JsonFileStore>,
    quiz_id: &str,
    username: String,
    user_id: Option<Uuid>,
) -> Result<()> {
    let quiz_id =
        Uuid::parse_str(quiz_id).map_err(|_| CliError::InvalidQuizId(quiz_id.to_string()))?;
    let taker = match user_id {
        Some(id) => UserIdentity::new(id, username)?,
        None => UserIdentity::generate(username)?,
    };

    let quiz = store.fetch_quiz(quiz_id).await?;
    let mut session = QuizSession::start(quiz, taker)?;

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut runner = QuizRunner::new(input, std::io::stdout());

    match runner.run(&mut session).await? {
        TakeOutcome::Completed(result) => {
            finish_run(&mut std::io::stdout(), store, &session, result).await
        }
        TakeOutcome::Abandoned => {
            println!();
            println!("Quiz abandoned. Nothing was saved.");
            Ok(())
        }
    }
}

fn schema(kind: SchemaKind) -> Result<()> {
    let schema = match kind {
        SchemaKind::Draft => schemars::schema_for!(DraftQuiz),
        SchemaKind::Quiz => schemars::schema_for!(quizdesk_core::Quiz),
        SchemaKind::Result => schemars::schema_for!(QuizResult),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

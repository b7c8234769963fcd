use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qa_auditor::utils::init_logging;
use qa_auditor::{render_scorecard, AppState, AuditClient, AuditConfig, AuditForm, RenderOptions};
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "qa-auditor", version, about = "Run a QA audit on a support conversation")]
struct Cli {
    /// Audit service base address
    #[arg(long, global = true, env = "AUDIT_API")]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a transcript and print the verdict
    Audit(AuditArgs),
    /// Check that the audit service is up
    Health,
}

#[derive(Args)]
struct AuditArgs {
    #[arg(long, default_value = "")]
    ticket_id: String,
    #[arg(long, default_value = "")]
    agent: String,
    /// One of: email, chat, phone
    #[arg(long, default_value = "")]
    channel: String,
    /// Transcript text
    #[arg(long, conflicts_with = "conversation_file")]
    conversation: Option<String>,
    /// Read the transcript from a file, or `-` for stdin
    #[arg(long)]
    conversation_file: Option<String>,
    #[arg(long = "macro")]
    macros_used: Vec<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long, default_value = "")]
    csat: String,
    /// Print the raw service response as JSON
    #[arg(long)]
    json: bool,
    /// Shorten evidence quotes to this many characters when printing
    #[arg(long)]
    evidence_width: Option<usize>,
}

async fn read_conversation(args: &AuditArgs) -> Result<String> {
    match (&args.conversation, args.conversation_file.as_deref()) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some("-")) => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read transcript from stdin")?;
            Ok(text)
        }
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read transcript file: {}", path)),
        (None, None) => Ok(String::new()),
    }
}

async fn run_audit(client: &AuditClient, args: AuditArgs) -> Result<()> {
    let conversation = read_conversation(&args).await?;
    let form = AuditForm {
        ticket_id: args.ticket_id,
        agent: args.agent,
        channel: args.channel,
        conversation,
        macros_used: args.macros_used,
        tags: args.tags,
        customer_csatscore: args.csat,
    };

    let mut state = AppState::new();
    let rendered = state.submit(client, form).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered.output)?);
    } else {
        let opts = RenderOptions {
            evidence_width: args.evidence_width,
        };
        print!("{}", render_scorecard(&rendered.display, &opts));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env first so clap's env fallback can see it
    dotenv::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let config = match cli.api {
        Some(url) => AuditConfig::default().with_base_url(url),
        None => AuditConfig::from_env(),
    };
    let client = AuditClient::new(config);
    log::debug!("Using audit service at {}", client.base_url());

    let outcome = match cli.command {
        Command::Audit(args) => run_audit(&client, args).await,
        Command::Health => client
            .health()
            .await
            .map(|health| println!("{}: {}", client.base_url(), health.status))
            .context("Health check failed"),
    };

    if let Err(e) = outcome {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

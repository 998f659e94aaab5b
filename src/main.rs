// pdf-chat - read a PDF and chat with its content
use anyhow::Result;
use clap::Parser;
use pdf_chat::config::max_chars_from_env;
use pdf_chat::{session, ChatConfig, Options, PdfChatError};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Read a PDF file and chat with its content using the OpenRouter API"
)]
struct Args {
    /// Path to the PDF file to be processed
    pdf_file: PathBuf,
    /// Optional chat prompt to send along with the PDF content
    #[arg(short, long, default_value = "")]
    prompt: String,
    /// Forward at most this many characters of document text
    /// [env: PDF_CHAT_MAX_CHARS]
    #[arg(long)]
    max_chars: Option<usize>,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = e
                .downcast_ref::<PdfChatError>()
                .map(PdfChatError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<()> {
    // A missing .env is fine
    dotenv::dotenv().ok();
    let config = ChatConfig::from_env();
    // The flag wins over the environment
    let max_chars = match args.max_chars {
        Some(limit) => Some(limit),
        None => max_chars_from_env()?,
    };

    let options = Options {
        pdf_file: args.pdf_file,
        prompt: args.prompt.trim().to_string(),
        max_chars,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(session::run(&options, config, &mut stdout))?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

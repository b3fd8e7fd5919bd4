use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use rpal_lexer::{
    config::Config,
    display_error,
    lexer::lexer::scan,
    logging::{init_logger, LogFormat, CLI_TARGET},
};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "rpal-lex")]
#[command(about = "Splits RPAL source into tokens, one per line as <kind>\\t<lexeme>")]
struct Args {
    /// Source file to scan; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    #[arg(long, help = "Prefix each token with line:column")]
    positions: bool,

    #[arg(long, help = "Leave out whitespace and comment tokens")]
    significant: bool,

    #[arg(long, help = "Mark identifiers that are RPAL keywords")]
    reserved: bool,

    #[arg(long, default_value = "warn", help = "Log level for scanner diagnostics on stderr")]
    log_level: Level,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            log_level: args.log_level,
            log_format: args.log_format,
            positions: args.positions,
            significant: args.significant,
            reserved: args.reserved,
        }
    }
}

fn read_source(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let source = read_to_string(path)?;
            Ok((path.to_string_lossy().into_owned(), source))
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((String::from("<stdin>"), source))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    if let Err(error) = init_logger(config.log_format, config.log_level) {
        eprintln!("warning: could not initialise logging: {error}");
    }

    let (file_name, source) = match read_source(args.file.as_ref()) {
        Ok(read) => read,
        Err(error) => {
            eprintln!("io error: {error}");
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    match scan(&source) {
        Ok(tokens) => {
            info!(
                target: CLI_TARGET,
                file = %file_name,
                tokens = tokens.len(),
                elapsed = ?start.elapsed(),
                "Tokenized"
            );
            print!("{}", config.render(tokens));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("lex error: {error}");
            eprint!("{}", display_error(&error, &source, &file_name));
            ExitCode::from(1)
        }
    }
}

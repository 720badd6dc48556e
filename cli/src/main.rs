//! Roster service CLI
//!
//! ```sh
//! # Run the REST API with the default config (~/.config/roster-service/config.toml)
//! roster-service serve
//!
//! # Custom config path and port
//! roster-service serve --config /etc/roster/config.toml --port 9090
//!
//! # Marks report from a CSV sheet
//! roster-service report --csv data.csv --course 2001
//!
//! # Validate config without starting
//! roster-service check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, Subcommand};
use tracing::{error, info};

use roster::application::{MarksReportService, ReportTarget};
use roster::config::AppConfig;
use roster::interfaces::report::{self, ReportOutput};
use roster::server::{init_tracing, ServerHandle, ServerOptions};
use roster::shared::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "roster-service",
    version,
    about = "Student, course and enrollment records over a REST API",
    long_about = "Roster service: REST API for students, courses and enrollments, \
                  plus marks reports from CSV sheets.\n\n\
                  Default config: ~/.config/roster-service/config.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the REST API server.
    Serve {
        /// Path to the configuration file (TOML).
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,

        /// Override the listen port.
        #[arg(long)]
        port: Option<u16>,

        /// Override the log level (trace, debug, info, warn, error).
        #[arg(short, long)]
        log_level: Option<String>,

        /// Skip database migrations on startup.
        #[arg(long)]
        no_migrate: bool,
    },

    /// Print a marks report from a CSV sheet.
    #[command(group(ArgGroup::new("target").required(true).args(["student", "course"])))]
    Report {
        /// Sheet with `Student id, Course id, Marks` columns.
        #[arg(long)]
        csv: PathBuf,

        #[arg(short = 's', long)]
        student: Option<u32>,

        #[arg(short = 'c', long)]
        course: Option<u32>,
    },

    /// Validate the configuration file and exit.
    Check {
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve {
            config,
            port,
            log_level,
            no_migrate,
        } => serve(config, port, log_level, no_migrate).await,
        Command::Report {
            csv,
            student,
            course,
        } => run_report(csv, student, course),
        Command::Check { config } => check(config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(
    config_path: Option<PathBuf>,
    port: Option<u16>,
    log_level: Option<String>,
    no_migrate: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config_path = config_path.unwrap_or_else(roster::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    if let Some(level) = log_level {
        config.logging.level = level;
    }
    // Tracing first so the load outcome below is formatted properly
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(port) = port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(ExitCode::SUCCESS)
}

fn run_report(
    csv: PathBuf,
    student: Option<u32>,
    course: Option<u32>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(target) = ReportTarget::from_selection(student, course) else {
        eprintln!("Invalid input");
        return Ok(ExitCode::FAILURE);
    };

    let service = match MarksReportService::load(&csv) {
        Ok(service) => service,
        Err(AppError::Infra(e)) => {
            eprintln!("Could not read {}: {}", csv.display(), e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let output = report::produce(&service, target)?;
    match &output {
        ReportOutput::Table(text) => print!("{}", text),
        ReportOutput::InvalidInput => eprintln!("Invalid input"),
    }
    Ok(ExitCode::from(output.exit_status()))
}

fn check(config_path: Option<PathBuf>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config_path = config_path.unwrap_or_else(roster::default_config_path);
    let config = AppConfig::load(&config_path)?;

    println!("Configuration is valid");
    println!("   Config file : {}", config_path.display());
    println!("   API address : {}", config.server.address());
    println!("   Database    : {}", config.database.url);
    println!("   Log level   : {}", config.logging.level);
    println!("   Log format  : {}", config.logging.format);
    Ok(ExitCode::SUCCESS)
}

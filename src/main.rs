use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use lsq::application::{ConfigLocation, EditSession, OpenJournalService};
use lsq::cli::Cli;
use lsq::error::LsqError;
use lsq::infrastructure::VaultRepository;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::info!("{}", e.display_with_suggestions());
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
    logger.init();
}

fn run(cli: Cli) -> Result<(), LsqError> {
    // Locate vault
    let repo = VaultRepository::locate(&cli.dir)?;
    log::debug!("Vault root: {}", repo.root().display());

    let service = OpenJournalService::new(
        repo,
        ConfigLocation {
            dir: cli.config_dir,
            file: cli.config_file,
        },
    );

    // Resolve today's journal once, at start-up
    let today = Local::now().date_naive();
    let (_config, journal) = service.execute(today)?;

    if cli.print_path {
        println!("{}", journal.path.display());
        return Ok(());
    }

    if cli.tui {
        let session = EditSession::open(&journal.path)?;
        lsq::tui::run(session, &cli.editor)
    } else {
        service.open_in_editor(&journal, &cli.editor)
    }
}

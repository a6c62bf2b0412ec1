use copy_repo::cli::parse_invocation;
use copy_repo::logger::initialize_logger;
use copy_repo::reporting::render_stats;
use copy_repo::{copy_repository, CopyRepoConfig, CopyRepoError, SystemClipboard};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    if let Err(e) = parse_invocation(std::env::args_os()) {
        println!("{}", e);
        return ExitCode::SUCCESS;
    }
    initialize_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CopyRepoError> {
    let config = CopyRepoConfig::default();
    let mut clipboard = SystemClipboard::new();
    let aggregate = copy_repository(&config, &mut clipboard)?;

    println!(
        "Codebase written to {} and copied to clipboard\n",
        config.output_file.display()
    );
    print!("{}", render_stats(&aggregate.stats, config.tokens_per_request));
    Ok(())
}

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffee_machine=warn".into()),
        )
        .init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let no_color = env::var_os("NO_COLOR").is_some();
    let status = coffee_machine::cli::run(
        path.as_deref(),
        no_color,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

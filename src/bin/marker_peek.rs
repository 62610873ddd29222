//! Print the context around the Appearances heading of the cached
//! Luke Skywalker page.
//!
//! Takes no arguments. Exits with status 1 if the page cannot be read or
//! decoded; a missing marker is reported on stdout and exits normally.

use std::io::{self, Write};
use std::process;

use marker_peek::{inspect_file, write_report, Options, Target};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let target = Target::DEFAULT;
    let excerpt = match inspect_file(target.path, target.marker, &Options::default()) {
        Ok(excerpt) => excerpt,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    let written = write_report(&mut stdout, excerpt.as_ref(), target.label)
        .and_then(|()| stdout.flush());
    if let Err(err) = written {
        eprintln!("error: failed to write output: {err}");
        process::exit(1);
    }
}

#![forbid(unsafe_code)]

//! marquee binary entry point.

use std::io::{self, BufWriter};
use std::process;

use marquee::{Error, Renderer, TerminalViewport, Viewport};
use marquee_cli::{cli, logging};

fn main() {
    let opts = cli::Opts::parse();
    logging::init();

    let config = match opts.resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let output = match opts.width {
        Some(width) => Renderer::new(Viewport::new(width, 0)).render(&opts.text, &config),
        None => Renderer::new(TerminalViewport::new()).render(&opts.text, &config),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match marquee::write_output(&mut out, &output) {
        Ok(()) => {}
        // Piping into `head` and friends closes stdout early.
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

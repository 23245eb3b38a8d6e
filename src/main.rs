use clap::Parser;
use std::io;
use termdonut::donut;
use termdonut::terminal::Terminal;

#[derive(Parser)]
#[command(name = "termdonut")]
#[command(version)]
#[command(about = "Rotating 3D torus rendered as ASCII art in the terminal", long_about = None)]
struct Cli {}

fn main() -> io::Result<()> {
    // No tunables: the torus shape, sweep density and frame pacing are
    // compile-time constants. Parsing still gives --help/--version and
    // rejects stray arguments.
    let _cli = Cli::parse();

    let mut term = Terminal::new()?;
    donut::run(&mut term)
}

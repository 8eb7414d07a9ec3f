use clap::Parser;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(allow_negative_numbers = true, default_value_t = 5)]
    count: i64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    for (i, line) in diagonal_line::new(cli.count).line_iter().enumerate() {
        print!("[{}] {}", i, line);
    }
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "collider")]
#[command(about = "Count lottery draws until a chosen combination comes up")]
pub struct Cli {
    #[arg(long, help = "Numbers in the pool (1..=M)", default_value_t = 49)]
    pub pool_size: u32,
    #[arg(long, help = "Numbers drawn each time", default_value_t = 6)]
    pub draw_size: usize,
    #[arg(
        long,
        help = "Combination to wait for, comma separated [default: 1..=draw-size]",
        value_delimiter = ','
    )]
    pub target: Option<Vec<u32>>,
    #[arg(long, help = "Seed for a reproducible run (default: OS entropy)")]
    pub seed: Option<u64>,
    #[arg(long, help = "Give up after this many draws")]
    pub max_draws: Option<u64>,
    #[arg(
        long,
        help = "Log progress every N draws (0 disables)",
        default_value_t = 1_000_000
    )]
    pub progress_every: u64,
    #[arg(long, help = "Verbose output", default_value_t = false)]
    pub verbose: bool,
}

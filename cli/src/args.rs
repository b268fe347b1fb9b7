use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "buspath")]
#[command(about = "Compare search algorithms over the Sri Lanka bus network")]
pub struct Args {
    /// Starting bus stop
    pub from: String,

    /// Destination bus stop
    pub to: String,

    /// Search algorithm: bfs, dfs, astar or greedy
    #[arg(short, long, value_name = "ALGORITHM", default_value = "astar")]
    pub algorithm: String,

    /// Run all four algorithms and print a comparison table
    #[arg(short, long)]
    pub compare: bool,

    /// Show the full exploration order instead of the first ten stops
    #[arg(short = 'e', long)]
    pub full_exploration: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and exploration analysis
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the route flow
    #[arg(short, long)]
    pub quiet: bool,
}

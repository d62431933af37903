use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "link-sieve")]
#[command(about = "Pipeline stage that extracts outbound links from fetched pages")]
#[command(version)]
pub struct Args {
    /// File of fetched pages to process, one JSON object per line
    pub pages: String,

    /// Number of concurrent extraction workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,
}

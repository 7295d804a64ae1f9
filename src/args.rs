use clap::Parser;

/// Active security scan of an AEM Dispatcher installation
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Host of the website, e.g. http://www.example.com
    #[arg(long)]
    pub host: String,

    /// Page path substituted into path templates, e.g. /content/geometrixx/en
    #[arg(long, default_value = "/content/geometrixx/en")]
    pub page_path: String,

    /// Timeout for HTTP requests in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Local file or http(s) URL providing path templates (.txt or .json)
    #[arg(long, default_value = "aem-sec-paths.txt")]
    pub paths: String,

    /// Number of concurrent probes, 1 runs the scan sequentially
    #[arg(long, default_value_t = 20)]
    pub concurrency: usize,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

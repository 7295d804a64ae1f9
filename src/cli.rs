use std::time::Duration;

use tracing::debug;

use crate::args::Args;
use crate::model::{ProbeResult, ScanStatus};
use crate::scanner::Scanner;
use crate::{paths, Error};

/// Exit code signalling that at least one vulnerable URL was found.
pub const EXIT_VULNERABLE: i32 = 1;

/// Runs the full scan and prints the report. Returns the process exit code.
pub async fn scan(args: &Args) -> Result<i32, Error> {
    let scanner = Scanner::new(&args.host, Duration::from_secs(args.timeout))?;

    debug!(host = %args.host, "host configured");
    debug!(page_path = %args.page_path, "page path configured");
    debug!(timeout = args.timeout, "request timeout configured");

    let paths = paths::load(scanner.http_client(), &args.paths, &args.page_path).await?;

    println!(
        "Start active security scan of URL {}{}",
        args.host, args.page_path
    );

    let results = scanner.scan_all(&paths, args.concurrency).await;
    Ok(report(&results))
}

fn report(results: &[ProbeResult]) -> i32 {
    let total = results.len();
    let vulnerable: Vec<&ProbeResult> = results
        .iter()
        .filter(|result| result.status == ScanStatus::Vulnerable)
        .collect();
    let failed: Vec<&ProbeResult> = results
        .iter()
        .filter(|result| result.status == ScanStatus::Failed)
        .collect();

    if vulnerable.is_empty() {
        println!("Summary: No security relevant AEM Dispatcher URLs found in {total} rules.");
        return 0;
    }

    println!(
        "Summary: Found {} of {} security relevant AEM Dispatcher URLs.",
        vulnerable.len(),
        total
    );
    println!();
    println!("Vulnerable results are:");
    for result in &vulnerable {
        println!("{result}");
    }

    if !failed.is_empty() {
        println!();
        println!("Please check the following URLs manually or re-run scan:");
        for result in &failed {
            println!("{result}");
        }
    }

    EXIT_VULNERABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    fn result(status_code: Option<StatusCode>) -> ProbeResult {
        ProbeResult::new(
            "http://localhost:8080",
            "/content.json",
            status_code,
            HeaderMap::new(),
            None,
        )
    }

    #[test]
    fn clean_scan_exits_zero() {
        let results = vec![result(Some(StatusCode::NOT_FOUND)); 3];

        assert_eq!(report(&results), 0);
    }

    #[test]
    fn vulnerable_scan_exits_nonzero() {
        let results = vec![
            result(Some(StatusCode::NOT_FOUND)),
            result(Some(StatusCode::OK)),
            result(None),
        ];

        assert_eq!(report(&results), EXIT_VULNERABLE);
    }

    #[test]
    fn failed_probes_alone_do_not_flag_the_scan() {
        let results = vec![result(None), result(Some(StatusCode::NOT_FOUND))];

        assert_eq!(report(&results), 0);
    }
}

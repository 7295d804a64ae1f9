use reqwest::{Client, StatusCode};
use tracing::error;

use crate::Error;

/// Placeholder used by templates to mark "any valid page path on the target".
pub const PAGE_PATH_PLACEHOLDER: &str = "/content/add_valid_path_to_a_page";

const VALID_EXTENSIONS: [&str; 2] = [".txt", ".json"];

/// Loads path templates from a local file or an http(s) URL and substitutes
/// the page-path placeholder.
///
/// Unsupported extensions and remote fetches answering non-200 yield an
/// empty list with a logged error; a missing local file is a hard error.
pub async fn load(
    http_client: &Client,
    source: &str,
    page_path: &str,
) -> Result<Vec<String>, Error> {
    if source.is_empty() {
        error!("path list source is not set");
        return Ok(Vec::new());
    }

    if !VALID_EXTENSIONS
        .iter()
        .any(|extension| source.ends_with(extension))
    {
        error!(
            source,
            "invalid path list extension, valid extensions are .txt and .json"
        );
        return Ok(Vec::new());
    }

    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        match fetch_remote(http_client, source).await? {
            Some(body) => body,
            None => return Ok(Vec::new()),
        }
    } else {
        std::fs::read_to_string(source).map_err(|err| Error::ResourceRead {
            path: source.to_string(),
            source: err,
        })?
    };

    let entries = parse(source, &raw)?;
    Ok(substitute(entries, page_path))
}

async fn fetch_remote(http_client: &Client, url: &str) -> Result<Option<String>, Error> {
    let res = http_client.get(url).send().await?;

    if res.status() != StatusCode::OK {
        error!(url, status = %res.status(), "failed to load path list");
        return Ok(None);
    }

    Ok(Some(res.text().await?))
}

fn parse(source: &str, raw: &str) -> Result<Vec<String>, Error> {
    if source.ends_with(".json") {
        serde_json::from_str(raw).map_err(|err| Error::ResourceParse {
            path: source.to_string(),
            source: err,
        })
    } else {
        Ok(raw.lines().map(String::from).collect())
    }
}

/// Trims entries, drops empty ones and replaces every occurrence of the
/// page-path placeholder. Entries without the placeholder pass through
/// unchanged.
pub fn substitute(entries: Vec<String>, page_path: &str) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().replace(PAGE_PATH_PLACEHOLDER, page_path))
        .filter(|entry| !entry.is_empty())
        .collect()
}

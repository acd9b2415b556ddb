use log::debug;
use rand::seq::IndexedRandom;
use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::http::{get_page, FetchRequest};

const PROXY_LIST_URL: &str = "https://free-proxy-list.net/";

/// Scrape the public proxy list into `host:port` strings.
///
/// Hard-wired to the page's markup (a table with id `proxylisttable`,
/// host and port in the first two cells of each data row). A layout
/// change on the remote page breaks this with an error; there is no
/// fallback source.
pub async fn get_proxies() -> Result<Vec<String>> {
    let body = get_page(FetchRequest::new(PROXY_LIST_URL))
        .await?
        .into_text()?;
    parse_proxy_list(&body)
}

/// Draw one proxy uniformly at random from the scraped list.
pub async fn get_random_proxy() -> Result<String> {
    let proxies = get_proxies().await?;
    proxies
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| Error::ProxyList("proxy list is empty".to_string()))
}

/// Extract `host:port` entries from the proxy list page's HTML.
///
/// The first table row is the header and the last is the paging footer;
/// both are skipped. Any scheme prefix that leaks into the port cell is
/// stripped.
pub fn parse_proxy_list(html: &str) -> Result<Vec<String>> {
    let table_selector = Selector::parse("table#proxylisttable").expect("static selector");
    let row_selector = Selector::parse("tr").expect("static selector");
    let cell_selector = Selector::parse("td").expect("static selector");

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| Error::ProxyList("proxy table not found".to_string()))?;

    let rows: Vec<_> = table.select(&row_selector).collect();
    if rows.len() < 2 {
        return Err(Error::ProxyList(
            "proxy table has no data rows".to_string(),
        ));
    }

    let mut proxies = Vec::new();
    for row in &rows[1..rows.len() - 1] {
        let mut cells = row.select(&cell_selector);
        let host = cells
            .next()
            .map(|cell| cell.text().collect::<String>())
            .ok_or_else(|| Error::ProxyList("data row missing host cell".to_string()))?;
        let port = cells
            .next()
            .map(|cell| cell.text().collect::<String>())
            .ok_or_else(|| Error::ProxyList("data row missing port cell".to_string()))?;

        let port = port
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        proxies.push(format!("{}:{}", host.trim(), port));
    }

    debug!("parsed {} proxies from list page", proxies.len());
    Ok(proxies)
}

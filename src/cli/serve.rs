//! HTTP delivery endpoint.
//!
//! One route family: the configured sitemap filename returns the single
//! document (or the index when sharded), and `sitemap-N.xml` returns shard
//! N. Every request re-runs the pipeline against the current snapshot.

use crate::{
    config::SiteConfig,
    debug, log,
    sink::http::{respond_not_found, respond_xml},
    sitemap::{self, SitemapDocuments},
    utils::{date::DateTimeUtc, plural::plural_count},
};
use anyhow::Result;
use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tiny_http::{Request, Server};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Shutdown requested via Ctrl+C.
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Bind and run the request loop (blocking until Ctrl+C).
pub fn serve(config: &SiteConfig) -> Result<()> {
    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    register_shutdown_handler(&server)?;
    log!("serve"; "http://{}/{}", addr, config.sitemap.filename);

    for request in server.incoming_requests() {
        if SHUTDOWN.load(Ordering::SeqCst) {
            break;
        }
        if let Err(e) = handle_request(request, config) {
            log!("serve"; "request error: {e:#}");
        }
    }

    log!("serve"; "shutting down");
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

/// Unblock the accept loop when Ctrl+C arrives.
fn register_shutdown_handler(server: &Arc<Server>) -> Result<()> {
    let server = Arc::clone(server);
    ctrlc::set_handler(move || {
        SHUTDOWN.store(true, Ordering::SeqCst);
        server.unblock();
    })?;
    Ok(())
}

/// Handle a single HTTP request.
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let path = request
        .url()
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_start_matches('/')
        .to_string();

    let docs = sitemap::build(config, DateTimeUtc::now());
    debug!("serve"; "GET /{} ({})", path, plural_count(docs.entries(), "url"));

    match route(&path, &config.sitemap.filename, &docs) {
        Some(xml) => respond_xml(request, xml),
        None => respond_not_found(request),
    }
}

/// Select the document a path refers to, if any.
fn route(path: &str, filename: &str, docs: &SitemapDocuments) -> Option<String> {
    if path == filename {
        return Some(match docs {
            SitemapDocuments::Single { xml, .. } => xml.clone(),
            SitemapDocuments::Sharded { index, .. } => index.clone(),
        });
    }

    let index = shard_index(path, filename)?;
    match docs {
        SitemapDocuments::Sharded { shards, .. } => shards.get(index - 1).cloned(),
        SitemapDocuments::Single { .. } => None,
    }
}

/// Parse the 1-based shard number out of `sitemap-N.xml`-style paths.
fn shard_index(path: &str, filename: &str) -> Option<usize> {
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (filename, None),
    };

    let rest = path.strip_prefix(stem)?.strip_prefix('-')?;
    let digits = match ext {
        Some(ext) => rest.strip_suffix(ext)?.strip_suffix('.')?,
        None => rest,
    };

    let n: usize = digits.parse().ok()?;
    (n >= 1).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_single() -> SitemapDocuments {
        SitemapDocuments::Single {
            xml: "<urlset/>".into(),
            entries: 0,
        }
    }

    fn docs_sharded() -> SitemapDocuments {
        SitemapDocuments::Sharded {
            index: "<sitemapindex/>".into(),
            shards: vec!["<shard-1/>".into(), "<shard-2/>".into()],
            entries: 2,
        }
    }

    #[test]
    fn test_shard_index_parsing() {
        assert_eq!(shard_index("sitemap-1.xml", "sitemap.xml"), Some(1));
        assert_eq!(shard_index("sitemap-25.xml", "sitemap.xml"), Some(25));
        assert_eq!(shard_index("sitemap-0.xml", "sitemap.xml"), None);
        assert_eq!(shard_index("sitemap.xml", "sitemap.xml"), None);
        assert_eq!(shard_index("sitemap-x.xml", "sitemap.xml"), None);
        assert_eq!(shard_index("other-1.xml", "sitemap.xml"), None);
    }

    #[test]
    fn test_shard_index_extensionless_filename() {
        assert_eq!(shard_index("urls-3", "urls"), Some(3));
        assert_eq!(shard_index("urls-3.xml", "urls"), None);
    }

    #[test]
    fn test_route_primary_filename() {
        assert_eq!(
            route("sitemap.xml", "sitemap.xml", &docs_single()).as_deref(),
            Some("<urlset/>")
        );
        assert_eq!(
            route("sitemap.xml", "sitemap.xml", &docs_sharded()).as_deref(),
            Some("<sitemapindex/>")
        );
    }

    #[test]
    fn test_route_shards() {
        assert_eq!(
            route("sitemap-1.xml", "sitemap.xml", &docs_sharded()).as_deref(),
            Some("<shard-1/>")
        );
        assert_eq!(
            route("sitemap-2.xml", "sitemap.xml", &docs_sharded()).as_deref(),
            Some("<shard-2/>")
        );
        // Out of range, or shard request against an unsharded set
        assert_eq!(route("sitemap-3.xml", "sitemap.xml", &docs_sharded()), None);
        assert_eq!(route("sitemap-1.xml", "sitemap.xml", &docs_single()), None);
    }

    #[test]
    fn test_route_unknown_path() {
        assert_eq!(route("robots.txt", "sitemap.xml", &docs_single()), None);
        assert_eq!(route("", "sitemap.xml", &docs_single()), None);
    }
}

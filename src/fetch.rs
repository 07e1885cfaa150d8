use crate::config::Config;
use crate::error::Error;
use crate::prelude::*;

/// Downloads the instance list. Anything outside 2xx is an error; there is no retry.
pub fn fetch(cfg: &Config) -> Result<Vec<u8>, Error> {
    let Config { url, timeout_secs } = cfg;
    tracing::debug!("fetching {url}");
    let _guard = stopwatch(&f!("GET {url}"));
    let res = minreq::get(url.as_str())
        .with_timeout(*timeout_secs)
        .send()
        .map_err(|source| Error::Request { url: url.clone(), source })?;
    if res.status_code < 200 || res.status_code > 299 {
        tracing::warn!("{url} answered {} {}", res.status_code, res.reason_phrase);
        return Err(Error::Status {
            url: url.clone(),
            status: res.status_code,
            reason: res.reason_phrase,
        });
    }
    let body = res.into_bytes();
    tracing::debug!("received {} bytes", body.len());
    Ok(body)
}

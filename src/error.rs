use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: minreq::Error,
    },
    #[error("{url} answered {status} {reason}")]
    Status { url: String, status: i32, reason: String },
    #[error("response is not a list of instance records")]
    Decode(#[from] serde_json::Error),
}


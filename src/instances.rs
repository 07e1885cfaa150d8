use crate::error::Error;
use serde::Deserialize;

/// One entry of instances.json. Only the type name is kept.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub instance_type: String,
}

pub fn decode(body: &[u8]) -> Result<Vec<InstanceRecord>, Error> {
    let records: Vec<InstanceRecord> = serde_json::from_slice(body)?;
    tracing::info!("decoded {} instance records", records.len());
    Ok(records)
}

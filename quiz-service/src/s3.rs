use tracing::info;

use crate::error::Error;

/// Downloads the question asset and returns its raw bytes.
pub async fn fetch_asset(
    client: &aws_sdk_s3::Client,
    bucket_name: &str,
    key: &str,
) -> Result<Vec<u8>, Error> {
    let object = client
        .get_object()
        .bucket(bucket_name)
        .key(key)
        .send()
        .await
        .map_err(|e| Error::Asset(format!("{e:?}")))?;

    let bytes = object
        .body
        .collect()
        .await
        .map_err(|e| Error::Asset(format!("{e:?}")))?
        .into_bytes();

    info!("size: {} bytes", bytes.len());

    Ok(bytes.to_vec())
}

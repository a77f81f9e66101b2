//! Streaming SHA-256 digest of downloaded artifacts.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::{Stream, StreamExt};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors produced while digesting an artifact stream.
#[derive(Error, Debug)]
pub enum HashError {
    /// A read failed partway through the stream. There is no resume logic;
    /// the extension's run is over.
    #[error("read error while hashing: {0}")]
    Stream(#[from] reqwest::Error),
}

/// Digest a byte stream with SHA-256 and return the padded base64 encoding.
///
/// Chunks are folded into the digest as they arrive, so memory stays
/// bounded regardless of artifact size.
///
/// # Errors
///
/// Propagates the first transport error from the stream.
pub async fn hash_stream(
    mut stream: impl Unpin + Stream<Item = reqwest::Result<bytes::Bytes>>,
) -> Result<String, HashError> {
    let mut hasher = Sha256::new();
    while let Some(chunk) = stream.next().await {
        hasher.update(&chunk?);
    }
    Ok(STANDARD.encode(hasher.finalize()))
}

/// Digest a response body.
///
/// # Errors
///
/// Propagates the first transport error from the body stream.
pub async fn hash_response(response: reqwest::Response) -> Result<String, HashError> {
    hash_stream(response.bytes_stream()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const EMPTY_SHA256: &str = "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=";

    #[tokio::test]
    async fn empty_stream_hashes_to_known_digest() {
        let stream = futures::stream::iter(Vec::<reqwest::Result<bytes::Bytes>>::new());
        assert_eq!(hash_stream(stream).await.unwrap(), EMPTY_SHA256);
    }

    #[tokio::test]
    async fn chunking_does_not_affect_the_digest() {
        // sha256("hello"), base64-encoded
        let expected = "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=";

        let one = futures::stream::iter(vec![Ok(bytes::Bytes::from_static(b"hello"))]);
        assert_eq!(hash_stream(one).await.unwrap(), expected);

        let split = futures::stream::iter(vec![
            Ok(bytes::Bytes::from_static(b"he")),
            Ok(bytes::Bytes::from_static(b"llo")),
        ]);
        assert_eq!(hash_stream(split).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn hashes_a_response_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/artifact")
            .with_status(200)
            .with_body("hello")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/artifact", server.url()))
            .send()
            .await
            .unwrap();

        assert_eq!(
            hash_response(response).await.unwrap(),
            "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="
        );
    }
}

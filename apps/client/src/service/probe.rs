//! Checks whether preview media actually loads and drives the media
//! fallback when it does not.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::errors::ServiceError;
use crate::media::{MediaDescriptor, MediaSlot};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct MediaProbe {
    client: Client,
}

impl MediaProbe {
    pub fn new() -> Result<Self, ServiceError> {
        Ok(Self {
            client: Client::builder()
                .user_agent(super::user_agent())
                .timeout(PROBE_TIMEOUT)
                .build()?,
        })
    }

    async fn loads(&self, src: &str) -> bool {
        match self.client.head(src).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(%src, "media probe failed: {e}");
                false
            }
        }
    }

    /// Probes the current image once and substitutes a placeholder if it
    /// does not load. Placeholders, videos and empty slots are not probed.
    pub async fn settle(&self, slot: &mut MediaSlot) {
        if let MediaDescriptor::Image {
            src,
            is_fallback: false,
        } = slot.descriptor()
        {
            if !self.loads(&src).await {
                slot.handle_load_error();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;

    #[tokio::test]
    async fn test_loading_image_is_kept() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("HEAD").path("/ok.png");
            then.status(200);
        });

        let url = server.url("/ok.png");
        let mut slot = MediaSlot::new(Some(&url), false, "cat");
        MediaProbe::new().unwrap().settle(&mut slot).await;

        assert_eq!(
            slot.descriptor(),
            MediaDescriptor::Image { src: url, is_fallback: false }
        );
    }

    #[tokio::test]
    async fn test_broken_image_gets_placeholder() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("HEAD").path("/gone.png");
            then.status(404);
        });

        let mut slot = MediaSlot::new(Some(&server.url("/gone.png")), false, "cat");
        MediaProbe::new().unwrap().settle(&mut slot).await;

        mock.assert();
        assert!(matches!(
            slot.descriptor(),
            MediaDescriptor::Image { is_fallback: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_placeholder_is_not_probed_again() {
        let server = MockServer::start();
        let url = server.url("/loremflickr.com/1024/1024/cat");

        let mut slot = MediaSlot::new(Some(&url), false, "cat");
        MediaProbe::new().unwrap().settle(&mut slot).await;
        MediaProbe::new().unwrap().settle(&mut slot).await;

        assert_eq!(
            slot.descriptor(),
            MediaDescriptor::Image { src: url, is_fallback: true }
        );
    }

    #[tokio::test]
    async fn test_video_is_not_probed() {
        let server = MockServer::start();
        let url = server.url("/clip.mp4");

        let mut slot = MediaSlot::new(Some(&url), false, "cat");
        MediaProbe::new().unwrap().settle(&mut slot).await;

        assert!(matches!(slot.descriptor(), MediaDescriptor::Video { src, .. } if src == url));
    }
}

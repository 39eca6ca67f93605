//! Print dispatch
//!
//! Ties the pipeline together: render the ticket batch into a document,
//! acquire a surface, hand the document over. The embedded directive
//! then prints and closes on its own; there is nothing to poll.

use shared::models::Ticket;
use tracing::{error, info, instrument};

use crate::document::LabelRenderer;
use crate::error::{PrintError, PrintResult};
use crate::surface::{PrintSurface, SurfaceProvider};

/// Print dispatcher for ticket batches
pub struct PrintDispatcher<P: SurfaceProvider> {
    renderer: LabelRenderer,
    provider: P,
}

impl<P: SurfaceProvider> PrintDispatcher<P> {
    /// Create a dispatcher with the default 58mm x 40mm renderer
    pub fn new(provider: P) -> Self {
        Self {
            renderer: LabelRenderer::default(),
            provider,
        }
    }

    /// Replace the label renderer
    pub fn with_renderer(mut self, renderer: LabelRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Print a ticket batch
    ///
    /// Error paths, both reported to the operator:
    /// - empty batch: nothing to print, the request upstream failed
    /// - surface acquisition: requires manual action (permit print
    ///   windows); never retried automatically
    #[instrument(skip(self, tickets), fields(count = tickets.len()))]
    pub async fn dispatch(&self, tickets: &[Ticket]) -> PrintResult<()> {
        if tickets.is_empty() {
            error!("nothing to print: ticket batch is empty");
            return Err(PrintError::EmptyBatch);
        }

        let document = self.renderer.render(tickets);

        let mut surface = match self.provider.acquire().await {
            Ok(surface) => surface,
            Err(e) => {
                error!(error = %e, "no print surface; permit print windows and retry");
                return Err(e);
            }
        };

        surface.render(&document).await?;
        info!(labels = tickets.len(), "print document dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TicketPayload;
    use std::sync::{Arc, Mutex};

    fn ticket(serial: &str) -> Ticket {
        Ticket {
            id: None,
            payload: TicketPayload {
                part_name: "Gear Assembly".to_string(),
                part_no: "GA-1042".to_string(),
                model: "M-AX".to_string(),
                runner: "Aisyah".to_string(),
                unique_no: serial.to_string(),
                picture: None,
                ts: 0,
            },
            qr_url: "https://qr.example.com/?data=x".to_string(),
        }
    }

    /// Surface that captures the document it receives
    struct MockSurface {
        captured: Arc<Mutex<Option<String>>>,
    }

    impl PrintSurface for MockSurface {
        async fn render(&mut self, document: &str) -> PrintResult<()> {
            *self.captured.lock().unwrap() = Some(document.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockProvider {
        captured: Arc<Mutex<Option<String>>>,
    }

    impl SurfaceProvider for MockProvider {
        type Surface = MockSurface;

        async fn acquire(&self) -> PrintResult<MockSurface> {
            Ok(MockSurface {
                captured: self.captured.clone(),
            })
        }
    }

    /// Provider that simulates a blocked host environment
    struct BlockedProvider;

    impl SurfaceProvider for BlockedProvider {
        type Surface = MockSurface;

        async fn acquire(&self) -> PrintResult<MockSurface> {
            Err(PrintError::Surface("popup blocked".to_string()))
        }
    }

    #[tokio::test]
    async fn test_empty_batch_is_rejected() {
        let dispatcher = PrintDispatcher::new(MockProvider::default());

        let result = dispatcher.dispatch(&[]).await;
        assert!(matches!(result, Err(PrintError::EmptyBatch)));
    }

    #[tokio::test]
    async fn test_document_reaches_the_surface() {
        let provider = MockProvider::default();
        let captured = provider.captured.clone();
        let dispatcher = PrintDispatcher::new(provider);

        dispatcher
            .dispatch(&[ticket("FG-1"), ticket("FG-2")])
            .await
            .unwrap();

        let doc = captured.lock().unwrap().take().unwrap();
        assert!(doc.contains("FG-1"));
        assert!(doc.contains("FG-2"));
        assert!(doc.contains("window.print()"));
    }

    #[tokio::test]
    async fn test_surface_failure_is_surfaced() {
        let dispatcher = PrintDispatcher::new(BlockedProvider);

        let result = dispatcher.dispatch(&[ticket("FG-1")]).await;
        assert!(matches!(result, Err(PrintError::Surface(_))));
    }
}

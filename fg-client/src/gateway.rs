//! Data gateway with provenance-tagged fallback
//!
//! Every operation first tries the backend; on any failure (transport
//! error, non-success status, malformed body) it synthesizes a
//! contract-satisfying result locally. The result is tagged with its
//! source so callers and tests can tell which path executed, but the
//! data contract is identical either way.

use shared::models::{
    CreateTicketsRequest, CreateTicketsResponse, Part, Runner, Ticket, TicketPayload,
};
use shared::serial::{DEFAULT_SERIAL_PREFIX, generate_serial};
use shared::util::now_millis;
use tracing::{info, instrument, warn};

use crate::{ClientConfig, HttpClient, seed};

/// A gateway result tagged with the path that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    /// Fetched from the record-storage backend
    Remote(T),
    /// Synthesized locally after a backend failure
    Fallback(T),
}

impl<T> Sourced<T> {
    /// Borrow the carried data regardless of source
    pub fn get(&self) -> &T {
        match self {
            Sourced::Remote(data) | Sourced::Fallback(data) => data,
        }
    }

    /// Unwrap the carried data regardless of source
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Remote(data) | Sourced::Fallback(data) => data,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Sourced::Remote(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }
}

/// Gateway to the record-storage backend
///
/// Read-only with respect to reference data; its only side effect is
/// network I/O. Backend failures never surface to callers.
#[derive(Debug, Clone)]
pub struct DataGateway {
    http: HttpClient,
    qr_endpoint: String,
    qr_size: String,
}

impl DataGateway {
    /// Create a gateway from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            qr_endpoint: config.qr_endpoint.trim_end_matches('?').to_string(),
            qr_size: config.qr_size.clone(),
        }
    }

    /// Fetch the part catalog, falling back to the seed catalog
    #[instrument(skip(self))]
    pub async fn fetch_parts(&self) -> Sourced<Vec<Part>> {
        match self.http.get::<Vec<Part>>("/api/parts").await {
            Ok(parts) => Sourced::Remote(parts),
            Err(e) => {
                warn!(error = %e, "parts fetch failed, using seed catalog");
                Sourced::Fallback(seed::parts())
            }
        }
    }

    /// Fetch the runner roster, falling back to the seed roster
    #[instrument(skip(self))]
    pub async fn fetch_runners(&self) -> Sourced<Vec<Runner>> {
        match self.http.get::<Vec<Runner>>("/api/manpower").await {
            Ok(runners) => Sourced::Remote(runners),
            Err(e) => {
                warn!(error = %e, "runner fetch failed, using seed roster");
                Sourced::Fallback(seed::runners())
            }
        }
    }

    /// Create a ticket batch
    ///
    /// Remote path: the backend creates and persists the tickets. Fallback
    /// path: tickets are synthesized from `known_parts`/`known_runners`
    /// (placeholder substitution when the requested ids are missing) and
    /// carry no backend id. Either way the batch holds exactly
    /// `max(1, copies)` tickets in index order, each with a fresh serial.
    #[instrument(skip_all, fields(part_id = %request.part_id, copies = request.copies))]
    pub async fn create_tickets(
        &self,
        request: &CreateTicketsRequest,
        known_parts: &[Part],
        known_runners: &[Runner],
    ) -> Sourced<CreateTicketsResponse> {
        match self
            .http
            .post::<CreateTicketsResponse, _>("/api/tickets", request)
            .await
        {
            Ok(response) => Sourced::Remote(response),
            Err(e) => {
                warn!(error = %e, "ticket creation failed, synthesizing locally");
                Sourced::Fallback(self.synthesize(request, known_parts, known_runners))
            }
        }
    }

    /// Local synthesis path: same output contract as the backend,
    /// minus persistence
    fn synthesize(
        &self,
        request: &CreateTicketsRequest,
        known_parts: &[Part],
        known_runners: &[Runner],
    ) -> CreateTicketsResponse {
        let part = known_parts
            .iter()
            .find(|p| p.id == request.part_id)
            .cloned()
            .unwrap_or_else(|| Part::placeholder(request.part_id.as_str()));

        let runner = known_runners
            .iter()
            .find(|r| r.id == request.runner_id)
            .cloned()
            .unwrap_or_else(|| Runner::placeholder(request.runner_id.as_str()));

        let copies = request.copies.max(1);
        let tickets: Vec<Ticket> = (0..copies)
            .map(|_| {
                let serial = generate_serial(DEFAULT_SERIAL_PREFIX);
                let payload = TicketPayload::new(&part, &runner, serial, now_millis());
                let qr_url = self.qr_url(&payload);
                Ticket {
                    id: None,
                    payload,
                    qr_url,
                }
            })
            .collect();

        info!(copies, part = %part.name, runner = %runner.name, "synthesized local tickets");
        CreateTicketsResponse { tickets }
    }

    /// Build the QR image URL for a payload
    ///
    /// The full JSON-serialized payload goes into the `data` query
    /// parameter, percent-encoded.
    fn qr_url(&self, payload: &TicketPayload) -> String {
        let json = serde_json::to_string(payload).expect("payload serializes to JSON");
        format!(
            "{}?size={}&data={}",
            self.qr_endpoint,
            self.qr_size,
            urlencoding::encode(&json)
        )
    }
}

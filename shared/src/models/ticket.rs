//! Ticket Model
//!
//! A `Ticket` is one physical label: the payload encoded into its QR code
//! plus the URL of the rendered QR image. Create-once, never mutated.

use serde::{Deserialize, Serialize};

use super::{Part, Runner};

/// Data encoded into the QR code and printed on the label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    pub part_name: String,
    pub part_no: String,
    pub model: String,
    /// Runner name (not id; the label is read by humans)
    pub runner: String,
    /// Unique serial number for the ticket
    pub unique_no: String,
    /// Optional part picture URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Creation instant, unix millis
    pub ts: i64,
}

impl TicketPayload {
    /// Build a payload from resolved reference data
    ///
    /// Pure constructor: copies the part/runner display fields, binds the
    /// serial and creation instant. Resolution of missing part/runner
    /// references happens upstream in the gateway.
    pub fn new(part: &Part, runner: &Runner, serial: impl Into<String>, ts: i64) -> Self {
        Self {
            part_name: part.name.clone(),
            part_no: part.part_no.clone(),
            model: part.model.clone(),
            runner: runner.name.clone(),
            unique_no: serial.into(),
            picture: Some(part.image_url.clone()),
            ts,
        }
    }
}

/// One printable ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Backend-assigned id; absent on locally synthesized tickets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub payload: TicketPayload,
    /// Ready-to-use QR image URL
    pub qr_url: String,
}

/// Request sent to the backend to create tickets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketsRequest {
    pub part_id: String,
    pub runner_id: String,
    pub copies: u32,
}

/// Response returned by the backend after creating tickets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketsResponse {
    pub tickets: Vec<Ticket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part() -> Part {
        Part {
            id: "p1".to_string(),
            name: "Gear Assembly".to_string(),
            part_no: "GA-1042".to_string(),
            model: "M-AX".to_string(),
            image_url: "https://cdn.example.com/parts/p1.jpg".to_string(),
            std_packing: 10,
        }
    }

    #[test]
    fn test_payload_copies_display_fields() {
        let runner = Runner {
            id: "r1".to_string(),
            name: "Aisyah".to_string(),
            avatar_url: None,
        };

        let payload = TicketPayload::new(&part(), &runner, "FG-20260828-101500-A1B2", 1_000);

        assert_eq!(payload.part_name, "Gear Assembly");
        assert_eq!(payload.part_no, "GA-1042");
        assert_eq!(payload.model, "M-AX");
        assert_eq!(payload.runner, "Aisyah");
        assert_eq!(payload.unique_no, "FG-20260828-101500-A1B2");
        assert_eq!(payload.picture.as_deref(), Some("https://cdn.example.com/parts/p1.jpg"));
        assert_eq!(payload.ts, 1_000);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = TicketPayload::new(&part(), &Runner::placeholder("r9"), "FG-X", 42);
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"partName\""));
        assert!(json.contains("\"uniqueNo\":\"FG-X\""));
        assert!(json.contains("\"ts\":42"));
    }

    #[test]
    fn test_local_ticket_omits_id() {
        let ticket = Ticket {
            id: None,
            payload: TicketPayload::new(&part(), &Runner::placeholder("r1"), "FG-X", 0),
            qr_url: "https://qr.example.com/?data=x".to_string(),
        };

        let json = serde_json::to_string(&ticket).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"qrUrl\""));
    }
}

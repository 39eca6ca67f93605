//! Thermal label document renderer
//!
//! Renders a ticket batch into one self-contained HTML document sized
//! for small label stock. Each ticket gets its own section and its own
//! printed page; an embedded load handler triggers the platform print
//! action and closes the surface afterwards.

use shared::models::Ticket;

/// Thermal label renderer
///
/// Pure with respect to its inputs: the same ticket batch always yields
/// the same document. Labels appear in input order.
pub struct LabelRenderer {
    width_mm: u32,
    height_mm: u32,
    print_delay_ms: u32,
    close_delay_ms: u32,
}

impl LabelRenderer {
    /// Create a renderer for the given label stock size in millimeters
    ///
    /// Common stock:
    /// - 58mm x 40mm rolls (default)
    /// - 80mm x 50mm rolls
    pub fn new(width_mm: u32, height_mm: u32) -> Self {
        Self {
            width_mm,
            height_mm,
            print_delay_ms: 250,
            close_delay_ms: 300,
        }
    }

    /// Override the auto-print and auto-close delays
    ///
    /// The print delay gives QR images time to finish loading; neither
    /// delay is correctness-critical.
    pub fn with_delays(mut self, print_delay_ms: u32, close_delay_ms: u32) -> Self {
        self.print_delay_ms = print_delay_ms;
        self.close_delay_ms = close_delay_ms;
        self
    }

    /// Render a ticket batch to a printable HTML document
    ///
    /// An empty batch yields a well-formed document with no label
    /// sections.
    pub fn render(&self, tickets: &[Ticket]) -> String {
        let mut body = String::with_capacity(1024 * (tickets.len() + 1));
        for ticket in tickets {
            self.render_label(&mut body, ticket);
        }

        format!(
            "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>FG Tickets</title>\n{}\n</head>\n<body>\n{}{}\n</body>\n</html>\n",
            self.styles(),
            body,
            self.auto_print_script(),
        )
    }

    /// Render one label section
    ///
    /// Every interpolated text field goes through `escape_html`,
    /// independent of any upstream validation.
    fn render_label(&self, out: &mut String, ticket: &Ticket) {
        let p = &ticket.payload;
        out.push_str(&format!(
            concat!(
                "<section class=\"ticket\">\n",
                "  <div class=\"qr-and-info\">\n",
                "    <img class=\"qr\" src=\"{qr}\" alt=\"QR\" />\n",
                "    <div class=\"info\">\n",
                "      <div class=\"line strong\">{part_name}</div>\n",
                "      <div class=\"line\">Part No: <span class=\"mono\">{part_no}</span></div>\n",
                "      <div class=\"line\">Model: <span class=\"mono\">{model}</span></div>\n",
                "      <div class=\"line\">Runner: {runner}</div>\n",
                "      <div class=\"line strong\">SN: <span class=\"mono\">{serial}</span></div>\n",
                "    </div>\n",
                "  </div>\n",
                "  <div class=\"footer\"><span>{ts}</span></div>\n",
                "</section>\n",
            ),
            qr = escape_html(&ticket.qr_url),
            part_name = escape_html(&p.part_name),
            part_no = escape_html(&p.part_no),
            model = escape_html(&p.model),
            runner = escape_html(&p.runner),
            serial = escape_html(&p.unique_no),
            ts = escape_html(&format_timestamp(p.ts)),
        ));
    }

    /// Inline CSS sized for the configured label stock, no margins
    fn styles(&self) -> String {
        format!(
            concat!(
                "<style>\n",
                "@page {{ size: {w}mm {h}mm; margin: 0; }}\n",
                "html, body {{ padding: 0; margin: 0; width: {w}mm; }}\n",
                "body {{ font-family: system-ui, sans-serif; color: #000; }}\n",
                ".ticket {{ width: {w}mm; height: {h}mm; box-sizing: border-box; padding: 2mm;\n",
                "  display: flex; flex-direction: column; justify-content: space-between;\n",
                "  page-break-after: always; }}\n",
                ".qr-and-info {{ display: grid; grid-template-columns: 20mm 1fr; column-gap: 2mm;\n",
                "  align-items: start; }}\n",
                ".qr {{ width: 20mm; height: 20mm; object-fit: cover; }}\n",
                ".info {{ font-size: 10pt; line-height: 1.15; }}\n",
                ".line {{ margin-bottom: 1mm; white-space: nowrap; overflow: hidden;\n",
                "  text-overflow: ellipsis; }}\n",
                ".strong {{ font-weight: 700; }}\n",
                ".mono {{ font-family: ui-monospace, monospace; }}\n",
                ".footer {{ font-size: 8pt; display: flex; justify-content: space-between;\n",
                "  border-top: 1px dashed #000; padding-top: 1mm; }}\n",
                "@media print {{ .ticket {{ break-after: page; }} }}\n",
                "</style>"
            ),
            w = self.width_mm,
            h = self.height_mm,
        )
    }

    /// Self-triggering print directive
    ///
    /// Fires the platform print action once the document (and its QR
    /// images) have loaded, then releases the surface.
    fn auto_print_script(&self) -> String {
        format!(
            concat!(
                "<script>\n",
                "window.addEventListener('load', () => {{\n",
                "  setTimeout(() => {{\n",
                "    try {{ window.print(); }} catch (e) {{}}\n",
                "    setTimeout(() => {{ window.close(); }}, {close});\n",
                "  }}, {print});\n",
                "}});\n",
                "</script>"
            ),
            print = self.print_delay_ms,
            close = self.close_delay_ms,
        )
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(58, 40)
    }
}

/// Escape text for interpolation into HTML
///
/// Covers the markup-breaking characters: `&`, `<`, `>`, `"`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format unix millis as a human-readable local time
fn format_timestamp(ts: i64) -> String {
    if let Some(dt) = chrono::DateTime::from_timestamp_millis(ts) {
        dt.with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    } else {
        "unknown time".to_string()
    }
}

// crates/ss_report/src/render_html.rs
//
// Deterministic, offline HTML renderer. Asset-free (inline CSS only), every
// content string HTML-escaped, section order fixed:
// Cover → Summary → Metrics → Assumptions → Charts → Insights → Disclaimer → Integrity.

use std::fmt::Write as _;

use crate::{ChartTable, KeyValue, ReportModel};

// ------------------------- formatting helpers -------------------------

/// Escape text for HTML (minimal, deterministic).
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

// ------------------------- HTML builder -------------------------

struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    fn new() -> Self {
        Self { buf: String::with_capacity(16 * 1024) }
    }

    fn start(&mut self, title: &str) {
        let _ = write!(
            self.buf,
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <title>{}</title>\
             <style>\
             body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,Arial,sans-serif;margin:24px;}}\
             header{{background:#1a365d;color:#fff;padding:12px 16px}}\
             h1,h2,h3{{margin:0.2em 0;}}\
             .summary{{background:#f0f8ff;padding:8px 12px;border-radius:4px}}\
             .kv ul{{list-style:none;padding-left:0}}\
             .kv li{{margin:2px 0}}\
             .muted{{opacity:0.8}}\
             table{{border-collapse:collapse;margin-bottom:12px}}\
             td,th{{padding:4px 8px;border-bottom:1px solid #ddd;text-align:left}}\
             </style></head><body>",
            esc(title)
        );
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</body></html>");
        self.buf
    }

    fn header(&mut self, brand: &str, title: &str) {
        let _ = write!(self.buf, "<header><h1>{}</h1><p>{}</p></header>", esc(brand), esc(title));
    }

    fn heading(&mut self, level: u8, text: &str) {
        let _ = write!(self.buf, "<h{level}>{}</h{level}>", esc(text));
    }

    fn para(&mut self, class: &str, text: &str) {
        let _ = write!(self.buf, "<p class=\"{}\">{}</p>", esc(class), esc(text));
    }

    fn key_values(&mut self, items: &[KeyValue]) {
        self.buf.push_str("<div class=\"kv\"><ul>");
        for kv in items {
            let _ = write!(self.buf, "<li><b>{}</b>: {}</li>", esc(&kv.key), esc(&kv.value));
        }
        self.buf.push_str("</ul></div>");
    }

    fn table(&mut self, t: &ChartTable) {
        self.heading(3, &t.title);
        self.buf.push_str("<table><thead><tr>");
        for h in &t.headers {
            let _ = write!(self.buf, "<th>{}</th>", esc(h));
        }
        self.buf.push_str("</tr></thead><tbody>");
        for row in &t.rows {
            self.buf.push_str("<tr>");
            for cell in row {
                let _ = write!(self.buf, "<td>{}</td>", esc(cell));
            }
            self.buf.push_str("</tr>");
        }
        self.buf.push_str("</tbody></table>");
    }
}

pub fn render_html(m: &ReportModel) -> String {
    let mut b = HtmlBuilder::new();
    b.start(&format!("{} | {}", m.cover.title, m.cover.scenario_name));

    b.header(&m.cover.brand, &m.cover.title);
    b.heading(2, &m.cover.scenario_name);
    b.para("muted", &m.cover.subtitle);

    b.heading(2, "Executive Summary");
    b.para("summary", &m.summary);

    b.heading(2, "Key Metrics");
    b.key_values(&m.metrics);

    b.heading(2, "Assumptions");
    b.key_values(&m.assumptions);

    b.heading(2, "Charts");
    for t in &m.charts {
        b.table(t);
    }

    b.heading(2, "Potential Benefits");
    b.key_values(&m.insights.benefits);
    b.heading(2, "Considerations & Trade-offs");
    b.key_values(&m.insights.considerations);
    b.heading(2, "Feasibility Assessment");
    b.key_values(&m.insights.feasibility);

    b.heading(3, "Disclaimer");
    b.para("muted", &m.disclaimer);

    b.heading(3, "Integrity");
    b.para(
        "muted",
        &format!(
            "Result {} | Engine {} v{}",
            m.integrity.result_id, m.integrity.engine_name, m.integrity.engine_version
        ),
    );

    b.finish()
}

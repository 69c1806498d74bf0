//! render_json.rs: report JSON renderer.
//! Section order: cover → summary → metrics → assumptions → charts → insights
//! → disclaimer → integrity. Relies on `serde_json`'s `preserve_order` so the
//! insertion order below is the output order.

use serde_json::{Map as JsonMap, Value};

use crate::{ChartTable, KeyValue, ReportModel};

pub fn render_json(m: &ReportModel) -> Value {
    let mut root = obj();

    let mut cover = obj();
    cover.insert("brand".into(), s(&m.cover.brand));
    cover.insert("title".into(), s(&m.cover.title));
    cover.insert("scenario_name".into(), s(&m.cover.scenario_name));
    cover.insert("subtitle".into(), s(&m.cover.subtitle));
    root.insert("cover".into(), Value::Object(cover));

    root.insert("summary".into(), s(&m.summary));
    root.insert("metrics".into(), pairs(&m.metrics));
    root.insert("assumptions".into(), pairs(&m.assumptions));
    root.insert("charts".into(), Value::Array(m.charts.iter().map(chart_json).collect()));

    let mut insights = obj();
    insights.insert("benefits".into(), pairs(&m.insights.benefits));
    insights.insert("considerations".into(), pairs(&m.insights.considerations));
    insights.insert("feasibility".into(), pairs(&m.insights.feasibility));
    root.insert("insights".into(), Value::Object(insights));

    root.insert("disclaimer".into(), s(&m.disclaimer));

    let mut integrity = obj();
    integrity.insert("result_id".into(), s(&m.integrity.result_id));
    integrity.insert("engine_name".into(), s(&m.integrity.engine_name));
    integrity.insert("engine_version".into(), s(&m.integrity.engine_version));
    root.insert("integrity".into(), Value::Object(integrity));

    Value::Object(root)
}

/* ----------------------- helpers ----------------------- */

#[inline]
fn obj() -> JsonMap<String, Value> {
    JsonMap::new()
}

#[inline]
fn s(x: &str) -> Value {
    Value::String(x.to_string())
}

/// `[{label, value}, ...]` in model order.
fn pairs(items: &[KeyValue]) -> Value {
    Value::Array(
        items
            .iter()
            .map(|kv| {
                let mut o = obj();
                o.insert("label".into(), s(&kv.key));
                o.insert("value".into(), s(&kv.value));
                Value::Object(o)
            })
            .collect(),
    )
}

fn chart_json(c: &ChartTable) -> Value {
    let mut o = obj();
    o.insert("title".into(), s(&c.title));
    o.insert("headers".into(), Value::Array(c.headers.iter().map(|h| s(h)).collect()));
    o.insert(
        "rows".into(),
        Value::Array(
            c.rows
                .iter()
                .map(|r| Value::Array(r.iter().map(|cell| s(cell)).collect()))
                .collect(),
        ),
    );
    Value::Object(o)
}

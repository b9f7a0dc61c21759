// ── Hub system properties ──

use serde::Serialize;

/// A named hub property such as `ehc.gw.host.name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemProperty {
    pub name: String,
    pub value: Option<String>,
}

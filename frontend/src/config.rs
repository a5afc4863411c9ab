use shared::{CrashField, RenderPolicy};
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

pub const DEFAULT_ENDPOINT: &str = "/predict";

/// Ids of the page elements outside the seventeen inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementIds {
    pub form: &'static str,
    pub result: &'static str,
    pub confidence: &'static str,
    pub popup: &'static str,
    pub close: &'static str,
    pub error: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "predictForm",
            result: "result",
            confidence: "confidence",
            popup: "popup",
            close: "close",
            error: "error",
        }
    }
}

/// One element handle per form field, created once at startup.
#[derive(Clone)]
pub struct FieldBindings {
    refs: HashMap<CrashField, NodeRef>,
}

impl FieldBindings {
    pub fn new() -> Self {
        Self {
            refs: CrashField::iter().map(|f| (f, NodeRef::default())).collect(),
        }
    }

    pub fn node_ref(&self, field: CrashField) -> NodeRef {
        self.refs.get(&field).cloned().unwrap_or_default()
    }

    /// Current text of the bound input or select. Unmounted elements read
    /// as empty.
    pub fn read(&self, field: CrashField) -> String {
        let Some(node_ref) = self.refs.get(&field) else {
            return String::new();
        };
        if let Some(input) = node_ref.cast::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = node_ref.cast::<HtmlSelectElement>() {
            select.value()
        } else {
            log::warn!("No element mounted for `{}`", field.element_id());
            String::new()
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub policy: RenderPolicy,
    pub ids: ElementIds,
    pub bindings: FieldBindings,
}

impl AppConfig {
    /// Reads the build-time overrides `CRASH_PREDICT_ENDPOINT` and
    /// `CRASH_RENDER_POLICY`.
    pub fn from_env() -> Self {
        Self::with_overrides(
            option_env!("CRASH_PREDICT_ENDPOINT"),
            option_env!("CRASH_RENDER_POLICY"),
        )
    }

    pub fn with_overrides(endpoint: Option<&str>, policy: Option<&str>) -> Self {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        let policy = match policy.map(RenderPolicy::from_str) {
            Some(Ok(policy)) => policy,
            Some(Err(_)) => {
                log::warn!("Unknown render policy, falling back to {}", RenderPolicy::default());
                RenderPolicy::default()
            }
            None => RenderPolicy::default(),
        };

        Self {
            endpoint,
            policy,
            ids: ElementIds::default(),
            bindings: FieldBindings::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_post_to_predict_and_render_last_resolved() {
        let config = AppConfig::with_overrides(None, None);
        assert_eq!(config.endpoint, "/predict");
        assert_eq!(config.policy, RenderPolicy::LastResolved);
        assert_eq!(config.ids.form, "predictForm");
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::with_overrides(Some(" /api/predict "), Some("latest-issued"));
        assert_eq!(config.endpoint, "/api/predict");
        assert_eq!(config.policy, RenderPolicy::LatestIssued);
    }

    #[test]
    fn blank_endpoint_and_unknown_policy_fall_back() {
        let config = AppConfig::with_overrides(Some("  "), Some("sometimes"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.policy, RenderPolicy::LastResolved);
    }

    #[test]
    fn every_field_has_a_binding() {
        let bindings = FieldBindings::new();
        assert_eq!(bindings.refs.len(), 17);
    }
}

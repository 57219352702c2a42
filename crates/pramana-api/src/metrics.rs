//! Prometheus registry for the `/metrics` endpoint.
use pramana_validators::IdKind;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    validations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let validations = IntCounterVec::new(
            Opts::new(
                "pramana_validations_total",
                "Identifier validations by kind and outcome",
            ),
            &["kind", "outcome"],
        )?;
        registry.register(Box::new(validations.clone()))?;

        Ok(Self {
            registry,
            validations,
        })
    }

    pub fn record_validation(&self, kind: IdKind, valid: bool) {
        let outcome = if valid { "valid" } else { "invalid" };
        self.validations
            .with_label_values(&[kind.as_str(), outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_kind_and_outcome() {
        let metrics = Metrics::new().unwrap();
        metrics.record_validation(IdKind::Pan, true);
        metrics.record_validation(IdKind::Pan, true);
        metrics.record_validation(IdKind::Gstin, false);

        let text = metrics.encode().unwrap();
        assert!(text.contains(r#"pramana_validations_total{kind="pan",outcome="valid"} 2"#));
        assert!(text.contains(r#"pramana_validations_total{kind="gstin",outcome="invalid"} 1"#));
    }
}

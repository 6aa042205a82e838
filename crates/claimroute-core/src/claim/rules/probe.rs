//! Label-anchored pattern probes and first-success fallback chains.

use regex::Regex;

use super::FieldExtractor;

/// A single regex probe whose first capture group is the field value.
///
/// The captured text is trimmed; a blank capture is treated as a miss.
#[derive(Clone, Copy)]
pub struct Probe {
    pattern: &'static Regex,
}

impl Probe {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }
}

impl FieldExtractor for Probe {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let value = caps.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Ordered alternative probes for one field. The first probe that yields a
/// value wins; later probes are not consulted.
#[derive(Clone)]
pub struct ProbeChain {
    probes: Vec<Probe>,
}

impl ProbeChain {
    pub fn new(probes: impl IntoIterator<Item = &'static Regex>) -> Self {
        Self {
            probes: probes.into_iter().map(Probe::new).collect(),
        }
    }

    /// Number of candidate probes in the chain.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl FieldExtractor for ProbeChain {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.probes.iter().find_map(|probe| probe.extract(text))
    }
}

/// Collapse a multi-line capture into a single trimmed line.
///
/// `\r\n`, `\n` and bare `\r` each count as one line break.
pub fn normalize_description(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::rules::patterns::{CLAIMANT, DRIVER_NAME, LOOSE_TIME, TIME_OF_LOSS};

    #[test]
    fn test_probe_trims_capture() {
        let probe = Probe::new(&CLAIMANT);
        assert_eq!(
            probe.extract("CLAIMANT:   Mary Major   \nNEXT"),
            Some("Mary Major".to_string())
        );
    }

    #[test]
    fn test_probe_miss() {
        assert_eq!(Probe::new(&CLAIMANT).extract("nothing here"), None);
    }

    #[test]
    fn test_chain_prefers_first_probe() {
        let chain = ProbeChain::new([&*CLAIMANT, &*DRIVER_NAME]);
        let text = "DRIVER'S NAME: Dan Driver\nCLAIMANT: Carla Claimant";

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.extract(text), Some("Carla Claimant".to_string()));
    }

    #[test]
    fn test_chain_falls_back() {
        let chain = ProbeChain::new([&*TIME_OF_LOSS, &*LOOSE_TIME]);

        assert_eq!(
            chain.extract("DATE OF LOSS: 01/15/2025 4:45 PM"),
            Some("4:45 PM".to_string())
        );
        assert_eq!(chain.extract("no clock here"), None);
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(
            normalize_description("  Hit a deer\non the highway\n"),
            "Hit a deer on the highway"
        );
        assert_eq!(
            normalize_description("Hit a deer\r\non the highway\rnear exit 4\r\n"),
            "Hit a deer on the highway near exit 4"
        );
    }
}

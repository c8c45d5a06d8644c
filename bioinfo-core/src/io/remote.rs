//! UniProt record retrieval
//!
//! Fetches protein records as FASTA over blocking HTTP and turns them into
//! [`AminoAcidSequence`] values. Every transport or decoding failure is
//! reported as [`BioError::Network`].

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::config::RemoteConfig;
use crate::error::{BioError, BioResult};
use crate::io::fasta::FastaReader;
use crate::sequence::AminoAcidSequence;

const ACCESSION_PATTERN: &str =
    r"^(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9](?:[A-Z][A-Z0-9]{2}[0-9]){1,2})$";

fn accession_regex() -> &'static Regex {
    static ACCESSION: OnceLock<Regex> = OnceLock::new();
    ACCESSION.get_or_init(|| Regex::new(ACCESSION_PATTERN).expect("accession pattern is valid"))
}

/// Extract the UniProt accession from an identifier.
///
/// Entry names such as `P07204_TRBM_HUMAN` are cut at the first `_`.
pub fn accession_from_identifier(identifier: &str) -> BioResult<&str> {
    let accession = identifier.trim().split('_').next().unwrap_or_default();

    if accession_regex().is_match(accession) {
        Ok(accession)
    } else {
        Err(BioError::invalid_input(format!(
            "'{identifier}' is not a UniProt accession"
        )))
    }
}

/// Blocking client for UniProt FASTA records
pub struct UniProtClient {
    agent: ureq::Agent,
    base_url: String,
}

impl UniProtClient {
    pub fn new(config: &RemoteConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build();

        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    /// URL of the FASTA record for `accession`
    pub fn record_url(&self, accession: &str) -> String {
        format!("{}/{}.fasta", self.base_url.trim_end_matches('/'), accession)
    }

    /// Fetch a single record by accession or entry name
    pub fn fetch(&self, identifier: &str) -> BioResult<AminoAcidSequence> {
        let accession = accession_from_identifier(identifier)?;
        let url = self.record_url(accession);
        log::info!("Fetching {} from {}", identifier, url);

        let body = match self.agent.get(&url).call() {
            Ok(response) => response
                .into_string()
                .map_err(|e| BioError::network(accession, format!("failed to read body: {e}")))?,
            Err(ureq::Error::Status(code, _)) => {
                log::warn!("{} returned HTTP {}", url, code);
                return Err(BioError::network(accession, format!("HTTP status {code}")));
            }
            Err(e) => {
                log::warn!("Request to {} failed: {}", url, e);
                return Err(BioError::network(accession, e.to_string()));
            }
        };

        let records: Vec<AminoAcidSequence> = FastaReader::parse_str(&body)
            .map_err(|e| BioError::network(accession, format!("malformed record: {e}")))?;

        records
            .into_iter()
            .next()
            .ok_or_else(|| BioError::network(accession, "response contained no record"))
    }

    /// Fetch several records, stopping at the first failure
    pub fn fetch_all<S: AsRef<str>>(&self, identifiers: &[S]) -> BioResult<Vec<AminoAcidSequence>> {
        identifiers
            .iter()
            .map(|identifier| self.fetch(identifier.as_ref()))
            .collect()
    }
}

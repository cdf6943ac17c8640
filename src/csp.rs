use serde_derive::{Deserialize, Serialize};

/// Root node of a CSP violation event.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Csp {
    #[serde(rename = "csp-report", default)]
    pub report: Report,
}

/// Details of a CSP violation event. The wire keys are the hyphenated
/// lower-case names browsers send; absent fields decode to empty strings.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Report {
    pub document_uri: String,
    pub referrer: String,
    pub violated_directive: String,
    pub original_policy: String,
    pub blocked_uri: String,
}

/// Verdict returned by the face verification backend for one image pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub verified: bool,
    pub distance: Option<f64>,
    pub threshold: Option<f64>,
}

/// The first candidate that verified against the captured photo.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch {
    pub url: String,
    pub distance: Option<f64>,
    pub threshold: Option<f64>,
}

impl CandidateMatch {
    pub fn new(url: impl Into<String>, verification: &Verification) -> Self {
        Self {
            url: url.into(),
            distance: verification.distance,
            threshold: verification.threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched(CandidateMatch),
    NoMatch,
}

impl From<Option<CandidateMatch>> for MatchOutcome {
    fn from(found: Option<CandidateMatch>) -> Self {
        match found {
            Some(candidate) => MatchOutcome::Matched(candidate),
            None => MatchOutcome::NoMatch,
        }
    }
}

/// Which side of a comparison a transient image holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Captured,
    Candidate,
}

impl ImageRole {
    /// Prefix used when naming the transient file.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ImageRole::Captured => "temp_captured_",
            ImageRole::Candidate => "temp_url_",
        }
    }
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRole::Captured => write!(f, "captured"),
            ImageRole::Candidate => write!(f, "candidate"),
        }
    }
}

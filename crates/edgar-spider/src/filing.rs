use serde::Serialize;

/// One qualifying row of a listing page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FilingReference {
    pub filing_date: String,
    pub interactive_data_url: String,
}

/// The Excel export of one filing's financial statements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentReference {
    pub filing_date: String,
    pub document_url: String,
}

impl FilingReference {
    pub fn new(filing_date: impl Into<String>, interactive_data_url: impl Into<String>) -> Self {
        Self {
            filing_date: filing_date.into(),
            interactive_data_url: interactive_data_url.into(),
        }
    }
}

impl DocumentReference {
    pub fn new(filing_date: impl Into<String>, document_url: impl Into<String>) -> Self {
        Self {
            filing_date: filing_date.into(),
            document_url: document_url.into(),
        }
    }
}

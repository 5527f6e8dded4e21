//! Document-extraction collaborator boundary
//!
//! The wider system can pre-fill a visitor's fields from a scanned ID
//! document via an external recognition service. That service is modeled
//! here as the `DocumentExtractor` trait; this crate never talks to a
//! network itself. The collaborator returns loosely-typed data, so the
//! boundary validates and coerces it into a `VisitorPatch` (unknown or
//! malformed fields are dropped, not merged), and a total failure leaves
//! the visitor exactly as it was.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Gender, Visitor, VisitorPatch};

/// Failure of the external document-recognition collaborator
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document bytes could not be processed
    #[error("Malformed document payload: {0}")]
    Malformed(String),

    /// The recognition service was unreachable or returned garbage
    #[error("Extraction service failure: {0}")]
    Service(String),
}

/// External collaborator that reads visitor fields off a scanned
/// identity document
pub trait DocumentExtractor {
    /// Extract visitor fields from raw document bytes.
    ///
    /// Implementations own any timeout or retry policy; the core only
    /// sees a result or an `ExtractionError`.
    fn extract_visitor_fields(
        &self,
        document_bytes: &[u8],
        mime_type: &str,
    ) -> Result<VisitorPatch, ExtractionError>;
}

/// Coerce a collaborator's loosely-typed payload into a visitor patch.
///
/// Expects the recognition service's JSON shape: `name`, `address`,
/// `phone`, `idNumber`, `gender` (one of the three known labels), and
/// `dob` (`YYYY-MM-DD`). Anything missing, of the wrong type, or
/// unparseable is dropped rather than trusted.
pub fn patch_from_value(value: &Value) -> VisitorPatch {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_owned)
    };

    VisitorPatch {
        name: text("name"),
        address: text("address"),
        phone: text("phone"),
        id_number: text("idNumber"),
        gender: value
            .get("gender")
            .and_then(Value::as_str)
            .and_then(Gender::parse_label),
        date_of_birth: value
            .get("dob")
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
    }
}

/// Merge an extraction outcome into a visitor.
///
/// On success the patch goes through the ordinary update path (age is
/// re-derived when a date of birth was extracted). On failure the
/// visitor's fields remain whatever they were before the attempt; the
/// error never propagates into the authoring flow. Returns whether a
/// patch was applied.
pub fn merge_extraction(
    visitor: &mut Visitor,
    outcome: Result<VisitorPatch, ExtractionError>,
    today: NaiveDate,
) -> bool {
    match outcome {
        Ok(patch) => {
            visitor.apply(&patch, today);
            true
        }
        Err(_) => false,
    }
}

/// Run an extractor against a scanned document and merge the result.
///
/// Convenience wrapper combining `extract_visitor_fields` with
/// `merge_extraction`'s failure tolerance.
pub fn scan_into_visitor<E: DocumentExtractor + ?Sized>(
    extractor: &E,
    document_bytes: &[u8],
    mime_type: &str,
    visitor: &mut Visitor,
    today: NaiveDate,
) -> bool {
    let outcome = extractor.extract_visitor_fields(document_bytes, mime_type);
    merge_extraction(visitor, outcome, today)
}

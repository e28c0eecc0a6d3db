//! Field collection over the host page.

/// Read access to named input fields on the host page.
///
/// The host document is an external collaborator; this is the only thing the
/// payload builders are allowed to see of it.
pub trait FieldSource {
    /// Returns the current string value of the element, if the element exists
    /// and carries one.
    fn value(&self, element_id: &str) -> Option<String>;
}

/// Collects one field value, treating a missing element or value as empty.
///
/// Collection never blocks a submission: there is no validation layer in
/// front of the request, so an absent field simply contributes `""`.
pub fn collect(source: &dyn FieldSource, element_id: &str) -> String {
    source.value(element_id).unwrap_or_default()
}

use crate::form::form_model::FormComponent;

/// Structural fingerprint of a component list: sha1 of its canonical
/// JSON. Deep-equal lists fingerprint identically, which is what lets
/// the session memoize compiled schemas instead of recompiling on every
/// keystroke.
pub fn component_fingerprint(components: &[FormComponent]) -> String {
    use sha1::{Digest, Sha1};

    let canonical = serde_json::to_string(components).unwrap_or_default();

    let mut hasher = Sha1::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

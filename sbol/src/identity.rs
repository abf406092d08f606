//! Identities, namespaces, and display ids.
//!
//! Every SBOL3 object is named by an IRI. Top-level objects live under a
//! namespace (`https://github.com/Gonza10V/j23101`); owned children extend
//! their parent's identity with a class name and counter
//! (`.../j23101_in_podd/SubComponent1/Range1`).

use crate::error::SbolError;

/// Builds a top-level identity from a namespace and a name.
///
/// An absolute IRI (anything containing `://`) is used as-is.
///
/// # Errors
///
/// Returns [`SbolError::NoNamespace`] for a relative name without a namespace,
/// and [`SbolError::InvalidDisplayId`] if the resulting last segment is not a
/// valid display id.
pub fn make_identity(namespace: Option<&str>, name: &str) -> Result<String, SbolError> {
    let identity = if name.contains("://") {
        name.to_owned()
    } else {
        let namespace = namespace.ok_or_else(|| SbolError::NoNamespace(name.to_owned()))?;
        format!("{}/{}", namespace.trim_end_matches('/'), name)
    };
    let display_id = display_id_of(&identity);
    if !is_valid_display_id(display_id) {
        return Err(SbolError::InvalidDisplayId {
            display_id: display_id.to_owned(),
            identity,
        });
    }
    Ok(identity)
}

/// The last segment of an identity, after the final `/` or `#`.
#[must_use]
pub fn display_id_of(identity: &str) -> &str {
    identity
        .rsplit(['/', '#'])
        .next()
        .unwrap_or(identity)
}

/// Everything before the last `/` of an identity.
#[must_use]
pub fn namespace_of(identity: &str) -> &str {
    identity.rsplit_once('/').map_or(identity, |(ns, _)| ns)
}

/// SBOL3 display id rule: `^[A-Za-z_][A-Za-z0-9_]*$`.
#[must_use]
pub fn is_valid_display_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Identity of the `index`-th owned child of class `type_name`
/// (`parent/SubComponent1`). Counters start at 1.
#[must_use]
pub fn child_identity(parent: &str, type_name: &str, index: usize) -> String {
    format!("{parent}/{type_name}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_join_the_namespace() {
        let id = make_identity(Some("https://github.com/Gonza10V/"), "j23101_in_podd");
        assert_eq!(id.as_deref(), Ok("https://github.com/Gonza10V/j23101_in_podd"));
    }

    #[test]
    fn absolute_names_are_kept() {
        let id = make_identity(None, "https://example.org/lab/pX");
        assert_eq!(id.as_deref(), Ok("https://example.org/lab/pX"));
    }

    #[test]
    fn relative_name_without_namespace_fails() {
        assert_eq!(
            make_identity(None, "j23101"),
            Err(SbolError::NoNamespace("j23101".to_owned()))
        );
    }

    #[test]
    fn bad_display_id_is_rejected() {
        assert!(matches!(
            make_identity(Some("https://ex.org"), "1st-part"),
            Err(SbolError::InvalidDisplayId { .. })
        ));
    }

    #[test]
    fn segments() {
        let id = "https://github.com/Gonza10V/j23101_in_podd/SubComponent1";
        assert_eq!(display_id_of(id), "SubComponent1");
        assert_eq!(namespace_of(id), "https://github.com/Gonza10V/j23101_in_podd");
        assert_eq!(display_id_of("http://sbols.org/v3#Range"), "Range");
        assert_eq!(
            child_identity("https://ex.org/c", "Range", 2),
            "https://ex.org/c/Range2"
        );
    }

    #[test]
    fn display_id_rule() {
        assert!(is_valid_display_id("_j23101"));
        assert!(is_valid_display_id("podd_backbone"));
        assert!(!is_valid_display_id(""));
        assert!(!is_valid_display_id("9abc"));
        assert!(!is_valid_display_id("a.b"));
    }
}

//! Dependency specifier normalization.
//!
//! PEP 508-style dependency strings carry extras (`pkg[grpc,tls]`) and
//! version constraints (`pkg>=2.0,<3.0`). Workspace membership is keyed
//! by bare package name, so both decorations must be stripped before a
//! specifier can be looked up.

/// Characters that begin a version-constraint suffix.
const VERSION_OPERATORS: [char; 5] = ['<', '>', '=', '!', '~'];

/// Reduce a raw dependency specifier to its bare package name:
/// `uvicorn[standard]>=0.20` becomes `uvicorn`.
///
/// Strips the extras suffix first, then the version constraint, then
/// surrounding whitespace. The extras bracket must be stripped before
/// scanning for operators so that characters inside the bracket never
/// truncate the name early.
pub fn base_name(spec: &str) -> &str {
    let spec = match spec.find('[') {
        Some(idx) => &spec[..idx],
        None => spec,
    };

    let spec = match spec.find(VERSION_OPERATORS) {
        Some(idx) => &spec[..idx],
        None => spec,
    };

    spec.trim()
}

use crate::save::CaseSensitivity;

/// Case policy of the host's native filesystem.
///
/// Windows is treated as case insensitive and every other OS as case
/// sensitive, even though macOS volumes are usually formatted insensitive.
/// Set `case_sensitivity` explicitly in the config for those.
pub fn host_case_sensitivity() -> CaseSensitivity {
    if cfg!(windows) {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    }
}

#[test]
fn host_case_sensitivity_follows_target_os() {
    let expected = if cfg!(windows) {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    };
    assert_eq!(host_case_sensitivity(), expected);
}

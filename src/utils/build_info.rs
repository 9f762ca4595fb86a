/// Build metadata captured by `build.rs` at compile time.
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn current() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("ONBOARD_CORE_BUILD_HASH"),
        git_status: env!("ONBOARD_CORE_BUILD_STATUS"),
        timestamp: env!("ONBOARD_CORE_BUILD_TIMESTAMP"),
        target: env!("ONBOARD_CORE_BUILD_TARGET"),
        profile: env!("ONBOARD_CORE_BUILD_PROFILE"),
        rustc: env!("ONBOARD_CORE_BUILD_RUSTC"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_is_populated() {
        let info = current();
        assert!(!info.version.is_empty());
        assert!(!info.target.is_empty());
    }
}

//! Shared body of the gateway binaries' `build.rs`.
//!
//! Exports `BUILD_DATE`, `BUILD_TIME`, `GIT_COMMIT_SHORT`, `GIT_DIRTY` and
//! `GATEWAY_USER_AGENT` to the crate being built.

use std::env;

pub fn emit() {
    build_data::set_GIT_COMMIT_SHORT();
    build_data::set_GIT_DIRTY();
    build_data::set_BUILD_DATE();
    build_data::set_BUILD_TIME();

    let pkg_name = env::var("CARGO_PKG_NAME").unwrap_or_default();
    let pkg_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let git = match (build_data::get_git_branch(), build_data::get_git_commit_short()) {
        (Ok(branch), Ok(commit)) => Some(GitState {
            on_main: branch == "main",
            commit,
            dirty: build_data::get_git_dirty().unwrap_or(true),
        }),
        _ => {
            println!("cargo:warning=Unable to read git info. Is this a git repository?");
            None
        }
    };
    println!("cargo:rustc-env=GATEWAY_USER_AGENT={}", user_agent(&pkg_name, &pkg_version, git.as_ref()));
    build_data::no_debug_rebuilds();
}

struct GitState {
    on_main: bool,
    commit: String,
    dirty: bool,
}

/// `hello-gateway` 0.1.0 on a feature branch becomes `Gateway.Hello/0.1.0+a12dd5`.
fn user_agent(pkg_name: &str, pkg_version: &str, git: Option<&GitState>) -> String {
    let variant = pkg_name.strip_suffix("-gateway").unwrap_or(pkg_name);
    let mut chars = variant.chars();
    let variant: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("Gateway.{variant}/{}", version(pkg_version, git))
}

fn version(pkg_version: &str, git: Option<&GitState>) -> String {
    match git {
        Some(git) if !git.on_main => {
            let snapshot = if git.dirty { "-SNAPSHOT" } else { "" };
            format!("{pkg_version}{snapshot}+{}", git.commit)
        }
        _ => pkg_version.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::{user_agent, GitState};

    fn git(on_main: bool, dirty: bool) -> GitState {
        GitState { on_main, commit: "a12dd5".to_string(), dirty }
    }

    #[test]
    fn main_branch_reports_plain_version() {
        assert_eq!(user_agent("hello-gateway", "0.1.0", Some(&git(true, true))), "Gateway.Hello/0.1.0");
    }

    #[test]
    fn other_branch_appends_commit() {
        assert_eq!(user_agent("welcome-gateway", "0.1.0", Some(&git(false, false))), "Gateway.Welcome/0.1.0+a12dd5");
        assert_eq!(user_agent("welcome-gateway", "0.1.0", Some(&git(false, true))), "Gateway.Welcome/0.1.0-SNAPSHOT+a12dd5");
    }

    #[test]
    fn no_git_checkout() {
        assert_eq!(user_agent("hello-gateway", "0.2.0", None), "Gateway.Hello/0.2.0");
    }
}

use axum::{http::{header, HeaderValue}, middleware::map_response, response::Response, Router};
use tracing::info;

/// Build metadata of the running binary, filled in by its `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub pkg_name: &'static str,
    pub version: &'static str,
    pub build_date: &'static str,
    pub build_time: &'static str,
    pub git_commit_short: &'static str,
    pub git_dirty: &'static str,
    pub user_agent: &'static str,
}

/// Captures the calling crate's build metadata.
#[macro_export]
macro_rules! build_info {
    () => {
        $crate::banner::BuildInfo {
            pkg_name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_date: env!("BUILD_DATE"),
            build_time: env!("BUILD_TIME"),
            // unset when building outside a git checkout
            git_commit_short: match option_env!("GIT_COMMIT_SHORT") { Some(v) => v, None => "unknown" },
            git_dirty: match option_env!("GIT_DIRTY") { Some(v) => v, None => "true" },
            user_agent: env!("GATEWAY_USER_AGENT"),
        }
    };
}

impl BuildInfo {
    pub fn commit(&self) -> &'static str {
        match self.git_dirty {
            "false" => self.git_commit_short,
            _ => "SNAPSHOT",
        }
    }
}

pub fn print_banner(build: &BuildInfo) {
    info!(
        "👋 Gateway ({}) v{} (built {} {}, {}) starting up ...",
        build.pkg_name,
        build.version,
        build.build_date,
        build.build_time,
        build.commit()
    );
}

/// Adds a `server` header to every response that does not have one yet.
pub fn set_server_header(router: Router, user_agent: &'static str) -> Router {
    let server = HeaderValue::from_static(user_agent);
    router.layer(map_response(move |mut response: Response| {
        let server = server.clone();
        async move {
            if !response.headers().contains_key(header::SERVER) {
                response.headers_mut().insert(header::SERVER, server);
            }
            response
        }
    }))
}

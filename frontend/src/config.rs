/// Configuration for the admin console frontend.
///
/// API base URL, read from the environment at compile time with a local
/// development default. Deployments set `TATVAPADA_API_BASE` in the build
/// workflow.
pub const API_BASE: &str = match option_env!("TATVAPADA_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

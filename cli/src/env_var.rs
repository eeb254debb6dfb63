use serde::Deserialize;

#[derive(Deserialize)]
pub struct EnvVar {
    // backend settings
    pub base_url: String,

    // session settings
    pub session_cookie: Option<String>,
    pub csrf_cookie_name: Option<String>,
    pub csrf_header_name: Option<String>,
}

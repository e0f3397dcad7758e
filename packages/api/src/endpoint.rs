//! The fixed contract of each backend call.

use reqwest::Method;

/// One of the seven calls the pages make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    Details,
    Update,
    ChangePassword,
    Logout,
    Activity,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register | Endpoint::Login | Endpoint::Logout => Method::POST,
            Endpoint::Details | Endpoint::Activity => Method::GET,
            Endpoint::Update | Endpoint::ChangePassword => Method::PUT,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Register => "/user/register",
            Endpoint::Login => "/user/login",
            Endpoint::Details => "/user/details",
            Endpoint::Update => "/user/update",
            Endpoint::ChangePassword => "/user/change-password",
            Endpoint::Logout => "/user/logout",
            Endpoint::Activity => "/user/activity",
        }
    }

    /// Whether the session cookie must accompany the request. Login needs it
    /// so the browser accepts the cookie the response sets.
    pub fn includes_credentials(&self) -> bool {
        !matches!(self, Endpoint::Register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_table() {
        let table = [
            (Endpoint::Register, Method::POST, "/user/register", false),
            (Endpoint::Login, Method::POST, "/user/login", true),
            (Endpoint::Details, Method::GET, "/user/details", true),
            (Endpoint::Update, Method::PUT, "/user/update", true),
            (Endpoint::ChangePassword, Method::PUT, "/user/change-password", true),
            (Endpoint::Logout, Method::POST, "/user/logout", true),
            (Endpoint::Activity, Method::GET, "/user/activity", true),
        ];
        for (endpoint, method, path, credentials) in table {
            assert_eq!(endpoint.method(), method, "{endpoint:?}");
            assert_eq!(endpoint.path(), path, "{endpoint:?}");
            assert_eq!(endpoint.includes_credentials(), credentials, "{endpoint:?}");
        }
    }
}

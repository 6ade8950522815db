//! The CORS response headers the preflight check looks for.

use crate::http::HeaderMap;

pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";

/// Checked and reported in this order, whatever order the server uses.
pub const CORS_CHECKLIST: [&str; 4] = [
    ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_CREDENTIALS,
];

/// Presence of one checklist header in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCheck {
    pub name: &'static str,
    /// Header value if the response carried it.
    pub value: Option<String>,
}

impl HeaderCheck {
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// One check per checklist entry, in checklist order.
pub fn check_headers(headers: &HeaderMap) -> Vec<HeaderCheck> {
    CORS_CHECKLIST
        .iter()
        .map(|&name| HeaderCheck {
            name,
            value: headers.get(name).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_checklist_order_not_response_order() {
        let mut h = HeaderMap::new();
        h.push("access-control-allow-credentials", "true");
        h.push("ACCESS-CONTROL-ALLOW-ORIGIN", "https://app.example.com");
        let checks = check_headers(&h);
        let names: Vec<_> = checks.iter().map(|c| c.name).collect();
        assert_eq!(names, CORS_CHECKLIST);
        assert_eq!(checks[0].value.as_deref(), Some("https://app.example.com"));
        assert!(!checks[1].is_present());
        assert!(!checks[2].is_present());
        assert_eq!(checks[3].value.as_deref(), Some("true"));
    }

    #[test]
    fn empty_headers_all_missing() {
        let checks = check_headers(&HeaderMap::new());
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| !c.is_present()));
    }
}

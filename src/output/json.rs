//! JSON output of a calculation.

use crate::models::Calculation;

/// Pretty-printed JSON object with dotted addresses and CIDR strings.
pub fn render_json(calc: &Calculation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(calc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::compute;
    use serde_json::Value;

    #[test]
    fn test_render_json() {
        let json = render_json(&compute("192.168.1.10", 24).unwrap()).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["address"], "192.168.1.10");
        assert_eq!(v["prefix"], 24);
        assert_eq!(v["mask"], "255.255.255.0");
        assert_eq!(v["network"], "192.168.1.0");
        assert_eq!(v["first"], "192.168.1.1");
        assert_eq!(v["total_hosts"], 254);
        assert!(v["overflow"].is_null());
    }

    #[test]
    fn test_render_json_overflow() {
        let json = render_json(&compute("172.31.255.1", 8).unwrap()).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["overflow"]["subnet"], "172.0.0.0/8");
        assert_eq!(v["overflow"]["block"], "172.16.0.0/12");
    }
}

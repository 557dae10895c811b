use serde::{Deserialize, Serialize};

/// Strings the gateway reports about itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub bot_name: String,
    pub banner_message: String,
    pub service_name: String,
    pub platform: String,
    pub website: String,
    pub developer: String,
    /// Reported as `user` when an `/execute` body omits it.
    pub default_user: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            bot_name: "🎭 EMOTE BOT".into(),
            banner_message: "🎭 EMOTE BOT API - BIG BULL".into(),
            service_name: "emote_bot_api".into(),
            platform: "Katabump".into(),
            website: "Netflixy".into(),
            developer: "ABHI THE BIG BULL".into(),
            default_user: "netflixy_user".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_identity_keeps_other_defaults() {
        let decoded: IdentityConfig = toml::from_str(r#"website = "example.org""#).unwrap();
        assert_eq!(decoded.website, "example.org");
        assert_eq!(decoded.default_user, "netflixy_user");
        assert_eq!(decoded.service_name, "emote_bot_api");
    }
}

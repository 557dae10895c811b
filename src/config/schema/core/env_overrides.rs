use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port_str) = std::env::var("EMOTEBOT_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.trim().parse::<u16>()
        {
            self.gateway.port = port;
        }

        // Plain `HOST` is not read: shells and containers set it to the hostname.
        if let Ok(host) = std::env::var("EMOTEBOT_HOST")
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(user) = std::env::var("EMOTEBOT_DEFAULT_USER")
            && !user.is_empty()
        {
            self.identity.default_user = user;
        }
    }
}

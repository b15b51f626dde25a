#[cfg(test)]
mod tests {
    use std::env;

    use crate::config::Config;

    #[test]
    fn falls_back_to_defaults_when_nothing_is_set() {
        // Single test so the env mutations cannot race a parallel reader.
        env::remove_var("MONGODB_URL");
        env::remove_var("DATABASE_NAME");
        env::remove_var("SERVER_ADDRESS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "performance_platform");
        assert_eq!(config.server_address, "0.0.0.0:8000");
    }
}

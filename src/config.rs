use dotenvy;

#[derive(Debug)]
pub struct AppConfig {
    pub demo_mode: bool,
    pub demo_storage_file: String,
    pub demo_latency_ms: u64,
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub jwt_secret: String,
    pub is_development: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let demo_mode = std::env::var("DEMO_MODE")
            .map(|v| v.eq("true"))
            .unwrap_or(false);
        let demo_storage_file =
            std::env::var("DEMO_STORAGE_FILE").unwrap_or("demo_storage.json".to_string());
        let demo_latency_ms: u64 = std::env::var("DEMO_LATENCY_MS")
            .unwrap_or("100".to_string())
            .parse()
            .expect("DEMO_LATENCY_MS should be number");

        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").unwrap_or("mem://".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").expect("Missing JWT_SECRET in env");

        let is_development = std::env::var("DEVELOPMENT")
            .expect("set DEVELOPMENT env var")
            .eq("true");

        Self {
            demo_mode,
            demo_storage_file,
            demo_latency_ms,
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            jwt_secret,
            is_development,
        }
    }
}
